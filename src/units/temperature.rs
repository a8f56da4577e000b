//! Pairwise temperature formulas. Temperature has no shared linear factor,
//! so each of the six direction pairs gets its own closed form.

use anyhow::{Result, anyhow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    pub fn parse(s: &str) -> Result<TempUnit> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" | "°c" => Ok(TempUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Ok(TempUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TempUnit::Kelvin),
            other => Err(anyhow!("Unknown temperature unit: {}", other)),
        }
    }
}

pub fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn c_to_k(c: f64) -> f64 {
    c + 273.15
}

pub fn k_to_c(k: f64) -> f64 {
    k - 273.15
}

pub fn f_to_k(f: f64) -> f64 {
    c_to_k(f_to_c(f))
}

pub fn k_to_f(k: f64) -> f64 {
    c_to_f(k_to_c(k))
}

/// Convert a temperature between unit ids. Identity when both ids name the
/// same unit, so no rounding is introduced.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    use TempUnit::*;
    let from = TempUnit::parse(from)?;
    let to = TempUnit::parse(to)?;
    Ok(match (from, to) {
        (Celsius, Fahrenheit) => c_to_f(value),
        (Fahrenheit, Celsius) => f_to_c(value),
        (Celsius, Kelvin) => c_to_k(value),
        (Kelvin, Celsius) => k_to_c(value),
        (Fahrenheit, Kelvin) => f_to_k(value),
        (Kelvin, Fahrenheit) => k_to_f(value),
        _ => value,
    })
}
