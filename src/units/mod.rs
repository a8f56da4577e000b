//! Unit conversion across ten categories.
//!
//! Every category except temperature is linear: each unit carries a positive
//! factor relative to the category's base unit, and conversion is
//! `value * factor(from) / factor(to)`. Temperature goes through the
//! closed-form formulas in [`temperature`].

pub mod temperature;

use anyhow::{Result, anyhow, bail, ensure};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A conversion domain with a shared base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Volume,
    Time,
    Speed,
    Area,
    Data,
    Energy,
    Frequency,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Time,
        Category::Speed,
        Category::Area,
        Category::Data,
        Category::Energy,
        Category::Frequency,
        Category::Temperature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Time => "time",
            Category::Speed => "speed",
            Category::Area => "area",
            Category::Data => "data",
            Category::Energy => "energy",
            Category::Frequency => "frequency",
            Category::Temperature => "temperature",
        }
    }

    pub fn parse(s: &str) -> Result<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| anyhow!("Unknown category: {}", s))
    }

    /// Base unit id (factor 1.0) of this category.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Weight => "kg",
            Category::Volume => "l",
            Category::Time => "s",
            Category::Speed => "mps",
            Category::Area => "m2",
            Category::Data => "b",
            Category::Energy => "j",
            Category::Frequency => "hz",
            Category::Temperature => "c",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of a linear category: identifier, display name, and the
/// multiplicative factor relative to the category base unit.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnitDef {
    pub id: &'static str,
    pub name: &'static str,
    pub factor: f64,
}

const fn unit(id: &'static str, name: &'static str, factor: f64) -> UnitDef {
    UnitDef { id, name, factor }
}

/// Ordered unit tables per category. Temperature units carry a factor of 1.0
/// as a placeholder; conversion never reads it (see [`temperature`]).
static TABLES: Lazy<IndexMap<Category, Vec<UnitDef>>> = Lazy::new(|| {
    let mut m = IndexMap::new();
    m.insert(
        Category::Length,
        vec![
            unit("mm", "Millimeters", 0.001),
            unit("cm", "Centimeters", 0.01),
            unit("m", "Meters", 1.0),
            unit("km", "Kilometers", 1000.0),
            unit("in", "Inches", 0.0254),
            unit("ft", "Feet", 0.3048),
            unit("yd", "Yards", 0.9144),
            unit("mi", "Miles", 1609.344),
            unit("nmi", "Nautical miles", 1852.0),
        ],
    );
    m.insert(
        Category::Weight,
        vec![
            unit("mg", "Milligrams", 1e-6),
            unit("g", "Grams", 0.001),
            unit("kg", "Kilograms", 1.0),
            unit("t", "Metric tons", 1000.0),
            unit("oz", "Ounces", 0.028349523125),
            unit("lb", "Pounds", 0.45359237),
            unit("st", "Stones", 6.35029318),
        ],
    );
    m.insert(
        Category::Volume,
        vec![
            unit("ml", "Milliliters", 0.001),
            unit("l", "Liters", 1.0),
            unit("m3", "Cubic meters", 1000.0),
            unit("tsp", "Teaspoons", 0.00492892159375),
            unit("tbsp", "Tablespoons", 0.01478676478125),
            unit("floz", "Fluid ounces", 0.0295735295625),
            unit("cup", "Cups", 0.2365882365),
            unit("pt", "Pints", 0.473176473),
            unit("qt", "Quarts", 0.946352946),
            unit("gal", "Gallons", 3.785411784),
        ],
    );
    m.insert(
        Category::Time,
        vec![
            unit("ms", "Milliseconds", 0.001),
            unit("s", "Seconds", 1.0),
            unit("min", "Minutes", 60.0),
            unit("h", "Hours", 3600.0),
            unit("d", "Days", 86400.0),
            unit("wk", "Weeks", 604800.0),
            unit("yr", "Years", 31536000.0),
        ],
    );
    m.insert(
        Category::Speed,
        vec![
            unit("mps", "Meters/second", 1.0),
            unit("kmh", "Kilometers/hour", 1.0 / 3.6),
            unit("mph", "Miles/hour", 0.44704),
            unit("fts", "Feet/second", 0.3048),
            unit("kn", "Knots", 1852.0 / 3600.0),
        ],
    );
    m.insert(
        Category::Area,
        vec![
            unit("mm2", "Square millimeters", 1e-6),
            unit("cm2", "Square centimeters", 1e-4),
            unit("m2", "Square meters", 1.0),
            unit("ha", "Hectares", 1e4),
            unit("km2", "Square kilometers", 1e6),
            unit("in2", "Square inches", 0.00064516),
            unit("ft2", "Square feet", 0.09290304),
            unit("yd2", "Square yards", 0.83612736),
            unit("acre", "Acres", 4046.8564224),
            unit("mi2", "Square miles", 2589988.110336),
        ],
    );
    m.insert(
        Category::Data,
        vec![
            unit("bit", "Bits", 0.125),
            unit("b", "Bytes", 1.0),
            unit("kb", "Kilobytes", 1e3),
            unit("mb", "Megabytes", 1e6),
            unit("gb", "Gigabytes", 1e9),
            unit("tb", "Terabytes", 1e12),
            unit("kib", "Kibibytes", 1024.0),
            unit("mib", "Mebibytes", 1048576.0),
            unit("gib", "Gibibytes", 1073741824.0),
            unit("tib", "Tebibytes", 1099511627776.0),
        ],
    );
    m.insert(
        Category::Energy,
        vec![
            unit("j", "Joules", 1.0),
            unit("kj", "Kilojoules", 1e3),
            unit("cal", "Calories", 4.184),
            unit("kcal", "Kilocalories", 4184.0),
            unit("wh", "Watt-hours", 3600.0),
            unit("kwh", "Kilowatt-hours", 3.6e6),
            unit("btu", "British thermal units", 1055.05585262),
        ],
    );
    m.insert(
        Category::Frequency,
        vec![
            unit("hz", "Hertz", 1.0),
            unit("khz", "Kilohertz", 1e3),
            unit("mhz", "Megahertz", 1e6),
            unit("ghz", "Gigahertz", 1e9),
            unit("rpm", "Revolutions/minute", 1.0 / 60.0),
        ],
    );
    m.insert(
        Category::Temperature,
        vec![
            unit("c", "Celsius", 1.0),
            unit("f", "Fahrenheit", 1.0),
            unit("k", "Kelvin", 1.0),
        ],
    );
    m
});

/// Units of a category, in display order.
pub fn units_of(category: Category) -> &'static [UnitDef] {
    // Every Category variant is inserted into TABLES above.
    TABLES.get(&category).map(Vec::as_slice).unwrap_or(&[])
}

/// Look up a unit by id within a category.
pub fn find_unit(category: Category, id: &str) -> Result<&'static UnitDef> {
    let wanted = id.trim().to_ascii_lowercase();
    units_of(category)
        .iter()
        .find(|u| u.id == wanted)
        .ok_or_else(|| anyhow!("Unknown {} unit: {}", category, id))
}

/// Resolve a unit id to its category, if the id is known anywhere.
pub fn category_of(id: &str) -> Option<Category> {
    let wanted = id.trim().to_ascii_lowercase();
    Category::ALL
        .iter()
        .copied()
        .find(|c| units_of(*c).iter().any(|u| u.id == wanted))
}

/// Convert `value` from one unit to another within `category`.
///
/// Zero and negative values are valid inputs (temperatures, deltas).
/// Non-finite values, unknown unit ids, and cross-category pairs are errors.
pub fn convert(category: Category, from: &str, to: &str, value: f64) -> Result<f64> {
    ensure!(value.is_finite(), "Value is not a finite number");
    if category == Category::Temperature {
        return temperature::convert(value, from, to);
    }
    let from_def = find_unit(category, from)?;
    let to_def = find_unit(category, to)?;
    debug_assert!(from_def.factor > 0.0 && to_def.factor > 0.0);
    Ok(value * from_def.factor / to_def.factor)
}

/// Convert without a caller-supplied category: both unit ids must resolve
/// to the same category.
pub fn convert_auto(from: &str, to: &str, value: f64) -> Result<f64> {
    let from_cat = category_of(from).ok_or_else(|| anyhow!("Unknown unit: {}", from))?;
    let to_cat = category_of(to).ok_or_else(|| anyhow!("Unknown unit: {}", to))?;
    if from_cat != to_cat {
        bail!(
            "Cannot convert {} ({}) to {} ({}): different categories",
            from,
            from_cat,
            to,
            to_cat
        );
    }
    convert(from_cat, from, to, value)
}
