//! Developer toolbox: small, stateless conversion and inspection tools.
//!
//! Every tool is a pure function (or a thin wrapper over one): unit and
//! color conversion, color-vision-deficiency simulation, JWT decoding,
//! CSV↔JSON conversion, password generation, a regex tester, and timestamp
//! conversion. The binary `devbelt` exposes one subcommand per tool.

pub mod color;
pub mod format;
pub mod fun;
pub mod history;
pub mod jwt;
pub mod logging;
pub mod password;
pub mod retest;
pub mod tabular;
pub mod timestamp;
pub mod units;
