//! Regex tester: match listing, capture extraction, and replacement.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MatchInfo {
    pub text: String,
    /// Byte offsets into the haystack.
    pub start: usize,
    pub end: usize,
    pub groups: Vec<GroupInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupInfo {
    /// Group name when the pattern names it, else the positional index.
    pub name: Option<String>,
    pub index: usize,
    pub text: Option<String>,
}

fn compile(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .with_context(|| format!("Invalid regex pattern: {}", pattern))
}

/// List all matches of `pattern` in `haystack` with their capture groups.
pub fn find_matches(pattern: &str, haystack: &str, case_insensitive: bool) -> Result<Vec<MatchInfo>> {
    let re = compile(pattern, case_insensitive)?;
    let names: Vec<Option<&str>> = re.capture_names().collect();
    let mut out = Vec::new();
    for caps in re.captures_iter(haystack) {
        // Group 0 is the whole match; groups start at 1.
        let full = caps.get(0).expect("capture group 0 always present");
        let groups = (1..caps.len())
            .map(|i| GroupInfo {
                name: names.get(i).and_then(|n| n.map(str::to_string)),
                index: i,
                text: caps.get(i).map(|m| m.as_str().to_string()),
            })
            .collect();
        out.push(MatchInfo {
            text: full.as_str().to_string(),
            start: full.start(),
            end: full.end(),
            groups,
        });
    }
    Ok(out)
}

/// Replace all matches, supporting `$n` and `$name` references.
pub fn replace_all(
    pattern: &str,
    haystack: &str,
    replacement: &str,
    case_insensitive: bool,
) -> Result<String> {
    let re = compile(pattern, case_insensitive)?;
    Ok(re.replace_all(haystack, replacement).into_owned())
}
