use std::fmt;

use regex::Regex;

/// One address/value pair extracted from a log line. Consumed by the
/// sender right after parsing; nothing is kept across lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    pub address: String,
    pub value: f64,
}

/// A line that is missing one of the two markers or carries a
/// non-numeric value. Holds the trimmed line text for the diagnostic.
#[derive(Debug)]
pub struct ParseError {
    line: String,
}

impl ParseError {
    fn new(line: &str) -> Self {
        ParseError {
            line: line.trim().to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid line format: {}", self.line)
    }
}

impl std::error::Error for ParseError {}

/// Extracts the OSC address and float value from log lines of the form
/// `... ADDRESS(/some/path) ... FLOAT(1.25) ...`. Both patterns search
/// anywhere in the line; surrounding text and the order of the two
/// markers do not matter.
pub struct LineParser {
    address_re: Regex,
    value_re: Regex,
}

impl LineParser {
    pub fn new() -> Self {
        // Non-greedy capture so the address stops at the first ')'
        let address_re = Regex::new(r"ADDRESS\((.*?)\)").unwrap();
        let value_re = Regex::new(r"FLOAT\(([-+]?[0-9]*\.?[0-9]+)\)").unwrap();
        LineParser {
            address_re,
            value_re,
        }
    }

    pub fn parse(&self, line: &str) -> Result<ParsedMessage, ParseError> {
        let address = self
            .address_re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ParseError::new(line))?;

        let value = self
            .value_re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(|| ParseError::new(line))?;

        Ok(ParsedMessage { address, value })
    }
}
