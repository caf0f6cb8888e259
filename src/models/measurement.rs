//! Measurement parsing
//!
//! Parses what a user types ("170cm", "5'7\"", "5 ft 7 in", "154 lbs") into
//! a height or weight measurement. Parsing is the only fallible step; the
//! parsed number is then converted and clamped like any other pick.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversion::{
    height_unit, weight_unit, HeightUnit, UnitConverter, UnitSystem, WeightUnit,
};

use super::{HeightMeasurement, WeightMeasurement};

/// Measurement parsing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Empty measurement")]
    Empty,

    #[error("Missing number before '{0}'")]
    MissingNumber(String),

    #[error("Missing unit after '{0}'")]
    MissingUnit(String),

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Malformed measurement '{0}'")]
    Malformed(String),
}

/// A parsed height or weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    Height(HeightMeasurement),
    Weight(WeightMeasurement),
}

impl Measurement {
    pub fn display(&self, system: UnitSystem) -> String {
        match self {
            Measurement::Height(h) => h.display(system),
            Measurement::Weight(w) => w.display(system),
        }
    }
}

impl FromStr for Measurement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_measurement(s)
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Number(String),
    Unit(String),
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Split into alternating number and unit runs; whitespace only separates
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut run = String::new();
        if is_number_char(c) {
            while let Some(&c) = chars.peek() {
                if !is_number_char(c) {
                    break;
                }
                run.push(c);
                chars.next();
            }
            tokens.push(Token::Number(run));
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c.is_ascii_digit() {
                    break;
                }
                run.push(c);
                chars.next();
            }
            tokens.push(Token::Unit(run));
        }
    }

    tokens
}

/// Pair each number with the unit that follows it, if any
fn quantities(tokens: Vec<Token>) -> Result<Vec<(f64, Option<String>)>, ParseError> {
    let mut result: Vec<(f64, Option<String>)> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(n) => {
                let value = n
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(n.clone()))?;
                result.push((value, None));
            }
            Token::Unit(u) => match result.last_mut() {
                Some((_, unit @ None)) => *unit = Some(u),
                _ => return Err(ParseError::MissingNumber(u)),
            },
        }
    }

    Ok(result)
}

enum Unit {
    Height(HeightUnit),
    Weight(WeightUnit),
}

fn recognize(unit: &str) -> Result<Unit, ParseError> {
    if let Some(h) = height_unit(unit) {
        return Ok(Unit::Height(h));
    }
    if let Some(w) = weight_unit(unit) {
        return Ok(Unit::Weight(w));
    }
    Err(ParseError::UnknownUnit(unit.to_string()))
}

/// Parse a measurement against the standard domains
pub fn parse_measurement(input: &str) -> Result<Measurement, ParseError> {
    parse_measurement_with(&UnitConverter::STANDARD, input)
}

/// Parse a measurement and convert it with `converter`
///
/// Accepts a single quantity (`170cm`, `67 in`, `70kg`, `154 lbs`) or a
/// feet quantity followed by inches (`5'7"`, `5ft 7in`, `5' 7`).
pub fn parse_measurement_with(
    converter: &UnitConverter,
    input: &str,
) -> Result<Measurement, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts = quantities(tokenize(trimmed))?;

    match parts.as_slice() {
        [(value, None)] => Err(ParseError::MissingUnit(format_number(*value))),
        [(value, Some(unit))] => {
            let measurement = match recognize(unit)? {
                Unit::Height(HeightUnit::Centimeters) => {
                    Measurement::Height(HeightMeasurement::from_cm_with(converter, *value))
                }
                Unit::Height(HeightUnit::Feet) => {
                    Measurement::Height(HeightMeasurement::from_imperial_with(converter, *value, 0))
                }
                Unit::Height(HeightUnit::Inches) => {
                    Measurement::Height(HeightMeasurement::from_imperial_with(converter, 0, *value))
                }
                Unit::Weight(WeightUnit::Kilograms) => {
                    Measurement::Weight(WeightMeasurement::from_kg_with(converter, *value))
                }
                Unit::Weight(WeightUnit::Pounds) => {
                    Measurement::Weight(WeightMeasurement::from_lb_with(converter, *value))
                }
            };
            Ok(measurement)
        }
        [(feet, Some(feet_unit)), (inches, inches_unit)] => {
            let feet_ok = height_unit(feet_unit) == Some(HeightUnit::Feet);
            let inches_ok = inches_unit
                .as_deref()
                .map_or(true, |u| height_unit(u) == Some(HeightUnit::Inches));
            if !(feet_ok && inches_ok) {
                return Err(ParseError::Malformed(trimmed.to_string()));
            }
            Ok(Measurement::Height(HeightMeasurement::from_imperial_with(
                converter, *feet, *inches,
            )))
        }
        _ => Err(ParseError::Malformed(trimmed.to_string())),
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
