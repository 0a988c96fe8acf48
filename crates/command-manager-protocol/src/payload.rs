//! Payload grammars: integers and name/value parameter lists.

use crate::error::{ProtocolError, ProtocolResult};
use std::fmt;

/// Separator between parameter list tokens.
pub const PARAMETER_SEPARATOR: char = ',';

/// Longest accepted parameter name, in characters.
pub const MAX_PARAMETER_NAME_LEN: usize = 15;

/// Significant digits printed for parameter values.
pub const VALUE_SIGNIFICANT_DIGITS: i32 = 6;

/// A decoded `name = value` parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterPair {
    pub name: String,
    pub value: f64,
}

impl fmt::Display for ParameterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, format_value(self.value))
    }
}

/// Outcome of decoding one name/value pair.
pub type ParameterResult = ProtocolResult<ParameterPair>;

/// Parse a payload that must be a whole signed integer.
///
/// Leading or trailing characters of any kind, including whitespace, make the
/// payload invalid, as does overflow.
pub fn parse_integer(payload: &str) -> ProtocolResult<i32> {
    payload
        .parse::<i32>()
        .map_err(|_| ProtocolError::InvalidInteger {
            payload: payload.to_string(),
        })
}

/// Split a parameter list on commas, dropping empty tokens.
pub fn tokenize(payload: &str) -> Vec<&str> {
    payload
        .split(PARAMETER_SEPARATOR)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Decode a `name,value,name,value,...` payload.
///
/// An odd token count rejects the whole list. Otherwise each pair is decoded
/// on its own and failures stay local to that pair. Input order is kept.
pub fn parse_parameters(payload: &str) -> ProtocolResult<Vec<ParameterResult>> {
    let tokens = tokenize(payload);
    if tokens.len() % 2 != 0 {
        return Err(ProtocolError::OddParameterCount {
            count: tokens.len(),
        });
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| parse_pair(pair[0], pair[1]))
        .collect())
}

/// Render a value in `%g` style with [`VALUE_SIGNIFICANT_DIGITS`] digits.
///
/// Fixed notation is used while the decimal exponent lies in `-4..6`,
/// exponent notation (`1e+20`, `1e-07`) otherwise. Trailing zeros are
/// trimmed in both forms.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounds to the significant digits first so the exponent reflects carries
    let digits = (VALUE_SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{:.*e}", digits, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= VALUE_SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let precision = (VALUE_SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", precision, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

fn parse_pair(name: &str, value: &str) -> ParameterResult {
    if name.chars().count() > MAX_PARAMETER_NAME_LEN {
        return Err(ProtocolError::ParameterNameTooLong {
            name: name.to_string(),
        });
    }

    let value = value
        .parse::<f64>()
        .map_err(|_| ProtocolError::InvalidParameterValue {
            name: name.to_string(),
        })?;

    Ok(ParameterPair {
        name: name.to_string(),
        value,
    })
}
