//! Operand parsing, the four operations, and result formatting.
//!
//! Nothing here touches the UI; the panel calls [`evaluate`] with the raw
//! field text and the operation tag of the button that was pressed.

use std::fmt;
use thiserror::Error;

/// Message shown to the user for any unparseable operand.
pub const INVALID_INPUT_MESSAGE: &str = "Enter valid numbers.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Button order in the panel.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Plain IEEE arithmetic. Division by zero yields infinity or NaN.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }
}

/// Which input field an operand came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandField {
    First,
    Second,
}

impl fmt::Display for OperandField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandField::First => write!(f, "number 1"),
            OperandField::Second => write!(f, "number 2"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("{field} is not a valid number: {text:?}")]
    InvalidInput { field: OperandField, text: String },
}

impl CalcError {
    /// Text for the notice shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => INVALID_INPUT_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Parse one operand field.
///
/// Surrounding whitespace and control characters are ignored. Accepts
/// decimal literals with an optional sign, fraction and exponent, plus the
/// spellings `NaN` and `Infinity` (optionally signed).
pub fn parse_operand(field: OperandField, text: &str) -> Result<f64> {
    let invalid = || CalcError::InvalidInput {
        field,
        text: text.to_string(),
    };

    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    match unsigned {
        "NaN" => return Ok(f64::NAN),
        "Infinity" if negative => return Ok(f64::NEG_INFINITY),
        "Infinity" => return Ok(f64::INFINITY),
        _ => {}
    }

    // f64::from_str also takes "inf" and "nan"; only decimal literals get past here
    let is_literal = !unsigned.is_empty()
        && unsigned.bytes().any(|b| b.is_ascii_digit())
        && unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_literal {
        return Err(invalid());
    }

    trimmed.parse::<f64>().map_err(|_| invalid())
}

/// Parse both operands and apply `op`. The first field is checked first.
pub fn compute(op: Operation, first: &str, second: &str) -> Result<f64> {
    let a = parse_operand(OperandField::First, first)?;
    let b = parse_operand(OperandField::Second, second)?;
    Ok(op.apply(a, b))
}

/// [`compute`], then [`format_result`].
pub fn evaluate(op: Operation, first: &str, second: &str) -> Result<String> {
    compute(op, first, second).map(format_result)
}

/// Render a result the way the result field shows it.
///
/// Uses the shortest digits that round-trip. Magnitudes in `[1e-3, 1e7)`
/// print as plain decimals with at least one fractional digit (`6.0`);
/// everything else prints as `d.dddE<exp>` (`1.0E7`, `1.0E-4`). Non-finite
/// values print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // "2.3333333333333335e0", "1e7", "6e0"
    let sci = format!("{:e}", magnitude);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{sign}{sci}");
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (1e-3..1e7).contains(&magnitude) {
        plain_decimal(&digits, exponent)
    } else {
        scientific(&digits, exponent)
    };
    format!("{sign}{body}")
}

/// `digits` are significant digits with the point after the first one,
/// scaled by `10^exponent`.
fn plain_decimal(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let point = exponent as usize + 1;
    if digits.len() <= point {
        let zeros = "0".repeat(point - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        format!("{}.{}", &digits[..point], &digits[point..])
    }
}

fn scientific(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let rest = if rest.is_empty() { "0" } else { rest };
    format!("{lead}.{rest}E{exponent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(op: Operation, a: &str, b: &str) -> String {
        evaluate(op, a, b).unwrap()
    }

    #[test]
    fn test_operations_match_float_arithmetic() {
        let pairs = [(4.0, 2.0), (-1.5, 0.25), (1e10, 3.0), (0.1, 0.2), (7.0, -3.0)];
        for (a, b) in pairs {
            let (sa, sb) = (a.to_string(), b.to_string());
            assert_eq!(compute(Operation::Add, &sa, &sb).unwrap(), a + b);
            assert_eq!(compute(Operation::Subtract, &sa, &sb).unwrap(), a - b);
            assert_eq!(compute(Operation::Multiply, &sa, &sb).unwrap(), a * b);
            assert_eq!(compute(Operation::Divide, &sa, &sb).unwrap(), a / b);
        }
    }

    #[test]
    fn test_add_scenario() {
        assert_eq!(eval(Operation::Add, "4", "2"), "6.0");
    }

    #[test]
    fn test_divide_scenario() {
        assert_eq!(eval(Operation::Divide, "7", "3"), "2.3333333333333335");
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(eval(Operation::Divide, "5", "0"), "Infinity");
        assert_eq!(eval(Operation::Divide, "-5", "0"), "-Infinity");
        assert_eq!(eval(Operation::Divide, "0", "0"), "NaN");
    }

    #[test]
    fn test_invalid_first_operand() {
        let err = evaluate(Operation::Multiply, "abc", "2").unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidInput {
                field: OperandField::First,
                text: "abc".to_string(),
            }
        );
        assert_eq!(err.user_message(), "Enter valid numbers.");
    }

    #[test]
    fn test_invalid_second_operand() {
        let err = evaluate(Operation::Add, "1", "").unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput { field: OperandField::Second, .. }
        ));
    }

    #[test]
    fn test_first_field_reported_when_both_invalid() {
        let err = compute(Operation::Add, "x", "y").unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput { field: OperandField::First, .. }
        ));
    }

    #[test]
    fn test_error_display_names_field() {
        let err = parse_operand(OperandField::Second, "1,5").unwrap_err();
        assert_eq!(err.to_string(), "number 2 is not a valid number: \"1,5\"");
    }

    #[test]
    fn test_parse_accepts_decimal_literals() {
        let field = OperandField::First;
        assert_eq!(parse_operand(field, "4").unwrap(), 4.0);
        assert_eq!(parse_operand(field, "-2.5").unwrap(), -2.5);
        assert_eq!(parse_operand(field, "+3").unwrap(), 3.0);
        assert_eq!(parse_operand(field, ".5").unwrap(), 0.5);
        assert_eq!(parse_operand(field, "5.").unwrap(), 5.0);
        assert_eq!(parse_operand(field, "1e3").unwrap(), 1000.0);
        assert_eq!(parse_operand(field, "1.5E-2").unwrap(), 0.015);
        assert_eq!(parse_operand(field, "  12 \t").unwrap(), 12.0);
    }

    #[test]
    fn test_parse_accepts_special_spellings() {
        let field = OperandField::First;
        assert!(parse_operand(field, "NaN").unwrap().is_nan());
        assert_eq!(parse_operand(field, "Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_operand(field, "+Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_operand(field, "-Infinity").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        let field = OperandField::First;
        for text in ["", "   ", "abc", "inf", "nan", "infinity", "0x10", "1,5", "-", ".", "e5", "1e", "--1", "1.2.3", "12abc"] {
            assert!(parse_operand(field, text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_parse_overflow_is_infinity() {
        assert_eq!(parse_operand(OperandField::First, "1e400").unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_format_plain_range() {
        assert_eq!(format_result(6.0), "6.0");
        assert_eq!(format_result(100.0), "100.0");
        assert_eq!(format_result(-2.5), "-2.5");
        assert_eq!(format_result(0.001), "0.001");
        assert_eq!(format_result(0.015), "0.015");
        assert_eq!(format_result(1234567.5), "1234567.5");
        assert_eq!(format_result(9999999.0), "9999999.0");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_scientific_range() {
        assert_eq!(format_result(1e7), "1.0E7");
        assert_eq!(format_result(12345678.0), "1.2345678E7");
        assert_eq!(format_result(1e-4), "1.0E-4");
        assert_eq!(format_result(-2.5e10), "-2.5E10");
        assert_eq!(format_result(f64::MAX), "1.7976931348623157E308");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_result(0.0), "0.0");
        assert_eq!(format_result(-0.0), "-0.0");
        assert_eq!(format_result(f64::NAN), "NaN");
        assert_eq!(format_result(f64::INFINITY), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_labels_in_button_order() {
        let labels: Vec<_> = Operation::ALL.iter().map(|op| op.label()).collect();
        assert_eq!(labels, ["Add", "Subtract", "Multiply", "Divide"]);
    }
}
