//! Calculation core
//!
//! Validates an `(a, b, operation)` triple and evaluates it with native f64
//! arithmetic. Pure and synchronous; HTTP mapping lives in the `api` module.

pub mod catalog;

use serde::Serialize;

use crate::error::{Error, Result};

/// Fixed tag identifying this implementation in calculation responses.
pub const SOURCE: &str = "calc-api";

/// Accepted operation symbols, in catalog order.
pub const VALID_SYMBOLS: [&str; 6] = ["+", "-", "*", "×", "/", "÷"];

/// A supported arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse an operation symbol by exact match. Multiply and divide each
    /// accept an ASCII and a Unicode alias.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "*" | "×" => Some(Operation::Multiply),
            "/" | "÷" => Some(Operation::Divide),
            _ => None,
        }
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub result: f64,
    pub expression: String,
    pub source: String,
}

/// Validate and evaluate a single binary arithmetic expression.
///
/// The operation symbol is validated before any arithmetic. Division rejects
/// a zero divisor (including `-0.0`); everything else follows IEEE 754
/// double semantics, non-finite operands included.
pub fn calculate(a: f64, b: f64, symbol: &str) -> Result<Calculation> {
    let operation =
        Operation::from_symbol(symbol).ok_or_else(|| Error::invalid_operation(symbol))?;

    let result = match operation {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(Error::DivisionByZero);
            }
            a / b
        }
    };

    Ok(Calculation {
        result,
        expression: format!("{} {} {}", format_operand(a), symbol, format_operand(b)),
        source: SOURCE.to_string(),
    })
}

/// Render an operand for the expression string.
///
/// Finite integral values keep one decimal place (`2` becomes `"2.0"`);
/// everything else uses the default `f64` formatting.
fn format_operand(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
