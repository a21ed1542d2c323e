//! Product form validation and normalisation.
//!
//! Admin create/update payloads pass through these helpers before anything
//! reaches a store, so both store implementations persist identical records.

use serde::Deserialize;

use crate::error::CoreError;

/// A price as submitted by a form: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    /// Parse to a finite, non-negative number.
    pub fn resolve(&self) -> Result<f64, CoreError> {
        let value = match self {
            PriceInput::Number(n) => *n,
            PriceInput::Text(raw) => parse_price(raw)?,
        };
        validate_price(value)
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

/// Parse a textual price such as `"15999"` or `" 8999.50 "`.
pub fn parse_price(raw: &str) -> Result<f64, CoreError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("price must be a number, got '{raw}'")))
}

/// Reject NaN, infinities, and negative prices.
pub fn validate_price(price: f64) -> Result<f64, CoreError> {
    if !price.is_finite() {
        return Err(CoreError::Validation("price must be a finite number".into()));
    }
    if price < 0.0 {
        return Err(CoreError::Validation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(price)
}

/// Require a non-blank text field.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Drop feature entries that are empty or whitespace-only, preserving order.
pub fn normalize_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .filter(|f| !f.trim().is_empty())
        .collect()
}
