//! # Result Formatting
//!
//! Rounds derived quantities to their declared precision and pairs them with
//! unit labels. Formatting never re-validates or re-derives values.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::formatter::{format_quantities, DerivedQuantity};
//! use mech_core::units::Unit;
//!
//! let quantities = [DerivedQuantity {
//!     name: "Distance to stop".to_string(),
//!     symbol: "S".to_string(),
//!     unit: Unit::Meter,
//!     value: 1.498923,
//!     precision: 3,
//! }];
//!
//! let formatted = format_quantities(&quantities);
//! assert_eq!(formatted[0].value, "1.499");
//! assert_eq!(formatted[0].to_string(), "Distance to stop (S): 1.499 m");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// One computed output of a solve call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantity {
    /// Human label (e.g., "Cart speed")
    pub name: String,
    /// Physics symbol (e.g., "V")
    pub symbol: String,
    pub unit: Unit,
    /// Unrounded SI value
    pub value: f64,
    /// Decimal digits for display
    pub precision: u8,
}

/// A derived quantity rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedQuantity {
    pub label: String,
    pub symbol: String,
    /// Rounded value with exactly `precision` decimals
    pub value: String,
    /// Unit symbol, empty for dimensionless quantities
    pub unit: String,
}

impl fmt::Display for FormattedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.label, self.symbol, self.value)?;
        match self.unit.as_str() {
            "" => Ok(()),
            "°" => f.write_str("°"),
            unit => write!(f, " {}", unit),
        }
    }
}

/// Largest magnitude at which an `f64` can still hold a fractional part.
const FRACTION_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round half away from zero to `precision` decimal digits.
///
/// Values too large to carry `precision` fractional digits are returned
/// unchanged.
pub fn round_to(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= FRACTION_LIMIT {
        return value;
    }
    let rounded = scaled.round() / factor;
    // Collapse -0.0 so it never renders with a sign
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a value with exactly `precision` decimal digits.
pub fn format_value(value: f64, precision: u8) -> String {
    format!("{:.*}", usize::from(precision), round_to(value, precision))
}

/// Format each quantity in order.
pub fn format_quantities(quantities: &[DerivedQuantity]) -> Vec<FormattedQuantity> {
    quantities
        .iter()
        .map(|quantity| FormattedQuantity {
            label: quantity.name.clone(),
            symbol: quantity.symbol.clone(),
            value: format_value(quantity.value, quantity.precision),
            unit: quantity.unit.symbol().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_format_value_padding() {
        assert_eq!(format_value(0.1, 2), "0.10");
        assert_eq!(format_value(2.970297, 3), "2.970");
        assert_eq!(format_value(0.109307, 4), "0.1093");
        assert_eq!(format_value(1.0, 5), "1.00000");
    }

    #[test]
    fn test_huge_values_stay_finite() {
        assert_eq!(round_to(5e307, 3), 5e307);
        assert_eq!(round_to(-5e307, 5), -5e307);
        assert_eq!(round_to(1e17, 2), 1e17);

        let text = format_value(5e307, 3);
        assert!(text.ends_with(".000"), "{}", text);
        assert!(!text.contains("inf"));
        assert_eq!(text.parse::<f64>().unwrap(), 5e307);
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(format_value(-0.0001, 2), "0.00");
        assert_eq!(format_value(-0.0, 3), "0.000");
    }

    #[test]
    fn test_display_units() {
        let quantities = [
            DerivedQuantity {
                name: "Slack angle".to_string(),
                symbol: "φ".to_string(),
                unit: Unit::Degree,
                value: 83.62063,
                precision: 2,
            },
            DerivedQuantity {
                name: "Mass ratio to stop the cart".to_string(),
                symbol: "m/M".to_string(),
                unit: Unit::Dimensionless,
                value: 0.1,
                precision: 2,
            },
        ];
        let formatted = format_quantities(&quantities);
        assert_eq!(formatted[0].to_string(), "Slack angle (φ): 83.62°");
        assert_eq!(formatted[1].to_string(), "Mass ratio to stop the cart (m/M): 0.10");
    }
}
