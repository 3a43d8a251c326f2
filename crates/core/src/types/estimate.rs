//! Shipping estimate type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShippingEstimate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// The input string is empty.
    #[error("shipping estimate cannot be empty")]
    Empty,
    /// The leading amount is missing or not a number.
    #[error("invalid shipping estimate amount: {0}")]
    InvalidAmount(String),
    /// The unit suffix is not one of `bd`, `d`, `h` or `m`.
    #[error("unknown shipping estimate unit: {0}")]
    UnknownUnit(String),
}

/// Unit of a [`ShippingEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateUnit {
    BusinessDays,
    Days,
    Hours,
    Minutes,
}

impl EstimateUnit {
    const fn suffix(self) -> &'static str {
        match self {
            Self::BusinessDays => "bd",
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "m",
        }
    }

    const fn minutes(self) -> u64 {
        match self {
            // A business day is ranked like a calendar day; only ordering matters.
            Self::BusinessDays | Self::Days => 24 * 60,
            Self::Hours => 60,
            Self::Minutes => 1,
        }
    }
}

/// A delivery time estimate in the platform's compact notation.
///
/// ## Examples
///
/// ```
/// use checkout_shipping_core::ShippingEstimate;
///
/// let estimate = ShippingEstimate::parse("5bd").unwrap();
/// assert_eq!(estimate.amount(), 5);
/// assert_eq!(estimate.to_string(), "5bd");
///
/// assert!(ShippingEstimate::parse("").is_err());
/// assert!(ShippingEstimate::parse("soon").is_err());
/// assert!(ShippingEstimate::parse("3w").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShippingEstimate {
    amount: u32,
    unit: EstimateUnit,
}

impl ShippingEstimate {
    /// Create an estimate from its parts.
    #[must_use]
    pub const fn new(amount: u32, unit: EstimateUnit) -> Self {
        Self { amount, unit }
    }

    /// Parse an estimate such as `"5bd"`, `"2d"`, `"4h"` or `"30m"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, has no numeric amount, or
    /// ends in an unknown unit.
    pub fn parse(s: &str) -> Result<Self, EstimateError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EstimateError::Empty);
        }

        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, suffix) = s.split_at(split);

        let amount = digits
            .parse::<u32>()
            .map_err(|_| EstimateError::InvalidAmount(s.to_owned()))?;

        let unit = match suffix {
            "bd" => EstimateUnit::BusinessDays,
            "d" => EstimateUnit::Days,
            "h" => EstimateUnit::Hours,
            "m" => EstimateUnit::Minutes,
            other => return Err(EstimateError::UnknownUnit(other.to_owned())),
        };

        Ok(Self { amount, unit })
    }

    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    #[must_use]
    pub const fn unit(&self) -> EstimateUnit {
        self.unit
    }

    /// Approximate length in minutes, used to rank estimates.
    #[must_use]
    pub fn as_minutes(&self) -> u64 {
        u64::from(self.amount) * self.unit.minutes()
    }
}

impl fmt::Display for ShippingEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

impl std::str::FromStr for ShippingEstimate {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
