use std::fmt;

/// Errors for parameters the engine refuses to compute with.
///
/// Negative payment capacity is deliberately NOT an error: it produces a
/// degenerate [`AffordabilityResult`](crate::model::AffordabilityResult)
/// with a zero mortgage. Likewise an empty group is reported per-group via
/// `ComparisonReport::missing_groups`, and zero-denominator ratios return
/// `None` sentinels instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A monetary or rate field is NaN or infinite
    NonFinite { field: &'static str },
    /// A field that must be >= 0 came in negative
    NegativeAmount { field: &'static str, value: f64 },
    /// Rent-to-income ratio outside [0, 1]
    RatioOutOfRange(f64),
    /// Mortgage rate below zero
    NegativeRate(f64),
    /// Mortgage term of zero months/years
    NonPositiveTerm(u32),
    /// A compounding rate at or below -100%/yr
    RateBelowFloor { field: &'static str, value: f64 },
    /// Projection horizon of zero years
    ZeroHorizon,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonFinite { field } => {
                write!(f, "{field} must be a finite number")
            }
            InputError::NegativeAmount { field, value } => {
                write!(f, "{field} must be non-negative (got {value})")
            }
            InputError::RatioOutOfRange(ratio) => {
                write!(f, "rent-to-income ratio must be within [0, 1] (got {ratio})")
            }
            InputError::NegativeRate(rate) => {
                write!(f, "mortgage rate must be non-negative (got {rate})")
            }
            InputError::NonPositiveTerm(term) => {
                write!(f, "mortgage term must be positive (got {term})")
            }
            InputError::RateBelowFloor { field, value } => {
                write!(f, "{field} must be greater than -100% (got {value})")
            }
            InputError::ZeroHorizon => write!(f, "projection horizon must be at least one year"),
        }
    }
}

impl std::error::Error for InputError {}

pub type Result<T> = std::result::Result<T, InputError>;
