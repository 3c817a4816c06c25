use crate::value::unit::StyleValueUnit;

/// Convenience result type used by the typed style APIs.
pub type StyleResult<T> = Result<T, StyleError>;

/// Status code returned across the C boundary.
///
/// Every accessor reports exactly one of these. The discriminants are part of the ABI and
/// must not be reordered.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ReturnCode {
    /// Operation succeeded.
    Ok,
    /// The style pointer passed was null.
    NullStylePointer,
    /// An enum value was outside the range of valid values for that enum.
    InvalidEnumValue,
    /// A `Unset` unit was specified but is not valid in this context.
    InvalidNone,
    /// A `Length` unit was specified but is not valid in this context.
    InvalidLength,
    /// A `Percent` unit was specified but is not valid in this context.
    InvalidPercent,
    /// A `MinContent` unit was specified but is not valid in this context.
    InvalidMinContent,
    /// A `MaxContent` unit was specified but is not valid in this context.
    InvalidMaxContent,
    /// A `FitContentLength` unit was specified but is not valid in this context.
    InvalidFitContentPx,
    /// A `FitContentPercent` unit was specified but is not valid in this context.
    InvalidFitContentPercent,
    /// An `Auto` unit was specified but is not valid in this context.
    InvalidAuto,
    /// A `Fraction` unit was specified but is not valid in this context.
    InvalidFr,
    /// A NaN value was specified.
    UnexpectedNaN,
    /// An infinite value was specified.
    UnexpectedInfinity,
    /// A negative value was specified.
    UnexpectedNegative,
}

impl ReturnCode {
    /// Return `true` for [`ReturnCode::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Code reported when `unit` is rejected by a property's unit whitelist.
    pub fn invalid_unit(unit: StyleValueUnit) -> Self {
        match unit {
            StyleValueUnit::Unset => Self::InvalidNone,
            StyleValueUnit::Length => Self::InvalidLength,
            StyleValueUnit::Percent => Self::InvalidPercent,
            StyleValueUnit::MinContent => Self::InvalidMinContent,
            StyleValueUnit::MaxContent => Self::InvalidMaxContent,
            StyleValueUnit::FitContentLength => Self::InvalidFitContentPx,
            StyleValueUnit::FitContentPercent => Self::InvalidFitContentPercent,
            StyleValueUnit::Auto => Self::InvalidAuto,
            StyleValueUnit::Fraction => Self::InvalidFr,
        }
    }
}

/// Validation failures raised while decoding caller-provided style values.
///
/// Each variant maps onto exactly one [`ReturnCode`]; the extra fields only feed
/// diagnostics.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum StyleError {
    /// No style record was supplied.
    #[error("style pointer is null")]
    NullStylePointer,

    /// Integer outside `[0, count)` for the named enumeration.
    #[error("{value} is not a valid {name} (expected 0..{count})")]
    InvalidEnumValue {
        /// Enumeration being decoded.
        name: &'static str,
        /// Raw value received.
        value: i32,
        /// Number of declared variants.
        count: i32,
    },

    /// Unit not in the property's whitelist.
    #[error("unit {unit:?} is not valid for {property}")]
    InvalidUnit {
        /// Property being written.
        property: &'static str,
        /// Rejected unit.
        unit: StyleValueUnit,
    },

    /// Magnitude was NaN.
    #[error("unexpected NaN")]
    UnexpectedNaN,

    /// Magnitude was `+inf` or `-inf`.
    #[error("unexpected infinite value {0}")]
    UnexpectedInfinity(f32),

    /// Magnitude was below zero.
    #[error("unexpected negative value {0}")]
    UnexpectedNegative(f32),
}

impl StyleError {
    /// Build a [`StyleError::InvalidEnumValue`] value.
    pub fn invalid_enum(name: &'static str, value: i32, count: i32) -> Self {
        Self::InvalidEnumValue { name, value, count }
    }

    /// Build a [`StyleError::InvalidUnit`] value.
    pub fn invalid_unit(property: &'static str, unit: StyleValueUnit) -> Self {
        Self::InvalidUnit { property, unit }
    }

    /// Status code reported at the boundary for this error.
    pub fn return_code(&self) -> ReturnCode {
        match self {
            Self::NullStylePointer => ReturnCode::NullStylePointer,
            Self::InvalidEnumValue { .. } => ReturnCode::InvalidEnumValue,
            Self::InvalidUnit { unit, .. } => ReturnCode::invalid_unit(*unit),
            Self::UnexpectedNaN => ReturnCode::UnexpectedNaN,
            Self::UnexpectedInfinity(_) => ReturnCode::UnexpectedInfinity,
            Self::UnexpectedNegative(_) => ReturnCode::UnexpectedNegative,
        }
    }
}

impl From<StyleError> for ReturnCode {
    fn from(err: StyleError) -> Self {
        err.return_code()
    }
}

impl From<StyleResult<()>> for ReturnCode {
    fn from(result: StyleResult<()>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(err) => err.return_code(),
        }
    }
}

/// Reject NaN, infinite and negative magnitudes, in that order.
pub(crate) fn check_non_negative(value: f32) -> StyleResult<f32> {
    if value.is_nan() {
        return Err(StyleError::UnexpectedNaN);
    }
    if value.is_infinite() {
        return Err(StyleError::UnexpectedInfinity(value));
    }
    if value < 0.0 {
        return Err(StyleError::UnexpectedNegative(value));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
