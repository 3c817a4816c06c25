use crate::foundation::error::{StyleError, StyleResult, check_non_negative};
use crate::value::unit::{StyleValueUnit, UnitSet};

/// Flat `(value, unit)` pair used at the C boundary.
///
/// If the unit carries no payload (for example `Auto`) the value is ignored by the layout
/// engine, but it is stored and returned unchanged.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleValue {
    /// Magnitude.
    pub value: f32,
    /// Unit tag.
    pub unit: StyleValueUnit,
}

impl StyleValue {
    /// Build a value from its parts.
    pub const fn new(value: f32, unit: StyleValueUnit) -> Self {
        Self { value, unit }
    }

    /// Fixed length.
    pub const fn length(value: f32) -> Self {
        Self::new(value, StyleValueUnit::Length)
    }

    /// Fraction of the reference box.
    pub const fn percent(value: f32) -> Self {
        Self::new(value, StyleValueUnit::Percent)
    }

    /// `auto` with a zero magnitude.
    pub const fn auto() -> Self {
        Self::new(0.0, StyleValueUnit::Auto)
    }
}

/// Finite, non-negative magnitude.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Magnitude(f32);

impl Magnitude {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Validate `value`, rejecting NaN, infinities and negatives in that order.
    pub fn new(value: f32) -> StyleResult<Self> {
        check_non_negative(value).map(Self)
    }

    /// Inner value.
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Raw bits of a magnitude that the unit does not read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ignored(u32);

impl Ignored {
    /// Positive zero.
    pub const ZERO: Self = Self(0);

    /// Keep the exact bit pattern of `value`, NaN payloads included.
    pub fn new(value: f32) -> Self {
        Self(value.to_bits())
    }

    /// Stored value, bit-for-bit.
    pub fn get(self) -> f32 {
        f32::from_bits(self.0)
    }
}

/// Validated dimension stored inside a [`StyleRecord`](crate::StyleRecord).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// No value.
    Unset(Ignored),
    /// Fixed length.
    Length(Magnitude),
    /// Fraction of the reference box.
    Percent(Magnitude),
    /// Min-content size.
    MinContent(Ignored),
    /// Max-content size.
    MaxContent(Ignored),
    /// `fit-content()` limited by a length.
    FitContentLength(Magnitude),
    /// `fit-content()` limited by a percentage.
    FitContentPercent(Magnitude),
    /// Automatic value.
    Auto(Ignored),
    /// Flexible `fr` share.
    Fraction(Magnitude),
}

impl Dimension {
    /// `auto` with a zero magnitude.
    pub const AUTO: Self = Self::Auto(Ignored::ZERO);

    /// Zero length.
    pub const ZERO: Self = Self::Length(Magnitude::ZERO);

    /// Decode a raw pair, applying numeric checks to payload-carrying units only.
    pub fn from_raw(value: f32, unit: StyleValueUnit) -> StyleResult<Self> {
        Ok(match unit {
            StyleValueUnit::Unset => Self::Unset(Ignored::new(value)),
            StyleValueUnit::Length => Self::Length(Magnitude::new(value)?),
            StyleValueUnit::Percent => Self::Percent(Magnitude::new(value)?),
            StyleValueUnit::MinContent => Self::MinContent(Ignored::new(value)),
            StyleValueUnit::MaxContent => Self::MaxContent(Ignored::new(value)),
            StyleValueUnit::FitContentLength => Self::FitContentLength(Magnitude::new(value)?),
            StyleValueUnit::FitContentPercent => Self::FitContentPercent(Magnitude::new(value)?),
            StyleValueUnit::Auto => Self::Auto(Ignored::new(value)),
            StyleValueUnit::Fraction => Self::Fraction(Magnitude::new(value)?),
        })
    }

    /// Decode a raw pair for a property that accepts `allowed` units.
    ///
    /// Numeric checks run before the whitelist, so `(NaN, Fraction)` on a margin reports
    /// `UnexpectedNaN` rather than an invalid unit.
    pub fn decode(
        property: &'static str,
        allowed: UnitSet,
        value: f32,
        unit: StyleValueUnit,
    ) -> StyleResult<Self> {
        let dimension = Self::from_raw(value, unit)?;
        if !allowed.contains(unit) {
            return Err(StyleError::invalid_unit(property, unit));
        }
        Ok(dimension)
    }

    /// Unit tag of this value.
    pub fn unit(self) -> StyleValueUnit {
        match self {
            Self::Unset(_) => StyleValueUnit::Unset,
            Self::Length(_) => StyleValueUnit::Length,
            Self::Percent(_) => StyleValueUnit::Percent,
            Self::MinContent(_) => StyleValueUnit::MinContent,
            Self::MaxContent(_) => StyleValueUnit::MaxContent,
            Self::FitContentLength(_) => StyleValueUnit::FitContentLength,
            Self::FitContentPercent(_) => StyleValueUnit::FitContentPercent,
            Self::Auto(_) => StyleValueUnit::Auto,
            Self::Fraction(_) => StyleValueUnit::Fraction,
        }
    }

    /// Stored magnitude, including ignored ones.
    pub fn value(self) -> f32 {
        match self {
            Self::Length(m)
            | Self::Percent(m)
            | Self::FitContentLength(m)
            | Self::FitContentPercent(m)
            | Self::Fraction(m) => m.get(),
            Self::Unset(bits) | Self::MinContent(bits) | Self::MaxContent(bits) | Self::Auto(bits) => {
                bits.get()
            }
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::AUTO
    }
}

impl From<Dimension> for StyleValue {
    fn from(dimension: Dimension) -> Self {
        Self::new(dimension.value(), dimension.unit())
    }
}

impl TryFrom<StyleValue> for Dimension {
    type Error = StyleError;

    fn try_from(value: StyleValue) -> StyleResult<Self> {
        Self::from_raw(value.value, value.unit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/dimension.rs"]
mod tests;
