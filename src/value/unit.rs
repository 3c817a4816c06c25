bounded_enum! {
    /// Kind of value carried by a [`StyleValue`](crate::StyleValue).
    pub enum StyleValueUnit {
        /// No value; clears optional properties such as `min-width`.
        #[default]
        Unset,
        /// Fixed length in layout units.
        Length,
        /// Fraction of the reference box (`0.5` is half of it).
        Percent,
        /// Min-content size.
        MinContent,
        /// Max-content size.
        MaxContent,
        /// `fit-content()` limited by a length.
        FitContentLength,
        /// `fit-content()` limited by a percentage.
        FitContentPercent,
        /// Automatic value.
        Auto,
        /// Flexible `fr` share.
        Fraction,
    }
}

impl StyleValueUnit {
    /// Return `true` when the unit reads its magnitude.
    ///
    /// Units without a payload ignore the magnitude, but it is still stored and read back
    /// unchanged.
    pub fn has_payload(self) -> bool {
        match self {
            Self::Length
            | Self::Percent
            | Self::FitContentLength
            | Self::FitContentPercent
            | Self::Fraction => true,
            Self::Unset | Self::Auto | Self::MinContent | Self::MaxContent => false,
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of units accepted by a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitSet(u16);

impl UnitSet {
    /// Accepts nothing.
    pub const EMPTY: Self = Self(0);

    /// `Length | Percent`: padding, border and gaps.
    pub const LENGTH_PERCENTAGE: Self =
        Self::of(&[StyleValueUnit::Length, StyleValueUnit::Percent]);

    /// `Length | Percent | Auto`: margin, inset and flex-basis.
    pub const LENGTH_PERCENTAGE_AUTO: Self = Self::LENGTH_PERCENTAGE.with(StyleValueUnit::Auto);

    /// Every sizing keyword: width and height.
    pub const SIZE: Self = Self::LENGTH_PERCENTAGE_AUTO
        .with(StyleValueUnit::MinContent)
        .with(StyleValueUnit::MaxContent)
        .with(StyleValueUnit::FitContentLength)
        .with(StyleValueUnit::FitContentPercent);

    /// [`UnitSet::SIZE`] plus `Unset`: min/max width and height.
    pub const OPTIONAL_SIZE: Self = Self::SIZE.with(StyleValueUnit::Unset);

    /// Build a set from a list of units.
    pub const fn of(units: &[StyleValueUnit]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < units.len() {
            bits |= units[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Copy of `self` that also accepts `unit`.
    pub const fn with(self, unit: StyleValueUnit) -> Self {
        Self(self.0 | unit.bit())
    }

    /// Return `true` when `unit` is accepted.
    pub const fn contains(self, unit: StyleValueUnit) -> bool {
        self.0 & unit.bit() != 0
    }

    /// Accepted units in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = StyleValueUnit> {
        StyleValueUnit::ALL
            .iter()
            .copied()
            .filter(move |unit| self.contains(*unit))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/unit.rs"]
mod tests;
