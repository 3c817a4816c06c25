/// Grid item placement along one axis.
///
/// Zero in any field means that field is not set. Triples are stored and returned
/// verbatim; combinational legality (for example start and end together with a span) is
/// left to the layout engine.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridPlacement {
    /// Start line, 1-based; negative values count from the end.
    pub start: i16,
    /// End line, 1-based; negative values count from the end.
    pub end: i16,
    /// Number of tracks spanned.
    pub span: u16,
}

impl GridPlacement {
    /// Fully unset placement.
    pub const AUTO: Self = Self::new(0, 0, 0);

    /// Build a placement from its parts.
    pub const fn new(start: i16, end: i16, span: u16) -> Self {
        Self { start, end, span }
    }

    /// Placement between two lines.
    pub const fn lines(start: i16, end: i16) -> Self {
        Self::new(start, end, 0)
    }

    /// Placement spanning `span` tracks from an automatic start.
    pub const fn span(span: u16) -> Self {
        Self::new(0, 0, span)
    }

    /// Return `true` when no field is set.
    pub fn is_auto(self) -> bool {
        self == Self::AUTO
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/placement.rs"]
mod tests;
