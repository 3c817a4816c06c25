//! Property identifiers and their validation tables.

use crate::value::unit::UnitSet;

/// Categorical properties marshalled as bounded integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EnumProperty {
    /// `display`, a [`Display`](crate::Display).
    Display,
    /// `position`, a [`Position`](crate::Position).
    Position,
    /// `overflow-x`, an [`Overflow`](crate::Overflow).
    OverflowX,
    /// `overflow-y`, an [`Overflow`](crate::Overflow).
    OverflowY,
    /// `align-content`, an [`AlignContent`](crate::AlignContent).
    AlignContent,
    /// `align-items`, an [`AlignItems`](crate::AlignItems).
    AlignItems,
    /// `align-self`, an [`AlignItems`](crate::AlignItems).
    AlignSelf,
    /// `justify-content`, an [`AlignContent`](crate::AlignContent).
    JustifyContent,
    /// `justify-items`, an [`AlignItems`](crate::AlignItems).
    JustifyItems,
    /// `justify-self`, an [`AlignItems`](crate::AlignItems).
    JustifySelf,
    /// `flex-direction`, a [`FlexDirection`](crate::FlexDirection).
    FlexDirection,
    /// `flex-wrap`, a [`FlexWrap`](crate::FlexWrap).
    FlexWrap,
    /// `grid-auto-flow`, a [`GridAutoFlow`](crate::GridAutoFlow).
    GridAutoFlow,
}

impl EnumProperty {
    /// Every enum property.
    pub const ALL: [Self; 13] = [
        Self::Display,
        Self::Position,
        Self::OverflowX,
        Self::OverflowY,
        Self::AlignContent,
        Self::AlignItems,
        Self::AlignSelf,
        Self::JustifyContent,
        Self::JustifyItems,
        Self::JustifySelf,
        Self::FlexDirection,
        Self::FlexWrap,
        Self::GridAutoFlow,
    ];

    /// CSS name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Position => "position",
            Self::OverflowX => "overflow-x",
            Self::OverflowY => "overflow-y",
            Self::AlignContent => "align-content",
            Self::AlignItems => "align-items",
            Self::AlignSelf => "align-self",
            Self::JustifyContent => "justify-content",
            Self::JustifyItems => "justify-items",
            Self::JustifySelf => "justify-self",
            Self::FlexDirection => "flex-direction",
            Self::FlexWrap => "flex-wrap",
            Self::GridAutoFlow => "grid-auto-flow",
        }
    }

    /// Number of valid integers for this property.
    pub fn variant_count(self) -> i32 {
        use crate::style::enums;
        match self {
            Self::Display => enums::Display::COUNT,
            Self::Position => enums::Position::COUNT,
            Self::OverflowX | Self::OverflowY => enums::Overflow::COUNT,
            Self::AlignContent | Self::JustifyContent => enums::AlignContent::COUNT,
            Self::AlignItems | Self::AlignSelf | Self::JustifyItems | Self::JustifySelf => {
                enums::AlignItems::COUNT
            }
            Self::FlexDirection => enums::FlexDirection::COUNT,
            Self::FlexWrap => enums::FlexWrap::COUNT,
            Self::GridAutoFlow => enums::GridAutoFlow::COUNT,
        }
    }
}

/// Properties holding a [`Dimension`](crate::Dimension).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DimensionProperty {
    /// `width`.
    Width,
    /// `height`.
    Height,
    /// `min-width`.
    MinWidth,
    /// `min-height`.
    MinHeight,
    /// `max-width`.
    MaxWidth,
    /// `max-height`.
    MaxHeight,
    /// `top`.
    InsetTop,
    /// `bottom`.
    InsetBottom,
    /// `left`.
    InsetLeft,
    /// `right`.
    InsetRight,
    /// `margin-top`.
    MarginTop,
    /// `margin-bottom`.
    MarginBottom,
    /// `margin-left`.
    MarginLeft,
    /// `margin-right`.
    MarginRight,
    /// `padding-top`.
    PaddingTop,
    /// `padding-bottom`.
    PaddingBottom,
    /// `padding-left`.
    PaddingLeft,
    /// `padding-right`.
    PaddingRight,
    /// `border-top-width`.
    BorderTop,
    /// `border-bottom-width`.
    BorderBottom,
    /// `border-left-width`.
    BorderLeft,
    /// `border-right-width`.
    BorderRight,
    /// `row-gap`.
    RowGap,
    /// `column-gap`.
    ColumnGap,
    /// `flex-basis`.
    FlexBasis,
}

impl DimensionProperty {
    /// Every dimension property.
    pub const ALL: [Self; 25] = [
        Self::Width,
        Self::Height,
        Self::MinWidth,
        Self::MinHeight,
        Self::MaxWidth,
        Self::MaxHeight,
        Self::InsetTop,
        Self::InsetBottom,
        Self::InsetLeft,
        Self::InsetRight,
        Self::MarginTop,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::MarginRight,
        Self::PaddingTop,
        Self::PaddingBottom,
        Self::PaddingLeft,
        Self::PaddingRight,
        Self::BorderTop,
        Self::BorderBottom,
        Self::BorderLeft,
        Self::BorderRight,
        Self::RowGap,
        Self::ColumnGap,
        Self::FlexBasis,
    ];

    /// Units this property accepts.
    pub const fn allowed_units(self) -> UnitSet {
        match self {
            Self::Width | Self::Height => UnitSet::SIZE,
            Self::MinWidth | Self::MinHeight | Self::MaxWidth | Self::MaxHeight => {
                UnitSet::OPTIONAL_SIZE
            }
            Self::InsetTop
            | Self::InsetBottom
            | Self::InsetLeft
            | Self::InsetRight
            | Self::MarginTop
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::MarginRight
            | Self::FlexBasis => UnitSet::LENGTH_PERCENTAGE_AUTO,
            Self::PaddingTop
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::PaddingRight
            | Self::BorderTop
            | Self::BorderBottom
            | Self::BorderLeft
            | Self::BorderRight
            | Self::RowGap
            | Self::ColumnGap => UnitSet::LENGTH_PERCENTAGE,
        }
    }

    /// CSS name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MinHeight => "min-height",
            Self::MaxWidth => "max-width",
            Self::MaxHeight => "max-height",
            Self::InsetTop => "top",
            Self::InsetBottom => "bottom",
            Self::InsetLeft => "left",
            Self::InsetRight => "right",
            Self::MarginTop => "margin-top",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::MarginRight => "margin-right",
            Self::PaddingTop => "padding-top",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::PaddingRight => "padding-right",
            Self::BorderTop => "border-top-width",
            Self::BorderBottom => "border-bottom-width",
            Self::BorderLeft => "border-left-width",
            Self::BorderRight => "border-right-width",
            Self::RowGap => "row-gap",
            Self::ColumnGap => "column-gap",
            Self::FlexBasis => "flex-basis",
        }
    }
}

/// Plain numeric properties without a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FloatProperty {
    /// `aspect-ratio` as width / height; `0` means no preferred ratio.
    AspectRatio,
    /// Space reserved for a scrollbar when overflow is `Scroll`.
    ScrollbarWidth,
    /// `flex-grow`.
    FlexGrow,
    /// `flex-shrink`.
    FlexShrink,
}

impl FloatProperty {
    /// Every float property.
    pub const ALL: [Self; 4] = [
        Self::AspectRatio,
        Self::ScrollbarWidth,
        Self::FlexGrow,
        Self::FlexShrink,
    ];

    /// CSS name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AspectRatio => "aspect-ratio",
            Self::ScrollbarWidth => "scrollbar-width",
            Self::FlexGrow => "flex-grow",
            Self::FlexShrink => "flex-shrink",
        }
    }
}

/// Grid placement properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PlacementProperty {
    /// `grid-row`.
    GridRow,
    /// `grid-column`.
    GridColumn,
}

impl PlacementProperty {
    /// CSS name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GridRow => "grid-row",
            Self::GridColumn => "grid-column",
        }
    }
}

/// Physical side of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

bounded_enum! {
    /// Edge selector for batch setters.
    pub enum Edge {
        /// The top edge.
        Top,
        /// The bottom edge.
        Bottom,
        /// The left edge.
        Left,
        /// The right edge.
        Right,
        /// Top and bottom.
        Vertical,
        /// Left and right.
        Horizontal,
        /// All four edges.
        #[default]
        All,
    }
}

impl Edge {
    /// Sides covered by this selector.
    pub fn sides(self) -> &'static [Side] {
        match self {
            Self::Top => &[Side::Top],
            Self::Bottom => &[Side::Bottom],
            Self::Left => &[Side::Left],
            Self::Right => &[Side::Right],
            Self::Vertical => &[Side::Top, Side::Bottom],
            Self::Horizontal => &[Side::Left, Side::Right],
            Self::All => &[Side::Top, Side::Right, Side::Bottom, Side::Left],
        }
    }
}

/// Box-model categories with one dimension per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeCategory {
    /// `top`/`right`/`bottom`/`left`.
    Inset,
    /// `margin-*`.
    Margin,
    /// `padding-*`.
    Padding,
    /// `border-*-width`.
    Border,
}

impl EdgeCategory {
    /// Dimension property for one side of this category.
    pub fn property(self, side: Side) -> DimensionProperty {
        use DimensionProperty as P;
        match (self, side) {
            (Self::Inset, Side::Top) => P::InsetTop,
            (Self::Inset, Side::Right) => P::InsetRight,
            (Self::Inset, Side::Bottom) => P::InsetBottom,
            (Self::Inset, Side::Left) => P::InsetLeft,
            (Self::Margin, Side::Top) => P::MarginTop,
            (Self::Margin, Side::Right) => P::MarginRight,
            (Self::Margin, Side::Bottom) => P::MarginBottom,
            (Self::Margin, Side::Left) => P::MarginLeft,
            (Self::Padding, Side::Top) => P::PaddingTop,
            (Self::Padding, Side::Right) => P::PaddingRight,
            (Self::Padding, Side::Bottom) => P::PaddingBottom,
            (Self::Padding, Side::Left) => P::PaddingLeft,
            (Self::Border, Side::Top) => P::BorderTop,
            (Self::Border, Side::Right) => P::BorderRight,
            (Self::Border, Side::Bottom) => P::BorderBottom,
            (Self::Border, Side::Left) => P::BorderLeft,
        }
    }

    /// CSS shorthand name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inset => "inset",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Border => "border-width",
        }
    }

    /// Units accepted on every side of this category.
    pub fn allowed_units(self) -> UnitSet {
        self.property(Side::Top).allowed_units()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/property.rs"]
mod tests;
