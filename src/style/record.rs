use crate::foundation::error::{StyleResult, check_non_negative};
use crate::style::enums::{
    AlignContent, AlignItems, Display, FlexDirection, FlexWrap, GridAutoFlow, Overflow, Position,
};
use crate::style::property::{
    DimensionProperty, Edge, EdgeCategory, EnumProperty, FloatProperty, PlacementProperty, Side,
};
use crate::value::dimension::{Dimension, StyleValue};
use crate::value::placement::GridPlacement;
use crate::value::unit::StyleValueUnit;

/// One dimension per physical side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Edges {
    pub(crate) top: Dimension,
    pub(crate) right: Dimension,
    pub(crate) bottom: Dimension,
    pub(crate) left: Dimension,
}

impl Edges {
    const fn uniform(value: Dimension) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    fn side(&self, side: Side) -> &Dimension {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Dimension {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }
}

/// Every style property of one layout node.
///
/// The fields are only reachable through validating accessors, so a record never holds a
/// unit outside its property's whitelist or a NaN, infinite or negative magnitude.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRecord {
    pub(crate) display: Display,
    pub(crate) position: Position,
    pub(crate) overflow_x: Overflow,
    pub(crate) overflow_y: Overflow,
    pub(crate) align_content: AlignContent,
    pub(crate) align_items: AlignItems,
    pub(crate) align_self: AlignItems,
    pub(crate) justify_content: AlignContent,
    pub(crate) justify_items: AlignItems,
    pub(crate) justify_self: AlignItems,
    pub(crate) flex_direction: FlexDirection,
    pub(crate) flex_wrap: FlexWrap,
    pub(crate) grid_auto_flow: GridAutoFlow,

    pub(crate) width: Dimension,
    pub(crate) height: Dimension,
    pub(crate) min_width: Dimension,
    pub(crate) min_height: Dimension,
    pub(crate) max_width: Dimension,
    pub(crate) max_height: Dimension,
    pub(crate) inset: Edges,
    pub(crate) margin: Edges,
    pub(crate) padding: Edges,
    pub(crate) border: Edges,
    pub(crate) row_gap: Dimension,
    pub(crate) column_gap: Dimension,
    pub(crate) flex_basis: Dimension,

    pub(crate) aspect_ratio: f32,
    pub(crate) scrollbar_width: f32,
    pub(crate) flex_grow: f32,
    pub(crate) flex_shrink: f32,

    pub(crate) grid_row: GridPlacement,
    pub(crate) grid_column: GridPlacement,
}

impl Default for StyleRecord {
    fn default() -> Self {
        Self {
            display: Display::default(),
            position: Position::default(),
            overflow_x: Overflow::default(),
            overflow_y: Overflow::default(),
            align_content: AlignContent::default(),
            align_items: AlignItems::default(),
            align_self: AlignItems::default(),
            justify_content: AlignContent::default(),
            justify_items: AlignItems::default(),
            justify_self: AlignItems::default(),
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            grid_auto_flow: GridAutoFlow::default(),

            width: Dimension::AUTO,
            height: Dimension::AUTO,
            min_width: Dimension::AUTO,
            min_height: Dimension::AUTO,
            max_width: Dimension::AUTO,
            max_height: Dimension::AUTO,
            inset: Edges::uniform(Dimension::AUTO),
            margin: Edges::uniform(Dimension::ZERO),
            padding: Edges::uniform(Dimension::ZERO),
            border: Edges::uniform(Dimension::ZERO),
            row_gap: Dimension::ZERO,
            column_gap: Dimension::ZERO,
            flex_basis: Dimension::AUTO,

            aspect_ratio: 0.0,
            scrollbar_width: 0.0,
            flex_grow: 0.0,
            flex_shrink: 1.0,

            grid_row: GridPlacement::AUTO,
            grid_column: GridPlacement::AUTO,
        }
    }
}

impl StyleRecord {
    /// Record holding the default value of every property.
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer value of a categorical property. Always in `[0, property.variant_count())`.
    pub fn enum_value(&self, property: EnumProperty) -> i32 {
        match property {
            EnumProperty::Display => self.display.as_i32(),
            EnumProperty::Position => self.position.as_i32(),
            EnumProperty::OverflowX => self.overflow_x.as_i32(),
            EnumProperty::OverflowY => self.overflow_y.as_i32(),
            EnumProperty::AlignContent => self.align_content.as_i32(),
            EnumProperty::AlignItems => self.align_items.as_i32(),
            EnumProperty::AlignSelf => self.align_self.as_i32(),
            EnumProperty::JustifyContent => self.justify_content.as_i32(),
            EnumProperty::JustifyItems => self.justify_items.as_i32(),
            EnumProperty::JustifySelf => self.justify_self.as_i32(),
            EnumProperty::FlexDirection => self.flex_direction.as_i32(),
            EnumProperty::FlexWrap => self.flex_wrap.as_i32(),
            EnumProperty::GridAutoFlow => self.grid_auto_flow.as_i32(),
        }
    }

    /// Replace a categorical property, decoding `value` with that property's own bounds.
    pub fn set_enum(&mut self, property: EnumProperty, value: i32) -> StyleResult<()> {
        match property {
            EnumProperty::Display => self.display = value.try_into()?,
            EnumProperty::Position => self.position = value.try_into()?,
            EnumProperty::OverflowX => self.overflow_x = value.try_into()?,
            EnumProperty::OverflowY => self.overflow_y = value.try_into()?,
            EnumProperty::AlignContent => self.align_content = value.try_into()?,
            EnumProperty::AlignItems => self.align_items = value.try_into()?,
            EnumProperty::AlignSelf => self.align_self = value.try_into()?,
            EnumProperty::JustifyContent => self.justify_content = value.try_into()?,
            EnumProperty::JustifyItems => self.justify_items = value.try_into()?,
            EnumProperty::JustifySelf => self.justify_self = value.try_into()?,
            EnumProperty::FlexDirection => self.flex_direction = value.try_into()?,
            EnumProperty::FlexWrap => self.flex_wrap = value.try_into()?,
            EnumProperty::GridAutoFlow => self.grid_auto_flow = value.try_into()?,
        }
        Ok(())
    }

    /// Stored dimension as a boundary pair.
    pub fn dimension(&self, property: DimensionProperty) -> StyleValue {
        (*self.dimension_slot(property)).into()
    }

    /// Validate and store a dimension.
    pub fn set_dimension(
        &mut self,
        property: DimensionProperty,
        value: f32,
        unit: StyleValueUnit,
    ) -> StyleResult<()> {
        let dimension =
            Dimension::decode(property.name(), property.allowed_units(), value, unit)?;
        *self.dimension_slot_mut(property) = dimension;
        Ok(())
    }

    /// Stored value of a plain numeric property.
    pub fn float(&self, property: FloatProperty) -> f32 {
        match property {
            FloatProperty::AspectRatio => self.aspect_ratio,
            FloatProperty::ScrollbarWidth => self.scrollbar_width,
            FloatProperty::FlexGrow => self.flex_grow,
            FloatProperty::FlexShrink => self.flex_shrink,
        }
    }

    /// Validate and store a plain numeric property.
    pub fn set_float(&mut self, property: FloatProperty, value: f32) -> StyleResult<()> {
        let value = check_non_negative(value)?;
        match property {
            FloatProperty::AspectRatio => self.aspect_ratio = value,
            FloatProperty::ScrollbarWidth => self.scrollbar_width = value,
            FloatProperty::FlexGrow => self.flex_grow = value,
            FloatProperty::FlexShrink => self.flex_shrink = value,
        }
        Ok(())
    }

    /// Stored grid placement, verbatim.
    pub fn placement(&self, property: PlacementProperty) -> GridPlacement {
        match property {
            PlacementProperty::GridRow => self.grid_row,
            PlacementProperty::GridColumn => self.grid_column,
        }
    }

    /// Store a grid placement without normalization.
    pub fn set_placement(&mut self, property: PlacementProperty, placement: GridPlacement) {
        match property {
            PlacementProperty::GridRow => self.grid_row = placement,
            PlacementProperty::GridColumn => self.grid_column = placement,
        }
    }

    /// Apply one value to every side selected by `edge`.
    ///
    /// The value is validated once against the category's whitelist; on failure no side
    /// is modified.
    pub fn set_edges(
        &mut self,
        category: EdgeCategory,
        edge: Edge,
        value: f32,
        unit: StyleValueUnit,
    ) -> StyleResult<()> {
        let dimension = Dimension::decode(category.name(), category.allowed_units(), value, unit)?;
        let edges = self.edges_mut(category);
        for side in edge.sides() {
            *edges.side_mut(*side) = dimension;
        }
        Ok(())
    }

    /// Set all four sides of a category at once.
    ///
    /// Sides are validated in top, right, bottom, left order and written only if all four
    /// are valid.
    pub fn set_edges_trbl(
        &mut self,
        category: EdgeCategory,
        top: StyleValue,
        right: StyleValue,
        bottom: StyleValue,
        left: StyleValue,
    ) -> StyleResult<()> {
        let decode = |side: Side, value: StyleValue| {
            let property = category.property(side);
            Dimension::decode(property.name(), property.allowed_units(), value.value, value.unit)
        };
        let decoded = Edges {
            top: decode(Side::Top, top)?,
            right: decode(Side::Right, right)?,
            bottom: decode(Side::Bottom, bottom)?,
            left: decode(Side::Left, left)?,
        };
        *self.edges_mut(category) = decoded;
        Ok(())
    }

    fn edges_mut(&mut self, category: EdgeCategory) -> &mut Edges {
        match category {
            EdgeCategory::Inset => &mut self.inset,
            EdgeCategory::Margin => &mut self.margin,
            EdgeCategory::Padding => &mut self.padding,
            EdgeCategory::Border => &mut self.border,
        }
    }

    fn dimension_slot(&self, property: DimensionProperty) -> &Dimension {
        use DimensionProperty as P;
        match property {
            P::Width => &self.width,
            P::Height => &self.height,
            P::MinWidth => &self.min_width,
            P::MinHeight => &self.min_height,
            P::MaxWidth => &self.max_width,
            P::MaxHeight => &self.max_height,
            P::InsetTop => self.inset.side(Side::Top),
            P::InsetBottom => self.inset.side(Side::Bottom),
            P::InsetLeft => self.inset.side(Side::Left),
            P::InsetRight => self.inset.side(Side::Right),
            P::MarginTop => self.margin.side(Side::Top),
            P::MarginBottom => self.margin.side(Side::Bottom),
            P::MarginLeft => self.margin.side(Side::Left),
            P::MarginRight => self.margin.side(Side::Right),
            P::PaddingTop => self.padding.side(Side::Top),
            P::PaddingBottom => self.padding.side(Side::Bottom),
            P::PaddingLeft => self.padding.side(Side::Left),
            P::PaddingRight => self.padding.side(Side::Right),
            P::BorderTop => self.border.side(Side::Top),
            P::BorderBottom => self.border.side(Side::Bottom),
            P::BorderLeft => self.border.side(Side::Left),
            P::BorderRight => self.border.side(Side::Right),
            P::RowGap => &self.row_gap,
            P::ColumnGap => &self.column_gap,
            P::FlexBasis => &self.flex_basis,
        }
    }

    fn dimension_slot_mut(&mut self, property: DimensionProperty) -> &mut Dimension {
        use DimensionProperty as P;
        match property {
            P::Width => &mut self.width,
            P::Height => &mut self.height,
            P::MinWidth => &mut self.min_width,
            P::MinHeight => &mut self.min_height,
            P::MaxWidth => &mut self.max_width,
            P::MaxHeight => &mut self.max_height,
            P::InsetTop => self.inset.side_mut(Side::Top),
            P::InsetBottom => self.inset.side_mut(Side::Bottom),
            P::InsetLeft => self.inset.side_mut(Side::Left),
            P::InsetRight => self.inset.side_mut(Side::Right),
            P::MarginTop => self.margin.side_mut(Side::Top),
            P::MarginBottom => self.margin.side_mut(Side::Bottom),
            P::MarginLeft => self.margin.side_mut(Side::Left),
            P::MarginRight => self.margin.side_mut(Side::Right),
            P::PaddingTop => self.padding.side_mut(Side::Top),
            P::PaddingBottom => self.padding.side_mut(Side::Bottom),
            P::PaddingLeft => self.padding.side_mut(Side::Left),
            P::PaddingRight => self.padding.side_mut(Side::Right),
            P::BorderTop => self.border.side_mut(Side::Top),
            P::BorderBottom => self.border.side_mut(Side::Bottom),
            P::BorderLeft => self.border.side_mut(Side::Left),
            P::BorderRight => self.border.side_mut(Side::Right),
            P::RowGap => &mut self.row_gap,
            P::ColumnGap => &mut self.column_gap,
            P::FlexBasis => &mut self.flex_basis,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/record.rs"]
mod tests;
