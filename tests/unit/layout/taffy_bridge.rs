use super::*;
use crate::style::property::{
    DimensionProperty, Edge, EdgeCategory, EnumProperty, FloatProperty, PlacementProperty,
};
use crate::value::unit::StyleValueUnit;

#[test]
fn default_record_matches_engine_defaults_where_they_overlap() {
    let style = StyleRecord::new().to_taffy();
    let engine: ts::Style = ts::Style::default();

    assert_eq!(style.display, ts::Display::Flex);
    assert_eq!(style.position, engine.position);
    assert_eq!(style.size, engine.size);
    assert_eq!(style.min_size, engine.min_size);
    assert_eq!(style.max_size, engine.max_size);
    assert_eq!(style.margin, engine.margin);
    assert_eq!(style.padding, engine.padding);
    assert_eq!(style.border, engine.border);
    assert_eq!(style.inset, engine.inset);
    assert_eq!(style.gap, engine.gap);
    assert_eq!(style.flex_basis, engine.flex_basis);
    assert_eq!(style.flex_grow, 0.0);
    assert_eq!(style.flex_shrink, 1.0);
    assert_eq!(style.aspect_ratio, None);
    assert_eq!(style.align_items, None);
    assert_eq!(style.justify_content, None);
    assert_eq!(style.grid_row, engine.grid_row);
}

#[test]
fn enums_map_by_property() {
    let mut record = StyleRecord::new();
    record
        .set_enum(EnumProperty::Display, Display::Grid.as_i32())
        .unwrap();
    record
        .set_enum(EnumProperty::AlignContent, AlignContent::SpaceEvenly.as_i32())
        .unwrap();
    record
        .set_enum(EnumProperty::JustifySelf, AlignItems::Baseline.as_i32())
        .unwrap();
    record
        .set_enum(EnumProperty::OverflowY, Overflow::Scroll.as_i32())
        .unwrap();
    record
        .set_enum(EnumProperty::GridAutoFlow, GridAutoFlow::ColumnDense.as_i32())
        .unwrap();
    record
        .set_enum(EnumProperty::FlexDirection, FlexDirection::ColumnReverse.as_i32())
        .unwrap();

    let style = record.to_taffy();
    assert_eq!(style.display, ts::Display::Grid);
    assert_eq!(style.align_content, Some(ts::AlignContent::SpaceEvenly));
    assert_eq!(style.justify_self, Some(ts::AlignItems::Baseline));
    assert_eq!(style.overflow.x, ts::Overflow::Visible);
    assert_eq!(style.overflow.y, ts::Overflow::Scroll);
    assert_eq!(style.grid_auto_flow, ts::GridAutoFlow::ColumnDense);
    assert_eq!(style.flex_direction, ts::FlexDirection::ColumnReverse);
}

#[test]
fn dimensions_translate_or_fall_back_to_auto() {
    let mut record = StyleRecord::new();
    record
        .set_dimension(DimensionProperty::Width, 120.0, StyleValueUnit::Length)
        .unwrap();
    record
        .set_dimension(DimensionProperty::Height, 0.5, StyleValueUnit::Percent)
        .unwrap();
    record
        .set_dimension(DimensionProperty::MinWidth, 0.0, StyleValueUnit::MinContent)
        .unwrap();
    record
        .set_dimension(DimensionProperty::MaxHeight, 0.0, StyleValueUnit::Unset)
        .unwrap();
    record
        .set_edges(EdgeCategory::Padding, Edge::All, 4.0, StyleValueUnit::Length)
        .unwrap();
    record
        .set_dimension(DimensionProperty::MarginLeft, 0.0, StyleValueUnit::Auto)
        .unwrap();
    record
        .set_dimension(DimensionProperty::ColumnGap, 10.0, StyleValueUnit::Length)
        .unwrap();

    let style = record.to_taffy();
    assert_eq!(style.size.width, ts::Dimension::length(120.0));
    assert_eq!(style.size.height, ts::Dimension::percent(0.5));
    assert_eq!(style.min_size.width, ts::Dimension::auto());
    assert_eq!(style.max_size.height, ts::Dimension::auto());
    assert_eq!(style.padding.top, ts::LengthPercentage::length(4.0));
    assert_eq!(style.padding.left, ts::LengthPercentage::length(4.0));
    assert_eq!(style.margin.left, ts::LengthPercentageAuto::auto());
    assert_eq!(style.margin.right, ts::LengthPercentageAuto::length(0.0));
    assert_eq!(style.gap.width, ts::LengthPercentage::length(10.0));
    assert_eq!(style.gap.height, ts::LengthPercentage::length(0.0));
}

#[test]
fn scalars_translate() {
    let mut record = StyleRecord::new();
    record.set_float(FloatProperty::AspectRatio, 1.5).unwrap();
    record.set_float(FloatProperty::FlexGrow, 2.0).unwrap();
    record.set_float(FloatProperty::ScrollbarWidth, 8.0).unwrap();

    let style: ts::Style = ts::Style::from(&record);
    assert_eq!(style.aspect_ratio, Some(1.5));
    assert_eq!(style.flex_grow, 2.0);
    assert_eq!(style.scrollbar_width, 8.0);
}

#[test]
fn grid_placements() {
    let auto: ts::GridPlacement = ts::GridPlacement::Auto;
    let line = |i: i16| -> ts::GridPlacement { ts::GridPlacement::Line(i.into()) };

    let cases = [
        (GridPlacement::new(0, 0, 0), (auto.clone(), auto.clone())),
        (GridPlacement::new(0, 0, 2), (ts::GridPlacement::Span(2), auto.clone())),
        (GridPlacement::new(2, 0, 0), (line(2), auto.clone())),
        (GridPlacement::new(0, -1, 0), (auto.clone(), line(-1))),
        (GridPlacement::new(1, 0, 3), (line(1), ts::GridPlacement::Span(3))),
        (GridPlacement::new(0, 4, 2), (ts::GridPlacement::Span(2), line(4))),
        (GridPlacement::new(1, 3, 0), (line(1), line(3))),
        (GridPlacement::new(1, 3, 5), (line(1), line(3))),
    ];

    for (placement, (start, end)) in cases {
        let mut record = StyleRecord::new();
        record.set_placement(PlacementProperty::GridColumn, placement);
        let style = record.to_taffy();
        assert_eq!(style.grid_column.start, start, "{placement:?}");
        assert_eq!(style.grid_column.end, end, "{placement:?}");
    }
}
