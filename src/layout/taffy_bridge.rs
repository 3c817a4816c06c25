use crate::style::enums::{
    AlignContent, AlignItems, Display, FlexDirection, FlexWrap, GridAutoFlow, Overflow, Position,
};
use crate::style::record::{Edges, StyleRecord};
use crate::value::dimension::Dimension;
use crate::value::placement::GridPlacement;
use taffy::geometry::{Line, Point, Rect, Size};
use taffy::style as ts;

impl StyleRecord {
    /// Build the equivalent [`taffy::Style`].
    ///
    /// Grid templates and other properties this record does not carry keep Taffy's
    /// defaults.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn to_taffy(&self) -> ts::Style {
        ts::Style {
            display: display(self.display),
            position: position(self.position),
            overflow: Point {
                x: overflow(self.overflow_x),
                y: overflow(self.overflow_y),
            },
            scrollbar_width: self.scrollbar_width,

            align_content: align_content(self.align_content),
            justify_content: align_content(self.justify_content),
            align_items: align_items(self.align_items),
            align_self: align_items(self.align_self),
            justify_items: align_items(self.justify_items),
            justify_self: align_items(self.justify_self),

            size: Size {
                width: dimension(self.width),
                height: dimension(self.height),
            },
            min_size: Size {
                width: dimension(self.min_width),
                height: dimension(self.min_height),
            },
            max_size: Size {
                width: dimension(self.max_width),
                height: dimension(self.max_height),
            },
            aspect_ratio: (self.aspect_ratio > 0.0).then_some(self.aspect_ratio),

            inset: rect_auto(&self.inset),
            margin: rect_auto(&self.margin),
            padding: rect(&self.padding),
            border: rect(&self.border),
            gap: Size {
                width: length_percentage(self.column_gap),
                height: length_percentage(self.row_gap),
            },

            flex_direction: flex_direction(self.flex_direction),
            flex_wrap: flex_wrap(self.flex_wrap),
            flex_basis: dimension(self.flex_basis),
            flex_grow: self.flex_grow,
            flex_shrink: self.flex_shrink,

            grid_auto_flow: grid_auto_flow(self.grid_auto_flow),
            grid_row: grid_line(self.grid_row),
            grid_column: grid_line(self.grid_column),

            ..ts::Style::default()
        }
    }
}

impl From<&StyleRecord> for ts::Style {
    fn from(record: &StyleRecord) -> Self {
        record.to_taffy()
    }
}

fn display(value: Display) -> ts::Display {
    match value {
        Display::Block => ts::Display::Block,
        Display::Flex => ts::Display::Flex,
        Display::Grid => ts::Display::Grid,
        Display::None => ts::Display::None,
    }
}

fn position(value: Position) -> ts::Position {
    match value {
        Position::Relative => ts::Position::Relative,
        Position::Absolute => ts::Position::Absolute,
    }
}

fn overflow(value: Overflow) -> ts::Overflow {
    match value {
        Overflow::Visible => ts::Overflow::Visible,
        Overflow::Hidden => ts::Overflow::Hidden,
        Overflow::Scroll => ts::Overflow::Scroll,
    }
}

fn align_content(value: AlignContent) -> Option<ts::AlignContent> {
    Some(match value {
        AlignContent::Normal => return None,
        AlignContent::Start => ts::AlignContent::Start,
        AlignContent::End => ts::AlignContent::End,
        AlignContent::FlexStart => ts::AlignContent::FlexStart,
        AlignContent::FlexEnd => ts::AlignContent::FlexEnd,
        AlignContent::Center => ts::AlignContent::Center,
        AlignContent::Stretch => ts::AlignContent::Stretch,
        AlignContent::SpaceBetween => ts::AlignContent::SpaceBetween,
        AlignContent::SpaceEvenly => ts::AlignContent::SpaceEvenly,
        AlignContent::SpaceAround => ts::AlignContent::SpaceAround,
    })
}

fn align_items(value: AlignItems) -> Option<ts::AlignItems> {
    Some(match value {
        AlignItems::Normal => return None,
        AlignItems::Start => ts::AlignItems::Start,
        AlignItems::End => ts::AlignItems::End,
        AlignItems::FlexStart => ts::AlignItems::FlexStart,
        AlignItems::FlexEnd => ts::AlignItems::FlexEnd,
        AlignItems::Center => ts::AlignItems::Center,
        AlignItems::Baseline => ts::AlignItems::Baseline,
        AlignItems::Stretch => ts::AlignItems::Stretch,
    })
}

fn flex_direction(value: FlexDirection) -> ts::FlexDirection {
    match value {
        FlexDirection::Row => ts::FlexDirection::Row,
        FlexDirection::Column => ts::FlexDirection::Column,
        FlexDirection::RowReverse => ts::FlexDirection::RowReverse,
        FlexDirection::ColumnReverse => ts::FlexDirection::ColumnReverse,
    }
}

fn flex_wrap(value: FlexWrap) -> ts::FlexWrap {
    match value {
        FlexWrap::NoWrap => ts::FlexWrap::NoWrap,
        FlexWrap::Wrap => ts::FlexWrap::Wrap,
        FlexWrap::WrapReverse => ts::FlexWrap::WrapReverse,
    }
}

fn grid_auto_flow(value: GridAutoFlow) -> ts::GridAutoFlow {
    match value {
        GridAutoFlow::Row => ts::GridAutoFlow::Row,
        GridAutoFlow::Column => ts::GridAutoFlow::Column,
        GridAutoFlow::RowDense => ts::GridAutoFlow::RowDense,
        GridAutoFlow::ColumnDense => ts::GridAutoFlow::ColumnDense,
    }
}

// Content-based sizes have no `Dimension` counterpart in the engine.
fn dimension(value: Dimension) -> ts::Dimension {
    match value {
        Dimension::Length(m) => ts::Dimension::length(m.get()),
        Dimension::Percent(m) => ts::Dimension::percent(m.get()),
        Dimension::Unset(_)
        | Dimension::MinContent(_)
        | Dimension::MaxContent(_)
        | Dimension::FitContentLength(_)
        | Dimension::FitContentPercent(_)
        | Dimension::Auto(_)
        | Dimension::Fraction(_) => ts::Dimension::auto(),
    }
}

fn length_percentage_auto(value: Dimension) -> ts::LengthPercentageAuto {
    match value {
        Dimension::Length(m) => ts::LengthPercentageAuto::length(m.get()),
        Dimension::Percent(m) => ts::LengthPercentageAuto::percent(m.get()),
        _ => ts::LengthPercentageAuto::auto(),
    }
}

fn length_percentage(value: Dimension) -> ts::LengthPercentage {
    match value {
        Dimension::Percent(m) => ts::LengthPercentage::percent(m.get()),
        Dimension::Length(m) => ts::LengthPercentage::length(m.get()),
        _ => ts::LengthPercentage::length(0.0),
    }
}

fn rect_auto(edges: &Edges) -> Rect<ts::LengthPercentageAuto> {
    Rect {
        left: length_percentage_auto(edges.left),
        right: length_percentage_auto(edges.right),
        top: length_percentage_auto(edges.top),
        bottom: length_percentage_auto(edges.bottom),
    }
}

fn rect(edges: &Edges) -> Rect<ts::LengthPercentage> {
    Rect {
        left: length_percentage(edges.left),
        right: length_percentage(edges.right),
        top: length_percentage(edges.top),
        bottom: length_percentage(edges.bottom),
    }
}

fn grid_line(placement: GridPlacement) -> Line<ts::GridPlacement> {
    let line = |index: i16| -> ts::GridPlacement { ts::GridPlacement::Line(index.into()) };
    let (start, end) = match (placement.start, placement.end, placement.span) {
        (0, 0, 0) => (ts::GridPlacement::Auto, ts::GridPlacement::Auto),
        (0, 0, span) => (ts::GridPlacement::Span(span), ts::GridPlacement::Auto),
        (start, 0, 0) => (line(start), ts::GridPlacement::Auto),
        (0, end, 0) => (ts::GridPlacement::Auto, line(end)),
        (start, 0, span) => (line(start), ts::GridPlacement::Span(span)),
        (0, end, span) => (ts::GridPlacement::Span(span), line(end)),
        (start, end, _) => (line(start), line(end)),
    };
    Line { start, end }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/taffy_bridge.rs"]
mod tests;
