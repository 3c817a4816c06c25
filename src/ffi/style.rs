use super::{TaffyStyleConstRef, TaffyStyleMutRef};
use crate::access::{
    self,
    envelope::{FloatResult, GridPlacementResult, IntResult, StyleValueResult},
};
use crate::foundation::error::ReturnCode;
use crate::style::property::{
    DimensionProperty, EdgeCategory, EnumProperty, FloatProperty, PlacementProperty,
};
use crate::value::placement::GridPlacement;

macro_rules! enum_accessors {
    ($($get:ident, $set:ident => $property:ident;)+) => {$(
        #[doc = concat!("Read `", stringify!($property), "` as an integer.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(raw_style: TaffyStyleConstRef) -> IntResult {
            // SAFETY: the caller guarantees the pointer is null or valid for reads.
            access::get_enum(unsafe { raw_style.as_ref() }, EnumProperty::$property)
        }

        #[doc = concat!("Set `", stringify!($property), "` from its integer value.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record not aliased elsewhere.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(raw_style: TaffyStyleMutRef, value: i32) -> ReturnCode {
            // SAFETY: the caller guarantees the pointer is null or valid and unaliased.
            access::set_enum(unsafe { raw_style.as_mut() }, EnumProperty::$property, value)
        }
    )+};
}

macro_rules! dimension_accessors {
    ($($get:ident, $set:ident => $property:ident;)+) => {$(
        #[doc = concat!("Read `", stringify!($property), "` as a `(value, unit)` pair.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(raw_style: TaffyStyleConstRef) -> StyleValueResult {
            // SAFETY: the caller guarantees the pointer is null or valid for reads.
            access::get_dimension(unsafe { raw_style.as_ref() }, DimensionProperty::$property)
        }

        #[doc = concat!("Set `", stringify!($property), "` from a magnitude and a unit tag.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record not aliased elsewhere.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(
            raw_style: TaffyStyleMutRef,
            value: f32,
            unit: i32,
        ) -> ReturnCode {
            // SAFETY: the caller guarantees the pointer is null or valid and unaliased.
            let style = unsafe { raw_style.as_mut() };
            access::set_dimension(style, DimensionProperty::$property, value, unit)
        }
    )+};
}

macro_rules! float_accessors {
    ($($get:ident, $set:ident => $property:ident;)+) => {$(
        #[doc = concat!("Read `", stringify!($property), "`.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(raw_style: TaffyStyleConstRef) -> FloatResult {
            // SAFETY: the caller guarantees the pointer is null or valid for reads.
            access::get_float(unsafe { raw_style.as_ref() }, FloatProperty::$property)
        }

        #[doc = concat!("Set `", stringify!($property), "`. NaN, infinite and negative values are rejected.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record not aliased elsewhere.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(raw_style: TaffyStyleMutRef, value: f32) -> ReturnCode {
            // SAFETY: the caller guarantees the pointer is null or valid and unaliased.
            access::set_float(unsafe { raw_style.as_mut() }, FloatProperty::$property, value)
        }
    )+};
}

macro_rules! placement_accessors {
    ($($get:ident, $set:ident => $property:ident;)+) => {$(
        #[doc = concat!("Read the `", stringify!($property), "` placement.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $get(raw_style: TaffyStyleConstRef) -> GridPlacementResult {
            // SAFETY: the caller guarantees the pointer is null or valid for reads.
            access::get_placement(unsafe { raw_style.as_ref() }, PlacementProperty::$property)
        }

        #[doc = concat!("Set the `", stringify!($property), "` placement verbatim.")]
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record not aliased elsewhere.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(
            raw_style: TaffyStyleMutRef,
            placement: GridPlacement,
        ) -> ReturnCode {
            // SAFETY: the caller guarantees the pointer is null or valid and unaliased.
            let style = unsafe { raw_style.as_mut() };
            access::set_placement(style, PlacementProperty::$property, placement)
        }
    )+};
}

macro_rules! edge_setters {
    ($($set:ident, $set_trbl:ident => $category:ident;)+) => {$(
        #[doc = concat!("Set the `", stringify!($category), "` sides selected by `edge`.")]
        ///
        /// `edge` is a `TaffyEdge` value; the value is validated once and written to every
        /// selected side.
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record not aliased elsewhere.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $set(
            raw_style: TaffyStyleMutRef,
            edge: i32,
            value: f32,
            unit: i32,
        ) -> ReturnCode {
            // SAFETY: the caller guarantees the pointer is null or valid and unaliased.
            let style = unsafe { raw_style.as_mut() };
            access::set_edges(style, EdgeCategory::$category, edge, value, unit)
        }

        #[doc = concat!("Set all four `", stringify!($category), "` sides at once.")]
        ///
        /// Nothing is written unless every side is valid.
        ///
        /// # Safety
        ///
        /// `raw_style` must be null or point to a live record not aliased elsewhere.
        #[unsafe(no_mangle)]
        #[allow(clippy::too_many_arguments)]
        pub unsafe extern "C" fn $set_trbl(
            raw_style: TaffyStyleMutRef,
            top_value: f32,
            top_unit: i32,
            right_value: f32,
            right_unit: i32,
            bottom_value: f32,
            bottom_unit: i32,
            left_value: f32,
            left_unit: i32,
        ) -> ReturnCode {
            // SAFETY: the caller guarantees the pointer is null or valid and unaliased.
            let style = unsafe { raw_style.as_mut() };
            access::set_edges_trbl(
                style,
                EdgeCategory::$category,
                (top_value, top_unit),
                (right_value, right_unit),
                (bottom_value, bottom_unit),
                (left_value, left_unit),
            )
        }
    )+};
}

enum_accessors! {
    TaffyStyle_GetDisplay, TaffyStyle_SetDisplay => Display;
    TaffyStyle_GetPosition, TaffyStyle_SetPosition => Position;
    TaffyStyle_GetOverflowX, TaffyStyle_SetOverflowX => OverflowX;
    TaffyStyle_GetOverflowY, TaffyStyle_SetOverflowY => OverflowY;
    TaffyStyle_GetAlignContent, TaffyStyle_SetAlignContent => AlignContent;
    TaffyStyle_GetAlignItems, TaffyStyle_SetAlignItems => AlignItems;
    TaffyStyle_GetAlignSelf, TaffyStyle_SetAlignSelf => AlignSelf;
    TaffyStyle_GetJustifyContent, TaffyStyle_SetJustifyContent => JustifyContent;
    TaffyStyle_GetJustifyItems, TaffyStyle_SetJustifyItems => JustifyItems;
    TaffyStyle_GetJustifySelf, TaffyStyle_SetJustifySelf => JustifySelf;
    TaffyStyle_GetFlexDirection, TaffyStyle_SetFlexDirection => FlexDirection;
    TaffyStyle_GetFlexWrap, TaffyStyle_SetFlexWrap => FlexWrap;
    TaffyStyle_GetGridAutoFlow, TaffyStyle_SetGridAutoFlow => GridAutoFlow;
}

dimension_accessors! {
    TaffyStyle_GetWidth, TaffyStyle_SetWidth => Width;
    TaffyStyle_GetHeight, TaffyStyle_SetHeight => Height;
    TaffyStyle_GetMinWidth, TaffyStyle_SetMinWidth => MinWidth;
    TaffyStyle_GetMinHeight, TaffyStyle_SetMinHeight => MinHeight;
    TaffyStyle_GetMaxWidth, TaffyStyle_SetMaxWidth => MaxWidth;
    TaffyStyle_GetMaxHeight, TaffyStyle_SetMaxHeight => MaxHeight;
    TaffyStyle_GetInsetTop, TaffyStyle_SetInsetTop => InsetTop;
    TaffyStyle_GetInsetBottom, TaffyStyle_SetInsetBottom => InsetBottom;
    TaffyStyle_GetInsetLeft, TaffyStyle_SetInsetLeft => InsetLeft;
    TaffyStyle_GetInsetRight, TaffyStyle_SetInsetRight => InsetRight;
    TaffyStyle_GetMarginTop, TaffyStyle_SetMarginTop => MarginTop;
    TaffyStyle_GetMarginBottom, TaffyStyle_SetMarginBottom => MarginBottom;
    TaffyStyle_GetMarginLeft, TaffyStyle_SetMarginLeft => MarginLeft;
    TaffyStyle_GetMarginRight, TaffyStyle_SetMarginRight => MarginRight;
    TaffyStyle_GetPaddingTop, TaffyStyle_SetPaddingTop => PaddingTop;
    TaffyStyle_GetPaddingBottom, TaffyStyle_SetPaddingBottom => PaddingBottom;
    TaffyStyle_GetPaddingLeft, TaffyStyle_SetPaddingLeft => PaddingLeft;
    TaffyStyle_GetPaddingRight, TaffyStyle_SetPaddingRight => PaddingRight;
    TaffyStyle_GetBorderTop, TaffyStyle_SetBorderTop => BorderTop;
    TaffyStyle_GetBorderBottom, TaffyStyle_SetBorderBottom => BorderBottom;
    TaffyStyle_GetBorderLeft, TaffyStyle_SetBorderLeft => BorderLeft;
    TaffyStyle_GetBorderRight, TaffyStyle_SetBorderRight => BorderRight;
    TaffyStyle_GetRowGap, TaffyStyle_SetRowGap => RowGap;
    TaffyStyle_GetColumnGap, TaffyStyle_SetColumnGap => ColumnGap;
    TaffyStyle_GetFlexBasis, TaffyStyle_SetFlexBasis => FlexBasis;
}

float_accessors! {
    TaffyStyle_GetAspectRatio, TaffyStyle_SetAspectRatio => AspectRatio;
    TaffyStyle_GetScrollbarWidth, TaffyStyle_SetScrollbarWidth => ScrollbarWidth;
    TaffyStyle_GetFlexGrow, TaffyStyle_SetFlexGrow => FlexGrow;
    TaffyStyle_GetFlexShrink, TaffyStyle_SetFlexShrink => FlexShrink;
}

placement_accessors! {
    TaffyStyle_GetGridRow, TaffyStyle_SetGridRow => GridRow;
    TaffyStyle_GetGridColumn, TaffyStyle_SetGridColumn => GridColumn;
}

edge_setters! {
    TaffyStyle_SetInset, TaffyStyle_SetInsetTrbl => Inset;
    TaffyStyle_SetMargin, TaffyStyle_SetMarginTrbl => Margin;
    TaffyStyle_SetPadding, TaffyStyle_SetPaddingTrbl => Padding;
    TaffyStyle_SetBorder, TaffyStyle_SetBorderTrbl => Border;
}
