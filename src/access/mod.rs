//! Accessor layer between untyped callers and [`StyleRecord`].
//!
//! Every function takes an optional handle so a missing record is reported as
//! [`ReturnCode::NullStylePointer`] before any other check runs. Unit tags and edge
//! selectors arrive as raw integers and are range-checked before numeric validation,
//! which in turn runs before the per-property unit whitelist. Setters never modify the
//! record when they fail.

pub(crate) mod envelope;

use crate::foundation::error::{ReturnCode, StyleError, StyleResult};
use crate::style::property::{
    DimensionProperty, Edge, EdgeCategory, EnumProperty, FloatProperty, PlacementProperty,
};
use crate::style::record::StyleRecord;
use crate::value::dimension::StyleValue;
use crate::value::placement::GridPlacement;
use crate::value::unit::StyleValueUnit;
use envelope::{FfiResult, FloatResult, GridPlacementResult, IntResult, StyleValueResult};

fn read<T: Default>(
    style: Option<&StyleRecord>,
    get: impl FnOnce(&StyleRecord) -> T,
) -> FfiResult<T> {
    style.ok_or(StyleError::NullStylePointer).map(get).into()
}

fn write(
    style: Option<&mut StyleRecord>,
    property: &'static str,
    set: impl FnOnce(&mut StyleRecord) -> StyleResult<()>,
) -> ReturnCode {
    let result = style.ok_or(StyleError::NullStylePointer).and_then(set);
    if let Err(err) = &result {
        tracing::trace!(property, code = ?err.return_code(), %err, "style write rejected");
    }
    result.into()
}

/// Read a categorical property as an integer.
pub fn get_enum(style: Option<&StyleRecord>, property: EnumProperty) -> IntResult {
    read(style, |style| style.enum_value(property))
}

/// Replace a categorical property. `value` must lie in `[0, property.variant_count())`.
pub fn set_enum(style: Option<&mut StyleRecord>, property: EnumProperty, value: i32) -> ReturnCode {
    write(style, property.name(), |style| style.set_enum(property, value))
}

/// Read a dimension property.
pub fn get_dimension(style: Option<&StyleRecord>, property: DimensionProperty) -> StyleValueResult {
    read(style, |style| style.dimension(property))
}

/// Validate and store a dimension property from a raw `(value, unit)` pair.
pub fn set_dimension(
    style: Option<&mut StyleRecord>,
    property: DimensionProperty,
    value: f32,
    unit: i32,
) -> ReturnCode {
    write(style, property.name(), |style| {
        let unit = StyleValueUnit::try_from(unit)?;
        style.set_dimension(property, value, unit)
    })
}

/// Read a plain numeric property.
pub fn get_float(style: Option<&StyleRecord>, property: FloatProperty) -> FloatResult {
    read(style, |style| style.float(property))
}

/// Validate and store a plain numeric property.
pub fn set_float(style: Option<&mut StyleRecord>, property: FloatProperty, value: f32) -> ReturnCode {
    write(style, property.name(), |style| style.set_float(property, value))
}

/// Read a grid placement.
pub fn get_placement(
    style: Option<&StyleRecord>,
    property: PlacementProperty,
) -> GridPlacementResult {
    read(style, |style| style.placement(property))
}

/// Store a grid placement verbatim.
pub fn set_placement(
    style: Option<&mut StyleRecord>,
    property: PlacementProperty,
    placement: GridPlacement,
) -> ReturnCode {
    write(style, property.name(), |style| {
        style.set_placement(property, placement);
        Ok(())
    })
}

/// Apply one raw value to the sides of `category` selected by the raw `edge`.
pub fn set_edges(
    style: Option<&mut StyleRecord>,
    category: EdgeCategory,
    edge: i32,
    value: f32,
    unit: i32,
) -> ReturnCode {
    write(style, category.name(), |style| {
        let edge = Edge::try_from(edge)?;
        let unit = StyleValueUnit::try_from(unit)?;
        style.set_edges(category, edge, value, unit)
    })
}

/// Replace all four sides of `category` from raw `(value, unit)` pairs.
///
/// Every unit tag is range-checked first; the remaining checks run side by side in top,
/// right, bottom, left order. Nothing is written unless all four sides are valid.
pub fn set_edges_trbl(
    style: Option<&mut StyleRecord>,
    category: EdgeCategory,
    top: (f32, i32),
    right: (f32, i32),
    bottom: (f32, i32),
    left: (f32, i32),
) -> ReturnCode {
    write(style, category.name(), |style| {
        let decode = |(value, unit): (f32, i32)| -> StyleResult<StyleValue> {
            Ok(StyleValue::new(value, StyleValueUnit::try_from(unit)?))
        };
        let top = decode(top)?;
        let right = decode(right)?;
        let bottom = decode(bottom)?;
        let left = decode(left)?;
        style.set_edges_trbl(category, top, right, bottom, left)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/access/mod.rs"]
mod tests;
