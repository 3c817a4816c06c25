//! Validated accessors for Taffy style records, usable from Rust and from C.
//!
//! A [`StyleRecord`] holds every style property of one layout node. Callers read and write
//! it one property at a time:
//!
//! - Categorical properties travel as bounded integers ([`access::get_enum`])
//! - Measurements travel as a flat `(value, unit)` [`StyleValue`] and are stored as a
//!   validated [`Dimension`] ([`access::set_dimension`])
//! - Grid placements travel as a `(start, end, span)` [`GridPlacement`] triple
//!
//! Every call reports exactly one [`ReturnCode`]; getters wrap their payload in an
//! [`FfiResult`] envelope. A failed write never modifies the record. Once populated, a
//! record converts into a [`taffy::Style`] with [`StyleRecord::to_taffy`].
//!
//! The `ffi` feature (on by default) exports the same operations as `extern "C"` symbols,
//! declared in `include/taffy_style.h`.
#![deny(unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
mod foundation;

pub mod access;
#[cfg(feature = "ffi")]
#[allow(unsafe_code, non_snake_case)]
pub mod ffi;
mod layout;
mod style;
mod value;

pub use crate::access::envelope::{
    FfiResult, FloatResult, GridPlacementResult, IntResult, StyleValueResult,
};
pub use crate::foundation::error::{ReturnCode, StyleError, StyleResult};
pub use crate::style::enums::{
    AlignContent, AlignItems, Display, FlexDirection, FlexWrap, GridAutoFlow, Overflow, Position,
};
pub use crate::style::property::{
    DimensionProperty, Edge, EdgeCategory, EnumProperty, FloatProperty, PlacementProperty, Side,
};
pub use crate::style::record::StyleRecord;
pub use crate::value::dimension::{Dimension, Ignored, Magnitude, StyleValue};
pub use crate::value::placement::GridPlacement;
pub use crate::value::unit::{StyleValueUnit, UnitSet};
