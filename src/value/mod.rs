//! Boundary value shapes and their validated internal forms.

pub(crate) mod dimension;
pub(crate) mod placement;
pub(crate) mod unit;
