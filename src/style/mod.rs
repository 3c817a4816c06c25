//! The style record and the identifiers used to address its properties.

pub(crate) mod enums;
pub(crate) mod property;
pub(crate) mod record;
