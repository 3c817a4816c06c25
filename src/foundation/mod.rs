#[macro_use]
mod bounded;

pub(crate) mod error;
