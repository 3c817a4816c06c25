//! Hand-off from [`StyleRecord`](crate::StyleRecord) to the Taffy layout engine.
//!
//! The record validates values at write time; this module only translates them. Units the
//! engine has no representation for collapse to `auto`, `Normal` alignments collapse to
//! `None` and a zero aspect ratio means no preferred ratio.

pub(crate) mod taffy_bridge;
