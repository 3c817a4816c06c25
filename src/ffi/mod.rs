//! C ABI over the accessor layer.
//!
//! Handles are raw pointers to a [`StyleRecord`]. Every entry point converts the pointer
//! with `as_ref`/`as_mut` and hands the resulting `Option` to [`crate::access`], so a null
//! pointer is reported as [`ReturnCode::NullStylePointer`] and never dereferenced. Enum and
//! unit arguments are plain `i32`s and are range-checked before use.
//!
//! The declarations in `include/taffy_style.h` mirror this module.

mod style;

pub use style::*;

use crate::foundation::error::ReturnCode;
use crate::style::record::StyleRecord;

/// Opaque style record as seen from C.
pub type TaffyStyle = StyleRecord;
/// Read-only handle.
pub type TaffyStyleConstRef = *const TaffyStyle;
/// Mutable handle.
pub type TaffyStyleMutRef = *mut TaffyStyle;

/// Allocate a record holding the default value of every property.
///
/// The returned pointer is never null and must be released with [`TaffyStyle_Free`].
#[unsafe(no_mangle)]
pub extern "C" fn TaffyStyle_New() -> TaffyStyleMutRef {
    Box::into_raw(Box::new(StyleRecord::new()))
}

/// Release a record allocated by [`TaffyStyle_New`].
///
/// Returns [`ReturnCode::NullStylePointer`] and does nothing when `raw_style` is null.
///
/// # Safety
///
/// `raw_style` must be null or a pointer returned by [`TaffyStyle_New`] that has not been
/// freed yet. It must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn TaffyStyle_Free(raw_style: TaffyStyleMutRef) -> ReturnCode {
    if raw_style.is_null() {
        return ReturnCode::NullStylePointer;
    }
    // SAFETY: non-null pointers come from `TaffyStyle_New` and are freed at most once.
    drop(unsafe { Box::from_raw(raw_style) });
    ReturnCode::Ok
}
