use crate::foundation::error::{ReturnCode, StyleResult};
use crate::value::dimension::StyleValue;
use crate::value::placement::GridPlacement;

/// `(status, value)` pair returned by every getter.
///
/// When `return_code` is not [`ReturnCode::Ok`] the value is the zero default of `T` and
/// carries no meaning.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FfiResult<T> {
    /// Outcome of the call.
    pub return_code: ReturnCode,
    /// Payload; only meaningful on success.
    pub value: T,
}

/// Integer envelope.
pub type IntResult = FfiResult<i32>;
/// Float envelope.
pub type FloatResult = FfiResult<f32>;
/// Dimension envelope.
pub type StyleValueResult = FfiResult<StyleValue>;
/// Grid placement envelope.
pub type GridPlacementResult = FfiResult<GridPlacement>;

impl<T: Default> FfiResult<T> {
    /// Successful result.
    pub fn from_value(value: T) -> Self {
        Self {
            return_code: ReturnCode::Ok,
            value,
        }
    }

    /// Failed result carrying the default payload.
    pub fn from_return_code(return_code: ReturnCode) -> Self {
        Self {
            return_code,
            value: T::default(),
        }
    }

    /// Return `true` when the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.return_code.is_ok()
    }
}

impl<T: Default> From<StyleResult<T>> for FfiResult<T> {
    fn from(result: StyleResult<T>) -> Self {
        match result {
            Ok(value) => Self::from_value(value),
            Err(err) => Self::from_return_code(err.return_code()),
        }
    }
}
