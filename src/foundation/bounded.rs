/// Declare a C-compatible enumeration that is exposed to callers as a bounded integer.
///
/// The generated type gets `ALL` (variants in discriminant order), `COUNT`, `as_i32` and a
/// `TryFrom<i32>` that rejects anything outside `[0, COUNT)` with
/// [`StyleError::InvalidEnumValue`](crate::StyleError::InvalidEnumValue). Exactly one
/// variant must carry `#[default]`.
macro_rules! bounded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, indexed by its integer value.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of valid integer values.
            pub const COUNT: i32 = Self::ALL.len() as i32;

            /// Integer exposed at the boundary.
            pub fn as_i32(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::foundation::error::StyleError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                usize::try_from(value)
                    .ok()
                    .and_then(|idx| Self::ALL.get(idx))
                    .copied()
                    .ok_or_else(|| {
                        $crate::foundation::error::StyleError::invalid_enum(
                            stringify!($name),
                            value,
                            Self::COUNT,
                        )
                    })
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.as_i32()
            }
        }
    };
}
