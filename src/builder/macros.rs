//! Macros for declaring workflow state enums.

/// Declare a fieldless state enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum is `Copy`, hashable and serializable by variant name,
/// and gets an `ALL` constant listing the variants in declaration order.
///
/// # Example
///
/// ```
/// use rma_workflow::state_enum;
/// use rma_workflow::core::State;
///
/// state_enum! {
///     pub enum KioskState {
///         Idle,
///         Repairing,
///         Done,
///         Broken,
///     }
///     final: [Done, Broken]
///     error: [Broken]
/// }
///
/// assert_eq!(KioskState::ALL.len(), 4);
/// assert!(KioskState::Broken.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
