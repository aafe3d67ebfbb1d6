//! Macros for ergonomic state declarations.

/// Declare a fieldless state enum and implement [`State`](crate::State) for it.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`; `initial`
/// names the variant used as `State::INITIAL`.
///
/// # Example
///
/// ```
/// use reflex::{state_enum, State};
///
/// state_enum! {
///     pub enum Connection {
///         Idle,
///         Handshaking,
///         Open,
///         Closed,
///     }
///     initial: Idle
/// }
///
/// assert_eq!(Connection::INITIAL, Connection::Idle);
/// assert_eq!(Connection::Open.name(), "Open");
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

        initial: $initial:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            const INITIAL: Self = Self::$initial;

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
