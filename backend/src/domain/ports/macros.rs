//! Helper macro for port error enums whose variants carry a message.

/// Declares a `thiserror` enum where every variant holds a `message` and gets
/// a named constructor accepting `impl Into<String>`.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $ctor:ident, $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                pub fn $ctor(message: impl Into<String>) -> Self {
                    Self::$variant { message: message.into() }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
