//! Helper macro for generating domain port error enums.
//!
//! Each variant gets a `thiserror` message and a snake-case constructor whose
//! parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum LedgerPortError {
            Unreachable => "ledger unreachable",
            Rejected { message: String } => "ledger rejected write: {message}",
            Overdrawn { account: String, shortfall: u32 } => "{account} overdrawn by {shortfall}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(LedgerPortError::unreachable(), LedgerPortError::Unreachable);
        assert_eq!(LedgerPortError::unreachable().to_string(), "ledger unreachable");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = LedgerPortError::rejected("disk full");
        assert_eq!(err.to_string(), "ledger rejected write: disk full");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = LedgerPortError::overdrawn("savings", 12_u32);
        assert_eq!(err.to_string(), "savings overdrawn by 12");
        assert!(matches!(err, LedgerPortError::Overdrawn { shortfall: 12, .. }));
    }
}
