//! Newtype identifiers for type-safe entity references.
//!
//! Use the `define_id!` macro for numeric identifiers and `define_code!` for
//! the short string codes that pick-up points and shops carry, so an order
//! number can never be passed where a shop code is expected.

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use online_store_core::define_id;
/// define_id!(InvoiceNumber);
/// define_id!(ParcelNumber);
///
/// let invoice = InvoiceNumber::new(1);
/// let parcel = ParcelNumber::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: InvoiceNumber = parcel;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Macro to define a type-safe string code wrapper (e.g. `"PP001"`).
///
/// Creates a newtype wrapper around `String` with `Display`, `AsRef<str>`
/// and `From<&str>`/`From<String>` conversions.
#[macro_export]
macro_rules! define_code {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new code.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }
    };
}

define_id!(OrderNumber);

define_code!(PickPointId);
define_code!(ShopId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_display() {
        assert_eq!(OrderNumber::new(1001).to_string(), "1001");
    }

    #[test]
    fn test_order_number_conversions() {
        let number = OrderNumber::from(2001);
        assert_eq!(number.as_i32(), 2001);
        assert_eq!(i32::from(number), 2001);
    }

    #[test]
    fn test_code_display_and_as_ref() {
        let id = PickPointId::from("PP001");
        assert_eq!(format!("{id}"), "PP001");
        let s: &str = id.as_ref();
        assert_eq!(s, "PP001");
    }

    #[test]
    fn test_code_serde_transparent() {
        let id = ShopId::new("S001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"S001\"");

        let parsed: ShopId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
