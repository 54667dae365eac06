//! Macros for defining typed GUID wrappers.

/// Macro to define a typed GUID newtype.
///
/// This generates a wrapper around [`Guid`](crate::Guid) with:
/// - `from_guid()` / `guid()` conversions
/// - `parse()` from canonical text
/// - `random()` to generate a fresh value
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (as canonical text)
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_guid!(ContainerId);
///
/// let id: ContainerId = "00000000-0000-0000-0000-000000000001".parse()?;
/// ```
#[macro_export]
macro_rules! define_guid {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name($crate::Guid);

        impl $name {
            /// Wraps a raw GUID.
            #[must_use]
            pub const fn from_guid(guid: $crate::Guid) -> Self {
                Self(guid)
            }

            /// Returns the underlying GUID.
            #[must_use]
            pub const fn guid(&self) -> $crate::Guid {
                self.0
            }

            /// Generates a fresh random value.
            #[must_use]
            pub fn random() -> Self {
                Self($crate::Guid::random())
            }

            /// Parses from the canonical `8-4-4-4-12` text form.
            pub fn parse(s: &str) -> Result<Self, $crate::GuidError> {
                $crate::Guid::from_canonical_string(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::GuidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$crate::Guid> for $name {
            fn from(guid: $crate::Guid) -> Self {
                Self(guid)
            }
        }

        impl From<$name> for $crate::Guid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<$crate::Guid> for $name {
            fn as_ref(&self) -> &$crate::Guid {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$crate::Guid as serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }
    };
}
