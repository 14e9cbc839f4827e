//! Serde helpers for lenient, case-insensitive enum deserialization

/// Implement case-insensitive deserialization for a fieldless enum.
///
/// Each variant lists one or more accepted spellings; the first one is shown
/// in error messages alongside the others.
///
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     DeclarationStyle,
///     Var => "var" | "implicit",
///     Explicit => "explicit"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $($name:literal)|+),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                let lowered = s.trim().to_lowercase();
                $(
                    if [$($name),+].contains(&lowered.as_str()) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(serde::de::Error::custom(format!(
                    "unknown variant '{}', expected one of: {}",
                    s,
                    [$($($name),+),+].join(", ")
                )))
            }
        }
    };
}
