use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle for a declared type.
///
/// Holds the erased dotted name: generic arguments and whitespace are
/// dropped, qualifiers are kept (`B.Builder`, `com.acme.OrderDTO`) and array
/// brackets stay so `Foo[]` never resolves to `Foo`. Declarations use their
/// outer-qualified name without the package; see [`TypeRef::refers_to`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a handle from a type as written in source, e.g. `java.util.List<String>`
    pub fn erased(text: &str) -> Self {
        let text = text.trim().trim_end_matches("...");
        let mut depth = 0usize;
        let mut plain = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '<' => depth += 1,
                '>' => depth = depth.saturating_sub(1),
                c if depth == 0 && !c.is_whitespace() => plain.push(c),
                _ => {}
            }
        }

        Self(plain)
    }

    /// Handle of a type nested in `outer`, e.g. `B.Builder`
    pub fn nested(outer: &TypeRef, name: &str) -> Self {
        Self(format!("{}.{name}", outer.0))
    }

    /// Handle for an anonymous class body starting at `start_byte`
    pub fn anonymous(start_byte: usize) -> Self {
        Self(format!("<anonymous@{start_byte}>"))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Last segment of the name: `Builder` for `B.Builder`
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.starts_with("<anonymous@")
    }

    /// This name and every shorter dotted suffix of it, longest first:
    /// `a.B.C`, `B.C`, `C`
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        let name = self.0.as_str();
        std::iter::once(name).chain(name.match_indices('.').map(move |(i, _)| &name[i + 1..]))
    }

    /// Whether a type written as `self` can denote the declaration `decl`:
    /// one name is a dotted suffix of the other
    pub fn refers_to(&self, decl: &TypeRef) -> bool {
        let (short, long) = if self.0.len() <= decl.0.len() {
            (&self.0, &decl.0)
        } else {
            (&decl.0, &self.0)
        };
        long == short || long.ends_with(&format!(".{short}"))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erased_drops_generics_and_keeps_qualifiers() {
        assert_eq!(TypeRef::erased("OrderDTO"), TypeRef::new("OrderDTO"));
        assert_eq!(TypeRef::erased("com.acme.OrderDTO"), TypeRef::new("com.acme.OrderDTO"));
        assert_eq!(
            TypeRef::erased("Page< com.acme.Item<String> >"),
            TypeRef::new("Page")
        );
        assert_eq!(TypeRef::erased("Map.Entry<K, V>"), TypeRef::new("Map.Entry"));
        assert_eq!(TypeRef::erased("Map.Entry<K, V>").simple_name(), "Entry");
    }

    #[test]
    fn test_suffixes_longest_first() {
        let ty = TypeRef::new("com.acme.B.Builder");
        let suffixes: Vec<_> = ty.suffixes().collect();
        assert_eq!(
            suffixes,
            vec!["com.acme.B.Builder", "acme.B.Builder", "B.Builder", "Builder"]
        );
        assert_eq!(TypeRef::new("Order").suffixes().collect::<Vec<_>>(), vec!["Order"]);
    }

    #[test]
    fn test_refers_to_respects_qualifiers() {
        let b_builder = TypeRef::new("B.Builder");
        assert!(TypeRef::new("Builder").refers_to(&b_builder));
        assert!(TypeRef::new("B.Builder").refers_to(&b_builder));
        assert!(TypeRef::new("com.acme.B.Builder").refers_to(&b_builder));
        assert!(!TypeRef::new("A.Builder").refers_to(&b_builder));
        assert!(!TypeRef::new("BBuilder").refers_to(&TypeRef::new("Builder")));
    }

    #[test]
    fn test_erased_keeps_array_brackets() {
        assert_eq!(TypeRef::erased("Foo[]").name(), "Foo[]");
        assert_ne!(TypeRef::erased("List<Foo>[]"), TypeRef::new("List"));
    }

    #[test]
    fn test_anonymous_handles() {
        let anon = TypeRef::anonymous(42);
        assert!(anon.is_anonymous());
        assert_eq!(anon.name(), "<anonymous@42>");
        assert!(!TypeRef::new("Order").is_anonymous());
    }
}
