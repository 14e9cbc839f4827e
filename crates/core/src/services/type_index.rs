use std::collections::HashMap;

use tracing::debug;

use crate::{
    interfaces::TypeSystem,
    types::{TypeDeclaration, TypeRef},
};

/// In-memory `TypeSystem` over a set of declaration snapshots.
///
/// A declaration named `B.Builder` is reachable as `B.Builder` and as
/// `Builder`. Lookups try the written name first and then ever shorter
/// suffixes of it, so `B.Builder` never resolves to `A.Builder` while a bare
/// `Builder` still finds one. When two declarations share a key the one
/// registered first stays visible, so callers register the edited file
/// before the rest of the project.
#[derive(Debug, Default, Clone)]
pub struct TypeIndex {
    declarations: Vec<TypeDeclaration>,
    by_name: HashMap<String, usize>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration; returns false when an earlier one shadows its full name
    pub fn register(&mut self, decl: TypeDeclaration) -> bool {
        let index = self.declarations.len();
        let mut visible = true;
        for (i, key) in decl.type_ref.suffixes().enumerate() {
            if self.by_name.contains_key(key) {
                if i == 0 {
                    debug!(
                        "'{}' from {:?} is shadowed by an earlier declaration",
                        decl.type_ref, decl.origin
                    );
                    visible = false;
                }
                continue;
            }
            self.by_name.insert(key.to_string(), index);
        }
        self.declarations.push(decl);
        visible
    }

    pub fn get(&self, ty: &TypeRef) -> Option<&TypeDeclaration> {
        ty.suffixes()
            .find_map(|key| self.by_name.get(key))
            .map(|&i| &self.declarations[i])
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Extend<TypeDeclaration> for TypeIndex {
    fn extend<I: IntoIterator<Item = TypeDeclaration>>(&mut self, iter: I) {
        for decl in iter {
            self.register(decl);
        }
    }
}

impl TypeSystem for TypeIndex {
    type Decl = TypeDeclaration;

    fn declaration_of(&self, ty: &TypeRef) -> Option<&TypeDeclaration> {
        self.get(ty)
    }
}
