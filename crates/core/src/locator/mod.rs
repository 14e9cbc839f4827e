//! Resolves the target and source types from a cursor offset

use tracing::debug;

use crate::{
    error::{AbortReason, Result},
    interfaces::{Declaration, MethodDeclaration, SyntaxNode, SyntaxTree, TypeSystem},
    types::{LocatedContext, ReturnType},
};

/// Default bound on the number of parent links followed from the cursor node
pub const DEFAULT_MAX_ASCENT_DEPTH: usize = 4096;

pub struct Locator {
    max_depth: usize,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ASCENT_DEPTH)
    }
}

impl Locator {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Find the method around `offset` and resolve its return type (target)
    /// and enclosing declaration (source)
    pub fn locate<T, S>(&self, tree: &T, types: &S, offset: usize) -> Result<LocatedContext>
    where
        T: SyntaxTree,
        S: TypeSystem,
    {
        let node = tree.node_at(offset).ok_or(AbortReason::NoMethodContext)?;
        let method = self
            .enclosing_method(node)
            .ok_or(AbortReason::NoMethodContext)?;
        debug!("Cursor at {} is inside method '{}'", offset, method.name);

        let return_type = match &method.return_type {
            ReturnType::Type(ty) => ty,
            ReturnType::Void | ReturnType::Missing => {
                return Err(AbortReason::VoidOrMissingReturnType.into());
            }
        };

        let target = types.declaration_of(return_type).ok_or_else(|| {
            debug!("No declaration for return type '{}'", return_type);
            AbortReason::UnresolvableType
        })?;

        let source = method
            .enclosing_type
            .as_ref()
            .and_then(|ty| types.declaration_of(ty))
            .ok_or_else(|| {
                debug!("No declaration for the type enclosing '{}'", method.name);
                AbortReason::UnresolvableType
            })?;

        Ok(LocatedContext {
            method_name: method.name,
            target: target.type_ref().clone(),
            source: source.type_ref().clone(),
        })
    }

    /// Walk parent links from `start` to the nearest method declaration.
    ///
    /// Stops at the root, or after `max_depth` steps on pathological nesting.
    pub fn enclosing_method<N: SyntaxNode>(&self, start: N) -> Option<MethodDeclaration> {
        let mut current = start;
        for _ in 0..=self.max_depth {
            if let Some(method) = current.method_declaration() {
                return Some(method);
            }
            current = current.parent()?;
        }
        debug!("Gave up looking for a method after {} parents", self.max_depth);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::services::TypeIndex;
    use crate::types::{MethodDescriptor, TypeDeclaration, TypeRef};

    /// Flat tree: node `i` has parent `i - 1`, node 0 is the root
    struct ChainTree {
        methods: Vec<Option<MethodDeclaration>>,
    }

    #[derive(Clone, Copy)]
    struct ChainNode<'a> {
        tree: &'a ChainTree,
        index: usize,
    }

    impl SyntaxNode for ChainNode<'_> {
        fn parent(&self) -> Option<Self> {
            self.index.checked_sub(1).map(|index| ChainNode {
                tree: self.tree,
                index,
            })
        }

        fn method_declaration(&self) -> Option<MethodDeclaration> {
            self.tree.methods[self.index].clone()
        }
    }

    impl SyntaxTree for ChainTree {
        type Node<'a> = ChainNode<'a>;

        fn node_at(&self, offset: usize) -> Option<ChainNode<'_>> {
            (offset < self.methods.len()).then_some(ChainNode {
                tree: self,
                index: offset,
            })
        }
    }

    fn method(name: &str, return_type: ReturnType, enclosing: &str) -> MethodDeclaration {
        MethodDeclaration {
            name: name.to_string(),
            return_type,
            enclosing_type: Some(TypeRef::new(enclosing)),
        }
    }

    fn index() -> TypeIndex {
        let mut index = TypeIndex::new();
        index.register(TypeDeclaration::class("Order").with_field("orderId"));
        index.register(TypeDeclaration::class("OrderDTO").with_method(MethodDescriptor::new(
            "setOrderId",
            1,
            ReturnType::Void,
        )));
        index
    }

    fn abort_of(result: Result<LocatedContext>) -> Option<AbortReason> {
        match result {
            Err(Error::Abort(reason)) => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn test_locates_nearest_enclosing_method() {
        let tree = ChainTree {
            methods: vec![
                None,
                Some(method("outer", ReturnType::Void, "Order")),
                None,
                Some(method("toDto", ReturnType::Type(TypeRef::new("OrderDTO")), "Order")),
                None,
                None,
            ],
        };

        let ctx = Locator::default().locate(&tree, &index(), 5).unwrap();
        assert_eq!(ctx.method_name, "toDto");
        assert_eq!(ctx.target, TypeRef::new("OrderDTO"));
        assert_eq!(ctx.source, TypeRef::new("Order"));
    }

    #[test]
    fn test_no_method_reaches_root() {
        let tree = ChainTree {
            methods: vec![None, None, None],
        };
        let result = Locator::default().locate(&tree, &index(), 2);
        assert_eq!(abort_of(result), Some(AbortReason::NoMethodContext));
    }

    #[test]
    fn test_offset_outside_tree() {
        let tree = ChainTree { methods: vec![None] };
        let result = Locator::default().locate(&tree, &index(), 10);
        assert_eq!(abort_of(result), Some(AbortReason::NoMethodContext));
    }

    #[test]
    fn test_depth_bound_stops_ascent() {
        let mut methods = vec![Some(method("deep", ReturnType::Type(TypeRef::new("OrderDTO")), "Order"))];
        methods.extend(std::iter::repeat_n(None, 10));
        let tree = ChainTree { methods };

        let bounded = Locator::new(5).locate(&tree, &index(), 10);
        assert_eq!(abort_of(bounded), Some(AbortReason::NoMethodContext));

        let unbounded = Locator::new(10).locate(&tree, &index(), 10).unwrap();
        assert_eq!(unbounded.method_name, "deep");
    }

    #[test]
    fn test_void_and_missing_return_types_abort() {
        for return_type in [ReturnType::Void, ReturnType::Missing] {
            let tree = ChainTree {
                methods: vec![Some(method("m", return_type, "Order"))],
            };
            let result = Locator::default().locate(&tree, &index(), 0);
            assert_eq!(abort_of(result), Some(AbortReason::VoidOrMissingReturnType));
        }
    }

    #[test]
    fn test_unresolvable_types_abort() {
        let primitive = ChainTree {
            methods: vec![Some(method("m", ReturnType::Type(TypeRef::new("int")), "Order"))],
        };
        let result = Locator::default().locate(&primitive, &index(), 0);
        assert_eq!(abort_of(result), Some(AbortReason::UnresolvableType));

        let unknown_source = ChainTree {
            methods: vec![Some(method(
                "m",
                ReturnType::Type(TypeRef::new("OrderDTO")),
                "Missing",
            ))],
        };
        let result = Locator::default().locate(&unknown_source, &index(), 0);
        assert_eq!(abort_of(result), Some(AbortReason::UnresolvableType));
    }
}
