use std::collections::HashMap;

use tracing::debug;

use crate::{
    interfaces::Declaration,
    types::{FieldDescriptor, SetterMatch},
};

/// Map every field of `source` by its lowercased name.
///
/// Fields whose names differ only by case collide; the one declared last wins.
pub fn build_field_map<D: Declaration + ?Sized>(source: &D) -> HashMap<String, FieldDescriptor> {
    let mut map = HashMap::new();
    for field in source.fields() {
        if let Some(previous) = map.insert(field.match_key(), field) {
            debug!(
                "Field '{}' on '{}' is shadowed by a case-insensitive duplicate",
                previous.name,
                source.name()
            );
        }
    }
    map
}

/// Pair every setter of `target` with the same-named field of `source`.
///
/// Exactly one entry per setter, in the target's declaration order. Setters
/// without a field get `None` and are rendered with the null literal.
pub fn match_setters<T, S>(target: &T, source: &S) -> Vec<SetterMatch>
where
    T: Declaration + ?Sized,
    S: Declaration + ?Sized,
{
    let fields = build_field_map(source);

    target
        .methods()
        .into_iter()
        .filter_map(|method| {
            let key = method.setter_key()?;
            let field = fields.get(&key).map(|f| f.name.clone());
            Some(SetterMatch {
                setter: method.name,
                field,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MethodDescriptor, ReturnType, TypeDeclaration, TypeRef};

    fn order() -> TypeDeclaration {
        TypeDeclaration::class("Order")
            .with_field("orderId")
            .with_field("status")
    }

    fn order_dto() -> TypeDeclaration {
        TypeDeclaration::class("OrderDTO")
            .with_method(MethodDescriptor::new("setOrderId", 1, ReturnType::Void))
            .with_method(MethodDescriptor::new("getOrderId", 0, ReturnType::Type(TypeRef::new("String"))))
            .with_method(MethodDescriptor::new("setStatus", 1, ReturnType::Void))
            .with_method(MethodDescriptor::new("setTag", 1, ReturnType::Void))
    }

    #[test]
    fn test_every_setter_produces_one_match() {
        let matches = match_setters(&order_dto(), &order());
        assert_eq!(
            matches,
            vec![
                SetterMatch {
                    setter: "setOrderId".to_string(),
                    field: Some("orderId".to_string()),
                },
                SetterMatch {
                    setter: "setStatus".to_string(),
                    field: Some("status".to_string()),
                },
                SetterMatch {
                    setter: "setTag".to_string(),
                    field: None,
                },
            ]
        );
    }

    #[test]
    fn test_match_is_case_insensitive_and_keeps_field_spelling() {
        let source = TypeDeclaration::class("Legacy").with_field("ORDERID");
        let matches = match_setters(&order_dto(), &source);
        assert_eq!(matches[0].field.as_deref(), Some("ORDERID"));
    }

    #[test]
    fn test_no_matching_fields_gives_all_null() {
        let source = TypeDeclaration::class("Empty").with_field("unrelated");
        let matches = match_setters(&order_dto(), &source);
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.field.is_none()));
    }

    #[test]
    fn test_case_collision_last_field_wins() {
        let source = TypeDeclaration::class("Dup")
            .with_field("status")
            .with_field("STATUS");
        let map = build_field_map(&source);
        assert_eq!(map.len(), 1);
        assert_eq!(map["status"].name, "STATUS");
    }

    #[test]
    fn test_target_without_setters() {
        let target = TypeDeclaration::class("Plain")
            .with_method(MethodDescriptor::new("compute", 0, ReturnType::Void));
        assert!(match_setters(&target, &order()).is_empty());
    }
}
