use tracing::debug;

use crate::{
    interfaces::Declaration,
    types::{GenerationMode, MarkerState},
};

/// Attribute of the fluent marker that switches chaining on
pub const CHAIN_ATTRIBUTE: &str = "chain";

/// Combined state of every configured fluent marker on `target`
pub fn fluent_marker_state<D: Declaration + ?Sized>(target: &D, markers: &[String]) -> MarkerState {
    markers
        .iter()
        .map(|marker| target.marker_state(marker, CHAIN_ATTRIBUTE))
        .fold(MarkerState::Absent, MarkerState::or)
}

/// True when `target` has setters and every one of them returns `target`
pub fn has_only_fluent_setters<D: Declaration + ?Sized>(target: &D) -> bool {
    let setters = target.setters();
    !setters.is_empty() && setters.iter().all(|s| s.returns(target.type_ref()))
}

/// Decide how the snippet for `target` is shaped
pub fn select_mode<D: Declaration + ?Sized>(target: &D, markers: &[String]) -> GenerationMode {
    let marker = fluent_marker_state(target, markers);
    let mode = if marker.is_enabled() || has_only_fluent_setters(target) {
        GenerationMode::ChainedBuilder
    } else {
        GenerationMode::ImperativeAssignment
    };
    debug!("Mode for '{}': {:?} (marker {:?})", target.name(), mode, marker);
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Annotation, AnnotationValue, MethodDescriptor, ReturnType, TypeDeclaration, TypeRef,
    };

    fn markers() -> Vec<String> {
        vec!["lombok.experimental.Accessors".to_string()]
    }

    fn setter(name: &str, returns: ReturnType) -> MethodDescriptor {
        MethodDescriptor::new(name, 1, returns)
    }

    fn fluent() -> ReturnType {
        ReturnType::Type(TypeRef::new("OrderDTO"))
    }

    #[test]
    fn test_marker_with_chain_true_selects_chained() {
        let target = TypeDeclaration::class("OrderDTO")
            .with_annotation(
                Annotation::new("Accessors").with_attribute("chain", AnnotationValue::Bool(true)),
            )
            .with_method(setter("setTag", ReturnType::Void));
        assert_eq!(select_mode(&target, &markers()), GenerationMode::ChainedBuilder);
    }

    #[test]
    fn test_marker_with_chain_false_falls_back_to_inference() {
        let chain_false =
            Annotation::new("Accessors").with_attribute("chain", AnnotationValue::Bool(false));

        let void_setters = TypeDeclaration::class("OrderDTO")
            .with_annotation(chain_false.clone())
            .with_method(setter("setTag", ReturnType::Void));
        assert_eq!(
            select_mode(&void_setters, &markers()),
            GenerationMode::ImperativeAssignment
        );

        let fluent_setters = TypeDeclaration::class("OrderDTO")
            .with_annotation(chain_false)
            .with_method(setter("setTag", fluent()));
        assert_eq!(
            select_mode(&fluent_setters, &markers()),
            GenerationMode::ChainedBuilder
        );
    }

    #[test]
    fn test_no_setters_is_imperative() {
        let target = TypeDeclaration::class("OrderDTO")
            .with_method(MethodDescriptor::new("getTag", 0, ReturnType::Type(TypeRef::new("String"))));
        assert!(!has_only_fluent_setters(&target));
        assert_eq!(select_mode(&target, &markers()), GenerationMode::ImperativeAssignment);
    }

    #[test]
    fn test_all_setters_fluent_is_chained() {
        let target = TypeDeclaration::class("OrderDTO")
            .with_method(setter("setOrderId", fluent()))
            .with_method(MethodDescriptor::new("build", 0, ReturnType::Void))
            .with_method(setter("setStatus", fluent()));
        assert_eq!(select_mode(&target, &markers()), GenerationMode::ChainedBuilder);
    }

    #[test]
    fn test_one_void_setter_is_imperative_regardless_of_order() {
        let orders = [
            vec![setter("setA", fluent()), setter("setB", ReturnType::Void)],
            vec![setter("setB", ReturnType::Void), setter("setA", fluent())],
        ];
        for methods in orders {
            let target = methods
                .into_iter()
                .fold(TypeDeclaration::class("OrderDTO"), |decl, m| decl.with_method(m));
            assert_eq!(select_mode(&target, &markers()), GenerationMode::ImperativeAssignment);
        }
    }

    #[test]
    fn test_setter_returning_other_type_is_not_fluent() {
        let target = TypeDeclaration::class("OrderDTO")
            .with_method(setter("setTag", ReturnType::Type(TypeRef::new("Builder"))));
        assert_eq!(select_mode(&target, &markers()), GenerationMode::ImperativeAssignment);
    }
}
