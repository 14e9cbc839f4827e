use crate::types::{Annotation, AnnotationValue, FieldDescriptor, MarkerState, MethodDescriptor, TypeRef};

/// Resolves type handles to their declarations
pub trait TypeSystem {
    type Decl: Declaration;

    /// The nominal declaration of `ty`, or `None` for primitives, arrays and
    /// anything the host cannot see
    fn declaration_of(&self, ty: &TypeRef) -> Option<&Self::Decl>;
}

/// Query interface over one declared type
pub trait Declaration {
    fn type_ref(&self) -> &TypeRef;

    fn name(&self) -> &str {
        self.type_ref().name()
    }

    /// Fields declared directly on this type; order carries no meaning
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Methods declared directly on this type, in a stable declaration order
    fn methods(&self) -> Vec<MethodDescriptor>;

    fn annotations_named(&self, name: &str) -> Vec<Annotation>;

    /// Methods whose name starts with `set`, in declaration order
    fn setters(&self) -> Vec<MethodDescriptor> {
        self.methods().into_iter().filter(|m| m.is_setter()).collect()
    }

    /// Probe the boolean `attribute` of the annotation `marker`
    fn marker_state(&self, marker: &str, attribute: &str) -> MarkerState {
        let annotations = self.annotations_named(marker);
        if annotations.is_empty() {
            return MarkerState::Absent;
        }

        let enabled = annotations
            .iter()
            .any(|a| a.attribute(attribute).and_then(AnnotationValue::as_bool) == Some(true));
        if enabled {
            MarkerState::PresentTrue
        } else {
            MarkerState::PresentFalse
        }
    }
}
