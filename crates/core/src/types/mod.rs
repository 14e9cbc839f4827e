pub mod annotation;
pub mod declaration;
pub mod descriptor;
pub mod generation;
pub mod position;
pub mod type_ref;

// Re-export commonly used types
pub use annotation::{Annotation, AnnotationValue, MarkerState};
pub use declaration::{DeclarationKind, TypeDeclaration};
pub use descriptor::{FieldDescriptor, MethodDescriptor, ReturnType, SETTER_PREFIX};
pub use generation::{Analysis, GeneratedText, GenerationMode, LocatedContext, SetterMatch};
pub use position::Position;
pub use type_ref::TypeRef;
