use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::annotation::Annotation;
use super::descriptor::{FieldDescriptor, MethodDescriptor};
use super::type_ref::TypeRef;
use crate::interfaces::Declaration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
    Anonymous,
}

/// Read-only snapshot of one type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub type_ref: TypeRef,
    pub kind: DeclarationKind,
    pub fields: Vec<FieldDescriptor>,
    /// Methods in declaration order
    pub methods: Vec<MethodDescriptor>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<PathBuf>,
}

impl TypeDeclaration {
    pub fn new(type_ref: TypeRef, kind: DeclarationKind) -> Self {
        Self {
            type_ref,
            kind,
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
            origin: None,
        }
    }

    pub fn class(name: &str) -> Self {
        Self::new(TypeRef::new(name), DeclarationKind::Class)
    }

    pub fn with_field(mut self, name: &str) -> Self {
        let field = FieldDescriptor::new(name, self.type_ref.clone());
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_origin(mut self, origin: PathBuf) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }
}

impl Declaration for TypeDeclaration {
    fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    fn fields(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }

    fn methods(&self) -> Vec<MethodDescriptor> {
        self.methods.clone()
    }

    fn annotations_named(&self, name: &str) -> Vec<Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.matches_name(name))
            .cloned()
            .collect()
    }
}
