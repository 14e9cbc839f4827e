use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;

/// Every method whose name starts with this prefix is treated as a setter
pub const SETTER_PREFIX: &str = "set";

/// A field declared directly on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub declaring_type: TypeRef,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declaring_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declaring_type,
        }
    }

    /// Lookup key used when matching against setters
    pub fn match_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Declared return type of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Constructors and other declarations without a return type
    Missing,
    Void,
    Type(TypeRef),
}

impl ReturnType {
    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            ReturnType::Type(ty) => Some(ty),
            ReturnType::Missing | ReturnType::Void => None,
        }
    }
}

/// A method declared directly on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub parameter_count: usize,
    pub return_type: ReturnType,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, parameter_count: usize, return_type: ReturnType) -> Self {
        Self {
            name: name.into(),
            parameter_count,
            return_type,
        }
    }

    pub fn is_setter(&self) -> bool {
        self.name.starts_with(SETTER_PREFIX)
    }

    /// Normalized key of a setter: the name without `set`, lowercased
    pub fn setter_key(&self) -> Option<String> {
        self.name
            .strip_prefix(SETTER_PREFIX)
            .map(|rest| rest.to_lowercase())
    }

    /// Whether the declared return type denotes the declaration `ty`
    pub fn returns(&self, ty: &TypeRef) -> bool {
        self.return_type.as_type().is_some_and(|ret| ret.refers_to(ty))
    }
}
