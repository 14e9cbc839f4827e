use serde::{Deserialize, Serialize};

/// Value of a single annotation attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationValue {
    Bool(bool),
    /// Anything that is not a boolean literal, kept as written
    Text(String),
}

impl AnnotationValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(value) => Some(*value),
            AnnotationValue::Text(_) => None,
        }
    }
}

/// An annotation on a declaration, named as written in source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: AnnotationValue) -> Self {
        self.attributes.push((key.into(), value));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&AnnotationValue> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }

    /// Whether this annotation is `name`, comparing qualified names when both
    /// sides are qualified and simple names otherwise
    pub fn matches_name(&self, name: &str) -> bool {
        let qualified = self.name.contains('.') && name.contains('.');
        if qualified {
            self.name == name
        } else {
            self.simple_name() == simple_name(name)
        }
    }
}

fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Result of probing a declaration for a boolean marker attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerState {
    PresentTrue,
    PresentFalse,
    Absent,
}

impl MarkerState {
    /// Absent markers behave as if the flag were false
    pub fn is_enabled(self) -> bool {
        matches!(self, MarkerState::PresentTrue)
    }

    /// Combine two probes: any enabled marker wins, then any present one
    pub fn or(self, other: MarkerState) -> MarkerState {
        match (self, other) {
            (MarkerState::PresentTrue, _) | (_, MarkerState::PresentTrue) => {
                MarkerState::PresentTrue
            }
            (MarkerState::PresentFalse, _) | (_, MarkerState::PresentFalse) => {
                MarkerState::PresentFalse
            }
            _ => MarkerState::Absent,
        }
    }
}
