use super::utils::{declaration_type_ref, find_child, node_text, type_ref_of};
use crate::{
    error::Result,
    mapper::fluent_marker_state,
    types::{
        Annotation, AnnotationValue, DeclarationKind, FieldDescriptor, MethodDescriptor,
        ReturnType, TypeDeclaration, TypeRef,
    },
};
use std::path::Path;
use tracing::debug;
use tree_sitter::{Node, Tree};

const LOMBOK_DATA: &str = "lombok.Data";
const LOMBOK_SETTER: &str = "lombok.Setter";

/// Modifiers of a declaration: annotations plus the keywords we care about
#[derive(Debug, Default)]
struct Modifiers {
    annotations: Vec<Annotation>,
    is_static: bool,
    is_final: bool,
}

impl Modifiers {
    fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.matches_name(name))
    }
}

/// A field together with what Lombok needs to know about it
#[derive(Debug)]
struct FieldEntry {
    name: String,
    modifiers: Modifiers,
}

/// Walks a Java syntax tree and snapshots every type declaration in it
#[derive(Debug, Clone)]
pub struct DeclarationExtractor {
    synthesize_lombok_setters: bool,
    fluent_markers: Vec<String>,
}

impl Default for DeclarationExtractor {
    fn default() -> Self {
        Self::new(true, vec!["lombok.experimental.Accessors".to_string()])
    }
}

impl DeclarationExtractor {
    pub fn new(synthesize_lombok_setters: bool, fluent_markers: Vec<String>) -> Self {
        Self {
            synthesize_lombok_setters,
            fluent_markers,
        }
    }

    pub fn extract(
        &self,
        tree: &Tree,
        source: &str,
        origin: Option<&Path>,
    ) -> Result<Vec<TypeDeclaration>> {
        let mut declarations = Vec::new();
        self.visit_node(&tree.root_node(), source, &mut declarations)?;

        if let Some(origin) = origin {
            for decl in &mut declarations {
                decl.origin = Some(origin.to_path_buf());
            }
        }
        Ok(declarations)
    }

    fn visit_node(
        &self,
        node: &Node,
        source: &str,
        declarations: &mut Vec<TypeDeclaration>,
    ) -> Result<()> {
        match node.kind() {
            "class_declaration" => {
                self.handle_type(node, DeclarationKind::Class, source, declarations)?;
            }
            "interface_declaration" => {
                self.handle_type(node, DeclarationKind::Interface, source, declarations)?;
            }
            "enum_declaration" => {
                self.handle_type(node, DeclarationKind::Enum, source, declarations)?;
            }
            "record_declaration" => {
                self.handle_type(node, DeclarationKind::Record, source, declarations)?;
            }
            "annotation_type_declaration" => {
                self.handle_type(node, DeclarationKind::AnnotationType, source, declarations)?;
            }
            "object_creation_expression" => {
                if let Some(body) = find_child(node, "class_body") {
                    self.handle_anonymous(&body, source, declarations)?;
                }
            }
            "enum_constant" => {
                if let Some(body) = node.child_by_field_name("body") {
                    self.handle_anonymous(&body, source, declarations)?;
                }
            }
            _ => {}
        }

        for child in node.children(&mut node.walk()) {
            self.visit_node(&child, source, declarations)?;
        }

        Ok(())
    }

    fn handle_type(
        &self,
        node: &Node,
        kind: DeclarationKind,
        source: &str,
        declarations: &mut Vec<TypeDeclaration>,
    ) -> Result<()> {
        let Some(type_ref) = declaration_type_ref(node, source) else {
            debug!("Skipping {} without a name", node.kind());
            return Ok(());
        };

        let modifiers = parse_modifiers(node, source)?;
        let mut decl = TypeDeclaration::new(type_ref, kind);
        decl.annotations = modifiers.annotations;
        let mut fields = Vec::new();

        // Record components are fields
        if let Some(params) = node.child_by_field_name("parameters") {
            for param in params.named_children(&mut params.walk()) {
                if param.kind() != "formal_parameter" {
                    continue;
                }
                if let Some(name) = param.child_by_field_name("name") {
                    fields.push(FieldEntry {
                        name: node_text(&name, source)?.to_string(),
                        modifiers: Modifiers {
                            is_final: true,
                            ..Modifiers::default()
                        },
                    });
                }
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.collect_members(&body, source, &mut decl, &mut fields)?;
        }

        if kind == DeclarationKind::Class && self.synthesize_lombok_setters {
            self.synthesize_setters(&mut decl, &fields);
        }

        decl.fields = fields
            .into_iter()
            .map(|f| FieldDescriptor::new(f.name, decl.type_ref.clone()))
            .collect();

        debug!(
            "Declaration '{}': {} fields, {} methods",
            decl.type_ref,
            decl.fields.len(),
            decl.methods.len()
        );
        declarations.push(decl);
        Ok(())
    }

    /// Anonymous class bodies and enum constant bodies
    fn handle_anonymous(
        &self,
        body: &Node,
        source: &str,
        declarations: &mut Vec<TypeDeclaration>,
    ) -> Result<()> {
        let Some(type_ref) = declaration_type_ref(body, source) else {
            return Ok(());
        };

        let mut decl = TypeDeclaration::new(type_ref, DeclarationKind::Anonymous);
        let mut fields = Vec::new();
        self.collect_members(body, source, &mut decl, &mut fields)?;
        decl.fields = fields
            .into_iter()
            .map(|f| FieldDescriptor::new(f.name, decl.type_ref.clone()))
            .collect();
        declarations.push(decl);
        Ok(())
    }

    fn collect_members(
        &self,
        body: &Node,
        source: &str,
        decl: &mut TypeDeclaration,
        fields: &mut Vec<FieldEntry>,
    ) -> Result<()> {
        for member in body.named_children(&mut body.walk()) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    self.handle_field(&member, source, fields)?;
                }
                "method_declaration" => {
                    if let Some(method) = self.handle_method(&member, source)? {
                        decl.methods.push(method);
                    }
                }
                "enum_constant" => {
                    if let Some(name) = member.child_by_field_name("name") {
                        fields.push(FieldEntry {
                            name: node_text(&name, source)?.to_string(),
                            modifiers: Modifiers {
                                is_static: true,
                                is_final: true,
                                ..Modifiers::default()
                            },
                        });
                    }
                }
                "enum_body_declarations" => {
                    self.collect_members(&member, source, decl, fields)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_field(&self, node: &Node, source: &str, fields: &mut Vec<FieldEntry>) -> Result<()> {
        let mut cursor = node.walk();
        let declarators: Vec<Node> = node
            .children_by_field_name("declarator", &mut cursor)
            .collect();

        for declarator in declarators {
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };
            fields.push(FieldEntry {
                name: node_text(&name, source)?.to_string(),
                modifiers: parse_modifiers(node, source)?,
            });
        }
        Ok(())
    }

    fn handle_method(&self, node: &Node, source: &str) -> Result<Option<MethodDescriptor>> {
        let Some(name) = node.child_by_field_name("name") else {
            return Ok(None);
        };
        let name = node_text(&name, source)?;

        let return_type = method_return_type(node, source);
        let parameter_count = node
            .child_by_field_name("parameters")
            .map(|params| {
                params
                    .named_children(&mut params.walk())
                    .filter(|p| matches!(p.kind(), "formal_parameter" | "spread_parameter"))
                    .count()
            })
            .unwrap_or(0);

        Ok(Some(MethodDescriptor::new(name, parameter_count, return_type)))
    }

    /// Add the setters Lombok would generate for `decl`, after the explicit methods
    fn synthesize_setters(&self, decl: &mut TypeDeclaration, fields: &[FieldEntry]) {
        let class_level = decl
            .annotations
            .iter()
            .any(|a| a.matches_name(LOMBOK_DATA) || a.matches_name(LOMBOK_SETTER));
        let chained = fluent_marker_state(&*decl, &self.fluent_markers).is_enabled();
        let return_type = if chained {
            ReturnType::Type(decl.type_ref.clone())
        } else {
            ReturnType::Void
        };

        for field in fields {
            let wanted = class_level || field.modifiers.has_annotation(LOMBOK_SETTER);
            if !wanted || field.modifiers.is_static || field.modifiers.is_final {
                continue;
            }
            let setter = format!("set{}", capitalize(&field.name));
            if decl.has_method(&setter) {
                continue;
            }
            debug!("Synthesizing Lombok setter {}.{}", decl.type_ref, setter);
            decl.methods
                .push(MethodDescriptor::new(setter, 1, return_type.clone()));
        }
    }
}

/// Return type of a method or constructor declaration node
pub(crate) fn method_return_type(node: &Node, source: &str) -> ReturnType {
    if node.kind() != "method_declaration" {
        return ReturnType::Missing;
    }
    match node.child_by_field_name("type") {
        None => ReturnType::Missing,
        Some(ty) if ty.kind() == "void_type" => ReturnType::Void,
        Some(ty) => type_ref_of(&ty, source)
            .map(ReturnType::Type)
            .unwrap_or(ReturnType::Missing),
    }
}

fn parse_modifiers(node: &Node, source: &str) -> Result<Modifiers> {
    let mut modifiers = Modifiers::default();
    let Some(mods) = find_child(node, "modifiers") else {
        return Ok(modifiers);
    };

    for child in mods.children(&mut mods.walk()) {
        match child.kind() {
            "marker_annotation" | "annotation" => {
                if let Some(annotation) = parse_annotation(&child, source)? {
                    modifiers.annotations.push(annotation);
                }
            }
            "static" => modifiers.is_static = true,
            "final" => modifiers.is_final = true,
            _ => {}
        }
    }
    Ok(modifiers)
}

fn parse_annotation(node: &Node, source: &str) -> Result<Option<Annotation>> {
    let Some(name) = node.child_by_field_name("name") else {
        return Ok(None);
    };
    let mut annotation = Annotation::new(node_text(&name, source)?);

    if let Some(args) = node.child_by_field_name("arguments") {
        for arg in args.named_children(&mut args.walk()) {
            if arg.kind().ends_with("comment") {
                continue;
            }
            if arg.kind() == "element_value_pair" {
                let (Some(key), Some(value)) =
                    (arg.child_by_field_name("key"), arg.child_by_field_name("value"))
                else {
                    continue;
                };
                annotation = annotation
                    .with_attribute(node_text(&key, source)?, annotation_value(&value, source)?);
            } else {
                // A lone element value is the `value` attribute
                annotation = annotation.with_attribute("value", annotation_value(&arg, source)?);
            }
        }
    }
    Ok(Some(annotation))
}

fn annotation_value(node: &Node, source: &str) -> Result<AnnotationValue> {
    Ok(match node.kind() {
        "true" => AnnotationValue::Bool(true),
        "false" => AnnotationValue::Bool(false),
        _ => AnnotationValue::Text(node_text(node, source)?.to_string()),
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
