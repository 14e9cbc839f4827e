use crate::{
    error::{Error, Result},
    types::TypeRef,
};
use tree_sitter::Node;

/// Node kinds that declare a named type
pub const TYPE_DECLARATION_KINDS: [&str; 5] = [
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

pub fn node_text<'s>(node: &Node, source: &'s str) -> Result<&'s str> {
    node.utf8_text(source.as_bytes())
        .map_err(|e| Error::ParseError(format!("Invalid UTF-8 in {}: {e}", node.kind())))
}

pub fn find_child<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == kind)
}

/// Handle for a type as written at `type_node`
pub fn type_ref_of(type_node: &Node, source: &str) -> Option<TypeRef> {
    // `@NonNull Foo`: the type itself is the last named child
    if type_node.kind() == "annotated_type" {
        let mut cursor = type_node.walk();
        let inner = type_node.named_children(&mut cursor).last()?;
        return type_ref_of(&inner, source);
    }
    let text = type_node.utf8_text(source.as_bytes()).ok()?;
    Some(TypeRef::erased(text))
}

/// Node kinds whose `class_body` child declares an anonymous class
const ANONYMOUS_BODY_OWNERS: [&str; 2] = ["object_creation_expression", "enum_constant"];

/// Whether `body` is the class body of an anonymous class or enum constant
pub fn is_anonymous_body(body: &Node) -> bool {
    body.kind() == "class_body"
        && body
            .parent()
            .is_some_and(|owner| ANONYMOUS_BODY_OWNERS.contains(&owner.kind()))
}

/// Handle of the type declared by `node`, if it declares one.
///
/// Member types are qualified by their enclosing types (`B.Builder`); local
/// types and members of anonymous classes keep their simple name.
pub fn declaration_type_ref(node: &Node, source: &str) -> Option<TypeRef> {
    if is_anonymous_body(node) {
        return Some(TypeRef::anonymous(node.start_byte()));
    }
    if !TYPE_DECLARATION_KINDS.contains(&node.kind()) {
        return None;
    }
    let name = node.child_by_field_name("name")?;
    let name = name.utf8_text(source.as_bytes()).ok()?;

    match member_owner(node) {
        Some(outer) if TYPE_DECLARATION_KINDS.contains(&outer.kind()) => {
            let outer = declaration_type_ref(&outer, source)?;
            Some(TypeRef::nested(&outer, name))
        }
        _ => Some(TypeRef::new(name)),
    }
}

/// The node owning the body that `member` is declared in
fn member_owner<'t>(member: &Node<'t>) -> Option<Node<'t>> {
    let mut body = member.parent()?;
    if body.kind() == "enum_body_declarations" {
        body = body.parent()?;
    }
    match body.kind() {
        "class_body" | "interface_body" | "enum_body" | "annotation_type_body" => body.parent(),
        _ => None,
    }
}

/// Handle of the declaration whose body directly contains `member`
pub fn enclosing_declaration_type(member: &Node, source: &str) -> Option<TypeRef> {
    let mut body = member.parent()?;
    if body.kind() == "enum_body_declarations" {
        body = body.parent()?;
    }

    match body.kind() {
        "class_body" if is_anonymous_body(&body) => declaration_type_ref(&body, source),
        "class_body" | "interface_body" | "enum_body" | "annotation_type_body" => {
            declaration_type_ref(&body.parent()?, source)
        }
        _ => None,
    }
}
