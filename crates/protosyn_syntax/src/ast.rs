//! Abstract syntax tree for schema files.
//!
//! Every block body is a single ordered sequence of tagged variants, one sum
//! type per container kind, so heterogeneous declarations keep their source
//! order. Nodes carry [`Meta`] (start/end positions), leading comments, and
//! an optional inline comment; block-bodied nodes additionally carry the
//! comment sitting behind their opening brace.
//!
//! Nodes are created during parse and never mutated after the root is
//! returned. All types serialize to JSON for downstream tooling.

use serde::Serialize;

use crate::position::Position;

/// Start and end positions of a node.
///
/// For a block, `end` is the closing `}`, or the trailing `;` when permissive
/// mode accepted one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub start: Position,
    pub end: Position,
}

impl Meta {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A comment with its delimiters and exact extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Raw text including `//` or `/* ... */`.
    pub raw: String,
    pub start: Position,
    pub end: Position,
}

impl Comment {
    pub fn is_block(&self) -> bool {
        self.raw.starts_with("/*")
    }
}

// ============================================================================
// Root
// ============================================================================

/// A parsed schema file.
///
/// Exactly one of `syntax` and `edition` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proto {
    pub filename: String,
    pub syntax: Option<Syntax>,
    pub edition: Option<Edition>,
    pub body: Vec<ProtoItem>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProtoItem {
    Import(Import),
    Package(Package),
    Option(ProtoOption),
    Message(Message),
    Enum(Enum),
    Service(Service),
    Extend(Extend),
    EmptyStatement(EmptyStatement),
    Comment(Comment),
}

/// `syntax = "proto3";`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Syntax {
    /// Unquoted version: `proto2` or `proto3`.
    pub version: String,
    /// The version as written, quotes included.
    pub version_quoted: String,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// `edition = "2023";`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edition {
    /// Unquoted edition number.
    pub edition: String,
    /// The edition as written, quotes included.
    pub edition_quoted: String,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// `import [weak | public] "other.proto";`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    pub modifier: ImportModifier,
    /// Imported path as written, quotes included.
    pub location: String,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ImportModifier {
    #[default]
    None,
    Weak,
    Public,
}

/// `package foo.bar;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub name: String,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// `option name = constant;`
///
/// The name covers `ident { "." ident }`, the extension form
/// `"(" [ "." ] fullIdent ")"`, and dotted suffixes after the parenthesis.
/// The constant is stored as its concrete text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtoOption {
    pub name: String,
    pub constant: String,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

// ============================================================================
// Messages
// ============================================================================

/// `message Name { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub name: String,
    pub body: Vec<MessageItem>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

/// A declaration inside a message body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MessageItem {
    Field(Field),
    Enum(Enum),
    Message(Message),
    Option(ProtoOption),
    Oneof(Oneof),
    MapField(MapField),
    Group(GroupField),
    Extend(Extend),
    Reserved(Reserved),
    Extensions(Extensions),
    EmptyStatement(EmptyStatement),
    Comment(Comment),
}

/// Multiplicity prefix of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FieldLabel {
    #[default]
    None,
    Repeated,
    Required,
    Optional,
}

/// `[label] type name = number [ [fieldOption, ...] ];`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: FieldLabel,
    pub type_name: String,
    pub name: String,
    /// Field number as written (decimal, octal, or hex).
    pub number: String,
    pub options: Vec<FieldOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// `optionName = constant` inside `[...]` brackets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOption {
    pub name: String,
    pub constant: String,
}

/// `map<keyType, valueType> name = number [options];`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapField {
    pub key_type: String,
    pub value_type: String,
    pub name: String,
    pub number: String,
    pub options: Vec<FieldOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// Proto2 `[label] group Name = number { ... }`.
///
/// The body reuses the message member set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupField {
    pub label: FieldLabel,
    pub name: String,
    pub number: String,
    pub body: Vec<MessageItem>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

// ============================================================================
// Oneof
// ============================================================================

/// `oneof name { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Oneof {
    pub name: String,
    pub body: Vec<OneofItem>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OneofItem {
    Option(ProtoOption),
    Field(OneofField),
    EmptyStatement(EmptyStatement),
    Comment(Comment),
}

/// `type name = number [options];` inside a oneof (no label).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneofField {
    pub type_name: String,
    pub name: String,
    pub number: String,
    pub options: Vec<FieldOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

// ============================================================================
// Enums
// ============================================================================

/// `enum Name { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enum {
    pub name: String,
    pub body: Vec<EnumItem>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EnumItem {
    Option(ProtoOption),
    EnumField(EnumField),
    Reserved(Reserved),
    EmptyStatement(EmptyStatement),
    Comment(Comment),
}

/// `name = [ "-" ] number [ [enumValueOption, ...] ];`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumField {
    pub name: String,
    /// Value as written; a negative value keeps its sign.
    pub number: String,
    pub options: Vec<EnumValueOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// `optionName = constant` on an enum value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValueOption {
    pub name: String,
    pub constant: String,
}

// ============================================================================
// Services
// ============================================================================

/// `service Name { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub name: String,
    pub body: Vec<ServiceItem>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ServiceItem {
    Option(ProtoOption),
    Rpc(Rpc),
    EmptyStatement(EmptyStatement),
    Comment(Comment),
}

/// `rpc Name (request) returns (response) ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rpc {
    pub name: String,
    pub request: RpcType,
    pub response: RpcType,
    /// Options from the `{ ... }` body form, in source order.
    pub options: Vec<ProtoOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

/// A request or response message type, optionally streamed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcType {
    pub stream: bool,
    pub type_name: String,
}

// ============================================================================
// Extend
// ============================================================================

/// `extend MessageType { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extend {
    pub message_type: String,
    pub body: Vec<ExtendItem>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExtendItem {
    Field(Field),
    Group(GroupField),
    EmptyStatement(EmptyStatement),
    Comment(Comment),
}

// ============================================================================
// Reserved / extensions
// ============================================================================

/// `reserved ranges;` or `reserved "name", "other";`
///
/// `ranges` and `field_names` are mutually exclusive; the one in use is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reserved {
    pub ranges: Vec<Range>,
    /// Reserved names as written, quotes included.
    pub field_names: Vec<String>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// `begin [ "to" ( end | "max" ) ]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    pub begin: String,
    /// Upper bound; the literal `max` is kept as written.
    pub end: Option<String>,
}

/// `extensions ranges [ [declarations] ];`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extensions {
    pub ranges: Vec<Range>,
    /// `declaration = { ... }` entries from the bracket list.
    pub declarations: Vec<Declaration>,
    /// Other bracket entries, such as `verification = UNVERIFIED`.
    pub options: Vec<FieldOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// An extension declaration: `declaration = { number: 1, full_name: ".a", type: ".B" }`.
///
/// Keys may appear in any order; `repeated` and `reserved` read `true`/`false`
/// written as identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub number: String,
    /// Declared full name as written, quotes included.
    pub full_name: String,
    /// Declared type as written, quotes included.
    pub type_name: String,
    pub repeated: bool,
    pub reserved: bool,
    pub meta: Meta,
}

// ============================================================================
// Empty statement
// ============================================================================

/// A stray `;`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmptyStatement {
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize) -> Position {
        Position {
            filename: String::new(),
            offset: line,
            line,
            column: 1,
        }
    }

    #[test]
    fn test_comment_kind() {
        let line = Comment {
            raw: "// x".to_string(),
            start: pos(1),
            end: pos(1),
        };
        let block = Comment {
            raw: "/* x */".to_string(),
            start: pos(1),
            end: pos(1),
        };
        assert!(!line.is_block());
        assert!(block.is_block());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FieldLabel::default(), FieldLabel::None);
        assert_eq!(ImportModifier::default(), ImportModifier::None);
        assert_eq!(EmptyStatement::default().comments.len(), 0);
    }

    #[test]
    fn test_nodes_serialize_to_json() {
        let field = Field {
            label: FieldLabel::Repeated,
            type_name: "int32".to_string(),
            name: "ids".to_string(),
            number: "1".to_string(),
            options: vec![FieldOption {
                name: "packed".to_string(),
                constant: "true".to_string(),
            }],
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(pos(1), pos(1)),
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type_name"], "int32");
        assert_eq!(json["label"], "Repeated");
        assert_eq!(json["options"][0]["name"], "packed");
    }
}
