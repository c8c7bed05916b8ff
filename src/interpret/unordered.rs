//! The unordered view of a parsed tree.
//!
//! [`interpret_unordered`] replaces each declaration-ordered block body with
//! a bucketed record: one list per member kind, each preserving the original
//! order within that kind. Nothing is dropped; stray empty statements and
//! retained comments get buckets of their own.
//!
//! The transform is a pure function of the tree and cannot fail: the AST's
//! closed sum types leave no unknown body-element kind to report.

use serde::Serialize;

use protosyn_syntax::ast::{
    Comment, Declaration, Edition, EmptyStatement, Enum, EnumField, EnumItem, Extend, ExtendItem,
    Extensions, Field, FieldLabel, FieldOption, GroupField, Import, MapField, Message, MessageItem,
    Meta, Oneof, OneofField, OneofItem, Package, Proto, ProtoItem, ProtoOption, Range, Rpc,
    Service, ServiceItem, Syntax,
};

/// A parsed file with every block body re-bucketed by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedProto {
    pub filename: String,
    pub syntax: Option<Syntax>,
    pub edition: Option<Edition>,
    pub body: UnorderedProtoBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnorderedProtoBody {
    pub imports: Vec<Import>,
    pub packages: Vec<Package>,
    pub options: Vec<ProtoOption>,
    pub messages: Vec<UnorderedMessage>,
    pub enums: Vec<UnorderedEnum>,
    pub services: Vec<UnorderedService>,
    pub extends: Vec<UnorderedExtend>,
    pub empty_statements: Vec<EmptyStatement>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedMessage {
    pub name: String,
    pub body: UnorderedMessageBody,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnorderedMessageBody {
    pub fields: Vec<Field>,
    pub enums: Vec<UnorderedEnum>,
    pub messages: Vec<UnorderedMessage>,
    pub options: Vec<ProtoOption>,
    pub oneofs: Vec<UnorderedOneof>,
    pub map_fields: Vec<MapField>,
    pub groups: Vec<UnorderedGroup>,
    pub extends: Vec<UnorderedExtend>,
    pub reserveds: Vec<UnorderedReserved>,
    pub extensions: Vec<UnorderedExtensions>,
    pub empty_statements: Vec<EmptyStatement>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedEnum {
    pub name: String,
    pub body: UnorderedEnumBody,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnorderedEnumBody {
    pub options: Vec<ProtoOption>,
    pub enum_fields: Vec<EnumField>,
    pub reserveds: Vec<UnorderedReserved>,
    pub empty_statements: Vec<EmptyStatement>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedService {
    pub name: String,
    pub body: UnorderedServiceBody,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnorderedServiceBody {
    pub options: Vec<ProtoOption>,
    pub rpcs: Vec<Rpc>,
    pub empty_statements: Vec<EmptyStatement>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedExtend {
    pub message_type: String,
    pub body: UnorderedExtendBody,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnorderedExtendBody {
    pub fields: Vec<Field>,
    pub groups: Vec<UnorderedGroup>,
    pub empty_statements: Vec<EmptyStatement>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedOneof {
    pub name: String,
    pub body: UnorderedOneofBody,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnorderedOneofBody {
    pub options: Vec<ProtoOption>,
    pub fields: Vec<OneofField>,
    pub empty_statements: Vec<EmptyStatement>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedGroup {
    pub label: FieldLabel,
    pub name: String,
    pub number: String,
    pub body: UnorderedMessageBody,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub inline_comment_behind_left_curly: Option<Comment>,
    pub meta: Meta,
}

/// `Reserved` is already bucket-shaped; kept as an alias for symmetry with
/// the other renamed records.
pub type UnorderedReserved = protosyn_syntax::ast::Reserved;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnorderedExtensions {
    pub ranges: Vec<Range>,
    pub declarations: Vec<Declaration>,
    pub options: Vec<FieldOption>,
    pub comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
    pub meta: Meta,
}

/// Re-bucket every block body of `proto` by declaration kind.
pub fn interpret_unordered(proto: &Proto) -> UnorderedProto {
    let mut body = UnorderedProtoBody::default();
    for item in &proto.body {
        match item {
            ProtoItem::Import(n) => body.imports.push(n.clone()),
            ProtoItem::Package(n) => body.packages.push(n.clone()),
            ProtoItem::Option(n) => body.options.push(n.clone()),
            ProtoItem::Message(n) => body.messages.push(interpret_message(n)),
            ProtoItem::Enum(n) => body.enums.push(interpret_enum(n)),
            ProtoItem::Service(n) => body.services.push(interpret_service(n)),
            ProtoItem::Extend(n) => body.extends.push(interpret_extend(n)),
            ProtoItem::EmptyStatement(n) => body.empty_statements.push(n.clone()),
            ProtoItem::Comment(n) => body.comments.push(n.clone()),
        }
    }
    UnorderedProto {
        filename: proto.filename.clone(),
        syntax: proto.syntax.clone(),
        edition: proto.edition.clone(),
        body,
    }
}

fn interpret_message(message: &Message) -> UnorderedMessage {
    UnorderedMessage {
        name: message.name.clone(),
        body: interpret_message_body(&message.body),
        comments: message.comments.clone(),
        inline_comment: message.inline_comment.clone(),
        inline_comment_behind_left_curly: message.inline_comment_behind_left_curly.clone(),
        meta: message.meta.clone(),
    }
}

fn interpret_message_body(items: &[MessageItem]) -> UnorderedMessageBody {
    let mut body = UnorderedMessageBody::default();
    for item in items {
        match item {
            MessageItem::Field(n) => body.fields.push(n.clone()),
            MessageItem::Enum(n) => body.enums.push(interpret_enum(n)),
            MessageItem::Message(n) => body.messages.push(interpret_message(n)),
            MessageItem::Option(n) => body.options.push(n.clone()),
            MessageItem::Oneof(n) => body.oneofs.push(interpret_oneof(n)),
            MessageItem::MapField(n) => body.map_fields.push(n.clone()),
            MessageItem::Group(n) => body.groups.push(interpret_group(n)),
            MessageItem::Extend(n) => body.extends.push(interpret_extend(n)),
            MessageItem::Reserved(n) => body.reserveds.push(n.clone()),
            MessageItem::Extensions(n) => body.extensions.push(interpret_extensions(n)),
            MessageItem::EmptyStatement(n) => body.empty_statements.push(n.clone()),
            MessageItem::Comment(n) => body.comments.push(n.clone()),
        }
    }
    body
}

fn interpret_enum(enum_: &Enum) -> UnorderedEnum {
    let mut body = UnorderedEnumBody::default();
    for item in &enum_.body {
        match item {
            EnumItem::Option(n) => body.options.push(n.clone()),
            EnumItem::EnumField(n) => body.enum_fields.push(n.clone()),
            EnumItem::Reserved(n) => body.reserveds.push(n.clone()),
            EnumItem::EmptyStatement(n) => body.empty_statements.push(n.clone()),
            EnumItem::Comment(n) => body.comments.push(n.clone()),
        }
    }
    UnorderedEnum {
        name: enum_.name.clone(),
        body,
        comments: enum_.comments.clone(),
        inline_comment: enum_.inline_comment.clone(),
        inline_comment_behind_left_curly: enum_.inline_comment_behind_left_curly.clone(),
        meta: enum_.meta.clone(),
    }
}

fn interpret_service(service: &Service) -> UnorderedService {
    let mut body = UnorderedServiceBody::default();
    for item in &service.body {
        match item {
            ServiceItem::Option(n) => body.options.push(n.clone()),
            ServiceItem::Rpc(n) => body.rpcs.push(n.clone()),
            ServiceItem::EmptyStatement(n) => body.empty_statements.push(n.clone()),
            ServiceItem::Comment(n) => body.comments.push(n.clone()),
        }
    }
    UnorderedService {
        name: service.name.clone(),
        body,
        comments: service.comments.clone(),
        inline_comment: service.inline_comment.clone(),
        inline_comment_behind_left_curly: service.inline_comment_behind_left_curly.clone(),
        meta: service.meta.clone(),
    }
}

fn interpret_extend(extend: &Extend) -> UnorderedExtend {
    let mut body = UnorderedExtendBody::default();
    for item in &extend.body {
        match item {
            ExtendItem::Field(n) => body.fields.push(n.clone()),
            ExtendItem::Group(n) => body.groups.push(interpret_group(n)),
            ExtendItem::EmptyStatement(n) => body.empty_statements.push(n.clone()),
            ExtendItem::Comment(n) => body.comments.push(n.clone()),
        }
    }
    UnorderedExtend {
        message_type: extend.message_type.clone(),
        body,
        comments: extend.comments.clone(),
        inline_comment: extend.inline_comment.clone(),
        inline_comment_behind_left_curly: extend.inline_comment_behind_left_curly.clone(),
        meta: extend.meta.clone(),
    }
}

fn interpret_oneof(oneof: &Oneof) -> UnorderedOneof {
    let mut body = UnorderedOneofBody::default();
    for item in &oneof.body {
        match item {
            OneofItem::Option(n) => body.options.push(n.clone()),
            OneofItem::Field(n) => body.fields.push(n.clone()),
            OneofItem::EmptyStatement(n) => body.empty_statements.push(n.clone()),
            OneofItem::Comment(n) => body.comments.push(n.clone()),
        }
    }
    UnorderedOneof {
        name: oneof.name.clone(),
        body,
        comments: oneof.comments.clone(),
        inline_comment: oneof.inline_comment.clone(),
        inline_comment_behind_left_curly: oneof.inline_comment_behind_left_curly.clone(),
        meta: oneof.meta.clone(),
    }
}

fn interpret_group(group: &GroupField) -> UnorderedGroup {
    UnorderedGroup {
        label: group.label,
        name: group.name.clone(),
        number: group.number.clone(),
        body: interpret_message_body(&group.body),
        comments: group.comments.clone(),
        inline_comment: group.inline_comment.clone(),
        inline_comment_behind_left_curly: group.inline_comment_behind_left_curly.clone(),
        meta: group.meta.clone(),
    }
}

fn interpret_extensions(extensions: &Extensions) -> UnorderedExtensions {
    UnorderedExtensions {
        ranges: extensions.ranges.clone(),
        declarations: extensions.declarations.clone(),
        options: extensions.options.clone(),
        comments: extensions.comments.clone(),
        inline_comment: extensions.inline_comment.clone(),
        meta: extensions.meta.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protosyn_syntax::parser::{ParseOptions, parse};

    #[test]
    fn test_buckets_preserve_in_kind_order() {
        let proto = parse(
            "syntax = \"proto3\";\n\
             message M {\n\
               int32 b = 2;\n\
               option deprecated = true;\n\
               int32 a = 1;\n\
               enum E { E_UNSPECIFIED = 0; }\n\
               int32 c = 3;\n\
             }\n",
            &ParseOptions::default(),
        )
        .unwrap();
        let unordered = interpret_unordered(&proto);
        let message = &unordered.body.messages[0];
        let names: Vec<&str> = message.body.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(message.body.options.len(), 1);
        assert_eq!(message.body.enums.len(), 1);
    }

    #[test]
    fn test_top_level_buckets() {
        let proto = parse(
            "syntax = \"proto3\";\n\
             package p;\n\
             import \"x.proto\";\n\
             message A {}\n\
             enum B { B_UNSPECIFIED = 0; }\n\
             service C {}\n\
             import \"y.proto\";\n",
            &ParseOptions::default(),
        )
        .unwrap();
        let unordered = interpret_unordered(&proto);
        assert_eq!(unordered.syntax.as_ref().unwrap().version, "proto3");
        assert_eq!(unordered.body.packages.len(), 1);
        assert_eq!(unordered.body.imports.len(), 2);
        assert_eq!(unordered.body.imports[0].location, "\"x.proto\"");
        assert_eq!(unordered.body.imports[1].location, "\"y.proto\"");
        assert_eq!(unordered.body.messages.len(), 1);
        assert_eq!(unordered.body.enums.len(), 1);
        assert_eq!(unordered.body.services.len(), 1);
    }

    #[test]
    fn test_oneof_and_group_buckets() {
        let proto = parse(
            "syntax = \"proto2\";\n\
             message M {\n\
               oneof o { int32 x = 1; option (a) = 1; int32 y = 2; }\n\
               optional group G = 3 { optional int32 z = 1; }\n\
             }\n",
            &ParseOptions::default(),
        )
        .unwrap();
        let unordered = interpret_unordered(&proto);
        let message = &unordered.body.messages[0];
        let oneof = &message.body.oneofs[0];
        assert_eq!(oneof.body.fields.len(), 2);
        assert_eq!(oneof.body.fields[0].name, "x");
        assert_eq!(oneof.body.options.len(), 1);
        let group = &message.body.groups[0];
        assert_eq!(group.name, "G");
        assert_eq!(group.body.fields.len(), 1);
    }
}
