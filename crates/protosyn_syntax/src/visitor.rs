//! Double-dispatch traversal over the AST.
//!
//! A [`Visitor`] implements one entry per node variant; returning `false`
//! from an entry suppresses descent into that node's children. Comments are
//! leaves, so [`Visitor::visit_comment`] returns nothing.
//!
//! Descent order for every node: the node itself, its body in stored order,
//! its leading comments, its inline comment, and finally the comment behind
//! its opening brace.

use crate::ast::*;

/// User-supplied visitor; every entry defaults to descending.
#[allow(unused_variables)]
pub trait Visitor {
    fn visit_comment(&mut self, comment: &Comment) {}

    fn visit_syntax(&mut self, syntax: &Syntax) -> bool {
        true
    }
    fn visit_edition(&mut self, edition: &Edition) -> bool {
        true
    }
    fn visit_import(&mut self, import: &Import) -> bool {
        true
    }
    fn visit_package(&mut self, package: &Package) -> bool {
        true
    }
    fn visit_option(&mut self, option: &ProtoOption) -> bool {
        true
    }
    fn visit_message(&mut self, message: &Message) -> bool {
        true
    }
    fn visit_enum(&mut self, enum_: &Enum) -> bool {
        true
    }
    fn visit_enum_field(&mut self, field: &EnumField) -> bool {
        true
    }
    fn visit_field(&mut self, field: &Field) -> bool {
        true
    }
    fn visit_map_field(&mut self, field: &MapField) -> bool {
        true
    }
    fn visit_oneof(&mut self, oneof: &Oneof) -> bool {
        true
    }
    fn visit_oneof_field(&mut self, field: &OneofField) -> bool {
        true
    }
    fn visit_group_field(&mut self, group: &GroupField) -> bool {
        true
    }
    fn visit_service(&mut self, service: &Service) -> bool {
        true
    }
    fn visit_rpc(&mut self, rpc: &Rpc) -> bool {
        true
    }
    fn visit_extend(&mut self, extend: &Extend) -> bool {
        true
    }
    fn visit_reserved(&mut self, reserved: &Reserved) -> bool {
        true
    }
    fn visit_extensions(&mut self, extensions: &Extensions) -> bool {
        true
    }
    fn visit_declaration(&mut self, declaration: &Declaration) -> bool {
        true
    }
    fn visit_empty_statement(&mut self, empty: &EmptyStatement) -> bool {
        true
    }
}

/// A node that accepts a visitor.
pub trait Visitee {
    fn accept(&self, visitor: &mut dyn Visitor);
}

fn accept_comments(
    comments: &[Comment],
    inline: &Option<Comment>,
    behind_brace: Option<&Option<Comment>>,
    visitor: &mut dyn Visitor,
) {
    for comment in comments {
        comment.accept(visitor);
    }
    if let Some(c) = inline {
        c.accept(visitor);
    }
    if let Some(Some(c)) = behind_brace {
        c.accept(visitor);
    }
}

impl Proto {
    /// Walk the whole tree in declaration order.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        if let Some(syntax) = &self.syntax {
            syntax.accept(visitor);
        }
        if let Some(edition) = &self.edition {
            edition.accept(visitor);
        }
        for item in &self.body {
            item.accept(visitor);
        }
    }
}

impl Visitee for Comment {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_comment(self);
    }
}

impl Visitee for Syntax {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_syntax(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Edition {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_edition(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Import {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_import(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Package {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_package(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for ProtoOption {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_option(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Message {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_message(self) {
            return;
        }
        for item in &self.body {
            item.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for MessageItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            MessageItem::Field(n) => n.accept(visitor),
            MessageItem::Enum(n) => n.accept(visitor),
            MessageItem::Message(n) => n.accept(visitor),
            MessageItem::Option(n) => n.accept(visitor),
            MessageItem::Oneof(n) => n.accept(visitor),
            MessageItem::MapField(n) => n.accept(visitor),
            MessageItem::Group(n) => n.accept(visitor),
            MessageItem::Extend(n) => n.accept(visitor),
            MessageItem::Reserved(n) => n.accept(visitor),
            MessageItem::Extensions(n) => n.accept(visitor),
            MessageItem::EmptyStatement(n) => n.accept(visitor),
            MessageItem::Comment(n) => n.accept(visitor),
        }
    }
}

impl Visitee for Field {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_field(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for MapField {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_map_field(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for GroupField {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_group_field(self) {
            return;
        }
        for item in &self.body {
            item.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for Oneof {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_oneof(self) {
            return;
        }
        for item in &self.body {
            item.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for OneofItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            OneofItem::Option(n) => n.accept(visitor),
            OneofItem::Field(n) => n.accept(visitor),
            OneofItem::EmptyStatement(n) => n.accept(visitor),
            OneofItem::Comment(n) => n.accept(visitor),
        }
    }
}

impl Visitee for OneofField {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_oneof_field(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Enum {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_enum(self) {
            return;
        }
        for item in &self.body {
            item.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for EnumItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            EnumItem::Option(n) => n.accept(visitor),
            EnumItem::EnumField(n) => n.accept(visitor),
            EnumItem::Reserved(n) => n.accept(visitor),
            EnumItem::EmptyStatement(n) => n.accept(visitor),
            EnumItem::Comment(n) => n.accept(visitor),
        }
    }
}

impl Visitee for EnumField {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_enum_field(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Service {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_service(self) {
            return;
        }
        for item in &self.body {
            item.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for ServiceItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            ServiceItem::Option(n) => n.accept(visitor),
            ServiceItem::Rpc(n) => n.accept(visitor),
            ServiceItem::EmptyStatement(n) => n.accept(visitor),
            ServiceItem::Comment(n) => n.accept(visitor),
        }
    }
}

impl Visitee for Rpc {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_rpc(self) {
            return;
        }
        for option in &self.options {
            option.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for Extend {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_extend(self) {
            return;
        }
        for item in &self.body {
            item.accept(visitor);
        }
        accept_comments(
            &self.comments,
            &self.inline_comment,
            Some(&self.inline_comment_behind_left_curly),
            visitor,
        );
    }
}

impl Visitee for ExtendItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            ExtendItem::Field(n) => n.accept(visitor),
            ExtendItem::Group(n) => n.accept(visitor),
            ExtendItem::EmptyStatement(n) => n.accept(visitor),
            ExtendItem::Comment(n) => n.accept(visitor),
        }
    }
}

impl Visitee for Reserved {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_reserved(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Extensions {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_extensions(self) {
            return;
        }
        for declaration in &self.declarations {
            declaration.accept(visitor);
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for Declaration {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_declaration(self);
    }
}

impl Visitee for EmptyStatement {
    fn accept(&self, visitor: &mut dyn Visitor) {
        if !visitor.visit_empty_statement(self) {
            return;
        }
        accept_comments(&self.comments, &self.inline_comment, None, visitor);
    }
}

impl Visitee for ProtoItem {
    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            ProtoItem::Import(n) => n.accept(visitor),
            ProtoItem::Package(n) => n.accept(visitor),
            ProtoItem::Option(n) => n.accept(visitor),
            ProtoItem::Message(n) => n.accept(visitor),
            ProtoItem::Enum(n) => n.accept(visitor),
            ProtoItem::Service(n) => n.accept(visitor),
            ProtoItem::Extend(n) => n.accept(visitor),
            ProtoItem::EmptyStatement(n) => n.accept(visitor),
            ProtoItem::Comment(n) => n.accept(visitor),
        }
    }
}
