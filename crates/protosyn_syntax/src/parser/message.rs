/// Block-bodied containers: messages, groups, extends, oneofs.
///
/// All block parsers share the same open/close protocol: the `{` may carry an
/// inline comment on its own line (the behind-left-brace slot), and in
/// permissive mode an optional `;` after the `}` extends the block's end
/// position.

/// Outcome of the no-keyword fallback shared by message and extend bodies.
enum Fieldish {
    Field(Field),
    Group(GroupField),
    Empty(EmptyStatement),
}

impl Parser {
    /// Consume `{` and any comment sitting on its line.
    fn open_body(&mut self) -> Result<Option<Comment>, ParseError> {
        let lbrace = self.expect(TokenKind::LBrace, "{")?;
        let mut behind = None;
        self.maybe_scan_inline_comment(&mut behind, lbrace.line);
        Ok(behind)
    }

    /// In permissive mode consume an optional `;` after `}`; the block ends
    /// at whichever token came last.
    fn close_body(&mut self, rbrace: Position) -> Result<Position, ParseError> {
        if self.permissive && self.lex.consume_token(TokenKind::Semicolon)? {
            return Ok(self.lex.pos.clone());
        }
        Ok(rbrace)
    }

    /// `message = "message" messageName "{" messageBody "}"`
    fn parse_message(&mut self) -> Result<Message, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Message) {
            return Err(self.unexpected("message"));
        }
        let start = self.lex.pos.clone();

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("messageName"));
        }
        let name = self.lex.text.clone();

        let (body, behind, end) = self.parse_message_body()?;
        Ok(Message {
            name,
            body,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }

    /// The message member set, reused verbatim by groups.
    fn parse_message_body(
        &mut self,
    ) -> Result<(Vec<MessageItem>, Option<Comment>, Position), ParseError> {
        let behind = self.open_body()?;
        let mut items: Vec<MessageItem> = Vec::new();
        loop {
            let comments = self.parse_comments();
            if self.lex.peek()? == TokenKind::RBrace {
                self.lex.next()?;
                let rbrace = self.lex.pos.clone();
                if self.body_including_comments {
                    items.extend(comments.into_iter().map(MessageItem::Comment));
                }
                let end = self.close_body(rbrace)?;
                return Ok((items, behind, end));
            }
            self.parse_message_body_statement(&mut items, comments)?;
        }
    }

    fn parse_message_body_statement(
        &mut self,
        items: &mut Vec<MessageItem>,
        comments: Vec<Comment>,
    ) -> Result<(), ParseError> {
        match self.lex.peek_keyword()? {
            TokenKind::Keyword(Keyword::Option) => {
                let mut option = self.parse_option()?;
                option.comments = comments;
                let line = option.meta.end.line;
                self.maybe_scan_inline_comment(&mut option.inline_comment, line);
                items.push(MessageItem::Option(option));
            }
            TokenKind::Keyword(Keyword::Enum) => {
                let mut enum_ = self.parse_enum()?;
                enum_.comments = comments;
                let line = enum_.meta.end.line;
                self.maybe_scan_inline_comment(&mut enum_.inline_comment, line);
                items.push(MessageItem::Enum(enum_));
            }
            TokenKind::Keyword(Keyword::Message) => {
                let mut message = self.parse_message()?;
                message.comments = comments;
                let line = message.meta.end.line;
                self.maybe_scan_inline_comment(&mut message.inline_comment, line);
                items.push(MessageItem::Message(message));
            }
            TokenKind::Keyword(Keyword::Oneof) => {
                let mut oneof = self.parse_oneof()?;
                oneof.comments = comments;
                let line = oneof.meta.end.line;
                self.maybe_scan_inline_comment(&mut oneof.inline_comment, line);
                items.push(MessageItem::Oneof(oneof));
            }
            TokenKind::Keyword(Keyword::Map) => {
                let mut map_field = self.parse_map_field()?;
                map_field.comments = comments;
                let line = map_field.meta.end.line;
                self.maybe_scan_inline_comment(&mut map_field.inline_comment, line);
                items.push(MessageItem::MapField(map_field));
            }
            TokenKind::Keyword(Keyword::Extend) => {
                let mut extend = self.parse_extend()?;
                extend.comments = comments;
                let line = extend.meta.end.line;
                self.maybe_scan_inline_comment(&mut extend.inline_comment, line);
                items.push(MessageItem::Extend(extend));
            }
            TokenKind::Keyword(Keyword::Reserved) => {
                let mut reserved = self.parse_reserved()?;
                reserved.comments = comments;
                let line = reserved.meta.end.line;
                self.maybe_scan_inline_comment(&mut reserved.inline_comment, line);
                items.push(MessageItem::Reserved(reserved));
            }
            TokenKind::Keyword(Keyword::Extensions) => {
                let mut extensions = self.parse_extensions()?;
                extensions.comments = comments;
                let line = extensions.meta.end.line;
                self.maybe_scan_inline_comment(&mut extensions.inline_comment, line);
                items.push(MessageItem::Extensions(extensions));
            }
            _ => match self.parse_fieldish(comments)? {
                Fieldish::Field(field) => items.push(MessageItem::Field(field)),
                Fieldish::Group(group) => items.push(MessageItem::Group(group)),
                Fieldish::Empty(empty) => items.push(MessageItem::EmptyStatement(empty)),
            },
        }
        Ok(())
    }

    /// The no-keyword fallback: a group when the lookahead matches, else a
    /// field, else an empty statement. When field and empty statement both
    /// fail, the combined error names both branches.
    fn parse_fieldish(&mut self, comments: Vec<Comment>) -> Result<Fieldish, ParseError> {
        if self.peek_is_group() {
            let mut group = self.parse_group()?;
            group.comments = comments;
            let line = group.meta.end.line;
            self.maybe_scan_inline_comment(&mut group.inline_comment, line);
            return Ok(Fieldish::Group(group));
        }
        match self.parse_field() {
            Ok(mut field) => {
                field.comments = comments;
                let line = field.meta.end.line;
                self.maybe_scan_inline_comment(&mut field.inline_comment, line);
                Ok(Fieldish::Field(field))
            }
            Err(field_err) => match self.lex.read_empty_statement() {
                Ok(()) => {
                    let mut empty = EmptyStatement {
                        comments,
                        inline_comment: None,
                    };
                    let line = self.lex.pos.line;
                    self.maybe_scan_inline_comment(&mut empty.inline_comment, line);
                    Ok(Fieldish::Empty(empty))
                }
                Err(empty_err) => Err(ParseError::alternatives(field_err, empty_err)),
            },
        }
    }

    // ========================================================================
    // Group lookahead
    // ========================================================================

    /// Lookahead for `[label] "group" UpperIdent "=" intLit "{"`.
    ///
    /// The reader is restored to its starting state whatever the outcome, by
    /// replaying each captured token extent in reverse.
    fn peek_is_group(&mut self) -> bool {
        let mut raws: Vec<Vec<char>> = Vec::new();
        let matched = self.group_shape_ahead(&mut raws);
        for raw in raws.into_iter().rev() {
            self.lex.un_next_to(raw);
        }
        matched
    }

    fn group_shape_ahead(&mut self, raws: &mut Vec<Vec<char>>) -> bool {
        if !self.lookahead_step(raws, Lexer::next_keyword) {
            return false;
        }
        let mut token = self.lex.token;
        if field_label_of(token).is_some() {
            if !self.lookahead_step(raws, Lexer::next_keyword) {
                return false;
            }
            token = self.lex.token;
        }
        if token != TokenKind::Keyword(Keyword::Group) {
            return false;
        }

        if !self.lookahead_step(raws, Lexer::next) {
            return false;
        }
        if self.lex.token != TokenKind::Ident || !starts_uppercase(&self.lex.text) {
            return false;
        }

        if !self.lookahead_step(raws, Lexer::next) {
            return false;
        }
        if self.lex.token != TokenKind::Eq {
            return false;
        }

        if !self.lookahead_step(raws, Lexer::next_lit) {
            return false;
        }
        if self.lex.token != TokenKind::IntLit {
            return false;
        }

        if !self.lookahead_step(raws, Lexer::next) {
            return false;
        }
        self.lex.token == TokenKind::LBrace
    }

    /// Run one lookahead read, capturing its raw extent either way.
    fn lookahead_step(
        &mut self,
        raws: &mut Vec<Vec<char>>,
        read: fn(&mut Lexer) -> Result<(), ParseError>,
    ) -> bool {
        let ok = read(&mut self.lex).is_ok();
        raws.push(self.lex.last_scan_raw());
        ok
    }

    /// `group = [label] "group" groupName "=" fieldNumber "{" messageBody "}"`
    ///
    /// Only called after `peek_is_group` matched.
    fn parse_group(&mut self) -> Result<GroupField, ParseError> {
        let mut label = FieldLabel::None;
        let mut start = None;

        self.lex.next_keyword()?;
        if let Some(l) = field_label_of(self.lex.token) {
            label = l;
            start = Some(self.lex.pos.clone());
            self.lex.next_keyword()?;
        }
        if !self.lex.token.is_keyword(Keyword::Group) {
            return Err(self.unexpected("group"));
        }
        let start = start.unwrap_or_else(|| self.lex.pos.clone());

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("groupName"));
        }
        if !starts_uppercase(&self.lex.text) {
            return Err(self.unexpected("groupName starting with a capital letter"));
        }
        let name = self.lex.text.clone();

        self.expect(TokenKind::Eq, "=")?;
        let number = self.parse_field_number()?;

        let (body, behind, end) = self.parse_message_body()?;
        Ok(GroupField {
            label,
            name,
            number,
            body,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }

    // ========================================================================
    // Extend
    // ========================================================================

    /// `extend = "extend" messageType "{" { field | group | emptyStatement } "}"`
    fn parse_extend(&mut self) -> Result<Extend, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Extend) {
            return Err(self.unexpected("extend"));
        }
        let start = self.lex.pos.clone();

        let (message_type, _) = self.lex.read_message_type()?;

        let behind = self.open_body()?;
        let mut items: Vec<ExtendItem> = Vec::new();
        let end = loop {
            let comments = self.parse_comments();
            if self.lex.peek()? == TokenKind::RBrace {
                self.lex.next()?;
                let rbrace = self.lex.pos.clone();
                if self.body_including_comments {
                    items.extend(comments.into_iter().map(ExtendItem::Comment));
                }
                break self.close_body(rbrace)?;
            }
            match self.parse_fieldish(comments)? {
                Fieldish::Field(field) => items.push(ExtendItem::Field(field)),
                Fieldish::Group(group) => items.push(ExtendItem::Group(group)),
                Fieldish::Empty(empty) => items.push(ExtendItem::EmptyStatement(empty)),
            }
        };

        Ok(Extend {
            message_type,
            body: items,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }

    // ========================================================================
    // Oneof
    // ========================================================================

    /// `oneof = "oneof" oneofName "{" { option | oneofField | emptyStatement } "}"`
    fn parse_oneof(&mut self) -> Result<Oneof, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Oneof) {
            return Err(self.unexpected("oneof"));
        }
        let start = self.lex.pos.clone();

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("oneofName"));
        }
        let name = self.lex.text.clone();

        let behind = self.open_body()?;
        let mut items: Vec<OneofItem> = Vec::new();
        let end = loop {
            let comments = self.parse_comments();
            if self.lex.peek()? == TokenKind::RBrace {
                self.lex.next()?;
                let rbrace = self.lex.pos.clone();
                if self.body_including_comments {
                    items.extend(comments.into_iter().map(OneofItem::Comment));
                }
                break self.close_body(rbrace)?;
            }
            match self.lex.peek_keyword()? {
                TokenKind::Keyword(Keyword::Option) => {
                    let mut option = self.parse_option()?;
                    option.comments = comments;
                    let line = option.meta.end.line;
                    self.maybe_scan_inline_comment(&mut option.inline_comment, line);
                    items.push(OneofItem::Option(option));
                }
                _ => match self.parse_oneof_field() {
                    Ok(mut field) => {
                        field.comments = comments;
                        let line = field.meta.end.line;
                        self.maybe_scan_inline_comment(&mut field.inline_comment, line);
                        items.push(OneofItem::Field(field));
                    }
                    Err(field_err) => match self.lex.read_empty_statement() {
                        Ok(()) => {
                            let mut empty = EmptyStatement {
                                comments,
                                inline_comment: None,
                            };
                            let line = self.lex.pos.line;
                            self.maybe_scan_inline_comment(&mut empty.inline_comment, line);
                            items.push(OneofItem::EmptyStatement(empty));
                        }
                        Err(empty_err) => {
                            return Err(ParseError::alternatives(field_err, empty_err));
                        }
                    },
                },
            }
        };

        Ok(Oneof {
            name,
            body: items,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
