/// Enum productions.
impl Parser {
    /// `enum = "enum" enumName "{" { option | enumField | reserved |
    /// emptyStatement } "}"`
    fn parse_enum(&mut self) -> Result<Enum, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Enum) {
            return Err(self.unexpected("enum"));
        }
        let start = self.lex.pos.clone();

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("enumName"));
        }
        let name = self.lex.text.clone();

        let behind = self.open_body()?;
        let mut items: Vec<EnumItem> = Vec::new();
        let end = loop {
            let comments = self.parse_comments();
            if self.lex.peek()? == TokenKind::RBrace {
                self.lex.next()?;
                let rbrace = self.lex.pos.clone();
                if self.body_including_comments {
                    items.extend(comments.into_iter().map(EnumItem::Comment));
                }
                break self.close_body(rbrace)?;
            }
            self.parse_enum_body_statement(&mut items, comments)?;
        };

        Ok(Enum {
            name,
            body: items,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }

    fn parse_enum_body_statement(
        &mut self,
        items: &mut Vec<EnumItem>,
        comments: Vec<Comment>,
    ) -> Result<(), ParseError> {
        match self.lex.peek_keyword()? {
            TokenKind::Keyword(Keyword::Option) => {
                let mut option = self.parse_option()?;
                option.comments = comments;
                let line = option.meta.end.line;
                self.maybe_scan_inline_comment(&mut option.inline_comment, line);
                items.push(EnumItem::Option(option));
            }
            TokenKind::Keyword(Keyword::Reserved) => {
                let mut reserved = self.parse_reserved()?;
                reserved.comments = comments;
                let line = reserved.meta.end.line;
                self.maybe_scan_inline_comment(&mut reserved.inline_comment, line);
                items.push(EnumItem::Reserved(reserved));
            }
            _ => match self.parse_enum_field() {
                Ok(mut field) => {
                    field.comments = comments;
                    let line = field.meta.end.line;
                    self.maybe_scan_inline_comment(&mut field.inline_comment, line);
                    items.push(EnumItem::EnumField(field));
                }
                Err(field_err) => match self.lex.read_empty_statement() {
                    Ok(()) => {
                        let mut empty = EmptyStatement {
                            comments,
                            inline_comment: None,
                        };
                        let line = self.lex.pos.line;
                        self.maybe_scan_inline_comment(&mut empty.inline_comment, line);
                        items.push(EnumItem::EmptyStatement(empty));
                    }
                    Err(empty_err) => return Err(ParseError::alternatives(field_err, empty_err)),
                },
            },
        }
        Ok(())
    }

    /// `enumField = ident "=" [ "-" ] intLit [ "[" enumValueOptions "]" ] ";"`
    ///
    /// A minus between `=` and the literal makes the stored number negative.
    fn parse_enum_field(&mut self) -> Result<EnumField, ParseError> {
        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            let err = self.unexpected("enumFieldName");
            self.lex.un_next();
            return Err(err);
        }
        let start = self.lex.pos.clone();
        let name = self.lex.text.clone();

        self.expect(TokenKind::Eq, "=")?;

        self.lex.next_lit()?;
        let number = match self.lex.token {
            TokenKind::IntLit => self.lex.text.clone(),
            TokenKind::Minus => {
                self.lex.next_number_lit()?;
                if self.lex.token != TokenKind::IntLit {
                    return Err(self.unexpected("intLit"));
                }
                format!("-{}", self.lex.text)
            }
            _ => return Err(self.unexpected("intLit")),
        };

        let options = self.parse_enum_value_options()?;
        let end = self.expect(TokenKind::Semicolon, ";")?;

        Ok(EnumField {
            name,
            number,
            options,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `[ enumValueOption { "," enumValueOption } ]`, or nothing.
    fn parse_enum_value_options(&mut self) -> Result<Vec<EnumValueOption>, ParseError> {
        if self.lex.peek()? != TokenKind::LBracket {
            return Ok(Vec::new());
        }
        self.lex.next()?;

        let mut options = vec![self.parse_enum_value_option()?];
        loop {
            self.lex.next()?;
            match self.lex.token {
                TokenKind::Comma => options.push(self.parse_enum_value_option()?),
                TokenKind::RBracket => break,
                _ => return Err(self.unexpected("] or ,")),
            }
        }
        Ok(options)
    }

    fn parse_enum_value_option(&mut self) -> Result<EnumValueOption, ParseError> {
        let name = self.parse_option_name()?;
        self.expect(TokenKind::Eq, "=")?;
        let (constant, _) = self.parse_option_constant()?;
        Ok(EnumValueOption { name, constant })
    }
}
