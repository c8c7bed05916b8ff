/// Top-level productions: the proto root, syntax/edition, imports, packages.
///
/// `proto = (syntax | edition) { import | package | option | topLevelDef |
/// emptyStatement }`
impl Parser {
    fn parse_proto(&mut self) -> Result<Proto, ParseError> {
        let comments = self.parse_comments();
        let mut proto = Proto {
            filename: self.filename.clone(),
            syntax: None,
            edition: None,
            body: Vec::new(),
        };

        match self.lex.peek_keyword()? {
            TokenKind::Keyword(Keyword::Syntax) => {
                let mut syntax = self.parse_syntax()?;
                syntax.comments = comments;
                let end_line = syntax.meta.end.line;
                self.maybe_scan_inline_comment(&mut syntax.inline_comment, end_line);
                proto.syntax = Some(syntax);
            }
            TokenKind::Keyword(Keyword::Edition) => {
                let mut edition = self.parse_edition()?;
                edition.comments = comments;
                let end_line = edition.meta.end.line;
                self.maybe_scan_inline_comment(&mut edition.inline_comment, end_line);
                proto.edition = Some(edition);
            }
            _ => {
                self.lex.next_keyword()?;
                return Err(self.unexpected("syntax or edition"));
            }
        }

        loop {
            let comments = self.parse_comments();
            if self.is_eof()? {
                if self.body_including_comments {
                    proto.body.extend(comments.into_iter().map(ProtoItem::Comment));
                }
                break;
            }
            self.parse_proto_body_statement(&mut proto.body, comments)?;
        }
        Ok(proto)
    }

    fn parse_proto_body_statement(
        &mut self,
        body: &mut Vec<ProtoItem>,
        comments: Vec<Comment>,
    ) -> Result<(), ParseError> {
        match self.lex.peek_keyword()? {
            TokenKind::Keyword(Keyword::Import) => {
                let mut import = self.parse_import()?;
                import.comments = comments;
                let line = import.meta.end.line;
                self.maybe_scan_inline_comment(&mut import.inline_comment, line);
                body.push(ProtoItem::Import(import));
            }
            TokenKind::Keyword(Keyword::Package) => {
                let mut package = self.parse_package()?;
                package.comments = comments;
                let line = package.meta.end.line;
                self.maybe_scan_inline_comment(&mut package.inline_comment, line);
                body.push(ProtoItem::Package(package));
            }
            TokenKind::Keyword(Keyword::Option) => {
                let mut option = self.parse_option()?;
                option.comments = comments;
                let line = option.meta.end.line;
                self.maybe_scan_inline_comment(&mut option.inline_comment, line);
                body.push(ProtoItem::Option(option));
            }
            TokenKind::Keyword(Keyword::Message) => {
                let mut message = self.parse_message()?;
                message.comments = comments;
                let line = message.meta.end.line;
                self.maybe_scan_inline_comment(&mut message.inline_comment, line);
                body.push(ProtoItem::Message(message));
            }
            TokenKind::Keyword(Keyword::Enum) => {
                let mut enum_ = self.parse_enum()?;
                enum_.comments = comments;
                let line = enum_.meta.end.line;
                self.maybe_scan_inline_comment(&mut enum_.inline_comment, line);
                body.push(ProtoItem::Enum(enum_));
            }
            TokenKind::Keyword(Keyword::Service) => {
                let mut service = self.parse_service()?;
                service.comments = comments;
                let line = service.meta.end.line;
                self.maybe_scan_inline_comment(&mut service.inline_comment, line);
                body.push(ProtoItem::Service(service));
            }
            TokenKind::Keyword(Keyword::Extend) => {
                let mut extend = self.parse_extend()?;
                extend.comments = comments;
                let line = extend.meta.end.line;
                self.maybe_scan_inline_comment(&mut extend.inline_comment, line);
                body.push(ProtoItem::Extend(extend));
            }
            _ => {
                // Unknown statements are attempted as an empty statement;
                // failure surfaces.
                self.lex.read_empty_statement()?;
                let mut empty = EmptyStatement {
                    comments,
                    inline_comment: None,
                };
                let line = self.lex.pos.line;
                self.maybe_scan_inline_comment(&mut empty.inline_comment, line);
                body.push(ProtoItem::EmptyStatement(empty));
            }
        }
        Ok(())
    }

    /// `syntax = "syntax" "=" quote ("proto2" | "proto3") quote ";"`
    fn parse_syntax(&mut self) -> Result<Syntax, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Syntax) {
            return Err(self.unexpected("syntax"));
        }
        let start = self.lex.pos.clone();

        self.expect(TokenKind::Eq, "=")?;

        self.lex.next_keyword_or_str_lit()?;
        if self.lex.token != TokenKind::StrLit {
            return Err(self.unexpected("quoted proto2 or proto3"));
        }
        let version_quoted = self.lex.text.clone();
        let version = strip_quotes(&version_quoted).to_string();
        if version != "proto2" && version != "proto3" {
            return Err(self.unexpected("proto2 or proto3"));
        }

        let end = self.expect(TokenKind::Semicolon, ";")?;
        Ok(Syntax {
            version,
            version_quoted,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `edition = "edition" "=" quote decimalLit quote ";"`
    ///
    /// Any integer literal is accepted as the edition number.
    fn parse_edition(&mut self) -> Result<Edition, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Edition) {
            return Err(self.unexpected("edition"));
        }
        let start = self.lex.pos.clone();

        self.expect(TokenKind::Eq, "=")?;

        self.lex.next_keyword_or_str_lit()?;
        if self.lex.token != TokenKind::StrLit {
            return Err(self.unexpected("quoted edition number"));
        }
        let edition_quoted = self.lex.text.clone();
        let edition = strip_quotes(&edition_quoted).to_string();
        if edition.is_empty() || !edition.chars().all(|c| c.is_ascii_digit()) {
            return Err(self.unexpected("decimal edition number"));
        }

        let end = self.expect(TokenKind::Semicolon, ";")?;
        Ok(Edition {
            edition,
            edition_quoted,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `import = "import" [ "weak" | "public" ] strLit ";"`
    fn parse_import(&mut self) -> Result<Import, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Import) {
            return Err(self.unexpected("import"));
        }
        let start = self.lex.pos.clone();

        self.lex.next_keyword_or_str_lit()?;
        let modifier = match self.lex.token {
            TokenKind::Keyword(Keyword::Weak) => {
                self.lex.next_str_lit()?;
                if self.lex.token != TokenKind::StrLit {
                    return Err(self.unexpected("strLit"));
                }
                ImportModifier::Weak
            }
            TokenKind::Keyword(Keyword::Public) => {
                self.lex.next_str_lit()?;
                if self.lex.token != TokenKind::StrLit {
                    return Err(self.unexpected("strLit"));
                }
                ImportModifier::Public
            }
            TokenKind::StrLit => ImportModifier::None,
            _ => return Err(self.unexpected("weak or public or strLit")),
        };
        let location = self.lex.text.clone();

        let end = self.expect(TokenKind::Semicolon, ";")?;
        Ok(Import {
            modifier,
            location,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `package = "package" fullIdent ";"`
    fn parse_package(&mut self) -> Result<Package, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Package) {
            return Err(self.unexpected("package"));
        }
        let start = self.lex.pos.clone();

        let (name, _) = self.lex.read_full_ident()?;

        let end = self.expect(TokenKind::Semicolon, ";")?;
        Ok(Package {
            name,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }
}
