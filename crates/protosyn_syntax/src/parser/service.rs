/// Service and rpc productions.
impl Parser {
    /// `service = "service" serviceName "{" { option | rpc | emptyStatement } "}"`
    fn parse_service(&mut self) -> Result<Service, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Service) {
            return Err(self.unexpected("service"));
        }
        let start = self.lex.pos.clone();

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("serviceName"));
        }
        let name = self.lex.text.clone();

        let behind = self.open_body()?;
        let mut items: Vec<ServiceItem> = Vec::new();
        let end = loop {
            let comments = self.parse_comments();
            if self.lex.peek()? == TokenKind::RBrace {
                self.lex.next()?;
                let rbrace = self.lex.pos.clone();
                if self.body_including_comments {
                    items.extend(comments.into_iter().map(ServiceItem::Comment));
                }
                break self.close_body(rbrace)?;
            }
            match self.lex.peek_keyword()? {
                TokenKind::Keyword(Keyword::Option) => {
                    let mut option = self.parse_option()?;
                    option.comments = comments;
                    let line = option.meta.end.line;
                    self.maybe_scan_inline_comment(&mut option.inline_comment, line);
                    items.push(ServiceItem::Option(option));
                }
                TokenKind::Keyword(Keyword::Rpc) => {
                    let mut rpc = self.parse_rpc()?;
                    rpc.comments = comments;
                    let line = rpc.meta.end.line;
                    self.maybe_scan_inline_comment(&mut rpc.inline_comment, line);
                    items.push(ServiceItem::Rpc(rpc));
                }
                _ => {
                    self.lex.read_empty_statement()?;
                    let mut empty = EmptyStatement {
                        comments,
                        inline_comment: None,
                    };
                    let line = self.lex.pos.line;
                    self.maybe_scan_inline_comment(&mut empty.inline_comment, line);
                    items.push(ServiceItem::EmptyStatement(empty));
                }
            }
        };

        Ok(Service {
            name,
            body: items,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }

    /// `rpc = "rpc" rpcName "(" [ "stream" ] messageType ")" "returns" "("
    /// [ "stream" ] messageType ")" ( ";" | "{" { option | emptyStatement } "}" )`
    fn parse_rpc(&mut self) -> Result<Rpc, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Rpc) {
            return Err(self.unexpected("rpc"));
        }
        let start = self.lex.pos.clone();

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("rpcName"));
        }
        let name = self.lex.text.clone();

        self.expect(TokenKind::LParen, "(")?;
        let request = self.parse_rpc_type()?;

        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Returns) {
            return Err(self.unexpected("returns"));
        }

        self.expect(TokenKind::LParen, "(")?;
        let response = self.parse_rpc_type()?;

        let mut options = Vec::new();
        let mut behind = None;
        self.lex.next()?;
        let end = match self.lex.token {
            TokenKind::Semicolon => self.lex.pos.clone(),
            TokenKind::LBrace => {
                let lbrace = self.lex.pos.clone();
                self.maybe_scan_inline_comment(&mut behind, lbrace.line);
                loop {
                    let comments = self.parse_comments();
                    if self.lex.peek()? == TokenKind::RBrace {
                        self.lex.next()?;
                        let rbrace = self.lex.pos.clone();
                        break self.close_body(rbrace)?;
                    }
                    match self.lex.peek_keyword()? {
                        TokenKind::Keyword(Keyword::Option) => {
                            let mut option = self.parse_option()?;
                            option.comments = comments;
                            let line = option.meta.end.line;
                            self.maybe_scan_inline_comment(&mut option.inline_comment, line);
                            options.push(option);
                        }
                        _ => self.lex.read_empty_statement()?,
                    }
                }
            }
            _ => return Err(self.unexpected("; or {")),
        };

        Ok(Rpc {
            name,
            request,
            response,
            options,
            comments: Vec::new(),
            inline_comment: None,
            inline_comment_behind_left_curly: behind,
            meta: Meta::new(start, end),
        })
    }

    /// `"(" [ "stream" ] messageType ")"`, with the `(` already consumed.
    fn parse_rpc_type(&mut self) -> Result<RpcType, ParseError> {
        self.lex.next_keyword()?;
        let stream = if self.lex.token.is_keyword(Keyword::Stream) {
            true
        } else {
            self.lex.un_next();
            false
        };
        let (type_name, _) = self.lex.read_message_type()?;
        self.expect(TokenKind::RParen, ")")?;
        Ok(RpcType { stream, type_name })
    }
}
