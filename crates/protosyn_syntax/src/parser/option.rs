/// Option statements, option names, and constants.
///
/// Permissive mode admits the vendor syntaxes seen in public schema corpora
/// (Cloud Endpoints, OpenAPI annotations, validator messages): aggregate
/// `{...}` constants, list `[...]` constants, and `(.fullIdent)` names.
impl Parser {
    /// `option = "option" optionName "=" constant ";"`
    fn parse_option(&mut self) -> Result<ProtoOption, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Option) {
            return Err(self.unexpected("option"));
        }
        let start = self.lex.pos.clone();

        let name = self.parse_option_name()?;
        self.expect(TokenKind::Eq, "=")?;
        let (constant, _) = self.parse_option_constant()?;
        let end = self.expect(TokenKind::Semicolon, ";")?;

        Ok(ProtoOption {
            name,
            constant,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `optionName = ( ident | "(" [ "." ] fullIdent ")" ) { "." ident }`
    ///
    /// The leading-dot form inside parentheses is permissive-only.
    fn parse_option_name(&mut self) -> Result<String, ParseError> {
        self.lex.next()?;
        let mut name = String::new();
        match self.lex.token {
            TokenKind::LParen => {
                name.push('(');
                self.lex.next()?;
                if self.lex.token == TokenKind::Dot {
                    if !self.permissive {
                        return Err(self.unexpected("fullIdent"));
                    }
                    name.push('.');
                } else {
                    self.lex.un_next();
                }
                let (full, _) = self.lex.read_full_ident()?;
                name.push_str(&full);
                self.expect(TokenKind::RParen, ")")?;
                name.push(')');
            }
            TokenKind::Ident => name.push_str(&self.lex.text),
            _ => return Err(self.unexpected("optionName")),
        }
        loop {
            self.lex.next()?;
            if self.lex.token != TokenKind::Dot {
                self.lex.un_next();
                break;
            }
            self.lex.next()?;
            if self.lex.token != TokenKind::Ident {
                return Err(self.unexpected("ident"));
            }
            name.push('.');
            name.push_str(&self.lex.text);
        }
        Ok(name)
    }

    /// The constant on the right of `=`: aggregate and list forms in
    /// permissive mode, else a plain constant.
    fn parse_option_constant(&mut self) -> Result<(String, Position), ParseError> {
        match self.lex.peek()? {
            TokenKind::LBrace if self.permissive => self.parse_aggregate_constant(),
            TokenKind::LBracket if self.permissive => self.parse_list_constant(),
            _ => self.lex.read_constant(self.permissive),
        }
    }

    /// `"{" field { ("," | ";" | newline) field } "}"` where each field is
    /// `ident ":" constant` or `ident nestedAggregate`.
    ///
    /// The serialized form keeps explicit `,`/`;` separators (including a
    /// trailing one before `}`) and collapses implicit separation to a single
    /// `\n`. Empty `{}` round-trips literally.
    fn parse_aggregate_constant(&mut self) -> Result<(String, Position), ParseError> {
        let start = self.expect(TokenKind::LBrace, "{")?;
        let mut out = String::from("{");

        if self.lex.peek()? == TokenKind::RBrace {
            self.lex.next()?;
            out.push('}');
            return Ok((out, start));
        }

        loop {
            self.lex.next()?;
            if self.lex.token != TokenKind::Ident {
                return Err(self.unexpected("aggregate field name"));
            }
            out.push_str(&self.lex.text);

            if self.lex.peek()? == TokenKind::LBrace {
                let (nested, _) = self.parse_aggregate_constant()?;
                out.push_str(&nested);
            } else {
                self.expect(TokenKind::Colon, ":")?;
                out.push(':');
                let (value, _) = self.parse_aggregate_value()?;
                out.push_str(&value);
            }

            match self.lex.peek()? {
                TokenKind::Comma => {
                    self.lex.next()?;
                    out.push(',');
                    if self.lex.peek()? == TokenKind::RBrace {
                        self.lex.next()?;
                        out.push('}');
                        return Ok((out, start));
                    }
                }
                TokenKind::Semicolon => {
                    self.lex.next()?;
                    out.push(';');
                    if self.lex.peek()? == TokenKind::RBrace {
                        self.lex.next()?;
                        out.push('}');
                        return Ok((out, start));
                    }
                }
                TokenKind::RBrace => {
                    self.lex.next()?;
                    out.push('}');
                    return Ok((out, start));
                }
                // No explicit separator: another field follows.
                _ => out.push('\n'),
            }
        }
    }

    /// A constant inside an aggregate: nested aggregate, list, or plain.
    fn parse_aggregate_value(&mut self) -> Result<(String, Position), ParseError> {
        match self.lex.peek()? {
            TokenKind::LBrace => self.parse_aggregate_constant(),
            TokenKind::LBracket => self.parse_list_constant(),
            _ => self.lex.read_constant(true),
        }
    }

    /// `"[" [ constant { "," constant } ] "]"`
    fn parse_list_constant(&mut self) -> Result<(String, Position), ParseError> {
        let start = self.expect(TokenKind::LBracket, "[")?;
        let mut out = String::from("[");

        if self.lex.peek()? == TokenKind::RBracket {
            self.lex.next()?;
            out.push(']');
            return Ok((out, start));
        }

        loop {
            let (value, _) = self.parse_aggregate_value()?;
            out.push_str(&value);
            self.lex.next()?;
            match self.lex.token {
                TokenKind::Comma => out.push(','),
                TokenKind::RBracket => {
                    out.push(']');
                    return Ok((out, start));
                }
                _ => return Err(self.unexpected("] or ,")),
            }
        }
    }
}
