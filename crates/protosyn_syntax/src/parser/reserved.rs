/// Reserved statements, extension ranges, and extension declarations.
impl Parser {
    /// `reserved = "reserved" ( ranges | fieldNames ) ";"`
    ///
    /// Ranges are tried first; when both branches fail the combined error
    /// names each.
    fn parse_reserved(&mut self) -> Result<Reserved, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Reserved) {
            return Err(self.unexpected("reserved"));
        }
        let start = self.lex.pos.clone();

        match self.parse_ranges() {
            Ok(ranges) => {
                let end = self.expect(TokenKind::Semicolon, ";")?;
                Ok(Reserved {
                    ranges,
                    field_names: Vec::new(),
                    comments: Vec::new(),
                    inline_comment: None,
                    meta: Meta::new(start, end),
                })
            }
            Err(ranges_err) => match self.parse_reserved_field_names() {
                Ok(field_names) => {
                    let end = self.expect(TokenKind::Semicolon, ";")?;
                    Ok(Reserved {
                        ranges: Vec::new(),
                        field_names,
                        comments: Vec::new(),
                        inline_comment: None,
                        meta: Meta::new(start, end),
                    })
                }
                Err(names_err) => Err(ParseError::alternatives(ranges_err, names_err)),
            },
        }
    }

    /// `ranges = range { "," range }`
    fn parse_ranges(&mut self) -> Result<Vec<Range>, ParseError> {
        let mut ranges = vec![self.parse_range()?];
        loop {
            self.lex.next()?;
            if self.lex.token != TokenKind::Comma {
                self.lex.un_next();
                break;
            }
            ranges.push(self.parse_range()?);
        }
        Ok(ranges)
    }

    /// `range = intLit [ "to" ( intLit | "max" ) ]`
    ///
    /// Enum reservations allow negative bounds; the sign is kept in the text.
    fn parse_range(&mut self) -> Result<Range, ParseError> {
        self.lex.next_lit()?;
        let begin = match self.lex.token {
            TokenKind::IntLit => self.lex.text.clone(),
            TokenKind::Minus => {
                self.lex.next_number_lit()?;
                if self.lex.token != TokenKind::IntLit {
                    return Err(self.unexpected("intLit"));
                }
                format!("-{}", self.lex.text)
            }
            _ => {
                let err = self.unexpected("intLit");
                self.lex.un_next();
                return Err(err);
            }
        };

        // `to` is not reserved; it scans as a plain identifier.
        self.lex.next()?;
        if self.lex.token != TokenKind::Ident || self.lex.text != "to" {
            self.lex.un_next();
            return Ok(Range { begin, end: None });
        }

        self.lex.next_lit()?;
        let end = match self.lex.token {
            TokenKind::IntLit => self.lex.text.clone(),
            TokenKind::Minus => {
                self.lex.next_number_lit()?;
                if self.lex.token != TokenKind::IntLit {
                    return Err(self.unexpected("intLit"));
                }
                format!("-{}", self.lex.text)
            }
            TokenKind::Ident if self.lex.text == "max" => self.lex.text.clone(),
            _ => return Err(self.unexpected("intLit or max")),
        };
        Ok(Range {
            begin,
            end: Some(end),
        })
    }

    /// `fieldNames = strLit { "," strLit }`
    fn parse_reserved_field_names(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.parse_reserved_field_name()?];
        loop {
            self.lex.next()?;
            if self.lex.token != TokenKind::Comma {
                self.lex.un_next();
                break;
            }
            names.push(self.parse_reserved_field_name()?);
        }
        Ok(names)
    }

    fn parse_reserved_field_name(&mut self) -> Result<String, ParseError> {
        self.lex.next_str_lit()?;
        if self.lex.token != TokenKind::StrLit {
            let err = self.unexpected("strLit");
            self.lex.un_next();
            return Err(err);
        }
        Ok(self.lex.text.clone())
    }

    /// `extensions = "extensions" ranges [ "[" declarations "]" ] ";"`
    ///
    /// The bracket list carries `declaration = {...}` entries and ordinary
    /// options such as `verification = UNVERIFIED`.
    fn parse_extensions(&mut self) -> Result<Extensions, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Extensions) {
            return Err(self.unexpected("extensions"));
        }
        let start = self.lex.pos.clone();

        let ranges = self.parse_ranges()?;

        let mut declarations = Vec::new();
        let mut options = Vec::new();
        if self.lex.peek()? == TokenKind::LBracket {
            self.lex.next()?;
            loop {
                if self.lex.peek_keyword()? == TokenKind::Keyword(Keyword::Declaration) {
                    declarations.push(self.parse_declaration()?);
                } else {
                    options.push(self.parse_field_option()?);
                }
                self.lex.next()?;
                match self.lex.token {
                    TokenKind::Comma => {}
                    TokenKind::RBracket => break,
                    _ => return Err(self.unexpected("] or ,")),
                }
            }
        }

        let end = self.expect(TokenKind::Semicolon, ";")?;
        Ok(Extensions {
            ranges,
            declarations,
            options,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `declaration "=" "{" ( "number" | "full_name" | "type" | "repeated" |
    /// "reserved" ) ":" value { "," ... } "}"`, keys in any order.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Declaration) {
            return Err(self.unexpected("declaration"));
        }
        let start = self.lex.pos.clone();

        self.expect(TokenKind::Eq, "=")?;
        self.expect(TokenKind::LBrace, "{")?;

        let mut declaration = Declaration {
            number: String::new(),
            full_name: String::new(),
            type_name: String::new(),
            repeated: false,
            reserved: false,
            meta: Meta::new(start.clone(), start),
        };

        if self.lex.peek()? == TokenKind::RBrace {
            self.lex.next()?;
            declaration.meta.end = self.lex.pos.clone();
            return Ok(declaration);
        }

        loop {
            self.lex.next_keyword()?;
            match self.lex.token {
                TokenKind::Keyword(Keyword::Number) => {
                    self.expect(TokenKind::Colon, ":")?;
                    self.lex.next_lit()?;
                    if self.lex.token != TokenKind::IntLit {
                        return Err(self.unexpected("intLit"));
                    }
                    declaration.number = self.lex.text.clone();
                }
                TokenKind::Keyword(Keyword::FullName) => {
                    self.expect(TokenKind::Colon, ":")?;
                    self.lex.next_str_lit()?;
                    if self.lex.token != TokenKind::StrLit {
                        return Err(self.unexpected("strLit"));
                    }
                    declaration.full_name = self.lex.text.clone();
                }
                TokenKind::Keyword(Keyword::Type) => {
                    self.expect(TokenKind::Colon, ":")?;
                    self.lex.next_str_lit()?;
                    if self.lex.token != TokenKind::StrLit {
                        return Err(self.unexpected("strLit"));
                    }
                    declaration.type_name = self.lex.text.clone();
                }
                TokenKind::Keyword(Keyword::Repeated) => {
                    self.expect(TokenKind::Colon, ":")?;
                    declaration.repeated = self.parse_bool_ident()?;
                }
                TokenKind::Keyword(Keyword::Reserved) => {
                    self.expect(TokenKind::Colon, ":")?;
                    declaration.reserved = self.parse_bool_ident()?;
                }
                _ => {
                    return Err(self.unexpected("number, full_name, type, repeated or reserved"));
                }
            }
            self.lex.next()?;
            match self.lex.token {
                TokenKind::Comma => {}
                TokenKind::RBrace => {
                    declaration.meta.end = self.lex.pos.clone();
                    return Ok(declaration);
                }
                _ => return Err(self.unexpected("} or ,")),
            }
        }
    }

    /// `true` or `false` written as a plain identifier.
    fn parse_bool_ident(&mut self) -> Result<bool, ParseError> {
        self.lex.next()?;
        if self.lex.token == TokenKind::Ident && (self.lex.text == "true" || self.lex.text == "false")
        {
            Ok(self.lex.text == "true")
        } else {
            Err(self.unexpected("true or false"))
        }
    }
}
