/// Field productions: normal fields, map fields, oneof fields, and types.

/// The builtin scalar type names.
const BUILTIN_TYPES: [&str; 15] = [
    "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32",
    "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
];

/// Type names allowed as map keys: the integral and string scalars.
const MAP_KEY_TYPES: [&str; 12] = [
    "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32", "fixed64", "sfixed32",
    "sfixed64", "bool", "string",
];

fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

fn is_map_key_type(name: &str) -> bool {
    MAP_KEY_TYPES.contains(&name)
}

/// Map a label keyword to its field label, if it is one.
fn field_label_of(token: TokenKind) -> Option<FieldLabel> {
    match token {
        TokenKind::Keyword(Keyword::Repeated) => Some(FieldLabel::Repeated),
        TokenKind::Keyword(Keyword::Required) => Some(FieldLabel::Required),
        TokenKind::Keyword(Keyword::Optional) => Some(FieldLabel::Optional),
        _ => None,
    }
}

impl Parser {
    /// `field = [label] type fieldName "=" fieldNumber [ "[" fieldOptions "]" ] ";"`
    fn parse_field(&mut self) -> Result<Field, ParseError> {
        let mut label = FieldLabel::None;
        let mut start = None;

        self.lex.next_keyword()?;
        if let Some(l) = field_label_of(self.lex.token) {
            label = l;
            start = Some(self.lex.pos.clone());
        } else {
            self.lex.un_next();
        }

        let (type_name, type_pos) = self.parse_type()?;
        let start = start.unwrap_or(type_pos);

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("fieldName"));
        }
        let name = self.lex.text.clone();

        self.expect(TokenKind::Eq, "=")?;
        let number = self.parse_field_number()?;
        let options = self.parse_field_options()?;
        let end = self.expect(TokenKind::Semicolon, ";")?;

        Ok(Field {
            label,
            type_name,
            name,
            number,
            options,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// A builtin scalar name, or a message/enum type reference.
    fn parse_type(&mut self) -> Result<(String, Position), ParseError> {
        self.lex.next()?;
        if self.lex.token == TokenKind::Ident && is_builtin_type(&self.lex.text) {
            return Ok((self.lex.text.clone(), self.lex.pos.clone()));
        }
        self.lex.un_next();
        self.lex.read_message_type()
    }

    fn parse_field_number(&mut self) -> Result<String, ParseError> {
        self.lex.next_lit()?;
        if self.lex.token != TokenKind::IntLit {
            return Err(self.unexpected("intLit"));
        }
        Ok(self.lex.text.clone())
    }

    /// `[ fieldOption { "," fieldOption } ]`, or nothing.
    fn parse_field_options(&mut self) -> Result<Vec<FieldOption>, ParseError> {
        if self.lex.peek()? != TokenKind::LBracket {
            return Ok(Vec::new());
        }
        self.lex.next()?;

        let mut options = vec![self.parse_field_option()?];
        loop {
            self.lex.next()?;
            match self.lex.token {
                TokenKind::Comma => options.push(self.parse_field_option()?),
                TokenKind::RBracket => break,
                _ => return Err(self.unexpected("] or ,")),
            }
        }
        Ok(options)
    }

    /// `fieldOption = optionName "=" constant`
    fn parse_field_option(&mut self) -> Result<FieldOption, ParseError> {
        let name = self.parse_option_name()?;
        self.expect(TokenKind::Eq, "=")?;
        let (constant, _) = self.parse_option_constant()?;
        Ok(FieldOption { name, constant })
    }

    /// `mapField = "map" "<" keyType "," type ">" mapName "=" fieldNumber
    /// [ "[" fieldOptions "]" ] ";"`
    fn parse_map_field(&mut self) -> Result<MapField, ParseError> {
        self.lex.next_keyword()?;
        if !self.lex.token.is_keyword(Keyword::Map) {
            return Err(self.unexpected("map"));
        }
        let start = self.lex.pos.clone();

        self.expect(TokenKind::Lt, "<")?;

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident || !is_map_key_type(&self.lex.text) {
            return Err(self.unexpected("mapKeyType"));
        }
        let key_type = self.lex.text.clone();

        self.expect(TokenKind::Comma, ",")?;
        let (value_type, _) = self.parse_type()?;
        self.expect(TokenKind::Gt, ">")?;

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("mapName"));
        }
        let name = self.lex.text.clone();

        self.expect(TokenKind::Eq, "=")?;
        let number = self.parse_field_number()?;
        let options = self.parse_field_options()?;
        let end = self.expect(TokenKind::Semicolon, ";")?;

        Ok(MapField {
            key_type,
            value_type,
            name,
            number,
            options,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }

    /// `oneofField = type fieldName "=" fieldNumber [ "[" fieldOptions "]" ] ";"`
    fn parse_oneof_field(&mut self) -> Result<OneofField, ParseError> {
        let (type_name, start) = self.parse_type()?;

        self.lex.next()?;
        if self.lex.token != TokenKind::Ident {
            return Err(self.unexpected("fieldName"));
        }
        let name = self.lex.text.clone();

        self.expect(TokenKind::Eq, "=")?;
        let number = self.parse_field_number()?;
        let options = self.parse_field_options()?;
        let end = self.expect(TokenKind::Semicolon, ";")?;

        Ok(OneofField {
            type_name,
            name,
            number,
            options,
            comments: Vec::new(),
            inline_comment: None,
            meta: Meta::new(start, end),
        })
    }
}
