/// Parser state, options, and entrypoints.
///
/// This chunk defines [`ParseOptions`], the [`Parser`] type, and the public
/// `parse`/`parse_reader` functions. The grammar productions live in the
/// other parser chunks.

/// Options controlling a single parse call.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Emit a per-token trace to stderr and record the Rust source site on
    /// parse errors.
    pub debug: bool,
    /// Accept the vendor-extension bundle: aggregate `{...}` and list `[...]`
    /// constants, `(.fullIdent)` option names, multi-line string constants,
    /// fuzzy aggregate separators, and a trailing `;` after block bodies.
    ///
    /// The aggregate serialization folds `,`/`;`/newline separators, so
    /// option constants do not round-trip bit-exactly under this mode.
    pub permissive: bool,
    /// Filename recorded on every position; empty renders as `<input>`.
    pub filename: String,
    /// Keep dangling comments as body items instead of discarding them.
    pub body_including_comments: bool,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and halts on the first failure; the only local
///   recovery is between documented grammar alternatives (field vs group,
///   ranges vs field names, field vs empty statement).
pub struct Parser {
    lex: Lexer,
    filename: String,
    permissive: bool,
    body_including_comments: bool,
}

impl Parser {
    pub fn new(source: &str, options: &ParseOptions) -> Self {
        Self {
            lex: Lexer::new(source, &options.filename, options.debug),
            filename: options.filename.clone(),
            permissive: options.permissive,
            body_including_comments: options.body_including_comments,
        }
    }

    /// Parse the entire input into a [`Proto`].
    pub fn parse(mut self) -> Result<Proto, ParseError> {
        self.parse_proto()
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    /// Return `true` if the next token is EOF, consuming nothing.
    fn is_eof(&mut self) -> Result<bool, ParseError> {
        self.lex.next()?;
        let eof = self.lex.token == TokenKind::Eof;
        self.lex.un_next();
        Ok(eof)
    }

    /// Consume the next token and require it to be `kind`, returning its
    /// position.
    #[track_caller]
    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Position, ParseError> {
        self.lex.next()?;
        if self.lex.token == kind {
            Ok(self.lex.pos.clone())
        } else {
            Err(self.lex.unexpected(expected))
        }
    }

    /// Build an unexpected-token error for the current token.
    #[track_caller]
    fn unexpected(&self, expected: &str) -> ParseError {
        self.lex.unexpected(expected)
    }
}

/// Parse schema source text into a [`Proto`].
///
/// This is the main public entrypoint.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered; there is no multi-error
/// recovery.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str, options: &ParseOptions) -> Result<Proto, ParseError> {
    Parser::new(source, options).parse()
}

/// Read a byte source to the end, then parse it.
///
/// The whole input is consumed before any node is built; there is no
/// streaming contract.
pub fn parse_reader<R: std::io::Read>(
    mut reader: R,
    options: &ParseOptions,
) -> Result<Proto, ParseError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse(&source, options)
}
