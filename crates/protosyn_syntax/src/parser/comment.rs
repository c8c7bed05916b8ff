/// Comment collection and attachment.
///
/// Comment handling is factored into three entry points instead of being
/// woven into every production:
/// - `parse_comments` collects leading comments before a statement;
/// - `maybe_scan_inline_comment` attaches a trailing comment when it starts
///   on the statement's end line;
/// - the block openers call `maybe_scan_inline_comment` once right after `{`
///   for the behind-left-brace slot.
impl Parser {
    /// Collect zero or more comments ahead of the next statement.
    fn parse_comments(&mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        while let Some(comment) = self.parse_comment() {
            comments.push(comment);
        }
        comments
    }

    /// Scan one comment, or push the non-comment token back and return
    /// `None`. Scan failures recover silently; the offending characters are
    /// restored and resurface at the next real read.
    fn parse_comment(&mut self) -> Option<Comment> {
        match self.lex.next_comment() {
            Ok(()) if self.lex.token == TokenKind::Comment => {
                let end = self.lex.pos.advanced_bulk(&self.lex.text);
                Some(Comment {
                    raw: self.lex.text.clone(),
                    start: self.lex.pos.clone(),
                    end,
                })
            }
            _ => {
                self.lex.un_next();
                None
            }
        }
    }

    /// Attach the next comment to `slot` iff it starts on `end_line`, the
    /// end line of the statement just parsed; otherwise push it back.
    fn maybe_scan_inline_comment(&mut self, slot: &mut Option<Comment>, end_line: usize) {
        if let Some(comment) = self.parse_comment() {
            if comment.start.line == end_line {
                *slot = Some(comment);
            } else {
                self.lex.un_next();
            }
        }
    }
}
