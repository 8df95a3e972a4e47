use lutra_ast::{SourceMap, SourceMapBuilder};
use lutra_errors::Diagnostic;
use lutra_tokenizer::{Token, TokenKind, Tokenizer};
use text_size::{TextRange, TextSize};

pub(crate) struct Parser<'a> {
    text: &'a str,
    tokenizer: Tokenizer<'a>,
    map: SourceMapBuilder,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            tokenizer: Tokenizer::new(text),
            map: SourceMapBuilder::new(text),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        self.tokenizer.peek()
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn peek_start(&self) -> TextSize {
        self.peek().range.start()
    }

    pub(crate) fn peek_leading(&self) -> TextRange {
        self.peek().leading
    }

    pub(crate) fn peek_text(&self) -> &'a str {
        let text = self.text;
        &text[self.peek().range]
    }

    /// Whether the next token is the first on its line.
    pub(crate) fn starts_line(&self) -> bool {
        self.text[self.peek().leading].contains('\n')
    }

    /// Byte column of the next token within its line.
    pub(crate) fn column(&self) -> u32 {
        let offset = usize::from(self.peek_start());
        let line_start = self.text[..offset].rfind('\n').map_or(0, |i| i + 1);
        (offset - line_start) as u32
    }

    /// Consumes the next token, recording its leading trivia run. At EOF
    /// this consumes nothing, so the trailing run stays available.
    pub(crate) fn advance(&mut self) -> Token {
        if self.at(TokenKind::EOF) {
            return *self.peek();
        }
        let token = self.tokenizer.next_token();
        self.map.record_leading(token.range.start(), token.leading);
        token
    }

    pub(crate) fn bump(&mut self, kind: TokenKind) -> Token {
        debug_assert!(self.at(kind));
        self.advance()
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) {
        if self.at(kind) {
            self.advance();
        } else {
            self.error(message);
        }
    }

    pub(crate) fn error(&mut self, message: &str) {
        let range = self.peek().range;
        self.error_at(message, range);
    }

    pub(crate) fn error_at(&mut self, message: &str, range: TextRange) {
        self.diagnostics.push(Diagnostic::error(message, range));
    }

    pub(crate) fn warning_at(&mut self, message: &str, range: TextRange) {
        self.diagnostics.push(Diagnostic::warning(message, range));
    }

    pub(crate) fn record_separator(&mut self, header: TextSize, whitespace: TextRange) {
        self.map.record_separator(header, whitespace);
    }

    pub(crate) fn set_alt_form(&mut self, header: TextSize) {
        self.map.set_alt_form(header);
    }

    pub(crate) fn finish(mut self) -> (SourceMap, Vec<Diagnostic>) {
        let eof = *self.tokenizer.peek();
        debug_assert_eq!(eof.kind, TokenKind::EOF);
        self.map.record_leading(eof.range.start(), eof.leading);
        (self.map.finish(), self.diagnostics)
    }
}
