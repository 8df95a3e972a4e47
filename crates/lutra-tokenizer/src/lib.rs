//! Tokenizer for the Python subset, attaching trivia to tokens.
//!
//! Whitespace (including newlines) and `#`-comments are never tokens; each
//! token instead carries the range of the whole trivia run since the
//! previous token. The EOF token's run is the file's trailing trivia. Block
//! structure is not decided here; the parser derives it from token columns.

use text_size::{TextRange, TextSize};

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    COLON,
    COMMA,

    TRY_KW,
    EXCEPT_KW,
    ELSE_KW,
    FINALLY_KW,
    AS_KW,
    PASS_KW,
    RAISE_KW,
    NAME,

    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,

    UNKNOWN,
    EOF,
}

#[derive(Clone, Copy, Debug)]
pub struct Token {
    /// The whitespace/comment run between the previous token and this one.
    pub leading: TextRange,
    pub kind: TokenKind,
    pub range: TextRange,
}

impl Token {
    const EOF: Self = Self {
        leading: TextRange::empty(TextSize::new(0)),
        kind: TokenKind::EOF,
        range: TextRange::empty(TextSize::new(0)),
    };
}

pub struct Tokenizer<'a> {
    text: &'a str,
    pos: TextSize,
    current: Token,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut tokenizer = Self { text, pos: TextSize::new(0), current: Token::EOF };
        tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn rest(&self) -> &'a str {
        &self.text[usize::from(self.pos)..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += TextSize::of(c);
        Some(c)
    }

    fn eat_while(&mut self, keep: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&keep) {
            self.bump_char();
        }
    }

    /// Returns the current token and advances past it.
    pub fn next_token(&mut self) -> Token {
        let leading_start = self.pos;
        self.trivia();
        let leading = TextRange::new(leading_start, self.pos);
        let start = self.pos;
        let kind = self.scan(start);
        let range = TextRange::new(start, self.pos);
        std::mem::replace(&mut self.current, Token { leading, kind, range })
    }

    fn trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some('#') => self.eat_while(|c| c != '\n'),
                Some(c) if c.is_whitespace() => self.eat_while(char::is_whitespace),
                _ => break,
            }
        }
    }

    fn scan(&mut self, start: TextSize) -> TokenKind {
        use TokenKind::*;

        let Some(first) = self.bump_char() else {
            return EOF;
        };
        match first {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            ':' => COLON,
            ',' => COMMA,
            quote @ ('\'' | '"') => self.string(quote),
            '0'..='9' => self.number(),
            'A'..='Z' | 'a'..='z' | '_' => {
                self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');

                match &self.text[TextRange::new(start, self.pos)] {
                    "try" => TRY_KW,
                    "except" => EXCEPT_KW,
                    "else" => ELSE_KW,
                    "finally" => FINALLY_KW,
                    "as" => AS_KW,
                    "pass" => PASS_KW,
                    "raise" => RAISE_KW,
                    _ => NAME,
                }
            }
            _ => UNKNOWN,
        }
    }

    fn string(&mut self, quote: char) -> TokenKind {
        loop {
            match self.peek_char() {
                None | Some('\n') => break,
                Some('\\') => {
                    self.bump_char();
                    self.bump_char();
                }
                Some(c) => {
                    self.bump_char();
                    if c == quote {
                        break;
                    }
                }
            }
        }

        TokenKind::STRING
    }

    /// Decimal digits with an optional fraction part; the expression subset
    /// carries no richer numeric spellings.
    fn number(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_ascii_digit());
        if self.peek_char() == Some('.') {
            self.bump_char();
            self.eat_while(|c| c.is_ascii_digit());
            return TokenKind::FLOAT_NUMBER;
        }
        TokenKind::INT_NUMBER
    }
}
