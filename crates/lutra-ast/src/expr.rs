use text_size::TextSize;

use crate::{FormatOptions, SourceMap, Walker};

#[derive(Debug)]
pub enum Expr {
    Name(NameExpr),
    Literal(LiteralExpr),
    Tuple(TupleExpr),
    Call(CallExpr),
    Error(ErrorExpr),
}

impl Expr {
    pub fn start(&self) -> TextSize {
        match self {
            Expr::Name(name) => name.start(),
            Expr::Literal(literal) => literal.start(),
            Expr::Tuple(tuple) => tuple.start(),
            Expr::Call(call) => call.start(),
            Expr::Error(error) => error.start(),
        }
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        match self {
            Expr::Name(name) => name.walk(walker),
            Expr::Literal(literal) => literal.walk(walker),
            Expr::Tuple(tuple) => tuple.walk(walker),
            Expr::Call(call) => call.walk(walker),
            Expr::Error(error) => error.walk(walker),
        }
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        match self {
            Expr::Name(name) => name.append_source(out, source, format),
            Expr::Literal(literal) => literal.append_source(out, source, format),
            Expr::Tuple(tuple) => tuple.append_source(out, source, format),
            Expr::Call(call) => call.append_source(out, source, format),
            Expr::Error(error) => error.append_source(out, source, format),
        }
    }
}

/// An identifier reference, carrying its verbatim token text.
#[derive(Debug)]
pub struct NameExpr {
    name: Box<str>,
    start: TextSize,
}

impl NameExpr {
    pub fn new(name: impl Into<Box<str>>, start: TextSize) -> Self {
        Self { name: name.into(), start }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> TextSize {
        self.start
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        walker.enter_name(self);
        walker.leave_name(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.start));
        out.push_str(&self.name);
    }
}

/// A number or string literal, kept as its verbatim token text so spellings
/// like `0x1f` and `1_000` survive reconstruction.
#[derive(Debug)]
pub struct LiteralExpr {
    text: Box<str>,
    start: TextSize,
}

impl LiteralExpr {
    pub fn new(text: impl Into<Box<str>>, start: TextSize) -> Self {
        Self { text: text.into(), start }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> TextSize {
        self.start
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        walker.enter_literal(self);
        walker.leave_literal(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.start));
        out.push_str(&self.text);
    }
}

/// A parenthesized expression list. A single item without a trailing comma
/// is plain grouping; the distinction does not matter for traversal or
/// reconstruction.
#[derive(Debug)]
pub struct TupleExpr {
    items: Box<[Expr]>,
    comma_indices: Box<[TextSize]>,
    open_index: TextSize,
    close_index: TextSize,
}

impl TupleExpr {
    pub fn new(
        items: Vec<Expr>,
        comma_indices: Vec<TextSize>,
        open_index: TextSize,
        close_index: TextSize,
    ) -> Self {
        Self {
            items: items.into(),
            comma_indices: comma_indices.into(),
            open_index,
            close_index,
        }
    }

    pub fn items(&self) -> &[Expr] {
        &self.items
    }

    pub fn start(&self) -> TextSize {
        self.open_index
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_tuple(self) {
            for item in &self.items {
                item.walk(walker);
            }
        }
        walker.leave_tuple(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.open_index));
        out.push('(');
        for (i, item) in self.items.iter().enumerate() {
            item.append_source(out, source, format);
            if let Some(&comma) = self.comma_indices.get(i) {
                out.push_str(source.trivia_before(comma));
                out.push(',');
            }
        }
        out.push_str(source.trivia_before(self.close_index));
        out.push(')');
    }
}

/// A call with its argument list and the offsets of the surrounding
/// punctuation, so interior spacing replays exactly.
#[derive(Debug)]
pub struct CallExpr {
    func: Box<Expr>,
    args: Box<[Expr]>,
    comma_indices: Box<[TextSize]>,
    open_index: TextSize,
    close_index: TextSize,
}

impl CallExpr {
    pub fn new(
        func: Expr,
        args: Vec<Expr>,
        comma_indices: Vec<TextSize>,
        open_index: TextSize,
        close_index: TextSize,
    ) -> Self {
        Self {
            func: Box::new(func),
            args: args.into(),
            comma_indices: comma_indices.into(),
            open_index,
            close_index,
        }
    }

    pub fn func(&self) -> &Expr {
        &self.func
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    pub fn start(&self) -> TextSize {
        self.func.start()
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_call(self) {
            self.func.walk(walker);
            for arg in &self.args {
                arg.walk(walker);
            }
        }
        walker.leave_call(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        self.func.append_source(out, source, format);
        out.push_str(source.trivia_before(self.open_index));
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            arg.append_source(out, source, format);
            if let Some(&comma) = self.comma_indices.get(i) {
                out.push_str(source.trivia_before(comma));
                out.push(',');
            }
        }
        out.push_str(source.trivia_before(self.close_index));
        out.push(')');
    }
}

/// A token the grammar could not place, preserved verbatim so error
/// recovery never loses source text.
#[derive(Debug)]
pub struct ErrorExpr {
    text: Box<str>,
    start: TextSize,
}

impl ErrorExpr {
    pub fn new(text: impl Into<Box<str>>, start: TextSize) -> Self {
        Self { text: text.into(), start }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> TextSize {
        self.start
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        walker.enter_error(self);
        walker.leave_error(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.start));
        out.push_str(&self.text);
    }
}
