use text_size::TextSize;

use crate::{Expr, FormatOptions, SourceMap, TryStmt, Walker};

#[derive(Debug)]
pub enum Stmt {
    Expr(ExprStmt),
    Pass(PassStmt),
    Raise(RaiseStmt),
    Suite(SuiteStmt),
    Try(TryStmt),
}

impl Stmt {
    pub fn start(&self) -> TextSize {
        match self {
            Stmt::Expr(expr) => expr.start(),
            Stmt::Pass(pass) => pass.start(),
            Stmt::Raise(raise) => raise.start(),
            Stmt::Suite(suite) => suite.start(),
            Stmt::Try(try_stmt) => try_stmt.start(),
        }
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        match self {
            Stmt::Expr(expr) => expr.walk(walker),
            Stmt::Pass(pass) => pass.walk(walker),
            Stmt::Raise(raise) => raise.walk(walker),
            Stmt::Suite(suite) => suite.walk(walker),
            Stmt::Try(try_stmt) => try_stmt.walk(walker),
        }
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        match self {
            Stmt::Expr(expr) => expr.append_source(out, source, format),
            Stmt::Pass(pass) => pass.append_source(out, source, format),
            Stmt::Raise(raise) => raise.append_source(out, source, format),
            Stmt::Suite(suite) => suite.append_source(out, source, format),
            Stmt::Try(try_stmt) => try_stmt.append_source(out, source, format),
        }
    }
}

/// An expression evaluated for effect in statement position.
#[derive(Debug)]
pub struct ExprStmt {
    expr: Box<Expr>,
}

impl ExprStmt {
    pub fn new(expr: Expr) -> Self {
        Self { expr: Box::new(expr) }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn start(&self) -> TextSize {
        self.expr.start()
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_expr_stmt(self) {
            self.expr.walk(walker);
        }
        walker.leave_expr_stmt(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        self.expr.append_source(out, source, format);
    }
}

#[derive(Debug)]
pub struct PassStmt {
    start: TextSize,
}

impl PassStmt {
    pub fn new(start: TextSize) -> Self {
        Self { start }
    }

    pub fn start(&self) -> TextSize {
        self.start
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        walker.enter_pass(self);
        walker.leave_pass(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.start));
        out.push_str("pass");
    }
}

#[derive(Debug)]
pub struct RaiseStmt {
    value: Option<Box<Expr>>,
    header_index: TextSize,
}

impl RaiseStmt {
    pub fn new(value: Option<Expr>, header_index: TextSize) -> Self {
        Self { value: value.map(Box::new), header_index }
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_deref()
    }

    pub fn header_index(&self) -> TextSize {
        self.header_index
    }

    pub fn start(&self) -> TextSize {
        self.header_index
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_raise(self) {
            if let Some(value) = &self.value {
                value.walk(walker);
            }
        }
        walker.leave_raise(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.header_index));
        out.push_str("raise");
        if let Some(value) = &self.value {
            value.append_source(out, source, format);
        }
    }
}

/// A `:`-introduced statement block. The statements carry their own leading
/// trivia, so a suite reconstructs as the colon followed by each statement.
#[derive(Debug)]
pub struct SuiteStmt {
    statements: Box<[Stmt]>,
    colon_index: TextSize,
}

impl SuiteStmt {
    pub fn new(statements: Vec<Stmt>, colon_index: TextSize) -> Self {
        Self { statements: statements.into(), colon_index }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn colon_index(&self) -> TextSize {
        self.colon_index
    }

    pub fn start(&self) -> TextSize {
        self.colon_index
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_suite(self) {
            for statement in &self.statements {
                statement.walk(walker);
            }
        }
        walker.leave_suite(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        out.push_str(source.trivia_before(self.colon_index));
        out.push(':');
        for statement in &self.statements {
            statement.append_source(out, source, format);
        }
    }
}
