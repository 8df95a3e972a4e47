//! The `try`/`except`/`else`/`finally` statement and its handler clauses.
//!
//! Both nodes are built in two phases: construction takes the children, a
//! builder back-fills the keyword offsets, and `finish` freezes the node.
//! Neither node checks language legality; a catch-all handler in the middle
//! or an `else` without handlers is representable here and diagnosed by the
//! parser.

use drop_bomb::DropBomb;
use text_size::TextSize;

use crate::{Expr, FormatOptions, SourceMap, Stmt, Walker};

#[derive(Debug)]
pub struct TryStmt {
    body: Box<Stmt>,
    handlers: Box<[ExceptHandler]>,
    else_body: Option<Box<Stmt>>,
    finally_body: Option<Box<Stmt>>,
    header_index: TextSize,
    else_index: TextSize,
    finally_index: TextSize,
}

impl TryStmt {
    pub fn build(
        body: Stmt,
        handlers: Vec<ExceptHandler>,
        else_body: Option<Stmt>,
        finally_body: Option<Stmt>,
    ) -> TryStmtBuilder {
        TryStmtBuilder {
            node: Self {
                body: Box::new(body),
                handlers: handlers.into(),
                else_body: else_body.map(Box::new),
                finally_body: finally_body.map(Box::new),
                header_index: TextSize::new(0),
                else_index: TextSize::new(0),
                finally_index: TextSize::new(0),
            },
            header_index: None,
            else_index: None,
            finally_index: None,
            bomb: DropBomb::new("TryStmtBuilder must be finished"),
        }
    }

    pub fn body(&self) -> &Stmt {
        &self.body
    }

    /// The `except` clauses in source order.
    pub fn handlers(&self) -> &[ExceptHandler] {
        &self.handlers
    }

    pub fn else_body(&self) -> Option<&Stmt> {
        self.else_body.as_deref()
    }

    pub fn finally_body(&self) -> Option<&Stmt> {
        self.finally_body.as_deref()
    }

    pub fn header_index(&self) -> TextSize {
        self.header_index
    }

    /// Offset of the `else` keyword; meaningful only when `else_body` is
    /// present.
    pub fn else_index(&self) -> TextSize {
        self.else_index
    }

    /// Offset of the `finally` keyword; meaningful only when
    /// `finally_body` is present.
    pub fn finally_index(&self) -> TextSize {
        self.finally_index
    }

    pub fn start(&self) -> TextSize {
        self.header_index
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_try(self) {
            self.body.walk(walker);
            for handler in &self.handlers {
                handler.walk(walker);
            }
            if let Some(else_body) = &self.else_body {
                else_body.walk(walker);
            }
            if let Some(finally_body) = &self.finally_body {
                finally_body.walk(walker);
            }
        }
        walker.leave_try(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.header_index));
        out.push_str("try");
        self.body.append_source(out, source, format);

        for handler in &self.handlers {
            handler.append_source(out, source, format);
        }

        if let Some(else_body) = &self.else_body {
            format.reflow_comment(out, source.trivia_before(self.else_index));
            out.push_str("else");
            else_body.append_source(out, source, format);
        }

        if let Some(finally_body) = &self.finally_body {
            format.reflow_comment(out, source.trivia_before(self.finally_index));
            out.push_str("finally");
            finally_body.append_source(out, source, format);
        }
    }
}

/// Back-fills the keyword offsets of a freshly constructed [`TryStmt`].
#[derive(Debug)]
pub struct TryStmtBuilder {
    node: TryStmt,
    header_index: Option<TextSize>,
    else_index: Option<TextSize>,
    finally_index: Option<TextSize>,
    bomb: DropBomb,
}

impl TryStmtBuilder {
    pub fn set_header_index(&mut self, index: TextSize) {
        assert!(self.header_index.is_none(), "header index set twice");
        self.header_index = Some(index);
    }

    pub fn set_else_index(&mut self, index: TextSize) {
        assert!(self.else_index.is_none(), "else index set twice");
        self.else_index = Some(index);
    }

    pub fn set_finally_index(&mut self, index: TextSize) {
        assert!(self.finally_index.is_none(), "finally index set twice");
        self.finally_index = Some(index);
    }

    pub fn finish(mut self) -> TryStmt {
        self.bomb.defuse();
        let mut node = self.node;
        node.header_index = self.header_index.expect("header index was not set");
        assert_eq!(
            self.else_index.is_some(),
            node.else_body.is_some(),
            "else index must be set exactly when an else body is present",
        );
        assert_eq!(
            self.finally_index.is_some(),
            node.finally_body.is_some(),
            "finally index must be set exactly when a finally body is present",
        );
        node.else_index = self.else_index.unwrap_or_else(|| TextSize::new(0));
        node.finally_index = self.finally_index.unwrap_or_else(|| TextSize::new(0));
        node
    }
}

/// One `except` clause. A missing `test` is a catch-all; `target` binds the
/// caught value and is emitted only when `test` is present.
#[derive(Debug)]
pub struct ExceptHandler {
    test: Option<Box<Expr>>,
    target: Option<Box<Expr>>,
    body: Box<Stmt>,
    header_index: TextSize,
}

impl ExceptHandler {
    pub fn build(test: Option<Expr>, target: Option<Expr>, body: Stmt) -> ExceptHandlerBuilder {
        ExceptHandlerBuilder {
            node: Self {
                test: test.map(Box::new),
                target: target.map(Box::new),
                body: Box::new(body),
                header_index: TextSize::new(0),
            },
            header_index: None,
            bomb: DropBomb::new("ExceptHandlerBuilder must be finished"),
        }
    }

    pub fn test(&self) -> Option<&Expr> {
        self.test.as_deref()
    }

    pub fn target(&self) -> Option<&Expr> {
        self.target.as_deref()
    }

    pub fn body(&self) -> &Stmt {
        &self.body
    }

    pub fn header_index(&self) -> TextSize {
        self.header_index
    }

    pub fn start(&self) -> TextSize {
        self.header_index
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_handler(self) {
            if let Some(test) = &self.test {
                test.walk(walker);
            }
            if let Some(target) = &self.target {
                target.walk(walker);
            }
            self.body.walk(walker);
        }
        walker.leave_handler(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        format.reflow_comment(out, source.trivia_before(self.header_index));
        out.push_str("except");
        if let Some(test) = &self.test {
            test.append_source(out, source, format);
            if let Some(target) = &self.target {
                out.push_str(source.separator_whitespace(self.header_index));
                out.push_str(if source.is_alt_form(self.header_index) { "as" } else { "," });
                target.append_source(out, source, format);
            }
        }
        self.body.append_source(out, source, format);
    }
}

/// Back-fills the header offset of a freshly constructed [`ExceptHandler`].
#[derive(Debug)]
pub struct ExceptHandlerBuilder {
    node: ExceptHandler,
    header_index: Option<TextSize>,
    bomb: DropBomb,
}

impl ExceptHandlerBuilder {
    pub fn set_header_index(&mut self, index: TextSize) {
        assert!(self.header_index.is_none(), "header index set twice");
        self.header_index = Some(index);
    }

    pub fn finish(mut self) -> ExceptHandler {
        self.bomb.defuse();
        let mut node = self.node;
        node.header_index = self.header_index.expect("header index was not set");
        node
    }
}
