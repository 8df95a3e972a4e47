//! Lossless AST for exception-handling compound statements.
//!
//! Nodes own their children and carry buffer offsets; the whitespace and
//! comments between tokens stay in a [`SourceMap`] keyed by those offsets.
//! Every node supports pre/post traversal through [`Walker`] and byte-exact
//! source reconstruction through its `append_source` method.

mod expr;
mod format;
mod module;
mod source;
mod stmt;
mod try_stmt;
mod walk;

pub use expr::{CallExpr, ErrorExpr, Expr, LiteralExpr, NameExpr, TupleExpr};
pub use format::FormatOptions;
pub use module::Module;
pub use source::{SourceMap, SourceMapBuilder};
pub use stmt::{ExprStmt, PassStmt, RaiseStmt, Stmt, SuiteStmt};
pub use try_stmt::{ExceptHandler, ExceptHandlerBuilder, TryStmt, TryStmtBuilder};
pub use walk::Walker;
