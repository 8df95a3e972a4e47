//! Pre/post traversal over the closed set of node variants.

use crate::{
    CallExpr, ErrorExpr, ExceptHandler, ExprStmt, LiteralExpr, Module, NameExpr, PassStmt,
    RaiseStmt, SuiteStmt, TryStmt, TupleExpr,
};

/// One `enter`/`leave` hook pair per node variant.
///
/// `enter_*` returns whether to descend into the node's children; `leave_*`
/// fires unconditionally, even when the matching `enter_*` returned false,
/// so scoped bookkeeping always balances. Defaults descend everywhere and
/// do nothing on leave.
pub trait Walker {
    fn enter_module(&mut self, _node: &Module) -> bool {
        true
    }
    fn leave_module(&mut self, _node: &Module) {}

    fn enter_suite(&mut self, _node: &SuiteStmt) -> bool {
        true
    }
    fn leave_suite(&mut self, _node: &SuiteStmt) {}

    fn enter_expr_stmt(&mut self, _node: &ExprStmt) -> bool {
        true
    }
    fn leave_expr_stmt(&mut self, _node: &ExprStmt) {}

    fn enter_pass(&mut self, _node: &PassStmt) -> bool {
        true
    }
    fn leave_pass(&mut self, _node: &PassStmt) {}

    fn enter_raise(&mut self, _node: &RaiseStmt) -> bool {
        true
    }
    fn leave_raise(&mut self, _node: &RaiseStmt) {}

    fn enter_try(&mut self, _node: &TryStmt) -> bool {
        true
    }
    fn leave_try(&mut self, _node: &TryStmt) {}

    fn enter_handler(&mut self, _node: &ExceptHandler) -> bool {
        true
    }
    fn leave_handler(&mut self, _node: &ExceptHandler) {}

    fn enter_name(&mut self, _node: &NameExpr) -> bool {
        true
    }
    fn leave_name(&mut self, _node: &NameExpr) {}

    fn enter_literal(&mut self, _node: &LiteralExpr) -> bool {
        true
    }
    fn leave_literal(&mut self, _node: &LiteralExpr) {}

    fn enter_tuple(&mut self, _node: &TupleExpr) -> bool {
        true
    }
    fn leave_tuple(&mut self, _node: &TupleExpr) {}

    fn enter_call(&mut self, _node: &CallExpr) -> bool {
        true
    }
    fn leave_call(&mut self, _node: &CallExpr) {}

    fn enter_error(&mut self, _node: &ErrorExpr) -> bool {
        true
    }
    fn leave_error(&mut self, _node: &ErrorExpr) {}
}
