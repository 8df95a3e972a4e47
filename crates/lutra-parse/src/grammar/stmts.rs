use lutra_ast::{ExceptHandler, ExprStmt, PassStmt, RaiseStmt, Stmt, SuiteStmt, TryStmt};
use lutra_tokenizer::TokenKind::*;
use text_size::TextRange;

use super::exprs;
use crate::parser::Parser;

pub(crate) fn statement(p: &mut Parser<'_>) -> Stmt {
    match p.peek_kind() {
        TRY_KW => try_stmt(p),
        PASS_KW => pass_stmt(p),
        RAISE_KW => raise_stmt(p),
        _ => Stmt::Expr(ExprStmt::new(exprs::expr(p))),
    }
}

fn pass_stmt(p: &mut Parser<'_>) -> Stmt {
    let header = p.bump(PASS_KW);
    Stmt::Pass(PassStmt::new(header.range.start()))
}

fn raise_stmt(p: &mut Parser<'_>) -> Stmt {
    let header = p.bump(RAISE_KW);
    let value =
        if !p.starts_line() && exprs::at_expr_start(p) { Some(exprs::expr(p)) } else { None };
    Stmt::Raise(RaiseStmt::new(value, header.range.start()))
}

fn try_stmt(p: &mut Parser<'_>) -> Stmt {
    let column = p.column();
    let header = p.peek().range;
    p.bump(TRY_KW);
    let body = suite(p, column);

    let mut handlers = Vec::new();
    let mut catch_all: Option<TextRange> = None;
    while p.at(EXCEPT_KW) && p.column() == column {
        if let Some(range) = catch_all.take() {
            p.error_at("default 'except' clause must be last", range);
        }
        let handler_header = p.peek().range;
        let handler = except_handler(p, column);
        if handler.test().is_none() {
            catch_all = Some(handler_header);
        }
        handlers.push(handler);
    }

    let mut else_index = None;
    let mut else_body = None;
    if p.at(ELSE_KW) && p.column() == column {
        let token = p.bump(ELSE_KW);
        else_index = Some(token.range.start());
        else_body = Some(suite(p, column));
        if handlers.is_empty() {
            p.error_at("'else' clause requires at least one 'except' clause", token.range);
        }
    }

    let mut finally_index = None;
    let mut finally_body = None;
    if p.at(FINALLY_KW) && p.column() == column {
        let token = p.bump(FINALLY_KW);
        finally_index = Some(token.range.start());
        finally_body = Some(suite(p, column));
    }

    if handlers.is_empty() && finally_body.is_none() {
        p.error_at("expected at least one 'except' or 'finally' clause", header);
    }

    let mut builder = TryStmt::build(body, handlers, else_body, finally_body);
    builder.set_header_index(header.start());
    if let Some(index) = else_index {
        builder.set_else_index(index);
    }
    if let Some(index) = finally_index {
        builder.set_finally_index(index);
    }
    Stmt::Try(builder.finish())
}

fn except_handler(p: &mut Parser<'_>, column: u32) -> ExceptHandler {
    let header = p.bump(EXCEPT_KW).range.start();

    let mut test = None;
    let mut target = None;
    if !p.at(COLON) && !p.at(EOF) && !p.starts_line() {
        test = Some(exprs::expr(p));
        if p.at(AS_KW) || p.at(COMMA) {
            let separator = *p.peek();
            p.record_separator(header, separator.leading);
            if separator.kind == AS_KW {
                p.set_alt_form(header);
            } else {
                p.warning_at(
                    "use 'except x as y' instead of the legacy 'except x, y'",
                    separator.range,
                );
            }
            p.advance();
            target = Some(exprs::expr(p));
        }
    }

    let body = suite(p, column);
    let mut builder = ExceptHandler::build(test, target, body);
    builder.set_header_index(header);
    builder.finish()
}

/// Parses a `:`-introduced suite: either a single statement on the header's
/// line, or the following statements indented past `header_column`.
fn suite(p: &mut Parser<'_>, header_column: u32) -> Stmt {
    let colon_index = if p.at(COLON) { p.peek_start() } else { p.peek_leading().start() };
    p.expect(COLON, "expected ':'");

    let mut statements = Vec::new();
    if p.at(EOF) {
        p.error("expected an indented block");
    } else if !p.starts_line() {
        statements.push(statement(p));
    } else {
        let block_column = p.column();
        if block_column <= header_column {
            p.error("expected an indented block");
        } else {
            while !p.at(EOF) && p.column() > header_column {
                if p.column() != block_column {
                    p.error("inconsistent indentation");
                }
                statements.push(statement(p));
            }
        }
    }
    Stmt::Suite(SuiteStmt::new(statements, colon_index))
}
