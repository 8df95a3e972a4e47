use lutra_ast::{CallExpr, ErrorExpr, Expr, LiteralExpr, NameExpr, TupleExpr};
use lutra_tokenizer::TokenKind::*;
use text_size::TextSize;

use crate::parser::Parser;

pub(crate) fn at_expr_start(p: &Parser<'_>) -> bool {
    matches!(p.peek_kind(), NAME | INT_NUMBER | FLOAT_NUMBER | STRING | LEFT_PAREN)
}

pub(crate) fn expr(p: &mut Parser<'_>) -> Expr {
    let mut expr = atom(p);
    // A paren on a fresh line opens a new statement, not a call.
    while p.at(LEFT_PAREN) && !p.starts_line() {
        expr = call(p, expr);
    }
    expr
}

fn atom(p: &mut Parser<'_>) -> Expr {
    match p.peek_kind() {
        NAME => {
            let text = p.peek_text();
            let token = p.advance();
            Expr::Name(NameExpr::new(text, token.range.start()))
        }
        INT_NUMBER | FLOAT_NUMBER | STRING => {
            let text = p.peek_text();
            let token = p.advance();
            Expr::Literal(LiteralExpr::new(text, token.range.start()))
        }
        LEFT_PAREN => tuple(p),
        _ => {
            p.error("expected an expression");
            let text = p.peek_text();
            let token = p.advance();
            Expr::Error(ErrorExpr::new(text, token.range.start()))
        }
    }
}

fn tuple(p: &mut Parser<'_>) -> Expr {
    let open = p.bump(LEFT_PAREN);
    let (items, commas, close_index) = paren_list(p);
    Expr::Tuple(TupleExpr::new(items, commas, open.range.start(), close_index))
}

fn call(p: &mut Parser<'_>, func: Expr) -> Expr {
    let open = p.bump(LEFT_PAREN);
    let (args, commas, close_index) = paren_list(p);
    Expr::Call(CallExpr::new(func, args, commas, open.range.start(), close_index))
}

/// Parses `expr (',' expr)* ','? ')'` after an already consumed `(`.
fn paren_list(p: &mut Parser<'_>) -> (Vec<Expr>, Vec<TextSize>, TextSize) {
    let mut items = Vec::new();
    let mut commas = Vec::new();
    while !p.at(RIGHT_PAREN) && !p.at(EOF) {
        items.push(expr(p));
        if p.at(COMMA) {
            commas.push(p.peek_start());
            p.advance();
        } else {
            break;
        }
    }
    let close_index =
        if p.at(RIGHT_PAREN) { p.peek_start() } else { p.peek_leading().start() };
    p.expect(RIGHT_PAREN, "expected ')'");
    (items, commas, close_index)
}
