use lutra_ast::Module;
use lutra_tokenizer::TokenKind::EOF;

use crate::parser::Parser;

mod exprs;
mod stmts;

pub(crate) fn module(p: &mut Parser<'_>) -> Module {
    let mut statements = Vec::new();
    while !p.at(EOF) {
        if p.column() != 0 {
            p.error("unexpected indent");
        }
        statements.push(stmts::statement(p));
    }
    Module::new(statements, p.peek_start())
}
