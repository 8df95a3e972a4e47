//! Recursive-descent front-end producing lossless trees.
//!
//! The parser is tolerant: it always produces a tree, collecting
//! diagnostics on the side, and the tree reconstructs the input exactly for
//! well-formed source.

use lutra_ast::{FormatOptions, Module, SourceMap};
use lutra_errors::Diagnostic;

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

/// A parsed file: the tree, the trivia store it reconstructs from, and the
/// diagnostics collected along the way.
pub struct Parsed {
    module: Module,
    source: SourceMap,
    diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn source(&self) -> &SourceMap {
        &self.source
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn reconstruct(&self, format: &FormatOptions) -> String {
        let mut out = String::with_capacity(self.source.text().len());
        self.module.append_source(&mut out, &self.source, format);
        out
    }
}

pub fn module(text: &str) -> Parsed {
    let mut parser = parser::Parser::new(text);
    let module = grammar::module(&mut parser);
    let (source, diagnostics) = parser.finish();
    Parsed { module, source, diagnostics }
}
