use text_size::TextSize;

use crate::{FormatOptions, SourceMap, Stmt, Walker};

/// The root of a parsed file: its top-level statements plus the end-of-file
/// offset, whose leading trivia run is the file's trailing whitespace and
/// comments.
#[derive(Debug)]
pub struct Module {
    statements: Box<[Stmt]>,
    end_index: TextSize,
}

impl Module {
    pub fn new(statements: Vec<Stmt>, end_index: TextSize) -> Self {
        Self { statements: statements.into(), end_index }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn end_index(&self) -> TextSize {
        self.end_index
    }

    pub fn walk(&self, walker: &mut dyn Walker) {
        if walker.enter_module(self) {
            for statement in &self.statements {
                statement.walk(walker);
            }
        }
        walker.leave_module(self);
    }

    pub fn append_source(&self, out: &mut String, source: &SourceMap, format: &FormatOptions) {
        for statement in &self.statements {
            statement.append_source(out, source, format);
        }
        format.reflow_comment(out, source.trivia_before(self.end_index));
    }
}
