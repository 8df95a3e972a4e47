//! The position and trivia store backing source reconstruction.

use rustc_hash::{FxHashMap, FxHashSet};
use text_size::{TextRange, TextSize};

/// Owns the original source text plus the trivia runs and handler-binding
/// attributes the parser recorded, keyed by buffer offset.
///
/// Nodes store offsets only; all whitespace materialization happens here at
/// reconstruction time. The map is immutable once built and may be shared
/// across threads for concurrent reconstruction passes.
#[derive(Debug)]
pub struct SourceMap {
    text: Box<str>,
    leading: FxHashMap<TextSize, TextRange>,
    separators: FxHashMap<TextSize, TextRange>,
    alt_form: FxHashSet<TextSize>,
}

impl SourceMap {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The whitespace/comment run immediately preceding the token that
    /// starts at `offset`. Empty for offsets with no recorded run.
    pub fn trivia_before(&self, offset: TextSize) -> &str {
        self.leading.get(&offset).map_or("", |range| &self.text[*range])
    }

    /// The whitespace before the `as`/`,` separator of the handler whose
    /// `except` keyword starts at `header`.
    pub fn separator_whitespace(&self, header: TextSize) -> &str {
        self.separators.get(&header).map_or("", |range| &self.text[*range])
    }

    /// Whether the handler at `header` spelled its binding with `as`
    /// rather than the legacy comma.
    pub fn is_alt_form(&self, header: TextSize) -> bool {
        self.alt_form.contains(&header)
    }
}

/// Accumulates trivia records during parsing; `finish` freezes the map.
#[derive(Debug)]
pub struct SourceMapBuilder {
    text: Box<str>,
    leading: FxHashMap<TextSize, TextRange>,
    separators: FxHashMap<TextSize, TextRange>,
    alt_form: FxHashSet<TextSize>,
}

impl SourceMapBuilder {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            leading: FxHashMap::default(),
            separators: FxHashMap::default(),
            alt_form: FxHashSet::default(),
        }
    }

    /// Records the trivia run preceding the token at `token_start`.
    /// Empty runs are not stored.
    pub fn record_leading(&mut self, token_start: TextSize, trivia: TextRange) {
        if !trivia.is_empty() {
            self.leading.insert(token_start, trivia);
        }
    }

    pub fn record_separator(&mut self, header: TextSize, whitespace: TextRange) {
        if !whitespace.is_empty() {
            self.separators.insert(header, whitespace);
        }
    }

    pub fn set_alt_form(&mut self, header: TextSize) {
        self.alt_form.insert(header);
    }

    pub fn finish(self) -> SourceMap {
        let Self { text, leading, separators, alt_form } = self;
        SourceMap { text, leading, separators, alt_form }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_lookup() {
        let text = "  # note\nf";
        let mut builder = SourceMapBuilder::new(text);
        builder.record_leading(TextSize::new(9), TextRange::new(0.into(), 9.into()));
        let map = builder.finish();

        assert_eq!(map.trivia_before(TextSize::new(9)), "  # note\n");
        assert_eq!(map.trivia_before(TextSize::new(0)), "");
        assert_eq!(map.text(), text);
    }

    #[test]
    fn empty_runs_are_not_recorded() {
        let mut builder = SourceMapBuilder::new("pass");
        builder.record_leading(TextSize::new(0), TextRange::empty(TextSize::new(0)));
        let map = builder.finish();

        assert_eq!(map.trivia_before(TextSize::new(0)), "");
    }

    #[test]
    fn handler_attributes() {
        let text = "except E as e: pass";
        let mut builder = SourceMapBuilder::new(text);
        builder.record_separator(TextSize::new(0), TextRange::new(8.into(), 9.into()));
        builder.set_alt_form(TextSize::new(0));
        let map = builder.finish();

        assert_eq!(map.separator_whitespace(TextSize::new(0)), " ");
        assert!(map.is_alt_form(TextSize::new(0)));
        assert!(!map.is_alt_form(TextSize::new(1)));
    }
}
