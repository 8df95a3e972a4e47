//! Reconstruction-time formatting controls.

/// Options consumed by `append_source`.
///
/// The default value is the identity configuration: trivia is emitted
/// verbatim and reconstruction round-trips the original text byte for byte.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Re-wrap comment lines longer than this width at word boundaries.
    /// Continuation lines reuse the comment's own indentation and marker.
    pub wrap_comments: Option<u32>,
}

impl FormatOptions {
    /// Emits a leading trivia run, re-wrapping over-long comments when
    /// `wrap_comments` is set.
    pub fn reflow_comment(&self, out: &mut String, trivia: &str) {
        match self.wrap_comments {
            None => out.push_str(trivia),
            Some(width) => reflow(out, trivia, width as usize),
        }
    }
}

fn reflow(out: &mut String, trivia: &str, width: usize) {
    let mut rest = trivia;
    while let Some(hash) = rest.find('#') {
        let (whitespace, tail) = rest.split_at(hash);
        out.push_str(whitespace);

        let end = tail.find('\n').unwrap_or(tail.len());
        let (comment, after) = tail.split_at(end);
        // The comment's indentation is whatever follows the last newline
        // in the run before it; a trailing comment reuses the run itself.
        let indent = whitespace.rsplit('\n').next().unwrap_or("");
        wrap_comment(out, comment, indent, width);
        rest = after;
    }
    out.push_str(rest);
}

fn wrap_comment(out: &mut String, comment: &str, indent: &str, width: usize) {
    let content = comment.trim_start_matches('#');
    let marker = &comment[..comment.len() - content.len()];
    let content = content.trim();
    let line_len = indent.chars().count() + comment.chars().count();
    if line_len <= width || content.is_empty() {
        out.push_str(comment);
        return;
    }

    let limit = width
        .saturating_sub(indent.chars().count() + marker.chars().count() + 1)
        .max(1);
    let mut column = 0;
    for (i, word) in content.split_whitespace().enumerate() {
        let word_len = word.chars().count();
        if i == 0 {
            out.push_str(marker);
            out.push(' ');
            out.push_str(word);
            column = word_len;
        } else if column + 1 + word_len <= limit {
            out.push(' ');
            out.push_str(word);
            column += 1 + word_len;
        } else {
            out.push('\n');
            out.push_str(indent);
            out.push_str(marker);
            out.push(' ');
            out.push_str(word);
            column = word_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reflowed(options: &FormatOptions, trivia: &str) -> String {
        let mut out = String::new();
        options.reflow_comment(&mut out, trivia);
        out
    }

    #[test]
    fn identity_is_verbatim() {
        let options = FormatOptions::default();
        let trivia = "\n    # keep  me   exactly\n    ";
        assert_eq!(reflowed(&options, trivia), trivia);
    }

    #[test]
    fn short_comments_pass_through() {
        let options = FormatOptions { wrap_comments: Some(40) };
        let trivia = "\n# short\n";
        assert_eq!(reflowed(&options, trivia), trivia);
    }

    #[test]
    fn long_comments_wrap_with_indent() {
        let options = FormatOptions { wrap_comments: Some(24) };
        let trivia = "\n    # alpha beta gamma delta epsilon\n";
        assert_eq!(
            reflowed(&options, trivia),
            "\n    # alpha beta gamma\n    # delta epsilon\n"
        );
    }

    #[test]
    fn banners_are_untouched() {
        let options = FormatOptions { wrap_comments: Some(4) };
        let trivia = "############\n";
        assert_eq!(reflowed(&options, trivia), trivia);
    }

    #[test]
    fn whitespace_only_runs_are_untouched() {
        let options = FormatOptions { wrap_comments: Some(4) };
        let trivia = "\n        \n\t";
        assert_eq!(reflowed(&options, trivia), trivia);
    }
}
