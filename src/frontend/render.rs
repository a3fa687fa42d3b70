//! Diagnostic rendering for the terminal.
//!
//! Two styles are supported:
//! - **Plain**: the classic one-line messages (`Lexical error on line 3`), printed as errors happen.
//! - **Fancy**: miette's graphical report with the offending source line and a labelled span.

use clap::ValueEnum;
use miette::{NamedSource, Report};

use crate::diagnostics::Diagnostic;

/// How diagnostics are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiagnosticStyle {
    /// One-line messages printed while scanning/recognizing
    #[default]
    Plain,
    /// Source snippets with labelled spans, printed after the run
    Fancy,
}

/// Render a diagnostic in the plain style.
pub fn plain(diagnostic: &Diagnostic) -> String {
    diagnostic.to_string()
}

/// Render a diagnostic as a miette report against the named source text.
pub fn fancy(file_name: &str, source: &str, diagnostic: &Diagnostic) -> String {
    let report = Report::new(*diagnostic).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use micro_syntax::Span;

    #[test]
    fn test_plain_is_display() {
        let diag = Diagnostic::syntax(TokenKind::Eof, 4, Span::new(20, 20));
        insta::assert_snapshot!(plain(&diag), @r"
        syntax error on line 4
        Error was an unexpected SCANEOF token
        ");
    }

    #[test]
    fn test_fancy_mentions_file_and_code() {
        let source = "main {\n  x := 1 # 2;\n}\n";
        let diag = Diagnostic::lexical('#', 2, Span::new(16, 17));
        let rendered = fancy("demo.micro", source, &diag);
        assert!(rendered.contains("demo.micro"), "{rendered}");
        assert!(rendered.contains("micro::lexical"), "{rendered}");
        assert!(rendered.contains("unexpected character '#'"), "{rendered}");
    }
}
