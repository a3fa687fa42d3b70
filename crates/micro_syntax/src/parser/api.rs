/// Outcome of recognizing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    diagnostics: Vec<Diagnostic>,
}

impl Recognition {
    /// `true` when neither a lexical nor a syntax error was reported.
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Every diagnostic in the order it was reported. Scanner and recognizer diagnostics are interleaved.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

fn recognize_source<S: CharSource>(source: S, config: &SyntaxConfig) -> Result<Recognition, SourceError> {
    let mut reporter = Reporter::new();
    let scanner = Scanner::new(source, config);
    let success = Recognizer::new(scanner, &mut reporter, config)?.recognize()?;
    tracing::debug!(success, diagnostics = reporter.error_count(), "recognition finished");
    Ok(Recognition {
        diagnostics: reporter.into_diagnostics(),
    })
}

/// Recognize a source string with the default configuration.
///
/// This is the main public entrypoint for checking a program.
///
/// ## Errors
/// Never fails for an in-memory source; the `Result` mirrors [`recognize_reader`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn recognize(source: &str) -> Result<Recognition, SourceError> {
    recognize_source(StrSource::new(source), &SyntaxConfig::default())
}

/// Recognize a source string with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn recognize_with(source: &str, config: &SyntaxConfig) -> Result<Recognition, SourceError> {
    recognize_source(StrSource::new(source), config)
}

/// Recognize everything a buffered reader yields.
///
/// ## Errors
/// Returns [`SourceError`] when reading fails or the input is not valid UTF-8.
#[tracing::instrument(skip_all)]
pub fn recognize_reader<R: BufRead>(reader: R, config: &SyntaxConfig) -> Result<Recognition, SourceError> {
    recognize_source(ReaderSource::new(reader), config)
}
