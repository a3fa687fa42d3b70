//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::SyntaxConfig;
use crate::diagnostics::{Diagnostic, Reporter};
use crate::frontend::render::{self, DiagnosticStyle};
use crate::frontend::source::SourceError;
use crate::lexer::{Scanner, TokenKind};
use crate::parser::Recognizer;

use super::dump::TokenDump;
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: SyntaxConfig,
    pub style: DiagnosticStyle,
}

/// Read a source file, rejecting anything above `MAX_SOURCE_SIZE`.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))
}

/// Where diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiagnosticStream {
    Stdout,
    /// Used while the token dump owns stdout.
    Stderr,
}

impl DiagnosticStream {
    fn print(self, text: &str) {
        match self {
            DiagnosticStream::Stdout => println!("{text}"),
            DiagnosticStream::Stderr => eprintln!("{text}"),
        }
    }
}

/// Reporter for one command run: plain diagnostics are printed the moment they are reported.
fn reporter_for(style: DiagnosticStyle, stream: DiagnosticStream) -> Reporter {
    match style {
        DiagnosticStyle::Plain => Reporter::with_sink(move |d: &Diagnostic| stream.print(&render::plain(d))),
        DiagnosticStyle::Fancy => Reporter::new(),
    }
}

/// Print the collected diagnostics after the run when the fancy style was chosen.
fn print_deferred(
    style: DiagnosticStyle,
    stream: DiagnosticStream,
    file_path: &Path,
    source: &str,
    reporter: &Reporter,
) {
    if style != DiagnosticStyle::Fancy {
        return;
    }
    let name = file_path.display().to_string();
    for diagnostic in reporter.diagnostics() {
        stream.print(&render::fancy(&name, source, diagnostic));
    }
}

fn source_failure(file_path: &Path, e: SourceError) -> CliError {
    CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e))
}

fn write_failure(e: io::Error) -> CliError {
    CliError::failure(format!("Error writing token dump: {e}"))
}

/// Scan `source` to the end and write its token dump to `out`.
pub fn dump_tokens<W: Write>(
    source: &str,
    config: &SyntaxConfig,
    reporter: &mut Reporter,
    out: W,
) -> Result<W, DumpError> {
    let mut scanner = Scanner::from_text(source, config);
    let mut dump = TokenDump::new(out);
    loop {
        let token = scanner.next_token(reporter)?;
        dump.write_token(&token)?;
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    Ok(dump.finish()?)
}

/// Failure while producing a token dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("{0}")]
    Write(#[from] io::Error),
}

/// Tokenize a file and write its token dump (to `output`, or stdout).
///
/// When the dump goes to stdout, diagnostics go to stderr so they never split a dump line.
pub fn scan_file(input: &Path, output: Option<&Path>, options: &RunOptions) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let (out, stream) = match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::failure(format!("Cannot create output file '{}': {}", path.display(), e))
            })?;
            (Box::new(BufWriter::new(file)) as Box<dyn Write>, DiagnosticStream::Stdout)
        }
        None => (Box::new(io::stdout()) as Box<dyn Write>, DiagnosticStream::Stderr),
    };

    let mut reporter = reporter_for(options.style, stream);
    match dump_tokens(&source, &options.config, &mut reporter, out) {
        Ok(_) => {}
        Err(DumpError::Source(e)) => return Err(source_failure(input, e)),
        Err(DumpError::Write(e)) => return Err(write_failure(e)),
    }
    print_deferred(options.style, stream, input, &source, &reporter);

    if reporter.has_errors() {
        println!("Printing complete.");
    } else {
        println!("Printing complete. No lexical errors were found.");
    }
    tracing::info!(diagnostics = reporter.error_count(), "scan command finished");
    Ok(ExitCode::from_errors(reporter.has_errors()))
}

/// Check that a file is a syntactically valid program.
pub fn parse_file(input: &Path, options: &RunOptions) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    let stream = DiagnosticStream::Stdout;
    let mut reporter = reporter_for(options.style, stream);

    let scanner = Scanner::from_text(&source, &options.config);
    let success = Recognizer::new(scanner, &mut reporter, &options.config)
        .and_then(Recognizer::recognize)
        .map_err(|e| source_failure(input, e))?;
    print_deferred(options.style, stream, input, &source, &reporter);

    if success {
        println!("Parsing was successful. No errors were found.");
    } else {
        println!("Parsing complete.");
    }
    tracing::info!(diagnostics = reporter.error_count(), "parse command finished");
    Ok(ExitCode::from_errors(!success))
}
