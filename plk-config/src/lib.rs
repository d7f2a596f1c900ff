use std::fmt::Write;
use std::{ops::Range, path::Path};

pub mod keycodes;
pub mod render;
pub mod script;
pub mod validate;

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
    pub span: Option<Range<usize>>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{}\n    at: ({:?})", &self.message, span),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
            span: None,
        }
    }
}

impl From<&str> for ConfigError {
    fn from(err: &str) -> Self {
        Self {
            message: err.to_string(),
            span: None,
        }
    }
}

impl ConfigError {
    pub fn new(message: String, span: Range<usize>) -> Self {
        Self {
            message,
            span: Some(span),
        }
    }

    /// The byte span converted to a char span, which is what ariadne labels use.
    fn char_span(&self, source: &str) -> Option<Range<usize>> {
        let span = self.span.clone()?;
        let start = source.get(..span.start)?.chars().count();
        let len = source.get(span.start..span.end.min(source.len()))?.chars().count();
        Some(start..start + len.max(1))
    }

    pub fn long_format(&self, source_file: &Path, source: &str) -> String {
        let (line, col, slice) = self.line_col_slice(source);
        let width = format!("{}", line + 10).len();
        format!(
            "error: {}\n   --> {}:{}:{}\n{}",
            self.message,
            source_file.display(),
            line,
            col,
            source[slice.0..slice.1]
                .lines()
                .fold(String::new(), |mut output, l| {
                    let _ = writeln!(output, " {:>width$} | {}", line, l);
                    output
                })
        )
    }

    /// 1-based line, 0-based column and the byte range of the line holding the start of the span.
    pub fn line_col_slice(&self, source: &str) -> (usize, usize, (usize, usize)) {
        let Some(span) = self.span.clone() else {
            return (0, 0, (0, 0));
        };
        let mut line = 1;
        let mut col = 0;
        let mut sol = 0;

        for (i, c) in source.char_indices() {
            if c == '\n' {
                if i < span.start {
                    line += 1;
                    col = 0;
                    sol = i + 1;
                } else {
                    return (line, col, (sol, i));
                }
            } else if i < span.start {
                col += 1;
            }
        }
        (line, col, (sol, source.len()))
    }

    /// Print the error with the offending source highlighted.
    pub fn eprint(&self, file: &Path, src: &str) {
        use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
        let filename = file.to_str().unwrap_or("<unknown>");
        let Some(span) = self.char_span(src) else {
            eprintln!("{}: {}", filename, self.message);
            return;
        };
        let mut colors = ColorGenerator::new();
        let a = colors.next();
        let res = Report::build(ReportKind::Error, (filename, span.clone()))
            .with_message("Invalid script".to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(&self.message)
                    .with_color(a),
            )
            .finish()
            .eprint((filename, Source::from(src)));
        if res.is_err() {
            eprintln!("{}", self.long_format(file, src));
        }
    }
}

/// Parse a simulation script, printing a highlighted report if it is invalid.
pub fn pretty_parse(file: &Path, src: &str) -> Result<Vec<script::Step>, ConfigError> {
    script::parse(src).inspect_err(|err| err.eprint(file, src))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
