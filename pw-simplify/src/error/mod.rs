pub mod kind;

use ariadne::Report;
use pw_error::{Error as SpanError, ErrorKind};
use pw_parser::{parser::error::Error as ParseError, tokenizer::{tokenize_complete, TokenKind}};
use std::{fmt, ops::Range};

/// An error raised while rendering a tree.
///
/// The tree carries no source spans, so the error remembers the offending name instead. Use
/// [`RenderError::locate`] to find it in the source text.
#[derive(Debug)]
pub struct RenderError {
    /// The variable or function name the error is about.
    pub name: String,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl RenderError {
    /// Creates a new render error about the given name.
    pub fn new(name: &str, kind: impl ErrorKind + 'static) -> Self {
        Self { name: name.to_owned(), kind: Box::new(kind) }
    }

    /// Converts this error into an error with spans, pointing at the first occurrence of the
    /// name in the given source. The span is empty if the name does not occur.
    pub fn locate(self, source: &str) -> SpanError {
        let span = tokenize_complete(source)
            .iter()
            .find(|token| token.kind == TokenKind::Name && token.lexeme == self.name)
            .map(|token| token.span.clone())
            .unwrap_or(0..0);

        SpanError { spans: vec![span], kind: self.kind }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for RenderError {}

/// An error that can occur while rendering an expression from source text.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be parsed.
    Parse(ParseError),

    /// The parsed expression could not be rendered.
    Render(SpanError),
}

impl Error {
    /// Returns the regions of the source text this error points at.
    pub fn spans(&self) -> &[Range<usize>] {
        match self {
            Error::Parse(err) => &err.spans,
            Error::Render(err) => &err.spans,
        }
    }

    /// Returns the kind of error that occurred.
    pub fn kind(&self) -> &dyn ErrorKind {
        match self {
            Error::Parse(err) => &*err.kind,
            Error::Render(err) => &*err.kind,
        }
    }

    /// Build a report from this error.
    pub fn build_report(&self, src_id: &'static str) -> Report<(&'static str, Range<usize>)> {
        self.kind().build_report(src_id, self.spans())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {}", err.kind.message()),
            Error::Render(err) => write!(f, "render error: {}", err.message()),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn locate_first_occurrence() {
        let err = RenderError::new("foo", kind::ArgumentCount {
            name: "foo".to_string(),
            expected: 2,
            given: 1,
        });
        let located = err.locate("food + foo(x) + foo");

        assert_eq!(located.spans, vec![7..10]);
        assert_eq!(located.message(), "missing arguments for the `foo` function");
    }

    #[test]
    fn locate_missing_name() {
        let err = RenderError::new("bar", kind::UnknownName {
            name: "bar".to_string(),
            function: false,
            suggestions: Vec::new(),
        });

        assert_eq!(err.locate("x + 1").spans, vec![0..0]);
    }
}
