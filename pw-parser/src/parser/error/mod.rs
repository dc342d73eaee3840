pub mod kind;

use ariadne::Report;
use pw_error::ErrorKind;
use std::ops::Range;

/// An error raised while parsing, pointing at one or more regions of the source.
#[derive(Debug)]
pub struct Error {
    pub spans: Vec<Range<usize>>,

    pub kind: Box<dyn ErrorKind>,

    /// A fatal error ends the search for alternative parses.
    pub fatal: bool,
}

impl Error {
    /// Creates an error that lets the parser try another alternative.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: false }
    }

    /// Creates an error that ends parsing.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: true }
    }

    /// Builds the `ariadne` report for this error.
    pub fn build_report(&self, src_id: &'static str) -> Report<(&'static str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}
