//! The [`ErrorKind`] trait shared by the parser and renderer errors, and an [`Error`] that pairs
//! a kind with the source regions it points at.

// lets `#[derive(ErrorKind)]` refer to `pw_error::...` from inside this crate's own tests
extern crate self as pw_error;

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// Highlight color for expressions and names in reports.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of user-facing error, usually derived with `pw_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`dyn Any`](Any), so callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Returns the one-line message of this error, without any source code annotations.
    fn message(&self) -> String;

    /// Builds a report labelling the given spans, in order.
    fn build_report(
        &self,
        src_id: &'static str,
        spans: &[Range<usize>],
    ) -> Report<(&'static str, Range<usize>)>;
}

/// An error kind located in the source.
#[derive(Debug)]
pub struct Error {
    pub spans: Vec<Range<usize>>,

    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of error as the concrete type `K`, if it is one.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns the one-line message of this error.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Builds the `ariadne` report for this error.
    pub fn build_report(&self, src_id: &'static str) -> Report<(&'static str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}
