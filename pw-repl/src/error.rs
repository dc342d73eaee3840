use ariadne::Source;
use pw_simplify::Error;

/// Report the error to stderr, annotating the given input.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr.
pub fn report_to_stderr(err: &Error, input: &str) {
    if let Err(io_err) = err.build_report("input").eprint(("input", Source::from(input))) {
        // stderr is unusable
        log::error!("{} ({})", err, io_err);
    }
}
