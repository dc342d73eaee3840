use ariadne::Fmt;
use pw_attrs::ErrorKind;
use pw_error::EXPR;

/// A name is not known, and the renderer is running in strict mode.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if self.function {
        format!("the `{}` function does not exist", self.name)
    } else {
        format!("the `{}` function or variable does not exist", self.name)
    },
    labels = [if self.function { "this function" } else { "this name" }],
    help = if self.suggestions.is_empty() {
        "add it to the list of known names, or disable strict mode".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean `{}`?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownName {
    /// The name that is not known.
    pub name: String,

    /// Whether the name was used as a function.
    pub function: bool,

    /// Known names that are spelled similarly, if any.
    pub suggestions: Vec<String>,
}

/// A function was called with fewer arguments than its layout requires.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing arguments for the `{}` function", self.name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.expected,
        self.given
    ),
)]
pub struct ArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}
