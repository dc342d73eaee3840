pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Lexes the input lazily.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Lexes the whole input up front, so the parser can move its cursor back and forth.
///
/// Input the tokenizer cannot classify becomes a [`TokenKind::Symbol`] token, so the parser can
/// report it with a proper span.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn compare_tokens(input: &str, expected: &[(TokenKind, &str)]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();

        assert_eq!(actual, expected);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            &[
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn logical_and_comparison() {
        compare_tokens(
            "x_1>=.5|y!=2&z",
            &[
                (TokenKind::Name, "x_1"),
                (TokenKind::GreaterEq, ">="),
                (TokenKind::Float, ".5"),
                (TokenKind::Or, "|"),
                (TokenKind::Name, "y"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Int, "2"),
                (TokenKind::And, "&"),
                (TokenKind::Name, "z"),
            ],
        );
    }

    #[test]
    fn implicit_multiplication_and_calls() {
        compare_tokens(
            "3x^2 pow(a,b) $",
            &[
                (TokenKind::Int, "3"),
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "pow"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "a"),
                (TokenKind::Comma, ","),
                (TokenKind::Name, "b"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }
}
