use crate::token::Token;
use crate::util::{symbol, KEYWORDS};

#[must_use]
/// Uppercase `input` and strip every whitespace character.
///
/// This is the only preprocessing the engine applies to an expression, and
/// it never fails.
///
/// # Examples
///
/// ```
/// # use circuitcraft::normalize;
///
/// assert_eq!(normalize("a And\t b"), "AANDB");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[must_use]
/// Collect the distinct variable letters of `expr`, sorted ascending.
///
/// The scan is purely character based: every uppercase `A` to `Z` anywhere
/// in the string counts, including the letters of named operators such as
/// `AND`. Expressions written with the symbolic spellings (`&`, `|`, `+`,
/// `^`, `!`, `'`) derive exactly the variables they use.
///
/// # Examples
///
/// ```
/// # use circuitcraft::find_variables;
///
/// assert_eq!(find_variables("B A B C A"), vec!['A', 'B', 'C']);
/// assert_eq!(find_variables("A & B"), vec!['A', 'B']);
/// ```
pub fn find_variables(expr: &str) -> Vec<char> {
    let mut variables: Vec<char> = expr.chars().filter(char::is_ascii_uppercase).collect();
    variables.sort_unstable();
    variables.dedup();
    variables
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over an already normalized expression string.
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer { input }
    }

    /// Split the input into tokens, scanning left to right.
    ///
    /// At each position the lexer takes, in order: a parenthesis, the
    /// longest named operator keyword, a single-character symbolic
    /// operator, or a variable letter. Any other character is skipped
    /// without error, so this never fails; malformed input degrades to a
    /// shorter token sequence instead.
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut rest = self.input;

        'scan: while let Some(c) = rest.chars().next() {
            if c == '(' {
                tokens.push(Token::LParen);
                rest = &rest[1..];
                continue;
            }
            if c == ')' {
                tokens.push(Token::RParen);
                rest = &rest[1..];
                continue;
            }
            for &(keyword, token) in &KEYWORDS {
                if rest.starts_with(keyword) {
                    tokens.push(token);
                    rest = &rest[keyword.len()..];
                    continue 'scan;
                }
            }
            if let Some(token) = symbol(c) {
                tokens.push(token);
            } else if c.is_ascii_uppercase() {
                tokens.push(Token::Variable(c));
            }
            // any other character is silently skipped
            rest = &rest[c.len_utf8()..];
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::{find_variables, normalize, Lexer};
    use crate::token::{BinaryOp, Token, UnaryOp};
    use test_case::test_case;

    #[test]
    fn normalized() {
        assert_eq!(normalize("a and b"), "AANDB");
        assert_eq!(normalize(" (A\t| b)\n"), "(A|B)");
        assert_eq!(normalize(""), "");
    }

    #[test_case("A&B" => vec![
        Token::Variable('A'),
        Token::Binary(BinaryOp::And),
        Token::Variable('B'),
    ] ; "symbolic and")]
    #[test_case("AANDB" => vec![
        Token::Variable('A'),
        Token::Binary(BinaryOp::And),
        Token::Variable('B'),
    ] ; "keyword and")]
    #[test_case("XNORB" => vec![
        Token::Binary(BinaryOp::Xnor),
        Token::Variable('B'),
    ] ; "xnor matches before xor")]
    #[test_case("NOTA" => vec![
        Token::Unary(UnaryOp::Not),
        Token::Variable('A'),
    ] ; "not is a whole keyword")]
    #[test_case("NORA" => vec![
        Token::Binary(BinaryOp::Nor),
        Token::Variable('A'),
    ] ; "nor is a whole keyword")]
    #[test_case("(A+B)'" => vec![
        Token::LParen,
        Token::Variable('A'),
        Token::Binary(BinaryOp::Or),
        Token::Variable('B'),
        Token::RParen,
        Token::Unary(UnaryOp::Not),
    ] ; "parens and postfix prime")]
    #[test_case("A1?B" => vec![
        Token::Variable('A'),
        Token::Variable('B'),
    ] ; "unknown characters are skipped")]
    #[test_case("" => Vec::<Token>::new() ; "empty input")]
    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    #[test]
    fn variables() {
        assert_eq!(find_variables("B A B C A"), vec!['A', 'B', 'C']);
        assert_eq!(find_variables("a b c"), Vec::<char>::new());
        assert_eq!(find_variables("(X^Y)|Z"), vec!['X', 'Y', 'Z']);
    }

    #[test]
    // The scan is character based, so the letters of named operators count
    // as variables too. Symbolic spellings avoid this.
    fn variables_include_operator_letters() {
        assert_eq!(find_variables("A AND B"), vec!['A', 'B', 'D', 'N']);
        assert_eq!(find_variables("A & B"), vec!['A', 'B']);
    }
}
