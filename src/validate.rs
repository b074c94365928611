use crate::error::Error;
use crate::util::{symbol, KEYWORDS};

/// Match a whole keyword against the upcoming characters.
fn matches_keyword(chars: &[(usize, char)], keyword: &str) -> bool {
    keyword.len() <= chars.len() && keyword.chars().zip(chars).all(|(k, &(_, c))| k == c)
}

/// Check an expression strictly, before any tokenization.
///
/// The engine itself never rejects input: unknown characters are skipped
/// and unbalanced parentheses are tolerated. Callers that would rather
/// surface a diagnostic than accept a best-effort result can run this pass
/// first. It classifies two conditions, each reported with the 1-based
/// character position in the original string:
///
/// - a parenthesis with no partner;
/// - a character that belongs to no token class (not a parenthesis, named
///   or symbolic operator, or letter).
///
/// Whitespace is ignored and letters are matched case-insensitively, so
/// anything that passes here is tokenized in full by the lenient engine.
///
/// # Errors
///
/// Returns [`Error::ParseError`] describing the first offending character.
///
/// # Examples
///
/// ```
/// # use circuitcraft::validate;
///
/// assert!(validate("(A AND B) OR C'").is_ok());
/// assert!(validate("A % B").is_err());
/// assert!(validate("(A | B").is_err());
/// ```
pub fn validate(expression: &str) -> Result<(), Error> {
    let chars: Vec<(usize, char)> = expression
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| (i + 1, c.to_ascii_uppercase()))
        .collect();

    let mut open = Vec::new();
    let mut i = 0;
    'scan: while i < chars.len() {
        let (position, c) = chars[i];
        if c == '(' {
            open.push(position);
            i += 1;
            continue;
        }
        if c == ')' {
            if open.pop().is_none() {
                return Err(Error::ParseError(format!(
                    "unmatched ')' at position {}",
                    position
                )));
            }
            i += 1;
            continue;
        }
        for &(keyword, _) in &KEYWORDS {
            if matches_keyword(&chars[i..], keyword) {
                i += keyword.len();
                continue 'scan;
            }
        }
        if symbol(c).is_some() || c.is_ascii_uppercase() {
            i += 1;
            continue;
        }
        return Err(Error::ParseError(format!(
            "unexpected character '{}' at position {}",
            c, position
        )));
    }

    if let Some(&position) = open.first() {
        return Err(Error::ParseError(format!(
            "unclosed '(' at position {}",
            position
        )));
    }
    Ok(())
}
