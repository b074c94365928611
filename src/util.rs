use hashbrown::HashMap;

use crate::token::{BinaryOp, Token, UnaryOp};

/// Named operator keywords and the tokens they spell, in match order.
///
/// The lexer tries these as whole keywords at the current position, so a
/// keyword never matches as a substring of another (`XNOR` is listed before
/// `XOR`, `NOR` and `NOT` are distinct whole words).
pub const KEYWORDS: [(&str, Token); 7] = [
    ("XNOR", Token::Binary(BinaryOp::Xnor)),
    ("NAND", Token::Binary(BinaryOp::Nand)),
    ("NOR", Token::Binary(BinaryOp::Nor)),
    ("XOR", Token::Binary(BinaryOp::Xor)),
    ("AND", Token::Binary(BinaryOp::And)),
    ("OR", Token::Binary(BinaryOp::Or)),
    ("NOT", Token::Unary(UnaryOp::Not)),
];

lazy_static! {
    /// Every accepted operator spelling, named and symbolic.
    pub static ref OPERATORS: HashMap<&'static str, Token> = {
        let mut map = HashMap::new();
        for &(keyword, token) in &KEYWORDS {
            map.insert(keyword, token);
        }
        map.insert("!", Token::Unary(UnaryOp::Not));
        map.insert("'", Token::Unary(UnaryOp::Not));
        map.insert("&", Token::Binary(BinaryOp::And));
        map.insert("|", Token::Binary(BinaryOp::Or));
        map.insert("+", Token::Binary(BinaryOp::Or));
        map.insert("^", Token::Binary(BinaryOp::Xor));
        map.shrink_to_fit();
        map
    };
}

/// Look up a single-character operator spelling.
pub fn symbol(c: char) -> Option<Token> {
    let mut buffer = [0u8; 4];
    let spelling: &str = c.encode_utf8(&mut buffer);
    OPERATORS.get(spelling).copied()
}
