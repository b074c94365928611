use std::collections::HashMap;

use crate::lexer::{find_variables, normalize, Lexer};
use crate::rpn::{eval_rpn, to_postfix};
use crate::table::TruthTable;
use crate::token::Token;

/// Evaluate a single expression from `input`.
///
/// The expression is parsed, then evaluated once against `context`, a map
/// from variable letter to bit. Variables missing from the context default
/// to `0`. This never fails; malformed input degrades to a best-effort bit
/// instead of an error.
///
/// # Example
///
/// ```
/// # use std::collections::HashMap;
/// # use circuitcraft::eval;
///
/// let mut context: HashMap<char, u8> = HashMap::new();
/// context.insert('A', 1);
/// context.insert('B', 0);
/// assert_eq!(eval("A & B'", &context), 1);
/// assert_eq!(eval("A ^ B", &context), 1);
/// ```
pub fn eval<'a, C>(input: &str, context: C) -> u8
where
    C: Into<&'a HashMap<char, u8>>,
{
    Expr::parse(input).eval(context)
}

/// A parsed boolean expression, held in postfix order.
///
/// Parsing happens once; the postfix program can then be evaluated any
/// number of times against different variable bindings, which is how truth
/// tables are filled row by row.
///
/// # Examples
/// ```
/// # use circuitcraft::Expr;
/// # use std::collections::HashMap;
/// let expr = Expr::parse("(A | B) & C");
/// assert_eq!(expr.variables(), &['A', 'B', 'C']);
///
/// let mut context: HashMap<char, u8> = HashMap::new();
/// context.insert('A', 0);
/// context.insert('B', 1);
/// context.insert('C', 1);
/// assert_eq!(expr.eval(&context), 1);
///
/// context.insert('C', 0);
/// assert_eq!(expr.eval(&context), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    rpn: Vec<Token>,
    variables: Vec<char>,
}

impl Expr {
    #[must_use]
    /// Parse the given boolean `expression` into an `Expr`.
    ///
    /// The input is normalized (uppercased, whitespace stripped), tokenized
    /// and converted to postfix order. Parsing is total: unknown characters
    /// are skipped and unbalanced parentheses are tolerated, so there is no
    /// error case. An empty input parses to an expression that evaluates
    /// to `0`.
    ///
    /// # Examples
    /// ```
    /// # use circuitcraft::Expr;
    /// let expr = Expr::parse("a nand b");
    /// assert_eq!(expr.variables(), &['A', 'B', 'D', 'N']);
    /// ```
    ///
    /// Note the example above: variable discovery is character based, so
    /// the letters of named operators count too. Spell operators
    /// symbolically when the variable list matters:
    ///
    /// ```
    /// # use circuitcraft::Expr;
    /// let expr = Expr::parse("(a & b)'");
    /// assert_eq!(expr.variables(), &['A', 'B']);
    /// ```
    pub fn parse(expression: &str) -> Self {
        let normalized = normalize(expression);
        let tokens = Lexer::new(&normalized).tokenize();
        Self {
            rpn: to_postfix(tokens),
            variables: find_variables(&normalized),
        }
    }

    /// Evaluate the expression against a variable binding.
    ///
    /// Missing variables default to `0`; the result is always a single bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circuitcraft::Expr;
    /// # use std::collections::HashMap;
    /// let expr = Expr::parse("A & B");
    ///
    /// let mut context: HashMap<char, u8> = HashMap::new();
    /// context.insert('A', 1);
    /// assert_eq!(expr.eval(&context), 0);
    ///
    /// context.insert('B', 1);
    /// assert_eq!(expr.eval(&context), 1);
    /// ```
    pub fn eval<'a, C>(&self, context: C) -> u8
    where
        C: Into<&'a HashMap<char, u8>>,
    {
        eval_rpn(&self.rpn, context.into())
    }

    /// The distinct variable letters of the expression, sorted ascending.
    /// Their order fixes the truth table columns and the bit positions used
    /// for row enumeration.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The postfix token program the expression compiled to.
    pub fn rpn(&self) -> &[Token] {
        &self.rpn
    }

    #[must_use]
    /// Build the full truth table of the expression, one row per
    /// combination of variable bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circuitcraft::Expr;
    /// let table = Expr::parse("A ^ B").truth_table();
    /// assert_eq!(table.rows().len(), 4);
    /// assert_eq!(table.rows()[1].output, 1);
    /// ```
    pub fn truth_table(&self) -> TruthTable {
        TruthTable::build(self)
    }
}
