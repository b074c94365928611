use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use crate::expr::Expr;
use crate::rpn::eval_rpn;

/// One line of a truth table: the input bits in variable order, and the
/// output bit the expression produced for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Input bits, one per variable, in the table's variable order
    pub inputs: Vec<u8>,
    /// The expression output for these inputs
    pub output: u8,
}

/// The full truth table of an expression.
///
/// A table over `n` variables has exactly `2^n` rows. Row `i` binds the
/// variables to the binary digits of `i`, with the first variable in sorted
/// order as the most significant bit, so reading a row's inputs as a binary
/// number gives its index.
///
/// # Examples
///
/// ```
/// # use circuitcraft::Expr;
/// let table = Expr::parse("A & B").truth_table();
/// assert_eq!(table.variables(), &['A', 'B']);
/// assert_eq!(table.rows()[2].inputs, vec![1, 0]);
/// assert_eq!(table.rows()[3].output, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<Row>,
}

impl TruthTable {
    #[must_use]
    /// Enumerate every variable binding of `expr` and evaluate its postfix
    /// program once per row.
    pub fn build(expr: &Expr) -> Self {
        let variables = expr.variables().to_vec();
        let count = variables.len();
        let mut rows = Vec::with_capacity(1 << count);
        let mut context = HashMap::with_capacity(count);

        for i in 0..(1_usize << count) {
            let mut inputs = Vec::with_capacity(count);
            for (position, &variable) in variables.iter().enumerate() {
                let bit = ((i >> (count - 1 - position)) & 1) as u8;
                context.insert(variable, bit);
                inputs.push(bit);
            }
            rows.push(Row {
                inputs,
                output: eval_rpn(expr.rpn(), &context),
            });
        }
        Self { variables, rows }
    }

    /// The table's variable letters, sorted ascending.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The table rows, in enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl Display for TruthTable {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for &variable in &self.variables {
            write!(fmt, "{} ", variable)?;
        }
        writeln!(fmt, "| Output")?;
        for _ in &self.variables {
            write!(fmt, "--")?;
        }
        writeln!(fmt, "+-------")?;
        for row in &self.rows {
            for bit in &row.inputs {
                write!(fmt, "{} ", bit)?;
            }
            writeln!(fmt, "| {}", row.output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::expr::Expr;

    #[test]
    fn row_count_is_two_to_the_n() {
        assert_eq!(Expr::parse("A'").truth_table().rows().len(), 2);
        assert_eq!(Expr::parse("A & B").truth_table().rows().len(), 4);
        assert_eq!(Expr::parse("A & B & C").truth_table().rows().len(), 8);
    }

    #[test]
    // reading a row's inputs as binary, first variable as the most
    // significant bit, gives the row index back
    fn rows_enumerate_in_binary_order() {
        let table = Expr::parse("A & B & C").truth_table();
        for (i, row) in table.rows().iter().enumerate() {
            let read_back = row
                .inputs
                .iter()
                .fold(0_usize, |acc, &bit| (acc << 1) | bit as usize);
            assert_eq!(read_back, i);
        }
    }

    #[test]
    fn xor_outputs() {
        let table = Expr::parse("A ^ B").truth_table();
        let outputs: Vec<u8> = table.rows().iter().map(|row| row.output).collect();
        assert_eq!(outputs, vec![0, 1, 1, 0]);
    }

    #[test]
    fn no_variables_gives_a_single_row() {
        let table = Expr::parse("").truth_table();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].inputs, Vec::<u8>::new());
        assert_eq!(table.rows()[0].output, 0);
    }

    #[test]
    fn rendering() {
        let rendered = Expr::parse("A ^ B").truth_table().to_string();
        assert_eq!(
            rendered,
            "A B | Output\n\
             ----+-------\n\
             0 0 | 0\n\
             0 1 | 1\n\
             1 0 | 1\n\
             1 1 | 0\n"
        );
    }
}
