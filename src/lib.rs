#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Circuitcraft, a crate for evaluating boolean expressions and building
//! truth tables.
//!
//! This crate provides run-time evaluation of boolean expressions embedded
//! in strings. The easiest way to use it is with the
//! [`eval`](fn.eval.html) function:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut context: HashMap<char, u8> = HashMap::new();
//! context.insert('A', 1);
//! context.insert('B', 0);
//! assert_eq!(circuitcraft::eval("A ^ B", &context), 1);
//! ```
//!
//! The second argument is the variable binding; variables the binding does
//! not mention default to `0`:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut context: HashMap<char, u8> = HashMap::new();
//! context.insert('A', 1);
//! assert_eq!(circuitcraft::eval("A & B", &context), 0);
//! ```
//!
//! It is also possible to separate parsing from evaluation with the
//! [`Expr`](struct.Expr.html) type. This allows reusing the same postfix
//! program with different bindings, which is how truth tables are built:
//!
//! ```
//! use std::collections::HashMap;
//! use circuitcraft::Expr;
//!
//! let expr = Expr::parse("(A | B) & C");
//!
//! let mut context: HashMap<char, u8> = HashMap::new();
//! context.insert('B', 1);
//! context.insert('C', 1);
//! assert_eq!(expr.eval(&context), 1);
//!
//! context.insert('C', 0);
//! assert_eq!(expr.eval(&context), 0);
//!
//! println!("{}", expr.truth_table());
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - variables: single letters `A` to `Z` (input is uppercased first);
//! - left and right parenthesis;
//! - binary operators: `AND`/`&`, `OR`/`|`/`+`, `XOR`/`^`, `NAND`, `NOR`
//!   and `XNOR`;
//! - unary inversion: `NOT`, `!` or a postfix `'`.
//!
//! Inversion binds tighter than the binary operators. The binary operators
//! all share a single precedence level and associate left to right, so
//! `A AND B OR C` means `(A AND B) OR C`; there is no AND-over-OR
//! precedence. Use parentheses to group explicitly.
//!
//! Parsing is deliberately lenient: characters that fit no token class are
//! skipped, and an unbalanced parenthesis degrades to a best-effort
//! reading instead of an error. Nothing in the engine returns a `Result`.
//! Callers that want strict input checking can run
//! [`validate`](fn.validate.html) first, which reports unmatched
//! parentheses and unknown characters with their positions.
//!
//! Variable discovery is character based: every uppercase letter in the
//! expression counts, including the letters of named operators, so
//! `A AND B` derives the variables `A`, `B`, `D`, `N`. Spell operators
//! symbolically (`A & B`) when the variable list matters.
//!
//! # Technical details
//!
//! Expressions are tokenized and converted to postfix order with a simple
//! shunting-yard pass, then evaluated by a stack machine over bits. The
//! postfix program is built once per expression and re-run per truth table
//! row; a table over `n` variables has `2^n` rows, enumerated with the
//! first variable as the most significant bit.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod gates;
mod lexer;
mod rpn;
mod table;
mod token;
mod util;
mod validate;

pub use error::Error;
pub use expr::{eval, Expr};
pub use gates::Gate;
pub use lexer::{find_variables, normalize, Lexer};
pub use rpn::{eval_rpn, to_postfix};
pub use table::{Row, TruthTable};
pub use token::{BinaryOp, Token, UnaryOp};
pub use util::OPERATORS;
pub use validate::validate;
