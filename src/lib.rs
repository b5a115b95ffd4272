// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

#![warn(elided_lifetimes_in_paths)]

//! # logical: logical operators as truth tables
//!
//! This crate represents a boolean function by the *output column* of its
//! truth table: an operator accepting `n` inputs is a sequence of `2^n` bits,
//! listing its output for every input row in ascending order. Operators can be
//! applied to input rows, named, and compiled into a decision diagram for
//! faster repeated evaluation.
//!
//! ```
//! use logical::{Logical, AND, XOR};
//!
//! assert_eq!(AND.evaluate((1, 0)), Ok(0));
//! assert_eq!(XOR.evaluate([1, 0]), Ok(1));
//! assert_eq!(XOR.name(), Ok("xor"));
//!
//! let maj = Logical::new(vec![0, 0, 0, 1, 0, 1, 1, 1]).unwrap();
//! let fast = maj.compiled().unwrap();
//! assert_eq!(fast.evaluate((1, 0, 1)), Ok(1));
//! ```
//!
//! The main pieces of interest are:
//!
//! * `Logical`, the operator itself.
//! * The catalog of named operators (`AND`, `XOR`, `NOT`, ...) and the sets
//!   `NULLARY`, `UNARY`, `BINARY` and `EVERY`.
//! * `Function`, the decision diagram built by `Logical::compiled()`.
//! * `Entry` and `Row`, which describe what may be used as a table entry or an
//!   input row.

mod catalog;
mod error;
mod function;
mod input;
mod logical;
mod table;

pub use catalog::*;
pub use error::*;
pub use function::*;
pub use input::{Entry, Row, Values};
pub use logical::*;
pub use table::*;
