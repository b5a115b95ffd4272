// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use thiserror::Error;

/// Errors raised when building, applying, specializing or naming an operator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("all entries in supplied truth table must be integers (entry {position} is not)")]
    InvalidElementType { position: usize },

    #[error("all integers in supplied truth table must be 0 or 1 (entry {position} is {value})")]
    InvalidElementValue { position: usize, value: i128 },

    #[error("number of elements in supplied truth table must be zero or a power of 2 (got {0})")]
    InvalidLength(usize),

    #[error("expecting zero or more integers or a single iterable of integers (argument {position} is not an integer)")]
    InvalidArgumentType { position: usize },

    #[error("expecting an integer that is 0 or 1 (argument {position} is {value})")]
    InvalidArgumentValue { position: usize, value: i128 },

    #[error("operator of arity {expected} cannot be applied to {found} inputs")]
    InvalidArity { expected: usize, found: usize },

    #[error("no defined output")]
    UndefinedOperator,

    #[error("operator has no canonical name")]
    UnknownOperator,
}

pub type Result<T> = ::std::result::Result<T, Error>;
