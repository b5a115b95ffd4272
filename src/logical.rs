// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::Deref;
use std::sync::Arc;

use itertools::{Either, Itertools};
use log::debug;
use smallvec::SmallVec;

use crate::catalog;
use crate::input::{self, Entry, Row};
use crate::table::TruthTable;
use crate::{Error, Function, Result};

/// A single truth-table entry: always 0 or 1.
pub type Bit = u8;

/// Number of table entries stored inline before spilling to the heap. Every
/// operator of arity 4 or less fits.
pub const TABLE_INLINE_SIZE: usize = 16;

type Table = SmallVec<[Bit; TABLE_INLINE_SIZE]>;

/// A boolean function of `n` inputs, represented by the output column of its
/// truth table.
///
/// The output column lists the function's value on every input row, with the
/// rows sorted in ascending order (reading each row as a binary number, first
/// input most significant). An operator accepting `n` inputs therefore has
/// exactly `2^n` entries.
///
/// ```
/// use logical::Logical;
///
/// // x | y | f(x, y)
/// // 0 | 0 | 1
/// // 0 | 1 | 0
/// // 1 | 0 | 1
/// // 1 | 1 | 0
/// let f = Logical::new(vec![1, 0, 1, 0]).unwrap();
/// assert_eq!(f.evaluate((0, 1)), Ok(0));
/// assert_eq!(f.evaluate((1, 0)), Ok(1));
/// assert_eq!(f.arity(), 2);
/// ```
///
/// Two operators are equal exactly when their tables are equal; whether
/// either has been [`compiled`](Logical::compiled) does not matter.
#[derive(Clone)]
pub struct Logical {
    table: Table,
    function: Option<Arc<Function>>,
}

impl Logical {
    /// Builds an operator from its output column.
    ///
    /// The entries are consumed eagerly. Every entry must be an integer, every
    /// integer must be 0 or 1, and the number of entries must be zero or a
    /// power of two; the checks run in that order over the whole sequence.
    ///
    /// ```
    /// use logical::{Error, Logical};
    ///
    /// assert_eq!(Logical::new(vec!["a", "b"]), Err(Error::InvalidElementType { position: 0 }));
    /// assert_eq!(Logical::new(vec![-1, 2]), Err(Error::InvalidElementValue { position: 0, value: -1 }));
    /// assert_eq!(Logical::new(vec![1, 0, 1]), Err(Error::InvalidLength(3)));
    /// ```
    pub fn new<I>(entries: I) -> Result<Logical>
    where
        I: IntoIterator,
        I::Item: Entry,
    {
        let values = input::collect_values(entries);
        let table: Table = input::to_bits(
            &values,
            |position| Error::InvalidElementType { position },
            |position, value| Error::InvalidElementValue { position, value },
        )?;
        if !table.is_empty() && !table.len().is_power_of_two() {
            return Err(Error::InvalidLength(table.len()));
        }
        Ok(Logical {
            table,
            function: None,
        })
    }

    /// Tabulates `f` over every input row of the given arity, in canonical
    /// order.
    ///
    /// ```
    /// use logical::{Logical, AND};
    ///
    /// let and = Logical::from_fn(2, |row| row[0] == 1 && row[1] == 1);
    /// assert_eq!(and, *AND);
    /// ```
    pub fn from_fn<F>(arity: usize, mut f: F) -> Logical
    where
        F: FnMut(&[Bit]) -> bool,
    {
        Logical {
            table: Logical::rows(arity).map(|row| f(&row) as Bit).collect(),
            function: None,
        }
    }

    pub(crate) fn canonical(bits: &[Bit]) -> Logical {
        debug_assert!(bits.is_empty() || bits.len().is_power_of_two());
        Logical {
            table: SmallVec::from_slice(bits),
            function: None,
        }
    }

    /// Enumerates all input rows of the given arity in ascending order,
    /// first input most significant. Arity 0 has exactly one (empty) row.
    pub fn rows(arity: usize) -> impl Iterator<Item = Vec<Bit>> {
        if arity == 0 {
            Either::Left(iter::once(Vec::new()))
        } else {
            Either::Right(iter::repeat(0..2 as Bit).take(arity).multi_cartesian_product())
        }
    }

    /// Returns the number of inputs this operator accepts. Both the undefined
    /// operator `()` and the one-entry constants have arity 0.
    pub fn arity(&self) -> usize {
        if self.table.len() <= 1 {
            0
        } else {
            self.table.len().trailing_zeros() as usize
        }
    }

    /// Returns the typical concise name of this operator, if it is one of the
    /// canonical nullary, unary or binary operators.
    ///
    /// ```
    /// use logical::{Error, Logical};
    ///
    /// assert_eq!(Logical::new(vec![0]).unwrap().name(), Ok("nf"));
    /// assert_eq!(Logical::new(vec![1, 0, 0, 1]).unwrap().name(), Ok("xnor"));
    /// assert_eq!(Logical::new(vec![0; 8]).unwrap().name(), Err(Error::UnknownOperator));
    /// ```
    pub fn name(&self) -> Result<&'static str> {
        catalog::NAMES
            .get(&self.table[..])
            .copied()
            .ok_or(Error::UnknownOperator)
    }

    /// Applies the operator to one input row.
    ///
    /// The row is either a tuple of individual arguments or a single
    /// collection holding the whole row; both address the same entry.
    ///
    /// ```
    /// use logical::Logical;
    ///
    /// let f = Logical::new(vec![1, 0, 0, 1, 0, 1, 0, 1]).unwrap();
    /// assert_eq!(f.evaluate((1, 1, 0)), Ok(0));
    /// assert_eq!(f.evaluate([1, 1, 0]), Ok(0));
    /// assert_eq!(f.evaluate(vec![0, 0, 0]), Ok(1));
    /// ```
    pub fn evaluate<R: Row>(&self, row: R) -> Result<Bit> {
        self.apply(&row.values())
    }

    /// Applies the operator to the row produced by an iterator, which is fully
    /// consumed.
    pub fn evaluate_iter<I>(&self, row: I) -> Result<Bit>
    where
        I: IntoIterator,
        I::Item: Entry,
    {
        self.apply(&input::collect_values(row))
    }

    fn apply(&self, values: &[Option<i128>]) -> Result<Bit> {
        let inputs = input::arguments(values)?;
        if self.table.is_empty() {
            return Err(Error::UndefinedOperator);
        }
        input::check_arity(self.arity(), &inputs)?;
        match self.function {
            Some(ref function) => Ok(function.walk(&inputs)),
            None => Ok(self.table[row_index(&inputs)]),
        }
    }

    /// Returns a new operator with the same table and an attached decision
    /// diagram, which is then used in place of positional lookup.
    ///
    /// ```
    /// use logical::Logical;
    ///
    /// let f = Logical::new(vec![1, 0, 0, 1, 0, 1, 0, 1]).unwrap();
    /// let g = f.compiled().unwrap();
    /// assert_eq!(g, f);
    /// assert_eq!(g.function().unwrap().call((1, 1, 0)), Ok(0));
    /// assert_eq!(g.evaluate((0, 0, 0)), Ok(1));
    /// ```
    pub fn compiled(&self) -> Result<Logical> {
        let function = Function::build(&self.table)?;
        debug!(
            "compiled operator {} into {} decision nodes",
            self,
            function.node_count()
        );
        Ok(Logical {
            table: self.table.clone(),
            function: Some(Arc::new(function)),
        })
    }

    /// Returns the decision diagram built by [`compiled`](Logical::compiled),
    /// if any.
    pub fn function(&self) -> Option<&Function> {
        self.function.as_deref()
    }

    pub fn is_compiled(&self) -> bool {
        self.function.is_some()
    }

    /// Returns a displayable view of the full truth table.
    pub fn table(&self) -> TruthTable<'_> {
        TruthTable::new(self)
    }
}

/// Position of `inputs` in the canonical row order.
fn row_index(inputs: &[Bit]) -> usize {
    inputs
        .iter()
        .fold(0, |index, &bit| (index << 1) | bit as usize)
}

impl Deref for Logical {
    type Target = [Bit];

    fn deref(&self) -> &[Bit] {
        &self.table
    }
}

impl PartialEq for Logical {
    fn eq(&self, other: &Logical) -> bool {
        self.table == other.table
    }
}

impl Eq for Logical {}

impl PartialOrd for Logical {
    fn partial_cmp(&self, other: &Logical) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Logical {
    fn cmp(&self, other: &Logical) -> Ordering {
        self.table.cmp(&other.table)
    }
}

impl Hash for Logical {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table.len() {
            1 => write!(f, "({},)", self.table[0]),
            _ => write!(f, "({})", self.table.iter().join(", ")),
        }
    }
}

impl fmt::Debug for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logical{}", self)?;
        if self.is_compiled() {
            write!(f, " [compiled]")?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Bit>> for Logical {
    type Error = Error;

    fn try_from(bits: Vec<Bit>) -> Result<Logical> {
        Logical::new(bits)
    }
}

impl<'a> TryFrom<&'a [Bit]> for Logical {
    type Error = Error;

    fn try_from(bits: &'a [Bit]) -> Result<Logical> {
        Logical::new(bits)
    }
}
