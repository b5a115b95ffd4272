// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::convert::TryFrom;

use smallvec::{Array, SmallVec};

use crate::{Bit, Error, Result};

const ROW_ALLOCED_SIZE: usize = 8;

/// Integer values of a row of arguments (or a sequence of table entries), with
/// `None` standing in for any entry that is not integer-valued.
pub type Values = SmallVec<[Option<i128>; ROW_ALLOCED_SIZE]>;

/// A validated input row.
pub(crate) type Inputs = SmallVec<[Bit; ROW_ALLOCED_SIZE]>;

/// A single truth-table entry or evaluation argument.
///
/// Integer primitives and `bool` are integer-valued; floats, characters and
/// strings are not, and are rejected wherever an integer is expected.
pub trait Entry {
    /// Returns the integer value of this entry, or `None` if it is not an
    /// integer.
    fn as_integer(&self) -> Option<i128>;
}

macro_rules! integer_entry {
    ($($t:ty),*) => {
        $(
            impl Entry for $t {
                fn as_integer(&self) -> Option<i128> {
                    Some(*self as i128)
                }
            }
        )*
    };
}

macro_rules! non_integer_entry {
    ($($t:ty),*) => {
        $(
            impl Entry for $t {
                fn as_integer(&self) -> Option<i128> {
                    None
                }
            }
        )*
    };
}

integer_entry!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
non_integer_entry!(f32, f64, char, str, String);

// Anything past `i128::MAX` is out of range regardless, so it saturates.
impl Entry for u128 {
    fn as_integer(&self) -> Option<i128> {
        Some(i128::try_from(*self).unwrap_or(i128::MAX))
    }
}

impl Entry for bool {
    fn as_integer(&self) -> Option<i128> {
        Some(*self as i128)
    }
}

impl<'a, E> Entry for &'a E
where
    E: Entry + ?Sized,
{
    fn as_integer(&self) -> Option<i128> {
        (**self).as_integer()
    }
}

/// One input row of a truth table.
///
/// A row is either a tuple of individual arguments, `(x0, x1, ...)`, or a
/// single collection holding the whole row, such as `[x0, x1]` or a `Vec`. A
/// lone collection is always taken to be the full row, never a single bit.
pub trait Row {
    /// Consumes the row, classifying each argument in order.
    fn values(self) -> Values;
}

macro_rules! tuple_row {
    ($($name:ident)*) => {
        impl<$($name: Entry),*> Row for ($($name,)*) {
            #[allow(non_snake_case, unused_mut)]
            fn values(self) -> Values {
                let ($($name,)*) = self;
                let mut values = Values::new();
                $(values.push($name.as_integer());)*
                values
            }
        }
    };
}

tuple_row!();
tuple_row!(A);
tuple_row!(A B);
tuple_row!(A B C);
tuple_row!(A B C D);
tuple_row!(A B C D E);
tuple_row!(A B C D E F);
tuple_row!(A B C D E F G);
tuple_row!(A B C D E F G H);

impl<T: Entry, const N: usize> Row for [T; N] {
    fn values(self) -> Values {
        self.iter().map(Entry::as_integer).collect()
    }
}

impl<'a, T: Entry, const N: usize> Row for &'a [T; N] {
    fn values(self) -> Values {
        self.iter().map(Entry::as_integer).collect()
    }
}

impl<'a, T: Entry> Row for &'a [T] {
    fn values(self) -> Values {
        self.iter().map(Entry::as_integer).collect()
    }
}

impl<T: Entry> Row for Vec<T> {
    fn values(self) -> Values {
        self.iter().map(Entry::as_integer).collect()
    }
}

impl<'a, T: Entry> Row for &'a Vec<T> {
    fn values(self) -> Values {
        self.iter().map(Entry::as_integer).collect()
    }
}

impl<T: Entry, A: Array<Item = T>> Row for SmallVec<A> {
    fn values(self) -> Values {
        self.iter().map(Entry::as_integer).collect()
    }
}

/// Classifies every item of a (possibly one-shot) iterator, consuming it.
pub(crate) fn collect_values<I>(items: I) -> Values
where
    I: IntoIterator,
    I::Item: Entry,
{
    items.into_iter().map(|item| item.as_integer()).collect()
}

/// Checks that every value is an integer, and only then that every integer is
/// 0 or 1. The first offending position is reported.
pub(crate) fn to_bits<A, N, B>(values: &[Option<i128>], not_integer: N, not_bit: B) -> Result<SmallVec<A>>
where
    A: Array<Item = Bit>,
    N: Fn(usize) -> Error,
    B: Fn(usize, i128) -> Error,
{
    if let Some(position) = values.iter().position(Option::is_none) {
        return Err(not_integer(position));
    }
    values
        .iter()
        .flatten()
        .enumerate()
        .map(|(position, &value)| match value {
            0 | 1 => Ok(value as Bit),
            _ => Err(not_bit(position, value)),
        })
        .collect()
}

/// Validates a row of evaluation arguments.
pub(crate) fn arguments(values: &[Option<i128>]) -> Result<Inputs> {
    to_bits(
        values,
        |position| Error::InvalidArgumentType { position },
        |position, value| Error::InvalidArgumentValue { position, value },
    )
}

pub(crate) fn check_arity(expected: usize, inputs: &[Bit]) -> Result<()> {
    if inputs.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidArity {
            expected,
            found: inputs.len(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entry_classification() {
        assert_eq!(1u8.as_integer(), Some(1));
        assert_eq!((-3i64).as_integer(), Some(-3));
        assert_eq!(true.as_integer(), Some(1));
        assert_eq!(2.5f64.as_integer(), None);
        assert_eq!("a".as_integer(), None);
        assert_eq!(String::from("b").as_integer(), None);
        assert_eq!('c'.as_integer(), None);
    }

    #[test]
    fn wide_unsigned_entries() {
        assert_eq!(1u128.as_integer(), Some(1));
        assert_eq!(u128::MAX.as_integer(), Some(i128::MAX));
        assert_eq!(
            arguments(&(0u128, u128::MAX).values()),
            Err(Error::InvalidArgumentValue {
                position: 1,
                value: i128::MAX
            })
        );
        assert_eq!(arguments(&[1u128, 0].values()).map(|bits| bits.to_vec()), Ok(vec![1, 0]));
    }

    #[test]
    fn row_shapes_agree() {
        let expected: Values = [Some(1), Some(0), Some(1)].iter().cloned().collect();
        assert_eq!((1, 0, 1).values(), expected);
        assert_eq!([1, 0, 1].values(), expected);
        assert_eq!((&[1u8, 0, 1][..]).values(), expected);
        assert_eq!(vec![1, 0, 1].values(), expected);
        assert_eq!(collect_values(vec![1, 0, 1].into_iter()), expected);
        assert!(().values().is_empty());
    }

    #[test]
    fn mixed_tuple_row() {
        let values = (1u8, "x", 0.5f32).values();
        assert_eq!(&values[..], &[Some(1), None, None]);
    }

    #[test]
    fn type_errors_take_precedence() {
        // A later non-integer is reported even when an earlier integer is out
        // of range.
        let values = (7, "x").values();
        assert_eq!(
            arguments(&values),
            Err(Error::InvalidArgumentType { position: 1 })
        );
        let values = (1, 7).values();
        assert_eq!(
            arguments(&values),
            Err(Error::InvalidArgumentValue {
                position: 1,
                value: 7
            })
        );
    }

    #[test]
    fn arity_check() {
        assert!(check_arity(2, &[0, 1]).is_ok());
        assert_eq!(
            check_arity(2, &[0]),
            Err(Error::InvalidArity {
                expected: 2,
                found: 1
            })
        );
    }
}
