// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::fmt;

use itertools::Itertools;

use crate::Logical;

/// The full truth table of an operator, one input row per line followed by
/// the output for that row:
///
/// ```
/// use logical::IMP;
///
/// assert_eq!(IMP.table().to_string(), "0 0 | 1\n0 1 | 1\n1 0 | 0\n1 1 | 1\n");
/// ```
///
/// Nullary operators print a single `| f` line; the undefined operator prints
/// nothing.
pub struct TruthTable<'a> {
    op: &'a Logical,
}

impl<'a> TruthTable<'a> {
    pub(crate) fn new(op: &'a Logical) -> TruthTable<'a> {
        TruthTable { op }
    }
}

impl<'a> fmt::Display for TruthTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_empty() {
            return Ok(());
        }
        for (row, output) in Logical::rows(self.op.arity()).zip(self.op.iter()) {
            if row.is_empty() {
                writeln!(f, "| {}", output)?;
            } else {
                writeln!(f, "{} | {}", row.iter().join(" "), output)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{Logical, NT, UNDEF, XOR};
    use indoc::indoc;

    #[test]
    fn binary_table() {
        assert_eq!(
            XOR.table().to_string(),
            indoc!(
                "
                0 0 | 0
                0 1 | 1
                1 0 | 1
                1 1 | 0
                "
            )
        );
    }

    #[test]
    fn ternary_table() {
        let f = Logical::new(vec![1, 0, 0, 1, 0, 1, 0, 1]).unwrap();
        assert_eq!(
            f.table().to_string(),
            indoc!(
                "
                0 0 0 | 1
                0 0 1 | 0
                0 1 0 | 0
                0 1 1 | 1
                1 0 0 | 0
                1 0 1 | 1
                1 1 0 | 0
                1 1 1 | 1
                "
            )
        );
    }

    #[test]
    fn nullary_tables() {
        assert_eq!(NT.table().to_string(), "| 1\n");
        assert_eq!(UNDEF.table().to_string(), "");
    }
}
