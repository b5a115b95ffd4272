// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::{Bit, Logical};

/// Every operator with a conventional name, keyed by its truth table. The
/// undefined operator `()` has none.
const CANONICAL: &[(&[Bit], &str)] = &[
    (&[0], "nf"),
    (&[1], "nt"),
    (&[0, 0], "uf"),
    (&[0, 1], "id"),
    (&[1, 0], "not"),
    (&[1, 1], "ut"),
    (&[0, 0, 0, 0], "bf"),
    (&[0, 0, 0, 1], "and"),
    (&[0, 0, 1, 0], "nimp"),
    (&[0, 0, 1, 1], "fst"),
    (&[0, 1, 0, 0], "nif"),
    (&[0, 1, 0, 1], "snd"),
    (&[0, 1, 1, 0], "xor"),
    (&[0, 1, 1, 1], "or"),
    (&[1, 0, 0, 0], "nor"),
    (&[1, 0, 0, 1], "xnor"),
    (&[1, 0, 1, 0], "nsnd"),
    (&[1, 0, 1, 1], "if"),
    (&[1, 1, 0, 0], "nfst"),
    (&[1, 1, 0, 1], "imp"),
    (&[1, 1, 1, 0], "nand"),
    (&[1, 1, 1, 1], "bt"),
];

pub(crate) static NAMES: Lazy<HashMap<&'static [Bit], &'static str>> =
    Lazy::new(|| CANONICAL.iter().cloned().collect());

macro_rules! operator {
    ($(#[$doc:meta])* $name:ident = [$($bit:expr),*]) => {
        $(#[$doc])*
        pub static $name: Lazy<Logical> = Lazy::new(|| Logical::canonical(&[$($bit),*]));
    };
}

operator!(
    /// Nullary operator with no defined output.
    UNDEF = []
);
operator!(
    /// Nullary FALSE (constant).
    NF = [0]
);
operator!(
    /// Nullary TRUE (constant).
    NT = [1]
);
operator!(
    /// Unary FALSE: a constant output for any one input.
    UF = [0, 0]
);
operator!(
    /// IDENTITY.
    ID = [0, 1]
);
operator!(
    /// NOT.
    NOT = [1, 0]
);
operator!(
    /// Unary TRUE: a constant output for any one input.
    UT = [1, 1]
);
operator!(
    /// Binary FALSE.
    BF = [0, 0, 0, 0]
);
operator!(
    /// AND.
    AND = [0, 0, 0, 1]
);
operator!(
    /// NIMP, i.e. `x > y`.
    NIMP = [0, 0, 1, 0]
);
operator!(
    /// FST: the first (left-hand) input.
    FST = [0, 0, 1, 1]
);
operator!(
    /// NIF, i.e. `x < y`.
    NIF = [0, 1, 0, 0]
);
operator!(
    /// SND: the second (right-hand) input.
    SND = [0, 1, 0, 1]
);
operator!(
    /// XOR, i.e. `x != y`.
    XOR = [0, 1, 1, 0]
);
operator!(
    /// OR.
    OR = [0, 1, 1, 1]
);
operator!(
    /// NOR.
    NOR = [1, 0, 0, 0]
);
operator!(
    /// XNOR, i.e. `x == y`.
    XNOR = [1, 0, 0, 1]
);
operator!(
    /// NSND: negation of the second input.
    NSND = [1, 0, 1, 0]
);
operator!(
    /// IF, i.e. `x >= y`.
    IF = [1, 0, 1, 1]
);
operator!(
    /// NFST: negation of the first input.
    NFST = [1, 1, 0, 0]
);
operator!(
    /// IMP, i.e. `x <= y`.
    IMP = [1, 1, 0, 1]
);
operator!(
    /// NAND.
    NAND = [1, 1, 1, 0]
);
operator!(
    /// Binary TRUE.
    BT = [1, 1, 1, 1]
);

/// The two nullary operators with a defined output.
pub static NULLARY: Lazy<HashSet<&'static Logical>> =
    Lazy::new(|| [&*NF, &*NT].iter().cloned().collect());

/// All four unary operators.
pub static UNARY: Lazy<HashSet<&'static Logical>> =
    Lazy::new(|| [&*UF, &*ID, &*NOT, &*UT].iter().cloned().collect());

/// All sixteen binary operators.
pub static BINARY: Lazy<HashSet<&'static Logical>> = Lazy::new(|| {
    [
        &*BF, &*AND, &*NIMP, &*FST, &*NIF, &*SND, &*XOR, &*OR, &*NOR, &*XNOR, &*NSND, &*IF,
        &*NFST, &*IMP, &*NAND, &*BT,
    ]
    .iter()
    .cloned()
    .collect()
});

/// Every nullary, unary and binary operator.
pub static EVERY: Lazy<HashSet<&'static Logical>> = Lazy::new(|| {
    NULLARY
        .iter()
        .chain(UNARY.iter())
        .chain(BINARY.iter())
        .cloned()
        .collect()
});

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use rstest::rstest;

    #[test]
    fn group_sizes() {
        assert_eq!(NULLARY.len(), 2);
        assert_eq!(UNARY.len(), 4);
        assert_eq!(BINARY.len(), 16);
        assert_eq!(EVERY.len(), 22);
        assert!(!EVERY.contains(&*UNDEF));
    }

    #[test]
    fn groups_match_arity() {
        for (group, arity, len) in &[(&NULLARY, 0, 1), (&UNARY, 1, 2), (&BINARY, 2, 4)] {
            for op in group.iter() {
                assert_eq!(op.arity(), *arity);
                assert_eq!(op.len(), *len);
            }
        }
    }

    #[test]
    fn names_are_unique_per_arity() {
        for group in &[&NULLARY, &UNARY, &BINARY] {
            let names: HashSet<&str> = group.iter().map(|op| op.name().unwrap()).collect();
            assert_eq!(names.len(), group.len());
        }
        assert_eq!(NAMES.len(), 22);
    }

    #[test]
    fn every_operator_is_named() {
        for &(bits, name) in CANONICAL {
            assert_eq!(Logical::new(bits).unwrap().name(), Ok(name));
        }
        assert_eq!(UNDEF.name(), Err(Error::UnknownOperator));
    }

    #[test]
    fn only_constants_are_named_nullary() {
        let named: HashSet<Logical> = CANONICAL
            .iter()
            .map(|&(bits, _)| Logical::new(bits).unwrap())
            .filter(|op| op.arity() == 0)
            .collect();
        let expected: HashSet<Logical> = [(*NF).clone(), (*NT).clone()].iter().cloned().collect();
        assert_eq!(named, expected);
        assert!(!NAMES.contains_key(&UNDEF[..]));
    }

    #[test]
    fn higher_arity_has_no_name() {
        let op = Logical::new(vec![0, 0, 0, 0, 0, 0, 0, 1]).unwrap();
        assert_eq!(op.name(), Err(Error::UnknownOperator));
    }

    #[rstest]
    #[case(&*AND, [1, 0], 0)]
    #[case(&*AND, [1, 1], 1)]
    #[case(&*XOR, [1, 0], 1)]
    #[case(&*NAND, [1, 1], 0)]
    #[case(&*NIMP, [1, 0], 1)]
    #[case(&*NIF, [1, 0], 0)]
    #[case(&*IF, [0, 1], 0)]
    #[case(&*IMP, [1, 0], 0)]
    #[case(&*NSND, [0, 1], 0)]
    #[case(&*NFST, [0, 1], 1)]
    fn binary_evaluation(#[case] op: &Logical, #[case] row: [u8; 2], #[case] expected: Bit) {
        assert_eq!(op.evaluate(row), Ok(expected));
        assert_eq!(op.evaluate((row[0], row[1])), Ok(expected));
    }

    #[rstest]
    #[case(&*UF, 1, 0)]
    #[case(&*ID, 1, 1)]
    #[case(&*NOT, 1, 0)]
    #[case(&*UT, 0, 1)]
    fn unary_evaluation(#[case] op: &Logical, #[case] x: u8, #[case] expected: Bit) {
        assert_eq!(op.evaluate((x,)), Ok(expected));
    }

    #[test]
    fn nullary_evaluation() {
        assert_eq!(NF.evaluate(()), Ok(0));
        assert_eq!(NT.evaluate(()), Ok(1));
        assert_eq!(UNDEF.evaluate(()), Err(Error::UndefinedOperator));
    }
}
