// logical: a Rust crate for truth-table logical operators.
//
// Copyright (c) 2016 Chris Fallin <cfallin@c1f.net>. Released under the MIT
// License.
//

use std::collections::hash_map::Entry as HashEntry;
use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use crate::input::{self, Inputs, Row};
use crate::{Bit, Error, Result};

pub(crate) type DecisionRef = usize;
pub(crate) const DECISION_ZERO: DecisionRef = usize::MAX;
pub(crate) const DECISION_ONE: DecisionRef = usize::MAX - 1;

pub(crate) type DecisionVar = usize;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct DecisionNode {
    var: DecisionVar,
    lo: DecisionRef,
    hi: DecisionRef,
}

/// A truth table compiled into a reduced decision diagram.
///
/// Node `var` tests input `var` (counting from the first, most significant
/// input): `lo` is taken when it is 0 and `hi` when it is 1. Variables are
/// tested in increasing order along every path, and identical subtables share
/// one node.
#[derive(Clone)]
pub struct Function {
    arity: usize,
    nodes: Vec<DecisionNode>,
    root: DecisionRef,
}

struct FunctionBuilder<'a> {
    table: &'a [Bit],
    nodes: Vec<DecisionNode>,
    dedup_hash: HashMap<DecisionNode, DecisionRef>,
}

impl<'a> FunctionBuilder<'a> {
    fn new(table: &'a [Bit]) -> FunctionBuilder<'a> {
        FunctionBuilder {
            table,
            nodes: Vec::new(),
            dedup_hash: HashMap::new(),
        }
    }

    fn get_node(&mut self, var: DecisionVar, lo: DecisionRef, hi: DecisionRef) -> DecisionRef {
        if lo == hi {
            return lo;
        }
        let n = DecisionNode { var, lo, hi };
        match self.dedup_hash.entry(n.clone()) {
            HashEntry::Occupied(o) => *o.get(),
            HashEntry::Vacant(v) => {
                let idx = self.nodes.len() as DecisionRef;
                self.nodes.push(n);
                v.insert(idx);
                idx
            }
        }
    }

    fn constant(value: Bit) -> DecisionRef {
        if value == 1 {
            DECISION_ONE
        } else {
            DECISION_ZERO
        }
    }

    /// Builds the subdiagram for `table[lower..upper]`, whose rows all share
    /// the first `var` inputs.
    fn build(&mut self, var: DecisionVar, lower: usize, upper: usize) -> DecisionRef {
        let range = &self.table[lower..upper];
        if range.iter().all_equal() {
            return FunctionBuilder::constant(range[0]);
        }
        let mid = lower + (upper - lower) / 2;
        let lo = self.build(var + 1, lower, mid);
        let hi = self.build(var + 1, mid, upper);
        self.get_node(var, lo, hi)
    }
}

impl Function {
    /// Compiles a validated, non-empty truth table.
    pub(crate) fn build(table: &[Bit]) -> Result<Function> {
        if table.is_empty() {
            return Err(Error::UndefinedOperator);
        }
        let mut builder = FunctionBuilder::new(table);
        let root = builder.build(0, 0, table.len());
        Ok(Function {
            arity: table.len().trailing_zeros() as usize,
            nodes: builder.nodes,
            root,
        })
    }

    /// Number of inputs the function expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of branch nodes in the diagram; constant functions have none.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Evaluates the diagram on one input row, validated the same way as
    /// [`Logical::evaluate`](crate::Logical::evaluate).
    ///
    /// ```
    /// use logical::XOR;
    ///
    /// let xor = XOR.compiled().unwrap();
    /// let function = xor.function().unwrap();
    /// assert_eq!(function.call((1, 0)), Ok(1));
    /// assert_eq!(function.call([1, 1]), Ok(0));
    /// ```
    pub fn call<R: Row>(&self, row: R) -> Result<Bit> {
        let inputs: Inputs = input::arguments(&row.values())?;
        input::check_arity(self.arity, &inputs)?;
        Ok(self.walk(&inputs))
    }

    /// Follows the diagram from the root to a constant. `inputs` must already
    /// hold exactly `arity` bits.
    pub(crate) fn walk(&self, inputs: &[Bit]) -> Bit {
        let mut f = self.root;
        while f != DECISION_ZERO && f != DECISION_ONE {
            let node = &self.nodes[f];
            f = if inputs[node.var] == 1 { node.hi } else { node.lo };
        }
        (f == DECISION_ONE) as Bit
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Function(arity = {}, root = {}):", self.arity, self.root)?;
        for (idx, node) in self.nodes.iter().enumerate() {
            writeln!(
                f,
                "  node {}: x{} ? {} : {}",
                idx, node.var, node.hi, node.lo
            )?;
        }
        Ok(())
    }
}
