use std::slice::Iter;

use crate::symbols::{Variable, VariableSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

/// Syntax tree of a boolean formula.
///
/// Every node owns its children. [`Expr::Paren`] only records the grouping
/// written by the user; it has no effect on the value of the formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(Variable),
    Not(Box<Expr>),
    Paren(Box<Expr>),
    BinaryOp(BinaryOperator, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub const fn var(var: Variable) -> Self {
        Self::Var(var)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn paren(operand: Self) -> Self {
        Self::Paren(Box::new(operand))
    }

    pub fn binary(op: BinaryOperator, lhs: Self, rhs: Self) -> Self {
        Self::BinaryOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOperator::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOperator::Or, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOperator::Xor, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOperator::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinaryOperator::Iff, lhs, rhs)
    }

    /// Collect the variables referenced anywhere in the tree.
    pub fn variables(&self) -> VariableSet {
        let mut vars = VariableSet::empty();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut VariableSet) {
        match self {
            Self::Var(v) => vars.insert(*v),
            Self::Not(e) | Self::Paren(e) => e.collect_variables(vars),
            Self::BinaryOp(_, l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }
}

/// A formula together with the set of variables it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    pub expr: Expr,
    pub vars: VariableSet,
}

impl Formula {
    /// Pair a tree with a variable set computed elsewhere, e.g. by the parser.
    pub const fn with_vars(expr: Expr, vars: VariableSet) -> Self {
        Self { expr, vars }
    }
}

/// Formulae rendered side by side in a single table, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaSet {
    formulas: Vec<Formula>,
}

impl FormulaSet {
    pub const fn new() -> Self {
        Self {
            formulas: Vec::new(),
        }
    }

    pub fn push(&mut self, formula: Formula) {
        self.formulas.push(formula);
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Formula> {
        self.formulas.iter()
    }

    /// Union of the variables of all formulae: the columns on the left of the table.
    pub fn vars(&self) -> VariableSet {
        self.formulas
            .iter()
            .fold(VariableSet::empty(), |acc, f| acc | f.vars)
    }
}
