use crate::expr::{BinaryOperator, Expr, Formula};
use crate::symbols::VariableSet;

impl Expr {
    /// Evaluate the formula for one row of a truth table.
    ///
    /// `vars` is the variable set the rows are enumerated over and `assignment`
    /// the row number; the value of each variable is read from the bit given by
    /// [`VariableSet::assignment_bit`].
    ///
    /// # Panics
    ///
    /// Panics if the formula references a variable that is not part of `vars`.
    pub fn eval(&self, vars: VariableSet, assignment: u64) -> bool {
        match self {
            Self::Var(v) => (assignment >> vars.assignment_bit(*v)) & 1 == 1,
            Self::Paren(e) => e.eval(vars, assignment),
            Self::Not(e) => !e.eval(vars, assignment),
            Self::BinaryOp(op, l, r) => {
                let l = l.eval(vars, assignment);
                let r = r.eval(vars, assignment);

                match op {
                    BinaryOperator::And => l && r,
                    BinaryOperator::Or => l || r,
                    BinaryOperator::Xor => l ^ r,
                    BinaryOperator::Implies => !l || r,
                    BinaryOperator::Iff => l == r,
                }
            }
        }
    }
}

impl Formula {
    /// Evaluate over the formula's own variables.
    pub fn eval(&self, assignment: u64) -> bool {
        self.expr.eval(self.vars, assignment)
    }

    /// Every row of the formula's own truth table, in enumeration order.
    pub fn truth_values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.vars.assignments()).map(move |assignment| self.eval(assignment))
    }
}
