use std::{
    fmt::{self, Display},
    ops::{BitOr, BitOrAssign},
};

use crate::error::Error;

/// Number of identifier slots: `A`-`Z` followed by `a`-`z`.
pub const MAX_VARIABLES: usize = 26 * 2;

/// A single propositional variable, identified by its slot.
///
/// Slots `0..26` hold the uppercase letters, slots `26..52` the lowercase ones.
/// The slot order is also the order in which variables appear in a table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u8);

impl Variable {
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    pub fn from_slot(slot: usize) -> Option<Self> {
        (slot < MAX_VARIABLES).then(|| Self(slot as u8))
    }

    pub const fn name(self) -> char {
        if self.0 < 26 {
            (b'A' + self.0) as char
        } else {
            (b'a' + self.0 - 26) as char
        }
    }
}

impl TryFrom<char> for Variable {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'A'..='Z' => Ok(Self(ch as u8 - b'A')),
            'a'..='z' => Ok(Self(ch as u8 - b'a' + 26)),
            _ => Err(Error::InvalidIdentifier(ch)),
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name(), f)
    }
}

/// Bitmask of the variables referenced by one or more formulae.
///
/// Bit `i` is set when the variable in slot `i` is referenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VariableSet(u64);

impl VariableSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, var: Variable) {
        self.0 |= 1 << var.slot();
    }

    pub const fn contains(self, var: Variable) -> bool {
        self.0 & (1 << var.0) != 0
    }

    /// Number of referenced variables.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of referenced variables with a slot below `var`.
    pub const fn rank(self, var: Variable) -> usize {
        let below = (1u64 << var.0) - 1;
        (self.0 & below).count_ones() as usize
    }

    /// Bit of an assignment that holds the value of `var`.
    ///
    /// Rows are printed most significant bit first while the header lists the
    /// variables in ascending slot order, so the first variable maps to the
    /// highest bit: `len - 1 - rank`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not part of the set.
    pub fn assignment_bit(self, var: Variable) -> usize {
        assert!(self.contains(var), "variable {var} is not part of the set");
        self.len() - 1 - self.rank(var)
    }

    /// Number of rows in a truth table over this set.
    pub const fn assignments(self) -> u64 {
        1 << self.len()
    }

    /// Referenced variables in ascending slot order.
    pub fn iter(self) -> impl Iterator<Item = Variable> {
        (0..MAX_VARIABLES)
            .filter(move |&slot| self.0 & (1 << slot) != 0)
            .filter_map(Variable::from_slot)
    }
}

impl BitOr for VariableSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for VariableSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Variable> for VariableSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut set = Self::empty();
        for var in iter {
            set.insert(var);
        }
        set
    }
}

impl Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in self.iter() {
            write!(f, "{var}")?;
        }
        Ok(())
    }
}
