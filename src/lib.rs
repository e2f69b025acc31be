#![warn(clippy::disallowed_types)]

pub use error::{Error, Result};
pub use expr::{BinaryOperator, Expr, Formula, FormulaSet};
pub use style::{BoolStyle, Symbol, TableStyle};
pub use symbols::*;
pub use truth_table::{render, render_to_string, RenderConfig};

pub mod error;
pub mod expr;
pub mod parser;
pub mod render;
pub mod style;
pub mod truth_table;

mod eval;

mod symbols;
