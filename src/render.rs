//! Printing formulae in the notation of a [`TableStyle`].
//!
//! The printer returns the number of terminal cells it wrote alongside the
//! text, so truth values can be aligned under a formula without measuring
//! the output afterwards. Both come out of the same traversal.

use std::fmt::{self, Display, Write};

use crate::expr::Expr;
use crate::style::TableStyle;

/// Write `expr` to `writer` and return the display width of what was written.
///
/// The width of [`TableStyle::Latex`] output is meaningless and should be ignored.
pub fn write_expr<W: Write>(writer: &mut W, expr: &Expr, style: TableStyle) -> Result<usize, fmt::Error> {
    match expr {
        Expr::Var(v) => {
            write!(writer, "{v}")?;
            Ok(1)
        }
        Expr::Not(e) => {
            let sym = style.not_symbol();
            writer.write_str(sym.text)?;
            Ok(write_expr(writer, e, style)? + sym.width)
        }
        Expr::Paren(e) => {
            writer.write_char('(')?;
            let width = write_expr(writer, e, style)?;
            writer.write_char(')')?;
            Ok(width + 2)
        }
        Expr::BinaryOp(op, l, r) => {
            let sym = style.binary_symbol(*op);
            let lw = write_expr(writer, l, style)?;
            write!(writer, " {} ", sym.text)?;
            let rw = write_expr(writer, r, style)?;
            Ok(lw + rw + sym.width + 2)
        }
    }
}

impl Expr {
    /// Text and display width of the formula in the given style.
    pub fn pretty(&self, style: TableStyle) -> (String, usize) {
        let mut text = String::new();
        // writing into a String cannot fail
        let width = write_expr(&mut text, self, style).unwrap_or_default();
        (text, width)
    }

    /// Adapter implementing [`Display`] for a specific style.
    pub const fn styled(&self, style: TableStyle) -> Styled<'_> {
        Styled { expr: self, style }
    }
}

pub struct Styled<'a> {
    expr: &'a Expr,
    style: TableStyle,
}

impl Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.expr, self.style).map(|_| ())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.styled(TableStyle::Plain), f)
    }
}
