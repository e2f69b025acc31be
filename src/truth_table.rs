use std::io::{self, Write};

use itertools::Itertools;

use crate::expr::FormulaSet;
use crate::style::{BoolStyle, TableStyle};

/// Options controlling how a table is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub table_style: TableStyle,
    pub bool_style: BoolStyle,
}

impl RenderConfig {
    pub const fn new(table_style: TableStyle, bool_style: BoolStyle) -> Self {
        Self {
            table_style,
            bool_style,
        }
    }
}

struct Grid {
    vbar: &'static str,
    hbar: &'static str,
    cross: &'static str,
}

const ASCII_GRID: Grid = Grid {
    vbar: "|",
    hbar: "-",
    cross: "+",
};

const UNICODE_GRID: Grid = Grid {
    vbar: "│",
    hbar: "─",
    cross: "┼",
};

/// Print the truth table of all formulae in `formulas` to `writer`.
///
/// The rows enumerate every assignment of the union of the variables of all
/// formulae, and each formula gets one result column. The formulae are
/// consumed and dropped once the table is written.
pub fn render<W: Write>(writer: &mut W, formulas: FormulaSet, config: &RenderConfig) -> io::Result<()> {
    if formulas.is_empty() {
        return Ok(());
    }

    log::debug!(
        "rendering {} formula(s) over {} variable(s) as {}",
        formulas.len(),
        formulas.vars().len(),
        config.table_style
    );

    match config.table_style {
        TableStyle::Plain => write_grid(writer, &formulas, TableStyle::Plain, &ASCII_GRID, config.bool_style),
        TableStyle::Unicode => write_grid(writer, &formulas, TableStyle::Unicode, &UNICODE_GRID, config.bool_style),
        TableStyle::Latex => write_latex(writer, &formulas, config.bool_style),
    }
}

fn write_grid<W: Write>(
    writer: &mut W,
    formulas: &FormulaSet,
    style: TableStyle,
    grid: &Grid,
    bools: BoolStyle,
) -> io::Result<()> {
    let vars = formulas.vars();
    let last = formulas.len() - 1;

    for var in vars.iter() {
        write!(writer, "{var} ")?;
    }

    // width of each formula column, including the padding before the next bar
    let mut widths = Vec::with_capacity(formulas.len());
    for (i, formula) in formulas.iter().enumerate() {
        let (text, mut width) = formula.expr.pretty(style);
        write!(writer, "{} {text}", grid.vbar)?;
        if i < last {
            write!(writer, " ")?;
            width += 1;
        }
        widths.push(width);
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "{}{}{}",
        grid.hbar.repeat(vars.len() * 2),
        grid.cross,
        widths.iter().map(|w| grid.hbar.repeat(w + 1)).join(grid.cross)
    )?;

    for assignment in 0..vars.assignments() {
        for bit in (0..vars.len()).rev() {
            write!(writer, "{} ", bools.glyph((assignment >> bit) & 1 == 1))?;
        }

        for (i, (formula, &width)) in formulas.iter().zip(&widths).enumerate() {
            let field = width.div_ceil(2);
            let value = bools.glyph(formula.expr.eval(vars, assignment));
            write!(writer, "{} {value:>field$}", grid.vbar)?;

            if i < last {
                let padding = if width % 2 == 1 { field - 1 } else { field };
                write!(writer, "{:padding$}", "")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn write_latex<W: Write>(writer: &mut W, formulas: &FormulaSet, bools: BoolStyle) -> io::Result<()> {
    let vars = formulas.vars();

    writeln!(writer, "\\begin{{displaymath}}")?;
    writeln!(
        writer,
        "\t\\begin{{array}}{{|{}{}|}}",
        std::iter::repeat("c").take(vars.len()).join(" "),
        "|c".repeat(formulas.len())
    )?;

    let header = vars
        .iter()
        .map(|v| v.to_string())
        .chain(formulas.iter().map(|f| f.expr.pretty(TableStyle::Latex).0))
        .join(" & ");
    writeln!(writer, "\t\t{header}\\\\")?;
    writeln!(writer, "\t\t\\hline")?;

    for assignment in 0..vars.assignments() {
        let row = (0..vars.len())
            .rev()
            .map(|bit| bools.latex_glyph((assignment >> bit) & 1 == 1))
            .chain(
                formulas
                    .iter()
                    .map(|f| bools.latex_glyph(f.expr.eval(vars, assignment))),
            )
            .join(" & ");
        writeln!(writer, "\t\t{row}\\\\")?;
    }

    writeln!(writer, "\t\\end{{array}}")?;
    writeln!(writer, "\\end{{displaymath}}")
}

/// Render a table into a string, mostly useful for tests and previews.
pub fn render_to_string(formulas: FormulaSet, config: &RenderConfig) -> io::Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, formulas, config)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
