use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::expr::BinaryOperator;

/// Printed form of an operator and the number of terminal cells it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub text: &'static str,
    pub width: usize,
}

const fn sym(text: &'static str, width: usize) -> Symbol {
    Symbol { text, width }
}

// not, and, or, xor, implies, iff
const PLAIN_SYMBOLS: [Symbol; 6] = [
    sym("!", 1),
    sym("&&", 2),
    sym("||", 2),
    sym("^", 1),
    sym("=>", 2),
    sym("<=>", 3),
];

const UNICODE_SYMBOLS: [Symbol; 6] = [
    sym("¬", 1),
    sym("∧", 1),
    sym("∨", 1),
    sym("⊕", 1),
    sym("⇒", 1),
    sym("⇔", 1),
];

// LaTeX output is sized by the typesetter, widths are not tracked.
const LATEX_SYMBOLS: [Symbol; 6] = [
    sym("\\lnot ", 0),
    sym("\\land", 0),
    sym("\\lor", 0),
    sym("\\oplus", 0),
    sym("\\implies", 0),
    sym("\\iff", 0),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Output format of a truth table.
///
/// [`Plain`] and [`Unicode`] draw an aligned grid for the terminal,
/// [`Latex`] emits a `displaymath` array.
///
/// [`Plain`]: TableStyle::Plain
/// [`Unicode`]: TableStyle::Unicode
/// [`Latex`]: TableStyle::Latex
pub enum TableStyle {
    /// ASCII operators and grid
    #[default]
    Plain,
    /// Logic symbols and box-drawing grid
    Unicode,
    /// LaTeX math markup
    Latex,
}

impl TableStyle {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::Plain, Self::Unicode, Self::Latex]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::Plain => matches!(s, "plain" | "Plain" | "ascii" | "ASCII"),
            Self::Unicode => matches!(s, "unicode" | "Unicode" | "utf8" | "UTF8" | "utf-8" | "UTF-8"),
            Self::Latex => matches!(s, "latex" | "LaTeX" | "tex"),
        }
    }

    const fn symbols(self) -> &'static [Symbol; 6] {
        match self {
            Self::Plain => &PLAIN_SYMBOLS,
            Self::Unicode => &UNICODE_SYMBOLS,
            Self::Latex => &LATEX_SYMBOLS,
        }
    }

    pub const fn not_symbol(self) -> Symbol {
        self.symbols()[0]
    }

    pub const fn binary_symbol(self, op: BinaryOperator) -> Symbol {
        let symbols = self.symbols();
        match op {
            BinaryOperator::And => symbols[1],
            BinaryOperator::Or => symbols[2],
            BinaryOperator::Xor => symbols[3],
            BinaryOperator::Implies => symbols[4],
            BinaryOperator::Iff => symbols[5],
        }
    }
}

impl Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Plain => "plain",
            Self::Unicode => "unicode",
            Self::Latex => "latex",
        })
    }
}

impl FromStr for TableStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("invalid table style '{s}', expected plain, unicode or latex"))
            .copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Glyphs used for truth values, both for assignments and results.
pub enum BoolStyle {
    /// `F` and `T`
    Alpha,
    /// `0` and `1`
    #[default]
    Binary,
    /// `⊥` and `⊤`
    Symbols,
}

impl BoolStyle {
    const fn variants<'a>() -> &'a [Self] {
        &[Self::Alpha, Self::Binary, Self::Symbols]
    }

    fn matches(&self, s: &str) -> bool {
        match self {
            Self::Alpha => matches!(s, "alpha" | "Alpha"),
            Self::Binary => matches!(s, "binary" | "Binary" | "bin"),
            Self::Symbols => matches!(s, "symbols" | "Symbols"),
        }
    }

    pub const fn glyph(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Alpha, false) => "F",
            (Self::Alpha, true) => "T",
            (Self::Binary, false) => "0",
            (Self::Binary, true) => "1",
            (Self::Symbols, false) => "⊥",
            (Self::Symbols, true) => "⊤",
        }
    }

    pub const fn latex_glyph(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Symbols, false) => "\\bot",
            (Self::Symbols, true) => "\\top",
            _ => self.glyph(value),
        }
    }
}

impl Display for BoolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Alpha => "alpha",
            Self::Binary => "binary",
            Self::Symbols => "symbols",
        })
    }
}

impl FromStr for BoolStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::variants()
            .iter()
            .find(|variant| variant.matches(s))
            .ok_or_else(|| anyhow::anyhow!("invalid bool style '{s}', expected alpha, binary or symbols"))
            .copied()
    }
}
