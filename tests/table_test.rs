use pretty_assertions::assert_eq;

use truthtab::parser::parse_formulas;
use truthtab::*;

fn table(src: &str, table_style: TableStyle, bool_style: BoolStyle) -> String {
    let formulas = parse_formulas(src).expect("valid formulae");
    render_to_string(formulas, &RenderConfig::new(table_style, bool_style)).expect("rendering succeeds")
}

#[test]
fn test_single_and() {
    let expected = "\
A B | A && B
----+-------
0 0 |   0
0 1 |   0
1 0 |   0
1 1 |   1
";
    assert_eq!(table("A && B", TableStyle::Plain, BoolStyle::Binary), expected);
}

#[test]
fn test_negation() {
    let expected = "\
A | !A
--+---
0 | 1
1 | 0
";
    assert_eq!(table("!A", TableStyle::Plain, BoolStyle::Binary), expected);

    let expected = "\
A │ ¬A
──┼───
F │ T
T │ F
";
    assert_eq!(table("!A", TableStyle::Unicode, BoolStyle::Alpha), expected);
}

#[test]
fn test_shared_variables() {
    let expected = "\
A B | A ^ B | A => B
----+-------+-------
0 0 |   0   |   1
0 1 |   1   |   1
1 0 |   1   |   0
1 1 |   0   |   1
";
    assert_eq!(table("A ^ B, A => B", TableStyle::Plain, BoolStyle::Binary), expected);
}

#[test]
fn test_disjoint_variables() {
    // each formula only references part of the header, odd widths are padded
    let expected = "\
A B c | !A | B || c
------+----+-------
0 0 0 |  1 |   0
0 0 1 |  1 |   1
0 1 0 |  1 |   1
0 1 1 |  1 |   1
1 0 0 |  0 |   0
1 0 1 |  0 |   1
1 1 0 |  0 |   1
1 1 1 |  0 |   1
";
    assert_eq!(table("!A, B || c", TableStyle::Plain, BoolStyle::Binary), expected);
}

#[test]
fn test_unicode_symbols() {
    let expected = "\
A B │ A ∧ B │ A ⇔ B
────┼───────┼──────
⊥ ⊥ │   ⊥   │   ⊤
⊥ ⊤ │   ⊥   │   ⊥
⊤ ⊥ │   ⊥   │   ⊥
⊤ ⊤ │   ⊤   │   ⊤
";
    assert_eq!(table("A && B, A <=> B", TableStyle::Unicode, BoolStyle::Symbols), expected);
}

fn last_index_of(line: &str, glyphs: &[char]) -> usize {
    let chars: Vec<char> = line.chars().collect();
    chars
        .iter()
        .rposition(|c| glyphs.contains(c))
        .expect("line has a column separator")
}

#[test]
fn test_rows_line_up_with_rule() {
    let src = "!(A || b) => C, a ^ B, (c), A <=> a && b";

    for table_style in [TableStyle::Plain, TableStyle::Unicode] {
        for bool_style in [BoolStyle::Alpha, BoolStyle::Binary, BoolStyle::Symbols] {
            let output = table(src, table_style, bool_style);
            let lines: Vec<&str> = output.lines().collect();
            let junction = last_index_of(lines[1], &['+', '┼']);

            assert_eq!(lines[0].chars().count(), lines[1].chars().count());
            assert_eq!(last_index_of(lines[0], &['|', '│']), junction);
            for line in &lines[2..] {
                assert_eq!(
                    last_index_of(line, &['|', '│']),
                    junction,
                    "{table_style}/{bool_style}: {line}"
                );
            }
        }
    }
}

#[test]
fn test_row_and_header_counts() {
    let output = table("a && b || c, D", TableStyle::Plain, BoolStyle::Binary);
    let lines: Vec<&str> = output.lines().collect();

    // header, rule and 2^4 rows
    assert_eq!(lines.len(), 2 + 16);
    assert_eq!(lines[0], "D a b c | a && b || c | D");
    assert_eq!(lines[2], format!("0 0 0 0 | {:>6}{:6}| 0", "0", ""));
    assert_eq!(lines[17], format!("1 1 1 1 | {:>6}{:6}| 1", "1", ""));
}

#[test]
fn test_latex() {
    let expected = "\
\\begin{displaymath}
\t\\begin{array}{|c c|c|}
\t\tA & B & A \\lor B\\\\
\t\t\\hline
\t\t0 & 0 & 0\\\\
\t\t0 & 1 & 1\\\\
\t\t1 & 0 & 1\\\\
\t\t1 & 1 & 1\\\\
\t\\end{array}
\\end{displaymath}
";
    let output = table("A || B", TableStyle::Latex, BoolStyle::Binary);
    assert_eq!(output, expected);
    assert_eq!(output.matches("\\hline").count(), 1);
}

#[test]
fn test_latex_negation() {
    let expected = "\
\\begin{displaymath}
\t\\begin{array}{|c|c|}
\t\tA & \\lnot A\\\\
\t\t\\hline
\t\t0 & 1\\\\
\t\t1 & 0\\\\
\t\\end{array}
\\end{displaymath}
";
    assert_eq!(table("!A", TableStyle::Latex, BoolStyle::Binary), expected);
}

#[test]
fn test_latex_multiple_formulae() {
    let expected = "\
\\begin{displaymath}
\t\\begin{array}{|c|c|c|}
\t\tp & \\lnot p & (p)\\\\
\t\t\\hline
\t\t\\bot & \\top & \\bot\\\\
\t\t\\top & \\bot & \\top\\\\
\t\\end{array}
\\end{displaymath}
";
    assert_eq!(table("!p, (p)", TableStyle::Latex, BoolStyle::Symbols), expected);
}

#[test]
fn test_empty_set() {
    let output = render_to_string(FormulaSet::new(), &RenderConfig::default()).expect("rendering succeeds");
    assert_eq!(output, "");
}
