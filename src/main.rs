use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use truthtab::parser::parse_formulas;
use truthtab::{render, BoolStyle, RenderConfig, TableStyle};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the truth tables of boolean formulae", long_about = None)]
struct Args {
    #[clap(
        short,
        long,
        value_parser,
        value_name = "STYLE",
        default_value = "binary",
        env = "TRUTHTAB_BOOL_STYLE"
    )]
    /// Glyphs for truth values: alpha, binary or symbols
    bool_style: BoolStyle,

    #[clap(short, long, value_parser, value_name = "STYLE", env = "TRUTHTAB_TABLE_STYLE")]
    /// Table style: plain, unicode or latex (derived from the locale if not provided)
    table_style: Option<TableStyle>,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Print more diagnostics, repeat for more detail
    verbose: u8,

    #[clap(value_parser, value_name = "FILE")]
    /// Input files with one comma separated list of formulae per line ('-' reads stdin)
    files: Vec<PathBuf>,
}

/// Whether the locale selects a UTF-8 codeset.
fn locale_is_utf8() -> bool {
    locale_is_utf8_with(|key| env::var(key).ok())
}

/// The first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG` decides.
fn locale_is_utf8_with<F: Fn(&str) -> Option<String>>(lookup: F) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|value| !value.is_empty())
        .map(|value| {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        })
        .unwrap_or(false)
}

struct Session<W: Write> {
    out: W,
    config: RenderConfig,
    tables: usize,
    failed: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Abort,
}

impl<W: Write> Session<W> {
    fn process<R: BufRead>(&mut self, mut reader: R, name: &str, interactive: bool) -> anyhow::Result<Flow> {
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            if reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("could not read {name}"))?
                == 0
            {
                return Ok(Flow::Continue);
            }
            number += 1;

            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_formulas(line).map_err(anyhow::Error::from),
                Err(e) => Err(anyhow::anyhow!("invalid UTF-8: {e}")),
            };

            let formulas = match parsed {
                Ok(formulas) => formulas,
                Err(e) => {
                    log::error!("{name}:{number}: {e}");
                    self.failed = true;
                    if interactive {
                        continue;
                    }
                    return Ok(Flow::Abort);
                }
            };

            if self.tables > 0 {
                writeln!(self.out)?;
            }
            render(&mut self.out, formulas, &self.config)?;
            self.out.flush()?;
            self.tables += 1;
        }
    }

    fn process_path(&mut self, path: &Path) -> anyhow::Result<Flow> {
        if path == Path::new("-") {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            return self.process(stdin.lock(), "-", interactive);
        }

        let name = path.display().to_string();
        match File::open(path) {
            Ok(file) => self.process(BufReader::new(file), &name, false),
            Err(e) => {
                log::error!("{name}: {e}");
                self.failed = true;
                Ok(Flow::Continue)
            }
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = argfile::expand_args_from(wild::args_os(), argfile::parse_fromfile, argfile::PREFIX)
        .context("could not expand argument files")?;
    let args = Args::parse_from(args);

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let table_style = args.table_style.unwrap_or_else(|| {
        if locale_is_utf8() {
            TableStyle::Unicode
        } else {
            TableStyle::Plain
        }
    });
    log::info!("table style {table_style}, bool style {}", args.bool_style);

    let mut session = Session {
        out: io::stdout().lock(),
        config: RenderConfig::new(table_style, args.bool_style),
        tables: 0,
        failed: false,
    };

    let files = if args.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.files
    };

    for path in &files {
        if let Flow::Abort = session.process_path(path)? {
            break;
        }
    }

    Ok(if session.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    const TABLE_A: &str = "A | A\n--+--\n0 | 0\n1 | 1\n";
    const TABLE_B: &str = "B | B\n--+--\n0 | 0\n1 | 1\n";

    fn session() -> Session<Vec<u8>> {
        Session {
            out: Vec::new(),
            config: RenderConfig::default(),
            tables: 0,
            failed: false,
        }
    }

    fn output(session: &Session<Vec<u8>>) -> String {
        String::from_utf8(session.out.clone()).expect("tables are valid UTF-8")
    }

    #[test]
    fn tables_are_separated_by_one_blank_line() {
        let mut session = session();
        let flow = session.process(&b"A\n\n   \nB\n"[..], "-", false).expect("no io error");

        assert_eq!(flow, Flow::Continue);
        assert!(!session.failed);
        assert_eq!(output(&session), format!("{TABLE_A}\n{TABLE_B}"));
    }

    #[test]
    fn interactive_input_skips_bad_lines() {
        let mut session = session();
        let flow = session
            .process(&b"A\nA &&\n\xff\xfe\nB"[..], "-", true)
            .expect("no io error");

        assert_eq!(flow, Flow::Continue);
        assert!(session.failed);
        assert_eq!(session.tables, 2);
        assert_eq!(output(&session), format!("{TABLE_A}\n{TABLE_B}"));
    }

    #[test]
    fn file_input_stops_at_first_bad_line() {
        let mut session = session();
        let flow = session.process(&b"A\n(A\nB\n"[..], "input.txt", false).expect("no io error");

        assert_eq!(flow, Flow::Abort);
        assert!(session.failed);
        assert_eq!(output(&session), TABLE_A);
    }

    #[test]
    fn invalid_utf8_aborts_file_input() {
        let mut session = session();
        let flow = session.process(&b"\xff\nB\n"[..], "input.txt", false).expect("no io error");

        assert_eq!(flow, Flow::Abort);
        assert!(session.failed);
        assert_eq!(output(&session), "");
    }

    #[test]
    fn missing_file_marks_failure() {
        let mut session = session();
        let flow = session
            .process_path(Path::new("tests/data/does-not-exist.txt"))
            .expect("no io error");

        assert_eq!(flow, Flow::Continue);
        assert!(session.failed);
        assert_eq!(output(&session), "");
    }

    fn locale(vars: &[(&str, &str)]) -> bool {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        locale_is_utf8_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn locale_detection() {
        assert!(!locale(&[]));
        assert!(locale(&[("LANG", "en_US.UTF-8")]));
        assert!(locale(&[("LANG", "nl_NL.utf8")]));
        assert!(!locale(&[("LANG", "C")]));
        assert!(!locale(&[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")]));
        assert!(locale(&[("LC_CTYPE", "C.UTF-8"), ("LANG", "C")]));
        assert!(!locale(&[("LC_ALL", ""), ("LC_CTYPE", "POSIX"), ("LANG", "en_US.UTF-8")]));
        assert!(locale(&[("LC_ALL", ""), ("LANG", "en_US.UTF-8")]));
    }
}
