use std::fmt;
use std::iter::Peekable;
use std::slice::Iter;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::expr::{BinaryOperator, Expr, Formula, FormulaSet};
use crate::symbols::{Variable, VariableSet};

lazy_static! {
    static ref TOKENIZER: Regex = Regex::new(
        r"(?P<symbol><=>|=>|&&|\|\||\^|!|¬|∧|∨|⊕|⊻|⇒|⇔)|(?P<identifier>[A-Za-z])|(?P<open>\()|(?P<close>\))|(?P<comma>,)|(?P<space>\s+)|(?P<other>.)"
    )
    .expect("tokenizer regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Var(Variable),
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
    OpenParen,
    CloseParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(v) => write!(f, "identifier '{v}'"),
            Self::Not => write!(f, "'!'"),
            Self::And => write!(f, "'&&'"),
            Self::Or => write!(f, "'||'"),
            Self::Xor => write!(f, "'^'"),
            Self::Implies => write!(f, "'=>'"),
            Self::Iff => write!(f, "'<=>'"),
            Self::OpenParen => write!(f, "'('"),
            Self::CloseParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
        }
    }
}

/// A token and the 1-based column it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub column: usize,
}

type TokenReader<'a> = Peekable<Iter<'a, Spanned>>;

/// Split one line of input into tokens.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>> {
    let mut result = Vec::new();

    for c in TOKENIZER.captures_iter(src) {
        let Some(whole) = c.get(0) else { continue };
        let column = src[..whole.start()].chars().count() + 1;

        let token = if let Some(symbol) = c.name("symbol") {
            match symbol.as_str() {
                "!" | "¬" => Token::Not,
                "&&" | "∧" => Token::And,
                "||" | "∨" => Token::Or,
                "^" | "⊕" | "⊻" => Token::Xor,
                "=>" | "⇒" => Token::Implies,
                "<=>" | "⇔" => Token::Iff,
                other => unreachable!("tokenizer matched unknown symbol {other}"),
            }
        } else if let Some(identifier) = c.name("identifier") {
            let ch = identifier.as_str().chars().next().unwrap_or_default();
            Token::Var(Variable::try_from(ch)?)
        } else if c.name("open").is_some() {
            Token::OpenParen
        } else if c.name("close").is_some() {
            Token::CloseParen
        } else if c.name("comma").is_some() {
            Token::Comma
        } else if c.name("space").is_some() {
            continue;
        } else {
            let ch = whole.as_str().chars().next().unwrap_or_default();
            return Err(Error::InvalidCharacter { ch, column });
        };

        result.push(Spanned { token, column });
    }

    log::trace!("tokenized {src:?} into {} tokens", result.len());

    Ok(result)
}

/// Parse a comma separated list of formulae.
pub fn parse_formulas(src: &str) -> Result<FormulaSet> {
    let tokens = tokenize(src)?;
    let mut tokens = tokens.iter().peekable();
    let mut set = FormulaSet::new();

    loop {
        set.push(parse_formula(&mut tokens)?);

        match tokens.next() {
            None => return Ok(set),
            Some(Spanned {
                token: Token::Comma,
                ..
            }) => continue,
            Some(other) => return Err(unexpected(other, "',' or end of input")),
        }
    }
}

/// Parse exactly one formula.
pub fn parse(src: &str) -> Result<Formula> {
    let tokens = tokenize(src)?;
    let mut tokens = tokens.iter().peekable();
    let formula = parse_formula(&mut tokens)?;

    match tokens.next() {
        None => Ok(formula),
        Some(other) => Err(unexpected(other, "end of input")),
    }
}

fn parse_formula(tokens: &mut TokenReader) -> Result<Formula> {
    let mut parser = Parser {
        tokens,
        vars: VariableSet::empty(),
    };
    let expr = parser.parse_iff()?;

    Ok(Formula::with_vars(expr, parser.vars))
}

fn unexpected(found: &Spanned, expected: &'static str) -> Error {
    Error::UnexpectedToken {
        found: found.token.to_string(),
        expected,
        column: found.column,
    }
}

struct Parser<'a, 'b> {
    tokens: &'a mut TokenReader<'b>,
    vars: VariableSet,
}

impl Parser<'_, '_> {
    fn peek(&mut self) -> Option<Token> {
        self.tokens.peek().map(|t| t.token)
    }

    fn accept(&mut self, token: Token) -> bool {
        if self.peek() == Some(token) {
            self.tokens.next();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<()> {
        match self.tokens.next() {
            Some(t) if t.token == token => Ok(()),
            Some(t) => Err(unexpected(t, expected)),
            None => Err(Error::UnexpectedEnd { expected }),
        }
    }

    // a <=> b <=> c == ((a <=> b) <=> c)
    fn parse_iff(&mut self) -> Result<Expr> {
        let mut left = self.parse_implies()?;
        while self.accept(Token::Iff) {
            let right = self.parse_implies()?;
            left = Expr::iff(left, right);
        }
        Ok(left)
    }

    // a => b => c == (a => (b => c))
    fn parse_implies(&mut self) -> Result<Expr> {
        let left = self.parse_left_assoc(0)?;
        if self.accept(Token::Implies) {
            let right = self.parse_implies()?;
            return Ok(Expr::implies(left, right));
        }
        Ok(left)
    }

    // or, xor, and: loosest first
    fn parse_left_assoc(&mut self, level: usize) -> Result<Expr> {
        const LEVELS: [(Token, BinaryOperator); 3] = [
            (Token::Or, BinaryOperator::Or),
            (Token::Xor, BinaryOperator::Xor),
            (Token::And, BinaryOperator::And),
        ];

        let Some(&(token, op)) = LEVELS.get(level) else {
            return self.parse_unary();
        };

        let mut left = self.parse_left_assoc(level + 1)?;
        while self.accept(token) {
            let right = self.parse_left_assoc(level + 1)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        const EXPECTED: &str = "an identifier, '!' or '('";

        match self.tokens.next() {
            Some(Spanned {
                token: Token::Var(v),
                ..
            }) => {
                self.vars.insert(*v);
                Ok(Expr::var(*v))
            }
            Some(Spanned {
                token: Token::Not, ..
            }) => Ok(Expr::not(self.parse_unary()?)),
            Some(Spanned {
                token: Token::OpenParen,
                ..
            }) => {
                let inner = self.parse_iff()?;
                self.expect(Token::CloseParen, "')'")?;
                Ok(Expr::paren(inner))
            }
            Some(other) => Err(unexpected(other, EXPECTED)),
            None => Err(Error::UnexpectedEnd { expected: EXPECTED }),
        }
    }
}

// syntax:
// A
// !A
// A && B
// A || B
// A ^ B
// A => B
// A <=> B
// (A && B) || c
// A => B => C == (A => (B => C))
// A && B, A || B   (two formulae, one table)
