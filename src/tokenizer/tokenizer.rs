use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    rules::{rules_for, LanguageRules},
    tokens::{Token, TokenKind},
};

pub type RegexHandler = fn(&mut Lexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, rules: &LanguageRules, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<source>"))
        };

        // Skippable patterns come first so whitespace and comments always
        // outrank an operator or operand match at the same offset.
        let mut patterns = vec![];

        for pattern in &rules.skippable {
            patterns.push(RegexPattern {
                regex: Regex::new(pattern).unwrap(),
                handler: skip_handler,
            });
        }

        for pattern in &rules.operators {
            patterns.push(RegexPattern {
                regex: Regex::new(pattern).unwrap(),
                handler: operator_handler,
            });
        }

        for pattern in &rules.operands {
            patterns.push(RegexPattern {
                regex: Regex::new(pattern).unwrap(),
                handler: operand_handler,
            });
        }

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns,
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Operator, matched));
}

fn operand_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Operand, matched));
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

pub fn tokenize(source: String, language: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let rules = rules_for(language)?;

    tokenize_with_rules(source, rules, file)
}

pub fn tokenize_with_rules(
    source: String,
    rules: &LanguageRules,
    file: Option<String>,
) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, rules, file);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            // The match must anchor at the cursor, and a zero-length match
            // is never taken: the cursor has to advance on every step.
            if let Some(found) = match_here {
                if found.start() == 0 && !found.is_empty() {
                    (pattern.handler)(&mut lex, &pattern.regex);
                    matched = true;
                    break;
                }
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    Ok(lex.tokens)
}
