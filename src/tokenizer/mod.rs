//! Lexical analysis module for the analyzer.
//!
//! This module contains the tokenizer that converts source code into a
//! flat stream of operator and operand tokens. It handles:
//!
//! - Tokenization of source code using per-language regex rule tables
//! - Classification of matches into operator and operand tokens
//! - Skipping of whitespace and comments
//! - Fatal reporting of unrecognised input with its byte offset
//!
//! Rulesets are looked up by language key; scanning with an unregistered
//! key fails before any input is consumed.

pub mod rules;
pub mod tokenizer;
pub mod tokens;
