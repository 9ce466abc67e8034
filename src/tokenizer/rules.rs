use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Ordered pattern lists for one language. List order is the tie-break:
/// when several patterns in a category could anchor at the same offset,
/// the first listed wins.
#[derive(Debug, Clone)]
pub struct LanguageRules {
    pub name: &'static str,
    pub skippable: Vec<&'static str>,
    pub operators: Vec<&'static str>,
    pub operands: Vec<&'static str>,
}

lazy_static! {
    pub static ref RULESETS: HashMap<&'static str, LanguageRules> = {
        let mut map = HashMap::new();
        map.insert(
            "cpp",
            LanguageRules {
                name: "cpp",
                skippable: vec![r"\/\/.*", r"\/\*[\s\S]*?\*\/", r"\s+"],
                operators: vec![
                    // a whole #include directive or call expression counts
                    // as a single operator
                    r"#include\s*<[^>]+>",
                    r"\b\w+\s*\([^)]*\)",
                    r"[-+*/=<>!&|^%]=?",
                    r"\+\+|--",
                    r"&&|\|\|",
                    r"\b(if|else|while|for|do|switch|case|break|continue|return|new|delete)\b",
                    r"\b(class|struct|namespace|public|private|protected)\b",
                    r"<<|>>",
                    r"::|->|\.|::",
                    r"\[\]",
                ],
                operands: vec![
                    r#""[^"]*""#,
                    r"'[^']*'",
                    r"\b\d+(\.\d+)?\b",
                    r"\b[a-zA-Z_]\w*\b",
                    r"\btrue\b|\bfalse\b",
                    r"\bnullptr\b",
                ],
            },
        );
        map.insert(
            "java",
            LanguageRules {
                name: "java",
                skippable: vec![r"\/\/.*", r"\/\*[\s\S]*?\*\/", r"\s+"],
                operators: vec![
                    r"[{}()]",
                    r"[;,:]",
                    r"\baspect\b|\bpointcut\b|\bexecution\b|\bbefore\b",
                    r"\bthisJoinPoint\b",
                    r"\b\w+\s*\([^)]*\)",
                    r"[-+*/=<>!&|^%]=?",
                    r"\+\+|--",
                    r"&&|\|\|",
                    r"\b(if|else|while|for|do|switch|case|break|continue|return|new)\b",
                    r"\b(class|interface|extends|implements|public|private|protected)\b",
                    r"\b(try|catch|finally|throw|throws)\b",
                    r"->|\.|@",
                    r"\[\]",
                ],
                operands: vec![
                    r#""[^"]*""#,
                    r"'[^']*'",
                    r"\b\d+(\.\d+)?\b",
                    r"\b[a-zA-Z_]\w*\b",
                    r"\btrue\b|\bfalse\b",
                    r"\bnull\b",
                ],
            },
        );
        map.insert(
            "python",
            LanguageRules {
                name: "python",
                skippable: vec![r"#.*", r"'''[\s\S]*?'''", r#""""[\s\S]*?""""#, r"\s+"],
                operators: vec![
                    r"\bimport\b|\bfrom\b",
                    r"\b\w+\s*\([^)]*\)",
                    r"[-+*/=<>!&|^%]=?",
                    r"\*\*",
                    r"and|or|not",
                    r"\b(if|elif|else|while|for|in|break|continue|return|def|class)\b",
                    r"\b(try|except|finally|raise|with|as)\b",
                    r"\.|@",
                    r"\[\]",
                    r":\s*$",
                ],
                operands: vec![
                    r#""[^"]*"|'[^']*'"#,
                    r"\b\d+(\.\d+)?\b",
                    r"\b[a-zA-Z_]\w*\b",
                    r"\bTrue\b|\bFalse\b",
                    r"\bNone\b",
                ],
            },
        );
        map
    };
}

pub fn rules_for(language: &str) -> Result<&'static LanguageRules, Error> {
    match RULESETS.get(language) {
        Some(rules) => Ok(rules),
        None => Err(Error::new(
            ErrorImpl::UnsupportedLanguage {
                language: String::from(language),
            },
            Position::null(),
        )),
    }
}
