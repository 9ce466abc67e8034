use std::collections::HashSet;
use std::fmt::Display;

use crate::tokenizer::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Default)]
pub struct Halstead {
    pub distinct_operators: usize,
    pub distinct_operands: usize,
    pub total_operators: usize,
    pub total_operands: usize,

    pub vocabulary: usize,
    pub length: usize,
    pub estimated_length: f64,
    pub volume: f64,
    pub difficulty: f64,
    pub effort: f64,
    pub time: f64,
    pub bugs: f64,
}

impl Halstead {
    pub fn from_tokens(tokens: &[Token]) -> Halstead {
        let mut operators = HashSet::new();
        let mut operands = HashSet::new();
        let mut metrics = Halstead::default();

        for token in tokens {
            match token.kind {
                TokenKind::Operator => {
                    operators.insert(token.value.as_str());
                    metrics.total_operators += 1;
                }
                TokenKind::Operand => {
                    operands.insert(token.value.as_str());
                    metrics.total_operands += 1;
                }
            }
        }

        metrics.distinct_operators = operators.len();
        metrics.distinct_operands = operands.len();
        metrics.calculate();

        metrics
    }

    fn calculate(&mut self) {
        self.vocabulary = self.distinct_operators + self.distinct_operands;
        self.length = self.total_operators + self.total_operands;

        self.estimated_length =
            self.distinct_operators as f64 * (self.distinct_operands as f64 / 2.0);

        // An empty vocabulary would drive log2 and the operand ratio to
        // NaN; the derived measures stay at zero instead.
        if self.vocabulary > 0 {
            self.volume = self.vocabulary as f64 * (self.vocabulary as f64).log2();
        }

        if self.distinct_operands > 0 {
            self.difficulty = (self.distinct_operators as f64 / 2.0)
                * (self.total_operands as f64 / self.distinct_operands as f64);
        }

        self.effort = self.difficulty * self.volume;
        self.time = self.effort / 18.0; // Stroud number: discriminations per second
        self.bugs = self.volume / 3000.0; // average volume per delivered bug
    }
}

impl Display for Halstead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "--------------------- Halstead Metrics ---------------------"
        )?;
        writeln!(
            f,
            "Number of distinct operators \t(N1): {}",
            self.distinct_operators
        )?;
        writeln!(
            f,
            "Number of distinct operands \t(N2): {}",
            self.distinct_operands
        )?;
        writeln!(
            f,
            "Total number of operators \t(n1): {}",
            self.total_operators
        )?;
        writeln!(
            f,
            "Total number of operands \t(n2): {}",
            self.total_operands
        )?;
        writeln!(f, "Program vocabulary \t\t(N): {}", self.vocabulary)?;
        writeln!(f, "Program length \t\t\t(n): {}", self.length)?;
        writeln!(
            f,
            "Calculated program length \t(Np): {:.2}",
            self.estimated_length
        )?;
        writeln!(f, "Calculated program volume \t(V): {:.2}", self.volume)?;
        writeln!(
            f,
            "Calculated program difficulty \t(D): {:.2}",
            self.difficulty
        )?;
        writeln!(f, "Calculated program effort \t(E): {:.2}", self.effort)?;
        writeln!(f, "Calculated program time \t(T): {:.2}", self.time)?;
        writeln!(f, "Calculated program bugs \t(B): {:.2}", self.bugs)?;
        write!(
            f,
            "------------------------------------------------------------"
        )
    }
}
