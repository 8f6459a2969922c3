//! Predicate library
//!
//! Pure, total string predicates. Character-class checks are regex backed and
//! compiled once when the predicate is built.

use crate::shared::error::{AppError, AppResult};
use regex::Regex;
use serde_json::{Map, Value};

/// Punctuation accepted as a "special character" in passwords
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Character classes understood by the predicate library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Alphanumeric,
    /// Letters, whitespace, hyphens, apostrophes and periods
    NameCharacters,
    /// An explicit set of punctuation characters
    Special(String),
}

impl CharClass {
    /// Body of a regex bracket expression for this class
    fn bracket_body(&self) -> String {
        match self {
            CharClass::Uppercase => "A-Z".to_string(),
            CharClass::Lowercase => "a-z".to_string(),
            CharClass::Digit => "0-9".to_string(),
            CharClass::Alphanumeric => "A-Za-z0-9".to_string(),
            CharClass::NameCharacters => r"A-Za-z\s\-'\.".to_string(),
            CharClass::Special(set) => set.chars().map(|c| regex::escape(&c.to_string())).collect(),
        }
    }

    /// Human-readable description, used by the rules endpoint
    pub fn description(&self) -> String {
        match self {
            CharClass::Uppercase => "uppercase letters".to_string(),
            CharClass::Lowercase => "lowercase letters".to_string(),
            CharClass::Digit => "numbers".to_string(),
            CharClass::Alphanumeric => "letters and numbers".to_string(),
            CharClass::NameCharacters => "letters, spaces, hyphens, apostrophes, periods".to_string(),
            CharClass::Special(set) => set.clone(),
        }
    }
}

/// A pure test over a string
#[derive(Debug, Clone)]
pub enum Predicate {
    MinLength(usize),
    MaxLength(usize),
    /// At least one character of the class is present
    Contains { class: CharClass, pattern: Regex },
    /// Non-empty and every character belongs to the class
    ConsistsOf { class: CharClass, pattern: Regex },
}

impl Predicate {
    pub fn min_length(n: usize) -> Self {
        Predicate::MinLength(n)
    }

    pub fn max_length(n: usize) -> Self {
        Predicate::MaxLength(n)
    }

    pub fn contains(class: CharClass) -> AppResult<Self> {
        let pattern = compile(&format!("[{}]", class.bracket_body()))?;
        Ok(Predicate::Contains { class, pattern })
    }

    pub fn consists_of(class: CharClass) -> AppResult<Self> {
        let pattern = compile(&format!("^[{}]+$", class.bracket_body()))?;
        Ok(Predicate::ConsistsOf { class, pattern })
    }

    pub fn contains_uppercase() -> AppResult<Self> {
        Self::contains(CharClass::Uppercase)
    }

    pub fn contains_lowercase() -> AppResult<Self> {
        Self::contains(CharClass::Lowercase)
    }

    pub fn contains_digit() -> AppResult<Self> {
        Self::contains(CharClass::Digit)
    }

    pub fn contains_special_char(set: &str) -> AppResult<Self> {
        Self::contains(CharClass::Special(set.to_string()))
    }

    pub fn is_alphanumeric_only() -> AppResult<Self> {
        Self::consists_of(CharClass::Alphanumeric)
    }

    /// Evaluate the predicate. Lengths count characters, not bytes.
    pub fn test(&self, value: &str) -> bool {
        match self {
            Predicate::MinLength(n) => value.chars().count() >= *n,
            Predicate::MaxLength(n) => value.chars().count() <= *n,
            Predicate::Contains { pattern, .. } => pattern.is_match(value),
            Predicate::ConsistsOf { pattern, .. } => pattern.is_match(value),
        }
    }

    /// Record this predicate's threshold into a rules description
    pub fn describe_into(&self, out: &mut Map<String, Value>) {
        match self {
            Predicate::MinLength(n) => {
                out.insert("min_length".to_string(), Value::from(*n));
            }
            Predicate::MaxLength(n) => {
                out.insert("max_length".to_string(), Value::from(*n));
            }
            Predicate::Contains { class, .. } => {
                let key = match class {
                    CharClass::Uppercase => "requires_uppercase",
                    CharClass::Lowercase => "requires_lowercase",
                    CharClass::Digit => "requires_number",
                    CharClass::Special(set) => {
                        out.insert("special_characters".to_string(), Value::from(set.as_str()));
                        "requires_special_char"
                    }
                    CharClass::Alphanumeric => "requires_alphanumeric",
                    CharClass::NameCharacters => "requires_name_character",
                };
                out.insert(key.to_string(), Value::Bool(true));
            }
            Predicate::ConsistsOf { class, .. } => match class {
                CharClass::Alphanumeric => {
                    out.insert("alphanumeric_only".to_string(), Value::Bool(true));
                }
                other => {
                    out.insert("allowed_characters".to_string(), Value::from(other.description()));
                }
            },
        }
    }
}

fn compile(pattern: &str) -> AppResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| AppError::Internal(format!("Invalid predicate pattern {}: {}", pattern, e)))
}
