//! Shell word splitting for alias definitions.
//!
//! [`split`] turns a git alias value such as `log --format='%h %s'` into argv
//! words using POSIX shell quoting rules:
//!
//! - Unquoted space, tab and newline separate words.
//! - Outside quotes, a backslash makes the next character literal. A
//!   backslash followed by a newline is a line continuation and is dropped.
//! - Single quotes keep everything literal up to the closing `'`.
//! - Inside double quotes, a backslash only escapes `$`, `` ` ``, `"`, `\`
//!   and newline (dropped). Before any other character it stays literal.
//! - Quoted and unquoted segments that touch form one word, so `''` and
//!   `""` yield an empty word.
//!
//! No expansion of any kind (variables, globs, command substitution) is done.
//!
//! [`quote`] and [`join`] go the other way and render argv as a line a shell
//! would split back into the same words.
//!
//! # Example
//!
//! ```
//! use hubbub::alias::words::split;
//!
//! let words = split(r#"log --format="%h %s" -n\ 5"#).unwrap();
//! assert_eq!(words, vec!["log", "--format=%h %s", "-n 5"]);
//! ```

use thiserror::Error;

/// Why a string could not be split into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unterminated single quote")]
    UnterminatedSingleQuote,
    #[error("unterminated double quote")]
    UnterminatedDoubleQuote,
    #[error("unterminated backslash escape")]
    UnterminatedEscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between words.
    Blank,
    /// Inside an unquoted run of a word.
    Bare,
    Single,
    Double,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Split `input` into words.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut state = State::Blank;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Blank | State::Bare => match c {
                c if is_separator(c) => {
                    if state == State::Bare {
                        words.push(std::mem::take(&mut word));
                        state = State::Blank;
                    }
                }
                '\\' => match chars.next() {
                    Some('\n') => {}
                    Some(escaped) => {
                        word.push(escaped);
                        state = State::Bare;
                    }
                    None => return Err(SplitError::UnterminatedEscape),
                },
                '\'' => state = State::Single,
                '"' => state = State::Double,
                other => {
                    word.push(other);
                    state = State::Bare;
                }
            },
            State::Single => match c {
                '\'' => state = State::Bare,
                other => word.push(other),
            },
            State::Double => match c {
                '"' => state = State::Bare,
                '\\' => match chars.next() {
                    Some('\n') => {}
                    Some(escaped @ ('$' | '`' | '"' | '\\')) => word.push(escaped),
                    Some(other) => {
                        word.push('\\');
                        word.push(other);
                    }
                    None => return Err(SplitError::UnterminatedDoubleQuote),
                },
                other => word.push(other),
            },
        }
    }

    match state {
        State::Single => Err(SplitError::UnterminatedSingleQuote),
        State::Double => Err(SplitError::UnterminatedDoubleQuote),
        State::Bare => {
            words.push(word);
            Ok(words)
        }
        State::Blank => Ok(words),
    }
}

/// Quote a single word so [`split`] returns it unchanged.
pub fn quote(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }

    let plain = word
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        return word.to_string();
    }

    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Render argv as one shell-safe line.
pub fn join<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
