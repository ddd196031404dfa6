//! Lexical context detection
//!
//! Classifies the text immediately before the cursor without parsing the
//! edited source. This is a line-local, best-effort heuristic: it knows
//! nothing about multi-line expressions or the actual type of a receiver,
//! and a bare identifier's class is guessed purely from adjacent text, so
//! it will misidentify receivers that are expressions or variables whose
//! names differ from a catalog class. The builders only ever see the
//! resulting [`Context`], so a real parser could replace this module
//! without touching them.

use once_cell::sync::Lazy;
use regex::Regex;

/// The lexical context at the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// `Identifier.` immediately before the cursor; member lookup
    Dot { class_name: String },

    /// Inside `Identifier.method(`; signature help
    Call {
        class_name: String,
        method_name: String,
        active_parameter: u32,
    },

    /// The cursor sits on a word; `enclosing_class` is the textual guess
    /// for the receiver left of the nearest dot, when there is one
    BareWord {
        word: String,
        enclosing_class: Option<String>,
    },

    /// Nothing recognizable; no suggestions or info
    None,
}

/// `word.` with optional trailing whitespace, ending the prefix
static DOT_CONTEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\.\s*$").unwrap());

/// `word.word(` anywhere in the prefix; the last occurrence wins
static CALL_CONTEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\.(\w+)\s*\(").unwrap());

/// Classify the current line at the given cursor offset (in characters).
///
/// Contexts are tried in order: dot, then call, then bare word. Only the
/// current line is consulted.
pub fn resolve_context(line: &str, cursor: usize) -> Context {
    let chars: Vec<char> = line.chars().collect();
    let cursor = cursor.min(chars.len());
    let prefix: String = chars[..cursor].iter().collect();

    if let Some(caps) = DOT_CONTEXT.captures(&prefix) {
        return Context::Dot {
            class_name: caps[1].to_string(),
        };
    }

    if let Some(caps) = CALL_CONTEXT.captures_iter(&prefix).last() {
        let call_end = caps.get(0).map_or(prefix.len(), |m| m.end());
        // Literal commas between the opening parenthesis and the cursor;
        // nesting and string contents are deliberately ignored
        let active_parameter = prefix[call_end..].matches(',').count() as u32;

        return Context::Call {
            class_name: caps[1].to_string(),
            method_name: caps[2].to_string(),
            active_parameter,
        };
    }

    if let Some(word) = word_at(&chars, cursor) {
        return Context::BareWord {
            enclosing_class: enclosing_class_guess(&chars, cursor),
            word,
        };
    }

    Context::None
}

/// Word characters under the cursor; none when the cursor sits past the
/// end of the line
fn word_at(chars: &[char], cursor: usize) -> Option<String> {
    if cursor >= chars.len() {
        return None;
    }

    let mut start = cursor;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }

    let mut end = cursor;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    if start < end {
        Some(chars[start..end].iter().collect())
    } else {
        None
    }
}

/// Guess the receiver class from the nearest dot at or left of the
/// cursor: the last whitespace-delimited token of the text before it
fn enclosing_class_guess(chars: &[char], cursor: usize) -> Option<String> {
    if chars.is_empty() {
        return None;
    }

    let upto = cursor.min(chars.len() - 1);
    let dot = (0..=upto).rev().find(|&i| chars[i] == '.')?;
    if dot == 0 {
        return None;
    }

    let before: String = chars[..dot].iter().collect();
    before.split_whitespace().last().map(|token| token.to_string())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
