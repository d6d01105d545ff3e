//! Selector parsing.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! The parser is permissive: unknown bytes are skipped, unterminated
//! forms are closed at end of input, and empty members of a selector
//! group are dropped.

use crate::{Combinator, ComplexSelector, CompoundSelector, SelectorList, SimpleSelector};
use core::mem::take;

/// Byte cursor over selector text.
struct Cursor<'input> {
    bytes: &'input [u8],
    index: usize,
}

impl<'input> Cursor<'input> {
    fn new(input: &'input str) -> Self {
        Self {
            bytes: input.as_bytes(),
            index: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    fn bump(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    /// Consume ASCII whitespace, reporting whether any was present.
    fn eat_whitespace(&mut self) -> bool {
        let start = self.index;
        while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
            self.bump();
        }
        self.index > start
    }

    /// Consume an identifier of ASCII alphanumerics, '-' and '_', lowercased.
    fn eat_ident(&mut self) -> String {
        let start = self.index;
        while self
            .peek()
            .is_some_and(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
        {
            self.bump();
        }
        let slice = self.bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).to_ascii_lowercase()
    }

    /// Consume bytes until `stop`, then step past it. Case is preserved.
    fn eat_until(&mut self, stop: u8) -> String {
        let start = self.index;
        while self.peek().is_some_and(|byte| byte != stop) {
            self.bump();
        }
        let slice = self.bytes.get(start..self.index).unwrap_or(&[]);
        let out = String::from_utf8_lossy(slice).into_owned();
        if self.peek().is_some() {
            self.bump();
        }
        out
    }

    /// Consume an unquoted attribute value until whitespace or ']'.
    fn eat_attr_value(&mut self) -> String {
        let start = self.index;
        while self
            .peek()
            .is_some_and(|byte| !byte.is_ascii_whitespace() && byte != b']')
        {
            self.bump();
        }
        let slice = self.bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).into_owned()
    }
}

fn combinator_for(byte: u8) -> Option<Combinator> {
    match byte {
        b'>' => Some(Combinator::Child),
        b'+' => Some(Combinator::AdjacentSibling),
        b'~' => Some(Combinator::GeneralSibling),
        _ => None,
    }
}

/// Consume one simple selector, or skip one byte that cannot start one.
fn eat_simple(cursor: &mut Cursor<'_>) -> Option<SimpleSelector> {
    match cursor.peek()? {
        b'*' => {
            cursor.bump();
            Some(SimpleSelector::Universal)
        }
        b'.' => {
            cursor.bump();
            Some(SimpleSelector::Class(cursor.eat_ident()))
        }
        b'#' => {
            cursor.bump();
            Some(SimpleSelector::Id(cursor.eat_ident()))
        }
        b'[' => Some(eat_attr(cursor)),
        _ => {
            let ident = cursor.eat_ident();
            if ident.is_empty() {
                cursor.bump();
                None
            } else {
                Some(SimpleSelector::Type(ident))
            }
        }
    }
}

/// Consume an attribute selector: `[name]` or `[name=value]`, with the
/// value optionally quoted.
fn eat_attr(cursor: &mut Cursor<'_>) -> SimpleSelector {
    cursor.bump();
    cursor.eat_whitespace();
    let name = cursor.eat_ident();
    cursor.eat_whitespace();
    let value = if cursor.peek() == Some(b'=') {
        cursor.bump();
        cursor.eat_whitespace();
        let raw = match cursor.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                cursor.bump();
                cursor.eat_until(quote)
            }
            _ => cursor.eat_attr_value(),
        };
        Some(raw)
    } else {
        None
    };
    cursor.eat_whitespace();
    if cursor.peek() == Some(b']') {
        cursor.bump();
    }
    SimpleSelector::Attr { name, value }
}

/// Parse a comma-separated selector group.
pub fn parse_selector_list(input: &str) -> SelectorList {
    let selectors = input
        .split(',')
        .map(str::trim)
        .map(parse_complex_selector)
        .filter(|complex| !complex.subject.simples.is_empty())
        .collect();
    SelectorList { selectors }
}

/// Parse one complex selector into subject plus right-to-left context.
pub fn parse_complex_selector(input: &str) -> ComplexSelector {
    let mut cursor = Cursor::new(input);
    let mut compounds: Vec<CompoundSelector> = Vec::new();
    let mut links: Vec<Combinator> = Vec::new();
    let mut current = CompoundSelector::default();
    let mut pending: Option<Combinator> = None;
    let mut spaced = false;

    loop {
        spaced = cursor.eat_whitespace() || spaced;
        let Some(byte) = cursor.peek() else { break };

        if let Some(explicit) = combinator_for(byte) {
            cursor.bump();
            pending = Some(explicit);
            spaced = false;
            continue;
        }

        // A simple selector starts here; whitespace or an explicit
        // combinator closes the previous compound first.
        if !current.simples.is_empty() && (pending.is_some() || spaced) {
            compounds.push(take(&mut current));
            links.push(pending.take().unwrap_or(Combinator::Descendant));
        }
        pending = None;
        spaced = false;

        if let Some(simple) = eat_simple(&mut cursor) {
            current.simples.push(simple);
        }
    }
    if !current.simples.is_empty() {
        compounds.push(current);
    }

    let Some(subject) = compounds.pop() else {
        return ComplexSelector::default();
    };
    let mut context = Vec::new();
    while let (Some(compound), Some(combinator)) = (compounds.pop(), links.pop()) {
        context.push((combinator, compound));
    }
    ComplexSelector { subject, context }
}
