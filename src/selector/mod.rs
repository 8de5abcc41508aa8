//! State selector strings: `<typeIdentifier>[field=value,...]`.
//!
//! Selectors key configured visual resources to concrete persisted
//! states. Parsing happens once at load time and is fallible; nothing in
//! the runtime hooks depends on it.
//!
//! # Example
//!
//! ```rust
//! use hinge::core::{Direction, GateState};
//! use hinge::selector::StateSelector;
//!
//! let selector = StateSelector::parse("mymod:oak_gate[facing=east,open=true]").unwrap();
//! assert_eq!(selector.block_id, "mymod:oak_gate");
//!
//! let state = selector.apply("mymod:oak_gate", GateState::default()).unwrap();
//! assert_eq!(state, GateState::new(Direction::East).with_open(true));
//! ```

mod error;

pub use error::SelectorError;

use crate::core::BlockState;
use std::collections::HashSet;
use std::fmt;

/// A parsed selector: the block it names and its field assignments in
/// source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSelector {
    pub block_id: String,
    pub properties: Vec<(String, String)>,
}

impl StateSelector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut parser = Parser::new(input);
        let selector = parser.selector()?;
        parser.skip_whitespace();
        parser.end()?;
        Ok(selector)
    }

    /// Build and parse `<block_id>[<tag>]`.
    pub fn for_tag(block_id: &str, tag: &str) -> Result<Self, SelectorError> {
        Self::parse(&format!("{block_id}[{tag}]"))
    }

    /// Apply the assignments onto `default`. Fields not mentioned keep
    /// their default value.
    pub fn apply<S: BlockState>(&self, block_id: &str, default: S) -> Result<S, SelectorError> {
        if self.block_id != block_id {
            return Err(SelectorError::WrongBlock {
                expected: block_id.to_string(),
                found: self.block_id.clone(),
            });
        }

        let mut seen = HashSet::new();
        let mut state = default;
        for (field, value) in &self.properties {
            if !seen.insert(field.as_str()) {
                return Err(SelectorError::DuplicateProperty {
                    field: field.clone(),
                });
            }
            state = state.with(field, value)?;
        }
        Ok(state)
    }
}

impl fmt::Display for StateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.block_id)?;
        for (i, (field, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}={value}")?;
        }
        f.write_str("]")
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
}

/// Recursive-descent parser over the selector grammar:
///
/// ```text
/// selector   := identifier ( '[' properties? ']' )?
/// properties := property ( ',' property )*
/// property   := name '=' name
/// ```
struct Parser<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.offset += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, wanted: char, expected: &'static str) -> Result<(), SelectorError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == wanted => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(SelectorError::Unexpected {
                expected,
                found,
                offset: self.offset,
            }),
            None => Err(SelectorError::UnexpectedEnd {
                expected,
                offset: self.offset,
            }),
        }
    }

    fn end(&self) -> Result<(), SelectorError> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(SelectorError::Unexpected {
                expected: "end of input",
                found,
                offset: self.offset,
            }),
        }
    }

    fn take_while(
        &mut self,
        accept: fn(char) -> bool,
        expected: &'static str,
    ) -> Result<&'a str, SelectorError> {
        self.skip_whitespace();
        let start = self.offset;
        while self.peek().is_some_and(accept) {
            self.bump();
        }
        if self.offset > start {
            return Ok(&self.input[start..self.offset]);
        }
        match self.peek() {
            Some(found) => Err(SelectorError::Unexpected {
                expected,
                found,
                offset: self.offset,
            }),
            None => Err(SelectorError::UnexpectedEnd {
                expected,
                offset: self.offset,
            }),
        }
    }

    fn selector(&mut self) -> Result<StateSelector, SelectorError> {
        let block_id = self.take_while(is_id_char, "block identifier")?.to_string();
        self.skip_whitespace();

        let mut properties = Vec::new();
        if self.peek() == Some('[') {
            self.bump();
            self.skip_whitespace();
            if self.peek() != Some(']') {
                self.properties(&mut properties)?;
            }
            self.expect(']', "',' or ']'")?;
        }
        Ok(StateSelector {
            block_id,
            properties,
        })
    }

    fn properties(&mut self, out: &mut Vec<(String, String)>) -> Result<(), SelectorError> {
        out.push(self.property()?);
        self.skip_whitespace();
        if self.peek() == Some(',') {
            self.bump();
            self.properties(out)?;
        }
        Ok(())
    }

    fn property(&mut self) -> Result<(String, String), SelectorError> {
        let field = self.take_while(is_name_char, "property name")?.to_string();
        self.expect('=', "'='")?;
        let value = self.take_while(is_name_char, "property value")?.to_string();
        Ok((field, value))
    }
}
