use crate::schema::{Schema, Table, TableId};
use crate::Result;

use std::path::Path;
use tracing::debug;

/// Parser states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between tokens at the top level.
    Start,

    /// Inside a quoted key.
    Key,

    /// Inside an entry body or a quoted value. Only scope is tracked here:
    /// column names and types inside the body are skipped, so parsed tables
    /// carry no columns.
    Value,

    /// Gave up. Absorbs the rest of the input.
    Unknown,
}

/// How a parse ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stop {
    /// All input was consumed and the last entry was closed.
    Complete,

    /// Input ran out inside an entry.
    Truncated { state: State, scope: usize },

    /// A character could not be accepted. Nothing after it was read.
    Aborted(Abort),
}

/// Where and why the parser gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abort {
    /// Byte offset of the rejected character.
    pub offset: usize,

    /// 1-based line of the rejected character.
    pub line: usize,

    /// 1-based column (in characters) of the rejected character.
    pub column: usize,

    /// The rejected character.
    pub ch: char,

    /// The state that rejected it.
    pub state: State,
}

/// Tables recovered from a description, and how the parse ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// Tables in the order their keys appeared. They carry no columns.
    pub tables: Vec<Table>,

    pub stop: Stop,
}

impl Parsed {
    pub fn is_complete(&self) -> bool {
        matches!(self.stop, Stop::Complete)
    }

    pub fn abort(&self) -> Option<&Abort> {
        match &self.stop {
            Stop::Aborted(abort) => Some(abort),
            _ => None,
        }
    }

    pub fn into_schema(self) -> Schema {
        Schema {
            tables: self.tables,
        }
    }
}

/// Reads the table list out of a schema description.
///
/// Never fails. Malformed input stops the parse at the first character the
/// machine cannot accept; tables read before that point are returned and
/// [`Parsed::stop`] records the position.
pub fn parse(input: &str) -> Parsed {
    let mut parser = Parser::default();
    let mut line = 1;
    let mut column = 1;

    for (offset, ch) in input.char_indices() {
        if let Step::Abort = parser.step(ch) {
            let abort = Abort {
                offset,
                line,
                column,
                ch,
                state: parser.rejected_in,
            };

            debug!(
                line,
                column,
                state = ?abort.state,
                tables = parser.tables.len(),
                "schema description parse aborted"
            );

            return Parsed {
                tables: parser.tables,
                stop: Stop::Aborted(abort),
            };
        }

        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    let stop = match parser.state {
        State::Start if parser.lhs => Stop::Complete,
        state => Stop::Truncated {
            state,
            scope: parser.scope,
        },
    };

    Parsed {
        tables: parser.tables,
        stop,
    }
}

/// Reads a schema description from a file.
///
/// Only I/O failures are errors; the content itself is parsed as by [`parse`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Parsed> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| crate::Error::from(e).context(err!("reading {}", path.display())))?;
    Ok(parse(&contents))
}

enum Step {
    Continue,
    Abort,
}

struct Parser {
    state: State,

    /// State that rejected the last character, valid after `Step::Abort`.
    rejected_in: State,

    /// Nesting depth of `{`.
    scope: usize,

    /// True while on the left-hand side of a `:`.
    lhs: bool,

    /// True inside a quoted string within a value.
    in_string: bool,

    buffer: String,

    tables: Vec<Table>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::Start,
            rejected_in: State::Start,
            scope: 0,
            lhs: true,
            in_string: false,
            buffer: String::new(),
            tables: vec![],
        }
    }
}

impl Parser {
    fn step(&mut self, ch: char) -> Step {
        match self.state {
            State::Start => self.start(ch),
            State::Key => self.key(ch),
            State::Value => self.value(ch),
            State::Unknown => Step::Abort,
        }
    }

    fn start(&mut self, ch: char) -> Step {
        match ch {
            ch if ch.is_whitespace() => Step::Continue,
            '{' => {
                self.scope += 1;
                self.state = State::Value;
                Step::Continue
            }
            '"' if self.lhs => {
                self.state = State::Key;
                Step::Continue
            }
            '"' => {
                self.in_string = true;
                self.state = State::Value;
                Step::Continue
            }
            ':' => {
                self.lhs = !self.lhs;
                Step::Continue
            }
            _ => self.give_up(),
        }
    }

    fn key(&mut self, ch: char) -> Step {
        match ch {
            ch if ch.is_ascii_alphabetic() || ch == '.' || ch == '_' => {
                self.buffer.push(ch);
                Step::Continue
            }
            '"' if self.scope == 0 => {
                let (schema, name) = match self.buffer.split_once('.') {
                    Some((schema, name)) => (schema, name),
                    None => (self.buffer.as_str(), ""),
                };

                let id = TableId(self.tables.len());
                self.tables.push(Table::new(id, schema, name));
                self.buffer.clear();
                self.state = State::Start;
                Step::Continue
            }
            // Keys below the top level are not read
            '"' => self.give_up(),
            _ => self.give_up(),
        }
    }

    fn value(&mut self, ch: char) -> Step {
        if self.in_string {
            if ch == '"' {
                self.in_string = false;
                if self.scope == 0 {
                    self.close_entry();
                }
            }
            return Step::Continue;
        }

        match ch {
            '"' => self.in_string = true,
            '{' => self.scope += 1,
            '}' => {
                self.scope -= 1;
                if self.scope == 0 {
                    self.close_entry();
                }
            }
            _ => {}
        }

        Step::Continue
    }

    fn close_entry(&mut self) {
        self.state = State::Start;
        self.lhs = true;
    }

    fn give_up(&mut self) -> Step {
        self.rejected_in = self.state;
        self.state = State::Unknown;
        Step::Abort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_flag_resets_after_each_entry() {
        let parsed = parse(r#""a.b" : {} "c.d" : {}"#);
        assert_eq!(parsed.tables.len(), 2);
        assert!(parsed.is_complete());
    }

    #[test]
    fn braces_inside_quoted_values_do_not_change_scope() {
        let parsed = parse(r#""a.b" : { "x" : "}{" } "c.d" : {}"#);
        assert_eq!(parsed.tables.len(), 2);
        assert!(parsed.is_complete());
    }

    #[test]
    fn quoted_top_level_value_closes_entry() {
        let parsed = parse(r#""a.b" : "anything" "c.d" : {}"#);
        assert_eq!(parsed.tables.len(), 2);
        assert!(parsed.is_complete());
    }
}
