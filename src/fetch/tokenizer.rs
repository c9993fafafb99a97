//! Statement tokenizer
//!
//! Splits one input line into a colon-separated command path and an
//! optional parenthesized, space-separated data payload.

use heapless::Vec;

use super::error::FetchError;

/// Maximum number of command path tokens per statement.
pub const MAX_COMMAND_TOKENS: usize = 8;

/// Maximum number of data tokens per statement.
pub const MAX_DATA_TOKENS: usize = 50;

/// Maximum accepted line length in bytes. Longer lines are truncated.
pub const MAX_LINE_CHARS: usize = 256;

/// One fully parsed input line.
///
/// Token slices borrow from the caller's line; a statement is consumed
/// by dispatch before the next line is read, and the borrow checker
/// refuses anything that would outlive the line buffer.
#[derive(Debug, Clone, Default)]
pub struct Statement<'a> {
    /// Colon-separated command path, in order.
    pub commands: Vec<&'a str, MAX_COMMAND_TOKENS>,
    /// Space-separated data items from the parenthesized payload.
    pub data: Vec<&'a str, MAX_DATA_TOKENS>,
    /// True if the line carried a `(` payload, even an empty one.
    pub has_data: bool,
}

impl Statement<'_> {
    /// True for a blank line that parsed to nothing.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn strip_token(token: &str) -> &str {
    token.trim_matches(|c: char| c == ' ' || c == '\t')
}

/// Parse one input line into a [`Statement`].
///
/// Grammar: `command (":" command)* [ "(" data (" " data)* ")" ]`.
///
/// Lines longer than [`MAX_LINE_CHARS`] are truncated. The data payload
/// runs from after `(` to the first `)` or end of line; the closing `)`
/// is optional and anything after it is ignored. Command tokens are
/// trimmed of surrounding spaces and tabs; data items split on
/// whitespace runs. Exceeding either token cap discards the whole
/// statement.
pub fn parse_line(line: &str) -> Result<Statement<'_>, FetchError> {
    let line = line.trim_end_matches(['\r', '\n']);

    // Truncate over-long input instead of refusing it. Input is ASCII;
    // back off to a char boundary so a stray UTF-8 line cannot panic.
    let mut end = line.len().min(MAX_LINE_CHARS);
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    let line = &line[..end];

    if line.starts_with(['(', ')']) {
        return Err(FetchError::MissingCommand);
    }

    let (command_part, data_part) = match line.find('(') {
        Some(open) => {
            let rest = &line[open + 1..];
            let data = match rest.find(')') {
                Some(close) => &rest[..close],
                None => rest,
            };
            (&line[..open], Some(data))
        }
        None => (line, None),
    };

    let command_part = strip_token(command_part);

    let mut statement = Statement::default();

    if command_part.is_empty() {
        // A payload without a command path is invalid; a blank line is
        // the valid no-op.
        return match data_part {
            Some(_) => Err(FetchError::MissingCommand),
            None => Ok(statement),
        };
    }

    for token in command_part.split(':') {
        statement
            .commands
            .push(strip_token(token))
            .map_err(|_| FetchError::TooManyTokens)?;
    }

    if let Some(data) = data_part {
        statement.has_data = true;
        for item in data.split_ascii_whitespace() {
            statement
                .data
                .push(item)
                .map_err(|_| FetchError::TooManyTokens)?;
        }
    }

    Ok(statement)
}
