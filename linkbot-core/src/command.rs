//! Command token parsing: `/name[@bot] [args]` at the start of a message.

use serde::{Deserialize, Serialize};

/// Longest command name Telegram accepts.
pub const MAX_COMMAND_LEN: usize = 32;

/// Leading command of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Lower-cased name without the leading `/`.
    pub name: String,
    /// Bot username after `@`, if the command was addressed to a specific bot.
    pub mention: Option<String>,
    /// Text after the command token, trimmed. Handlers ignore it.
    pub args: String,
}

impl ParsedCommand {
    /// True when the command is addressed to `bot_username` or to no bot in particular.
    pub fn is_addressed_to(&self, bot_username: &str) -> bool {
        match &self.mention {
            Some(mention) => mention.eq_ignore_ascii_case(bot_username.trim_start_matches('@')),
            None => true,
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_COMMAND_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parses the leading command token of `text`. Returns None when the text does not start with a valid command.
pub fn parse_command(text: &str) -> Option<ParsedCommand> {
    let rest = text.strip_prefix('/')?;
    let (token, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };
    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) if !mention.is_empty() => (name, Some(mention.to_string())),
        Some(_) => return None,
        None => (token, None),
    };
    if !is_valid_name(name) {
        return None;
    }
    Some(ParsedCommand {
        name: name.to_ascii_lowercase(),
        mention,
        args: args.to_string(),
    })
}
