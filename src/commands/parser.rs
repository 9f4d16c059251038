use crate::error::{NameGenError, Result};
use crate::types::Command;
use std::str::FromStr;

impl FromStr for Command {
    type Err = NameGenError;

    /// First word picks the command, the following words are its arguments.
    /// Unknown words parse to `Command::Null`; missing arguments are an
    /// error and extra ones are ignored.
    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(Command::Null);
        };

        let mut argument = |what: &str| {
            words.next().map(str::to_string).ok_or_else(|| {
                NameGenError::InvalidArgument(format!("\"{}\" expects {}", keyword, what))
            })
        };

        Ok(match keyword {
            "quit" | "exit" => Command::Exit,
            "clear" => Command::Clear,
            "newgen" => Command::NewGen,
            "select" => Command::Select(argument("a word or an index")?),
            "nextgen" => Command::NextGen,
            "printgen" => Command::PrintGen,
            "set" => {
                let name = argument("a variable name and a value")?;
                let value = argument("a variable name and a value")?;
                Command::Set { name, value }
            }
            "print" => Command::Print(argument("a variable name")?),
            "redo" => Command::Redo,
            "help" => Command::Help(argument("a topic").ok()),
            _ => Command::Null,
        })
    }
}
