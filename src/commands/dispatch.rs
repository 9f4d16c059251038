use super::help;
use crate::engines::generation::GenerationCycleController;
use crate::error::Result;
use crate::types::{Command, Reply};
use rand::Rng;

impl<R: Rng> GenerationCycleController<R> {
    /// Runs one command. Failures come back as their message text.
    pub fn execute(&mut self, command: Command) -> Reply {
        match self.try_execute(command) {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("Command failed: {}", e);
                Reply::Text(e.to_string())
            }
        }
    }

    pub fn try_execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::Null => Reply::Text(String::new()),
            Command::Exit => Reply::Exit,
            Command::Clear => Reply::ClearScreen,
            Command::NewGen => {
                self.initialize_population()?;
                Reply::Text(self.list_population())
            }
            Command::Select(token) => {
                let chosen = self.select(&token)?;
                Reply::Text(format!("Selected \"{}\"", chosen))
            }
            Command::NextGen => {
                self.advance_generation()?;
                Reply::Text(self.list_population())
            }
            Command::PrintGen => Reply::Text(self.list_population()),
            Command::Set { name, value } => {
                let value = self.set_field(&name, &value)?;
                Reply::Text(format!("Set {} = {}", name, value))
            }
            Command::Print(name) => {
                let value = self.get_field(&name)?;
                Reply::Text(format!("{} = {}", name, value))
            }
            Command::Redo => {
                self.redo()?;
                Reply::Text(self.list_population())
            }
            Command::Help(topic) => Reply::Text(help::render(self, topic.as_deref())?),
        };
        Ok(reply)
    }
}
