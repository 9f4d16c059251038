use crate::config::AppConfig;
use crate::engines::generation::GenerationCycleController;
use crate::error::{NameGenError, Result};
use rand::Rng;

/// (keyword, usage, summary)
const COMMANDS: &[(&str, &str, &str)] = &[
    ("newgen", "newgen", "Start over with a fresh random generation"),
    ("select", "select <word|index>", "Keep a word from the current generation for breeding"),
    ("nextgen", "nextgen", "Breed the next generation from the selected words"),
    ("redo", "redo", "Breed the current generation again from the same survivors"),
    ("printgen", "printgen", "Show the current generation"),
    ("set", "set <variable> <value>", "Change a variable, see \"help set\""),
    ("print", "print <variable>", "Show a variable, see \"help print\""),
    ("clear", "clear", "Clear the screen"),
    ("help", "help [command|config]", "Show this help, or details on one topic"),
    ("exit", "exit | quit", "Leave the generator"),
];

pub fn render<R: Rng>(
    controller: &GenerationCycleController<R>,
    topic: Option<&str>,
) -> Result<String> {
    match topic {
        None => Ok(COMMANDS
            .iter()
            .map(|(_, usage, summary)| format!("{:<24} {}", usage, summary))
            .collect::<Vec<_>>()
            .join("\n")),
        Some("set") | Some("print") => {
            Ok(controller.fields().describe(controller.state()))
        }
        Some("config") => Ok(AppConfig::default()
            .manifests()
            .iter()
            .map(|manifest| manifest.render())
            .collect::<Vec<_>>()
            .join("\n")),
        Some(name) => COMMANDS
            .iter()
            .find(|(keyword, _, _)| *keyword == name)
            .map(|(_, usage, summary)| format!("{}\n  {}", usage, summary))
            .ok_or_else(|| NameGenError::InvalidArgument(format!("No help for \"{}\"", name))),
    }
}
