use crate::engines::generation::GenerationCycleController;
use crate::error::Result;
use crate::types::{Command, Reply};
use rand::Rng;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "> ";
pub const WELCOME: &str = "Welcome to the name generator. Type 'help' for commands and usage.";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub fn clear_screen<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "{}", CLEAR_SCREEN)?;
    output.flush()?;
    Ok(())
}

/// Reads commands until `exit` or end of input.
pub fn run<R, I, W>(
    controller: &mut GenerationCycleController<R>,
    mut input: I,
    output: &mut W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let reply = match line.parse::<Command>() {
            Ok(command) => controller.execute(command),
            Err(e) => {
                log::warn!("Rejected input {:?}: {}", line.trim_end(), e);
                Reply::Text(e.to_string())
            }
        };

        match reply {
            Reply::Exit => return Ok(()),
            Reply::ClearScreen => clear_screen(output)?,
            Reply::Text(text) => writeln!(output, "{}", text)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut config = AppConfig::default();
        config.session.seed = Some(12);
        let mut controller = GenerationCycleController::from_config(&config);
        let mut output = Vec::new();
        run(&mut controller, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_stops_at_exit() {
        let output = run_script("set population_size 3\nexit\nprintgen\n");
        assert_eq!(output, "> Set population_size = 3\n> ");
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let output = run_script("print max_length\n");
        assert_eq!(output, "> max_length = 10\n> \n");
    }

    #[test]
    fn test_bad_input_is_reported_and_loop_continues() {
        let output = run_script("select\nprint min_length\nquit\n");
        assert!(output.contains("Invalid argument"));
        assert!(output.contains("min_length = 3"));
    }

    #[test]
    fn test_clear_writes_escape_sequence() {
        let output = run_script("clear\n");
        assert!(output.contains(CLEAR_SCREEN));
    }
}
