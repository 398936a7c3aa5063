//! Line-based prompting over any reader/writer pair

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompts on `output`, reads answers from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `clear` controls whether `clear_screen` actually wipes the terminal
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    /// Print a line
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Show `prompt` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is yes/y or no/n. End of input counts as no.
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("Invalid response. Please answer with 'yes', 'no', 'y', or 'n'.")?,
            }
        }
    }

    /// Wait for Enter
    pub fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.ask(prompt).map(|_| ())
    }

    /// Wipe the terminal so earlier output can't be read by the next person
    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    pub(crate) fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    pub(crate) fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut c = console("  Alice  \n");
        assert_eq!(c.ask("Name: ").unwrap().as_deref(), Some("Alice"));
        assert_eq!(c.ask("Name: ").unwrap(), None);
        assert_eq!(transcript(c), "Name: Name: ");
    }

    #[test]
    fn test_yes_no_accepts_short_forms() {
        let mut c = console("Y\nn\nYES\n");
        assert!(c.ask_yes_no("? ").unwrap());
        assert!(!c.ask_yes_no("? ").unwrap());
        assert!(c.ask_yes_no("? ").unwrap());
    }

    #[test]
    fn test_yes_no_reprompts_on_garbage() {
        let mut c = console("maybe\nno\n");
        assert!(!c.ask_yes_no("Continue? ").unwrap());
        let out = transcript(c);
        assert_eq!(out.matches("Continue? ").count(), 2);
        assert!(out.contains("Invalid response."));
    }

    #[test]
    fn test_yes_no_eof_is_no() {
        let mut c = console("");
        assert!(!c.ask_yes_no("? ").unwrap());
    }

    #[test]
    fn test_clear_screen_writes_escape_only_when_enabled() {
        let mut quiet = console("");
        quiet.clear_screen().unwrap();
        assert!(transcript(quiet).is_empty());

        let mut loud = Console::new(Cursor::new(Vec::new()), Vec::new(), true);
        loud.clear_screen().unwrap();
        assert!(!loud.into_output().is_empty());
    }
}
