// Terminal I/O used by the menu. The trait keeps the menu flow independent
// of the real terminal so it can be driven by scripted input.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{style, Stylize};
use crossterm::terminal::{Clear, ClearType};
use dialoguer::Input;
use std::io::{self, Write};

pub trait Console {
    /// Clear the screen and move the cursor to the top-left corner.
    fn clear(&mut self) -> io::Result<()>;

    fn say(&mut self, line: &str);

    fn error(&mut self, line: &str) {
        self.say(line);
    }

    /// Prompt for one line of free text. Empty answers are allowed.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Block until the user acknowledges with Enter.
    fn pause(&mut self) -> io::Result<()>;
}

/// Console backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn error(&mut self, line: &str) {
        println!("{}", style(line).red());
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    fn pause(&mut self) -> io::Result<()> {
        print!("\nPress Enter to continue...");
        io::stdout().flush()?;
        let mut line = String::new();
        // EOF means stdin is gone; treat it as an error so the menu stops.
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Console;
    use std::collections::VecDeque;
    use std::io;

    /// Replays canned answers and records everything shown.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        answers: VecDeque<String>,
        pub output: Vec<String>,
        pub prompts: Vec<String>,
        pub clears: usize,
        pub pauses: usize,
    }

    impl ScriptedConsole {
        pub fn new(answers: &[&str]) -> Self {
            ScriptedConsole {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn printed(&self) -> String {
            self.output.join("\n")
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Console for ScriptedConsole {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn say(&mut self, line: &str) {
            self.output.push(line.to_string());
        }

        fn ask(&mut self, prompt: &str) -> io::Result<String> {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn pause(&mut self) -> io::Result<()> {
            self.pauses += 1;
            Ok(())
        }
    }
}
