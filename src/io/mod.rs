//! Input/output abstractions
//!
//! The console session talks to the player only through these traits, so
//! tests can script a whole game with mock implementations.

use std::io::{self, BufRead, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt.
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

/// The prompt as shown on the console, cursor one space after it.
pub fn prompt_text(prompt: &str) -> String {
    format!("{} ", prompt)
}

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{}", prompt_text(prompt));
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
