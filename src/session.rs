use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{error::Error, runtime::eval::Interpreter};

const RED: &str = "\x1B[0;38;5;196m";
const RESET: &str = "\x1B[0m";

/// Drives one line at a time through the interpreter and owns the
/// variable table for as long as it lives.
pub(crate) struct Session {
    interpreter: Interpreter,
    line: usize,
    color: bool,
}

impl Session {
    pub fn new(color: bool) -> Self {
        Self {
            interpreter: Interpreter::new(),
            line: 0,
            color,
        }
    }

    /// Runs one line, printing each statement's value and, if the line
    /// failed, the error. Returns whether the line succeeded.
    pub fn run_line<W: Write>(&mut self, src: &str, out: &mut W) -> io::Result<bool> {
        self.line += 1;

        let mut results = vec![];
        let outcome = self.interpreter.eval(src, &mut results);

        for value in &results {
            writeln!(out, "{value}")?;
        }

        match outcome {
            Ok(()) => Ok(true),
            Err(why) => {
                log::debug!("{:?} error on line {}: {why:?}", why.kind.stage(), self.line);
                writeln!(out, "{}", self.render_error(&why))?;
                Ok(false)
            }
        }
    }

    fn render_error(&self, why: &Error) -> String {
        let prefix = format!("{}:{}: error: ", self.line, why.pos);
        if self.color {
            format!("{RED}{prefix}{RESET}{why}")
        } else {
            format!("{prefix}{why}")
        }
    }

    pub fn repl(&mut self, prompt: &str) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        log::info!("session started");

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    self.run_line(&line, &mut io::stdout().lock())?;
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(why) => return Err(why),
            }
        }

        self.log_summary();
        Ok(())
    }

    /// Feeds every line of `path` through the session as if it were typed.
    /// Returns whether all lines succeeded.
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<bool> {
        let src = fs::read_to_string(path)?;
        log::info!("evaluating {path:?}");

        let mut ok = true;
        for line in src.lines() {
            ok &= self.run_line(line, out)?;
        }

        self.log_summary();
        Ok(ok)
    }

    fn log_summary(&self) {
        log::info!(
            "session ended after {} lines with {} variables",
            self.line,
            self.interpreter.variable_count()
        );
    }
}
