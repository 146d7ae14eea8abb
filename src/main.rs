mod cli;
mod error;
mod runtime;
mod session;
mod syntax;

use std::{
    io::{self, IsTerminal},
    process,
};

use clap::Parser;

use cli::{Cli, Command};
use session::Session;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let color = !cli.no_color && io::stdout().is_terminal();
    let mut session = Session::new(color);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            if let Err(why) = session.repl(&cli.prompt) {
                eprintln!("{why}");
                process::exit(1);
            }
        }
        Command::Eval { file } => match session.run_file(&file, &mut io::stdout().lock()) {
            Ok(true) => (),
            Ok(false) => process::exit(1),
            Err(why) => {
                eprintln!("Failed to read {file:?}: {why}");
                process::exit(1);
            }
        },
    }
}
