#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Print errors without color escapes
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The prompt shown before each line in interactive mode
    #[arg(long, global = true, default_value = "> ")]
    pub prompt: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, PartialEq)]
pub(crate) enum Command {
    /// Start an interactive session (the default)
    Repl,

    /// Evaluate a file line by line, as if each line were typed
    Eval { file: std::path::PathBuf },
}

#[cfg(test)]
mod test {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Command};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_repl() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.prompt, "> ");
        assert!(!cli.no_color);
    }

    #[test]
    fn eval_subcommand() {
        let cli = Cli::try_parse_from(["tally", "eval", "prog.calc", "--no-color"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Eval {
                file: "prog.calc".into()
            })
        );
        assert!(cli.no_color);
    }

    #[test]
    fn prompt_after_subcommand() {
        let cli = Cli::try_parse_from(["tally", "repl", "--prompt", "$ "]).unwrap();
        assert_eq!(cli.command, Some(Command::Repl));
        assert_eq!(cli.prompt, "$ ");
    }
}
