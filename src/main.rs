use clap::Parser;
use saltcheck::cli::{init_logging, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Hash { stdin } => saltcheck::cli::commands::hash::execute(&cli, stdin),
        Commands::Verify { ref stored, stdin } => {
            saltcheck::cli::commands::verify::execute(&cli, stored.as_deref(), stdin)
        }
        Commands::Inspect { ref hash, json } => {
            saltcheck::cli::commands::inspect::execute(hash, json)
        }
        Commands::Gate { ref user, ref role } => {
            saltcheck::cli::commands::gate::execute(&cli, user.as_deref(), role.as_deref())
        }
        Commands::Completions { shell } => saltcheck::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        saltcheck::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
