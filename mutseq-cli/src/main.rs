mod mutate;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "mutseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Apply positional mutation notation to reference sequences and extract mutant/wildtype windows around each edit.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log per-row rejections (debug level)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(mutate::cli::create_mutate_cli())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // MUTATE
        //
        Some((mutate::cli::MUTATE_CMD, matches)) => {
            mutate::handlers::run_mutate(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from([
                consts::BIN_NAME,
                mutate::cli::MUTATE_CMD,
                "-s",
                "ref.fa",
                "-m",
                "muts.csv",
                "--verbose",
            ])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[rstest]
    fn test_subcommand_required() {
        assert!(build_parser().try_get_matches_from([consts::BIN_NAME]).is_err());
    }
}
