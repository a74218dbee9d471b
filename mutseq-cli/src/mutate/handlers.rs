use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use mutseq_io::{MutationColumns, WindowWrite, read_fasta, read_mutation_table_w_stdin};
use mutseq_mutate::{MutateConfig, mutate_batch};

///
/// Merge the YAML file given with `--config` (if any) with the command-line
/// flags. Flags win over file values.
///
pub fn build_config(matches: &ArgMatches) -> Result<MutateConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path))?;
            serde_yaml::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => MutateConfig::default(),
    };

    if let Some(k) = matches.get_one::<usize>("flank") {
        config.flank = Some(*k);
    }
    if let Some(len) = matches.get_one::<usize>("min-seq-len") {
        config.min_seq_len = Some(*len);
    }
    if let Some(n) = matches.get_one::<usize>("max-ambiguous") {
        config.max_ambiguous = Some(*n);
    }
    if let Some(threads) = matches.get_one::<usize>("threads") {
        config.threads = Some(*threads);
    }
    if matches.get_flag("trim-repeat-overlap") {
        config.trim_repeat_overlap = true;
    }

    Ok(config)
}

pub fn build_columns(matches: &ArgMatches) -> MutationColumns {
    let defaults = MutationColumns::default();
    MutationColumns {
        mutation: matches
            .get_one::<String>("mut-column")
            .cloned()
            .unwrap_or(defaults.mutation),
        seq_id: matches
            .get_one::<String>("seq-id-column")
            .cloned()
            .unwrap_or(defaults.seq_id),
        mut_id: matches.get_one::<String>("mut-id-column").cloned(),
    }
}

pub fn run_mutate(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let sequences_path = matches
        .get_one::<String>("sequences")
        .context("A path to a reference FASTA is required.")?;
    let mutations_path = matches
        .get_one::<String>("mutations")
        .context("A path to a mutation table is required.")?;

    let config = build_config(matches)?;
    let columns = build_columns(matches);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Loading reference sequences from {}", sequences_path));
    let sequences = read_fasta(sequences_path)
        .with_context(|| format!("Failed to read reference FASTA: {}", sequences_path))?;
    spinner.finish_with_message(format!("Loaded {} reference sequences", sequences.len()));

    let mutations = read_mutation_table_w_stdin(mutations_path, &columns)
        .with_context(|| format!("Failed to read mutation table: {}", mutations_path))?;

    let output = mutate_batch(&sequences, &mutations, &config)?;

    for line in output.report.to_string().lines() {
        info!("{}", line);
    }

    let written = match matches.get_one::<String>("output") {
        Some(path) if path.ends_with(".gz") => output.windows.write_fasta_gz(path),
        Some(path) => output.windows.write_fasta(path),
        None => output.windows.write_fasta_to(std::io::stdout().lock()),
    };
    written.context("Failed to write mutant windows")?;

    if let Some(path) = matches.get_one::<String>("windows") {
        output
            .windows
            .write_tsv(path)
            .with_context(|| format!("Failed to write window table: {}", path))?;
    }

    if let Some(path) = matches.get_one::<String>("report-json") {
        write_report_json(Path::new(path), &output.report)?;
    }

    Ok(())
}

fn write_report_json(path: &Path, report: &mutseq_mutate::BatchReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
