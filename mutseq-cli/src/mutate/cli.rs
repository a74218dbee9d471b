use clap::{Arg, ArgAction, Command, value_parser};

pub const MUTATE_CMD: &str = "mutate";

pub fn create_mutate_cli() -> Command {
    Command::new(MUTATE_CMD)
        .author("mutseq")
        .about("Apply positional mutations (c.3C>T, c.3_6del, c.3_4insXYZ, ...) to reference sequences and write the mutant windows as FASTA.")
        .arg(
            Arg::new("sequences")
                .long("sequences")
                .short('s')
                .help("Reference FASTA, optionally gzipped")
                .required(true),
        )
        .arg(
            Arg::new("mutations")
                .long("mutations")
                .short('m')
                .help("CSV/TSV table with one mutation per row, or - for a TSV on stdin")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("FASTA output of the mutant windows (.gz compresses). Defaults to stdout"),
        )
        .arg(
            Arg::new("windows")
                .long("windows")
                .help("Also write a TSV with the wildtype and mutant window of every accepted row"),
        )
        .arg(
            Arg::new("flank")
                .short('k')
                .long("flank")
                .help("Bases kept on each side of the edit. Whole sequence when omitted")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("min-seq-len")
                .long("min-seq-len")
                .help("Drop mutant windows shorter than this")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-ambiguous")
                .long("max-ambiguous")
                .help("Drop mutant windows with more N bases than this")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("trim-repeat-overlap")
                .long("trim-repeat-overlap")
                .help("Shave the flanks of indels inside repeats by the repeat overlap")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .help("Worker threads. Uses all cores when omitted")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("YAML file with mutate options. Command-line flags take precedence"),
        )
        .arg(
            Arg::new("mut-column")
                .long("mut-column")
                .help("Header of the notation column")
                .default_value(mutseq_io::MUTATION_COLUMN),
        )
        .arg(
            Arg::new("seq-id-column")
                .long("seq-id-column")
                .help("Header of the sequence ID column")
                .default_value(mutseq_io::SEQ_ID_COLUMN),
        )
        .arg(
            Arg::new("mut-id-column")
                .long("mut-id-column")
                .help("Header of the custom output header column. Probes mut_ID and mutation_id when omitted"),
        )
        .arg(
            Arg::new("report-json")
                .long("report-json")
                .help("Write the batch report as JSON to this file"),
        )
}
