use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use apriori::{
    generate_frequent_itemsets, load_transactions, report, AprioriError, CandidateStrategy,
    CountingStrategy, MinSupport, MiningConfig, RunConfig, TransactionDatabase,
};

#[derive(Parser)]
#[command(name = "apriori-miner")]
#[command(about = "Mine frequent itemsets from a transaction file with Apriori", long_about = None)]
struct Cli {
    /// Delimited transaction file: header row, then `id,item,item,...` rows
    input: PathBuf,

    /// Minimum number of transactions an itemset must appear in
    #[arg(short = 's', long, default_value_t = 2, allow_negative_numbers = true)]
    min_support: i64,

    /// Minimum support as a share of all transactions, in [0, 1]
    #[arg(long, conflicts_with = "min_support", allow_negative_numbers = true)]
    min_support_ratio: Option<f32>,

    /// Largest itemset length to mine
    #[arg(long)]
    max_len: Option<usize>,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Only join itemsets sharing a prefix, pruning by infrequent subsets
    #[arg(long)]
    prefix_join: bool,

    /// Count support with per-item transaction bitsets
    #[arg(long)]
    tidset: bool,

    /// Count candidate support on all cores
    #[arg(long)]
    parallel: bool,

    /// Print the support of every itemset
    #[arg(long)]
    with_support: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let min_support = match self.min_support_ratio {
            Some(ratio) => MinSupport::ratio(ratio)?,
            None => MinSupport::count(self.min_support)?,
        };
        let candidates = if self.prefix_join {
            CandidateStrategy::PrefixJoin
        } else {
            CandidateStrategy::Pairwise
        };
        let counting = if self.tidset {
            CountingStrategy::Tidset
        } else {
            CountingStrategy::Scan
        };

        let mut mining = MiningConfig::new(min_support)
            .with_candidates(candidates)
            .with_counting(counting)
            .with_parallel(self.parallel);
        if let Some(max_len) = self.max_len {
            mining = mining.with_max_len(max_len)?;
        }

        Ok(RunConfig::new(&self.input, mining)?.with_delimiter(self.delimiter)?)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.run_config()?;

    let raw_transactions = load_transactions(config.input_path(), config.delimiter())?;
    let db = TransactionDatabase::from_raw(raw_transactions);
    info!(transactions = db.len(), "Loaded {}", config.input_path().display());

    let frequent_itemsets = generate_frequent_itemsets(&db, config.mining());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    io::Write::write_all(&mut out, b"Frequent itemsets found:\n")?;
    report::write_report(&mut out, &db, &frequent_itemsets, cli.with_support)?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AprioriError>() {
                Some(AprioriError::InputNotFound { path }) => eprintln!(
                    "Error: the file '{}' was not found. Make sure it exists.",
                    path.display()
                ),
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
