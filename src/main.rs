//! Transaction Analyzer CLI
//!
//! Loads a JSON file of transaction records and runs queries,
//! aggregates and summaries over it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use transaction_analyzer::commands::{
    display_schema, display_version, execute_query, execute_summary, validate_summary_args,
    validate_transactions_file, Query, QueryArgs, SummaryArgs,
};
use transaction_analyzer::utils::config::DEFAULT_INPUT_PATH;

/// Transaction Analyzer - queries and summaries over transaction records
#[derive(Parser, Debug)]
#[command(name = "txn-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Transactions JSON file
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT_PATH)]
    file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one query and print the result as JSON
    Query {
        #[command(subcommand)]
        query: Query,

        /// Write the result to this file instead of stdout
        #[arg(short, long, global = true)]
        output: Option<PathBuf>,
    },

    /// Build a summary report of all transactions
    Summary {
        /// Output path for the JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a text report instead of JSON
        #[arg(long)]
        text: bool,

        /// Number of merchants listed in the text report
        #[arg(long, default_value = "5")]
        top_merchants: usize,
    },

    /// Validate a transactions JSON file
    Validate,

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Query { query, output } => {
            execute_query(QueryArgs {
                input: cli.file,
                query,
                output,
            })?;
        }

        Commands::Summary {
            output,
            text,
            top_merchants,
        } => {
            let args = SummaryArgs {
                input: cli.file,
                output,
                text,
                top_merchants,
            };

            // Validate args first
            validate_summary_args(&args)?;

            execute_summary(args)?;
        }

        Commands::Validate => {
            validate_transactions_file(&cli.file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
