//! Command implementations for the FII CLI.
//!
//! Provides subcommands for downloading the dataset the ranking page serves,
//! checking a local copy, and printing a ranking page in the terminal with
//! the same filter/sort/pagination engine the page uses.

use clap::Subcommand;
use fii_core::FieldKey;

pub mod fetch;
pub mod rank;

#[derive(Subcommand)]
pub enum Command {
    /// Download the FII dataset, validate it and save it as pretty JSON
    Fetch {
        /// Source URL of a `{"results": [...]}` JSON document
        #[arg(short, long)]
        url: String,

        /// Where to write the dataset (e.g. fii-ranking/public/data/fii.json)
        #[arg(short, long)]
        output: String,
    },

    /// Parse a local dataset and print a short summary
    Check {
        /// Path to the dataset JSON
        #[arg(short, long)]
        input: String,
    },

    /// Print one page of the ranking
    Rank {
        /// Path to the dataset JSON
        #[arg(short, long)]
        input: String,

        /// Field to sort by (JSON key, e.g. ultimo_dy)
        #[arg(short, long, default_value = "ticker")]
        sort: FieldKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,

        /// Page to print (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Funds per page
        #[arg(long, default_value_t = fii_core::pagination::DEFAULT_ITEMS_PER_PAGE)]
        per_page: usize,

        /// Keep only these sectors (repeatable)
        #[arg(long = "sector")]
        sectors: Vec<String>,

        /// Keep only favorites
        #[arg(long)]
        favorites: bool,

        /// Numeric range filter as FIELD=LOW:HIGH (repeatable), e.g. p_vp=0.8:1.0
        #[arg(long = "range")]
        ranges: Vec<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
        Command::Check { input } => rank::run_check(&input),
        Command::Rank {
            input,
            sort,
            desc,
            page,
            per_page,
            sectors,
            favorites,
            ranges,
        } => {
            let options = rank::RankOptions {
                sort,
                descending: desc,
                page,
                per_page,
                sectors,
                favorites,
                ranges,
            };
            rank::run_rank(&input, &options)
        }
    }
}
