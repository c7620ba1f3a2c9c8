mod defaults;
mod estimate;
mod prices;
mod profile;

use clap::{Parser, Subcommand, ValueEnum};
use spaarwijzer::prelude::*;

use crate::cli::{defaults::DefaultsArgs, estimate::EstimateArgs, prices::PricesArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: fetch the prices and estimate the savings for a business profile.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Fetch and show the current energy prices.
    #[clap(name = "prices")]
    Prices(PricesArgs),

    /// Show the input ranges per business category.
    #[clap(name = "defaults")]
    Defaults(DefaultsArgs),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Estimate(args) => args.run().await,
            Self::Prices(args) => args.run().await,
            Self::Defaults(args) => {
                args.run();
                Ok(())
            }
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    Table,

    /// Pretty-printed JSON.
    Json,
}
