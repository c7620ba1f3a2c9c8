use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use spaarwijzer::{
    estimator::{self, SavingsReport},
    prelude::*,
    prices::EnergyPrices,
};

use crate::{
    cli::{Format, prices::PriceSourceArgs, profile::ProfileArgs},
    tables::{build_costs_table, build_prices_table, build_recommendations_table},
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// TOML file with the business profile. Command-line options override it.
    #[clap(long = "profile", env = "PROFILE_PATH")]
    profile_path: Option<PathBuf>,

    #[clap(flatten)]
    profile: ProfileArgs,

    /// Skip the price API and use the indicative prices.
    #[clap(long)]
    offline: bool,

    #[clap(long, value_enum, env = "OUTPUT_FORMAT", default_value = "table")]
    format: Format,

    #[clap(flatten)]
    price_source: PriceSourceArgs,
}

impl EstimateArgs {
    pub async fn run(self) -> Result {
        let profile_args = match &self.profile_path {
            Some(path) => self.profile.or(ProfileArgs::read_from(path)?),
            None => self.profile,
        };
        let profile = profile_args.into_profile();
        info!(category = ?profile.category, "assessing…");

        let prices = if self.offline {
            EnergyPrices::indicative()
        } else {
            self.price_source.fetch().await?
        };
        let report = estimator::estimate(&profile, &prices);
        info!(
            n_recommendations = report.recommendations.len(),
            yearly_savings = %report.yearly_savings,
            "estimated",
        );

        match self.format {
            Format::Table => {
                println!("{}", build_prices_table(&prices));
                println!("{}", build_costs_table(&report));
                println!("{}", build_recommendations_table(&report, profile.priorities));
            }
            Format::Json => {
                let output = Output { prices: &prices, report: &report };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Output<'a> {
    prices: &'a EnergyPrices,
    report: &'a SavingsReport,
}
