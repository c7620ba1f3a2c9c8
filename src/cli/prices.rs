use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use spaarwijzer::{
    api::energy_zero,
    prelude::*,
    prices::{EnergyPrices, PriceProvider},
};

use crate::{cli::Format, tables::build_prices_table};

#[derive(Parser)]
pub struct PriceSourceArgs {
    /// Day-ahead price API endpoint.
    #[clap(
        long = "price-source-url",
        env = "PRICE_SOURCE_URL",
        default_value = energy_zero::DEFAULT_URL,
    )]
    url: Url,

    /// Overall timeout of each price request.
    #[clap(long = "price-timeout-secs", env = "PRICE_TIMEOUT_SECS", default_value = "10")]
    timeout_secs: u64,
}

impl PriceSourceArgs {
    /// Fetch the live prices, degrading to the indicative ones.
    pub async fn fetch(&self) -> Result<EnergyPrices> {
        let api = energy_zero::Api::new(self.url.clone(), Duration::from_secs(self.timeout_secs))?;
        Ok(PriceProvider::new(api).fetch_current_prices().await)
    }
}

#[derive(Parser)]
pub struct PricesArgs {
    #[clap(flatten)]
    price_source: PriceSourceArgs,

    #[clap(long, value_enum, env = "OUTPUT_FORMAT", default_value = "table")]
    format: Format,
}

impl PricesArgs {
    pub async fn run(self) -> Result {
        let prices = self.price_source.fetch().await?;
        match self.format {
            Format::Table => println!("{}", build_prices_table(&prices)),
            Format::Json => println!("{}", serde_json::to_string_pretty(&prices)?),
        }
        Ok(())
    }
}
