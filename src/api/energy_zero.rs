//! [EnergyZero](https://www.energyzero.nl/dynamische-energieprijzen) day-ahead prices client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    api::client,
    prelude::*,
    prices::{Commodity, PriceSource},
};

pub const DEFAULT_URL: &str = "https://api.energyzero.nl/v1/energyprices";

pub struct Api {
    client: Client,
    url: Url,
}

impl Api {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        Ok(Self { client: client::try_new(timeout)?, url })
    }

    pub fn try_default() -> Result<Self> {
        Self::new(Url::parse(DEFAULT_URL)?, client::DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl PriceSource for Api {
    /// Get all tax-inclusive prices in the window.
    #[instrument(skip_all, fields(commodity = ?commodity, from = %from, till = %till))]
    async fn get_prices(
        &self,
        commodity: Commodity,
        from: NaiveDate,
        till: NaiveDate,
    ) -> Result<Vec<f64>> {
        debug!("fetching…");
        let prices: Vec<_> = self
            .client
            .get(self.url.clone())
            .query(&Query::new(commodity, from, till))
            .send()
            .await
            .context("failed to call")?
            .error_for_status()
            .context("request failed")?
            .json::<Response>()
            .await
            .context("failed to deserialize the response")?
            .prices
            .into_iter()
            .map(|entry| entry.price)
            .collect();
        debug!(n_prices = prices.len(), "fetched");
        Ok(prices)
    }
}

#[derive(Serialize)]
struct Query {
    #[serde(rename = "fromDate")]
    from: NaiveDate,

    #[serde(rename = "tillDate")]
    till: NaiveDate,

    /// Hourly resolution.
    interval: u8,

    #[serde(rename = "usageType")]
    usage_type: u8,

    #[serde(rename = "inclBtw")]
    including_vat: bool,
}

impl Query {
    const fn new(commodity: Commodity, from: NaiveDate, till: NaiveDate) -> Self {
        let usage_type = match commodity {
            Commodity::Electricity => 1,
            Commodity::Gas => 3,
        };
        Self { from, till, interval: 4, usage_type, including_vat: true }
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(rename = "Prices")]
    prices: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    price: f64,
}
