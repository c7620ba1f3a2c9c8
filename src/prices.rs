//! Current unit prices for electricity and gas.

use async_trait::async_trait;
use average::Mean;
use chrono::{DateTime, Days, Local, NaiveDate};
use serde::Serialize;

use crate::{
    api::energy_zero,
    prelude::*,
    quantity::rate::{CubicMeterRate, KilowattHourRate},
};

/// Dutch value-added tax («btw») included in the residential quotes.
const VAT_RATE: f64 = 0.21;

/// Energy tax surcharge (first bracket, excluding VAT).
const ELECTRICITY_ENERGY_TAX: KilowattHourRate = KilowattHourRate(0.1016);

/// Energy tax surcharge (first bracket, excluding VAT).
const GAS_ENERGY_TAX: CubicMeterRate = CubicMeterRate(0.5782);

const FALLBACK_ELECTRICITY_PRICE: KilowattHourRate = KilowattHourRate(0.28);
const FALLBACK_GAS_PRICE: CubicMeterRate = CubicMeterRate(1.25);

/// Not covered by the day-ahead market, always the static value.
const FEED_IN_TARIFF: KilowattHourRate = KilowattHourRate(0.07);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Commodity {
    Electricity,
    Gas,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnergyPrices {
    #[serde(rename = "electricity_price_per_kwh")]
    pub electricity: KilowattHourRate,

    #[serde(rename = "gas_price_per_m3")]
    pub gas: CubicMeterRate,

    #[serde(rename = "feed_in_tariff_per_kwh")]
    pub feed_in_tariff: KilowattHourRate,

    /// When the snapshot was taken, `None` if prices were never fetched.
    pub timestamp: Option<DateTime<Local>>,

    /// Whether the prices came from the live source.
    pub is_live: bool,
}

impl EnergyPrices {
    /// Static prices, not tied to any fetch attempt.
    pub const fn indicative() -> Self {
        Self {
            electricity: FALLBACK_ELECTRICITY_PRICE,
            gas: FALLBACK_GAS_PRICE,
            feed_in_tariff: FEED_IN_TARIFF,
            timestamp: None,
            is_live: false,
        }
    }

    /// Static prices substituted for a failed fetch at `now`.
    pub fn fallback(now: DateTime<Local>) -> Self {
        Self { timestamp: Some(now), ..Self::indicative() }
    }
}

/// Day-ahead market price feed.
#[async_trait]
pub trait PriceSource: Sync {
    /// Tax-inclusive consumer prices for the commodity in the `from..=till` date window.
    async fn get_prices(
        &self,
        commodity: Commodity,
        from: NaiveDate,
        till: NaiveDate,
    ) -> Result<Vec<f64>>;
}

pub struct PriceProvider<S> {
    source: S,
}

impl<S: PriceSource> PriceProvider<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch today's and tomorrow's prices, falling back to the static ones on any failure.
    #[instrument(skip_all)]
    pub async fn fetch_current_prices(&self) -> EnergyPrices {
        let now = Local::now();
        match self.try_fetch_current_prices(now).await {
            Ok(prices) => {
                info!(
                    electricity = %prices.electricity,
                    gas = %prices.gas,
                    "fetched live prices",
                );
                prices
            }
            Err(error) => {
                warn!(error = format!("{error:#}"), "falling back to indicative prices");
                EnergyPrices::fallback(now)
            }
        }
    }

    async fn try_fetch_current_prices(&self, now: DateTime<Local>) -> Result<EnergyPrices> {
        let today = now.date_naive();
        let tomorrow = today.checked_add_days(Days::new(1)).context("date overflow")?;
        let (electricity, gas) = tokio::try_join!(
            self.source.get_prices(Commodity::Electricity, today, tomorrow),
            self.source.get_prices(Commodity::Gas, today, tomorrow),
        )?;
        let electricity = KilowattHourRate(blend(&electricity).context("electricity")?)
            / (1.0 + VAT_RATE)
            + ELECTRICITY_ENERGY_TAX;
        let gas = CubicMeterRate(blend(&gas).context("gas")?) / (1.0 + VAT_RATE) + GAS_ENERGY_TAX;
        ensure!(electricity > KilowattHourRate::ZERO, "non-positive electricity price: {electricity}");
        ensure!(gas > CubicMeterRate::ZERO, "non-positive gas price: {gas}");
        Ok(EnergyPrices {
            electricity,
            gas,
            feed_in_tariff: FEED_IN_TARIFF,
            timestamp: Some(now),
            is_live: true,
        })
    }
}

/// Average all the periodic prices into a single rate.
fn blend(prices: &[f64]) -> Result<f64> {
    let estimate: Mean = prices.iter().copied().collect();
    ensure!(!estimate.is_empty(), "the price list is empty");
    let mean = estimate.mean();
    ensure!(mean.is_finite(), "the average price is not finite");
    Ok(mean)
}

/// Fetch the current prices from EnergyZero. Always resolves to a usable snapshot.
pub async fn fetch_current_prices() -> EnergyPrices {
    match energy_zero::Api::try_default() {
        Ok(api) => PriceProvider::new(api).fetch_current_prices().await,
        Err(error) => {
            warn!(error = format!("{error:#}"), "failed to build the client");
            EnergyPrices::fallback(Local::now())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use approx::assert_abs_diff_eq;
    use reqwest::Url;

    use super::*;

    enum FakeSource {
        Prices { electricity: Vec<f64>, gas: Vec<f64> },
        Unreachable,
        FailingGas,
    }

    #[async_trait]
    impl PriceSource for FakeSource {
        async fn get_prices(
            &self,
            commodity: Commodity,
            _from: NaiveDate,
            _till: NaiveDate,
        ) -> Result<Vec<f64>> {
            match (self, commodity) {
                (Self::Prices { electricity, .. }, Commodity::Electricity) => Ok(electricity.clone()),
                (Self::Prices { gas, .. }, Commodity::Gas) => Ok(gas.clone()),
                (Self::Unreachable, _) => bail!("connection refused"),
                (Self::FailingGas, Commodity::Electricity) => Ok(vec![0.30]),
                (Self::FailingGas, Commodity::Gas) => bail!("500 Internal Server Error"),
            }
        }
    }

    /// Records the requested windows.
    struct WindowProbe {
        n_calls: AtomicUsize,
    }

    #[async_trait]
    impl PriceSource for WindowProbe {
        async fn get_prices(
            &self,
            _commodity: Commodity,
            from: NaiveDate,
            till: NaiveDate,
        ) -> Result<Vec<f64>> {
            self.n_calls.fetch_add(1, Ordering::Relaxed);
            ensure!(from == Local::now().date_naive());
            ensure!(till == from.checked_add_days(Days::new(1)).context("date overflow")?);
            Ok(vec![0.25])
        }
    }

    fn assert_fallback(prices: &EnergyPrices) {
        assert!(!prices.is_live);
        assert!(prices.timestamp.is_some());
        assert_eq!(prices.electricity, KilowattHourRate(0.28));
        assert_eq!(prices.gas, CubicMeterRate(1.25));
        assert_eq!(prices.feed_in_tariff, KilowattHourRate(0.07));
    }

    #[tokio::test]
    async fn test_live_prices_are_averaged_and_adjusted() {
        let source = FakeSource::Prices {
            electricity: vec![0.242, 0.363],
            gas: vec![1.21, 1.1495, 1.2705],
        };
        let prices = PriceProvider::new(source).fetch_current_prices().await;
        assert!(prices.is_live);
        assert!(prices.timestamp.is_some());
        assert_abs_diff_eq!(prices.electricity.0, 0.25 + 0.1016, epsilon = 1e-9);
        assert_abs_diff_eq!(prices.gas.0, 1.0 + 0.5782, epsilon = 1e-9);
        assert_eq!(prices.feed_in_tariff, KilowattHourRate(0.07));
    }

    #[tokio::test]
    async fn test_network_failure_falls_back() {
        let before = Local::now();
        let prices = PriceProvider::new(FakeSource::Unreachable).fetch_current_prices().await;
        assert_fallback(&prices);
        assert!(prices.timestamp.is_some_and(|timestamp| timestamp >= before));
    }

    #[tokio::test]
    async fn test_single_commodity_failure_falls_back() {
        let prices = PriceProvider::new(FakeSource::FailingGas).fetch_current_prices().await;
        assert_fallback(&prices);
    }

    #[tokio::test]
    async fn test_empty_prices_fall_back() {
        let source = FakeSource::Prices { electricity: vec![], gas: vec![1.0] };
        let prices = PriceProvider::new(source).fetch_current_prices().await;
        assert_fallback(&prices);
    }

    #[tokio::test]
    async fn test_negative_average_falls_back() {
        let source = FakeSource::Prices { electricity: vec![-1.0], gas: vec![1.0] };
        let prices = PriceProvider::new(source).fetch_current_prices().await;
        assert_fallback(&prices);
    }

    #[tokio::test]
    async fn test_requests_today_and_tomorrow() {
        let probe = WindowProbe { n_calls: AtomicUsize::new(0) };
        let provider = PriceProvider::new(probe);
        let prices = provider.fetch_current_prices().await;
        assert!(prices.is_live);
        assert_eq!(provider.source.n_calls.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back() -> Result {
        let api = energy_zero::Api::new(Url::parse("http://127.0.0.1:9/")?, Duration::from_secs(2))?;
        let prices = PriceProvider::new(api).fetch_current_prices().await;
        assert_fallback(&prices);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn test_fetch_current_prices_ok() {
        let prices = fetch_current_prices().await;
        assert!(prices.is_live);
        assert!(prices.timestamp.is_some());
        assert!(prices.electricity > KilowattHourRate::ZERO);
        assert!(prices.gas > CubicMeterRate::ZERO);
    }

    #[test]
    fn test_indicative_has_no_timestamp() {
        let prices = EnergyPrices::indicative();
        assert!(!prices.is_live);
        assert!(prices.timestamp.is_none());
    }
}
