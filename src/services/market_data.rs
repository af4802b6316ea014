//! Market data input contract
//!
//! The engine only needs a validated [`PriceSeries`] and optional
//! fundamentals; how they are fetched belongs to the provider.

use crate::error::{EngineError, Result};
use crate::models::fundamentals::FundamentalSnapshot;
use crate::models::price::{PricePoint, PriceSeries};
use crate::signals::sector::SectorSeries;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Raw per-ticker payload as a data provider delivers it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerInput {
    pub symbol: String,
    pub prices: Vec<PricePoint>,
    #[serde(default)]
    pub fundamentals: Option<FundamentalSnapshot>,
}

impl TickerInput {
    /// Validate the prices into a series
    pub fn to_series(&self) -> Result<PriceSeries> {
        PriceSeries::new(self.symbol.clone(), self.prices.clone())
    }
}

/// Raw sector index payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorInput {
    pub sector: String,
    pub symbol: String,
    pub prices: Vec<PricePoint>,
}

impl SectorInput {
    pub fn to_series(&self) -> Result<SectorSeries> {
        Ok(SectorSeries {
            sector: self.sector.clone(),
            series: PriceSeries::new(self.symbol.clone(), self.prices.clone())?,
        })
    }
}

/// A JSON array of sector payloads
pub fn parse_sector_inputs(raw: &str) -> Result<Vec<SectorInput>> {
    Ok(serde_json::from_str(raw)?)
}

pub trait MarketDataProvider {
    /// Daily history for a symbol, ascending by date
    fn fetch_series(&self, symbol: &str) -> Result<PriceSeries>;

    /// Latest fundamentals, `None` when the provider has none at all
    fn fetch_fundamentals(&self, symbol: &str) -> Result<Option<FundamentalSnapshot>>;
}

/// Read a single ticker payload from a JSON file
pub fn load_ticker_input(path: &Path) -> Result<TickerInput> {
    let raw = std::fs::read_to_string(path)?;
    parse_ticker_input(&raw)
}

pub fn parse_ticker_input(raw: &str) -> Result<TickerInput> {
    Ok(serde_json::from_str(raw)?)
}

/// Provider reading `<dir>/<SYMBOL>.json` files
pub struct JsonFileProvider {
    dir: PathBuf,
}

impl JsonFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load(&self, symbol: &str) -> Result<TickerInput> {
        load_ticker_input(&self.dir.join(format!("{}.json", symbol)))
    }
}

impl MarketDataProvider for JsonFileProvider {
    fn fetch_series(&self, symbol: &str) -> Result<PriceSeries> {
        self.load(symbol)?.to_series()
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Option<FundamentalSnapshot>> {
        Ok(self.load(symbol)?.fundamentals)
    }
}

/// Provider over payloads already held in memory
#[derive(Default)]
pub struct InMemoryProvider {
    inputs: BTreeMap<String, TickerInput>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, input: TickerInput) {
        self.inputs.insert(input.symbol.clone(), input);
    }

    fn get(&self, symbol: &str) -> Result<&TickerInput> {
        self.inputs.get(symbol).ok_or_else(|| {
            EngineError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no market data for {}", symbol),
            ))
        })
    }
}

impl MarketDataProvider for InMemoryProvider {
    fn fetch_series(&self, symbol: &str) -> Result<PriceSeries> {
        self.get(symbol)?.to_series()
    }

    fn fetch_fundamentals(&self, symbol: &str) -> Result<Option<FundamentalSnapshot>> {
        Ok(self.get(symbol)?.fundamentals.clone())
    }
}
