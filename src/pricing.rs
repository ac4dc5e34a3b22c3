use std::collections::HashMap;

/// Pluggable source of conversion rates (source asset -> target asset).
/// A live pricing service can replace the static table without touching the
/// ranking algorithm.
pub trait RateSource {
    /// Rate for one display unit of the source asset; `None` when the mint
    /// is unknown to this source.
    fn rate(&self, mint: &str) -> Option<f64>;
}

/// Fixed lookup table used on testnet.
#[derive(Debug, Clone, Default)]
pub struct StaticRateTable {
    rates: HashMap<String, f64>,
}

impl StaticRateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn testnet_defaults() -> Self {
        let mut rates = HashMap::new();
        rates.insert(
            "8FRFC6MoGGkMFQwngccyu69VnNu9pMoQjiX4D6darAAc".to_string(),
            0.99,
        );
        rates.insert(
            "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R".to_string(),
            0.95,
        );
        Self { rates }
    }
}

impl RateSource for StaticRateTable {
    fn rate(&self, mint: &str) -> Option<f64> {
        self.rates.get(mint).copied()
    }
}
