use serde::{Deserialize, Serialize};

/// What the market lookup knows about a tradable symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentInfo {
  pub symbol: String,

  /// Last traded price, when the source reports one
  pub price: Option<f64>,

  pub latest_trading_day: Option<String>,
}

impl InstrumentInfo {
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into(), price: None, latest_trading_day: None }
  }

  pub fn with_price(mut self, price: f64) -> Self {
    self.price = Some(price);
    self
  }
}
