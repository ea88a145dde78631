use serde::{Deserialize, Serialize};

/// Canonical, locale-independent representation of one executed trade.
///
/// Every field has a defined default; a source cell that is missing or cannot
/// be coerced leaves its field at that default instead of failing the row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormattedTrade {
    pub symbol: String,
    pub direction: String,
    pub open_time: String,
    pub close_time: String,
    pub entry_price: f64,
    pub close_price: f64,
    pub quantity: f64,
    pub volume: f64,
    pub commission: f64,
    pub net: f64,
    pub balance: f64,
}

/// Response envelope the routing layer marshals to trade-history callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeHistoryResponse {
    pub success: bool,
    pub data: Vec<FormattedTrade>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TradeHistoryResponse {
    pub fn ok(data: Vec<FormattedTrade>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            count: 0,
            error: Some(message.into()),
        }
    }
}
