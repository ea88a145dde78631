//! Trade journal core: normalizes XLSX trade-history exports into canonical
//! records and persists per-trade survey annotations to a JSON file store.

pub mod error;
pub mod import;
pub mod models;
pub mod store;

pub use error::JournalError;
pub use import::{convert_value, normalize, normalize_file};
pub use models::{
    Emotion, FormattedTrade, JournalSettings, Setup, SurveyEntry, SurveyOutcome, Trend,
    TradeHistoryResponse,
};
pub use store::SurveyStore;
