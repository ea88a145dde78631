use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Trade history source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed spreadsheet: {0}")]
    MalformedDocument(String),

    #[error("Survey store write failed: {0}")]
    StoreWriteFailure(String),

    #[error("Survey store lock poisoned")]
    LockPoisoned,
}
