use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("down payment exceeds debt: debt {debt}, down payment {down_payment}")]
    DownPaymentExceedsDebt {
        debt: Money,
        down_payment: Money,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
