use thiserror::Error;

use crate::domain::Amount;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid balance: must be a non-negative number, got {0}")]
    InvalidBalance(Amount),

    #[error("Missing parameters: limits, spends, and a numeric balance are required")]
    MissingParameters,

    #[error("Users in limits and spends do not match (limits: {limit_users:?}, spends: {spend_users:?})")]
    UserMismatch {
        limit_users: Vec<String>,
        spend_users: Vec<String>,
    },

    #[error("Sum of limits ({sum}) does not match the total balance ({balance})")]
    BalanceMismatch { sum: Amount, balance: Amount },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
