use crate::domain::{
    Amount, UserMap, ValidationReport, build_validation_report, compute_remaining, sum_limits,
    users_match,
};

use super::AppError;

/// Computes per-user remaining balances from spending limits and actual
/// spends. Inputs are validated before any computation: both maps must
/// cover the same users and the limits must sum to the declared total
/// balance.
pub struct BalanceCalculator {
    limits: Option<UserMap>,
    spends: Option<UserMap>,
    balance: Amount,
}

impl BalanceCalculator {
    /// Create a calculator from complete inputs. Nothing is validated
    /// here; all checks run when `run` or `remaining` is called.
    pub fn new(limits: UserMap, spends: UserMap, balance: Amount) -> Self {
        Self::from_parts(Some(limits), Some(spends), balance)
    }

    /// Create a calculator from possibly missing inputs. An absent map is
    /// reported by `run` as `AppError::MissingParameters`.
    pub fn from_parts(limits: Option<UserMap>, spends: Option<UserMap>, balance: Amount) -> Self {
        Self {
            limits,
            spends,
            balance,
        }
    }

    /// The currently stored total balance.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Replace the stored total balance. NaN and negative values are
    /// rejected and leave the current balance untouched.
    pub fn set_balance(&mut self, value: Amount) -> Result<(), AppError> {
        if value.is_nan() || value < 0.0 {
            return Err(AppError::InvalidBalance(value));
        }
        self.balance = value;
        Ok(())
    }

    /// Validate the inputs and compute each user's remaining balance.
    ///
    /// Checks run in a fixed order and the first failure aborts: input
    /// presence, user set equality, then the sum of limits against the
    /// declared balance (exact comparison, no tolerance).
    pub fn remaining(&self) -> Result<UserMap, AppError> {
        let (limits, spends) = self.required_inputs()?;

        if !users_match(limits, spends) {
            return Err(AppError::UserMismatch {
                limit_users: limits.keys().cloned().collect(),
                spend_users: spends.keys().cloned().collect(),
            });
        }

        let sum = sum_limits(limits);
        if sum != self.balance {
            return Err(AppError::BalanceMismatch {
                sum,
                balance: self.balance,
            });
        }

        Ok(compute_remaining(limits, spends))
    }

    /// Run the full pipeline and return the remaining balances as
    /// pretty-printed JSON, one entry per user.
    pub fn run(&self) -> Result<String, AppError> {
        let remaining = self.remaining()?;
        Ok(serde_json::to_string_pretty(&remaining)?)
    }

    /// Run all checks without short-circuiting and report the findings.
    pub fn check(&self) -> Result<ValidationReport, AppError> {
        let (limits, spends) = self.required_inputs()?;
        Ok(build_validation_report(limits, spends, self.balance))
    }

    fn required_inputs(&self) -> Result<(&UserMap, &UserMap), AppError> {
        match (&self.limits, &self.spends) {
            (Some(limits), Some(spends)) if !self.balance.is_nan() => Ok((limits, spends)),
            _ => Err(AppError::MissingParameters),
        }
    }
}
