use std::collections::BTreeMap;

use super::{Amount, format_amount, round_to_cents};

/// Per-user amounts keyed by user identifier. The sorted map keeps users
/// in a stable order for comparison and output.
pub type UserMap = BTreeMap<String, Amount>;

/// Check that both maps cover exactly the same users.
pub fn users_match(limits: &UserMap, spends: &UserMap) -> bool {
    limits.keys().eq(spends.keys())
}

/// Sum all limits, accumulating left to right from zero.
pub fn sum_limits(limits: &UserMap) -> Amount {
    limits.values().fold(0.0, |acc, value| acc + value)
}

/// Compute each user's remaining amount as |limit - spend|, rounded to
/// two decimal places. Assumes both maps cover the same users.
pub fn compute_remaining(limits: &UserMap, spends: &UserMap) -> UserMap {
    limits
        .iter()
        .map(|(user, limit)| {
            let spend = spends.get(user).copied().unwrap_or_default();
            (user.clone(), round_to_cents((limit - spend).abs()))
        })
        .collect()
}

/// Summary of the input checks, built without short-circuiting so every
/// problem shows up at once.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub user_count: usize,
    pub limit_total: Amount,
    pub declared_balance: Amount,
    pub is_balanced: bool,
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Run all input checks and collect the findings into a report.
pub fn build_validation_report(
    limits: &UserMap,
    spends: &UserMap,
    balance: Amount,
) -> ValidationReport {
    let mut issues = Vec::new();

    if !users_match(limits, spends) {
        issues.push("users in limits and spends do not match".to_string());
    }

    let limit_total = sum_limits(limits);
    // The sum must match the declared balance exactly; no floating-point
    // tolerance is applied.
    let is_balanced = limit_total == balance;
    if !is_balanced {
        issues.push(format!(
            "sum of limits ({}) does not match the declared balance ({})",
            format_amount(limit_total),
            format_amount(balance)
        ));
    }

    ValidationReport {
        user_count: limits.len(),
        limit_total,
        declared_balance: balance,
        is_balanced,
        issues,
    }
}
