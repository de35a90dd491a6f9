mod common;

use common::{sample_limits, sample_spends, user_map};
use resto::application::{AppError, BalanceCalculator};

#[test]
fn test_reference_scenario() {
    let calculator = BalanceCalculator::new(sample_limits(), sample_spends(), 924.0);
    let output = calculator.run().unwrap();

    assert_eq!(output, "{\n  \"user1\": 161.05,\n  \"user2\": 303.53\n}");
}

#[test]
fn test_output_contains_exactly_the_input_users() {
    let calculator = BalanceCalculator::new(sample_limits(), sample_spends(), 924.0);
    let remaining = calculator.remaining().unwrap();

    let users: Vec<&str> = remaining.keys().map(String::as_str).collect();
    assert_eq!(users, vec!["user1", "user2"]);
}

#[test]
fn test_user_mismatch_scenario() {
    let calculator = BalanceCalculator::new(
        user_map(&[("user1", 100.0)]),
        user_map(&[("user2", 50.0)]),
        100.0,
    );
    assert!(matches!(
        calculator.run(),
        Err(AppError::UserMismatch { .. })
    ));
}

#[test]
fn test_balance_mismatch_scenario() {
    let calculator = BalanceCalculator::new(
        user_map(&[("user1", 50.0), ("user2", 60.0)]),
        user_map(&[("user1", 10.0), ("user2", 10.0)]),
        100.0,
    );
    assert!(matches!(
        calculator.run(),
        Err(AppError::BalanceMismatch { .. })
    ));
}

#[test]
fn test_key_order_does_not_affect_matching() {
    // Same user sets built in different orders still validate.
    let limits = user_map(&[("b", 10.0), ("a", 20.0), ("c", 0.0)]);
    let spends = user_map(&[("c", 1.0), ("a", 2.0), ("b", 3.0)]);
    let calculator = BalanceCalculator::new(limits, spends, 30.0);

    assert!(calculator.run().is_ok());
}

#[test]
fn test_setter_guard_keeps_previous_balance() {
    let mut calculator = BalanceCalculator::new(sample_limits(), sample_spends(), 924.0);

    assert!(matches!(
        calculator.set_balance(-5.0),
        Err(AppError::InvalidBalance(_))
    ));
    assert_eq!(calculator.balance(), 924.0);
    assert!(calculator.run().is_ok());
}

#[test]
fn test_updating_balance_changes_the_sum_check() {
    let mut calculator = BalanceCalculator::new(sample_limits(), sample_spends(), 0.0);
    assert!(matches!(
        calculator.run(),
        Err(AppError::BalanceMismatch { .. })
    ));

    calculator.set_balance(924.0).unwrap();
    assert!(calculator.run().is_ok());
}

#[test]
fn test_missing_inputs() {
    let calculator = BalanceCalculator::from_parts(None, Some(sample_spends()), 924.0);
    assert!(matches!(
        calculator.run(),
        Err(AppError::MissingParameters)
    ));
}
