use std::fs::File;
use std::io::{Write, stdout};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::BalanceCalculator;
use crate::domain::format_amount;
use crate::io::load_user_map;

/// Resto - Remaining balance calculator
#[derive(Parser)]
#[command(name = "resto")]
#[command(about = "Compute per-user remaining balances from limits and spends")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute remaining balances and print them as JSON
    Run {
        /// Limits file: JSON object or user,amount CSV
        #[arg(long)]
        limits: String,

        /// Spends file: JSON object or user,amount CSV
        #[arg(long)]
        spends: String,

        /// Declared total balance (must equal the sum of all limits)
        #[arg(short, long)]
        balance: f64,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate limits and spends without computing
    Check {
        /// Limits file: JSON object or user,amount CSV
        #[arg(long)]
        limits: String,

        /// Spends file: JSON object or user,amount CSV
        #[arg(long)]
        spends: String,

        /// Declared total balance (must equal the sum of all limits)
        #[arg(short, long)]
        balance: f64,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run {
                limits,
                spends,
                balance,
                output,
            } => {
                let limit_map = load_user_map(&limits)?;
                let spend_map = load_user_map(&spends)?;

                if self.verbose {
                    eprintln!(
                        "[resto] {} users in limits, {} in spends, declared balance {}",
                        limit_map.len(),
                        spend_map.len(),
                        format_amount(balance)
                    );
                }

                let calculator = BalanceCalculator::new(limit_map, spend_map, balance);
                let report = calculator.run()?;

                let mut writer: Box<dyn Write> = match &output {
                    Some(path) => {
                        let file = File::create(path)
                            .with_context(|| format!("Failed to create output file: {}", path))?;
                        Box::new(file)
                    }
                    None => Box::new(stdout()),
                };
                writeln!(writer, "{}", report)?;

                if let Some(path) = &output {
                    eprintln!("Wrote remaining balances to {}", path);
                }
            }

            Commands::Check {
                limits,
                spends,
                balance,
            } => {
                run_check_command(&limits, &spends, balance)?;
            }
        }

        Ok(())
    }
}

fn run_check_command(limits: &str, spends: &str, balance: f64) -> Result<()> {
    println!("Checking input consistency...\n");

    let limit_map = load_user_map(limits)?;
    let spend_map = load_user_map(spends)?;
    let calculator = BalanceCalculator::new(limit_map, spend_map, balance);
    let report = calculator.check()?;

    println!("Users:            {}", report.user_count);
    println!("Sum of limits:    {}", format_amount(report.limit_total));
    println!("Declared balance: {}", format_amount(report.declared_balance));
    println!(
        "Balanced:         {}",
        if report.is_balanced { "OK" } else { "MISMATCH!" }
    );
    println!();

    if report.is_healthy() {
        println!("Inputs are consistent.");
    } else {
        println!("Issues found:");
        for issue in &report.issues {
            println!("  - {}", issue);
        }
        anyhow::bail!("Input validation failed");
    }

    Ok(())
}
