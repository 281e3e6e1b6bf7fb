//! Analyze command implementation.
//!
//! Reads a batch result file and prints the quantity each experiment reports.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;

use chainsynth_hal::{
    BatchResult, BellProbabilities, CoherenceProfile, depth_axis, survival_probabilities,
};

use super::common::load_results;

/// Which quantity to derive from the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Analysis {
    /// All-zero probability per Trotter step.
    Survival,
    /// Bell / not-Bell split of teleportation endpoints.
    Bell,
    /// Normalized GHZ correlators.
    Coherence,
}

/// Execute the analyze command.
pub fn execute(
    analysis: Analysis,
    results: &str,
    width: usize,
    sentinel: Option<f64>,
    qubits: Option<usize>,
) -> Result<()> {
    let batch = load_results(results)?;
    println!(
        "{} Analyzing {} results from {}",
        style("→").cyan().bold(),
        style(batch.len()).yellow(),
        style(results).green()
    );

    match analysis {
        Analysis::Survival => survival(&batch, width, sentinel),
        Analysis::Bell => bell(&batch),
        Analysis::Coherence => coherence(&batch, qubits),
    }
}

fn survival(batch: &BatchResult, width: usize, sentinel: Option<f64>) -> Result<()> {
    let outcomes = survival_probabilities(batch, width)?;
    let steps = u32::try_from(outcomes.len()).context("Too many steps")?;
    let depths = depth_axis(steps);

    println!("  {:>5} {:>9} {:>10}", "step", "2q depth", "survival");
    for (i, (outcome, depth)) in outcomes.iter().zip(depths).enumerate() {
        let value = match sentinel {
            Some(v) if outcome.is_missing() => {
                format!("{:.4} (missing)", outcome.or_sentinel(v))
            }
            _ => outcome.to_string(),
        };
        println!("  {:>5} {depth:>9} {value:>10}", i + 1);
    }
    print_missing(batch);
    Ok(())
}

fn bell(batch: &BatchResult) -> Result<()> {
    println!("  {:>5} {:>8} {:>9}", "chain", "bell", "not bell");
    for (i, entry) in batch.iter().enumerate() {
        match entry {
            Some(result) => {
                let probs = BellProbabilities::from_result(result)
                    .with_context(|| format!("Result {i}"))?;
                println!(
                    "  {:>5} {:>8.4} {:>9.4}",
                    i + 1,
                    probs.bell,
                    probs.not_bell
                );
            }
            None => println!("  {:>5} {:>8}", i + 1, "missing"),
        }
    }
    print_missing(batch);
    Ok(())
}

fn coherence(batch: &BatchResult, qubits: Option<usize>) -> Result<()> {
    for (i, entry) in batch.iter().enumerate() {
        let Some(result) = entry else {
            println!("  result {}: missing", i + 1);
            continue;
        };
        let width = match qubits {
            Some(n) => n,
            None => result
                .counts
                .iter()
                .next()
                .map(|(bits, _)| bits.len())
                .with_context(|| format!("Result {i} has no counts"))?,
        };
        let profile = CoherenceProfile::from_counts(&result.counts, width)
            .with_context(|| format!("Result {i}"))?;
        println!("  result {} ({width} qubits):", i + 1);
        println!("  {:>5} {:>10} {:>11}", "i", "<Z0 Zi>", "normalized");
        let normalized = profile.normalized();
        for (k, c) in profile.correlators.iter().enumerate() {
            let norm = normalized
                .as_ref()
                .map_or_else(|| "undefined".to_string(), |n| format!("{:.4}", n[k]));
            println!("  {:>5} {c:>10.4} {norm:>11}", k + 1);
        }
    }
    print_missing(batch);
    Ok(())
}

fn print_missing(batch: &BatchResult) {
    let missing = batch.missing();
    if !missing.is_empty() {
        println!(
            "{} {} of {} circuits have no result",
            style("!").yellow().bold(),
            missing.len(),
            batch.len()
        );
    }
}
