//! consentgate CLI
//!
//! Thin wrapper around consentgate-core that replays user actions against a
//! fresh gate and prints where it ends up. Useful for scripting checks of
//! the gating rules without a window.
//!
//! ## Usage
//!
//! ```bash
//! # List documents and agreements
//! consentgate keys
//!
//! # Sign two documents and check one box
//! consentgate run --sign serviceAgreement --sign form8821 --agree retainerCredit
//!
//! # Everything, then try to proceed, as JSON
//! consentgate run \
//!     --sign serviceAgreement --sign form8821 --sign form2848 \
//!     --agree noDirectPayments --agree retainerCredit --agree phase2Understanding \
//!     --proceed --json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use consentgate_core::{AgreementKey, ConsentGate, DocumentKey, GateReport, Transition};

/// consentgate - Terms gate driver
#[derive(Parser)]
#[command(name = "consentgate")]
#[command(version = "0.1.0")]
#[command(about = "consentgate - Terms & Conditions gate driver")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every document and agreement key
    Keys,

    /// Apply actions to a fresh gate and print the result
    ///
    /// Actions run in a fixed order: signs, then agreement toggles, then
    /// proceed, then back.
    Run {
        /// Sign a document (repeatable)
        #[arg(long = "sign", value_name = "DOCUMENT")]
        sign: Vec<DocumentKey>,

        /// Toggle an agreement (repeatable; twice unchecks)
        #[arg(long = "agree", value_name = "AGREEMENT")]
        agree: Vec<AgreementKey>,

        /// Press "Process Payment"
        #[arg(long)]
        proceed: bool,

        /// Press back on the payment step
        #[arg(long)]
        back: bool,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Set up logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn check(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn print_keys() {
    println!("Documents:");
    for key in DocumentKey::ALL {
        println!("  {:<20} {}", key.as_str(), key.title());
        println!("  {:<20} {}", "", key.description());
    }
    println!();
    println!("Agreements:");
    for key in AgreementKey::ALL {
        println!("  {:<20} {}", key.as_str(), key.statement());
    }
}

fn print_report(report: &GateReport, outcome: Option<&Transition>) {
    println!("State: {}", report.state.label());
    println!("Progress: {} of {}", report.satisfied, report.total);
    println!();

    println!("Documents:");
    for (key, signed) in report.signed_documents.iter() {
        println!("  {} {:<20} {}", check(signed), key.as_str(), key.title());
    }
    println!("Agreements:");
    for (key, checked) in report.agreements.iter() {
        println!("  {} {}", check(checked), key.as_str());
    }

    if !report.missing.is_empty() {
        println!();
        println!("Missing ({}):", report.missing.len());
        for requirement in &report.missing {
            println!("  {}", requirement);
        }
    }

    match outcome {
        Some(Transition::Advanced(snapshot)) => {
            println!();
            println!("Proceed: advanced to payment");
            println!("  Consent: {}", snapshot.id);
            println!("  Accepted: {}", snapshot.accepted_at.to_rfc3339());
        }
        Some(Transition::Blocked { missing }) => {
            println!();
            println!("Proceed: blocked ({} missing)", missing.len());
        }
        Some(Transition::AlreadyInPayment) => {
            println!();
            println!("Proceed: already on payment step");
        }
        None => {}
    }
}

fn run(
    sign: &[DocumentKey],
    agree: &[AgreementKey],
    proceed: bool,
    back: bool,
) -> (ConsentGate, Option<Transition>) {
    let mut gate = ConsentGate::new();

    for key in sign {
        gate.sign_document(*key);
    }
    for key in agree {
        gate.toggle_agreement(*key);
    }

    let outcome = proceed.then(|| gate.proceed());
    if back {
        gate.back();
    }

    tracing::info!(
        state = gate.state().label(),
        missing = gate.missing().len(),
        "Replayed actions"
    );
    (gate, outcome)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Keys => print_keys(),
        Commands::Run {
            sign,
            agree,
            proceed,
            back,
            json,
        } => {
            let (gate, outcome) = run(&sign, &agree, proceed, back);
            let report = gate.report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, outcome.as_ref());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use consentgate_core::Requirement;

    #[test]
    fn run_applies_signs_before_proceed() {
        let (gate, outcome) = run(&DocumentKey::ALL, &AgreementKey::ALL, true, false);
        assert!(matches!(outcome, Some(Transition::Advanced(_))));
        assert!(gate.payment_snapshot().is_some());
    }

    #[test]
    fn run_without_proceed_has_no_outcome() {
        let (gate, outcome) = run(&[DocumentKey::Form8821], &[], false, true);
        assert!(outcome.is_none());
        assert_eq!(gate.progress(), (1, 6));
        assert!(gate.is_satisfied(Requirement::Document(DocumentKey::Form8821)));
    }

    #[test]
    fn check_marks() {
        assert_eq!(check(true), "[x]");
        assert_eq!(check(false), "[ ]");
    }
}
