#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// consentgate - Terms & Conditions for tax resolution
#[derive(Parser, Debug)]
#[command(name = "consentgate-desktop")]
#[command(about = "Terms and conditions acceptance screen for tax resolution intake")]
struct Args {
    /// Window title
    #[arg(long, default_value = "Terms & Conditions")]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up logging; RUST_LOG takes precedence over -v
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,consentgate=info",
        1 => "info,consentgate_core=debug,consentgate=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    tracing::info!(
        "Starting '{}' at {}x{}",
        args.title,
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
