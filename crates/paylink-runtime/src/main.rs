//! paylink: CLI for exercising the payment redirect gateway from a shell.
//! Useful for checking what a provider-emitted URL classifies to before it
//! ever reaches a device.

use clap::Parser;
use paylink_gateway::gateway::DeepLinkGateway;
use paylink_gateway::pattern::{CUSTOM_HOST, CUSTOM_SCHEME, HTTPS_HOST, HTTPS_PATH, RedirectPattern};

mod cli;
mod cmd_classify;
mod cmd_script;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("PAYLINK_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let gateway = build_gateway(args.scheme.as_deref(), args.redirect_host.as_deref());

    match args.command {
        cli::Command::Classify(opts) => cmd_classify::cmd_classify(&gateway, &opts),
        cli::Command::Script(opts) => cmd_script::cmd_script(&gateway, &opts),
    }
}

/// Built-in pattern set, with the custom-scheme shape optionally overridden
/// for ad-hoc testing. The HTTPS shape is fixed.
fn build_gateway(scheme: Option<&str>, redirect_host: Option<&str>) -> DeepLinkGateway {
    let patterns = vec![
        RedirectPattern::scheme_host(
            scheme.unwrap_or(CUSTOM_SCHEME),
            redirect_host.unwrap_or(CUSTOM_HOST),
        ),
        RedirectPattern::exact("https", HTTPS_HOST, HTTPS_PATH),
    ];
    DeepLinkGateway::with_patterns(patterns)
}
