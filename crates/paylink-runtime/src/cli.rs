//! CLI definition using clap derive.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "paylink", about = "payment redirect deep-link gateway")]
pub struct Cli {
    /// Override the custom redirect scheme (default: lidapay)
    #[arg(long, global = true, env = "PAYLINK_SCHEME")]
    pub scheme: Option<String>,

    /// Override the custom redirect host (default: redirect-url)
    #[arg(long, global = true, env = "PAYLINK_REDIRECT_HOST")]
    pub redirect_host: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a URI and print the resulting event as JSON
    Classify(ClassifyOpts),
    /// Print the WebView dispatch script for a matched URI
    Script(ScriptOpts),
}

#[derive(clap::Args)]
pub struct ClassifyOpts {
    /// Raw activation URI
    pub uri: String,

    /// Activation action tag
    #[arg(long, default_value = "view")]
    pub action: String,
}

#[derive(clap::Args)]
pub struct ScriptOpts {
    /// Raw activation URI
    pub uri: String,
}
