//! `paylink script`: print the WebView dispatch script for a matched URI.

use paylink_core::types::Activation;
use paylink_gateway::bridge::dispatch_script;
use paylink_gateway::gateway::DeepLinkGateway;

use crate::cli::ScriptOpts;

pub fn cmd_script(gateway: &DeepLinkGateway, opts: &ScriptOpts) -> anyhow::Result<()> {
    let activation = Activation::view(&opts.uri);
    match gateway.handle_activation(&activation) {
        Some(event) => {
            println!("{}", dispatch_script(&event));
            Ok(())
        }
        None => anyhow::bail!("uri did not match a recognized redirect shape: {}", opts.uri),
    }
}
