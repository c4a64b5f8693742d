use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use j5_apps::{utils::init_tracing, RelayAppConfig};
use j5_bus::{DummyCommandSender, DummyStatusFeed, StatusFeed};
use j5_relay::{CommandBuilder, CommandRelay, StatusObserver};
use tracing::{debug, info};

/// Publishes the given velocity command to the vehicle at a fixed rate and
/// prints received status telemetry.
#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_BIN_NAME"))]
struct Opt {
    /// Forward velocity in m/s followed by turn rate in rad/s. A missing or
    /// malformed value falls back to 0.0; values beyond the configured
    /// bounds saturate.
    #[clap(allow_hyphen_values = true)]
    command: Vec<String>,
    /// Path to the setting file.
    #[clap(short, long)]
    config_path: Option<PathBuf>,
    /// Prints the default setting as TOML.
    #[clap(long)]
    show_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let opt = Opt::parse();
    debug!("opt: {opt:?}");

    if opt.show_default_config {
        print!("{}", toml::to_string(&RelayAppConfig::default())?);
        return Ok(());
    }

    let config = match &opt.config_path {
        Some(path) => RelayAppConfig::new(path)?,
        None => RelayAppConfig::default(),
    };

    let command = CommandBuilder::new(config.relay.limits).build(&opt.command);
    info!(
        linear = command.linear,
        angular = command.angular,
        command_topic = j5_bus::COMMAND_TOPIC,
        status_topic = j5_bus::STATUS_TOPIC,
        "relaying velocity command"
    );

    // Real transports implement the j5-bus traits; the builtin client pair
    // runs the relay against the in-process bus.
    let sender = DummyCommandSender::new();
    let feed = DummyStatusFeed::new();
    let subscription = feed.subscribe(StatusObserver::new().into_handler())?;

    let relay = Arc::new(CommandRelay::new(command, sender, &config.relay));
    let relay_for_signal = relay.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutting down");
            relay_for_signal.stop();
        }
    });
    relay.run(subscription).await;
    Ok(())
}
