use clap::{Parser, Subcommand, ValueEnum};
use schemars::schema_for;
use tracing::debug;

#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_BIN_NAME"))]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcmd,
}

#[derive(Debug, Subcommand)]
enum Subcmd {
    /// Generate JSON schema for the specified config file.
    Schema {
        /// Kind of config file.
        #[clap(value_enum, ignore_case = true)]
        kind: ConfigKind,
    },
}

#[derive(Debug, Clone, ValueEnum)]
enum ConfigKind {
    RelayAppConfig,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    debug!(?args);

    match args.subcommand {
        Subcmd::Schema { kind } => {
            let schema = match kind {
                ConfigKind::RelayAppConfig => schema_for!(j5_apps::RelayAppConfig),
            };
            println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        }
    }
}
