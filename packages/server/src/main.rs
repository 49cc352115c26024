#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Campus safety server binary.
//!
//! ```text
//! campus_safety_server [--bind-addr 0.0.0.0] [--port 8080] [--static-dir static]
//! campus_safety_server --interactive
//! ```
//!
//! Flags override `BIND_ADDR`, `PORT` and `STATIC_DIR` from the environment.

use std::path::PathBuf;

use campus_safety_server::{ServerConfig, ServerError, interactive, run_server};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "campus_safety_server",
    about = "Campus safety API and frontend server"
)]
struct Cli {
    /// Interface to bind
    #[arg(long)]
    bind_addr: Option<String>,
    /// TCP port to listen on
    #[arg(long)]
    port: Option<u16>,
    /// Directory of frontend files served at `/`
    #[arg(long)]
    static_dir: Option<PathBuf>,
    /// Prompt for the bind address and port before starting
    #[arg(long)]
    interactive: bool,
}

impl Cli {
    fn into_config(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind_addr) = self.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        config
    }
}

#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();
    let prompt = cli.interactive;
    let config = cli.into_config(ServerConfig::from_env());

    if prompt {
        return interactive::run(config).await;
    }

    run_server(config).await
}
