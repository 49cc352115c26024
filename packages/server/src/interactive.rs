//! Interactive mode for the server.
//!
//! Prompts for the bind address and port, starting from the given
//! configuration, before starting the server.

use dialoguer::{Confirm, Input};

use crate::{ServerConfig, ServerError};

/// Runs the server in interactive mode, prompting for configuration.
///
/// The values in `config` are offered as the prompt defaults. Declining the
/// final confirmation exits without starting the server.
///
/// # Errors
///
/// Returns [`ServerError::Prompt`] if a prompt can't be read from the
/// terminal, or [`ServerError::Io`] if the server fails to start.
#[allow(clippy::future_not_send)]
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    println!("Campus Safety Server");
    println!();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(config.bind_addr.clone())
        .interact_text()?;

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(config.port)
        .interact_text()?;

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(ServerConfig {
        bind_addr,
        port,
        ..config
    })
    .await
}
