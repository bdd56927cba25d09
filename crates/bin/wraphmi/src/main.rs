//! # wraphmi — operator panel for the stretch-wrapping machine
//!
//! Composition root that wires the chosen transport to the terminal panel.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` on stderr
//! - Construct the transport adapter selected by `transport.mode`
//! - Construct the status sync client, injecting the adapter and the
//!   terminal presenter via port traits
//! - Forward operator commands read from stdin
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod operator;

use anyhow::Context as _;
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing_subscriber::EnvFilter;

use wraphmi_adapter_console::ConsolePresenter;
use wraphmi_adapter_http_reqwest::HttpDeviceApi;
use wraphmi_adapter_ws_tungstenite::WsConnector;
use wraphmi_app::dashboard::Dashboard;
use wraphmi_app::poll_client::PollClient;
use wraphmi_app::stream_client::StreamClient;
use wraphmi_domain::command::Command;

use crate::config::{Config, TransportMode};

/// The status sync client for the configured transport.
enum Client {
    Poll(PollClient<HttpDeviceApi, ConsolePresenter>),
    Stream(StreamClient<WsConnector, ConsolePresenter>),
}

impl Client {
    fn build(config: &Config, presenter: ConsolePresenter) -> anyhow::Result<Self> {
        let dashboard = Dashboard::new(presenter);
        let client = match config.transport.mode {
            TransportMode::Poll => {
                let http = config.http_config();
                let api = HttpDeviceApi::new(&http).context("failed to build HTTP client")?;
                tracing::info!(url = %http.base_url, "using polling transport");
                Self::Poll(PollClient::new(api, dashboard, config.poll_settings()))
            }
            TransportMode::Stream => {
                let connector = WsConnector::new(&config.ws_config());
                tracing::info!(url = %connector.url(), "using streaming transport");
                Self::Stream(StreamClient::new(
                    connector,
                    dashboard,
                    config.stream_settings(),
                ))
            }
        };
        Ok(client)
    }

    fn dashboard(&self) -> &Dashboard<ConsolePresenter> {
        match self {
            Self::Poll(client) => client.dashboard(),
            Self::Stream(client) => client.dashboard(),
        }
    }

    fn start(&mut self) {
        match self {
            Self::Poll(client) => client.start(),
            Self::Stream(client) => client.start(),
        }
    }

    fn stop(&mut self) {
        match self {
            Self::Poll(client) => client.stop(),
            Self::Stream(client) => client.stop(),
        }
    }

    async fn send_command(&self, command: &Command) {
        match self {
            Self::Poll(client) => client.send_command(command).await,
            Self::Stream(client) => client.send_command(command).await,
        }
    }

    async fn handle_line(&self, line: &str) {
        match operator::parse_line(line) {
            Ok(Some(command)) => self.send_command(&command).await,
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(%err, line, "rejected operator input");
                self.dashboard().log_error(format!("invalid input: {err}"));
            }
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to wraphmi=info");
        EnvFilter::new("wraphmi=info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Forward stdin lines until Ctrl-C. Closing stdin only stops input.
async fn run(client: &Client) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => match line {
                Ok(Some(line)) => client.handle_line(&line).await,
                Ok(None) => {
                    tracing::debug!("stdin closed, waiting for Ctrl-C");
                    input_open = false;
                }
                Err(err) => {
                    tracing::warn!(%err, "cannot read stdin, operator input disabled");
                    input_open = false;
                }
            },
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    tracing::error!(%err, "cannot listen for Ctrl-C");
                }
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);
    tracing::info!(
        host = %config.device.host,
        transport = %config.transport.mode,
        "starting wraphmi"
    );

    let presenter = ConsolePresenter::new(&config.console_config());
    let mut client = Client::build(&config, presenter)?;
    client.start();

    run(&client).await;

    tracing::info!("shutting down");
    client.stop();
    Ok(())
}
