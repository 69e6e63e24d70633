use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use neolog_bridge::{ConfigBridge, EventOutcome, HostEvent, HostRuntime};
use neolog_types::{Platform, SettingsMessage, WatchInfo};

#[derive(Parser)]
#[command(name = "neolog")]
#[command(author, version, about = "Developer harness for the NeoLog watchface companion", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the configuration page URL the companion would open
    Url {
        /// Watch platform reported by the host
        #[arg(short, long, default_value = "aplite")]
        platform: String,

        /// Ambient phone locale
        #[arg(short, long, default_value = "en_US")]
        locale: String,

        /// Pretend the host lacks the watch info capability
        #[arg(long)]
        no_watch_info: bool,
    },

    /// Relay a URL-encoded configuration response to a simulated watch
    Relay {
        /// URL-encoded JSON string, as handed back by the page
        response: String,
    },

    /// Drive the full ready/showConfiguration/webviewclosed sequence
    Simulate {
        /// Watch platform reported by the host
        #[arg(short, long, default_value = "aplite")]
        platform: String,

        /// Ambient phone locale
        #[arg(short, long, default_value = "en_US")]
        locale: String,

        /// Response the closing page hands back
        #[arg(short, long)]
        response: Option<String>,
    },
}

/// Host runtime that narrates to the terminal what a phone would do.
struct TerminalHost {
    watch: Option<WatchInfo>,
    locale: String,
}

impl TerminalHost {
    fn new(platform: &str, locale: &str, with_watch_info: bool) -> Self {
        let platform = Platform::from_name(platform).unwrap_or_else(|| {
            tracing::debug!("Unknown platform name '{}', treating as unknown", platform);
            Platform::Unknown
        });
        Self {
            watch: with_watch_info.then(|| WatchInfo::new(platform, locale)),
            locale: locale.to_string(),
        }
    }
}

#[async_trait]
impl HostRuntime for TerminalHost {
    fn watch_info(&self) -> Option<WatchInfo> {
        self.watch.clone()
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }

    fn open_url(&self, url: &str) -> neolog_bridge::Result<()> {
        println!("open: {url}");
        Ok(())
    }

    async fn send_app_message(&self, message: &SettingsMessage) -> neolog_bridge::Result<()> {
        for (key, value) in message.to_tuples() {
            println!("send: key {key} = {value:?}");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Url {
            platform,
            locale,
            no_watch_info,
        } => {
            let host = TerminalHost::new(&platform, &locale, !no_watch_info);
            let bridge = ConfigBridge::new(host);
            let url = bridge.on_show_configuration()?;
            println!("{url}");
        }
        Commands::Relay { response } => {
            let host = TerminalHost::new("aplite", "en_US", true);
            let bridge = ConfigBridge::new(host);
            match bridge.on_webview_closed(&response).await? {
                Some(message) => println!("{}", serde_json::to_string_pretty(&message)?),
                None => println!("no settings to forward (backgroundColor absent)"),
            }
        }
        Commands::Simulate {
            platform,
            locale,
            response,
        } => {
            let host = TerminalHost::new(&platform, &locale, true);
            let bridge = ConfigBridge::new(host);

            bridge.handle_event(HostEvent::Ready).await?;
            bridge.handle_event(HostEvent::ShowConfiguration).await?;

            if let Some(response) = response {
                let outcome = bridge.handle_event(HostEvent::WebviewClosed { response }).await?;
                match outcome {
                    EventOutcome::Forwarded { message } => {
                        println!("forwarded: {}", serde_json::to_string(&message)?);
                    }
                    EventOutcome::Skipped => {
                        println!("skipped: response carried no backgroundColor");
                    }
                    other => println!("outcome: {other:?}"),
                }
            }
        }
    }

    Ok(())
}
