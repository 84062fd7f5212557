use clap::Parser;
use lc_chat_relay::relay_state::{RelayConfig, RelayState};
use lc_chat_relay::server;
use tokio::signal;

#[derive(Parser, Debug)]
#[command(name = "lc-chat-relay")]
#[command(
    about = "HTTP relay between the LC chat front-end, a completion provider, and a CRM lead sink"
)]
struct CliArgs {
    /// Host address to bind the relay server
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the relay server
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Chat-completion endpoint URL
    #[arg(long, default_value = "https://api.openai.com/v1/chat/completions")]
    completion_url: String,

    /// Model identifier sent with every completion request
    #[arg(long, default_value = "gpt-4")]
    model: String,

    /// CRM contact-creation endpoint URL
    #[arg(long, default_value = "https://api.hubapi.com/crm/v3/objects/contacts")]
    lead_sink_url: String,

    /// Timeout in seconds applied to both outbound calls
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Origins accepted by the CORS layer
    #[arg(long, num_args = 0.., default_values_t = [
        "https://lcacosta.com".to_string(),
        "http://localhost:3000".to_string(),
    ])]
    cors_allowed_origins: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    server::init_logging();

    let completion_api_key = std::env::var("OPENAI_API_KEY").ok();
    if completion_api_key.is_none() {
        log::warn!("OPENAI_API_KEY not set; completion calls will fail");
    }
    let lead_sink_token = std::env::var("HUBSPOT_TOKEN").ok();
    if lead_sink_token.is_none() {
        log::warn!("HUBSPOT_TOKEN not set; lead capture will be skipped");
    }

    let config = RelayConfig {
        host: args.host,
        port: args.port,
        completion_url: args.completion_url,
        model: args.model,
        completion_api_key,
        lead_sink_url: args.lead_sink_url,
        lead_sink_token,
        cors_allowed_origins: args.cors_allowed_origins,
        timeout_secs: args.timeout_secs,
    };
    let relay_state = RelayState::new(config)?;

    actix_web::rt::System::new().block_on(async move {
        tokio::select! {
            res = server::startup(relay_state) => {
                res.map_err(anyhow::Error::from)
            }
            _ = signal::ctrl_c() => {
                log::info!("Received Ctrl+C, shutting down");
                Ok(())
            }
        }
    })
}
