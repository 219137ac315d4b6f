use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use clap::Parser;
use link_pulse::{
    tracing::init_tracing_subscriber, GroqClient, PageLoaderSettings, SummaryPipelineBuilder,
    WebPageLoader, YoutubeLoader,
};
use pulse_web::{
    animation::{Animations, LOADING_ANIMATION_URL, SUCCESS_ANIMATION_URL},
    run_server,
    state::AppState,
};

#[derive(Parser)]
#[command(name = "pulse-web", about = "Summarize a YouTube video or web page")]
struct Cli {
    /// Address the web server binds to
    #[arg(long, env = "PULSE_BIND", default_value = "127.0.0.1:8501")]
    bind: SocketAddr,

    /// Groq model used for summaries
    #[arg(long, env = "GROQ_MODEL", default_value = GroqClient::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the OpenAI-compatible Groq API
    #[arg(long, env = "GROQ_BASE_URL", default_value = GroqClient::DEFAULT_BASE_URL)]
    groq_base_url: String,

    /// Lottie animation shown while loading
    #[arg(long, env = "PULSE_LOADING_ANIMATION_URL", default_value = LOADING_ANIMATION_URL)]
    loading_animation_url: String,

    /// Lottie animation shown after a successful summary
    #[arg(long, env = "PULSE_SUCCESS_ANIMATION_URL", default_value = SUCCESS_ANIMATION_URL)]
    success_animation_url: String,

    /// Verify TLS certificates when fetching web pages (off by default)
    #[arg(long, env = "PULSE_VERIFY_TLS")]
    verify_tls: bool,

    /// Timeout for every outbound request, in seconds
    #[arg(long, env = "PULSE_REQUEST_TIMEOUT_SECS", default_value = "30")]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let timeout = Duration::from_secs(cli.request_timeout_secs);
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let animations = Animations::load(
        &http_client,
        &cli.loading_animation_url,
        &cli.success_animation_url,
    )
    .await;

    let page_loader = WebPageLoader::new(
        PageLoaderSettings {
            timeout,
            ..Default::default()
        }
        .with_verify_tls(cli.verify_tls),
    )
    .context("Failed to build web page loader")?;

    let summarizer = GroqClient::new(http_client.clone())
        .with_base_url(cli.groq_base_url)
        .with_model(cli.model);

    let pipeline = SummaryPipelineBuilder::new()
        .video_loader(YoutubeLoader::with_client(http_client))
        .page_loader(page_loader)
        .summarizer(summarizer)
        .build();

    tracing::info!(model = pipeline.model(), "Starting link pulse");
    run_server(AppState::new(pipeline, animations), cli.bind).await
}
