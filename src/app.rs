use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::net::TcpListener;

use crate::{
    analyzer::SiteAnalyzer,
    classifier::{OpenAiClient, SiteClassifier},
    config::AppConfig,
    extractor::{HttpPageTransport, SiteExtractor},
    infrastructure::{directories::ResolvedPaths, shutdown::Shutdown},
    web,
};

pub struct SiteSentinelApp {
    _paths: ResolvedPaths,
    analyzer: Arc<SiteAnalyzer>,
    shutdown: Shutdown,
    config: AppConfig,
}

impl SiteSentinelApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths, shutdown: Shutdown) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("site-sentinel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        let extractor = SiteExtractor::new(
            Arc::new(HttpPageTransport::new(http_client.clone())),
            config.web.clone(),
        );
        let classifier = SiteClassifier::new(
            Arc::new(OpenAiClient::new(http_client, config.openai.clone())),
            config.prompt.clone(),
        );

        if config.openai.api_key.is_none() {
            tracing::warn!(
                target: "config",
                "OPENAI_API_KEY is not set; every classification will fail"
            );
        }

        Ok(Self {
            _paths: paths,
            analyzer: Arc::new(SiteAnalyzer::new(extractor, classifier)),
            shutdown,
            config,
        })
    }

    pub async fn run(self) -> Result<()> {
        let SiteSentinelApp {
            _paths: _,
            analyzer,
            shutdown,
            config,
        } = self;

        let bind_addr = config.server.bind_addr;
        let listener = TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("failed to bind {bind_addr}"))?;

        tracing::info!(
            addr = %bind_addr,
            model = %config.openai.model,
            fetch_timeout = ?config.web.fetch_timeout,
            "site sentinel listening"
        );

        axum::serve(listener, web::router(analyzer))
            .with_graceful_shutdown(shutdown.signalled())
            .await
            .context("HTTP server terminated with an error")?;

        tracing::info!("site sentinel stopped");
        Ok(())
    }
}
