mod html;
pub mod transport;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    config::WebContentConfig,
    domain::{ExtractError, Extraction},
};

pub use html::parse_signals;
pub use transport::{HttpPageTransport, PageTransport};

/// Fetches one page and turns it into `SiteSignals`. Every failure is
/// folded into the `Err` arm; nothing escapes to the caller.
pub struct SiteExtractor {
    transport: Arc<dyn PageTransport>,
    config: WebContentConfig,
}

impl SiteExtractor {
    pub fn new(transport: Arc<dyn PageTransport>, config: WebContentConfig) -> Self {
        Self { transport, config }
    }

    pub async fn extract(&self, url: &str) -> Extraction {
        let page = match self.transport.get(url, self.config.fetch_timeout).await {
            Ok(page) => page,
            Err(err) => {
                warn!(target: "extractor", url, error = %err, "page fetch failed");
                return Err(ExtractError::transport(err.to_string()));
            }
        };

        if page.status != 200 {
            warn!(target: "extractor", url, status = page.status, "page returned non-200 status");
            return Err(ExtractError::status(page.status));
        }

        let signals = parse_signals(url, &page.body, self.config.snapshot_max_length);
        debug!(
            target: "extractor",
            url,
            title = %signals.title,
            snapshot_chars = signals.snapshot.chars().count(),
            "page signals extracted"
        );
        Ok(signals)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use async_trait::async_trait;

    use super::transport::{FetchedPage, PageTransport, TransportError};

    pub enum MockPage {
        Respond { status: u16, body: String },
        Fail(fn() -> TransportError),
    }

    pub struct MockTransport {
        page: MockPage,
        calls: AtomicUsize,
    }

    impl MockTransport {
        pub fn respond(status: u16, body: &str) -> Self {
            Self {
                page: MockPage::Respond {
                    status,
                    body: body.to_string(),
                },
                calls: AtomicUsize::new(0),
            }
        }

        pub fn fail(err: fn() -> TransportError) -> Self {
            Self {
                page: MockPage::Fail(err),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageTransport for MockTransport {
        async fn get(&self, _url: &str, _timeout: Duration) -> Result<FetchedPage, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.page {
                MockPage::Respond { status, body } => Ok(FetchedPage {
                    status: *status,
                    body: body.clone(),
                }),
                MockPage::Fail(err) => Err(err()),
            }
        }
    }
}
