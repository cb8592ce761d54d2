use tracing::{info, warn};

use crate::{classifier::SiteClassifier, domain::Verdict, extractor::SiteExtractor};

/// Runs extract then classify for one submitted URL. Holds no per-request
/// state and is shared across handlers.
pub struct SiteAnalyzer {
    extractor: SiteExtractor,
    classifier: SiteClassifier,
}

impl SiteAnalyzer {
    pub fn new(extractor: SiteExtractor, classifier: SiteClassifier) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    pub async fn analyze(&self, url: &str) -> Verdict {
        let extraction = self.extractor.extract(url).await;
        if let Err(err) = &extraction {
            warn!(target: "analyzer", url, error = %err, detail = %err.detail(), "extraction failed");
        }

        let verdict = self.classifier.classify(&extraction).await;
        match &verdict {
            Verdict::Error(detail) => {
                warn!(target: "analyzer", url, detail = %detail, "site analysis failed")
            }
            _ => info!(target: "analyzer", url, verdict = %verdict, "site analyzed"),
        }
        verdict
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        classifier::mock::MockCompletion,
        config::{PromptConfig, WebContentConfig},
        extractor::{mock::MockTransport, transport::TransportError},
    };

    fn analyzer(transport: Arc<MockTransport>, service: Arc<MockCompletion>) -> SiteAnalyzer {
        SiteAnalyzer::new(
            SiteExtractor::new(transport, WebContentConfig::default()),
            SiteClassifier::new(service, PromptConfig::default()),
        )
    }

    #[tokio::test]
    async fn fetch_then_classify() {
        let transport = Arc::new(MockTransport::respond(200, "<title>Shop</title>"));
        let service = Arc::new(MockCompletion::replying("Suspicious"));
        let verdict = analyzer(transport.clone(), service.clone())
            .analyze("http://shop.example")
            .await;

        assert_eq!(verdict, Verdict::Suspicious);
        assert_eq!(transport.calls(), 1);
        assert_eq!(service.calls(), 1);
        assert!(service
            .last_prompt()
            .is_some_and(|prompt| prompt.contains("Title: Shop")));
    }

    #[tokio::test]
    async fn unreachable_site_skips_classification() {
        let transport = Arc::new(MockTransport::fail(|| {
            TransportError::Connect("dns error".into())
        }));
        let service = Arc::new(MockCompletion::replying("Safe"));
        let verdict = analyzer(transport, service.clone())
            .analyze("http://badhost.invalid")
            .await;

        assert_eq!(verdict, Verdict::fetch_failed());
        assert_eq!(service.calls(), 0);
    }
}
