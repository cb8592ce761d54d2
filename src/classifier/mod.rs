pub mod client;
mod inference;
mod prompt;

use std::sync::Arc;

use tracing::{debug, warn};

use self::prompt::build_prompt;
use crate::{
    config::PromptConfig,
    domain::{Extraction, Verdict},
};

pub use client::{CompletionService, OpenAiClient};

/// Turns extracted signals into a verdict with one completion call.
pub struct SiteClassifier {
    service: Arc<dyn CompletionService>,
    prompt: PromptConfig,
}

impl SiteClassifier {
    pub fn new(service: Arc<dyn CompletionService>, prompt: PromptConfig) -> Self {
        Self { service, prompt }
    }

    pub async fn classify(&self, extraction: &Extraction) -> Verdict {
        let signals = match extraction {
            Ok(signals) => signals,
            Err(_) => return Verdict::fetch_failed(),
        };

        let prompt = build_prompt(signals, &self.prompt);
        match self.service.complete(&prompt).await {
            Ok(reply) => {
                debug!(target: "classifier", url = %signals.url, reply = %reply, "completion received");
                Verdict::from_reply(&reply)
            }
            Err(err) => {
                warn!(target: "classifier", url = %signals.url, error = %err, "completion failed");
                Verdict::Error(err.to_string())
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::{mock::MockCompletion, *};
    use crate::domain::{ExtractError, SiteSignals};

    fn classifier(service: Arc<MockCompletion>) -> SiteClassifier {
        SiteClassifier::new(service, PromptConfig::default())
    }

    fn signals() -> Extraction {
        Ok(SiteSignals {
            url: "http://example.com".into(),
            title: "Example".into(),
            description: "test".into(),
            keywords: String::new(),
            snapshot: "Example".into(),
        })
    }

    #[tokio::test]
    async fn failed_extraction_short_circuits() {
        let service = Arc::new(MockCompletion::replying("Safe"));
        let classifier = classifier(service.clone());

        for err in [ExtractError::status(404), ExtractError::transport("refused")] {
            let verdict = classifier.classify(&Err(err)).await;
            assert_eq!(verdict, Verdict::Error("Error fetching site".into()));
        }
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn one_word_replies_map_to_verdicts() {
        let cases = [
            ("Safe", Verdict::Safe),
            (" safe\n", Verdict::Safe),
            ("SUSPICIOUS", Verdict::Suspicious),
            ("  Suspicious  ", Verdict::Suspicious),
        ];
        for (reply, expected) in cases {
            let service = Arc::new(MockCompletion::replying(reply));
            let verdict = classifier(service.clone()).classify(&signals()).await;
            assert_eq!(verdict, expected, "reply {reply:?}");
            assert_eq!(service.calls(), 1);
        }
    }

    #[tokio::test]
    async fn unexpected_reply_is_an_error() {
        let service = Arc::new(MockCompletion::replying("maybe"));
        let verdict = classifier(service).classify(&signals()).await;
        assert!(matches!(verdict, Verdict::Error(ref detail) if detail.contains("maybe")));
    }

    #[tokio::test]
    async fn service_failure_carries_its_message() {
        let service = Arc::new(MockCompletion::failing("upstream exploded"));
        let verdict = classifier(service.clone()).classify(&signals()).await;

        assert_eq!(service.calls(), 1);
        assert_eq!(
            verdict,
            Verdict::Error("malformed completion response: upstream exploded".into())
        );
    }

    #[tokio::test]
    async fn prompt_sent_contains_the_signals() {
        let service = Arc::new(MockCompletion::replying("Safe"));
        classifier(service.clone()).classify(&signals()).await;

        let prompt = service.last_prompt().expect("prompt recorded");
        assert!(prompt.contains("Website URL: http://example.com"));
        assert!(prompt.contains("Title: Example"));
    }
}
