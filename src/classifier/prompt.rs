use crate::{config::PromptConfig, domain::SiteSignals};

/// Builds the classification prompt. Page-derived fields go in verbatim,
/// so page content can steer the model. `field_max_chars` only bounds how
/// much of each field is embedded; it does not escape anything.
pub fn build_prompt(signals: &SiteSignals, config: &PromptConfig) -> String {
    let limit = config.field_max_chars;
    format!(
        r#"Based only on the following information, answer in ONE word only: "Safe" or "Suspicious".

Website URL: {url}
Title: {title}
Description: {description}
Keywords: {keywords}
Page Text Snapshot:
{snapshot}

Only reply with "Safe" if the website looks legitimate.
Reply with "Suspicious" if it might be fake, dangerous, or phishing.
No explanation. No extra text. Only one word."#,
        url = clip(&signals.url, limit),
        title = clip(&signals.title, limit),
        description = clip(&signals.description, limit),
        keywords = clip(&signals.keywords, limit),
        snapshot = clip(&signals.snapshot, limit),
    )
}

fn clip(value: &str, limit: Option<usize>) -> &str {
    match limit.and_then(|max| value.char_indices().nth(max)) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
