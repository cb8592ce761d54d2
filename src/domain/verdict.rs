use std::fmt;

pub const FETCH_FAILED: &str = "Error fetching site";
const UNEXPECTED_REPLY: &str = "unexpected classification reply";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Suspicious,
    Error(String),
}

impl Verdict {
    /// Reduces a completion to a verdict. Only an exact one-word answer
    /// counts, ignoring case and surrounding whitespace.
    pub fn from_reply(reply: &str) -> Self {
        let trimmed = reply.trim();
        if trimmed.eq_ignore_ascii_case("safe") {
            Verdict::Safe
        } else if trimmed.eq_ignore_ascii_case("suspicious") {
            Verdict::Suspicious
        } else {
            Verdict::Error(format!("{UNEXPECTED_REPLY}: {trimmed:?}"))
        }
    }

    pub fn fetch_failed() -> Self {
        Verdict::Error(FETCH_FAILED.to_string())
    }

    /// User-facing label. Error details are never shown.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "✅ Website is Safe",
            Verdict::Suspicious => "⚠️ Website is Suspicious",
            Verdict::Error(_) => "❗ Error analyzing site",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Safe => f.write_str("Safe"),
            Verdict::Suspicious => f.write_str("Suspicious"),
            Verdict::Error(detail) => write!(f, "Error: {detail}"),
        }
    }
}
