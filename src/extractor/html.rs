use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};

use crate::domain::{signals::NO_TITLE, SiteSignals};

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").expect("valid title selector"));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("valid description selector")
});
static META_KEYWORDS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="keywords"]"#).expect("valid keywords selector"));

const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Parses a page body into signals. Never fails: malformed markup yields
/// whatever the parser recovers, missing tags fall back to defaults.
pub fn parse_signals(url: &str, body: &str, snapshot_max_chars: usize) -> SiteSignals {
    let document = Html::parse_document(body);

    SiteSignals {
        url: url.to_string(),
        title: extract_title(&document),
        description: meta_content(&document, &META_DESCRIPTION),
        keywords: meta_content(&document, &META_KEYWORDS),
        snapshot: text_snapshot(&document, snapshot_max_chars),
    }
}

fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn meta_content(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// Joins every visible text node with single spaces and cuts the result
/// at `max_chars` characters. The cut may land mid-word.
///
/// Walks the tree once with an explicit stack; hidden subtrees are never
/// entered, so deep nesting costs linear time and no call stack.
fn text_snapshot(document: &Html, max_chars: usize) -> String {
    let mut snapshot = Snapshot::new(max_chars);
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => {
                if !snapshot.push_words(text) {
                    break;
                }
            }
            Node::Element(el) if HIDDEN_TAGS.contains(&el.name()) => {}
            _ => stack.extend(node.children().rev()),
        }
    }

    snapshot.text
}

struct Snapshot {
    text: String,
    chars: usize,
    max_chars: usize,
}

impl Snapshot {
    fn new(max_chars: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            max_chars,
        }
    }

    /// Appends the words of one text node. Returns false once full.
    fn push_words(&mut self, text: &str) -> bool {
        for word in text.split_whitespace() {
            if self.chars > 0 {
                if self.chars >= self.max_chars {
                    return false;
                }
                self.text.push(' ');
                self.chars += 1;
            }
            for ch in word.chars() {
                if self.chars >= self.max_chars {
                    return false;
                }
                self.text.push(ch);
                self.chars += 1;
            }
        }
        true
    }
}
