const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Website Safety Check</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 3rem auto; }
input[type=text] { width: 70%; padding: .4rem; }
.result { margin-top: 1.5rem; font-size: 1.2rem; }
</style>
</head>
<body>
<h1>Website Safety Check</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Renders the form, prefilled with the last URL and followed by the
/// verdict label when there is one.
pub fn render(url: Option<&str>, result: Option<&str>) -> String {
    let mut out = String::with_capacity(PAGE_HEAD.len() + 512);
    out.push_str(PAGE_HEAD);
    out.push_str(r#"<form method="post" action="/">"#);
    out.push('\n');
    out.push_str(r#"<input type="text" name="url" placeholder="https://example.com" required value=""#);
    out.push_str(&escape_html(url.unwrap_or_default()));
    out.push_str("\">\n<button type=\"submit\">Check</button>\n</form>\n");
    if let Some(result) = result {
        out.push_str("<p class=\"result\">");
        out.push_str(&escape_html(result));
        out.push_str("</p>\n");
    }
    out.push_str(PAGE_TAIL);
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_has_no_result() {
        let html = render(None, None);
        assert!(html.contains(r#"<form method="post" action="/">"#));
        assert!(html.contains(r#"name="url""#));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn submitted_url_is_escaped() {
        let html = render(Some(r#""><script>alert(1)</script>"#), Some("✅ Website is Safe"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("<p class=\"result\">✅ Website is Safe</p>"));
    }
}
