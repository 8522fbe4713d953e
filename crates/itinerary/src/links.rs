use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `<label> <dash> <url>` where the dash is surrounded by whitespace and the
/// url carries no whitespace.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S.*?)\s+[-\u{2013}\u{2014}]\s+(https?://\S+)").expect("link pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpan {
    pub label: String,
    pub url: String,
}

/// One piece of a linkified text. Templates render `Text` escaped as-is and
/// `Link` as an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Span {
    Text(String),
    Link(LinkSpan),
}

/// Split free text into plain and link spans.
///
/// Every `label – url` occurrence becomes a [`Span::Link`]; text without the
/// pattern comes back as a single [`Span::Text`]. Pure text transformation,
/// no escaping happens here.
pub fn linkify(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for captures in LINK_RE.captures_iter(text) {
        let whole = captures.get(0).expect("match always has a full capture");
        if whole.start() > cursor {
            spans.push(Span::Text(text[cursor..whole.start()].to_owned()));
        }

        spans.push(Span::Link(LinkSpan {
            label: captures[1].to_owned(),
            url: captures[2].to_owned(),
        }));
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(Span::Text(text[cursor..].to_owned()));
    }

    spans
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Span::Text(text.into())
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link(LinkSpan {
            label: label.into(),
            url: url.into(),
        })
    }
}
