//! Remote content records.

use serde::{Deserialize, Serialize};

/// Text revealed when an item carries no renderable payload.
pub const NO_CONTENT_AVAILABLE: &str = "No content available";

/// One item of a remote collection.
///
/// Only the renderable payload and the item's ordinal are used; every other
/// field the remote service sends is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Display title, if the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rendered HTML payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,

    /// Plain text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// 1-based position in the accumulated result sequence.
    ///
    /// Assigned by the fetcher, never read from the wire.
    #[serde(skip)]
    pub ordinal: usize,
}

impl ContentItem {
    /// Creates an item with an HTML payload.
    pub fn html(content_html: impl Into<String>) -> Self {
        Self {
            title: None,
            content_html: Some(content_html.into()),
            content: None,
            ordinal: 0,
        }
    }

    /// Returns the payload revealed behind a door.
    ///
    /// Prefers the HTML payload, then plain text, then
    /// [`NO_CONTENT_AVAILABLE`]. Only missing or empty payloads are
    /// skipped; anything else is returned verbatim.
    pub fn payload(&self) -> &str {
        [&self.content_html, &self.content]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or(NO_CONTENT_AVAILABLE)
    }
}

/// Body of one page of a collection's contents endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPage {
    /// Items on this page, in collection order.
    pub contents: Vec<ContentItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_prefers_html() {
        let item = ContentItem {
            title: None,
            content_html: Some("<p>hi</p>".into()),
            content: Some("hi".into()),
            ordinal: 1,
        };
        assert_eq!(item.payload(), "<p>hi</p>");
    }

    #[test]
    fn test_payload_falls_back_to_text() {
        let item = ContentItem {
            title: None,
            content_html: Some(String::new()),
            content: Some("plain".into()),
            ordinal: 1,
        };
        assert_eq!(item.payload(), "plain");
    }

    #[test]
    fn test_payload_keeps_whitespace_html() {
        let item = ContentItem {
            title: None,
            content_html: Some("\n".into()),
            content: Some("plain".into()),
            ordinal: 1,
        };
        assert_eq!(item.payload(), "\n");
    }

    #[test]
    fn test_payload_placeholder() {
        let item: ContentItem = serde_json::from_str(r#"{"class": "Image"}"#).unwrap();
        assert_eq!(item.payload(), NO_CONTENT_AVAILABLE);
    }

    #[test]
    fn test_page_ignores_unknown_fields() {
        let json = r#"{
            "length": 2,
            "contents": [
                {"id": 1, "title": "a", "content_html": "<p>a</p>", "class": "Text"},
                {"id": 2, "title": null, "content_html": null, "content": null}
            ]
        }"#;

        let page: ContentPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.contents.len(), 2);
        assert_eq!(page.contents[0].title.as_deref(), Some("a"));
        assert_eq!(page.contents[1].payload(), NO_CONTENT_AVAILABLE);
        assert_eq!(page.contents[0].ordinal, 0);
    }

    #[test]
    fn test_page_without_contents_is_malformed() {
        assert!(serde_json::from_str::<ContentPage>(r#"{"length": 0}"#).is_err());
    }
}
