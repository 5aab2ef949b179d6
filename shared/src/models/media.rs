use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Instagram Graph API timestamps use `+0000` offsets without a colon.
const GRAPH_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A single Instagram post as delivered by the report endpoint.
///
/// Counters absent from the payload deserialize as zero, so every item
/// contributes a well-defined amount to the derived metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub insights: Option<MediaInsights>,
    #[serde(default)]
    pub comments_analysis: Option<CommentsAnalysis>,
}

impl MediaItem {
    /// Parses the post timestamp, accepting both Graph API and RFC 3339 forms
    pub fn posted_at(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_str(raw, GRAPH_TIMESTAMP_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
    }

    /// Caption cut to `max_chars` characters with an ellipsis, for table rows
    pub fn caption_preview(&self, max_chars: usize) -> String {
        match self.caption.as_deref() {
            Some(caption) if !caption.is_empty() => {
                let preview: String = caption.chars().take(max_chars).collect();
                format!("{}...", preview)
            }
            _ => "No caption".to_string(),
        }
    }

    /// Reach reported in the post insights, zero when not available
    pub fn reach(&self) -> u64 {
        self.insights
            .as_ref()
            .and_then(|insights| insights.reach.as_ref())
            .and_then(|series| series.data.first())
            .and_then(|point| point.values.first())
            .map(|value| value.value)
            .unwrap_or(0)
    }

    /// Comment texts attached by the comment analysis step, if any
    pub fn comment_texts(&self) -> &[CommentText] {
        self.comments_analysis
            .as_ref()
            .map(|analysis| analysis.comment_texts.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommentsAnalysis {
    #[serde(default)]
    pub comment_texts: Vec<CommentText>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommentText {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl CommentText {
    /// Length in UTF-16 code units: an emoji outside the basic plane counts
    /// as two. A missing text is empty.
    pub fn char_len(&self) -> usize {
        self.text.as_deref().map(|t| t.encode_utf16().count()).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaInsights {
    #[serde(default)]
    pub reach: Option<InsightSeries>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InsightSeries {
    #[serde(default)]
    pub data: Vec<InsightPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InsightPoint {
    #[serde(default)]
    pub values: Vec<InsightValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InsightValue {
    #[serde(default)]
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_counters_default_to_zero() {
        let item: MediaItem = serde_json::from_value(json!({ "id": "m1" })).unwrap();
        assert_eq!(item.like_count, 0);
        assert_eq!(item.comments_count, 0);
        assert!(item.comment_texts().is_empty());
    }

    #[test]
    fn test_posted_at_accepts_graph_api_offset() {
        let item = MediaItem {
            timestamp: Some("2024-05-01T12:30:00+0000".to_string()),
            ..Default::default()
        };
        let posted = item.posted_at().unwrap();
        assert_eq!(posted.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn test_posted_at_accepts_rfc3339() {
        let item = MediaItem {
            timestamp: Some("2024-05-01T12:30:00+03:00".to_string()),
            ..Default::default()
        };
        assert!(item.posted_at().is_some());
    }

    #[test]
    fn test_reach_reads_first_insight_value() {
        let item: MediaItem = serde_json::from_value(json!({
            "id": "m2",
            "insights": { "reach": { "data": [ { "values": [ { "value": 420 } ] } ] } }
        }))
        .unwrap();
        assert_eq!(item.reach(), 420);
        assert_eq!(MediaItem::default().reach(), 0);
    }

    #[test]
    fn test_caption_preview() {
        let item = MediaItem {
            caption: Some("Yeni koleksiyonumuz yayında!".to_string()),
            ..Default::default()
        };
        assert_eq!(item.caption_preview(4), "Yeni...");
        assert_eq!(MediaItem::default().caption_preview(4), "No caption");
    }

    #[test]
    fn test_comment_char_len_counts_utf16_units() {
        let text = |t: &str| CommentText {
            text: Some(t.to_string()),
            ..Default::default()
        };
        assert_eq!(text("çok iyi").char_len(), 7);
        assert_eq!(text("😍🔥").char_len(), 4);
        assert_eq!(text("harika ❤️").char_len(), 9);
        assert_eq!(CommentText::default().char_len(), 0);
    }
}
