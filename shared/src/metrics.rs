//! Display metrics derived from a window of Instagram media.
//!
//! Every function is pure: inputs are borrowed, nothing is cached, and an
//! unusable input yields `None` instead of a division by zero. `None` means
//! "not enough data"; callers render a placeholder and never feed it into
//! further arithmetic.
//!
//! An absent media list and an empty one are treated alike: every metric is
//! `None`. For a non-empty list the two ratio metrics return `Some(0.0)` when
//! there is nothing to divide by (no likes, no analysed comments), while the
//! rate metrics return `None` when followers are missing.

use serde::{Deserialize, Serialize};

use crate::dto::reports::InstagramReport;
use crate::models::media::MediaItem;

/// Number of most recent posts the report metrics are computed over
pub const MEDIA_WINDOW: usize = 5;

/// Upper bound of the audience quality score
pub const MAX_QUALITY_SCORE: f64 = 100.0;

const QUALITY_BASE_WEIGHT: f64 = 0.7;
const QUALITY_RATIO_WEIGHT: f64 = 0.3;

/// Inputs for one report render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsInput {
    pub media: Option<Vec<MediaItem>>,
    pub follower_count: Option<u64>,
}

impl MetricsInput {
    pub fn new(media: Vec<MediaItem>, follower_count: Option<u64>) -> Self {
        Self {
            media: Some(media),
            follower_count,
        }
    }

    /// Takes the first [`MEDIA_WINDOW`] posts and the follower count of a
    /// report. A report without a media section yields an empty window.
    pub fn from_report(report: &InstagramReport) -> Self {
        let media = report
            .media()
            .map(|items| items.iter().take(MEDIA_WINDOW).cloned().collect())
            .unwrap_or_default();
        Self::new(media, report.followers_count())
    }

    pub fn media(&self) -> Option<&[MediaItem]> {
        self.media.as_deref()
    }
}

/// The list when it has at least one post
fn usable(media: Option<&[MediaItem]>) -> Option<&[MediaItem]> {
    media.filter(|items| !items.is_empty())
}

/// Metrics shown on the report cards
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub engagement_rate: Option<f64>,
    pub audience_quality_score: Option<f64>,
    pub comment_like_ratio: Option<f64>,
    pub avg_comment_length: Option<f64>,
}

impl DerivedMetrics {
    pub fn derive(input: &MetricsInput) -> Self {
        let media = input.media();
        let derived = Self {
            engagement_rate: engagement_rate(media, input.follower_count),
            audience_quality_score: audience_quality_score(media, input.follower_count),
            comment_like_ratio: comment_like_ratio(media),
            avg_comment_length: avg_comment_length(media),
        };
        log::debug!(
            "Derived metrics over {} media items: {:?}",
            media.map(|m| m.len()).unwrap_or(0),
            derived
        );
        derived
    }
}

// Summed as f64: counts come straight from the wire and can be arbitrarily large
fn total_likes(media: &[MediaItem]) -> f64 {
    media.iter().map(|item| item.like_count as f64).sum()
}

fn total_comments(media: &[MediaItem]) -> f64 {
    media.iter().map(|item| item.comments_count as f64).sum()
}

/// `(likes + comments) / (followers * posts) * 100`.
///
/// `None` when the list is absent or empty, or followers are absent or zero.
/// Not clamped: very engaged accounts can exceed 100.
pub fn engagement_rate(media: Option<&[MediaItem]>, followers: Option<u64>) -> Option<f64> {
    let media = usable(media)?;
    let followers = followers.filter(|&f| f > 0)?;

    let interactions = total_likes(media) + total_comments(media);
    let reach = followers as f64 * media.len() as f64;
    Some(interactions / reach * 100.0)
}

/// Total comments over total likes; `Some(0.0)` when the posts have no likes.
pub fn comment_like_ratio(media: Option<&[MediaItem]>) -> Option<f64> {
    let media = usable(media)?;
    let likes = total_likes(media);
    if likes == 0.0 {
        return Some(0.0);
    }
    Some(total_comments(media) / likes)
}

/// `engagement_rate * (0.7 + 0.3 * comment_like_ratio)`, capped at 100.
pub fn audience_quality_score(media: Option<&[MediaItem]>, followers: Option<u64>) -> Option<f64> {
    let engagement = engagement_rate(media, followers)?;
    let ratio = comment_like_ratio(media)?;
    let score = engagement * (QUALITY_BASE_WEIGHT + QUALITY_RATIO_WEIGHT * ratio);
    Some(score.min(MAX_QUALITY_SCORE))
}

/// Mean character length of the analysed comment texts across all posts.
///
/// Posts without a comment analysis contribute nothing; `Some(0.0)` when none
/// of the posts carries comment texts.
pub fn avg_comment_length(media: Option<&[MediaItem]>) -> Option<f64> {
    let media = usable(media)?;
    let (total_length, total_comments) = media
        .iter()
        .flat_map(|item| item.comment_texts())
        .fold((0usize, 0usize), |(length, count), comment| {
            (length + comment.char_len(), count + 1)
        });

    if total_comments == 0 {
        return Some(0.0);
    }
    Some(total_length as f64 / total_comments as f64)
}
