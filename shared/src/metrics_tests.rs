#[cfg(test)]
mod metrics_tests {
    use crate::dto::reports::InstagramReport;
    use crate::metrics::*;
    use crate::models::media::{CommentText, CommentsAnalysis, MediaItem};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    fn media(likes: u64, comments: u64) -> MediaItem {
        MediaItem {
            id: format!("m-{}-{}", likes, comments),
            like_count: likes,
            comments_count: comments,
            ..Default::default()
        }
    }

    fn with_comments(texts: &[&str]) -> MediaItem {
        MediaItem {
            comments_analysis: Some(CommentsAnalysis {
                comment_texts: texts
                    .iter()
                    .map(|text| CommentText {
                        text: Some(text.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            }),
            ..media(1, texts.len() as u64)
        }
    }

    #[test]
    fn test_engagement_rate_unavailable_inputs() {
        assert_eq!(engagement_rate(Some(&[]), Some(1000)), None);
        assert_eq!(engagement_rate(None, Some(1000)), None);
        assert_eq!(engagement_rate(Some(&[media(10, 5)]), Some(0)), None);
        assert_eq!(engagement_rate(Some(&[media(10, 5)]), None), None);
    }

    #[test]
    fn test_engagement_rate_single_post() {
        assert_eq!(engagement_rate(Some(&[media(10, 5)]), Some(100)), Some(15.0));
    }

    #[test]
    fn test_engagement_rate_averages_over_post_count() {
        let posts = [media(30, 10), media(50, 10)];
        // (80 + 20) / (200 * 2) * 100
        assert_eq!(engagement_rate(Some(&posts), Some(200)), Some(25.0));
    }

    #[test]
    fn test_engagement_rate_is_not_clamped() {
        let rate = engagement_rate(Some(&[media(900, 100)]), Some(10)).unwrap();
        assert_eq!(rate, 10_000.0);
    }

    #[test]
    fn test_comment_like_ratio_zero_likes_is_zero_not_none() {
        assert_eq!(comment_like_ratio(Some(&[media(0, 3)])), Some(0.0));
    }

    #[test]
    fn test_comment_like_ratio_empty_or_absent_is_none() {
        assert_eq!(comment_like_ratio(Some(&[])), None);
        assert_eq!(comment_like_ratio(None), None);
    }

    #[test]
    fn test_comment_like_ratio_totals() {
        let posts = [media(40, 2), media(60, 8)];
        assert_eq!(comment_like_ratio(Some(&posts)), Some(0.1));
    }

    #[test]
    fn test_audience_quality_score_blends_ratio() {
        // engagement 15, ratio 0.5 -> 15 * (0.7 + 0.15)
        let score = audience_quality_score(Some(&[media(10, 5)]), Some(100)).unwrap();
        assert!((score - 12.75).abs() < 1e-9);
    }

    #[test]
    fn test_audience_quality_score_clamps_to_hundred() {
        // engagement 200, ratio 1 -> raw 200
        let posts = [media(1, 1)];
        assert_eq!(engagement_rate(Some(&posts), Some(1)), Some(200.0));
        assert_eq!(audience_quality_score(Some(&posts), Some(1)), Some(MAX_QUALITY_SCORE));

        let posts = [media(250, 250)];
        assert_eq!(engagement_rate(Some(&posts), Some(100)), Some(500.0));
        assert_eq!(comment_like_ratio(Some(&posts)), Some(1.0));
        assert_eq!(audience_quality_score(Some(&posts), Some(100)), Some(100.0));
    }

    #[test]
    fn test_audience_quality_score_needs_engagement_rate() {
        assert_eq!(audience_quality_score(Some(&[media(10, 5)]), Some(0)), None);
        assert_eq!(audience_quality_score(Some(&[]), Some(100)), None);
        assert_eq!(audience_quality_score(None, None), None);
    }

    #[test]
    fn test_avg_comment_length_skips_posts_without_analysis() {
        let posts = [with_comments(&["abcd", "abcdef"]), media(3, 0)];
        assert_eq!(avg_comment_length(Some(&posts)), Some(5.0));
    }

    #[test]
    fn test_avg_comment_length_without_any_texts_is_zero() {
        assert_eq!(avg_comment_length(Some(&[media(3, 0)])), Some(0.0));
        assert_eq!(avg_comment_length(Some(&[])), None);
        assert_eq!(avg_comment_length(None), None);
    }

    #[test]
    fn test_avg_comment_length_counts_missing_text_as_empty() {
        let mut post = with_comments(&["abcdef"]);
        if let Some(analysis) = post.comments_analysis.as_mut() {
            analysis.comment_texts.push(CommentText::default());
        }
        assert_eq!(avg_comment_length(Some(&[post])), Some(3.0));
    }

    #[test]
    fn test_avg_comment_length_counts_emoji_as_utf16_units() {
        let posts = [with_comments(&["😍🔥"])];
        assert_eq!(avg_comment_length(Some(&posts)), Some(4.0));

        let posts = [with_comments(&["😍🔥", "ok"])];
        assert_eq!(avg_comment_length(Some(&posts)), Some(3.0));
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let post = MediaItem {
            like_count: u64::MAX,
            comments_count: 1,
            ..Default::default()
        };
        let rate = engagement_rate(Some(&[post.clone()]), Some(1)).unwrap();
        assert!(rate.is_finite());
        assert!(rate > 0.0);

        let posts = [post.clone(), post];
        let ratio = comment_like_ratio(Some(&posts)).unwrap();
        assert!(ratio.is_finite());
        assert!(ratio >= 0.0);
        assert_eq!(
            audience_quality_score(Some(&posts), Some(1)),
            Some(MAX_QUALITY_SCORE)
        );
    }

    #[test_log::test]
    fn test_derive_fills_every_field() {
        let input = MetricsInput::new(vec![media(10, 5)], Some(100));
        let derived = DerivedMetrics::derive(&input);
        assert_eq!(derived.engagement_rate, Some(15.0));
        assert_eq!(derived.comment_like_ratio, Some(0.5));
        assert_eq!(derived.avg_comment_length, Some(0.0));
        assert!(derived.audience_quality_score.is_some());
    }

    #[test_log::test]
    fn test_derive_without_media_is_all_none() {
        let derived = DerivedMetrics::derive(&MetricsInput::default());
        assert_eq!(derived, DerivedMetrics::default());
    }

    #[test]
    fn test_derived_metrics_serialize_camel_case_with_nulls() {
        let derived = DerivedMetrics {
            engagement_rate: Some(1.5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(derived).unwrap(),
            json!({
                "engagementRate": 1.5,
                "audienceQualityScore": null,
                "commentLikeRatio": null,
                "avgCommentLength": null
            })
        );
    }

    #[test]
    fn test_from_report_takes_five_most_recent_posts() {
        let items: Vec<serde_json::Value> = (0..8)
            .map(|i| json!({ "id": i.to_string(), "like_count": i, "comments_count": 0 }))
            .collect();
        let report: InstagramReport = serde_json::from_value(json!({
            "basic_info": { "followers_count": 50 },
            "media_data": { "data": items }
        }))
        .unwrap();

        let input = MetricsInput::from_report(&report);
        let ids: Vec<&str> = input
            .media()
            .unwrap()
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
        assert_eq!(input.follower_count, Some(50));
    }

    #[test]
    fn test_from_report_without_sections() {
        let input = MetricsInput::from_report(&InstagramReport::default());
        assert_eq!(input.media().map(|m| m.len()), Some(0));
        assert_eq!(input.follower_count, None);
        assert_eq!(DerivedMetrics::derive(&input), DerivedMetrics::default());
    }

    fn arb_media() -> impl Strategy<Value = MediaItem> {
        prop_oneof![
            (0u64..1_000_000, 0u64..1_000_000),
            (any::<u64>(), any::<u64>()),
        ]
        .prop_map(|(likes, comments)| media(likes, comments))
    }

    proptest! {
        #[test]
        fn prop_engagement_rate_is_finite_and_non_negative(
            posts in prop::collection::vec(arb_media(), 1..10),
            followers in 1u64..10_000_000,
        ) {
            let rate = engagement_rate(Some(&posts), Some(followers)).unwrap();
            prop_assert!(rate.is_finite());
            prop_assert!(rate >= 0.0);
        }

        #[test]
        fn prop_quality_score_never_exceeds_cap(
            posts in prop::collection::vec(arb_media(), 1..10),
            followers in 1u64..1_000,
        ) {
            let score = audience_quality_score(Some(&posts), Some(followers)).unwrap();
            prop_assert!(score <= MAX_QUALITY_SCORE);
            prop_assert!(score >= 0.0);
        }

        #[test]
        fn prop_derivation_is_repeatable_and_leaves_input_untouched(
            posts in prop::collection::vec(arb_media(), 0..10),
            followers in prop::option::of(0u64..10_000),
        ) {
            let input = MetricsInput::new(posts.clone(), followers);
            let first = DerivedMetrics::derive(&input);
            let second = DerivedMetrics::derive(&input);
            prop_assert_eq!(first, second);
            prop_assert_eq!(input.media.as_deref(), Some(posts.as_slice()));
        }
    }
}
