#[cfg(test)]
mod demographics_tests {
    use crate::demographics::*;
    use crate::dto::reports::GraphMetric;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({ "age_group": "18-24", "users": 40.5, "sessions": 38.0 }), "18-24")]
    #[case(json!({ "user_age_bracket": "25-34", "users": 12 }), "25-34")]
    #[case(json!({ "age": "35-44", "users": 3 }), "35-44")]
    #[case(json!({ "dimension": "45-54", "value": 9 }), "45-54")]
    #[case(json!({ "label": "65+", "value": 1 }), "65+")]
    #[case(json!({ "country": "Turkey", "users": 80 }), "Turkey")]
    fn test_audience_row_resolves_label_key(#[case] raw: serde_json::Value, #[case] expected: &str) {
        let row: AudienceRow = serde_json::from_value(raw).unwrap();
        assert_eq!(row.label, expected);
    }

    #[test]
    fn test_audience_row_prefers_age_group_over_label() {
        let row: AudienceRow =
            serde_json::from_value(json!({ "age_group": "18-24", "label": "ignored", "users": 1 }))
                .unwrap();
        assert_eq!(row.label, "18-24");
    }

    #[test]
    fn test_audience_row_value_fallbacks() {
        let row: AudienceRow =
            serde_json::from_value(json!({ "age_group": "18-24", "viewer_percentage": 22.5 }))
                .unwrap();
        assert_eq!(row.users, 22.5);
        assert_eq!(row.sessions, 22.5);
        assert_eq!(row.engagement_rate, None);

        let empty: AudienceRow = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.label, "");
        assert_eq!(empty.users, 0.0);
        assert!(!empty.is_known());
    }

    #[rstest]
    #[case("F.18-24", Segment::AgeGender { gender: Gender::Female, age: "18-24".to_string() })]
    #[case("M.65+", Segment::AgeGender { gender: Gender::Male, age: "65+".to_string() })]
    #[case("18-24", Segment::Age { bracket: "18-24".to_string() })]
    #[case("65+", Segment::Age { bracket: "65+".to_string() })]
    #[case("U", Segment::Gender { gender: Gender::Other })]
    #[case("female", Segment::Gender { gender: Gender::Female })]
    #[case("Istanbul", Segment::Other { label: "Istanbul".to_string() })]
    #[case("a.b.c", Segment::Other { label: "a.b.c".to_string() })]
    fn test_segment_parse(#[case] label: &str, #[case] expected: Segment) {
        assert_eq!(Segment::parse(label), expected);
    }

    #[rstest]
    #[case("unknown", false)]
    #[case("  Bilinmiyor ", false)]
    #[case("(not set)", false)]
    #[case("", false)]
    #[case("Ankara", true)]
    fn test_is_known_label(#[case] label: &str, #[case] expected: bool) {
        assert_eq!(is_known_label(label), expected);
    }

    #[test]
    fn test_known_rows_drops_unknown_labels() {
        let rows: Vec<AudienceRow> = serde_json::from_value(json!([
            { "age_group": "18-24", "users": 10 },
            { "age_group": "unknown", "users": 99 },
            { "age_group": "25-34", "users": 5 }
        ]))
        .unwrap();
        let known = known_rows(&rows);
        assert_eq!(
            known,
            vec![LabeledValue::new("18-24", 10.0), LabeledValue::new("25-34", 5.0)]
        );
    }

    #[test]
    fn test_classify_age_gender_groups_by_age_in_first_seen_order() {
        let values = vec![
            LabeledValue::new("F.25-34", 98.0),
            LabeledValue::new("M.18-24", 40.0),
            LabeledValue::new("F.18-24", 34.0),
            LabeledValue::new("M.25-34", 70.0),
        ];
        let breakdown = DemographicBreakdown::classify(&values);
        assert_eq!(
            breakdown,
            DemographicBreakdown::AgeGender(vec![
                AgeGenderRow { age: "25-34".to_string(), female: 98.0, male: 70.0, other: 0.0 },
                AgeGenderRow { age: "18-24".to_string(), female: 34.0, male: 40.0, other: 0.0 },
            ])
        );
    }

    #[test]
    fn test_classify_age_only_and_gender_only() {
        let ages = vec![LabeledValue::new("18-24", 1.0), LabeledValue::new("65+", 2.0)];
        assert_eq!(
            DemographicBreakdown::classify(&ages),
            DemographicBreakdown::AgeOnly(ages.clone())
        );

        let genders = vec![LabeledValue::new("F", 3.0), LabeledValue::new("Male", 4.0)];
        assert_eq!(
            DemographicBreakdown::classify(&genders),
            DemographicBreakdown::GenderOnly(vec![(Gender::Female, 3.0), (Gender::Male, 4.0)])
        );
    }

    #[test]
    fn test_classify_mixed_and_empty() {
        let mixed = vec![LabeledValue::new("18-24", 1.0), LabeledValue::new("Istanbul", 2.0)];
        assert_eq!(
            DemographicBreakdown::classify(&mixed),
            DemographicBreakdown::Mixed(mixed.clone())
        );
        assert_eq!(DemographicBreakdown::classify(&[]), DemographicBreakdown::Empty);
    }

    #[test]
    fn test_instagram_city_breakdown_trims_region_and_limits() {
        let results: Vec<serde_json::Value> = (0..12)
            .map(|i| json!({ "dimension_values": [format!("City{}, Region", i)], "value": 100 - i }))
            .collect();
        let metric: GraphMetric = serde_json::from_value(json!({
            "data": [ { "total_value": { "breakdowns": [ { "results": results } ] } } ]
        }))
        .unwrap();

        let cities = instagram_city_breakdown(&metric);
        assert_eq!(cities.len(), TOP_CITY_LIMIT);
        assert_eq!(cities[0], LabeledValue::new("City0", 100.0));
    }

    #[test]
    fn test_instagram_age_breakdown_skips_rows_without_dimension() {
        let metric: GraphMetric = serde_json::from_value(json!({
            "data": [ { "total_value": { "breakdowns": [ { "results": [
                { "dimension_values": ["18-24"], "value": 10 },
                { "dimension_values": [], "value": 3 }
            ]}]}}]
        }))
        .unwrap();
        assert_eq!(instagram_age_breakdown(&metric), vec![LabeledValue::new("18-24", 10.0)]);
    }

    #[test]
    fn test_age_gender_row_max_value() {
        let row = AgeGenderRow { age: "18-24".to_string(), female: 3.0, male: 9.0, other: 1.0 };
        assert_eq!(row.max_value(), 9.0);
        assert_eq!(row.get(Gender::Other), 1.0);
    }
}
