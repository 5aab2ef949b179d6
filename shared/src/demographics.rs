//! Audience demographic rows, normalized once when a payload is ingested.
//!
//! Backend endpoints label their rows under different keys depending on the
//! source (`age_group`, `user_age_bracket`, `age`, `dimension`, `label`,
//! `gender`, `country`, `city`). [`AudienceRow`] resolves the label on
//! deserialization and [`Segment`] classifies it, so presentation code only
//! sees one shape.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dto::reports::GraphMetric;

/// Maximum number of cities shown in the city breakdown
pub const TOP_CITY_LIMIT: usize = 10;

lazy_static! {
    static ref AGE_RANGE_RE: Regex = Regex::new(r"^\d{2}-\d{2}$").unwrap();
    static ref AGE_OPEN_RE: Regex = Regex::new(r"^\d{2}\+$").unwrap();
}

const UNKNOWN_LABELS: [&str; 6] = [
    "unknown",
    "bilinmiyor",
    "bilinmeyen",
    "",
    "(not set)",
    "not set",
];

/// Whether a label carries information worth charting
pub fn is_known_label(label: &str) -> bool {
    let normalized = label.trim().to_lowercase();
    !UNKNOWN_LABELS.contains(&normalized.as_str())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "F" | "Female" | "female" => Some(Gender::Female),
            "M" | "Male" | "male" => Some(Gender::Male),
            "U" | "Other" | "other" => Some(Gender::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        }
    }
}

/// What a demographic label denotes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// `F.18-24` style combined labels
    AgeGender { gender: Gender, age: String },
    Age { bracket: String },
    Gender { gender: Gender },
    Other { label: String },
}

impl Segment {
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if let Some((gender, age)) = label.split_once('.') {
            if !age.contains('.') {
                if let Some(gender) = Gender::parse(gender) {
                    return Segment::AgeGender {
                        gender,
                        age: age.to_string(),
                    };
                }
            }
        }
        if is_age_bracket(label) {
            return Segment::Age {
                bracket: label.to_string(),
            };
        }
        if let Some(gender) = Gender::parse(label) {
            return Segment::Gender { gender };
        }
        Segment::Other {
            label: label.to_string(),
        }
    }
}

pub fn is_age_bracket(label: &str) -> bool {
    AGE_RANGE_RE.is_match(label) || AGE_OPEN_RE.is_match(label)
}

/// Raw row as any of the audience endpoints may send it
#[derive(Debug, Default, Deserialize)]
struct RawAudienceRow {
    age_group: Option<String>,
    user_age_bracket: Option<String>,
    age: Option<String>,
    dimension: Option<String>,
    label: Option<String>,
    gender: Option<String>,
    country: Option<String>,
    city: Option<String>,
    users: Option<f64>,
    sessions: Option<f64>,
    value: Option<f64>,
    viewer_percentage: Option<f64>,
    engagement_rate: Option<f64>,
}

/// One normalized audience row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawAudienceRow")]
pub struct AudienceRow {
    pub label: String,
    pub users: f64,
    pub sessions: f64,
    pub engagement_rate: Option<f64>,
}

impl From<RawAudienceRow> for AudienceRow {
    fn from(raw: RawAudienceRow) -> Self {
        let label = [
            raw.age_group,
            raw.user_age_bracket,
            raw.age,
            raw.dimension,
            raw.label,
            raw.gender,
            raw.country,
            raw.city,
        ]
        .into_iter()
        .flatten()
        .next()
        .unwrap_or_default();

        let users = raw
            .users
            .or(raw.value)
            .or(raw.viewer_percentage)
            .unwrap_or(0.0);

        Self {
            label,
            users,
            sessions: raw.sessions.unwrap_or(users),
            engagement_rate: raw.engagement_rate,
        }
    }
}

impl AudienceRow {
    pub fn segment(&self) -> Segment {
        Segment::parse(&self.label)
    }

    pub fn is_known(&self) -> bool {
        is_known_label(&self.label)
    }
}

/// Label and count pair fed to charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<&AudienceRow> for LabeledValue {
    fn from(row: &AudienceRow) -> Self {
        Self::new(row.label.clone(), row.users)
    }
}

/// Known rows only, in their original order
pub fn known_rows(rows: &[AudienceRow]) -> Vec<LabeledValue> {
    rows.iter()
        .filter(|row| row.is_known())
        .map(LabeledValue::from)
        .collect()
}

/// Flattens an Instagram follower age breakdown
pub fn instagram_age_breakdown(metric: &GraphMetric) -> Vec<LabeledValue> {
    metric
        .breakdown_results()
        .iter()
        .filter_map(|result| {
            let label = result.dimension_values.first()?;
            Some(LabeledValue::new(label.clone(), result.value as f64))
        })
        .collect()
}

/// Flattens an Instagram follower city breakdown, keeping the first
/// [`TOP_CITY_LIMIT`] entries and dropping the region after the comma
pub fn instagram_city_breakdown(metric: &GraphMetric) -> Vec<LabeledValue> {
    metric
        .breakdown_results()
        .iter()
        .take(TOP_CITY_LIMIT)
        .filter_map(|result| {
            let raw = result.dimension_values.first()?;
            let city = raw.split(',').next().unwrap_or(raw).trim();
            Some(LabeledValue::new(city, result.value as f64))
        })
        .collect()
}

/// Per-age row of a combined age/gender breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgeGenderRow {
    pub age: String,
    pub female: f64,
    pub male: f64,
    pub other: f64,
}

impl AgeGenderRow {
    fn set(&mut self, gender: Gender, value: f64) {
        match gender {
            Gender::Female => self.female = value,
            Gender::Male => self.male = value,
            Gender::Other => self.other = value,
        }
    }

    pub fn get(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
            Gender::Other => self.other,
        }
    }

    pub fn max_value(&self) -> f64 {
        self.female.max(self.male).max(self.other)
    }
}

/// Chart-ready shape of a demographic list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum DemographicBreakdown {
    Empty,
    AgeGender(Vec<AgeGenderRow>),
    AgeOnly(Vec<LabeledValue>),
    GenderOnly(Vec<(Gender, f64)>),
    Mixed(Vec<LabeledValue>),
}

impl DemographicBreakdown {
    /// Classifies a list once. Any combined `gender.age` label makes the
    /// whole list an age/gender breakdown; rows are grouped by age in
    /// first-seen order and labels of other shapes are dropped.
    pub fn classify(values: &[LabeledValue]) -> Self {
        if values.is_empty() {
            return DemographicBreakdown::Empty;
        }

        let segments: Vec<Segment> = values.iter().map(|v| Segment::parse(&v.label)).collect();

        if segments
            .iter()
            .any(|segment| matches!(segment, Segment::AgeGender { .. }))
        {
            let mut rows: Vec<AgeGenderRow> = Vec::new();
            for (segment, value) in segments.iter().zip(values) {
                if let Segment::AgeGender { gender, age } = segment {
                    let index = match rows.iter().position(|row| &row.age == age) {
                        Some(index) => index,
                        None => {
                            rows.push(AgeGenderRow {
                                age: age.clone(),
                                ..Default::default()
                            });
                            rows.len() - 1
                        }
                    };
                    rows[index].set(*gender, value.value);
                }
            }
            return DemographicBreakdown::AgeGender(rows);
        }

        if segments
            .iter()
            .all(|segment| matches!(segment, Segment::Age { .. }))
        {
            return DemographicBreakdown::AgeOnly(values.to_vec());
        }

        let genders: Option<Vec<(Gender, f64)>> = segments
            .iter()
            .zip(values)
            .map(|(segment, value)| match segment {
                Segment::Gender { gender } => Some((*gender, value.value)),
                _ => None,
            })
            .collect();

        match genders {
            Some(genders) => DemographicBreakdown::GenderOnly(genders),
            None => DemographicBreakdown::Mixed(values.to_vec()),
        }
    }
}
