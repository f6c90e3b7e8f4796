use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Inclusive bounds enforced on the age field at entry.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=34;

/// Inclusive bounds of the study-hours choice list.
pub const STUDY_HOURS_RANGE: RangeInclusive<u8> = 0..=12;

/// The ten survey fields, in the column order the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureField {
    Gender,
    Age,
    AcademicPressure,
    StudySatisfaction,
    SleepDuration,
    DietaryHabits,
    SuicidalThoughts,
    StudyHours,
    FinancialStress,
    FamilyHistory,
}

/// How a field's raw selection is reduced to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Canonical category string passed through a fitted label encoder.
    Categorical,
    /// Display string mapped straight to a severity/satisfaction rank.
    Ordinal,
    /// Integer passed through unchanged.
    Numeric,
}

impl FeatureField {
    pub const COUNT: usize = 10;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Gender,
            Self::Age,
            Self::AcademicPressure,
            Self::StudySatisfaction,
            Self::SleepDuration,
            Self::DietaryHabits,
            Self::SuicidalThoughts,
            Self::StudyHours,
            Self::FinancialStress,
            Self::FamilyHistory,
        ]
    }

    pub const fn categorical() -> [Self; 5] {
        [
            Self::Gender,
            Self::SleepDuration,
            Self::DietaryHabits,
            Self::SuicidalThoughts,
            Self::FamilyHistory,
        ]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Gender
            | Self::SleepDuration
            | Self::DietaryHabits
            | Self::SuicidalThoughts
            | Self::FamilyHistory => FieldKind::Categorical,
            Self::AcademicPressure | Self::StudySatisfaction | Self::FinancialStress => {
                FieldKind::Ordinal
            }
            Self::Age | Self::StudyHours => FieldKind::Numeric,
        }
    }

    /// Column name used by the artifact bundle (scaler columns and encoder keys).
    pub const fn feature_name(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::AcademicPressure => "Academic Pressure",
            Self::StudySatisfaction => "Study Satisfaction",
            Self::SleepDuration => "Sleep Duration",
            Self::DietaryHabits => "Dietary Habits",
            Self::SuicidalThoughts => "Have you ever had suicidal thoughts ?",
            Self::StudyHours => "Study Hours",
            Self::FinancialStress => "Financial Stress",
            Self::FamilyHistory => "Family History of Mental Illness",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::AcademicPressure => "academic_pressure",
            Self::StudySatisfaction => "study_satisfaction",
            Self::SleepDuration => "sleep_duration",
            Self::DietaryHabits => "dietary_habits",
            Self::SuicidalThoughts => "suicidal_thoughts",
            Self::StudyHours => "study_hours",
            Self::FinancialStress => "financial_stress",
            Self::FamilyHistory => "family_history",
        }
    }

    pub fn from_feature_name(name: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|field| field.feature_name() == name.trim())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|field| field.key() == key.trim())
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

/// A single accepted selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    /// Display string picked from the locale's option list.
    Choice(String),
    /// Bounded integer entry (age).
    Number(u8),
}

impl Answer {
    pub fn raw(&self) -> String {
        match self {
            Answer::Choice(value) => value.clone(),
            Answer::Number(value) => value.to_string(),
        }
    }
}

/// In-progress answers keyed by field. Only values that passed entry checks are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    values: BTreeMap<FeatureField, Answer>,
}

impl AnswerSet {
    pub fn get(&self, field: FeatureField) -> Option<&Answer> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: FeatureField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureField, &Answer)> {
        self.values.iter().map(|(field, answer)| (*field, answer))
    }

    pub(crate) fn insert(&mut self, field: FeatureField, answer: Answer) {
        self.values.insert(field, answer);
    }

    pub(crate) fn remove(&mut self, field: FeatureField) {
        self.values.remove(&field);
    }
}

/// Encoder output: one numeric value per field in [`FeatureField::ordered`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    values: [f64; FeatureField::COUNT],
}

impl FeatureRecord {
    pub(crate) fn from_values(values: [f64; FeatureField::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, field: FeatureField) -> f64 {
        self.values[field.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_named(&self.values, serializer)
    }
}

/// Scaler output with the age column restored to its raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRecord {
    values: [f64; FeatureField::COUNT],
}

impl ScaledRecord {
    pub(crate) fn from_values(values: [f64; FeatureField::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, field: FeatureField) -> f64 {
        self.values[field.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Serialize for ScaledRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_named(&self.values, serializer)
    }
}

fn serialize_named<S: Serializer>(
    values: &[f64; FeatureField::COUNT],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(FeatureField::COUNT))?;
    for field in FeatureField::ordered() {
        map.serialize_entry(field.key(), &values[field.index()])?;
    }
    map.end()
}

/// Binary classifier verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionResult {
    NotIndicated,
    Indicated,
}

impl PredictionResult {
    pub const fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::NotIndicated),
            1 => Some(Self::Indicated),
            _ => None,
        }
    }

    pub const fn label(self) -> u8 {
        match self {
            Self::NotIndicated => 0,
            Self::Indicated => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_fields_match_indices() {
        for (position, field) in FeatureField::ordered().into_iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }

    #[test]
    fn feature_names_round_trip() {
        for field in FeatureField::ordered() {
            assert_eq!(FeatureField::from_feature_name(field.feature_name()), Some(field));
            assert_eq!(FeatureField::from_key(field.key()), Some(field));
        }
        assert_eq!(FeatureField::from_feature_name("Depression"), None);
    }

    #[test]
    fn categorical_fields_report_categorical_kind() {
        for field in FeatureField::categorical() {
            assert_eq!(field.kind(), FieldKind::Categorical);
        }
        assert_eq!(FeatureField::FinancialStress.kind(), FieldKind::Ordinal);
        assert_eq!(FeatureField::StudyHours.kind(), FieldKind::Numeric);
    }

    #[test]
    fn feature_record_serializes_in_field_order() {
        let record = FeatureRecord::from_values([1.0, 22.0, 4.0, 2.0, 0.0, 2.0, 1.0, 8.0, 5.0, 1.0]);
        let encoded = serde_json::to_string(&record).expect("serializes");
        assert!(encoded.starts_with("{\"gender\":1.0,\"age\":22.0"));
        assert!(encoded.ends_with("\"family_history\":1.0}"));
    }

    #[test]
    fn prediction_labels_are_binary() {
        assert_eq!(PredictionResult::from_label(0), Some(PredictionResult::NotIndicated));
        assert_eq!(PredictionResult::from_label(1), Some(PredictionResult::Indicated));
        assert_eq!(PredictionResult::from_label(2), None);
        assert_eq!(PredictionResult::Indicated.label(), 1);
    }
}
