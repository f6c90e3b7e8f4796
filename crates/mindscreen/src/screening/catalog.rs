//! Static option lists for both locales.
//!
//! Each selectable field maps its localized display strings to a canonical
//! value. Categorical fields reduce to the English category string the label
//! encoders were fitted on; ordinal fields reduce to their rank directly.

use std::collections::BTreeSet;

use super::domain::{FeatureField, FieldKind};
use super::locale::Locale;

/// Locale-independent value behind a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalValue {
    Category(&'static str),
    Rank(u8),
    Hours(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    pub display: &'static str,
    pub value: CanonicalValue,
}

const fn category(display: &'static str, value: &'static str) -> OptionEntry {
    OptionEntry {
        display,
        value: CanonicalValue::Category(value),
    }
}

const fn rank(display: &'static str, value: u8) -> OptionEntry {
    OptionEntry {
        display,
        value: CanonicalValue::Rank(value),
    }
}

const fn hours(display: &'static str, value: u8) -> OptionEntry {
    OptionEntry {
        display,
        value: CanonicalValue::Hours(value),
    }
}

const STUDY_HOURS: &[OptionEntry] = &[
    hours("0", 0),
    hours("1", 1),
    hours("2", 2),
    hours("3", 3),
    hours("4", 4),
    hours("5", 5),
    hours("6", 6),
    hours("7", 7),
    hours("8", 8),
    hours("9", 9),
    hours("10", 10),
    hours("11", 11),
    hours("12", 12),
];

/// Every option list for one locale, resolved once per session.
#[derive(Debug)]
pub struct CatalogBundle {
    locale: Locale,
    gender: &'static [OptionEntry],
    academic_pressure: &'static [OptionEntry],
    study_satisfaction: &'static [OptionEntry],
    sleep_duration: &'static [OptionEntry],
    dietary_habits: &'static [OptionEntry],
    suicidal_thoughts: &'static [OptionEntry],
    financial_stress: &'static [OptionEntry],
    family_history: &'static [OptionEntry],
}

static INDONESIAN: CatalogBundle = CatalogBundle {
    locale: Locale::Indonesian,
    gender: &[category("Laki-laki", "Male"), category("Perempuan", "Female")],
    academic_pressure: &[
        rank("Sangat ringan", 1),
        rank("Ringan", 2),
        rank("Sedang", 3),
        rank("Berat", 4),
        rank("Sangat berat", 5),
    ],
    study_satisfaction: &[
        rank("Sangat tidak puas", 1),
        rank("Tidak puas", 2),
        rank("Netral", 3),
        rank("Puas", 4),
        rank("Sangat puas", 5),
    ],
    sleep_duration: &[
        category("Kurang dari 5 jam", "Less than 5 hours"),
        category("5-6 jam", "5-6 hours"),
        category("7-8 jam", "7-8 hours"),
        category("Lebih dari 8 jam", "More than 8 hours"),
    ],
    dietary_habits: &[
        category("Sehat", "Healthy"),
        category("Sedang", "Moderate"),
        category("Tidak sehat", "Unhealthy"),
    ],
    suicidal_thoughts: &[category("Ya", "Yes"), category("Tidak", "No")],
    financial_stress: &[
        rank("Tidak ada", 0),
        rank("Sangat rendah", 1),
        rank("Rendah", 2),
        rank("Sedang", 3),
        rank("Tinggi", 4),
        rank("Sangat tinggi", 5),
    ],
    family_history: &[category("Ya", "Yes"), category("Tidak", "No")],
};

static ENGLISH: CatalogBundle = CatalogBundle {
    locale: Locale::English,
    gender: &[category("Male", "Male"), category("Female", "Female")],
    academic_pressure: &[
        rank("Very light", 1),
        rank("Light", 2),
        rank("Moderate", 3),
        rank("Heavy", 4),
        rank("Very heavy", 5),
    ],
    study_satisfaction: &[
        rank("Very dissatisfied", 1),
        rank("Dissatisfied", 2),
        rank("Neutral", 3),
        rank("Satisfied", 4),
        rank("Very satisfied", 5),
    ],
    sleep_duration: &[
        category("Less than 5 hours", "Less than 5 hours"),
        category("5-6 hours", "5-6 hours"),
        category("7-8 hours", "7-8 hours"),
        category("More than 8 hours", "More than 8 hours"),
    ],
    dietary_habits: &[
        category("Healthy", "Healthy"),
        category("Moderate", "Moderate"),
        category("Unhealthy", "Unhealthy"),
    ],
    suicidal_thoughts: &[category("Yes", "Yes"), category("No", "No")],
    financial_stress: &[
        rank("None", 0),
        rank("Very low", 1),
        rank("Low", 2),
        rank("Moderate", 3),
        rank("High", 4),
        rank("Very high", 5),
    ],
    family_history: &[category("Yes", "Yes"), category("No", "No")],
};

impl CatalogBundle {
    pub fn for_locale(locale: Locale) -> &'static CatalogBundle {
        match locale {
            Locale::Indonesian => &INDONESIAN,
            Locale::English => &ENGLISH,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn sentinel(&self) -> &'static str {
        self.locale.sentinel()
    }

    pub fn is_sentinel(&self, display: &str) -> bool {
        display.trim() == self.sentinel()
    }

    /// Selectable options for a field. Age is free entry and has none.
    pub fn options(&self, field: FeatureField) -> &'static [OptionEntry] {
        match field {
            FeatureField::Gender => self.gender,
            FeatureField::Age => &[],
            FeatureField::AcademicPressure => self.academic_pressure,
            FeatureField::StudySatisfaction => self.study_satisfaction,
            FeatureField::SleepDuration => self.sleep_duration,
            FeatureField::DietaryHabits => self.dietary_habits,
            FeatureField::SuicidalThoughts => self.suicidal_thoughts,
            FeatureField::StudyHours => STUDY_HOURS,
            FeatureField::FinancialStress => self.financial_stress,
            FeatureField::FamilyHistory => self.family_history,
        }
    }

    /// Display strings as the form lists them, sentinel first.
    pub fn display_choices(&self, field: FeatureField) -> Vec<&'static str> {
        let options = self.options(field);
        if options.is_empty() {
            return Vec::new();
        }

        std::iter::once(self.sentinel())
            .chain(options.iter().map(|entry| entry.display))
            .collect()
    }

    /// Canonical value for a display string. The sentinel never maps.
    pub fn canonical(&self, field: FeatureField, display: &str) -> Option<CanonicalValue> {
        let display = display.trim();
        self.options(field)
            .iter()
            .find(|entry| entry.display == display)
            .map(|entry| entry.value)
    }

    /// Canonical category strings a categorical field can produce.
    pub fn categories(&self, field: FeatureField) -> BTreeSet<&'static str> {
        if field.kind() != FieldKind::Categorical {
            return BTreeSet::new();
        }

        self.options(field)
            .iter()
            .filter_map(|entry| match entry.value {
                CanonicalValue::Category(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Display string for an ordinal rank, used to line up the two locales.
    pub fn display_for_rank(&self, field: FeatureField, wanted: u8) -> Option<&'static str> {
        self.options(field)
            .iter()
            .find(|entry| entry.value == CanonicalValue::Rank(wanted))
            .map(|entry| entry.display)
    }

    /// Display string for a canonical category.
    pub fn display_for_category(&self, field: FeatureField, wanted: &str) -> Option<&'static str> {
        self.options(field)
            .iter()
            .find(|entry| matches!(entry.value, CanonicalValue::Category(value) if value == wanted))
            .map(|entry| entry.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_never_maps_to_a_value() {
        for locale in Locale::ordered() {
            let catalog = CatalogBundle::for_locale(locale);
            for field in FeatureField::ordered() {
                assert_eq!(catalog.canonical(field, catalog.sentinel()), None);
            }
        }
    }

    #[test]
    fn display_choices_lead_with_sentinel() {
        let catalog = CatalogBundle::for_locale(Locale::English);
        let choices = catalog.display_choices(FeatureField::DietaryHabits);
        assert_eq!(choices, vec!["- Select -", "Healthy", "Moderate", "Unhealthy"]);
        assert!(catalog.display_choices(FeatureField::Age).is_empty());
    }

    #[test]
    fn shared_display_strings_stay_field_scoped() {
        let catalog = CatalogBundle::for_locale(Locale::Indonesian);
        assert_eq!(
            catalog.canonical(FeatureField::DietaryHabits, "Sedang"),
            Some(CanonicalValue::Category("Moderate"))
        );
        assert_eq!(
            catalog.canonical(FeatureField::AcademicPressure, "Sedang"),
            Some(CanonicalValue::Rank(3))
        );
        assert_eq!(
            catalog.canonical(FeatureField::FinancialStress, "Sedang"),
            Some(CanonicalValue::Rank(3))
        );
    }

    #[test]
    fn category_lookup_accepts_borrowed_strings() {
        let catalog = CatalogBundle::for_locale(Locale::Indonesian);
        let wanted = String::from("Unhealthy");
        assert_eq!(
            catalog.display_for_category(FeatureField::DietaryHabits, &wanted),
            Some("Tidak sehat")
        );
        assert_eq!(
            catalog.display_for_category(FeatureField::DietaryHabits, "Vegan"),
            None
        );
    }

    #[test]
    fn study_hours_cover_zero_through_twelve() {
        let catalog = CatalogBundle::for_locale(Locale::English);
        let options = catalog.options(FeatureField::StudyHours);
        assert_eq!(options.len(), 13);
        assert_eq!(
            catalog.canonical(FeatureField::StudyHours, "12"),
            Some(CanonicalValue::Hours(12))
        );
        assert_eq!(catalog.canonical(FeatureField::StudyHours, "13"), None);
    }
}
