//! Localized copy selected by locale and classifier label.

mod copy;

use serde::Serialize;

use super::catalog::CatalogBundle;
use super::domain::{FeatureField, FieldKind, PredictionResult, AGE_RANGE};
use super::locale::Locale;

/// Narrative shown after a successful prediction.
#[derive(Debug, Serialize)]
pub struct ResultCopy {
    pub toast: &'static str,
    pub headline: &'static str,
    pub recommendations_title: &'static str,
    pub recommendations: &'static [&'static str],
    pub motivation: &'static str,
    pub follow_up_title: &'static str,
    pub follow_up: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing: Option<ClosingNote>,
}

#[derive(Debug, Serialize)]
pub struct ClosingNote {
    pub title: &'static str,
    pub text: &'static str,
}

/// Static form text for one locale. Prompts follow [`FeatureField::ordered`].
#[derive(Debug)]
pub struct FormCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
    prompts: [&'static str; FeatureField::COUNT],
    pub disclaimer: &'static [&'static str],
}

impl FormCopy {
    pub fn for_locale(locale: Locale) -> &'static FormCopy {
        match locale {
            Locale::Indonesian => &copy::FORM_ID,
            Locale::English => &copy::FORM_EN,
        }
    }

    pub fn prompt(&self, field: FeatureField) -> &'static str {
        self.prompts[field.index()]
    }
}

/// Deterministic label + locale to copy lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPresenter;

impl ResultPresenter {
    pub fn present(&self, result: PredictionResult, locale: Locale) -> &'static ResultCopy {
        match (result, locale) {
            (PredictionResult::Indicated, Locale::Indonesian) => &copy::INDICATED_ID,
            (PredictionResult::Indicated, Locale::English) => &copy::INDICATED_EN,
            (PredictionResult::NotIndicated, Locale::Indonesian) => &copy::NOT_INDICATED_ID,
            (PredictionResult::NotIndicated, Locale::English) => &copy::NOT_INDICATED_EN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Incomplete,
    InvalidInput,
    EncodingFailed,
    PredictionFailed,
    Unavailable,
}

/// User-facing notice for an aborted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, locale: Locale, detail: Option<String>) -> Self {
        let message = match (kind, locale) {
            (NoticeKind::Incomplete, Locale::Indonesian) => "⚠️ Lengkapi semua pilihan!",
            (NoticeKind::Incomplete, Locale::English) => "⚠️ Please complete all selections.",
            (NoticeKind::InvalidInput, Locale::Indonesian) => {
                "⚠️ Ada jawaban yang tidak valid, periksa kembali pilihan Anda."
            }
            (NoticeKind::InvalidInput, Locale::English) => {
                "⚠️ One of the answers is not valid, please review your selections."
            }
            (NoticeKind::EncodingFailed, Locale::Indonesian) => {
                "Terjadi kesalahan saat encoding input."
            }
            (NoticeKind::EncodingFailed, Locale::English) => {
                "An error occurred during input encoding."
            }
            (NoticeKind::PredictionFailed, Locale::Indonesian) => {
                "Terjadi kesalahan saat prediksi."
            }
            (NoticeKind::PredictionFailed, Locale::English) => {
                "An error occurred during prediction."
            }
            (NoticeKind::Unavailable, Locale::Indonesian) => "Komponen model belum lengkap.",
            (NoticeKind::Unavailable, Locale::English) => "Model components are not fully loaded.",
        };

        Self {
            kind,
            message: message.to_string(),
            detail,
        }
    }
}

/// One field of the rendered form.
#[derive(Debug, Clone, Serialize)]
pub struct FormFieldView {
    pub field: FeatureField,
    pub kind: FieldKind,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
}

/// Everything a client needs to render the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub locale: Locale,
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
    pub sentinel: &'static str,
    pub fields: Vec<FormFieldView>,
    pub disclaimer: &'static [&'static str],
}

impl FormSchema {
    pub fn for_locale(locale: Locale) -> Self {
        let copy = FormCopy::for_locale(locale);
        let catalog = CatalogBundle::for_locale(locale);

        let fields = FeatureField::ordered()
            .into_iter()
            .map(|field| {
                let (min, max) = if field == FeatureField::Age {
                    (Some(*AGE_RANGE.start()), Some(*AGE_RANGE.end()))
                } else {
                    (None, None)
                };

                FormFieldView {
                    field,
                    kind: field.kind(),
                    prompt: copy.prompt(field),
                    options: catalog.display_choices(field),
                    min,
                    max,
                }
            })
            .collect();

        Self {
            locale,
            title: copy.title,
            description: copy.description,
            submit_label: copy.submit_label,
            sentinel: catalog.sentinel(),
            fields,
            disclaimer: copy.disclaimer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presenter_selects_copy_by_label_and_locale() {
        let presenter = ResultPresenter;
        let indicated = presenter.present(PredictionResult::Indicated, Locale::English);
        assert!(indicated.headline.contains("likely experiencing depression"));
        assert_eq!(indicated.follow_up.len(), 3);

        let clear = presenter.present(PredictionResult::NotIndicated, Locale::Indonesian);
        assert!(clear.headline.contains("tidak menunjukkan indikasi"));
        assert!(clear.closing.is_none());
    }

    #[test]
    fn presenter_is_deterministic() {
        let presenter = ResultPresenter;
        let first = presenter.present(PredictionResult::Indicated, Locale::Indonesian);
        let second = presenter.present(PredictionResult::Indicated, Locale::Indonesian);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn incomplete_notice_is_localized() {
        let id = Notice::new(NoticeKind::Incomplete, Locale::Indonesian, None);
        let en = Notice::new(NoticeKind::Incomplete, Locale::English, None);
        assert_eq!(id.message, "⚠️ Lengkapi semua pilihan!");
        assert_eq!(en.message, "⚠️ Please complete all selections.");
    }

    #[test]
    fn form_schema_lists_every_field_in_order() {
        let schema = FormSchema::for_locale(Locale::English);
        let fields: Vec<_> = schema.fields.iter().map(|view| view.field).collect();
        assert_eq!(fields, FeatureField::ordered().to_vec());

        let age = &schema.fields[FeatureField::Age.index()];
        assert!(age.options.is_empty());
        assert_eq!((age.min, age.max), (Some(18), Some(34)));

        let gender = &schema.fields[FeatureField::Gender.index()];
        assert_eq!(gender.options, vec!["- Select -", "Male", "Female"]);
        assert_eq!(gender.prompt, "Gender");
    }
}
