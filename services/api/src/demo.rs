use crate::infra::{load_service, parse_locale};
use clap::Args;
use mindscreen::config::{AppConfig, ScreeningConfig};
use mindscreen::error::AppError;
use mindscreen::screening::{
    AnswerInput, CatalogBundle, FeatureField, FormCopy, FormSchema, FormSession, InputRejected,
    Locale, Notice, NoticeKind, ScreeningOutcome, ScreeningService, SubmissionError,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct FormArgs {
    /// Questionnaire language (id or en). Defaults to APP_DEFAULT_LOCALE.
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    /// Language the answers are given in (id or en). Defaults to APP_DEFAULT_LOCALE.
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Artifact bundle to load instead of APP_ARTIFACT_PATH
    #[arg(long)]
    pub(crate) artifacts: Option<PathBuf>,
    #[arg(long)]
    pub(crate) gender: Option<String>,
    #[arg(long)]
    pub(crate) age: Option<i64>,
    #[arg(long)]
    pub(crate) academic_pressure: Option<String>,
    #[arg(long)]
    pub(crate) study_satisfaction: Option<String>,
    #[arg(long)]
    pub(crate) sleep_duration: Option<String>,
    #[arg(long)]
    pub(crate) dietary_habits: Option<String>,
    #[arg(long)]
    pub(crate) suicidal_thoughts: Option<String>,
    #[arg(long)]
    pub(crate) study_hours: Option<String>,
    #[arg(long)]
    pub(crate) financial_stress: Option<String>,
    #[arg(long)]
    pub(crate) family_history: Option<String>,
}

impl PredictArgs {
    /// Answers given on the command line, in field order. Omitted flags stay unanswered.
    fn answers(&self) -> Vec<(FeatureField, AnswerInput)> {
        let text = |value: &Option<String>| value.as_deref().map(AnswerInput::from);

        [
            (FeatureField::Gender, text(&self.gender)),
            (FeatureField::Age, self.age.map(AnswerInput::from)),
            (FeatureField::AcademicPressure, text(&self.academic_pressure)),
            (FeatureField::StudySatisfaction, text(&self.study_satisfaction)),
            (FeatureField::SleepDuration, text(&self.sleep_duration)),
            (FeatureField::DietaryHabits, text(&self.dietary_habits)),
            (FeatureField::SuicidalThoughts, text(&self.suicidal_thoughts)),
            (FeatureField::StudyHours, text(&self.study_hours)),
            (FeatureField::FinancialStress, text(&self.financial_stress)),
            (FeatureField::FamilyHistory, text(&self.family_history)),
        ]
        .into_iter()
        .filter_map(|(field, input)| input.map(|input| (field, input)))
        .collect()
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run the scenario in one language only (id or en). Defaults to both.
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Artifact bundle to load instead of APP_ARTIFACT_PATH
    #[arg(long)]
    pub(crate) artifacts: Option<PathBuf>,
}

pub(crate) fn run_form(args: FormArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let locale = args.locale.unwrap_or(config.screening.default_locale);
    render_form(&FormSchema::for_locale(locale));
    Ok(())
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let locale = args.locale.unwrap_or(config.screening.default_locale);
    let service = load_or_notify(&config.screening, args.artifacts.clone(), locale)?;

    let mut session = FormSession::new(locale);
    for (field, input) in args.answers() {
        if let Err(rejected) = session.apply(field, &input) {
            render_notice(&Notice::new(
                NoticeKind::InvalidInput,
                locale,
                Some(rejected.to_string()),
            ));
            return Err(rejected.into());
        }
    }

    screen(&service, &session)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let notice_locale = args.locale.unwrap_or(config.screening.default_locale);
    let service = load_or_notify(&config.screening, args.artifacts, notice_locale)?;
    let locales = match args.locale {
        Some(locale) => vec![locale],
        None => Locale::ordered().to_vec(),
    };

    println!("Student depression screening demo");
    for locale in locales {
        println!("\n== {} ==", locale.label());
        let session = reference_session(locale)?;
        render_answers(&session);
        screen(&service, &session)?;
    }

    Ok(())
}

/// Same fail-fast load as the server, with a localized notice before the error.
fn load_or_notify(
    config: &ScreeningConfig,
    artifacts: Option<PathBuf>,
    locale: Locale,
) -> Result<Arc<ScreeningService>, AppError> {
    load_service(config, artifacts).map_err(|err| {
        render_notice(&unavailable_notice(locale, &err));
        err
    })
}

fn unavailable_notice(locale: Locale, err: &AppError) -> Notice {
    Notice::new(NoticeKind::Unavailable, locale, Some(err.to_string()))
}

fn screen(service: &ScreeningService, session: &FormSession) -> Result<(), AppError> {
    match service.submit(session) {
        Ok(outcome) => {
            render_outcome(&outcome);
            Ok(())
        }
        Err(err) => {
            render_notice(&err.notice(session.locale()));
            if let SubmissionError::Incomplete { missing } = &err {
                let copy = FormCopy::for_locale(session.locale());
                for field in missing {
                    println!("  - {}", copy.prompt(*field));
                }
            }
            Err(err.into())
        }
    }
}

const REFERENCE_CATEGORIES: [(FeatureField, &str); 5] = [
    (FeatureField::Gender, "Male"),
    (FeatureField::SleepDuration, "5-6 hours"),
    (FeatureField::DietaryHabits, "Unhealthy"),
    (FeatureField::SuicidalThoughts, "Yes"),
    (FeatureField::FamilyHistory, "Yes"),
];

const REFERENCE_RANKS: [(FeatureField, u8); 3] = [
    (FeatureField::AcademicPressure, 4),
    (FeatureField::StudySatisfaction, 2),
    (FeatureField::FinancialStress, 5),
];

/// Male, 22, heavy pressure, dissatisfied, 5-6 hours sleep, unhealthy diet,
/// suicidal thoughts, 8 study hours, very high financial stress, family history.
fn reference_session(locale: Locale) -> Result<FormSession, AppError> {
    scripted_session(locale, &REFERENCE_CATEGORIES, &REFERENCE_RANKS)
}

/// Answers given as canonical values. A value the catalog cannot display is an error.
fn scripted_session(
    locale: Locale,
    categories: &[(FeatureField, &str)],
    ranks: &[(FeatureField, u8)],
) -> Result<FormSession, AppError> {
    let catalog = CatalogBundle::for_locale(locale);
    let mut session = FormSession::new(locale);

    for &(field, category) in categories {
        let display = catalog
            .display_for_category(field, category)
            .ok_or_else(|| InputRejected::UnknownOption {
                field,
                value: category.to_string(),
            })?;
        session.select(field, display)?;
    }

    for &(field, rank) in ranks {
        let display = catalog
            .display_for_rank(field, rank)
            .ok_or_else(|| InputRejected::UnknownOption {
                field,
                value: rank.to_string(),
            })?;
        session.select(field, display)?;
    }

    session.set_age(22)?;
    session.set_study_hours(8)?;
    Ok(session)
}

fn render_form(schema: &FormSchema) {
    println!("{}", schema.title);
    println!("{}", schema.description);

    for (position, field) in schema.fields.iter().enumerate() {
        println!("\n{}. {}", position + 1, field.prompt);
        match (field.min, field.max) {
            (Some(min), Some(max)) => println!("   [{min}-{max}]"),
            _ => {
                for option in &field.options {
                    println!("   - {option}");
                }
            }
        }
    }

    println!("\n[{}]", schema.submit_label);
    println!();
    for line in schema.disclaimer {
        println!("{line}");
    }
}

fn render_answers(session: &FormSession) {
    let copy = FormCopy::for_locale(session.locale());
    for (field, answer) in session.answers().iter() {
        println!("  {}: {}", copy.prompt(field), answer.raw());
    }
}

fn render_outcome(outcome: &ScreeningOutcome) {
    let copy = outcome.copy;

    println!("\n{}", copy.toast);
    println!("Label: {}", outcome.label());
    println!("Encoded features:");
    for field in FeatureField::ordered() {
        println!(
            "  {:<40} {:>6.2}  scaled {:>7.3}",
            field.feature_name(),
            outcome.features.get(field),
            outcome.scaled.get(field)
        );
    }

    println!("\n{}", copy.headline);
    println!("\n{}", copy.recommendations_title);
    for line in copy.recommendations {
        println!("  - {line}");
    }
    println!("\n{}", copy.motivation);
    println!("\n{}", copy.follow_up_title);
    for line in copy.follow_up {
        println!("  - {line}");
    }
    if let Some(closing) = &copy.closing {
        println!("\n{}", closing.title);
        println!("{}", closing.text);
    }
}

fn render_notice(notice: &Notice) {
    println!("{}", notice.message);
    if let Some(detail) = &notice.detail {
        println!("  ({detail})");
    }
}
