use crate::demo::{run_demo, run_form, run_predict, DemoArgs, FormArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindscreen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Student Depression Screening",
    about = "Serve or run the student depression-risk screening from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the localized questionnaire with every option list
    Form(FormArgs),
    /// Screen one set of answers passed as flags
    Predict(PredictArgs),
    /// Run the reference scenario end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Form(args) => run_form(args),
        Command::Predict(args) => run_predict(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindscreen::screening::Locale;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["mindscreen-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn predict_accepts_answers_as_flags() {
        let cli = Cli::try_parse_from([
            "mindscreen-api",
            "predict",
            "--locale",
            "en",
            "--gender",
            "Male",
            "--age",
            "22",
            "--study-hours",
            "8",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.locale, Some(Locale::English));
                assert_eq!(args.gender.as_deref(), Some("Male"));
                assert_eq!(args.age, Some(22));
                assert_eq!(args.study_hours.as_deref(), Some("8"));
            }
            other => panic!("expected predict command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let result = Cli::try_parse_from(["mindscreen-api", "form", "--locale", "fr"]);
        assert!(result.is_err());
    }
}
