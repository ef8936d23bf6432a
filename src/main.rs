use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use vnsum::ui::render::{ErrorBanner, SampleList};
use vnsum::ui::shell;
use vnsum::{
    Config, DocumentSource, GenerationParams, InferenceClient, Outcome, Sample, Session,
    SummarizerClient,
};

#[derive(Parser, Debug)]
#[command(name = "vnsum", version)]
#[command(about = "Vietnamese text summarization client")]
struct Cli {
    /// summarization API base URL, overrides API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// stderr log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the summarization API is up
    Health,
    /// Fetch the server's canned demo summary
    Demo,
    /// Summarize a document through the summarization API
    Summarize(SummarizeArgs),
    /// Summarize a document through the generic inference endpoint
    Infer(SummarizeArgs),
    /// List the built-in sample texts
    Samples,
    /// Interactive session
    Shell,
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// maximum summary length in tokens
    #[arg(long, default_value_t = 160, value_parser = clap::value_parser!(u32).range(50..=300))]
    max_new_tokens: u32,

    /// sampling temperature
    #[arg(long, default_value_t = 0.7, value_parser = parse_unit_interval)]
    temperature: f64,

    /// nucleus sampling cutoff
    #[arg(long, default_value_t = 0.9, value_parser = parse_unit_interval)]
    top_p: f64,

    /// print only the summary text
    #[arg(long)]
    raw: bool,
}

/// Document input; stdin is read when none is given
#[derive(Args, Debug)]
#[group(multiple = false)]
struct InputArgs {
    /// document text
    #[arg(long)]
    text: Option<String>,

    /// built-in sample text
    #[arg(long, value_enum)]
    sample: Option<Sample>,

    /// UTF-8 .txt file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn source(&self) -> Result<DocumentSource> {
        if let Some(text) = &self.text {
            return Ok(DocumentSource::Text(text.clone()));
        }
        if let Some(sample) = self.sample {
            return Ok(DocumentSource::Sample(sample));
        }
        if let Some(path) = &self.file {
            return Ok(DocumentSource::File(path.clone()));
        }

        let mut text = String::new();
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            stdin.lock().read_to_string(&mut text)?;
        }
        Ok(DocumentSource::Text(text))
    }
}

fn parse_unit_interval(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("not a number: {raw}"))?;
    if (0.1..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 0.1 and 1.0, got {value}"))
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let dotenv = Config::load_dotenv()?;
    let mut config = Config::from_env();
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url);
    }

    let _guard = vnsum::logging::init(&cli.log_level, &config.log_file)?;
    if let Some(path) = dotenv {
        info!("loaded .env from {}", path.display());
    }
    info!(
        api_base_url = %config.api_base_url,
        inference_url = %config.inference_url,
        has_token = config.hf_token.is_some(),
        "configuration loaded"
    );

    let mut session = Session::new(
        SummarizerClient::new(&config.api_base_url),
        InferenceClient::new(&config.inference_url, config.hf_token.clone()),
    );

    match cli.command {
        Command::Health => {
            let health = session.refresh_health().await;
            print!("{health}");
            Ok(exit_code(health.healthy))
        }
        Command::Demo => Ok(report(session.demo().await, false)),
        Command::Summarize(args) => {
            if let Some(code) = prepare(&mut session, &args)? {
                return Ok(code);
            }
            Ok(report(session.summarize().await, args.raw))
        }
        Command::Infer(args) => {
            if let Some(code) = prepare(&mut session, &args)? {
                return Ok(code);
            }
            Ok(report(session.infer().await, args.raw))
        }
        Command::Samples => {
            print!("{}", SampleList);
            Ok(ExitCode::SUCCESS)
        }
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(&mut session, stdin, &mut std::io::stdout()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the document and parameters into the session. Returns an exit code
/// when the document could not be loaded.
fn prepare(session: &mut Session, args: &SummarizeArgs) -> Result<Option<ExitCode>> {
    session.set_params(GenerationParams::new(
        args.max_new_tokens,
        args.temperature,
        args.top_p,
    )?);

    if let Err(err) = session.load(&args.input.source()?) {
        eprint!("{}", ErrorBanner(&err));
        return Ok(Some(ExitCode::FAILURE));
    }
    Ok(None)
}

fn report(outcome: &Outcome, raw: bool) -> ExitCode {
    match (outcome.summary(), raw) {
        (Some(summary), true) => println!("{summary}"),
        (Some(_), false) => print!("{outcome}"),
        (None, _) => eprint!("{outcome}"),
    }
    exit_code(outcome.is_success())
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
