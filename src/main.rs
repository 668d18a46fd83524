use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use product_discovery::adapters::ai::{OpenRouterConfig, OpenRouterProvider};
use product_discovery::application::{CompletionClient, DiscoveryAnalyzer, ReportService};
use product_discovery::config::{AppConfig, LogFormat, LoggingConfig};
use product_discovery::domain::discovery::{
    AnalysisBundle, AnalysisFailure, AnalysisRequest, Answers, CaseStudyCompany,
    FollowUpQuestions, ProductIdea,
};
use product_discovery::domain::pricing::{
    detect_highest_price_drop, price_seats, Seat, SeatPrice, DEFAULT_BASE_PRICE,
};
use product_discovery::ports::ExportFormat;

#[derive(Parser)]
#[command(name = "product-discovery")]
#[command(about = "Analyze product ideas with strategy frameworks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate follow-up questions for a product idea
    Questions { idea: String },

    /// Run every framework (and optionally a case study) against an idea
    Analyze {
        idea: String,

        /// JSON object of answers, e.g. {"q1": "..."}
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Ask the follow-up questions on the terminal first
        #[arg(short, long)]
        interactive: bool,

        /// Compare against one of the case-study companies
        #[arg(long)]
        case_study: Option<String>,

        /// Write a report in this format (txt or pdf)
        #[arg(short, long)]
        format: Option<String>,

        /// Report path; defaults to the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the case-study companies
    Companies,

    /// Price seats from a JSON array of seats
    PriceSeats {
        seats: PathBuf,

        #[arg(long, default_value_t = DEFAULT_BASE_PRICE)]
        base_price: f64,
    },

    /// Find the largest drop of the most expensive seat between two snapshots
    PriceDrop { old: PathBuf, new: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Questions { idea } => questions(&config, &idea).await,
        Commands::Analyze {
            idea,
            answers,
            interactive,
            case_study,
            format,
            output,
        } => {
            analyze(
                &config,
                &idea,
                answers.as_deref(),
                interactive,
                case_study.as_deref(),
                format.as_deref(),
                output,
            )
            .await
        }
        Commands::Companies => {
            for company in DiscoveryAnalyzer::case_study_companies() {
                println!("{}", company);
            }
            Ok(())
        }
        Commands::PriceSeats { seats, base_price } => {
            let seats: Vec<Seat> = read_json(&seats)?;
            println!("{}", serde_json::to_string_pretty(&price_seats(&seats, base_price))?);
            Ok(())
        }
        Commands::PriceDrop { old, new } => {
            let old: Vec<SeatPrice> = read_json(&old)?;
            let new: Vec<SeatPrice> = read_json(&new)?;
            let drop = detect_highest_price_drop(&old, &new);
            println!("{}", serde_json::to_string_pretty(&drop)?);
            Ok(())
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
}

fn build_analyzer(config: &AppConfig) -> Result<DiscoveryAnalyzer> {
    config.validate().context("Invalid configuration")?;

    let api_key = config
        .ai
        .openrouter_api_key
        .clone()
        .context("OPENROUTER_API_KEY is not set")?;
    let provider = OpenRouterProvider::new(
        OpenRouterConfig::from_secret(api_key)
            .with_model(config.ai.model.as_str())
            .with_base_url(config.ai.base_url.as_str())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;

    let mut client = CompletionClient::new(Arc::new(provider)).with_max_tokens(config.ai.max_tokens);
    if let Some(temperature) = config.ai.temperature {
        client = client.with_temperature(temperature);
    }
    Ok(DiscoveryAnalyzer::new(client))
}

fn parse_idea(idea: &str) -> Result<ProductIdea> {
    ProductIdea::new(idea).context("Please enter a product idea or problem statement")
}

async fn questions(config: &AppConfig, idea: &str) -> Result<()> {
    let idea = parse_idea(idea)?;
    let analyzer = build_analyzer(config)?;

    let questions = analyzer.follow_up_questions(&idea).await?;
    for (_, question) in questions.questions() {
        println!("{}", question);
    }
    Ok(())
}

async fn analyze(
    config: &AppConfig,
    idea: &str,
    answers_path: Option<&Path>,
    interactive: bool,
    case_study: Option<&str>,
    format: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let idea = parse_idea(idea)?;
    let company = case_study
        .map(str::parse::<CaseStudyCompany>)
        .transpose()?;
    let format = match (format, &output) {
        (Some(f), _) => Some(f.parse::<ExportFormat>()?),
        (None, Some(_)) => Some(config.report.export_format()?),
        (None, None) => None,
    };

    let analyzer = build_analyzer(config)?;

    let mut answers = match answers_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Answers::from_json_str(&raw)?
        }
        None => Answers::new(),
    };

    if interactive {
        let questions = analyzer.follow_up_questions(&idea).await;
        collect_answers(questions, io::stdin().lock(), &mut io::stdout(), &mut answers)?;
    }

    let request = AnalysisRequest::new(idea, answers);
    let bundle = analyzer.run_discovery(&request, company).await;
    print_bundle(&bundle);

    if let Some(format) = format {
        let report = ReportService::new().generate_report(request.product_idea(), &bundle, format)?;
        let path = output.unwrap_or_else(|| config.report.output_dir.join(&report.filename));
        std::fs::write(&path, &report.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Report saved to {} ({})", path.display(), report.content_type);
    }

    if bundle.failure_count() == bundle.frameworks().count() {
        bail!("Every framework analysis failed");
    }
    Ok(())
}

/// Asks each follow-up question and records the typed answers until input ends.
///
/// A failed question request is reported and the run continues with the
/// answers gathered so far.
fn collect_answers<R: BufRead, W: Write>(
    questions: Result<FollowUpQuestions, AnalysisFailure>,
    input: R,
    out: &mut W,
    answers: &mut Answers,
) -> Result<()> {
    let questions = match questions {
        Ok(questions) => questions,
        Err(failure) => {
            warn!(error = %failure, "Follow-up questions unavailable");
            writeln!(out, "{}\nContinuing with the answers collected so far.", failure)?;
            return Ok(());
        }
    };

    let mut lines = input.lines();
    for (key, question) in questions.questions() {
        write!(out, "{}\n> ", question)?;
        out.flush()?;
        match lines.next() {
            Some(line) => answers.insert(key, line?.trim()),
            None => break,
        }
    }
    Ok(())
}

fn print_bundle(bundle: &AnalysisBundle) {
    for result in bundle.frameworks() {
        let framework = result.framework();
        println!("\n## {}", framework.display_name());
        println!("*{}*\n", framework.subtitle());
        println!("{}", result.analysis_text());
    }

    if let Some(case_study) = bundle.case_study() {
        println!("\n## Case Study: {}", case_study.company());
        println!("{}", case_study.analysis_text());
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
