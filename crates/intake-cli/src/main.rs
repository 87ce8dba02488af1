mod display;

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use intake_ai::{Generator, GeneratorConfig, HttpGenerator, Unavailable};
use intake_core::{LeadInquiry, QuestionSubmission, SubmissionRequest};
use intake_flow::Intake;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "intake", version, about = "Submit lead inquiries and community questions")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Skip the generator and always use the fallback confirmation.
    #[arg(long, global = true)]
    offline: bool,

    /// Print the result as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    generator: GeneratorArgs,
}

#[derive(Args)]
struct GeneratorArgs {
    /// Generator base URL.
    #[arg(long, env = "INTAKE_BASE_URL")]
    base_url: Option<String>,

    /// Generator API key. Without one the fallback confirmation is used.
    #[arg(long, env = "INTAKE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "INTAKE_MODEL")]
    model: Option<String>,

    #[arg(long)]
    max_tokens: Option<u32>,

    /// Request timeout for one generation call, in seconds.
    #[arg(long, env = "INTAKE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a provider inquiry from the course quiz.
    Lead {
        /// Preferred delivery method (online, in-person, blended).
        #[arg(long)]
        delivery: String,
        #[arg(long)]
        state: String,
        /// Training provider name.
        #[arg(long)]
        provider: String,
        #[arg(long)]
        inquiry: String,
    },
    /// Submit a community question.
    Question {
        #[arg(long)]
        question: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        context: Option<String>,
        /// Comma-separated keywords.
        #[arg(long)]
        keywords: Option<String>,
    },
    /// Submit a tagged JSON request read from a file (`-` for stdin).
    Submit { path: PathBuf },
}

impl GeneratorArgs {
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        config.api_key = self.api_key.clone();
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(n) = self.max_tokens {
            config.max_tokens = n;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("intake v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let generator = build_generator(&cli)?;
    let request = read_request(cli.command).await?;

    let intake = Intake::new(generator);
    let outcome = intake.submit(request).await.context("submission rejected")?;

    if cli.json {
        display::print_outcome_json(&outcome)?;
    } else {
        display::print_outcome_card(&outcome);
    }
    Ok(())
}

fn build_generator(cli: &Cli) -> anyhow::Result<Box<dyn Generator>> {
    let config = cli.generator.config();
    if cli.offline {
        tracing::info!("offline mode, generator disabled");
        return Ok(Box::new(Unavailable));
    }
    if !config.is_usable() {
        tracing::warn!("no generator API key configured, using fallback confirmations");
        return Ok(Box::new(Unavailable));
    }
    let generator = HttpGenerator::new(config).context("building HTTP generator")?;
    Ok(Box::new(generator))
}

async fn read_request(command: Command) -> anyhow::Result<SubmissionRequest> {
    let request = match command {
        Command::Lead {
            delivery,
            state,
            provider,
            inquiry,
        } => SubmissionRequest::Lead(LeadInquiry {
            delivery_preference: delivery,
            state,
            provider_name: provider,
            inquiry,
        }),
        Command::Question {
            question,
            email,
            category,
            context,
            keywords,
        } => SubmissionRequest::Question(QuestionSubmission {
            question,
            context,
            email,
            category,
            keywords,
        }),
        Command::Submit { path } => {
            let text = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading request from stdin")?;
                buf
            } else {
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?
            };
            serde_json::from_str(&text).context("parsing submission JSON")?
        }
    };
    Ok(request)
}
