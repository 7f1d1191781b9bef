//! CLI entrypoint for Triage Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use triage_application::{
    ConversationLogger, DeliberateUseCase, DeliberationInput, DifferentialUseCase,
    NoConversationLogger, NoProgress, NoTranscriptSink, ProgressNotifier, RoleAgent,
    TranscriptSink,
};
use triage_domain::{
    Audience, CaseReport, ConsensusNormalizer, Conversation, Model, OutputFormat, Severity,
    format_examples, generate_case_id,
};
use triage_infrastructure::{
    ConfigLoader, FileConfig, FileTranscriptSink, JsonExampleStore, JsonlConversationLogger,
    OpenAiGateway, ReportWriter, RetryingGateway,
};
use triage_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        for line in ConfigLoader::config_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    info!("Starting Triage Council");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let conversation = read_conversation(&cli)?;
    let case_id = cli
        .case_id
        .clone()
        .unwrap_or_else(|| generate_case_id(Local::now()));

    let mut options = config.model_options();
    if let Some(model) = &cli.model {
        let model: Model = model.parse()?;
        if config.models.consensus.is_none() && cli.consensus_model.is_none() {
            options = options.with_consensus_model(model.clone());
        }
        options.model = model;
    }
    if let Some(model) = &cli.consensus_model {
        options = options.with_consensus_model(model.parse()?);
    }

    let mut params = config.deliberation.to_params();
    if cli.parallel {
        params = params.with_parallel_assessments(true);
    }

    // === Dependency Injection ===
    let api_key = cli.api_key.clone().or_else(|| config.provider.api_key.clone());
    let openai = OpenAiGateway::from_env(
        config.provider.base_url.clone(),
        api_key,
        &config.provider.api_key_env,
    )
    .with_max_tokens(config.provider.max_tokens)
    .with_timeout(config.provider.timeout());
    if !openai.has_api_key() {
        bail!(
            "No API key. Pass --api-key or set {}.",
            config.provider.api_key_env
        );
    }
    let gateway = Arc::new(RetryingGateway::from_options(openai, &options));

    let catalogue =
        JsonExampleStore::load_or_bundled(config.deliberation.examples_file.as_deref())?;
    let sample = catalogue.sample(params.examples_per_level, params.example_seed);

    let conversation_logger: Arc<dyn ConversationLogger> =
        match config.output.conversation_log.as_ref().and_then(|path| {
            JsonlConversationLogger::open(path).map(|logger| logger.with_case_id(&case_id))
        }) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoConversationLogger),
        };

    let sink: Arc<dyn TranscriptSink> = if cli.no_reports {
        Arc::new(NoTranscriptSink)
    } else {
        Arc::new(FileTranscriptSink::new(&config.output.discussions_dir))
    };

    let agents = RoleAgent::roster(
        gateway.clone(),
        &options,
        &sample,
        conversation_logger.clone(),
    );
    let use_case = DeliberateUseCase::new(gateway.clone(), agents, options.clone())
        .with_params(params)
        .with_consensus_examples(format_examples(&sample, Audience::Consensus))
        .with_normalizer(ConsensusNormalizer::new(config.normalizer.lexicon()))
        .with_transcript_sink(sink)
        .with_conversation_logger(conversation_logger.clone());

    // === Deliberation ===
    let input = DeliberationInput::new(conversation, case_id);
    let outcome = if cli.quiet {
        use_case.execute_with_progress(input, &NoProgress).await?
    } else if !std::io::stderr().is_terminal() {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        let outcome = use_case
            .execute_with_progress(input, &progress as &dyn ProgressNotifier)
            .await?;
        progress.finish("Triage complete");
        outcome
    };

    let finished_at = Local::now();
    let report = CaseReport::new(&outcome.case_id, finished_at, &outcome.result);

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", ConsoleFormatter.render(format, &outcome, &report));

    // === Reports ===
    let writer = ReportWriter::new(config.output.report_dirs());
    if !cli.no_reports {
        match writer.write_outcome(&outcome, finished_at) {
            Ok(written) => info!(
                "Results saved to {} and {}",
                written.results_json.display(),
                written.quick_reference.display()
            ),
            Err(e) => warn!("Could not save reports: {}", e),
        }
    }

    if cli.differential {
        let differential = DifferentialUseCase::new(gateway, options.consensus_model.clone())
            .with_conversation_logger(conversation_logger);
        let body = differential
            .execute(&outcome.result)
            .await
            .context("Differential diagnosis query failed")?;
        if cli.no_reports {
            println!("{}", body);
        } else {
            let path = writer.write_differential(&outcome.case_id, Local::now(), &body)?;
            if !cli.quiet && format != OutputFormat::Json {
                println!("Differential diagnoses saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Verbosity-driven stderr logging, plus an optional log file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::prelude::*;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .context("--log-file must name a file")?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Print every configuration issue; refuse to start on errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

fn read_conversation(cli: &Cli) -> Result<Conversation> {
    let text = match (&cli.input_file, &cli.input_text) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, Some(text)) => text.clone(),
        (None, None) => bail!("Please provide conversation text via --input-file or --input-text"),
    };
    Ok(Conversation::new(text)?)
}
