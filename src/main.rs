//! QMSDraft - guided ISO 9001 documentation for your terminal.
//!
//! Runs the interactive form by default; the subcommands cover scripted use
//! (compiling documents from an answers file, checking text, asking the AI
//! about one question).

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qmsdraft::catalog;
use qmsdraft::compiler::{self, CompiledDocument};
use qmsdraft::core::{looks_like_plan, AnswerStore, AnswersFile, Config, PlanSignals, MIN_CLASSIFIABLE_LEN};
use qmsdraft::{tui, AiGateway, App, RequestKind, RequestTracker};

/// Guided ISO 9001 quality-management documentation drafter
#[derive(Parser)]
#[command(name = "qmsdraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the guided form (default)
    Run,

    /// Compile documents from an answers file
    Compile {
        /// Answers file (.toml, .yaml or .yml)
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Compile only this document (see `qmsdraft documents`)
        #[arg(short, long)]
        document: Option<String>,

        /// Output directory (defaults to `[export] dir`)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print to stdout instead of writing files
        #[arg(long, conflicts_with = "out")]
        stdout: bool,

        /// Effective date for the document headers ("today" for the current date)
        #[arg(long, value_name = "DATE")]
        effective_date: Option<String>,
    },

    /// List the documents that can be compiled
    Documents,

    /// List sections and their questions
    Sections,

    /// Check whether text reads like a plan rather than a strategy
    Check {
        /// Text to check (reads stdin when omitted)
        text: Option<String>,
    },

    /// Ask the AI about a single question
    Ai {
        #[command(subcommand)]
        operation: AiOperation,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum AiOperation {
    /// Draft an answer
    Draft(AiRequestArgs),

    /// Search the web for guidance on a question
    Search(AiRequestArgs),

    /// Rewrite an answer that reads like a plan into a strategic direction
    Refine(AiRequestArgs),

    /// Show which AI provider would be used
    Status,
}

#[derive(Args)]
struct AiRequestArgs {
    /// Question id, for example 1.1.a
    question: String,

    /// Answers file providing the current answer and company details
    #[arg(short, long)]
    answers: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Run));

    // The alternate screen owns the terminal unless debugging
    if !interactive || cli.verbose {
        init_logging(cli.verbose);
    }

    match cli.command {
        None | Some(Commands::Run) => cmd_run()?,
        Some(Commands::Compile { answers, document, out, stdout, effective_date }) => {
            cmd_compile(
                answers.as_deref(),
                document.as_deref(),
                out,
                stdout,
                effective_date.as_deref(),
            )?;
        }
        Some(Commands::Documents) => cmd_documents(),
        Some(Commands::Sections) => cmd_sections(),
        Some(Commands::Check { text }) => cmd_check(text)?,
        Some(Commands::Ai { operation }) => cmd_ai(operation)?,
        Some(Commands::Config { path }) => cmd_config(path)?,
        Some(Commands::Completions { shell }) => cmd_completions(shell),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Run the guided form.
fn cmd_run() -> Result<()> {
    let config = Config::load()?;

    // Create tokio runtime for background AI requests
    let rt = tokio::runtime::Runtime::new()?;
    let gateway = rt.block_on(AiGateway::from_config(&config.ai));
    let tracker = RequestTracker::new(Arc::new(gateway), rt.handle().clone());

    let app = App::new(config, AnswerStore::new()).with_tracker(tracker);
    tui::run_tui(app)?;

    Ok(())
}

/// Build a store from configuration defaults and an optional answers file.
fn load_store(config: &Config, answers: Option<&Path>) -> Result<AnswerStore> {
    let mut store = AnswerStore::new();
    store.profile_mut().set_document_effective_date(config.general.default_effective_date.clone());

    if let Some(path) = answers {
        AnswersFile::load(path)?.apply_to(&mut store);
    }

    Ok(store)
}

/// Compile documents to files or stdout.
fn cmd_compile(
    answers: Option<&Path>,
    document: Option<&str>,
    out: Option<PathBuf>,
    to_stdout: bool,
    effective_date: Option<&str>,
) -> Result<()> {
    let config = Config::load()?;
    let mut store = load_store(&config, answers)?;

    if let Some(date) = effective_date {
        let date = if date.eq_ignore_ascii_case("today") {
            chrono::Local::now().format("%Y-%m-%d").to_string()
        } else {
            date.to_string()
        };
        store.profile_mut().set_document_effective_date(date);
    }

    let documents: Vec<CompiledDocument> = match document {
        Some(id) => {
            let Ok(definition) = catalog::document(id) else {
                anyhow::bail!("Unknown document: {id}. Run `qmsdraft documents` to list them");
            };
            vec![CompiledDocument { definition, content: compiler::compile(definition, &store) }]
        }
        None => compiler::compile_all(&store),
    };

    if to_stdout {
        for (i, document) in documents.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", document.content);
        }
        return Ok(());
    }

    let dir = out.unwrap_or_else(|| config.export_dir());
    for document in &documents {
        let path = compiler::write_document(&dir, document, &config.export.extension)
            .with_context(|| format!("Failed to write {}", document.definition.id))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// List compilable documents.
fn cmd_documents() {
    println!("{:<14} {:<8} TITLE", "ID", "REV");
    for doc in catalog::all_documents() {
        println!("{:<14} {:<8} {}", doc.id, doc.revision, doc.title);
    }
}

/// List sections and questions.
fn cmd_sections() {
    for section in catalog::sections() {
        println!("{} ({})", section.title, section.id);
        for question in section.questions {
            let mut actions = Vec::new();
            if question.draft_prompt.is_some() {
                actions.push("draft");
            }
            if question.search_query.is_some() {
                actions.push("search");
            }
            if question.checks_strategy {
                actions.push("refine");
            }

            if actions.is_empty() {
                println!("  {:<8} {}", question.id, question.text);
            } else {
                println!("  {:<8} {} [{}]", question.id, question.text, actions.join(", "));
            }
        }
        println!();
    }
}

/// Run the plan/strategy check.
fn cmd_check(text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().chars().count() < MIN_CLASSIFIABLE_LEN {
        println!("Too short to classify (under {MIN_CLASSIFIABLE_LEN} characters)");
        return Ok(());
    }

    let signals = PlanSignals::measure(&text);
    if looks_like_plan(&text) {
        println!("Reads like a plan: consider describing the overall direction instead of the actions");
    } else {
        println!("Reads like a strategy");
    }
    println!("  plan verbs:        {}", signals.plan_terms);
    println!("  strategy keywords: {}", signals.strategy_terms);
    println!("  list-like:         {}", if signals.looks_like_list { "yes" } else { "no" });

    Ok(())
}

/// Handle AI commands.
fn cmd_ai(operation: AiOperation) -> Result<()> {
    let config = Config::load()?;

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let gateway = AiGateway::from_config(&config.ai).await;

        let (kind, args) = match operation {
            AiOperation::Status => {
                match gateway.active_provider() {
                    Some(provider) => println!("Active AI provider: {provider}"),
                    None => println!("No AI provider available"),
                }
                if gateway.is_available() {
                    println!("Fallback order: {}", gateway.provider_names().join(", "));
                    let search = if gateway.can_search() { "available" } else { "unavailable" };
                    println!("Web search: {search}");
                }
                return Ok(());
            }
            AiOperation::Draft(args) => (RequestKind::Draft, args),
            AiOperation::Search(args) => (RequestKind::Search, args),
            AiOperation::Refine(args) => (RequestKind::RefineStrategy, args),
        };

        let question = catalog::question(&args.question)?;
        let store = load_store(&config, args.answers.as_deref())?;
        let answer = store.answer(question.id).unwrap_or_default();

        if kind == RequestKind::RefineStrategy && answer.trim().is_empty() {
            anyhow::bail!("Question {} has no answer to refine", question.id);
        }
        let Some(input) = question.request_input(kind, answer) else {
            anyhow::bail!("Question {} does not offer AI {kind}", question.id);
        };

        let suggestion = if kind.uses_search() {
            gateway.search(&input).await
        } else {
            gateway.draft(&input).await
        };

        println!("{}", suggestion.text);
        let links: Vec<(&str, &str)> = suggestion.links().collect();
        if !links.is_empty() {
            println!("\nSources:");
            for (label, uri) in links {
                println!("  - {label} ({uri})");
            }
        }

        Ok(())
    })
}

/// Show configuration.
fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::config_dir() {
            println!("{}", path.join("config.toml").display());
        }
        return Ok(());
    }

    let config = Config::load()?;
    let toml = toml::to_string_pretty(&config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "qmsdraft", &mut io::stdout());
}
