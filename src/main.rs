use anyhow::Result;
use clap::{Parser, Subcommand};
use quizforge::{bank, App, Config, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quizforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a drill set and print it
    Generate {
        /// Comma-separated concept names (e.g. "Welding, Pipe Fitting")
        #[arg(short = 'C', long)]
        concepts: String,

        /// Difficulty level (see `quizforge levels`)
        #[arg(short, long)]
        level: String,

        /// Number of questions to generate
        #[arg(short = 'n', long, default_value = "5")]
        count: String,

        /// Copy the set to the system clipboard as well
        #[arg(long)]
        copy: bool,

        /// Seed the random source for a reproducible set
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the available levels
    Levels,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { concepts, level, count, copy, seed }) => {
            run_generate(&concepts, &level, &count, copy, seed)
        }
        Some(Commands::Levels) => {
            for level in Level::ALL {
                println!("{}", level.label());
            }
            Ok(())
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let mut app = App::new(config)?;
            app.run()
        }
    }
}

/// One-shot generation: validate at the boundary, print, optionally copy
fn run_generate(
    concepts: &str,
    level: &str,
    count: &str,
    copy: bool,
    seed: Option<u64>,
) -> Result<()> {
    let level = match quizforge::form::parse_level(level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let request = match quizforge::form::DrillRequest::from_fields(concepts, level, count) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let records = match seed {
        Some(seed) => bank().generate_with_rng(
            &request.concepts,
            request.level.name(),
            request.count,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => bank().generate(&request.concepts, request.level.name(), request.count),
    };

    println!("Generated Q&A Set ({})\n", request.level);
    for qa in quizforge::render::render(&records) {
        println!("Question {}: {}", qa.ordinal, qa.question);
        println!("Answer Hint: {}\n", qa.answer_hint);
    }

    if copy {
        let text = quizforge::render::clipboard_text(&records);
        match quizforge::clipboard::copy_text(&text) {
            Ok(()) => println!("{}", quizforge::clipboard::COPY_SUCCESS_MESSAGE),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {}", e);
                eprintln!("{}", quizforge::clipboard::COPY_FALLBACK_MESSAGE);
            }
        }
    }

    Ok(())
}
