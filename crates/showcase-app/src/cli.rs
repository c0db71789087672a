use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use showcase_analytics::{Notifier, TracingSink};
use showcase_app::{PageBindings, PageController, TextGrid, TextPager};
use showcase_core::{AppInfo, EngineOptions, InputEvent, Outcome, RenderIntent, ShufflePolicy};
use showcase_ui::Catalog;
use tracing_subscriber::EnvFilter;

/// Drive the recipe grid from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = AppInfo::name(),
    author,
    version = AppInfo::version(),
    about = AppInfo::about()
)]
struct Cli {
    /// Catalog JSON to load instead of $SHOWCASE_CATALOG or the built-in menu.
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Seed for the shuffle RNG.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Keep catalog order instead of reshuffling on every category change.
    #[arg(long)]
    stable: bool,

    /// Initial viewport width in pixels.
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Print one JSON record per step instead of text frames.
    #[arg(long)]
    json: bool,

    /// List the selectable categories and exit.
    #[arg(long)]
    list_categories: bool,

    /// Log level for stderr diagnostics (overridden by RUST_LOG).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Events to apply in order: category:<tag>, page:<n>, next, prev,
    /// viewport:<px>, activate:<id>.
    #[arg(value_name = "EVENT")]
    events: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonStep<'a> {
    step: usize,
    event: Option<&'a InputEvent>,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<&'a RenderIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activated: Option<&'a str>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let catalog = match cli.catalog.as_ref() {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::current().clone(),
    };

    if cli.list_categories {
        for category in catalog.categories() {
            println!("{category}");
        }
        return Ok(());
    }

    let events = cli
        .events
        .iter()
        .map(|raw| {
            raw.parse::<InputEvent>()
                .with_context(|| format!("parsing event '{raw}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let options = EngineOptions {
        shuffle: if cli.stable {
            ShufflePolicy::Stable
        } else {
            ShufflePolicy::Reshuffle
        },
        seed: cli.seed,
        viewport_width: cli.width,
    };
    let cards = catalog.card_set();
    let mut controller = PageController::mount(
        PageBindings::new(cards.clone(), TextGrid::new(cards), TextPager::new()),
        options,
        Notifier::new(TracingSink),
    );

    if let Some(intent) = controller.last_intent() {
        emit(&controller, cli.json, 0, None, &Outcome::Rendered(intent.clone()))?;
    }
    for (index, input) in events.iter().enumerate() {
        let outcome = controller.dispatch(input);
        emit(&controller, cli.json, index + 1, Some(input), &outcome)?;
    }
    Ok(())
}

fn emit(
    controller: &PageController<TextGrid, TextPager>,
    json: bool,
    step: usize,
    input: Option<&InputEvent>,
    outcome: &Outcome,
) -> Result<()> {
    if json {
        let activated = match outcome {
            Outcome::Activated(card) => Some(card.title.as_str()),
            _ => None,
        };
        let record = JsonStep {
            step,
            event: input,
            outcome: outcome.label(),
            intent: outcome.intent(),
            activated,
        };
        println!(
            "{}",
            serde_json::to_string(&record).context("serializing step record")?
        );
        return Ok(());
    }

    if let Some(input) = input {
        println!("> {input}");
    }
    match outcome {
        Outcome::Rendered(intent) => {
            println!(
                "category: {} | page {}/{}",
                intent.category, intent.current_page, intent.total_pages
            );
            if intent.is_empty() {
                println!("  (no recipes)");
            }
            if let Some(grid) = controller.card_surface() {
                for line in grid.lines() {
                    println!("{line}");
                }
            }
            if let Some(line) = controller.pagination_surface().and_then(TextPager::line) {
                println!("{line}");
            }
        }
        Outcome::Unchanged => println!("(no change)"),
        Outcome::Activated(card) => println!("activated: {card}"),
    }
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when embedded in a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
