mod report;

pub use report::{Frame, ReplayStats, render_markdown};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use showcase_analytics::{Notifier, RecordingSink};
use showcase_app::{PageBindings, PageController, TextGrid, TextPager};
use showcase_core::{EngineOptions, InputEvent, Outcome, RenderIntent};
use showcase_ui::strip::frame as text_frame;
use showcase_ui::{Catalog, CatalogError};
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{ReplayConfig, ResolvedOutputs, ValidationError};
use crate::logging::telemetry_path_for;

/// Replays a scripted session against a freshly mounted controller.
pub struct ReplayRunner {
    config: ReplayConfig,
    outputs: ResolvedOutputs,
    catalog: Catalog,
    script: Vec<InputEvent>,
}

#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub stats: ReplayStats,
    pub seed: u64,
    pub frames_written: usize,
    pub frames_path: PathBuf,
    pub summary_path: PathBuf,
    pub telemetry_path: Option<PathBuf>,
}

impl ReplayRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: ReplayConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let catalog = match config.catalog.as_ref() {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::placeholder(),
        };
        let script = config.parsed_script()?;
        Ok(Self {
            config,
            outputs,
            catalog,
            script,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn script(&self) -> &[InputEvent] {
        &self.script
    }

    pub fn seed(&self) -> u64 {
        self.config.session.seed.unwrap_or(0)
    }

    pub fn run(&self) -> Result<ReplaySummary, RunnerError> {
        ensure_parent(self.outputs.frames_jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let seed = self.seed();
        let options = EngineOptions {
            shuffle: self.config.session.shuffle,
            seed: Some(seed),
            viewport_width: self.config.session.viewport_width,
        };
        let sink = Arc::new(RecordingSink::new(self.script.len().max(1)));
        let cards = self.catalog.card_set();
        let mut controller = PageController::mount(
            PageBindings::new(cards.clone(), TextGrid::new(cards), TextPager::new()),
            options,
            Notifier::new(Arc::clone(&sink)),
        );
        let initial = controller
            .last_intent()
            .cloned()
            .ok_or(RunnerError::Inactive)?;

        let mut writer = BufWriter::new(File::create(&self.outputs.frames_jsonl)?);
        let mut frames = Vec::with_capacity(self.script.len() + 1);
        let mut stats = ReplayStats::default();

        let mount = capture(&controller, 0, None, &Outcome::Rendered(initial));
        write_frame(&mut writer, &mount)?;
        frames.push(mount);

        for (index, input) in self.script.iter().enumerate() {
            let outcome = controller.dispatch(input);
            stats.record(input, &outcome);
            let frame = capture(&controller, index + 1, Some(input), &outcome);
            if self.config.logging.enable_structured && tracing::enabled!(Level::INFO) {
                event!(
                    target: "showcase_replay::step",
                    Level::INFO,
                    run_id = %self.config.run_id,
                    step = frame.step,
                    input = %input,
                    outcome = frame.outcome,
                    page = frame.current_page,
                    total_pages = frame.total_pages,
                    visible = frame.visible.len(),
                );
            }
            write_frame(&mut writer, &frame)?;
            frames.push(frame);
        }
        writer.flush()?;

        stats.analytics_events = sink.len();
        if let Some(last) = frames.last() {
            stats.finish(last);
        }

        let final_frame = controller
            .last_intent()
            .zip(controller.engine())
            .map(|(intent, engine)| text_frame(intent, engine.cards()));
        let markdown = render_markdown(
            &self.config.run_id,
            seed,
            &stats,
            &frames,
            final_frame.as_deref(),
        );
        fs::write(&self.outputs.summary_md, markdown)?;

        let telemetry_path = self
            .config
            .logging
            .enable_structured
            .then(|| telemetry_path_for(&self.outputs));

        Ok(ReplaySummary {
            stats,
            seed,
            frames_written: frames.len(),
            frames_path: self.outputs.frames_jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            telemetry_path,
        })
    }
}

/// Frame for the controller state after `outcome`. No-ops and activations
/// report the last applied render.
fn capture(
    controller: &PageController<TextGrid, TextPager>,
    step: usize,
    input: Option<&InputEvent>,
    outcome: &Outcome,
) -> Frame {
    let intent: Option<&RenderIntent> = outcome.intent().or_else(|| controller.last_intent());
    let visible = match (intent, controller.engine()) {
        (Some(intent), Some(engine)) => intent
            .visible
            .iter()
            .filter_map(|id| engine.cards().get(*id))
            .map(|card| card.title.clone())
            .collect(),
        _ => Vec::new(),
    };
    let activated = match outcome {
        Outcome::Activated(card) => Some(card.title.clone()),
        _ => None,
    };

    Frame {
        step,
        event: input.map(ToString::to_string),
        outcome: outcome.label(),
        category: intent
            .map(|intent| intent.category.to_string())
            .unwrap_or_default(),
        current_page: intent.map_or(0, |intent| intent.current_page),
        total_pages: intent.map_or(0, |intent| intent.total_pages),
        visible,
        pagination: controller
            .pagination_surface()
            .and_then(TextPager::line)
            .map(str::to_string),
        activated,
    }
}

fn write_frame(writer: &mut BufWriter<File>, frame: &Frame) -> Result<(), RunnerError> {
    serde_json::to_writer(&mut *writer, frame)?;
    writer.write_all(b"\n")?;
    Ok(())
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("invalid script: {0}")]
    Script(#[from] ValidationError),
    #[error("recipe grid did not mount")]
    Inactive,
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize frame: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
