use serde::Serialize;
use showcase_core::{InputEvent, Outcome};
use std::fmt::Write as _;

/// One JSONL row per replay step. Step 0 is the initial render on mount.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Frame {
    pub step: usize,
    pub event: Option<String>,
    pub outcome: &'static str,
    pub category: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub visible: Vec<String>,
    pub pagination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<String>,
}

/// Running tallies over the replayed script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub steps: usize,
    pub renders: usize,
    pub unchanged: usize,
    pub activations: usize,
    pub category_changes: usize,
    pub analytics_events: usize,
    pub final_category: String,
    pub final_page: usize,
    pub final_total_pages: usize,
}

impl ReplayStats {
    pub fn record(&mut self, input: &InputEvent, outcome: &Outcome) {
        self.steps += 1;
        match outcome {
            Outcome::Rendered(_) => {
                self.renders += 1;
                if matches!(input, InputEvent::CategorySelected(_)) {
                    self.category_changes += 1;
                }
            }
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Activated(_) => self.activations += 1,
        }
    }

    pub fn finish(&mut self, frame: &Frame) {
        self.final_category = frame.category.clone();
        self.final_page = frame.current_page;
        self.final_total_pages = frame.total_pages;
    }
}

pub fn render_markdown(
    run_id: &str,
    seed: u64,
    stats: &ReplayStats,
    frames: &[Frame],
    final_frame: Option<&str>,
) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Replay summary: {run_id}");
    md.push('\n');
    let _ = writeln!(md, "Seed: `{seed}`");
    md.push('\n');
    md.push_str("| Metric | Value |\n");
    md.push_str("|---|---:|\n");
    for (label, value) in [
        ("Steps", stats.steps),
        ("Renders", stats.renders),
        ("No-ops", stats.unchanged),
        ("Activations", stats.activations),
        ("Category changes", stats.category_changes),
        ("Analytics events", stats.analytics_events),
    ] {
        let _ = writeln!(md, "| {label} | {value} |");
    }
    md.push('\n');
    let _ = writeln!(
        md,
        "Final state: category `{}`, page {}/{}",
        stats.final_category, stats.final_page, stats.final_total_pages
    );
    md.push('\n');
    md.push_str("| Step | Event | Outcome | Page | Visible |\n");
    md.push_str("|---:|---|---|---|---:|\n");
    for frame in frames {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {}/{} | {} |",
            frame.step,
            frame.event.as_deref().unwrap_or("(mount)"),
            frame.outcome,
            frame.current_page,
            frame.total_pages,
            frame.visible.len()
        );
    }
    if let Some(text) = final_frame {
        md.push_str("\n## Final frame\n\n```text\n");
        md.push_str(text);
        md.push_str("\n```\n");
    }
    md
}
