//! Command implementations for the `gridsync` tool.
//!
//! Each command takes already-read input and returns a report, so the
//! binary only handles arguments, files and printing.

use anyhow::{Context, Result};
use gridsync_codec::{LayoutCodec, WireItem};
use gridsync_model::{LayoutModel, PlacementConfig};
use gridsync_sync::{
    ClientEvent, ClientSurface, Delivery, DiscardReason, LayoutProperties, SurfaceError,
    SyncConfig, SyncController,
};
use gridsync_types::GridItem;
use std::fmt;
use tracing::{debug, warn};

// ── inspect ──────────────────────────────────────────────────────

/// Summary of a layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub layout: LayoutModel,
    /// Pairs of item ids sharing at least one cell.
    pub overlaps: Vec<(String, String)>,
    /// Items reaching past the last column.
    pub out_of_bounds: Vec<String>,
}

pub fn inspect(json: &str) -> Result<InspectReport> {
    let layout = LayoutCodec::decode(json).context("Failed to decode layout document")?;
    let items: Vec<&GridItem> = layout.items().collect();

    let mut overlaps = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if a.overlaps(b) {
                overlaps.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    let out_of_bounds = items
        .iter()
        .filter(|item| item.right() > layout.columns())
        .map(|item| item.id.clone())
        .collect();

    Ok(InspectReport {
        layout,
        overlaps,
        out_of_bounds,
    })
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = &self.layout;
        writeln!(f, "revision:    {}", l.revision())?;
        writeln!(f, "grid:        {} columns, {}px rows", l.columns(), l.row_height())?;
        writeln!(f, "compaction:  {} ({})", l.compact(), l.compact_type())?;
        writeln!(f, "items:       {} (bottom row {})", l.len(), l.bottom())?;
        for item in l.items() {
            let mut flags = Vec::new();
            if item.is_static {
                flags.push("static");
            }
            if !item.is_draggable {
                flags.push("fixed");
            }
            if !item.is_resizable {
                flags.push("no-resize");
            }
            if flags.is_empty() {
                writeln!(f, "  {item}")?;
            } else {
                writeln!(f, "  {item} [{}]", flags.join(", "))?;
            }
        }
        for (a, b) in &self.overlaps {
            writeln!(f, "warning: {a} overlaps {b}")?;
        }
        for id in &self.out_of_bounds {
            writeln!(f, "warning: {id} extends past column {}", l.columns())?;
        }
        Ok(())
    }
}

// ── place ────────────────────────────────────────────────────────

/// First-fit position for a new `w`x`h` item in the given layout.
pub fn place(json: &str, id: &str, w: u32, h: u32, config: &PlacementConfig) -> Result<GridItem> {
    anyhow::ensure!(!id.is_empty(), "item id must not be empty");
    anyhow::ensure!(w >= 1 && h >= 1, "item size must be at least 1x1, got {w}x{h}");
    let layout = LayoutCodec::decode(json).context("Failed to decode layout document")?;
    Ok(layout.find_free_position_with(id, w, h, config))
}

/// Wire form of an item, as the client would receive it.
pub fn item_json(item: &GridItem) -> Result<String> {
    Ok(serde_json::to_string(&WireItem::from(item))?)
}

// ── replay ───────────────────────────────────────────────────────

/// Surface that only logs writes.
#[derive(Debug, Default)]
pub struct LoggingSurface {
    pub writes: usize,
}

impl ClientSurface for LoggingSurface {
    fn write_layout(&mut self, properties: &LayoutProperties) -> Result<(), SurfaceError> {
        self.writes += 1;
        debug!(
            "Push revision {}: {} bytes of layout data",
            properties.revision,
            properties.layout_data.len()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Push the initial layout before replaying, as a live grid would.
    pub initial_push: bool,
    /// Abort on the first undecodable event instead of skipping it.
    pub strict: bool,
}

/// Tally of a replayed event log.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub accepted: usize,
    pub intermediate: usize,
    pub echoes: usize,
    pub stale: usize,
    pub rejected: usize,
    pub layout: LayoutModel,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "accepted {} ({} intermediate), discarded {} stale and {} echo, rejected {}",
            self.accepted, self.intermediate, self.stale, self.echoes, self.rejected
        )?;
        write!(f, "final revision {} with {} items", self.layout.revision(), self.layout.len())
    }
}

/// Feeds a JSON-lines log of client events through a sync controller.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn replay(
    layout_json: &str,
    events: &str,
    sync: SyncConfig,
    options: ReplayOptions,
) -> Result<ReplayReport> {
    let layout = LayoutCodec::decode(layout_json).context("Failed to decode layout document")?;
    let mut controller = SyncController::with_config(layout, LoggingSurface::default(), sync);
    if options.initial_push {
        controller.push_to_client()?;
    }

    let mut report = ReplayReport {
        accepted: 0,
        intermediate: 0,
        echoes: 0,
        stale: 0,
        rejected: 0,
        layout: LayoutModel::new(),
    };

    for (index, line) in events.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let outcome = ClientEvent::from_json(line)
            .and_then(|event| {
                let intermediate = event.is_dragging || event.is_resizing;
                controller
                    .handle_client_event(&event)
                    .map(|delivery| (delivery, intermediate))
            });
        match outcome {
            Ok((Delivery::Accepted { .. }, intermediate)) => {
                report.accepted += 1;
                if intermediate {
                    report.intermediate += 1;
                }
            }
            Ok((Delivery::Discarded(DiscardReason::Echo), _)) => report.echoes += 1,
            Ok((Delivery::Discarded(DiscardReason::Stale { .. }), _)) => report.stale += 1,
            Err(e) if options.strict => {
                return Err(e).with_context(|| format!("Event on line {} failed", index + 1));
            }
            Err(e) => {
                warn!("Skipping event on line {}: {}", index + 1, e);
                report.rejected += 1;
            }
        }
    }

    report.layout = controller.into_model();
    Ok(report)
}
