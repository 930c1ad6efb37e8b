//! The recognizer pipeline (§4.I): a single entry point that runs grid
//! classification, boundary extraction, shape building, decoration, and
//! text extraction in the order §5 mandates, and assembles the result into
//! a serializable [`Diagram`].

mod metrics;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use metrics::DefaultMetrics;

use diagram_grid::Grid;
use diagram_shapes::{CellGeometry, Shape};
use diagram_text::{FontMetrics, Label};

/// Grid geometry parameters (§6): everything the pipeline needs to convert
/// cell coordinates to pixel coordinates. Preprocessing (tab expansion,
/// border padding) happens before this crate sees the grid; see
/// `diagram_preprocess`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    pub geometry: CellGeometry,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            geometry: CellGeometry::default(),
        }
    }
}

/// The finished recognition result: grid geometry, shapes, and labels.
/// Serializable so an out-of-process rasterizer can consume it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub cell_width: f64,
    pub cell_height: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

#[derive(Debug, Error)]
pub enum DiagramSerdeError {
    #[error("failed to serialize diagram: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to deserialize diagram: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl Diagram {
    /// Serializes to JSON for an out-of-process rasterizer (§3).
    pub fn to_json(&self) -> Result<String, DiagramSerdeError> {
        serde_json::to_string(self).map_err(DiagramSerdeError::Serialize)
    }

    pub fn from_json(text: &str) -> Result<Diagram, DiagramSerdeError> {
        serde_json::from_str(text).map_err(DiagramSerdeError::Deserialize)
    }
}

/// Defined for future-proofing and consistency with this codebase's error
/// conventions (§7): `recognize` itself never returns one, since grid
/// normalization always succeeds by padding to max width.
#[derive(Debug, Error)]
pub enum RecognizeError {
    #[error("grid has no rows")]
    EmptyGrid,
}

/// Runs the full recognition pipeline: boundary extraction (B, D), shape
/// building (E), decoration (F), and text extraction (G), in that order.
/// Infallible: a grid with no recognizable content simply yields an empty
/// diagram.
pub fn recognize(grid: &Grid, config: &RecognizerConfig) -> Diagram {
    recognize_with_metrics(grid, config, &DefaultMetrics)
}

/// As [`recognize`], but with a caller-supplied [`FontMetrics`] implementation
/// instead of the built-in placeholder (real glyph measurement is a
/// rasterizer concern, out of scope for this crate).
pub fn recognize_with_metrics(grid: &Grid, config: &RecognizerConfig, metrics: &dyn FontMetrics) -> Diagram {
    let geo = config.geometry;

    let extracted = diagram_boundary::extract_boundaries(grid);
    tracing::info!(
        closed = extracted.closed.len(),
        open = extracted.open.len(),
        "boundary extraction complete"
    );

    let shapes = diagram_shapes::build_shapes(&extracted.work_grid, &geo, &extracted.closed, &extracted.open);
    tracing::info!(shapes = shapes.len(), "shape building complete");

    // Decoration and text extraction scan the original grid, not the work
    // grid: `prepare_work_grid` absorbs `*` markers and `v`/`V` arrowheads
    // sitting on a line into the line's own characters so the boundary
    // walker sees clean glyphs, which would otherwise hide them from
    // `build_point_markers`/`build_arrowheads`.
    let shapes = diagram_decorate::decorate(grid, &geo, shapes);
    tracing::info!(shapes = shapes.len(), "decoration complete");

    let labels = diagram_text::extract_labels(grid, &geo, &shapes, metrics);
    tracing::info!(labels = labels.len(), "text extraction complete");

    Diagram {
        cell_width: geo.cell_w,
        cell_height: geo.cell_h,
        width_px: grid.width() as f64 * geo.cell_w,
        height_px: grid.height() as f64 * geo.cell_h,
        shapes,
        labels,
    }
}
