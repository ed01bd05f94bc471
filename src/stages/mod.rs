pub mod stage0_extract;
pub mod stage1_merge;
pub mod stage2_label;
pub mod stage3_render;

pub use stage0_extract::*;
pub use stage1_merge::*;
pub use stage2_label::*;
pub use stage3_render::*;

use tracing::debug;

use crate::heuristics::EotConfig;
use crate::models::{DeepgramResponse, TranscriptDocument};

/// Configuration for one pipeline invocation
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub eot: EotConfig,
    pub render: RenderConfig,
}

/// Run the full pipeline on one transcription result.
///
/// Strictly linear: extract, merge, label, render. The call is pure -
/// all working state (including the speaker roster) is local and
/// discarded on return, so concurrent invocations over independent
/// responses need no coordination.
pub fn run_pipeline(response: &DeepgramResponse, config: &PipelineConfig) -> TranscriptDocument {
    let extraction = extract_segments(response);
    debug!(
        "extracted {} segments from {}",
        extraction.segments.len(),
        extraction.source.as_str()
    );

    let segments = merge_segments(extraction.segments);
    let labeled = label_segments(&segments, &config.eot);
    debug!(
        "resolved {} speakers, forced {} boundaries",
        labeled.speaker_count, labeled.forced_boundaries
    );

    render_document(&labeled.segments, &config.render)
}
