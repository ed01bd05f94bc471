pub mod heuristics;
pub mod io;
pub mod models;
pub mod stages;

pub use heuristics::{determine_end_of_turn, force_turn_boundaries, EotConfig};
pub use io::{
    parse_transcription_file, parse_transcription_json, write_document, InputError, TurnScript,
};
pub use models::{
    DeepgramResponse, LabeledSegment, RawSegment, SpeakerKey, SpeakerRoster, TranscriptDocument,
    TurnRecord,
};
pub use stages::{
    extract_segments, label_segments, merge_segments, render_document, run_pipeline,
    ExtractionResult, LabelResult, PipelineConfig, RenderConfig, SegmentSource,
};
