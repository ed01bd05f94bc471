use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use turnwise::{
    extract_segments, label_segments, merge_segments, parse_transcription_file, run_pipeline,
    write_document, PipelineConfig, RenderConfig, TurnScript,
};

#[derive(Parser)]
#[command(name = "turnwise")]
#[command(author, version, about = "Transcript turn segmentation and end-of-turn labeling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment a transcription result into speaker turns
    Segment {
        /// Input transcription result (Deepgram JSON format)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the turn document (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Attach HH:MM:SS timestamps to each turn
        #[arg(long)]
        timestamps: bool,

        /// Output file for human-readable transcript (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a transcription result without writing anything
    Analyze {
        /// Input transcription result (Deepgram JSON format)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment {
            input,
            output,
            timestamps,
            human_readable,
            verbose,
        } => {
            setup_logging(verbose);
            segment_transcription(input, output, timestamps, human_readable)
        }
        Commands::Analyze { input, verbose } => {
            setup_logging(verbose);
            analyze_transcription(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn segment_transcription(
    input: PathBuf,
    output: PathBuf,
    timestamps: bool,
    human_readable: Option<PathBuf>,
) -> Result<()> {
    info!("Loading transcription result from {:?}", input);
    let response =
        parse_transcription_file(&input).context("Failed to parse input transcription")?;

    let config = PipelineConfig {
        render: RenderConfig {
            include_timestamps: timestamps,
        },
        ..Default::default()
    };

    let document = run_pipeline(&response, &config);
    info!("Segmented into {} turns", document.len());

    write_document(&document, &output)?;
    info!("Output written to {:?}", output);

    if let Some(human_path) = human_readable {
        TurnScript::new(&document).write_file(&human_path)?;
        info!("Human-readable output written to {:?}", human_path);
    }

    Ok(())
}

fn analyze_transcription(input: PathBuf) -> Result<()> {
    info!("Analyzing transcription result from {:?}", input);
    let response =
        parse_transcription_file(&input).context("Failed to parse input transcription")?;

    let extraction = extract_segments(&response);
    let segments = merge_segments(extraction.segments);
    let labeled = label_segments(&segments, &Default::default());

    println!("Transcription Analysis");
    println!("======================");
    println!("Segment source: {}", extraction.source.as_str());
    println!("Total segments: {}", labeled.segments.len());
    println!("Labeled speakers: {}", labeled.speaker_count);
    println!("Forced boundaries: {}", labeled.forced_boundaries);

    if let (Some(first), Some(last)) = (segments.first(), segments.last()) {
        println!("Time span: {:.1}s - {:.1}s", first.start, last.start);
    }
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    let mut roles: Vec<&str> = labeled.segments.iter().map(|s| s.role.as_str()).collect();
    roles.sort();
    roles.dedup();

    for role in roles {
        let segment_count = labeled.segments.iter().filter(|s| s.role == role).count();
        let complete_count = labeled
            .segments
            .iter()
            .filter(|s| s.role == role && s.end_of_turn)
            .count();
        println!(
            "{}: {} segments, {} turn-final",
            role, segment_count, complete_count
        );
    }

    Ok(())
}
