// Demo front end for the lip-tint core.
// Decodes an image, replays landmarks from a JSON fixture in place of a live
// detector, recolors the configured regions and writes the result.
//
//   lip-tint face.jpg face_landmarks.json -o out.jpg
//   RUST_LOG=debug lip-tint face.jpg face_landmarks.json -o out.png --config style.json

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::info;

use lip_tint::{FramePipeline, PipelineConfig, RegionIndexRegistry, StaticDetector};

#[derive(Parser, Debug)]
#[command(name = "lip-tint")]
#[command(version, about = "Recolor facial regions from precomputed landmarks", long_about = None)]
struct Args {
    /// Input image
    image: PathBuf,

    /// JSON array of faces with normalized landmark points
    landmarks: PathBuf,

    /// Output image; format follows the extension
    #[arg(short, long)]
    output: PathBuf,

    /// Pipeline config (JSON); defaults to red lips
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => PipelineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PipelineConfig::default(),
    };

    // Startup: a broken topology table aborts here, before any frame is touched.
    let registry = Arc::new(RegionIndexRegistry::new()?);
    let pipeline = FramePipeline::new(registry, config);

    let detector = StaticDetector::from_json(&std::fs::read_to_string(&args.landmarks)?)?;
    let frame = image::open(&args.image)?.to_rgb8();
    info!("loaded {:?} ({}x{})", args.image, frame.width(), frame.height());

    let started = Instant::now();
    let out = pipeline.process_frame(&frame, &detector)?;
    info!("processed in {:.1} ms", started.elapsed().as_secs_f32() * 1000.0);

    out.save(&args.output)?;
    info!("wrote {:?}", args.output);
    Ok(())
}
