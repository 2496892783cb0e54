//! Example: Render a few viewer frames without a window.
//!
//! Drives the frame loop against an offscreen target, scripting a couple of
//! key presses, and writes each frame as a PNG plus a JSON manifest of the
//! parameters that produced it.
//!
//! Run with:
//!     cargo run --example render_frames

use std::fs;
use std::path::Path;

use serde::Serialize;
use wavescope::gpu::{save_png, HeadlessPresenter};
use wavescope::{FrameLoop, Key, LoopEvent, ViewerConfig, WaveParameters};

#[derive(Serialize)]
struct FrameRecord {
    index: u64,
    file: String,
    params: WaveParameters,
}

#[derive(Serialize)]
struct Manifest {
    config: ViewerConfig,
    adapter: String,
    frames: Vec<FrameRecord>,
}

/// Keys pressed before the given frame.
fn script(frame: u64) -> Vec<LoopEvent> {
    match frame {
        10 => vec![LoopEvent::KeyPress(Key::Up); 10],
        20 => vec![LoopEvent::KeyPress(Key::Left); 15],
        _ => Vec::new(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::default();
    let output_dir = Path::new("wavescope_frames");
    fs::create_dir_all(output_dir)?;

    let mut presenter = HeadlessPresenter::new(config.width, config.height).await?;
    let adapter = presenter.adapter_info().name;
    println!("Rendering on {}", adapter);

    let mut frame_loop = FrameLoop::new(config.clone());
    let mut records = Vec::new();

    for index in 0..30 {
        frame_loop.tick(script(index), &mut presenter)?;

        let file = format!("frame_{:03}.png", index);
        let pixels = presenter.read_pixels()?;
        save_png(output_dir.join(&file), config.width, config.height, pixels)?;

        records.push(FrameRecord {
            index,
            file,
            params: *frame_loop.params(),
        });
    }

    let manifest = Manifest {
        config,
        adapter,
        frames: records,
    };
    fs::write(
        output_dir.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    println!("Wrote {} frames to {}", manifest.frames.len(), output_dir.display());
    Ok(())
}
