use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};

use softrast::config::Config;
use softrast::scene::{render_stage, Stage};
use softrast::window::{Advance, Window};
use softrast::PixelBuffer;

fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    info!(
        "{}x{} display, fill strategy {}",
        config.display.width, config.display.height, config.demo.fill
    );

    if let Some(dir) = &config.demo.snapshot_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create snapshot directory {dir:?}"))?;
    }

    let mut window = if config.display.headless {
        None
    } else {
        let window = Window::new(
            &config.display.title,
            config.display.width,
            config.display.height,
        )
        .map_err(|e| {
            error!("failed to open window: {e}");
            anyhow!(e)
        })?;
        Some(window)
    };

    let projector = config.projector();
    let mut buffer = PixelBuffer::new(config.display.width, config.display.height);

    for (n, stage) in Stage::ALL.into_iter().enumerate() {
        let start = Instant::now();
        let result = render_stage(stage, &mut buffer, &projector, config.demo.fill);
        let elapsed = start.elapsed();

        match result {
            Ok(()) => info!("{stage}: {} us", elapsed.as_micros()),
            Err(e) => warn!("{stage}: skipped, {e}"),
        }

        if let Some(dir) = &config.demo.snapshot_dir {
            save_snapshot(&buffer, dir, n, stage)?;
        }

        match window.as_mut() {
            Some(window) => {
                window.present(&mut buffer).map_err(|e| anyhow!(e))?;
                if window.wait_for_advance() == Advance::Quit {
                    info!("quit requested");
                    return Ok(());
                }
            }
            None => buffer.reset(),
        }
    }

    Ok(())
}

fn save_snapshot(buffer: &PixelBuffer, dir: &Path, n: usize, stage: Stage) -> Result<()> {
    let name = stage.to_string().to_lowercase().replace(|c: char| !c.is_alphanumeric(), "_");
    let path = dir.join(format!("{n:02}_{name}.png"));
    buffer
        .save_png(&path)
        .with_context(|| format!("failed to save snapshot {path:?}"))?;
    info!("saved {}", path.display());
    Ok(())
}
