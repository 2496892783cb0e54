//! Wavescope viewer.
//!
//! Opens a window showing an animated sine trace. Up/Down change the
//! amplitude bias, Left/Right the frequency bias. Close the window to quit.

use wavescope::app;
use wavescope::config::ViewerConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::default();
    log::info!(
        "Starting {}x{} viewer (amplitude bias {}, frequency bias {})",
        config.width,
        config.height,
        config.initial_amplitude_bias,
        config.initial_frequency_bias
    );

    app::run(config).map_err(|err| {
        let kind = err.kind();
        anyhow::Error::new(err).context(format!("{:?} failure", kind))
    })?;

    Ok(())
}
