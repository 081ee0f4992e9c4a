use std::{env, path::PathBuf};

use anyhow::Context;

use engine::app::{AppConfig, run_app};
use viewer::{
    SAMPLE_REPLAY,
    compositor::BoardCompositor,
    geometry::GridGeometry,
    logging,
    pacer::FramePacer,
    replay::ReplayModel,
    settings::{SettingsStore, ViewerSettings},
    viewer::Viewer,
};

fn load_replay(arg: Option<PathBuf>, settings: &ViewerSettings) -> anyhow::Result<ReplayModel> {
    match arg.or_else(|| settings.replay_path.clone()) {
        Some(path) => ReplayModel::from_path(&path)
            .with_context(|| format!("loading replay {}", path.display())),
        None => {
            tracing::info!("no replay given; playing the bundled sample");
            ReplayModel::from_json(SAMPLE_REPLAY).context("decoding bundled sample replay")
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let store = SettingsStore::from_env();
    let settings = store.load().with_env_overrides();
    tracing::info!(
        path = %store.path().display(),
        cell_size = settings.cell_size,
        tick_ms = settings.tick_ms,
        "settings loaded"
    );

    let model = load_replay(env::args_os().nth(1).map(PathBuf::from), &settings)?;

    let geometry = GridGeometry::new(settings.cell_size);
    let config = AppConfig {
        title: "blockview".to_string(),
        buffer_size: geometry.window_size(),
        vsync: settings.vsync,
    };
    let compositor = BoardCompositor::new(geometry, settings.theme());
    let viewer = Viewer::new(model, FramePacer::new(settings.tick_interval()), compositor);

    run_app(config, viewer).map_err(|e| anyhow::anyhow!("running viewer window: {e}"))?;
    Ok(())
}
