mod app;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;


use config::{default_webview_data_dir, load_config, Config};

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}; using default configuration");
            Config::default()
        }
    };

    if let Err(err) = dioxus::logger::init(config.logging.tracing_level()) {
        eprintln!("failed to initialise logger: {err}");
    }

    let mut desktop_cfg = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title(config.window.title.clone()),
    );
    match default_webview_data_dir() {
        Ok(webview_data_dir) => desktop_cfg = desktop_cfg.with_data_directory(webview_data_dir),
        Err(err) => tracing::warn!("{err:#}; using default webview data directory"),
    }

    tracing::info!(dataset = %config.dataset.path.display(), "starting popis");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(config)
        .launch(app::App);
}
