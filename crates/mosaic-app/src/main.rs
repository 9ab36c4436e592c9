mod app_state;
mod cli;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use mosaic_common::MosaicError;
use mosaic_config::MosaicConfig;

/// Used when neither `--log-level` nor the config file says otherwise.
const DEFAULT_LOG_DIRECTIVE: &str = "mosaic=info";

fn load_config(path: Option<&str>) -> mosaic_common::Result<MosaicConfig> {
    let config = match path {
        Some(path) => mosaic_config::load_config_from(Path::new(path))?,
        None => mosaic_config::load_config()?,
    };
    Ok(config)
}

fn run(config: MosaicConfig, urls: Vec<String>) -> mosaic_common::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| MosaicError::Window(e.to_string()))?;
    let mut app = app_state::MosaicApp::new(config, urls);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| MosaicError::Window(e.to_string()))
}

fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("Ignoring log directive {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so `[logging] level` can apply;
    // a load failure is reported once the subscriber is up.
    let loaded = load_config(args.config.as_deref());

    let directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("Mosaic v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MosaicConfig::default()
    });

    if args.print_shim {
        return match mosaic_fullscreen::render_shim_script(&config.fullscreen.shim_options()) {
            Ok(script) => {
                println!("{script}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to render fullscreen shim: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if let Err(e) = run(config, args.urls) {
        tracing::error!("Mosaic stopped: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_config_is_reported() {
        let err = load_config(Some("/nonexistent/mosaic/config.toml")).unwrap_err();
        assert!(matches!(
            err,
            MosaicError::Config(mosaic_common::ConfigError::FileNotFound(_))
        ));
        assert!(err.to_string().contains("/nonexistent/mosaic/config.toml"));
    }

    #[test]
    fn default_directive_parses() {
        assert!(DEFAULT_LOG_DIRECTIVE.parse::<Directive>().is_ok());
    }
}
