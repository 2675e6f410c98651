#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tourails_core::signup::DEFAULT_SIGNUP_DELAY;
use tourails_core::Theme;
use tracing_subscriber::EnvFilter;

/// Launch settings, set once from the command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Settings the UI reads at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Theme applied on first render
    pub initial_theme: Theme,
    /// Simulated account-creation round trip
    pub signup_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_theme: Theme::Light,
            signup_delay: DEFAULT_SIGNUP_DELAY,
        }
    }
}

/// Get the launch settings (defaults if `main` never stored any)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Tourails - travel social desktop app
#[derive(Parser, Debug)]
#[command(name = "tourails-desktop")]
#[command(about = "Tourails - explore destinations, meet travelers, share the journey")]
struct Args {
    /// Initial color theme (light or dark)
    #[arg(long, default_value = "light")]
    theme: Theme,

    /// Milliseconds the signup form waits before moving on to onboarding
    #[arg(long, default_value_t = DEFAULT_SIGNUP_DELAY.as_millis() as u64)]
    signup_delay_ms: u64,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter directive, e.g. "tourails_core=debug" (falls back to RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            initial_theme: self.theme,
            signup_delay: Duration::from_millis(self.signup_delay_ms),
        }
    }
}

/// `--log` wins over RUST_LOG, and "info" is the fallback for both
fn log_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log.as_deref()))
        .init();

    let config = args.app_config();
    tracing::info!(
        theme = %config.initial_theme,
        signup_delay_ms = args.signup_delay_ms,
        "Starting Tourails"
    );
    let _ = CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tourails")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_launch() {
        let args = Args::try_parse_from(["tourails-desktop"]).unwrap();
        assert_eq!(args.theme, Theme::Light);
        assert_eq!(args.signup_delay_ms, 1500);
        assert_eq!(args.app_config(), AppConfig::default());
        assert!(args.log.is_none());
    }

    #[test]
    fn parses_theme_and_delay() {
        let args = Args::try_parse_from([
            "tourails-desktop",
            "--theme",
            "dark",
            "--signup-delay-ms",
            "0",
        ])
        .unwrap();
        let config = args.app_config();
        assert_eq!(config.initial_theme, Theme::Dark);
        assert_eq!(config.signup_delay, Duration::ZERO);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Args::try_parse_from(["tourails-desktop", "--theme", "sepia"]).is_err());
    }
}
