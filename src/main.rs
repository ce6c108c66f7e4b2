// Skiff - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Settings store and search engine selection
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use skiff::app;
pub use skiff::core;
pub use skiff::platform;
pub use skiff::ui;
pub use skiff::util;

use clap::Parser;
use std::path::PathBuf;

/// Compile-time-embedded icon PNG bytes.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails.
fn load_icon() -> egui::IconData {
    use image::ImageDecoder;

    match image::codecs::png::PngDecoder::new(std::io::Cursor::new(ICON_PNG)) {
        Ok(decoder) => {
            let (w, h) = decoder.dimensions();
            match image::DynamicImage::from_decoder(decoder) {
                Ok(img) => egui::IconData {
                    rgba: img.into_rgba8().into_raw(),
                    width: w,
                    height: h,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
                    placeholder_icon()
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open icon PNG decoder; using placeholder");
            placeholder_icon()
        }
    }
}

fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// Skiff - a small tabbed web browser.
#[derive(Parser, Debug)]
#[command(name = "Skiff", version, about)]
struct Cli {
    /// Address or search text to open in the first tab.
    url: Option<String>,

    /// Start in private browsing mode.
    #[arg(long = "private")]
    private: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Directory holding config.toml, settings.json and engine data.
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths: CLI override > platform default.
    let paths = match cli.config_dir.as_deref() {
        Some(dir) => platform::config::PlatformPaths::with_config_dir(dir),
        None => platform::config::PlatformPaths::resolve(),
    };

    // config.toml may set the log level, so it is read before logging starts
    // and its warnings are replayed afterwards.
    let (config, config_warnings) = platform::config::load_config(&paths.config_dir);
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        private = cli.private,
        config = %paths.config_dir.display(),
        "Skiff starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let settings = app::settings::SettingsStore::open(&paths.settings_file);
    let search_engine = app::settings::initial_search_engine(&settings, config.search_engine);

    // A URL given on the command line goes through the same URL-or-search
    // rule as the address bar.
    let initial_url = cli.url.as_deref().and_then(|text| {
        match core::address::resolve(text, search_engine) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring start-up address");
                None
            }
        }
    });

    let options = app::browser::BrowserOptions {
        search_engine,
        home_page: config.home_page.clone(),
        private: cli.private,
        initial_url,
    };
    let engine = platform::engine::default_engine(&paths);
    let mut browser = app::browser::Browser::new(engine, settings, options);
    if let Some(first) = config_warnings.first() {
        browser.status_message = format!("config.toml: {first}");
    }

    let state = app::state::AppState::new(config.dark_mode, cli.debug);

    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource), embedded by build.rs via winres.
    //   2. Runtime (eframe viewport), loaded here from the PNG asset.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(browser.window_title())
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ])
            .with_icon(load_icon()),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let config_dir = cli.config_dir.clone();
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(ui::theme::visuals(dark_mode));
            Ok(Box::new(gui::SkiffApp::new(browser, state, config_dir)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Skiff: {e}");
        std::process::exit(1);
    }
}
