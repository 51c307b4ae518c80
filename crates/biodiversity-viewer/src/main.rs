//! Entry point for the biodiversity viewer.
//!
//! This Dioxus desktop application browses the campus biodiversity catalogue
//! from a PostgREST store, or from bundled sample data with `--demo`.

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use biodiversity_catalog::PostgrestStore;
use biodiversity_map::MapLayer;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use biodiversity_viewer::components::App;
use biodiversity_viewer::config::{MAPTILER_KEY_ENV, ViewerConfig};
use biodiversity_viewer::demo::demo_store;
use biodiversity_viewer::loader::{self, StoreHandle, ViewerContext};
use biodiversity_viewer::state::AppState;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Map widget embedded at compile time.
const MAP_JS: &str = include_str!("../assets/map.js");

const LEAFLET_VERSION: &str = "1.9.4";

/// Everything the root component needs, set once before launch.
struct Launch {
    context: ViewerContext,
    layer: MapLayer,
    start: String,
    width: f64,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "biodiversity-viewer")]
#[command(about = "Browse the USTP campus biodiversity catalogue")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog REST endpoint (overrides config and environment)
    #[arg(long)]
    store_url: Option<String>,

    /// Catalog anonymous key (overrides config and environment)
    #[arg(long)]
    store_key: Option<String>,

    /// MapTiler API key for base layer tiles
    #[arg(long, env = MAPTILER_KEY_ENV)]
    maptiler_key: Option<String>,

    /// Base layer id, e.g. satellite, streets or topo
    #[arg(long)]
    layer: Option<String>,

    /// Page to open at startup, e.g. "/map?campusId=1"
    #[arg(long)]
    start: Option<String>,

    /// Use bundled sample data instead of the hosted catalog
    #[arg(long)]
    demo: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "biodiversity_viewer=info,biodiversity_catalog=info")]
    log_level: String,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Starting Biodiversity Viewer");

    let mut config = ViewerConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_env_overrides();
    if let Some(url) = args.store_url {
        config.store.url = url;
    }
    if let Some(key) = args.store_key {
        config.store.anon_key = key;
    }
    if let Some(key) = args.maptiler_key {
        config.maptiler_key = key;
    }
    if let Some(layer) = args.layer {
        config.layer = MapLayer::from_id_or_default(&layer);
    }
    if let Some(start) = args.start {
        config.start = Some(start);
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    let store = if args.demo {
        tracing::info!("Using bundled sample catalog");
        StoreHandle::new(demo_store().context("failed to build sample catalog")?)
    } else {
        config.validate().context("invalid configuration")?;
        tracing::info!(url = %config.store.url, "Connecting to catalog");
        StoreHandle::new(PostgrestStore::new(config.store.clone())?)
    };

    let window = config.window;
    LAUNCH
        .set(Launch {
            context: ViewerContext {
                store,
                maptiler_key: config.maptiler_key,
            },
            layer: config.layer,
            start: config.start.unwrap_or_else(|| "/".to_string()),
            width: window.width,
        })
        .map_err(|_| anyhow::anyhow!("viewer already launched"))?;

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("USTP Biodiversity")
                        .with_inner_size(LogicalSize::new(window.width, window.height))
                        .with_maximized(window.maximized),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
                    <script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
                    <style>{styles}</style>
                    <script>{script}</script>
                    "#,
                    version = LEAFLET_VERSION,
                    styles = STYLES_CSS,
                    script = MAP_JS,
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component: provides the shared context and kicks off startup loads.
#[component]
fn RootApp() -> Element {
    let Some(launch) = LAUNCH.get() else {
        return rsx! { div { "Viewer context missing" } };
    };

    use_context_provider(|| launch.context.clone());
    let state = use_signal(|| AppState::new(launch.layer, launch.width));

    use_hook(|| {
        let store = launch.context.store.clone();
        loader::open(store.clone(), state, launch.start.clone());
        spawn(loader::load_startup(store, state));
    });

    use_drop(|| tracing::info!("Shutting down Biodiversity Viewer"));

    rsx! { App { state } }
}
