use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use lowpoly_palette::api;
use lowpoly_palette::assets::AssetLoader;
use lowpoly_palette::models::{AppConfig, SelectionSnapshot, Viewport};
use lowpoly_palette::rendering::{PaletteRenderer, EXPORT_FILENAME};
use lowpoly_palette::server;
use swatch_engine::{Catalog, ColorblindMode, LayoutEngine, PaletteState};

#[derive(Parser)]
#[command(name = "lowpoly-palette")]
#[command(about = "Procedural material palette textures for low-poly models")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Palette state overrides shared by `render` and `hit`
#[derive(Args, Debug, Default)]
struct SelectionArgs {
    /// Theme id (see `list themes`)
    #[arg(short, long)]
    theme: Option<String>,

    /// Extra hue shift in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    warmth: Option<i32>,

    /// Colorblind simulation: none, protanopia, deuteranopia, tritanopia, achromatopsia
    #[arg(short, long)]
    colorblind: Option<String>,

    /// Comma-separated category ids, or "all"
    #[arg(short, long)]
    select: Option<String>,

    /// Leave unselected categories off the texture
    #[arg(long)]
    omit_unselected: bool,
}

impl SelectionArgs {
    fn params(&self) -> api::SelectionParams<'_> {
        api::SelectionParams {
            theme: self.theme.as_deref(),
            warmth: self.warmth,
            colorblind: self.colorblind.as_deref(),
            select: self.select.as_deref(),
            omit_unselected: self.omit_unselected.then_some(true),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ListKind {
    Categories,
    Themes,
    Colorblind,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render the palette texture to a PNG file
    Render {
        /// Output PNG file path
        #[arg(short, long, default_value = EXPORT_FILENAME)]
        output: PathBuf,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Draw the debug grid
        #[arg(long)]
        grid: bool,

        /// Skip category labels
        #[arg(long)]
        no_labels: bool,

        /// Write the resulting selection back to the selection file
        #[arg(long)]
        save: bool,
    },
    /// Print the category under a pointer position as JSON
    Hit {
        /// Pointer x in client pixels
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Pointer y in client pixels
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Display zoom, clamped to 0.5..8
        #[arg(short, long, default_value_t = 1.0)]
        zoom: f64,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// List catalog entries
    List {
        #[arg(value_enum, default_value = "categories")]
        kind: ListKind,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Low-poly Palette API",
        description = "Procedural material palette textures for low-poly models",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_palette,
        api::handle_hit,
        api::handle_categories,
        api::handle_category,
        api::handle_themes,
        api::handle_colorblind_modes,
    ),
    components(schemas(
        api::CategoryInfo,
        api::ThemeInfo,
        api::OverrideInfo,
        api::ColorblindModeInfo,
        api::HitResponse,
        lowpoly_palette::models::DisplayHighlight,
        SelectionSnapshot,
    )),
    tags(
        (name = "Palette", description = "Texture rendering and pointer lookup"),
        (name = "Catalog", description = "Categories, themes and colorblind modes")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            output,
            selection,
            grid,
            no_labels,
            save,
        }) => run_render_command(&output, &selection, grid, no_labels, save),
        Some(Commands::Hit {
            x,
            y,
            zoom,
            selection,
        }) => run_hit_command(x, y, zoom, &selection),
        Some(Commands::List { kind }) => run_list_command(kind),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lowpoly_palette=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn selections_file_from_env() -> Option<PathBuf> {
    std::env::var("SELECTIONS_FILE").ok().map(PathBuf::from)
}

/// Config plus the palette state a one-shot command starts from
fn load_cli_state() -> (AssetLoader, AppConfig, PaletteState, Option<PathBuf>) {
    let asset_loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&asset_loader);

    let selections_file = selections_file_from_env().or_else(|| config.selections_file.clone());
    let mut state = config.base_state();
    if let Some(ref path) = selections_file {
        SelectionSnapshot::load_or_default(path).apply_to(&mut state);
    }

    (asset_loader, config, state, selections_file)
}

/// Render the palette directly to a PNG file (no server needed)
fn run_render_command(
    output: &Path,
    selection: &SelectionArgs,
    grid: bool,
    no_labels: bool,
    save: bool,
) -> anyhow::Result<()> {
    init_cli_logging();

    let (asset_loader, config, base_state, selections_file) = load_cli_state();
    let state = selection.params().resolve(&base_state);

    let mut options = config.render;
    options.grid |= grid;
    options.labels &= !no_labels;

    let renderer = PaletteRenderer::with_fonts(asset_loader.get_fonts());
    let layout = LayoutEngine::new(config.layout.params());
    let png_bytes = renderer
        .render_png(&state, &layout, &options)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    std::fs::write(output, &png_bytes)?;
    println!(
        "Rendered {} ({} bytes, {} of {} categories selected)",
        output.display(),
        png_bytes.len(),
        state.selected_count(),
        state.catalog().categories().len()
    );

    if save {
        let Some(path) = selections_file else {
            anyhow::bail!("--save needs SELECTIONS_FILE or selections_file in config.yaml");
        };
        SelectionSnapshot::from_state(&state).save(&path)?;
        println!("Saved selection to {}", path.display());
    }

    Ok(())
}

fn run_hit_command(x: f64, y: f64, zoom: f64, selection: &SelectionArgs) -> anyhow::Result<()> {
    init_cli_logging();

    let (_, config, base_state, _) = load_cli_state();
    let state = selection.params().resolve(&base_state);
    let layout = LayoutEngine::new(config.layout.params());

    let result = api::hit::hit(&layout, &state, Viewport::new(zoom), x, y)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn run_list_command(kind: ListKind) -> anyhow::Result<()> {
    let catalog = Catalog::BUILTIN;
    match kind {
        ListKind::Categories => {
            for c in catalog.categories() {
                println!(
                    "  {:<16} {:>3}x{:<3} {}  {}",
                    c.id,
                    c.tiles.width,
                    c.tiles.height,
                    c.swatch_color().to_hex(),
                    c.description
                );
            }
        }
        ListKind::Themes => {
            for t in catalog.themes() {
                println!(
                    "  {:<10} {:<10} hue {:+}  sat x{}  light {:+}  ({} overrides)",
                    t.id,
                    t.name,
                    t.hue_shift,
                    t.saturation_multiplier,
                    t.lightness_shift,
                    t.category_overrides.len()
                );
            }
        }
        ListKind::Colorblind => {
            for mode in ColorblindMode::ALL {
                println!("  {:<14} {}", mode.id(), mode.label());
            }
        }
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let fonts_dir = std::env::var("FONTS_DIR").ok();
    let selections_file = std::env::var("SELECTIONS_FILE").ok();

    // Header
    println!("Low-poly Palette v{VERSION}");
    println!("Procedural material palette textures for low-poly models\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR       = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE     = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FONTS_DIR       = {}",
        fonts_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  SELECTIONS_FILE = {}",
        selections_file.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    let loader = AssetLoader::from_env();
    println!("\nAsset Sources:");
    println!("  Config:  {}", loader.config_source());

    let fonts_count = loader.get_fonts().len();
    match fonts_dir {
        Some(ref path) if Path::new(path).exists() => {
            println!("  Fonts:   {path} ({fonts_count} + system fonts)")
        }
        _ => println!("  Fonts:   system fonts"),
    }

    // Catalog section
    let catalog = Catalog::BUILTIN;
    println!("\nCatalog:");
    println!("  Categories: {}", catalog.categories().len());
    println!("  Themes:     {}", catalog.themes().len());

    // Commands section
    println!("\nCommands:");
    println!("  lowpoly-palette serve    Start the HTTP server");
    println!("  lowpoly-palette render   Render the palette to a PNG file");
    println!("  lowpoly-palette hit      Look up the category under a point");
    println!("  lowpoly-palette list     List categories, themes or colorblind modes");
    println!("\nRun 'lowpoly-palette --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lowpoly_palette=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    // Log asset sources
    let fonts_source = asset_loader
        .fonts_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "system".to_string());
    tracing::info!(
        fonts = %fonts_source,
        config = %asset_loader.config_source(),
        "Asset sources configured"
    );

    // Seed if the configured config path is missing
    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config file");
    }

    // Create application state using shared server module
    let state = server::create_app_state(asset_loader, selections_file_from_env())?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Palette server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
