use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixel_outline::models::{AppConfig, CameraKind, FrameContext};
use pixel_outline::rendering::{flat_depth, load_color_png, load_depth_png, save_png};
use pixel_outline::services::{EffectService, FrameOutcome};
use pixel_stylize::{DitherPattern, Rgba};

#[derive(Parser)]
#[command(name = "pixel-outline")]
#[command(about = "Pixel-art stylization with depth-based outlines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Stylize a PNG frame
    Render {
        /// Input color PNG
        #[arg(short, long)]
        input: PathBuf,

        /// Depth PNG (grayscale, 0 = near, 1 = far); flat depth when omitted
        #[arg(short, long)]
        depth: Option<PathBuf>,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file (defaults to $CONFIG_FILE, then the embedded config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Profile name from the configuration
        #[arg(short, long)]
        profile: Option<String>,

        /// Camera that produced the frame
        #[arg(long, value_enum, default_value_t = CameraKind::Game)]
        camera: CameraKind,

        /// Treat the frame as rendering straight to the back buffer
        #[arg(long)]
        backbuffer: bool,

        /// Override the profile's pixel size
        #[arg(long)]
        pixel_size: Option<u32>,

        /// Override the profile's color count
        #[arg(long)]
        color_count: Option<u32>,

        /// Disable dithering
        #[arg(long)]
        no_dither: bool,

        /// Override the dither pattern ("bayer" or "blue-noise")
        #[arg(long)]
        dither_pattern: Option<DitherPattern>,

        /// Disable outlines
        #[arg(long)]
        no_outline: bool,

        /// Outline color as hex (e.g. "#1A1A2E" or "#00000080")
        #[arg(long)]
        outline_color: Option<Rgba>,

        /// Re-compress the output with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Write the embedded default config.yaml to disk
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// Destination (defaults to $CONFIG_FILE, then ./config.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List embedded assets without writing
        #[arg(long)]
        list: bool,
    },
}

/// Overrides applied on top of the selected profile
struct RenderOverrides {
    pixel_size: Option<u32>,
    color_count: Option<u32>,
    no_dither: bool,
    dither_pattern: Option<DitherPattern>,
    no_outline: bool,
    outline_color: Option<Rgba>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixel_outline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            depth,
            output,
            config,
            profile,
            camera,
            backbuffer,
            pixel_size,
            color_count,
            no_dither,
            dither_pattern,
            no_outline,
            outline_color,
            optimize,
        }) => {
            let overrides = RenderOverrides {
                pixel_size,
                color_count,
                no_dither,
                dither_pattern,
                no_outline,
                outline_color,
            };
            let ctx = FrameContext::new(camera).with_backbuffer_target(backbuffer);
            run_render_command(
                &input,
                depth.as_deref(),
                &output,
                config.as_deref(),
                profile.as_deref(),
                ctx,
                overrides,
                optimize,
            )
        }
        Some(Commands::Init {
            force,
            output,
            list,
        }) => run_init_command(force, output, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn config_file_env() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// An explicit `--config` must load; `$CONFIG_FILE` falls back to defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::load_or_default(config_file_env().as_deref())),
    }
}

/// Stylize one PNG frame and write the result
#[allow(clippy::too_many_arguments)]
fn run_render_command(
    input: &Path,
    depth: Option<&Path>,
    output: &Path,
    config: Option<&Path>,
    profile: Option<&str>,
    ctx: FrameContext,
    overrides: RenderOverrides,
    optimize: bool,
) -> anyhow::Result<()> {
    let app_config = load_config(config)?;
    let (profile_name, options) = app_config.resolve_profile(profile)?;

    let mut options = options.clone();
    if let Some(size) = overrides.pixel_size {
        options = options.with_pixel_size(size);
    }
    if let Some(count) = overrides.color_count {
        options = options.with_color_count(count);
    }
    if overrides.no_dither {
        options = options.with_dither(false);
    }
    if let Some(pattern) = overrides.dither_pattern {
        options = options.with_dither_pattern(pattern);
    }
    if overrides.no_outline {
        options = options.with_outline(false);
    }
    if let Some(color) = overrides.outline_color {
        options = options.with_outline_color(color);
    }

    let mut color =
        load_color_png(input).with_context(|| format!("loading {}", input.display()))?;

    let depth = match depth {
        Some(path) => {
            load_depth_png(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => flat_depth(color.width(), color.height())?,
    };

    let mut service = EffectService::new(options);
    let outcome = service.process_frame(&ctx, &mut color, &depth)?;

    let written = save_png(output, &color, optimize)
        .with_context(|| format!("writing {}", output.display()))?;

    match outcome {
        FrameOutcome::Applied => eprintln!(
            "Rendered {}x{} with profile '{}' ({} bytes) to {}",
            color.width(),
            color.height(),
            profile_name,
            written,
            output.display()
        ),
        FrameOutcome::Skipped(reason) => eprintln!(
            "Effect skipped ({reason}); wrote input unchanged to {}",
            output.display()
        ),
    }

    Ok(())
}

fn run_init_command(force: bool, output: Option<PathBuf>, list: bool) -> anyhow::Result<()> {
    use pixel_outline::assets::{self, InitOutcome};

    if list {
        println!("Embedded assets:\n");
        for f in assets::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let path = output
        .or_else(config_file_env)
        .unwrap_or_else(|| PathBuf::from(assets::CONFIG_FILE_NAME));

    match assets::write_default_config(&path, force)? {
        InitOutcome::Written => println!("  + {}", path.display()),
        InitOutcome::Skipped => {
            println!(
                "Skipped existing {} (use --force to overwrite)",
                path.display()
            );
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("pixel-outline v{VERSION}");
    println!("Pixel-art stylization with depth-based outlines\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nConfig:  {config_source}");

    let config = AppConfig::load_or_default(config_file_env().as_deref());
    println!("\nProfiles:");
    for (name, options) in &config.profiles {
        let marker = if *name == config.default_profile {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {name}{marker}: pixel {} / {} colors / dither {} / outline {}",
            options.pixel_size(),
            options.color_count(),
            if options.dither_enabled() {
                options.dither_pattern().as_str()
            } else {
                "off"
            },
            if options.outline_enabled() {
                options.outline_color().to_hex()
            } else {
                "off".to_string()
            },
        );
    }

    println!("\nRun 'pixel-outline render --help' to stylize a frame.");
}
