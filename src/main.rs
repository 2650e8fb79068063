mod config;
mod svg;

use std::path::{Path, PathBuf};

use balloon_tip::{
    Color, Direction, EdgePosition, Point, Rect, Size, TooltipAdapter, TooltipConfiguration,
    TooltipOverlay, TooltipView,
};
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{ConfigError, SceneConfig};
use crate::svg::ExportError;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

#[derive(Parser)]
#[command(name = "tooltipkit", about = "Balloon tooltip placement tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve arrow placement and balloon geometry for one source
    Resolve {
        /// Screen size as W,H
        #[arg(long, value_parser = parse_size)]
        screen: Size,
        /// Source element as X,Y,W,H
        #[arg(long, value_parser = parse_rect, required_unless_present = "point", conflicts_with = "point")]
        source: Option<Rect>,
        /// Anchor point as X,Y
        #[arg(long, value_parser = parse_point)]
        point: Option<Point>,
        /// Size preset: small, default, large
        #[arg(long, default_value = "default")]
        preset: String,
        /// Place the balloon on top of the source element instead of at its origin
        #[arg(long)]
        overlay: bool,
        /// Fixed arrow direction (disables automatic placement)
        #[arg(long, value_parser = parse_direction)]
        direction: Option<Direction>,
        /// Fixed arrow position (used with --direction)
        #[arg(long, value_parser = parse_position, default_value = "center")]
        position: EdgePosition,
    },
    /// Lay out every tooltip of a scene file and export it as SVG
    Render {
        /// Path to the scene file
        #[arg(long, default_value = "tooltip.toml")]
        config: PathBuf,
        /// Output SVG path
        #[arg(long, default_value = "tooltips.svg")]
        output: PathBuf,
    },
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| format!("'{}': {}", part, e)))
        .collect::<Result<Vec<_>, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f32>| format!("expected {} comma-separated numbers, got {}", N, v.len()))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [width, height] = parse_numbers::<2>(s)?;
    Ok(Size::new(width, height))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_numbers::<2>(s)?;
    Ok(Point::new(x, y))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, width, height] = parse_numbers::<4>(s)?;
    Ok(Rect::new(x, y, width, height))
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_name(s).ok_or_else(|| format!("unknown direction '{}'", s))
}

fn parse_position(s: &str) -> Result<EdgePosition, String> {
    EdgePosition::from_name(s).ok_or_else(|| format!("unknown position '{}'", s))
}

fn cmd_resolve(
    screen: Size,
    source: Option<Rect>,
    point: Option<Point>,
    preset: &str,
    overlay: bool,
    direction: Option<Direction>,
    position: EdgePosition,
) -> Result<(), AppError> {
    let screen_bounds = Rect::from_origin_size(Point::ZERO, screen);
    let mut configuration = TooltipConfiguration::preset(preset)
        .ok_or_else(|| AppError::UnknownPreset(preset.to_string()))?;
    if let Some(direction) = direction {
        configuration = configuration
            .with_auto_configuration(false)
            .with_direction(direction)
            .with_position(position);
    }

    let source_rect = match (source, point) {
        (Some(rect), _) => rect,
        (None, Some(point)) => Rect::unit_at(point),
        // clap guarantees one of the two
        (None, None) => Rect::ZERO,
    };

    let mut adapter: Box<dyn TooltipAdapter> = if overlay {
        Box::new(TooltipOverlay::new(configuration, source_rect).with_hidden(false))
    } else {
        Box::new(TooltipView::new(configuration, source_rect))
    };

    let Some(layout) = adapter.layout(&screen_bounds) else {
        return Ok(());
    };
    let configuration = adapter.configuration();
    let balloon_size = configuration.balloon_size();
    let content_position = configuration.content_position();
    let arrow_offset = configuration.arrow_offset();

    println!("direction:        {}", layout.placement.direction.name());
    println!("position:         {}", layout.placement.position.name());
    println!("balloon size:     {:.1} x {:.1}", balloon_size.width, balloon_size.height);
    println!("content rect:     {:?}", configuration.content_rect());
    println!("content position: ({:.1}, {:.1})", content_position.x, content_position.y);
    println!("corner radius:    {:.1}", layout.card_corner_radius);
    println!("arrow offset:     ({:.1}, {:.1})", arrow_offset.dx, arrow_offset.dy);
    println!("frame:            {:?}", layout.frame);
    println!("arrow tip:        ({:.1}, {:.1})", layout.arrow_tip.x, layout.arrow_tip.y);
    let outline = svg::path_data(&layout.screen_outline()).map_err(ExportError::from)?;
    println!("outline:          {}", outline);
    println!("fits on screen:   {}", layout.fits_within(&screen_bounds));
    Ok(())
}

fn cmd_render(config: &Path, output: &Path) -> Result<(), AppError> {
    let scene = SceneConfig::load(config)?;
    let screen_bounds = scene.screen.bounds();
    log::info!(
        "Loaded {} tooltip(s) from {}",
        scene.tooltips.len(),
        config.display()
    );

    let mut balloons = Vec::new();
    for entry in &scene.tooltips {
        let mut adapter = entry.adapter()?;
        match adapter.layout(&screen_bounds) {
            Some(layout) => {
                if !layout.fits_within(&screen_bounds) {
                    log::warn!("Tooltip '{}' does not fit on screen", entry.name);
                }
                balloons.push((entry.name.clone(), layout));
            }
            None => log::info!("Tooltip '{}' is hidden, skipping", entry.name),
        }
    }

    let document = svg::render_svg(&screen_bounds, Color::GRAY, &balloons)?;
    svg::write_svg(output, &document)?;
    log::info!("Wrote {} balloon(s) to {}", balloons.len(), output.display());
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve {
            screen,
            source,
            point,
            preset,
            overlay,
            direction,
            position,
        } => cmd_resolve(screen, source, point, &preset, overlay, direction, position),
        Commands::Render { config, output } => cmd_render(&config, &output),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
