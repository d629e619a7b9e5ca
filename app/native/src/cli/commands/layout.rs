//! Layout CLI commands.
//!
//! Both commands run the layout headless: `layout` drives a full engine
//! against an in-memory surface, `partition` only reports the chosen grid.

use clap::Args;
use colored::Colorize;
use serde_json::json;

use super::types::ContainerArgs;
use crate::cli::output;
use crate::config;
use crate::error::TileGridError;
use crate::grid::{
    Container, GridError, GridLayoutEngine, GridPlan, RecordingSurface, TileFrame,
};

/// Arguments for `tilegrid layout`.
#[derive(Args, Debug, Clone)]
#[command(after_long_help = r#"Examples:
  tilegrid layout -W 400 -H 300 --count 3          # Three anonymous tiles
  tilegrid layout -W 1920 -H 1080 -t alice -t bob  # Named tiles, in order
  tilegrid layout -n 5 -r 16:9 --json              # 16:9 tiles, JSON output"#)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub container: ContainerArgs,

    /// Number of anonymous tiles to place (named tile-1, tile-2, ...).
    #[arg(long, short = 'n', conflicts_with = "tiles")]
    pub count: Option<u32>,

    /// Tile identifier, in placement order. Repeat for each tile.
    #[arg(long = "tile", short = 't', value_name = "ID")]
    pub tiles: Vec<String>,
}

impl LayoutArgs {
    /// Returns the tile identifiers to place.
    fn tile_ids(&self) -> Result<Vec<String>, TileGridError> {
        match self.count {
            Some(count) => Ok((1..=count).map(|i| format!("tile-{i}")).collect()),
            None if !self.tiles.is_empty() => Ok(self.tiles.clone()),
            None => Err(TileGridError::InvalidArguments(
                "Either --count or at least one --tile is required".to_string(),
            )),
        }
    }
}

/// Arguments for `tilegrid partition`.
#[derive(Args, Debug, Clone)]
#[command(after_long_help = r#"Examples:
  tilegrid partition -W 400 -H 300 -n 4         # Best grid for four tiles
  tilegrid partition -n 12 --json               # Container from config, JSON output"#)]
pub struct PartitionArgs {
    #[command(flatten)]
    pub container: ContainerArgs,

    /// Number of tiles to arrange.
    #[arg(long, short = 'n')]
    pub count: u32,
}

/// Runs the engine over the requested tiles and returns the frames and plan.
///
/// # Errors
///
/// Returns an error if the container is invalid or a tile identifier repeats.
pub fn run_layout(
    args: &LayoutArgs,
) -> Result<(Container, Option<GridPlan>, Vec<TileFrame>), TileGridError> {
    let (width, height, ratio) = args.container.resolve(config::get_config());

    let mut engine = GridLayoutEngine::with_aspect_ratio(RecordingSurface::new(), ratio)?;
    engine.initialize(width, height)?;
    for id in args.tile_ids()? {
        engine.add_tile(id)?;
    }

    let frames = engine.layout()?;
    Ok((engine.container()?, engine.plan()?, frames))
}

/// Execute `tilegrid layout`.
///
/// # Errors
///
/// Returns an error if the layout could not be computed.
pub fn execute_layout(args: &LayoutArgs) -> Result<(), TileGridError> {
    let (container, plan, frames) = run_layout(args)?;

    if args.container.json {
        let value = json!({
            "container": container,
            "partition": plan.map(|p| p.partition),
            "tileSize": plan.map(|p| p.tile_size),
            "tiles": frames,
        });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    let Some(plan) = plan else {
        println!("No tiles to lay out.");
        return Ok(());
    };

    print_plan_header(&container, &plan);
    println!("{}", output::frames_table(&frames));
    Ok(())
}

/// Execute `tilegrid partition`.
///
/// # Errors
///
/// Returns an error if the container dimensions are invalid.
pub fn execute_partition(args: &PartitionArgs) -> Result<(), TileGridError> {
    let (width, height, ratio) = args.container.resolve(config::get_config());
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimension { width, height }.into());
    }

    let container = Container::new(width, height);
    let plan = GridPlan::new(&container, args.count, ratio);

    if args.container.json {
        let value = json!({ "container": container, "aspectRatio": ratio, "plan": plan });
        output::print_highlighted_json(&value);
        return Ok(());
    }

    match plan {
        Some(plan) => {
            print_plan_header(&container, &plan);
            println!(
                "  Margins: top {}, left {}, last row +{}",
                plan.top_margin, plan.left_margin, plan.last_row_margin
            );
        }
        None => println!("No tiles to lay out."),
    }
    Ok(())
}

/// Prints the one-line plan summary shared by both commands.
fn print_plan_header(container: &Container, plan: &GridPlan) {
    println!(
        "{} {} tiles in {}×{} → {} columns × {} rows, {}×{} each",
        "Layout:".bold(),
        plan.count,
        container.width,
        container.height,
        plan.partition.columns.to_string().cyan(),
        plan.partition.rows.to_string().cyan(),
        plan.tile_size.width.to_string().yellow(),
        plan.tile_size.height.to_string().yellow(),
    );
}
