use anyhow::Context;
use clap::{Parser, Subcommand};
use litcube_geometry::{CUBE_VERTEX_COUNT, INDICES, NORMALS, POSITIONS, triangle_count};
use litcube_input::{InputHandler, LoopControl, parse_key_script};
use litcube_render::{DebugTextRenderer, Renderer};
use litcube_scene::SceneState;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "litcube-cli", about = "Headless tools for the lit cube demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Feed a key script through the input handler, one frame per key
    Replay {
        /// Keys to press: i/k pitch, j/l yaw, q quits
        #[arg(short, long, default_value = "")]
        keys: String,
        /// Print the final scene state as JSON instead of frame dumps
        #[arg(long)]
        json: bool,
    },
    /// Summarize the static geometry
    Geometry,
}

/// Result of a replay, as printed with `--json`.
#[derive(Debug, Serialize)]
struct ReplaySummary {
    scene: SceneState,
    frames: u64,
    quit: bool,
    model_matrix: [f32; 16],
}

/// Run each key as its own frame: drain, then render unless the key quit.
fn replay(keys: &str) -> anyhow::Result<(ReplaySummary, Vec<String>)> {
    let events = parse_key_script(keys).context("invalid key script")?;

    let mut scene = SceneState::new();
    let mut input = InputHandler::new();
    let mut renderer = DebugTextRenderer::new();
    let mut dumps = Vec::new();
    let mut quit = false;

    let Ok(first) = renderer.render_frame(&scene);
    dumps.push(first);

    for event in events {
        if input.drain([event], &mut scene) == LoopControl::Exit {
            quit = true;
            break;
        }
        let Ok(dump) = renderer.render_frame(&scene);
        dumps.push(dump);
    }

    let summary = ReplaySummary {
        scene,
        frames: renderer.frames(),
        quit,
        model_matrix: scene.model_matrix().to_cols_array(),
    };
    Ok((summary, dumps))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("litcube-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("geometry: {}", litcube_geometry::crate_info());
            println!("render: {}", litcube_render::crate_info());
        }
        Commands::Replay { keys, json } => {
            let (summary, dumps) = replay(&keys)?;
            tracing::debug!(frames = summary.frames, quit = summary.quit, "replay finished");
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for dump in dumps {
                    print!("{dump}");
                }
                if summary.quit {
                    println!("quit requested; no further frames");
                }
            }
        }
        Commands::Geometry => {
            println!(
                "vertices: {} ({} cube, {} platform)",
                POSITIONS.len(),
                CUBE_VERTEX_COUNT,
                POSITIONS.len() - CUBE_VERTEX_COUNT
            );
            println!("indices: {} ({} triangles)", INDICES.len(), triangle_count());
            for (i, n) in NORMALS.iter().enumerate() {
                let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
                println!("normal {i:>2}: length {len:.4}");
            }
        }
    }

    Ok(())
}
