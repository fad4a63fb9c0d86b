use bezier_spin::io::save_image;
use bezier_spin::{Algorithm, Animation, Player, Scene, SceneConfig};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a sprite spinning along a Bezier curve to PNG frames")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AlgorithmConfig {
    #[default]
    Naive,
    Shear,
}

impl From<AlgorithmConfig> for Algorithm {
    fn from(value: AlgorithmConfig) -> Self {
        match value {
            AlgorithmConfig::Naive => Algorithm::Naive,
            AlgorithmConfig::Shear => Algorithm::Shear,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AnimationConfig {
    #[default]
    Rotation,
    Moving,
}

impl From<AnimationConfig> for Animation {
    fn from(value: AnimationConfig) -> Self {
        match value {
            AnimationConfig::Rotation => Animation::Rotation,
            AnimationConfig::Moving => Animation::Moving,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    image_path: Option<PathBuf>,
    output_dir: PathBuf,
    frames: u64,
    points: usize,
    seed: Option<u64>,
    algorithm: AlgorithmConfig,
    animation: AnimationConfig,
    frame_interval_ms: u64,
    show_polyline: bool,
}

impl Default for Config {
    fn default() -> Self {
        let scene = SceneConfig::default();
        Self {
            image_path: None,
            output_dir: PathBuf::from("frames"),
            frames: 120,
            points: scene.initial_points,
            seed: None,
            algorithm: AlgorithmConfig::default(),
            animation: AnimationConfig::default(),
            frame_interval_ms: scene.frame_interval.as_millis() as u64,
            show_polyline: scene.show_polyline,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("bezier_spin=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.frames == 0 {
        return Err("frames must be at least 1".into());
    }

    let scene_cfg = SceneConfig {
        initial_points: config.points,
        algorithm: config.algorithm.into(),
        animation: config.animation.into(),
        show_polyline: config.show_polyline,
        frame_interval: Duration::from_millis(config.frame_interval_ms),
        ..SceneConfig::default()
    };
    let interval = scene_cfg.frame_interval;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut scene = Scene::new_with_rng(scene_cfg, &mut rng)?;
    match &config.image_path {
        Some(path) => scene.load_image_file(path)?,
        None => scene.create_color_wheel()?,
    }

    fs::create_dir_all(&config.output_dir)?;
    let player = Player::new(interval).with_max_frames(config.frames);
    let output_dir = config.output_dir.clone();
    let written = player.run(&mut scene, |index, canvas| {
        save_image(canvas, output_dir.join(format!("frame_{index:04}.png")))
    })?;

    tracing::info!(frames = written, dir = %config.output_dir.display(), "render finished");
    println!("wrote {written} frames to {}", config.output_dir.display());
    Ok(())
}
