mod host;

use anyhow::{Context, Result};
use clap::Parser;
use fire_evac_core::{
    ColorMode, FrameInput, HazardError, HazardState, ParticleSimulator, SceneComposer, SceneConfig,
};
use host::{CityModel, ConsoleHost, OrbitCamera};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Headless fire evacuation demo
#[derive(Parser, Debug)]
#[command(name = "fire-evac-demo")]
#[command(about = "Place a fire in the city model and follow the evacuation arrows", long_about = None)]
struct Args {
    /// Scene configuration in RON format (defaults to the built-in Athens model)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// City model asset handed to the rendering host
    #[arg(long, default_value = "final.glb")]
    model: PathBuf,

    /// Location to place the fire at
    #[arg(short, long)]
    location: Option<String>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 180)]
    frames: u32,

    /// Seed for the flame effect (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Toggle the fire on and off every N frames
    #[arg(short, long)]
    toggle_every: Option<u32>,

    /// Frames on which the "Reset View" button is pressed (repeatable)
    #[arg(short, long)]
    reset_at: Vec<u32>,

    /// How many frames a reset press stays high (about 100 ms at 60 fps)
    #[arg(long, default_value_t = 6)]
    reset_hold: u32,

    /// Redraw particle colors every time a particle is recycled
    #[arg(long)]
    flicker: bool,

    /// List the selectable locations and exit
    #[arg(long)]
    list: bool,
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::athens());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading scene config {}", path.display()))?;
    let config = ron::from_str(&data)
        .with_context(|| format!("parsing scene config {}", path.display()))?;
    info!("Loaded scene config from {}", path.display());
    Ok(config)
}

/// "Place Fire" button
fn place_fire(hazard: &mut HazardState, scene: &SceneComposer<CityModel>) {
    match hazard.place_hazard(scene.registry()) {
        Ok(name) => println!("Fire placed in {name}!"),
        Err(HazardError::MissingSelection) => println!("Please select a location first!"),
        Err(e) => println!("Cannot place fire: {e}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("=== Fire Evacuation Demo ===\n");

    let mut config = load_config(args.config.as_deref())?;
    if args.flicker {
        config.particles.color_mode = ColorMode::Flicker;
    }

    let city = CityModel { asset: args.model };
    let mut scene = match args.seed {
        Some(seed) => {
            let simulator = ParticleSimulator::seeded(config.particles, seed)?;
            SceneComposer::with_simulator(&config, city, simulator)?
        }
        None => SceneComposer::from_config(&config, city)?,
    };

    if args.list {
        println!("Locations:");
        for name in scene.registry().selectable() {
            println!("  {name}");
        }
        return Ok(());
    }

    println!(
        "City model: {} ({} locations, {} routes)",
        scene.city().asset.display(),
        scene.registry().len(),
        scene.routes().len()
    );

    let mut hazard = HazardState::new();
    if let Some(location) = &args.location {
        hazard.select(location.as_str());
    }
    place_fire(&mut hazard, &scene);

    let mut host = ConsoleHost::default();
    let mut camera = OrbitCamera::new(config.camera);

    let toggle_every = args.toggle_every.filter(|&n| n > 0);
    let mut since_toggle = 0;

    for frame in 0..args.frames {
        if let Some(every) = toggle_every {
            if since_toggle == every {
                if hazard.is_active() {
                    hazard.clear_hazard();
                    println!("[frame {frame}] Fire cleared");
                } else {
                    place_fire(&mut hazard, &scene);
                }
                since_toggle = 0;
            }
            since_toggle += 1;
        }

        let reset_level = args
            .reset_at
            .iter()
            .any(|&at| (at..at.saturating_add(args.reset_hold)).contains(&frame));

        // The operator keeps nudging the view between resets
        camera.orbit(0.01, 1.002);

        let input = FrameInput::from(&hazard).with_camera_reset(reset_level);
        let summary = scene.frame(&input, &mut host, &mut camera);
        host.present(&config.markers);

        if summary.camera_reset {
            println!(
                "[frame {frame}] Camera reset to distance {:.1}",
                camera.distance()
            );
        }
    }

    println!("\n=== Summary ===");
    println!("Frames:            {}", scene.frame_count());
    println!("Scene draws:       {}", host.scene_draws);
    println!("Marker draws:      {}", host.marker_draws);
    println!("Particle draws:    {}", host.particle_draws);
    println!("Label draws:       {}", host.label_draws);
    println!("Peak flame height: {:.2}", host.peak_particle_height);
    println!("Camera resets:     {}", camera.resets);
    println!("Flame effect:      {:?}", scene.simulator().state());

    Ok(())
}
