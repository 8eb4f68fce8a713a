// Copyright 2020 TwoCookingMice

use sonotrace::core::config::{ OffsetStrategy, SimulationProperties };
use sonotrace::core::scene::Scene;
use sonotrace::core::scene_manager::SceneManager;
use sonotrace::core::tracker::PositionTracker;
use sonotrace::math::constants::{ Constants, Float };
use sonotrace::policies::full_capture::FullCapture;
use sonotrace::trackers::log_sink::LogSink;

use indicatif::{ ProgressBar, ProgressStyle };
use std::env;
use std::str::FromStr;

/// Advances a progress bar once per traced ray.
struct ProgressTracker {
    progress: ProgressBar,
}

impl ProgressTracker {
    fn new(total_rays: u64) -> Self {
        let progress = ProgressBar::new(total_rays);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rays {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { progress }
    }

    fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

impl PositionTracker for ProgressTracker {
    fn begin_frequency(&mut self, frequency: Float) {
        self.progress.set_message(format!("{} Hz", frequency));
    }

    fn end_tracking(&mut self) {
        self.progress.inc(1);
    }

    fn switch_to_reference_model(&mut self) {
        self.progress.println("Tracing reference model.");
    }
}

fn parse_frequencies(value: &str) -> Option<Vec<Float>> {
    value.split(',').map(|f| f.trim().parse::<Float>().ok()).collect()
}

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("missing value for {}", flag))?;
    value.parse::<T>().map_err(|_| format!("invalid value for {}: {}", flag, value))
}

/// Reads the command line (without the program name) on top of the
/// reference build: 1 kHz, 500 W, 9 rays per axis, no offset.
fn parse_args(args: &[String]) -> Result<(SimulationProperties, Constants), String> {
    let mut properties = SimulationProperties { num_of_rays_squared: 9, ..SimulationProperties::default() };
    let mut constants = Constants::default();
    let mut seed: u64 = 0;
    let mut jitter: Option<Float> = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "--frequencies" => {
                let value = value.ok_or_else(|| format!("missing value for {}", flag))?;
                properties.frequencies = parse_frequencies(value)
                    .ok_or_else(|| format!("invalid value for {}: {}", flag, value))?;
            }
            "--power" => properties.source_power = parse_value(flag, value)?,
            "--rays" => properties.num_of_rays_squared = parse_value(flag, value)?,
            "--collectors" => {
                properties.num_of_collectors = parse_value(flag, value)?;
                constants.population = properties.num_of_collectors;
            }
            "--size" => properties.model_size = parse_value(flag, value)?,
            "--seed" => seed = parse_value(flag, value)?,
            "--jitter" => jitter = Some(parse_value(flag, value)?),
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 2;
    }
    if let Some(max_angle) = jitter {
        properties.offset = OffsetStrategy::Jitter { seed, max_angle };
    }
    Ok((properties, constants))
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sonotrace");
    let (properties, constants) = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Usage: {} [--frequencies F1,F2,..] [--power W] [--rays N] [--collectors N] \
                       [--size S] [--seed N] [--jitter RAD]", program);
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    let scene = Scene::reference_model(properties.model_size, &constants);
    let manager = match SceneManager::new(&scene, properties, constants, &FullCapture) {
        Ok(manager) => manager,
        Err(err) => {
            log::error!("Invalid configuration: {}.", err);
            std::process::exit(1);
        }
    };

    let properties = manager.properties();
    let rays = (properties.num_of_rays_squared * properties.num_of_rays_squared) as u64;
    let mut tracker = ProgressTracker::new(2 * rays * properties.frequencies.len() as u64);
    let mut sink = LogSink::new();
    let run = match manager.run(&mut tracker, &mut sink) {
        Ok(run) => run,
        Err(err) => {
            log::error!("Simulation failed: {}.", err);
            std::process::exit(1);
        }
    };
    tracker.finish();

    for pass in run.scene.iter() {
        println!("{} Hz", pass.frequency);
        for (index, energy) in pass.energies.iter().enumerate() {
            println!("  collector {:>3}: {:.9} W", index, energy);
        }
        println!("  total: {:.9} W", pass.total());
    }
}
