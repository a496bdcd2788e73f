//! Runs one drop without a window and prints the trajectory, one row per fixed step.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use gravity_drop::{DropEvent, DropSimulator, PlanetId, SimulationVariant};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Trace a single ball drop frame by frame", version)]
struct Args {
    /// Planet name (Earth, Moon, Mars, Jupiter, Sun).
    #[arg(long, default_value = "Earth")]
    planet: String,
    /// Release height in metres (clamped to 0.1..=10).
    #[arg(long, default_value_t = 2.0)]
    height: f32,
    /// "extended" or "classic".
    #[arg(long, default_value = "extended")]
    variant: String,
    #[arg(long, default_value_t = 60.0)]
    tick_hz: f32,
    /// Give up after this many steps.
    #[arg(long, default_value_t = 10_000)]
    max_frames: usize,
    /// Print every n-th step (bounces and the settle step are always printed).
    #[arg(long, default_value_t = 1)]
    every: usize,
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Serialize, Debug, Clone)]
struct Sample {
    frame: usize,
    t: f32,
    altitude: f32,
    velocity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<&'static str>,
}

#[derive(Serialize, Debug)]
struct Trace {
    planet: &'static str,
    gravity: f32,
    variant: &'static str,
    height: f32,
    settled_at: Option<usize>,
    samples: Vec<Sample>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let planet = PlanetId::by_name(&args.planet)
        .ok_or_else(|| anyhow!("unknown planet '{}'", args.planet))?;
    let variant = SimulationVariant::parse(&args.variant)
        .ok_or_else(|| anyhow!("unknown variant '{}'", args.variant))?;
    if args.tick_hz <= 0.0 {
        return Err(anyhow!("--tick-hz must be > 0"));
    }
    let dt = 1.0 / args.tick_hz;
    let every = args.every.max(1);

    let mut sim = DropSimulator::new(variant, planet, args.height);
    let height = sim.state().height_meters;
    sim.release();

    let mut samples = vec![Sample {
        frame: 0,
        t: 0.0,
        altitude: sim.state().altitude,
        velocity: 0.0,
        event: Some("release"),
    }];
    let mut settled_at = None;
    for frame in 1..=args.max_frames {
        let event = match sim.advance(dt) {
            Some(DropEvent::Bounced { .. }) => Some("bounce"),
            Some(DropEvent::Settled { .. }) => Some("settle"),
            _ => None,
        };
        if event.is_some() || frame % every == 0 {
            let s = sim.state();
            samples.push(Sample {
                frame,
                t: frame as f32 * dt,
                altitude: s.altitude,
                velocity: s.velocity,
                event,
            });
        }
        if !sim.is_falling() {
            settled_at = Some(frame);
            break;
        }
    }

    let trace = Trace {
        planet: planet.profile().name,
        gravity: planet.profile().gravity,
        variant: variant.as_str(),
        height,
        settled_at,
        samples,
    };
    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&trace)?),
        Format::Csv => {
            println!("frame,t,altitude,velocity,event");
            for s in &trace.samples {
                println!(
                    "{},{:.4},{:.4},{:.4},{}",
                    s.frame,
                    s.t,
                    s.altitude,
                    s.velocity,
                    s.event.unwrap_or("")
                );
            }
        }
        Format::Table => {
            println!(
                "{} (g = {} m/s²) variant={} h={:.1} m",
                trace.planet, trace.gravity, trace.variant, trace.height
            );
            println!("{:>6} {:>8} {:>10} {:>10}  event", "frame", "t", "alt (m)", "v (m/s)");
            for s in &trace.samples {
                println!(
                    "{:>6} {:>8.3} {:>10.4} {:>10.4}  {}",
                    s.frame,
                    s.t,
                    s.altitude,
                    s.velocity,
                    s.event.unwrap_or("")
                );
            }
            match trace.settled_at {
                Some(f) => println!("settled after {f} frames ({:.2} s)", f as f32 * dt),
                None => println!("still bouncing after {} frames", args.max_frames),
            }
        }
    }
    Ok(())
}
