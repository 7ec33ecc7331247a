use clap::{Parser, Subcommand};
use fixpoint::config::{parse_increment, parse_steps, parse_tolerance};
use fixpoint::tools::{
    SCENARIO_VECTOR, increment_from_env, max_drift, rotation_drift, steps_from_env,
    tolerance_from_env,
};
use fixpoint::utils::reference::{RefQuat, max_abs_diff};
use fixpoint::{Q24, QuatQ24, Vec3Q24};

#[derive(Parser)]
#[command(name = "fixtool", version, about = "Q7.24 fixed-point inspection tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how a number is stored in Q7.24
    Convert {
        #[arg(long, allow_hyphen_values = true)]
        value: f64,
        /// Also project onto an integer with this many units per 1.0
        #[arg(long)]
        scale: Option<i32>,
    },
    /// Rotate a vector once by a small-rotation increment
    Rotate {
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        vector: [f64; 3],
        /// Imaginary part of the increment (half-angle times axis)
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        axis: [f64; 3],
    },
    /// Compose an X-axis increment repeatedly and compare against f64
    Drift {
        /// Number of increments, 1 to 10000
        #[arg(long, value_parser = parse_steps)]
        steps: Option<usize>,
        /// Half-angle increment in radians, -1 to 1
        #[arg(long, value_parser = parse_increment, allow_hyphen_values = true)]
        increment: Option<f64>,
        /// Finite, non-negative per-component error limit
        #[arg(long, value_parser = parse_tolerance)]
        tolerance: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { value, scale } => convert_cmd(value, scale),
        Command::Rotate { vector, axis } => rotate_cmd(vector, axis),
        Command::Drift {
            steps,
            increment,
            tolerance,
        } => drift_cmd(steps, increment, tolerance),
    }
}

fn parse_vec3(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got {:?}", s));
    }
    let mut out = [0.0f64; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("bad component {:?}: {}", part, e))?;
    }
    Ok(out)
}

fn convert_cmd(value: f64, scale: Option<i32>) {
    let q = Q24::from_f64(value);
    println!("Input:      {}", value);
    println!("Raw:        {} (0x{:08x})", q.raw(), q.raw());
    println!("Stored:     {}", q.to_f64());
    println!("Error:      {:.3e}", (q.to_f64() - value).abs());
    if value.abs() >= 128.0 {
        println!("Warning: {} is outside the Q7.24 range, value saturated", value);
    }
    if let Some(scale) = scale {
        if (1..=1 << Q24::FRACTIONAL_BITS).contains(&scale) {
            println!("Scaled x{}: {}", scale, q.to_int_scaled(scale));
        } else {
            eprintln!("Scale must be between 1 and {}", 1 << Q24::FRACTIONAL_BITS);
            std::process::exit(2);
        }
    }
}

fn rotate_cmd(vector: [f64; 3], axis: [f64; 3]) {
    let v = Vec3Q24::from_f64(vector[0], vector[1], vector[2]);
    let q = QuatQ24::from_small_rotation(Vec3Q24::from_f64(axis[0], axis[1], axis[2]));
    let fixed = q.rotate(&v).to_f64();
    let reference = RefQuat::from_small_rotation(axis).rotate(&vector);

    println!("Quaternion: w={} x={} y={} z={}", q.w(), q.x(), q.y(), q.z());
    println!("Norm^2:     {}", q.norm_squared());
    println!(
        "Fixed:      [{:.8}, {:.8}, {:.8}]",
        fixed[0], fixed[1], fixed[2]
    );
    println!(
        "Reference:  [{:.8}, {:.8}, {:.8}]",
        reference[0], reference[1], reference[2]
    );
    println!("Max error:  {:.3e}", max_abs_diff(&fixed, &reference));
}

fn drift_cmd(steps: Option<usize>, increment: Option<f64>, tolerance: Option<f64>) {
    let steps = steps.unwrap_or_else(steps_from_env);
    let increment = increment.unwrap_or_else(increment_from_env);
    let tolerance = tolerance.unwrap_or_else(tolerance_from_env);

    println!(
        "Rotating {:?} by {} increments of {} around X (tolerance {:.1e})",
        SCENARIO_VECTOR, steps, increment, tolerance
    );
    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>10} {:>12}",
        "step", "x", "y", "z", "error", "norm^2"
    );

    let samples = rotation_drift(SCENARIO_VECTOR, [increment, 0.0, 0.0], steps);
    for s in &samples {
        println!(
            "{:>6} {:>12.8} {:>12.8} {:>12.8} {:>10.2e} {:>12.8}",
            s.step, s.fixed[0], s.fixed[1], s.fixed[2], s.max_abs_error, s.norm_squared
        );
    }

    let worst = max_drift(&samples);
    println!("Max error: {:.3e}", worst);
    if worst > tolerance {
        eprintln!("Drift {:.3e} exceeds tolerance {:.1e}", worst, tolerance);
        std::process::exit(1);
    }
}
