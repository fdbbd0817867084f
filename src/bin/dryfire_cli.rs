use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;

use dryfire_scaler::constants::{LETTER_PAPER_HEIGHT_IN, LETTER_PAPER_WIDTH_IN};
use dryfire_scaler::{
    find_preset, scale_down, scale_up, Length, ProjectionInput, ScalingInput, Unit,
    CUSTOM_PRESET, REFERENCE_DISTANCES, TARGET_PRESETS,
};

#[derive(Parser)]
#[command(name = "dryfire")]
#[command(version = "0.1.0")]
#[command(about = "Dry-fire target scaling calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale a real-world target down to its dry-fire equivalent
    ScaleDown {
        /// Real target width
        #[arg(short = 'w', long, default_value = "18.0")]
        width: f64,

        /// Real target height
        #[arg(short = 'H', long, default_value = "24.0")]
        height: f64,

        /// Unit for target width/height (in, ft, yd, mm, cm, m)
        #[arg(long, default_value = "in")]
        target_unit: String,

        /// Named target preset; overrides width/height/unit
        #[arg(short = 'p', long)]
        preset: Option<String>,

        /// Distance to the real target
        #[arg(short = 'r', long, default_value = "25.0")]
        real_distance: f64,

        /// Unit for the real distance
        #[arg(long, default_value = "yd")]
        real_distance_unit: String,

        /// Distance to the wall in the dry-fire room
        #[arg(short = 's', long, default_value = "10.0")]
        sim_distance: f64,

        /// Unit for the simulated distance
        #[arg(long, default_value = "ft")]
        sim_distance_unit: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Project a dry-fire target up to equivalent real-world sizes
    ScaleUp {
        /// Dry-fire target width
        #[arg(short = 'w', long, default_value = "1.0")]
        width: f64,

        /// Dry-fire target height
        #[arg(short = 'H', long, default_value = "1.0")]
        height: f64,

        /// Unit for target width/height (in, ft, yd, mm, cm, m)
        #[arg(long, default_value = "in")]
        target_unit: String,

        /// Distance to the wall in the dry-fire room
        #[arg(short = 's', long, default_value = "10.0")]
        sim_distance: f64,

        /// Unit for the simulated distance
        #[arg(long, default_value = "ft")]
        sim_distance_unit: String,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// List the target presets
    Presets,

    /// Display scaler information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScaleDownOutput {
    width_in: f64,
    height_in: f64,
    scale: f64,
    scale_percent: f64,
    moa: f64,
    fits_letter_paper: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProjectionRow {
    distance: String,
    width_in: f64,
    height_in: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScaleUpOutput {
    moa: f64,
    projections: Vec<ProjectionRow>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ScaleDown {
            width,
            height,
            target_unit,
            preset,
            real_distance,
            real_distance_unit,
            sim_distance,
            sim_distance_unit,
            output,
        } => {
            let mut input = ScalingInput {
                target_width: Length::new(width, target_unit.parse::<Unit>()?),
                target_height: Length::new(height, target_unit.parse::<Unit>()?),
                real_distance: Length::new(real_distance, real_distance_unit.parse::<Unit>()?),
                sim_distance: Length::new(sim_distance, sim_distance_unit.parse::<Unit>()?),
            };

            if let Some(name) = preset {
                if !name.eq_ignore_ascii_case(CUSTOM_PRESET) {
                    find_preset(&name)?.apply(&mut input);
                }
            }

            let result = scale_down(&input);
            display_scale_down(&input, result, output)?;
        }

        Commands::ScaleUp {
            width,
            height,
            target_unit,
            sim_distance,
            sim_distance_unit,
            output,
        } => {
            let input = ProjectionInput {
                target_width: Length::new(width, target_unit.parse::<Unit>()?),
                target_height: Length::new(height, target_unit.parse::<Unit>()?),
                sim_distance: Length::new(sim_distance, sim_distance_unit.parse::<Unit>()?),
            };

            let result = scale_up(&input, REFERENCE_DISTANCES);
            display_scale_up(&input, result, output)?;
        }

        Commands::Presets => {
            println!("{:<22} {:>7} {:>7}  UNIT", "NAME", "WIDTH", "HEIGHT");
            for p in TARGET_PRESETS {
                println!("{:<22} {:>7.2} {:>7.2}  {}", p.name, p.width, p.height, p.unit);
            }
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║       DRYFIRE SCALER v0.1.0            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Angular-size-preserving target         ║");
            println!("║ scaling for dry-fire practice.         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Real → dry-fire scale down           ║");
            println!("║ • Dry-fire → real projection table     ║");
            println!("║ • MOA angular size readout             ║");
            println!("║ • Competition target presets           ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_scale_down(
    input: &ScalingInput,
    result: dryfire_scaler::ScalingResult,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let fits_letter_paper =
        result.width_in <= LETTER_PAPER_WIDTH_IN && result.height_in <= LETTER_PAPER_HEIGHT_IN;

    let out = ScaleDownOutput {
        width_in: result.width_in,
        height_in: result.height_in,
        scale: result.scale,
        scale_percent: result.scale * 100.0,
        moa: result.moa,
        fits_letter_paper,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        OutputFormat::Csv => {
            println!("width_in,height_in,scale,moa,fits_letter_paper");
            println!(
                "{:.4},{:.4},{:.6},{:.2},{}",
                out.width_in, out.height_in, out.scale, out.moa, out.fits_letter_paper
            );
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║       SCALED TARGET DIMENSIONS         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Width:             {:>8.2} in         ║", out.width_in);
            println!("║ Height:            {:>8.2} in         ║", out.height_in);
            println!("║ Scale:             {:>8.1} %          ║", out.scale_percent);
            println!("║ Angular size:      {:>8.2} MOA        ║", out.moa);
            println!("╚════════════════════════════════════════╝");
            println!(
                "Real {} x {} at {} practiced from {}.",
                input.target_width, input.target_height, input.real_distance, input.sim_distance
            );
            if out.fits_letter_paper {
                println!("Fits on a single US Letter sheet (8.5\" x 11\").");
            } else {
                println!("Larger than a US Letter sheet (8.5\" x 11\").");
            }
        }
    }

    Ok(())
}

fn display_scale_up(
    input: &ProjectionInput,
    result: dryfire_scaler::ProjectionResult,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let out = ScaleUpOutput {
        moa: result.moa,
        projections: result
            .projections
            .iter()
            .map(|p| ProjectionRow {
                distance: p.label.to_string(),
                width_in: p.width_in,
                height_in: p.height_in,
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&out)?);
        }

        OutputFormat::Csv => {
            println!("distance,width_in,height_in");
            for row in &out.projections {
                println!("{},{:.2},{:.2}", row.distance, row.width_in, row.height_in);
            }
        }

        OutputFormat::Table => {
            println!("EQUIVALENT REAL-WORLD SIZES");
            println!(
                "{} x {} at {} represents {:.1} MOA",
                input.target_width, input.target_height, input.sim_distance, out.moa
            );
            println!();
            println!("{:<10} {:>10} {:>10}", "DISTANCE", "WIDTH", "HEIGHT");
            for row in &out.projections {
                println!(
                    "{:<10} {:>8.1}\" {:>8.1}\"",
                    row.distance, row.width_in, row.height_in
                );
            }
        }
    }

    Ok(())
}
