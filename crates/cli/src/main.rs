#![deny(unsafe_code)]
//! CLI binary for the flownet engine.
//!
//! Subcommands:
//! - `net <scenario>` — compute a flow net, write a PNG snapshot
//! - `list` — print available scenarios

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use flownet_core::{compute_flow_net, DEFAULT_LEVELS, DEFAULT_NUM_POINTS};
use flownet_scenarios::Scenario;
use std::fs::File;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flownet", about = "Flow-net computation for 2-D potential flow")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the flow net for a scenario and write a PNG snapshot.
    Net {
        /// Scenario name (e.g. "well").
        scenario: String,

        /// Lower x bound of the sampling domain.
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        xmin: f64,

        /// Upper x bound of the sampling domain.
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        xmax: f64,

        /// Lower y bound of the sampling domain.
        #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
        ymin: f64,

        /// Upper y bound of the sampling domain.
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        ymax: f64,

        /// Number of contour levels for the potential family.
        #[arg(short, long, default_value_t = DEFAULT_LEVELS)]
        levels: usize,

        /// Number of samples per axis.
        #[arg(short, long, default_value_t = DEFAULT_NUM_POINTS)]
        num_points: usize,

        /// Scenario parameters as a JSON string (e.g. '{"q": 500.0}').
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output PNG path.
        #[arg(short, long, default_value = "flow_net.png")]
        output: PathBuf,

        /// Also write the full grids and level arrays as JSON.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// List available scenarios.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let scenarios = Scenario::list();
            if cli.json {
                let info = serde_json::json!({ "scenarios": scenarios });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Scenarios:");
                for name in scenarios {
                    println!("  {name}");
                }
            }
        }
        Command::Net {
            scenario,
            xmin,
            xmax,
            ymin,
            ymax,
            levels,
            num_points,
            params,
            output,
            export,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let kind = Scenario::from_name(&scenario).map_err(CliError::from)?;
            let model = kind.build(&params);

            let net = compute_flow_net(
                (xmin, xmax),
                (ymin, ymax),
                &model.phi_fn(),
                &model.psi_fn(),
                levels,
                num_points,
            )?;

            flownet_scenarios::snapshot::write_png(&net, &output)?;

            if let Some(path) = &export {
                let file =
                    File::create(path).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                serde_json::to_writer(file, &net)?;
            }

            let step = if net.levels_phi.len() >= 2 {
                net.levels_phi[1] - net.levels_phi[0]
            } else {
                0.0
            };
            if cli.json {
                let info = serde_json::json!({
                    "scenario": scenario,
                    "xrange": [xmin, xmax],
                    "yrange": [ymin, ymax],
                    "num_points": num_points,
                    "step": step,
                    "levels_phi": net.levels_phi,
                    "levels_psi": net.levels_psi,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                // the summary is a result, not a diagnostic: stdout
                println!("{}", net_summary(&scenario, num_points, &net, step, &output));
            }
        }
    }

    Ok(())
}

fn net_summary(
    scenario: &str,
    num_points: usize,
    net: &flownet_core::FlowNet,
    step: f64,
    output: &std::path::Path,
) -> String {
    format!(
        "flow net for {scenario} ({num_points}x{num_points}, {} equipotential / {} stream levels, step {step:.4}) -> {}",
        net.levels_phi.len(),
        net.levels_psi.len(),
        output.display()
    )
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
