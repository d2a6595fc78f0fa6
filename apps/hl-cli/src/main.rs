use clap::{Parser, Subcommand};
use hl_catalog::{PipeDiameter, PipeMaterial, PumpModel};
use hl_hydraulics::{CircuitConfiguration, SizingOutcome, SizingReport, size_circuit};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "hl-cli")]
#[command(about = "HydroLoop CLI - condenser loop pipe run sizing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the maximum pipe run length for a circuit
    Size {
        /// Heat-pump model (see `pumps`)
        #[arg(long)]
        pump: String,
        /// Internal pipe diameter in mm (33, 40, 50, 66 or 80)
        #[arg(long)]
        diameter: u32,
        /// Pipe material (see `materials`); legacy roughness when omitted
        #[arg(long)]
        material: Option<String>,
        /// Number of wide-angle 90° elbows (1-10)
        #[arg(long, default_value_t = 1)]
        elbows: u32,
        /// Summed ζ of the filter + check-valve assembly
        #[arg(long, default_value_t = 0.0)]
        zeta: f64,
        /// Additional head loss in mCE
        #[arg(long = "extra-loss", default_value_t = 0.0)]
        extra_loss: f64,
        /// Emit the result record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List heat-pump models and their duty points
    Pumps,
    /// List pipe materials and their roughness
    Materials,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Size {
            pump,
            diameter,
            material,
            elbows,
            zeta,
            extra_loss,
            json,
        } => cmd_size(&pump, diameter, material.as_deref(), elbows, zeta, extra_loss, json),
        Commands::Pumps => cmd_pumps(),
        Commands::Materials => cmd_materials(),
    }
}

fn cmd_size(
    pump: &str,
    diameter_mm: u32,
    material: Option<&str>,
    elbows: u32,
    zeta: f64,
    extra_loss: f64,
    json: bool,
) -> CliResult<()> {
    let pump: PumpModel = pump
        .parse()
        .map_err(|e| format!("{e}: {pump:?} (run `hl-cli pumps` for the catalog)"))?;
    let diameter = PipeDiameter::from_millimeters(diameter_mm)
        .ok_or_else(|| format!("unsupported diameter {diameter_mm} mm (33, 40, 50, 66 or 80)"))?;
    let material = material
        .map(|name| {
            name.parse::<PipeMaterial>()
                .map_err(|e| format!("{e}: {name:?} (run `hl-cli materials` for the catalog)"))
        })
        .transpose()?;

    let config = CircuitConfiguration::new(pump, diameter, material, elbows, zeta, extra_loss)?;
    let outcome = size_circuit(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        SizingOutcome::Laminar(report) => {
            println!("Flow velocity:   {:.2} m/s", report.velocity_m_s);
            println!("Reynolds number: {:.0}", report.reynolds);
            println!(
                "Flow regime is laminar (Re <= 2000); the Colebrook-White correlation does not apply."
            );
        }
        SizingOutcome::Turbulent(report) => print_turbulent(&report),
    }

    Ok(())
}

fn print_turbulent(report: &SizingReport) {
    println!("Flow velocity:          {:.2} m/s", report.velocity_m_s);
    println!("Reynolds number:        {:.0}", report.reynolds);
    println!("Friction factor:        {:.4}", report.friction_factor);
    println!("Singular losses total:  {:.3} mCE", report.singular_total_mce);
    println!(
        "Linear loss:            {:.3} mCE/m",
        report.linear_loss_mce_per_m
    );

    if report.feasible {
        // Floor, as installers never round a run length up
        println!(
            "Maximum pipe run:       {:.0} m",
            report.sizable_length_m.floor()
        );
    } else {
        println!(
            "Infeasible: singular losses exceed the available head ({:.1} mCE short)",
            -report.sizable_length_m * report.linear_loss_mce_per_m
        );
    }
}

fn cmd_pumps() -> CliResult<()> {
    println!("Heat-pump models:");
    for model in PumpModel::ALL {
        let duty = model.duty();
        println!(
            "  {:<12} {:>6.2} m³/h  {:>4.1} mCE",
            model.key(),
            duty.flow_rate.value * 3600.0,
            duty.available_head.value
        );
    }
    Ok(())
}

fn cmd_materials() -> CliResult<()> {
    println!("Pipe materials:");
    for material in PipeMaterial::ALL {
        println!(
            "  {:<18} ε = {:.4} mm",
            material.display_name(),
            material.roughness().value * 1000.0
        );
    }
    Ok(())
}
