use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use navpuck_view::math::current_roll_angle;
use navpuck_view::{Navigator, PuckConfig, Region};
use std::path::PathBuf;
use tracing::info;

mod script;

#[derive(Parser)]
#[command(name = "navpuck")]
#[command(about = "Navigation puck headless driver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded event script against a simulated viewport.
    Replay(ReplayArgs),
    /// Print the roll angle of a view rotation.
    Roll(RollArgs),
    /// Print the default configuration as JSON.
    Defaults,
}

#[derive(Args)]
struct ReplayArgs {
    #[arg(long)]
    script: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 1920.0)]
    width: f32,
    #[arg(long, default_value_t = 1080.0)]
    height: f32,
}

#[derive(Args)]
struct RollArgs {
    /// Quaternion as `w,x,y,z`.
    #[arg(long)]
    quat: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay(args) => replay(args),
        Command::Roll(args) => roll(args),
        Command::Defaults => defaults(),
    }
}

fn replay(args: ReplayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => PuckConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PuckConfig::default(),
    };
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let script: script::Script = serde_json::from_str(&text).context("invalid script")?;

    let mut navigator = Navigator::new(&config).context("invalid configuration")?;
    let report = script::run(&script, &mut navigator, Region::new(args.width, args.height))?;
    info!(path = %args.script.display(), steps = script.steps.len(), "replay complete");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn roll(args: RollArgs) -> Result<()> {
    let rotation = script::parse_rotation(parse_quat(&args.quat)?)?;
    let angle = current_roll_angle(rotation);
    info!(radians = angle, "roll angle computed");
    println!("{:.6}", angle.to_degrees());
    Ok(())
}

fn defaults() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&PuckConfig::default())?);
    Ok(())
}

fn parse_quat(text: &str) -> Result<[f64; 4]> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 4 {
        bail!("--quat expects four comma-separated numbers, e.g. 1,0,0,0");
    }

    let mut values = [0.0; 4];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part.trim().parse().context("invalid quaternion component")?;
    }
    Ok(values)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
