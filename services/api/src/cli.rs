use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::seed::{run_seed, SeedArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use clinic_siting::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Clinic Siting",
    about = "Score clinic sites and generate marketplace seed data from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a site from a JSON file or a built-in preset
    Score(ScoreArgs),
    /// Emit a seeded batch of synthetic listings as JSON or CSV
    Seed(SeedArgs),
    /// Walk through a scored sample site and the best seeded listings
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Seed(args) => run_seed(args),
        Command::Demo(args) => run_demo(args),
    }
}
