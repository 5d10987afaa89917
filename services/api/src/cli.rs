use crate::demo::{run_decision, run_demo, DecisionArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Workflow Assistant",
    about = "Run the hiring-workflow assessment service or exercise its scoring from the command line",
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
    /// Evaluate the hiring recommendation rules for a score and flag counts
    Decision(DecisionArgs),
    /// Run a CLI demo covering the assessment and interview scoring flows
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
        Command::Decision(args) => run_decision(args),
        Command::Demo(args) => run_demo(args),
    }
}
