use crate::demo::{run_dashboard, run_demo, DashboardArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hireboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruitment Dashboard Service",
    about = "Serve and demonstrate the recruitment tracking dashboard from the command line",
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
    /// Render the dashboard, job pipeline, and report queue to stdout
    Demo(DemoArgs),
    /// Print the dashboard summary as JSON
    Dashboard(DashboardArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the session dataset for reproducible runs
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Dashboard(args) => run_dashboard(args),
    }
}
