use crate::demo::{run_assess, run_chat, run_demo, run_questionnaire, AssessArgs, ChatArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindcare::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MindCare",
    about = "Run the MindCare wellness API or try its analysis rules from the command line",
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
    /// Classify a chat message and print the companion's reply
    Chat(ChatArgs),
    /// Score a journal entry or PHQ-9 answer sheet
    Assess(AssessArgs),
    /// Print the PHQ-9 questionnaire
    Questionnaire,
    /// Walk through the canonical chat and screening scenarios
    Demo,
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
        Command::Chat(args) => run_chat(args),
        Command::Assess(args) => run_assess(args),
        Command::Questionnaire => run_questionnaire(),
        Command::Demo => run_demo(),
    }
}
