//! tabmove - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use tabmove::output::output_move_outcome;
use tabmove::profile::resolve_active_profile;
use tabmove::ui::value_or_prompt;
use tabmove::{
    move_workbook_to_project, Cli, MoveRequest, PasswordResolver, ProfileStore, ServerConfig,
    TableauClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tabmove v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProfileStore::new();
    let profile = resolve_active_profile(cli.profile.as_deref(), &store)?;
    let config = ServerConfig::resolve(cli.server_overrides(), profile.as_ref())?;

    let workbook = value_or_prompt(
        cli.workbook.as_deref(),
        "Name of workbook to move",
        "--workbook",
        cli.batch,
    )?;
    let project = value_or_prompt(
        cli.project.as_deref(),
        "Destination project",
        "--project",
        cli.batch,
    )?;

    if !cli.batch {
        eprintln!(
            "\n*Moving '{}' workbook to '{}' project as {}*",
            workbook, project, config.username
        );
    }
    debug!(
        "Move request: workbook={:?}, project={:?}, server={}, site={:?}",
        workbook, project, config.server, config.site
    );

    let client = TableauClient::from_config(&config);
    let passwords = PasswordResolver::new(cli.batch);
    let request = MoveRequest { workbook, project };

    let outcome =
        move_workbook_to_project(&client, &config, &passwords, &request, cli.batch).await?;

    output_move_outcome(&outcome, cli.output);
    info!("Completed successfully");

    Ok(())
}
