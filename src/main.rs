use std::process::ExitCode;
use clap::Parser;
use hrdesk::config::config_manager::ConfigManager;
use hrdesk::enums::commands::Commands;
use hrdesk::errors::{ErrorHandler, HrError, HrResult};
use hrdesk::structs::cli::Cli;
use hrdesk::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> HrResult<()> {
    if matches!(cli.command, Commands::Init) {
        return CommandRunner::init_command();
    }

    let mut config = ConfigManager::load()?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if cli.no_color {
        config.output.color = false;
    }

    if let Err(problems) = ConfigManager::validate_config(&config) {
        for problem in &problems {
            log::error!("❌ {}", problem);
        }
        return Err(HrError::config_error(
            &problems.join("; "),
            None,
            Some("Edit ~/.hrdesk/config.toml or run 'hrdesk init'"),
        ));
    }

    CommandRunner::new(config)?.run_command(cli.command).await
}
