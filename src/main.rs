use clap::Parser;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{CliConfig, HelperEngine, HelperError, TomlConfig};

fn load_config(cli: &CliConfig) -> small_utils::Result<TomlConfig> {
    cli.validate()?;
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn fail(e: &HelperError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            // logging is not configured yet; fall back to the defaults
            logger::init_cli_logger(cli.verbose, None);
            fail(&e);
        }
    };

    if config.json_logging() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    if let Some(path) = &cli.config {
        tracing::info!("Loaded configuration from {}", path);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let engine = HelperEngine::from_config(&config);
    let operation = cli.command.operation();

    let result = cli
        .command
        .arguments()
        .and_then(|args| engine.run(operation, &args));

    match result {
        Ok(result) => {
            if cli.json {
                let output = serde_json::json!({
                    "operation": operation,
                    "result": result,
                });
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{}", result);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
