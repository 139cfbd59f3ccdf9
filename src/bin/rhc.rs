//! rhc CLI Binary
//!
//! Resolves and displays the domain, application or team a command would act on.

use rhc_context::cli::{map_error, Cli, RunContext};
use rhc_context::config::ConfigLoader;
use rhc_context::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("rhc starting");

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            process::exit(1);
        }
    };

    match runtime.block_on(context.execute(&cli)) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let global = &cli.global;
    let explicit = global.verbose
        || global.log_level.is_some()
        || global.log_format.is_some()
        || global.log_output.is_some()
        || global.log_file.is_some();
    if !explicit {
        return LoggingConfig::off();
    }

    let mut config = ConfigLoader::load_with_file(global.config.as_deref())
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();

    if global.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = global.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = global.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = global.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = global.log_file {
        config.file = Some(file.clone());
        if global.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
