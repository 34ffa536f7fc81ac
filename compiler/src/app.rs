use anyhow::Result;
use std::path::Path;

use crate::core::cli::{self, Commands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME, APP_NAME_LOWER, ENV_LOG};
use crate::data::filters::{self, CompileOptions, WhereClauseCommand};
use crate::utils::file::{expand_path, read_text};

pub struct CoreApp {
    pub config: AppConfig,
    options: CompileOptions,
}

impl CoreApp {
    /// Run the application
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();

        let (cli_config, command) = cli::parse();

        // Config files may turn on debug logging, so load them first
        let config = AppConfig::load(&cli_config)?;
        Self::init_logging(config.debug);
        tracing::debug!(app = APP_NAME, version = env!("CARGO_PKG_VERSION"), "Starting");

        let app = Self::new(config);

        match command {
            Commands::Compile {
                filters,
                value_only,
            } => {
                let command = app.compile_file(&filters)?;
                if value_only {
                    println!("{}", command.value());
                } else {
                    println!("{}", command.render());
                }
            }
            Commands::Check { filters } => {
                let summary = app.check_file(&filters)?;
                println!("{}", summary);
            }
        }
        Ok(())
    }

    pub fn new(config: AppConfig) -> Self {
        let options = config.compiler.to_compile_options();
        Self { config, options }
    }

    /// Log filter used when neither FILTERQL_LOG nor RUST_LOG is set
    fn default_log_filter(debug: bool) -> String {
        if debug {
            format!("debug,{}=debug", APP_NAME_LOWER)
        } else {
            format!("info,{}=info", APP_NAME_LOWER)
        }
    }

    fn init_logging(debug: bool) {
        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| Self::default_log_filter(debug));

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    /// Compile a filter JSON file, failing when the clause is invalid
    pub fn compile_file(&self, path: &Path) -> Result<WhereClauseCommand> {
        let json = read_text(&expand_path(&path.to_string_lossy()))?;
        self.compile_json(&json)
    }

    /// Compile a filter JSON document, failing when the clause is invalid
    pub fn compile_json(&self, json: &str) -> Result<WhereClauseCommand> {
        let parsed = filters::parse_filters(json)?;
        let command = filters::compile(&parsed, &self.options)?;
        if let Some(message) = command.invalid_message() {
            anyhow::bail!("Invalid WHERE clause: {}", message);
        }
        Ok(command)
    }

    /// Parse and validate a filter JSON file, returning a short summary
    pub fn check_file(&self, path: &Path) -> Result<String> {
        let json = read_text(&expand_path(&path.to_string_lossy()))?;
        self.check_json(&json)
    }

    /// Parse and validate a filter JSON document, returning a short summary
    pub fn check_json(&self, json: &str) -> Result<String> {
        let parsed = filters::parse_filters(json)?;
        let mut lines = Vec::with_capacity(parsed.len() + 1);
        for filter in &parsed {
            let active = filter.active_items().count();
            lines.push(format!(
                "  {} ({}): {} selected{}",
                filter.display_name(),
                filter.field_name()?,
                active,
                if filter.is_required() { ", required" } else { "" }
            ));
        }
        lines.insert(0, format!("{} filter(s) OK", parsed.len()));
        Ok(lines.join("\n"))
    }
}
