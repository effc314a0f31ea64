//! Command-line front end for the user field validator.
//!
//! # Usage
//!
//! ```bash
//! # Check a nickname against a list of taken ones
//! cargo run -- nickname john_doe --existing alice,bob
//!
//! # Check a password (prompts with hidden input when omitted)
//! cargo run -- password
//!
//! # Check a profile URL
//! cargo run -- url https://github.com/johndoe
//!
//! # Check an update body
//! cargo run -- payload '{"nickname": "abc"}'
//!
//! # Check a full create request stored in a file
//! cargo run -- user ./new_user.json --existing-file ./nicknames.txt
//!
//! # Machine-readable error output
//! cargo run -- --json nickname "John Doe"
//! ```
//!
//! # Exit codes
//!
//! - `0` input accepted
//! - `1` input rejected
//! - `2` usage, I/O or configuration error
//!
//! # Environment Variables
//!
//! See [`user_validation::config`]. A `.env` file is loaded when present.

use user_validation::api::dto::UserCreateRequest;
use user_validation::application::services::UserValidationService;
use user_validation::config::{self, Config};
use user_validation::domain::entities::{Email, ProfileUrl, UpdatePayload};
use user_validation::error::{ErrorBody, FieldError};
use user_validation::infrastructure::persistence::InMemoryNicknameRepository;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Password;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Validate user account fields.
#[derive(Parser)]
#[command(name = "user-validation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Nicknames already in use, from the command line and/or a file.
#[derive(Args, Default)]
struct ExistingNicknames {
    /// Comma-separated nicknames already taken
    #[arg(long, value_delimiter = ',')]
    existing: Vec<String>,

    /// File with one taken nickname per line
    #[arg(long)]
    existing_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a nickname
    Nickname {
        value: String,

        #[command(flatten)]
        existing: ExistingNicknames,

        /// Compare against taken nicknames ignoring case
        #[arg(long)]
        ignore_case: bool,
    },

    /// Validate password complexity
    Password {
        /// Password to check; prompted for when omitted
        value: Option<String>,
    },

    /// Validate a profile URL
    Url { value: String },

    /// Validate an email address
    Email { value: String },

    /// Validate a JSON update body
    Payload {
        /// JSON object, e.g. '{"nickname": "abc"}'
        body: String,

        #[command(flatten)]
        existing: ExistingNicknames,
    },

    /// Validate a JSON create request read from a file
    User {
        path: PathBuf,

        #[command(flatten)]
        existing: ExistingNicknames,
    },

    /// Suggest a free nickname
    Suggest {
        #[command(flatten)]
        existing: ExistingNicknames,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let json = cli.json;

    match cli.command {
        Commands::Nickname {
            value,
            existing,
            ignore_case,
        } => {
            let mut config = config;
            config.nickname_case_insensitive |= ignore_case;
            let service = build_service(&existing, &config)?;
            Ok(report(json, service.validate_nickname(&value)))
        }
        Commands::Password { value } => {
            let value = match value {
                Some(v) => v,
                None => Password::new().with_prompt("Password").interact()?,
            };
            let service = build_service(&ExistingNicknames::default(), &config)?;
            Ok(report(json, service.validate_password(&value).map(|()| serde_json::Value::Null)))
        }
        Commands::Url { value } => Ok(report(
            json,
            ProfileUrl::parse(&value).map_err(|e| FieldError::new("url", e)),
        )),
        Commands::Email { value } => Ok(report(
            json,
            Email::parse(&value).map_err(|e| FieldError::new("email", e)),
        )),
        Commands::Payload { body, existing } => {
            let payload: UpdatePayload =
                serde_json::from_str(&body).context("Payload must be a JSON object")?;
            let service = build_service(&existing, &config)?;
            Ok(report(json, service.validate_update_payload(&payload)))
        }
        Commands::User { path, existing } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let request: UserCreateRequest = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a valid create request", path.display()))?;
            let service = build_service(&existing, &config)?;
            Ok(report(json, service.validate_create(&request)))
        }
        Commands::Suggest { existing } => {
            let service = build_service(&existing, &config)?;
            match service.suggest_nickname() {
                Some(nickname) => {
                    if json {
                        println!("{}", serde_json::json!({ "nickname": nickname }));
                    } else {
                        println!("{}", nickname.as_str().bright_green().bold());
                    }
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("{}", "No free nickname found, try again".yellow());
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_service(
    existing: &ExistingNicknames,
    config: &Config,
) -> Result<UserValidationService<InMemoryNicknameRepository>> {
    let mut nicknames = existing.existing.clone();

    if let Some(path) = &existing.existing_file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        nicknames.extend(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    let case = config.nickname_policy().case;
    let repository = Arc::new(InMemoryNicknameRepository::with_nicknames(case, nicknames));

    Ok(UserValidationService::from_config(repository, config))
}

/// Prints the outcome and maps it to an exit code.
fn report<T: Serialize>(json: bool, result: Result<T, FieldError>) -> ExitCode {
    match result {
        Ok(value) => {
            if json {
                println!("{}", serde_json::json!({ "valid": true, "value": value }));
            } else {
                println!("{}", "✅ Valid".green().bold());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if json {
                let body = ErrorBody::from(&err);
                match serde_json::to_string_pretty(&body) {
                    Ok(text) => println!("{text}"),
                    Err(_) => println!("{err}"),
                }
            } else {
                println!("{} {}", "❌".red(), err.to_string().red());
                println!("   {} {}", "code:".bright_white(), err.code().cyan());
            }
            ExitCode::FAILURE
        }
    }
}
