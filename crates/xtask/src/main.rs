//! Developer tasks for the Sauce Demo suite
//!
//! ```text
//! cargo xtask sessions setup [--user NAME]...
//! cargo xtask sessions check [--user NAME]... [--cookie-name NAME] [--domain D] [--path P]
//!                            [--threshold SECS] [--exact]
//! cargo xtask sessions path NAME
//! ```
//!
//! Settings come from the same environment variables as the specs (`URL`,
//! `STORAGE_STATE_PATH`, `HEADED`, ...).

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use playwright_rs_session::{User, ValidationOptions, is_user_storage_state_valid};
use sauce_demo::test_data::{valid_user, valid_users};
use sauce_demo::{SetupOutcome, TestConfig, save_login_storage_for_all};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Developer tasks for the Sauce Demo suite", long_about = None)]
struct Cli {
    /// Directory holding stored sessions (overrides STORAGE_STATE_PATH)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Application base URL (overrides URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage stored login sessions
    #[command(subcommand)]
    Sessions(SessionCommands),
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Log in and save a session for every user without a valid one
    Setup {
        /// Limit to these users (default: all valid users)
        #[arg(long = "user")]
        users: Vec<String>,
    },

    /// Report whether each user's stored session is still usable
    Check(CheckArgs),

    /// Print where a user's session is stored
    Path {
        /// Username
        name: String,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Limit to these users (default: all valid users)
    #[arg(long = "user")]
    users: Vec<String>,

    /// Session cookie name (substring match unless --exact)
    #[arg(long)]
    cookie_name: Option<String>,

    /// Required cookie domain
    #[arg(long)]
    domain: Option<String>,

    /// Required cookie path
    #[arg(long)]
    path: Option<String>,

    /// Minimum remaining lifetime in seconds
    #[arg(long, value_name = "SECS")]
    threshold: Option<u64>,

    /// Match the cookie name exactly
    #[arg(long)]
    exact: bool,
}

impl CheckArgs {
    fn validation_options(&self) -> ValidationOptions {
        let mut options = ValidationOptions::new().exact(self.exact);
        if let Some(name) = &self.cookie_name {
            options = options.cookie_name(name);
        }
        if let Some(domain) = &self.domain {
            options = options.domain(domain);
        }
        if let Some(path) = &self.path {
            options = options.path(path);
        }
        if let Some(secs) = self.threshold {
            options = options.expiration_threshold(Duration::from_secs(secs));
        }
        options
    }
}

fn select_users(names: &[String]) -> Result<Vec<User>> {
    if names.is_empty() {
        return Ok(valid_users());
    }
    names
        .iter()
        .map(|name| valid_user(name).with_context(|| format!("Unknown user: {name}")))
        .collect()
}

fn describe_outcome(username: &str, outcome: &SetupOutcome) -> String {
    match outcome {
        SetupOutcome::Skipped => format!("{username}: session still valid"),
        SetupOutcome::Saved(path) => format!("{username}: saved {}", path.display()),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    sauce_demo::logging::init();

    let mut config = TestConfig::from_env();
    if let Some(dir) = cli.storage_dir {
        config = config.with_storage_dir(dir);
    }
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }

    match cli.command {
        Commands::Sessions(SessionCommands::Setup { users }) => {
            let users = select_users(&users)?;
            let outcomes = save_login_storage_for_all(&config, &users)
                .await
                .context("Login storage setup failed")?;
            for (username, outcome) in &outcomes {
                tracing::info!("{}", describe_outcome(username, outcome));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Sessions(SessionCommands::Check(args)) => {
            let users = select_users(&args.users)?;
            let options = args.validation_options();
            let mut all_valid = true;
            for user in &users {
                let valid = is_user_storage_state_valid(config.session(), user, &options);
                all_valid &= valid;
                if !valid {
                    tracing::warn!("Stored session for {} must be regenerated", user.username);
                }
                println!(
                    "{}: {} ({})",
                    user.username,
                    if valid { "valid" } else { "invalid" },
                    config.session().user_auth_path(user).display()
                );
            }
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Sessions(SessionCommands::Path { name }) => {
            if name.trim().is_empty() {
                bail!("Username must not be empty");
            }
            println!("{}", config.session().user_auth_path(&name).display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_args_map_to_options() {
        let cli = Cli::parse_from([
            "xtask",
            "sessions",
            "check",
            "--user",
            "standard_user",
            "--cookie-name",
            "session-username",
            "--threshold",
            "300",
            "--exact",
        ]);
        let Commands::Sessions(SessionCommands::Check(args)) = cli.command else {
            panic!("expected sessions check");
        };
        assert_eq!(args.users, vec!["standard_user".to_string()]);

        let filter = args
            .validation_options()
            .resolve(&playwright_rs_session::SessionConfig::default());
        assert_eq!(filter.cookie_name, "session-username");
        assert_eq!(filter.expiration_threshold, Duration::from_secs(300));
        assert!(filter.exact);
        assert_eq!(filter.path, "/");
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(
            describe_outcome("standard_user", &SetupOutcome::Skipped),
            "standard_user: session still valid"
        );
        assert_eq!(
            describe_outcome(
                "visual_user",
                &SetupOutcome::Saved(PathBuf::from("playwright/.auth/visual_user.json"))
            ),
            "visual_user: saved playwright/.auth/visual_user.json"
        );
    }

    #[test]
    fn test_select_users() {
        assert_eq!(select_users(&[]).unwrap().len(), 2);
        assert!(select_users(&["nobody".to_string()]).is_err());
    }
}
