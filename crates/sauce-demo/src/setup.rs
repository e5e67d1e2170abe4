// Login storage setup - log each user in once and save their session
//
// Runs before the specs. A user whose stored session still validates is
// skipped; otherwise a fresh anonymous browser logs in through the login page
// and the context's storage state is written to the user's auth path.

use crate::config::TestConfig;
use crate::error::{Error, Result};
use crate::fixtures::Fixtures;
use crate::pages::functions::login;
use playwright_rs_session::{User, ValidationOptions, is_user_storage_state_valid};
use std::path::PathBuf;

/// What the setup pass did for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Stored session is still valid
    Skipped,
    /// A new session was saved to this path
    Saved(PathBuf),
}

/// Ensures `user` has a valid stored session.
pub async fn save_login_storage(config: &TestConfig, user: &User) -> Result<SetupOutcome> {
    if is_user_storage_state_valid(config.session(), user, &ValidationOptions::new()) {
        tracing::info!("Skipping login for {}: stored session is valid", user.username);
        return Ok(SetupOutcome::Skipped);
    }

    let path = config.session().user_auth_path(user);
    let fixtures = Fixtures::builder(format!("Save login storage for {}", user.username))
        .config(config.clone())
        .empty_storage_state()
        .launch()
        .await?;

    let ctx = fixtures.ctx().clone();
    let result = async {
        login::navigate_to_sauce_demo_login_page(&ctx).await?;
        login::login_with_valid_credentials(&ctx, user).await?;
        ctx.save_storage_state(&path).await?;
        Ok::<(), Error>(())
    }
    .await;
    fixtures.finish(result).await?;

    Ok(SetupOutcome::Saved(path))
}

/// Runs [`save_login_storage`] for each user in turn, stopping at the first
/// failure.
pub async fn save_login_storage_for_all(
    config: &TestConfig,
    users: &[User],
) -> Result<Vec<(String, SetupOutcome)>> {
    let mut outcomes = Vec::with_capacity(users.len());
    for user in users {
        let outcome = save_login_storage(config, user).await?;
        outcomes.push((user.username.clone(), outcome));
    }
    Ok(outcomes)
}
