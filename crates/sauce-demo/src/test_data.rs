// Test data - Sauce Demo accounts

use playwright_rs_session::User;

/// Password shared by every Sauce Demo account.
pub const SAUCE_DEMO_PASSWORD: &str = "secret_sauce";

pub fn standard_user() -> User {
    User::new("standard_user", SAUCE_DEMO_PASSWORD)
}

pub fn visual_user() -> User {
    User::new("visual_user", SAUCE_DEMO_PASSWORD)
}

pub fn invalid_user() -> User {
    User::new("invalid_user", "invalid_password")
}

/// Accounts that can log in; each gets a stored session.
pub fn valid_users() -> Vec<User> {
    vec![standard_user(), visual_user()]
}

/// Looks up a valid account by username.
pub fn valid_user(username: &str) -> Option<User> {
    valid_users().into_iter().find(|user| user.username == username)
}
