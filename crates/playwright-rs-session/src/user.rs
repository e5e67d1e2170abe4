// User identity and the per-user storage path

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Login credentials. The username doubles as the key of the stored session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Anything that identifies a stored session: a [`User`] or a bare username.
pub trait Username {
    fn username(&self) -> &str;
}

impl Username for User {
    fn username(&self) -> &str {
        &self.username
    }
}

impl Username for str {
    fn username(&self) -> &str {
        self
    }
}

impl Username for String {
    fn username(&self) -> &str {
        self
    }
}

impl<T: Username + ?Sized> Username for &T {
    fn username(&self) -> &str {
        (**self).username()
    }
}

/// Returns `<storage_dir>/<username>.json`.
///
/// Pure path arithmetic; the file is not touched.
pub fn user_auth_path(storage_dir: impl AsRef<Path>, user: &(impl Username + ?Sized)) -> PathBuf {
    storage_dir
        .as_ref()
        .join(format!("{}.json", user.username()))
}
