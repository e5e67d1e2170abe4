// LoginPage - struct-style login page object

use super::functions::login;
use crate::error::Result;
use crate::page_context::PageContext;
use crate::test_data;
use playwright_rs_session::User;

#[derive(Debug, Clone)]
pub struct LoginPage {
    ctx: PageContext,
}

impl LoginPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn navigate_to_sauce_demo_login_page(&self) -> Result<()> {
        login::navigate_to_sauce_demo_login_page(&self.ctx).await
    }

    pub async fn navigate_to_sauce_demo_inventory_page(&self) -> Result<()> {
        login::navigate_to_sauce_demo_inventory_page(&self.ctx).await
    }

    pub async fn login_with_valid_credentials(&self, user: &User) -> Result<()> {
        login::login_with_valid_credentials(&self.ctx, user).await
    }

    /// Logs in as the standard user.
    pub async fn login_as_standard_user(&self) -> Result<()> {
        self.login_with_valid_credentials(&test_data::standard_user())
            .await
    }

    pub async fn login_with_invalid_credentials(&self, user: &User) -> Result<()> {
        login::login_with_invalid_credentials(&self.ctx, user).await
    }

    /// Attempts a login with the known-bad account.
    pub async fn login_with_default_invalid_credentials(&self) -> Result<()> {
        self.login_with_invalid_credentials(&test_data::invalid_user())
            .await
    }

    pub async fn verify_login_page_is_displayed(&self) -> Result<()> {
        login::verify_login_page_is_displayed(&self.ctx).await
    }
}
