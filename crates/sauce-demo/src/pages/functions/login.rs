// Login page

use crate::actions::{click, click_and_navigate, fill, goto_url};
use crate::assertions::{expect_element_to_be_attached, expect_element_to_be_visible};
use crate::error::Result;
use crate::page_context::PageContext;
use playwright_rs_session::User;

pub const USER_NAME: &str = "#user-name";
/// Password field by id, falling back to its placeholder
pub const PASSWORD: &str = "#password, input[placeholder=\"Password\"]";
pub const LOGIN_BUTTON: &str = "internal:role=button[name=\"Login\"i]";
pub const LOGOUT_LINK: &str = "#logout_sidebar_link";
pub const ERROR_MESSAGE: &str = "xpath=//*[contains(@class,'error-message')]";

/// Path of the products page, relative to the base URL.
pub const INVENTORY_PATH: &str = "inventory.html";

pub async fn navigate_to_sauce_demo_login_page(ctx: &PageContext) -> Result<()> {
    goto_url(ctx, ctx.config().base_url()).await
}

/// Opens the products page directly; without a session Sauce Demo bounces to login.
pub async fn navigate_to_sauce_demo_inventory_page(ctx: &PageContext) -> Result<()> {
    let url = ctx.config().url_for(INVENTORY_PATH);
    goto_url(ctx, &url).await
}

pub async fn login_with_valid_credentials(ctx: &PageContext, user: &User) -> Result<()> {
    fill(ctx, USER_NAME, &user.username).await?;
    fill(ctx, PASSWORD, &user.password).await?;
    click_and_navigate(ctx, LOGIN_BUTTON).await?;
    expect_element_to_be_attached(ctx, LOGOUT_LINK, "User should be Logged in successfully").await
}

pub async fn login_with_invalid_credentials(ctx: &PageContext, user: &User) -> Result<()> {
    fill(ctx, USER_NAME, &user.username).await?;
    fill(ctx, PASSWORD, &user.password).await?;
    click(ctx, LOGIN_BUTTON).await?;
    expect_element_to_be_visible(
        ctx,
        ERROR_MESSAGE,
        "Error message should be displayed as credentials are invalid",
    )
    .await
}

pub async fn verify_login_page_is_displayed(ctx: &PageContext) -> Result<()> {
    expect_element_to_be_visible(ctx, USER_NAME, "Login page should be displayed").await
}
