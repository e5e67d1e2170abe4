// Mini cart (header cart badge)

use crate::assertions::expect_element_to_have_text;
use crate::error::Result;
use crate::page_context::PageContext;

pub const MINI_CART_COUNT: &str = "xpath=//*[@id='shopping_cart_container']//span";

pub async fn verify_mini_cart_count(ctx: &PageContext, expected_count: &str) -> Result<()> {
    expect_element_to_have_text(
        ctx,
        MINI_CART_COUNT,
        expected_count,
        format!("Mini cart should show {expected_count} item(s)"),
    )
    .await
}
