// Products (inventory) page

use crate::actions::{click, get_locator};
use crate::assertions::{ExpectOptions, expect_element_to_be_hidden, expect_element_to_be_visible};
use crate::error::Result;
use crate::page_context::PageContext;
use playwright_rs::Locator;
use std::time::Duration;

pub const PRODUCTS_CONTAINER: &str = "#inventory_container";

/// "Add to cart" button of the `product_no`-th (1-based) inventory item.
pub fn add_to_cart_button(product_no: usize) -> String {
    format!(
        "xpath=(//*[@class='inventory_item'])[{product_no}]//*[contains(@id,'add-to-cart')]"
    )
}

async fn products_container(ctx: &PageContext) -> Locator {
    get_locator(ctx, PRODUCTS_CONTAINER).await.nth(0)
}

pub async fn verify_products_page_is_displayed(ctx: &PageContext) -> Result<()> {
    let container = products_container(ctx).await;
    expect_element_to_be_visible(
        ctx,
        container,
        ExpectOptions::new()
            .timeout(Duration::from_secs(1))
            .message("Logged in user should see Products"),
    )
    .await
}

pub async fn verify_products_page_is_not_displayed(ctx: &PageContext) -> Result<()> {
    let container = products_container(ctx).await;
    expect_element_to_be_hidden(ctx, container, "Products should not be displayed").await
}

pub async fn add_to_cart_by_product_number(ctx: &PageContext, product_no: usize) -> Result<()> {
    click(ctx, add_to_cart_button(product_no)).await
}
