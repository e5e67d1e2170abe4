// ProductsPage - struct-style inventory page object

use super::functions::products;
use crate::error::Result;
use crate::page_context::PageContext;

#[derive(Debug, Clone)]
pub struct ProductsPage {
    ctx: PageContext,
}

impl ProductsPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn verify_products_page_is_displayed(&self) -> Result<()> {
        products::verify_products_page_is_displayed(&self.ctx).await
    }

    pub async fn verify_products_page_is_not_displayed(&self) -> Result<()> {
        products::verify_products_page_is_not_displayed(&self.ctx).await
    }

    /// Adds the `product_no`-th (1-based) listed product to the cart.
    pub async fn add_to_cart_by_product_number(&self, product_no: usize) -> Result<()> {
        products::add_to_cart_by_product_number(&self.ctx, product_no).await
    }
}
