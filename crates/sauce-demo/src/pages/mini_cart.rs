// MiniCart - struct-style header cart object

use super::functions::mini_cart;
use crate::error::Result;
use crate::page_context::PageContext;

#[derive(Debug, Clone)]
pub struct MiniCart {
    ctx: PageContext,
}

impl MiniCart {
    pub fn new(ctx: &PageContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn verify_mini_cart_count(&self, expected_count: &str) -> Result<()> {
        mini_cart::verify_mini_cart_count(&self.ctx, expected_count).await
    }
}
