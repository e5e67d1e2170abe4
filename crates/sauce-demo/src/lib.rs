//! sauce-demo-e2e: end-to-end specs for the Sauce Demo storefront
//!
//! Page objects, fixtures and assertion helpers on top of `playwright-rs`,
//! with logged-in sessions reused through `playwright-rs-session`.
//!
//! # Writing a spec
//!
//! ```ignore
//! use sauce_demo::{Fixtures, test_data::standard_user};
//!
//! #[tokio::test]
//! async fn should_add_product_to_cart() -> sauce_demo::Result<()> {
//!     let fixtures = Fixtures::builder("add product to cart")
//!         .user(&standard_user())
//!         .launch()
//!         .await?;
//!
//!     fixtures
//!         .run(|ctx| async move {
//!             ctx.login_page().navigate_to_sauce_demo_inventory_page().await?;
//!             ctx.products_page().add_to_cart_by_product_number(1).await?;
//!             ctx.mini_cart_page().verify_mini_cart_count("1").await
//!         })
//!         .await
//! }
//! ```
//!
//! Specs that start from a stored session need it to exist first; run
//! `cargo xtask sessions setup` (or [`setup::save_login_storage_for_all`]).

pub mod actions;
pub mod assertions;
pub mod config;
mod error;
pub mod fixtures;
pub mod logging;
pub mod page_context;
pub mod pages;
pub mod setup;
pub mod test_data;

pub use assertions::ExpectOptions;
pub use config::{StorageSeed, TestConfig};
pub use error::{Error, Result};
pub use fixtures::{Fixtures, FixturesBuilder};
pub use logging::{TestOutcome, TestReporter};
pub use page_context::{PageContext, SoftAssertions};
pub use pages::{LoginPage, MiniCart, ProductsPage};
pub use setup::{SetupOutcome, save_login_storage, save_login_storage_for_all};
