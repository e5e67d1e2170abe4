// Page objects
//
// Two flavours of the same pages: struct-style (`LoginPage`, `ProductsPage`,
// `MiniCart`) holding their PageContext, and function-style modules under
// `functions` taking the context per call.

pub mod functions;
mod login;
mod mini_cart;
mod products;

pub use login::LoginPage;
pub use mini_cart::MiniCart;
pub use products::ProductsPage;
