// Function-style page objects
//
// Each module keeps its selectors as constants and exposes one async function
// per user-level step. The struct-style page objects in `crate::pages`
// delegate here.

pub mod login;
pub mod mini_cart;
pub mod products;
