// Login storage setup and specs that start from a stored session
//
// Tests cover:
// - The setup pass logs in and writes `<storage_dir>/<username>.json`
// - A second pass skips users whose session is still valid
// - Fixtures seeded with a user's session start logged in
// - Anonymous fixtures stay logged out

mod common;

use playwright_rs_session::{SessionData, ValidationOptions, is_user_storage_state_valid};
use sauce_demo::test_data::{standard_user, valid_users};
use sauce_demo::{Fixtures, SetupOutcome, save_login_storage, save_login_storage_for_all};
use test_server::TestServer;

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn setup_saves_then_skips_valid_sessions() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;
    let config = common::local_config(&server.url(), storage.path());

    let first = save_login_storage_for_all(&config, &valid_users()).await?;
    assert_eq!(first.len(), 2);
    for (username, outcome) in &first {
        let expected = storage.path().join(format!("{username}.json"));
        assert_eq!(outcome, &SetupOutcome::Saved(expected.clone()));

        let session = SessionData::read(&expected)?;
        assert!(session.cookies.iter().any(|c| c.name == "session-username"));
        assert!(
            is_user_storage_state_valid(config.session(), username, &ValidationOptions::new()),
            "fresh session for {username} should validate"
        );
    }

    let second = save_login_storage(&config, &standard_user()).await?;
    assert_eq!(second, SetupOutcome::Skipped);

    server.shutdown();
    Ok(())
}

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn should_start_logged_in_from_storage_state() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;
    let config = common::local_config(&server.url(), storage.path());

    let user = standard_user();
    save_login_storage(&config, &user).await?;

    let fixtures = Fixtures::builder("login using storage state")
        .config(config.clone())
        .user(&user)
        .launch()
        .await?;

    fixtures
        .run(|ctx| async move {
            ctx.login_page().navigate_to_sauce_demo_inventory_page().await?;
            ctx.products_page().verify_products_page_is_displayed().await?;
            ctx.products_page().add_to_cart_by_product_number(1).await?;
            ctx.mini_cart_page().verify_mini_cart_count("1").await
        })
        .await?;

    let anonymous = Fixtures::builder("anonymous user is logged out")
        .config(config)
        .empty_storage_state()
        .launch()
        .await?;

    anonymous
        .run(|ctx| async move {
            ctx.login_page().navigate_to_sauce_demo_inventory_page().await?;
            ctx.products_page().verify_products_page_is_not_displayed().await
        })
        .await?;

    server.shutdown();
    Ok(())
}
