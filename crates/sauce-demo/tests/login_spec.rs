// Login specs - struct-style page objects
//
// Tests cover:
// - Valid credentials reach the products page
// - Invalid credentials show the error message
// - The inventory page bounces anonymous users to login
// - Adding products updates the mini cart
// - Failed and soft assertions fail the test
//
// Every test drives Chromium against the local mock storefront.

mod common;

use sauce_demo::test_data::{invalid_user, standard_user, valid_users};
use sauce_demo::{Error, ExpectOptions, Fixtures};
use test_server::TestServer;

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn should_login_with_valid_credentials() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;

    let fixtures = Fixtures::builder("should login with valid credentials")
        .config(common::local_config(&server.url(), storage.path()))
        .empty_storage_state()
        .launch()
        .await?;

    fixtures
        .run(|ctx| async move {
            let login = ctx.login_page();
            login.navigate_to_sauce_demo_login_page().await?;
            login.login_as_standard_user().await?;
            ctx.products_page().verify_products_page_is_displayed().await
        })
        .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn should_not_login_with_invalid_credentials() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;

    let fixtures = Fixtures::builder("should not login with invalid credentials")
        .config(common::local_config(&server.url(), storage.path()))
        .empty_storage_state()
        .launch()
        .await?;

    fixtures
        .run(|ctx| async move {
            let login = ctx.login_page();
            login.navigate_to_sauce_demo_login_page().await?;
            login.login_with_invalid_credentials(&invalid_user()).await?;
            login.verify_login_page_is_displayed().await?;
            ctx.products_page().verify_products_page_is_not_displayed().await
        })
        .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn should_redirect_anonymous_user_to_login() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;

    let fixtures = Fixtures::builder("should redirect anonymous user to login")
        .config(common::local_config(&server.url(), storage.path()))
        .empty_storage_state()
        .launch()
        .await?;

    fixtures
        .run(|ctx| async move {
            let login = ctx.login_page();
            login.navigate_to_sauce_demo_inventory_page().await?;
            login.verify_login_page_is_displayed().await?;
            ctx.products_page().verify_products_page_is_not_displayed().await
        })
        .await?;

    server.shutdown();
    Ok(())
}

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn should_add_products_for_every_user() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;

    for user in valid_users() {
        let fixtures = Fixtures::builder(format!("should add products as {}", user.username))
            .config(common::local_config(&server.url(), storage.path()))
            .empty_storage_state()
            .launch()
            .await?;

        fixtures
            .run(|ctx| async move {
                let login = ctx.login_page();
                login.navigate_to_sauce_demo_login_page().await?;
                login.login_with_valid_credentials(&user).await?;

                let products = ctx.products_page();
                products.add_to_cart_by_product_number(1).await?;
                ctx.mini_cart_page().verify_mini_cart_count("1").await?;
                products.add_to_cart_by_product_number(3).await?;
                ctx.mini_cart_page().verify_mini_cart_count("2").await
            })
            .await?;
    }

    server.shutdown();
    Ok(())
}

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn failed_assertion_fails_the_test() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;

    let fixtures = Fixtures::builder("products on the login page")
        .config(common::local_config(&server.url(), storage.path()))
        .empty_storage_state()
        .launch()
        .await?;

    let result = fixtures
        .run(|ctx| async move {
            ctx.login_page().navigate_to_sauce_demo_login_page().await?;
            ctx.products_page().verify_products_page_is_displayed().await
        })
        .await;

    match result {
        Err(Error::Assertion { message, .. }) => {
            assert!(message.starts_with("Logged in user should see Products"));
        }
        other => panic!("expected an assertion failure, got {other:?}"),
    }

    server.shutdown();
    Ok(())
}

#[tokio::test]
#[ignore = "Requires Playwright browsers (npx playwright install chromium)"]
async fn soft_assertion_fails_at_finish() -> anyhow::Result<()> {
    common::init_tracing();
    let server = TestServer::start().await;
    let storage = tempfile::tempdir()?;

    let fixtures = Fixtures::builder("soft assertion on the login page")
        .config(common::local_config(&server.url(), storage.path()))
        .empty_storage_state()
        .launch()
        .await?;

    let result = fixtures
        .run(|ctx| async move {
            ctx.login_page().navigate_to_sauce_demo_login_page().await?;
            sauce_demo::assertions::expect_element_to_be_visible(
                &ctx,
                "#inventory_container",
                ExpectOptions::new()
                    .timeout(std::time::Duration::from_millis(500))
                    .message("Products should show")
                    .soft(true),
            )
            .await?;
            // Still runs after the soft failure
            ctx.login_page().login_with_valid_credentials(&standard_user()).await
        })
        .await;

    match result {
        Err(Error::SoftAssertions(failures)) => {
            assert_eq!(failures.len(), 1);
            assert!(failures[0].starts_with("Products should show"));
        }
        other => panic!("expected soft assertion failures, got {other:?}"),
    }

    server.shutdown();
    Ok(())
}
