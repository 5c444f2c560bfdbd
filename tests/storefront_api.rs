//! HTTP client and controller tests against a mock shop.

use std::cell::RefCell;

use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use testresult::TestResult;

use scoop::prelude::*;

#[derive(Debug, Default)]
struct RecordingPage {
    displays: RefCell<Vec<CartDisplay>>,
    navigations: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
    overlay_opened: RefCell<usize>,
}

impl CartPage for RecordingPage {
    fn show_cart(&self, display: CartDisplay) {
        self.displays.borrow_mut().push(display);
    }

    fn navigate_to(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn open_cart_overlay(&self) {
        *self.overlay_opened.borrow_mut() += 1;
    }
}

fn config(server: &MockServer) -> TestResult<StorefrontConfig> {
    Ok(StorefrontConfig::new(&server.base_url())?.with_csrf_token("token-123"))
}

fn vanilla_items() -> serde_json::Value {
    json!({
        "items": [
            {"id": 1, "name": "Vanilla", "price": 2.50, "quantity": 2, "total": 5.00}
        ],
        "total": 5.00
    })
}

#[tokio::test]
async fn cart_items_are_decoded() -> TestResult {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/cart/items");
        then.status(200).json_body(vanilla_items());
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let items = api.cart_items().await?;

    mock.assert_calls(1);
    assert_eq!(items.len(), 1);

    let item = items.first().ok_or("missing item")?;

    assert_eq!(item.name, "Vanilla");
    assert_eq!(item.quantity, 2);
    assert_eq!(item.total, Decimal::from(5));

    Ok(())
}

#[tokio::test]
async fn cart_items_401_is_unauthorized() -> TestResult {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/cart/items");
        then.status(401);
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let result = api.cart_items().await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));

    Ok(())
}

#[tokio::test]
async fn cart_items_server_error_keeps_status() -> TestResult {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/cart/items");
        then.status(500).body("boom");
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let result = api.cart_items().await;

    assert!(matches!(
        result,
        Err(ApiError::Status { status: 500, ref body }) if body == "boom"
    ));

    Ok(())
}

#[tokio::test]
async fn add_to_cart_sends_token_and_body() -> TestResult {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/cart/add")
            .header("X-CSRFToken", "token-123")
            .json_body(json!({"product_id": 7, "quantity": 1}));
        then.status(200)
            .json_body(json!({"status": "success", "message": "Item added to cart successfully"}));
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let outcome = api.add_to_cart(AddToCart::single(7)).await?;

    mock.assert_calls(1);
    assert_eq!(outcome, CommandOutcome::Applied);

    Ok(())
}

#[tokio::test]
async fn add_to_cart_reads_error_envelope_from_client_error() -> TestResult {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/cart/add");
        then.status(400)
            .json_body(json!({"status": "error", "message": "Not enough stock available"}));
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let outcome = api.add_to_cart(AddToCart::single(7)).await?;

    assert_eq!(
        outcome,
        CommandOutcome::Rejected {
            message: "Not enough stock available".to_string()
        }
    );

    Ok(())
}

#[tokio::test]
async fn remove_with_html_error_page_is_a_failure() -> TestResult {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/cart/remove")
            .json_body(json!({"product_id": 4}));
        then.status(400)
            .header("content-type", "text/html")
            .body("<h1>Bad Request</h1><p>The CSRF token is missing.</p>");
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let result = api.remove_from_cart(4).await;

    assert!(matches!(result, Err(ApiError::Status { status: 400, .. })));

    Ok(())
}

#[tokio::test]
async fn session_cookie_is_forwarded() -> TestResult {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/cart/items")
            .header("cookie", "session=abc");
        then.status(200).json_body(json!({"items": []}));
    });

    let api = HttpStorefrontApi::new(config(&server)?.with_session_cookie("session=abc"));
    let items = api.cart_items().await?;

    mock.assert_calls(1);
    assert!(items.is_empty());

    Ok(())
}

#[tokio::test]
async fn contact_form_posts_flat_fields() -> TestResult {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/contact")
            .json_body(json!({"name": "Asha", "message": "Hello"}));
        then.status(200).json_body(json!({
            "status": "success",
            "message": "Thank you for your message! We will get back to you soon.",
            "timestamp": "2024-05-01 10:00:00"
        }));
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let form = ContactForm::new()
        .with_field("name", "Asha")
        .with_field("message", "Hello");

    let outcome = submit_contact(&api, form).await;

    mock.assert_calls(1);
    assert_eq!(
        outcome,
        ContactOutcome::Sent {
            message: "Thank you for your message! We will get back to you soon.".to_string()
        }
    );

    Ok(())
}

#[tokio::test]
async fn catalog_feeds_category_filter() -> TestResult {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/ice-creams");
        then.status(200).json_body(json!([
            {"id": 1, "name": "Vanilla Bean", "description": "Classic", "price": 80.0,
             "image": "/static/img/vanilla.jpg", "category": "classic", "stock": 40},
            {"id": 2, "name": "Hot Fudge Sundae", "description": null, "price": 150.0,
             "image": null, "category": "sundae", "stock": 12}
        ]));
    });

    let api = HttpStorefrontApi::new(config(&server)?);
    let products = api.catalog().await?;

    let view = filter_by_category(&products, &CategoryFilter::from_token("sundae"));

    assert_eq!(view.visible_ids(), vec![2]);

    Ok(())
}

#[tokio::test]
async fn adding_an_item_refreshes_and_opens_the_cart() -> TestResult {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(POST).path("/api/cart/add");
        then.status(200).json_body(json!({"status": "success"}));
    });
    let items = server.mock(|when, then| {
        when.method(GET).path("/api/cart/items");
        then.status(200).json_body(vanilla_items());
    });

    let config = config(&server)?;
    let controller = CartController::new(
        HttpStorefrontApi::new(config.clone()),
        RecordingPage::default(),
        &config,
    );

    let outcome = controller.add_item(7).await;

    add.assert_calls(1);
    items.assert_calls(1);
    assert_eq!(outcome, MutationOutcome::Applied(RefreshOutcome::Rendered(1)));

    let page = controller.page();
    let displays = page.displays.borrow();
    let Some(CartDisplay::Items(view)) = displays.last() else {
        return Err(format!("unexpected displays: {displays:?}").into());
    };

    assert_eq!(view.total, "5.00");
    assert!(view.checkout_visible);
    assert_eq!(*page.overlay_opened.borrow(), 1);
    assert!(page.notices.borrow().is_empty());

    Ok(())
}

#[tokio::test]
async fn expired_session_redirects_to_login() -> TestResult {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/cart/items");
        then.status(401);
    });

    let config = config(&server)?;
    let controller = CartController::new(
        HttpStorefrontApi::new(config.clone()),
        RecordingPage::default(),
        &config,
    );

    assert_eq!(
        controller.refresh_cart().await,
        RefreshOutcome::RedirectedToLogin
    );

    let page = controller.page();

    assert!(page.displays.borrow().is_empty());
    assert_eq!(
        page.navigations.borrow().as_slice(),
        [server.url("/login")]
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_shop_shows_error_indicator() -> TestResult {
    let config = StorefrontConfig::new("http://127.0.0.1:9")?;
    let controller = CartController::new(
        HttpStorefrontApi::new(config.clone()),
        RecordingPage::default(),
        &config,
    );

    assert_eq!(controller.refresh_cart().await, RefreshOutcome::Failed);
    assert_eq!(
        controller.page().displays.borrow().as_slice(),
        [CartDisplay::load_error()]
    );

    Ok(())
}
