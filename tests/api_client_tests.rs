// tests/api_client_tests.rs - HttpApi against a local mock backend
//
// Spins up a throwaway actix-web server on an ephemeral port that records
// what it receives. Requires the `ssr` feature for actix-web.

use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use urban_wheel::web_app::api::{HttpApi, StorefrontApi};
use urban_wheel::web_app::cart::{self, CartStatus};
use urban_wheel::web_app::error::ApiError;
use urban_wheel::web_app::model::{CartRequest, ContactMessage, ProductId, ProductType};

/// What the mock backend has seen
#[derive(Default)]
struct Recorded {
    fail: bool,
    queries: Mutex<Vec<String>>,
    carts: Mutex<Vec<serde_json::Value>>,
    contacts: Mutex<Vec<ContactMessage>>,
}

async fn products(req: HttpRequest, state: web::Data<Recorded>) -> HttpResponse {
    if let Ok(mut queries) = state.queries.lock() {
        queries.push(req.query_string().to_string());
    }
    if state.fail {
        return HttpResponse::InternalServerError().body("catalog offline");
    }

    HttpResponse::Ok().json(json!([
        {
            "id": 1,
            "name": "Speckled Mug",
            "type": "mug",
            "price": "24.00",
            "image": "/img/speckled-mug.jpg",
            "description": "Stoneware with a speckled glaze"
        },
        {
            "name": "Alba Bowl",
            "type": "bowl",
            "price": 30,
            "image": "/img/alba-bowl.jpg"
        }
    ]))
}

async fn cart_add(body: web::Json<serde_json::Value>, state: web::Data<Recorded>) -> HttpResponse {
    if let Ok(mut carts) = state.carts.lock() {
        carts.push(body.into_inner());
    }
    if state.fail {
        return HttpResponse::ServiceUnavailable().finish();
    }
    HttpResponse::Ok().json(json!({ "ok": true }))
}

async fn contact(body: web::Json<ContactMessage>, state: web::Data<Recorded>) -> HttpResponse {
    if let Ok(mut contacts) = state.contacts.lock() {
        contacts.push(body.into_inner());
    }
    if state.fail {
        return HttpResponse::InternalServerError().finish();
    }
    HttpResponse::Created().finish()
}

/// Start the mock backend; returns its base URL and the recorder
fn start_backend(fail: bool) -> anyhow::Result<(String, web::Data<Recorded>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let recorded = web::Data::new(Recorded {
        fail,
        ..Recorded::default()
    });

    let data = recorded.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/products", web::get().to(products))
            .route("/cart/add", web::post().to(cart_add))
            .route("/contact", web::post().to(contact))
    })
    .workers(1)
    .listen(listener)?
    .run();
    actix_web::rt::spawn(server);

    Ok((format!("http://{}", addr), recorded))
}

#[actix_web::test]
async fn test_products_query_is_passed_through() {
    let (base_url, recorded) = start_backend(false).expect("mock backend");
    let api = HttpApi::with_base_url(base_url);

    let products = api
        .fetch_products("?type=vase&min_price=20&max_price=50")
        .await
        .expect("products");

    assert_eq!(
        *recorded.queries.lock().unwrap(),
        ["type=vase&min_price=20&max_price=50"]
    );
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Speckled Mug");
    assert_eq!(products[0].id, Some(ProductId::Number(1)));
    assert_eq!(products[0].price_display(), "$24.00");
    assert_eq!(products[1].product_type, ProductType::Bowl);
    assert_eq!(products[1].description, "");
}

#[actix_web::test]
async fn test_unfiltered_request_has_no_query() {
    let (base_url, recorded) = start_backend(false).expect("mock backend");
    let api = HttpApi::with_base_url(format!("{}/", base_url));

    api.fetch_products("").await.expect("products");

    assert_eq!(*recorded.queries.lock().unwrap(), [""]);
}

#[actix_web::test]
async fn test_server_error_keeps_status_and_body() {
    let (base_url, _recorded) = start_backend(true).expect("mock backend");
    let api = HttpApi::with_base_url(base_url);

    let err = api.fetch_products("").await.unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "catalog offline");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_cart_body_shape() {
    let (base_url, recorded) = start_backend(false).expect("mock backend");
    let api = HttpApi::with_base_url(base_url);

    api.add_to_cart(&CartRequest {
        product_id: ProductId::Text("temp".to_string()),
        quantity: 2,
    })
    .await
    .expect("cart add");

    assert_eq!(
        *recorded.carts.lock().unwrap(),
        [json!({ "product_id": "temp", "quantity": 2 })]
    );
}

#[actix_web::test]
async fn test_cart_failure_is_masked_by_action() {
    let (base_url, recorded) = start_backend(true).expect("mock backend");
    let api = HttpApi::with_base_url(base_url);
    let mug = serde_json::from_value(json!({
        "name": "Speckled Mug",
        "type": "mug",
        "price": 24,
        "image": "/img/speckled-mug.jpg"
    }))
    .expect("product");

    let status = cart::add_to_cart(&api, &mug, 1).await;

    assert_eq!(status, CartStatus::AddedLocally);
    assert_eq!(recorded.carts.lock().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_contact_body_is_sent_verbatim() {
    let (base_url, recorded) = start_backend(false).expect("mock backend");
    let api = HttpApi::with_base_url(base_url);
    let message = ContactMessage {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "Do you take commissions?".to_string(),
    };

    api.send_contact(&message).await.expect("contact");

    assert_eq!(*recorded.contacts.lock().unwrap(), [message]);
}

#[actix_web::test]
async fn test_unreachable_backend_is_request_error() {
    // Reserve a port, then close it so nothing is listening
    let addr = TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("ephemeral port");
    let api = HttpApi::with_base_url(format!("http://{}", addr));

    let err = api.fetch_products("").await.unwrap_err();

    assert!(matches!(err, ApiError::Request(_)), "got {:?}", err);
}
