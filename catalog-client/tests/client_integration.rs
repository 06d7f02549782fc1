// catalog-client/tests/client_integration.rs
// 集成测试: in-process catalog API served by axum

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use catalog_client::{CatalogClient, ClientConfig, ClientError, ProductCreate, ProductUpdate};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Recorded {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn list() -> Json<Value> {
    Json(json!([
        {"id": 1, "title": "Milk", "price": 3, "description": "Fresh milk",
         "category": {"id": 1, "name": "Grocery"}, "images": ["https://img/milk.png"]},
        {"id": 2, "title": "Bread", "price": 2.5, "description": "Rye bread"}
    ]))
}

async fn update(
    State(rec): State<Recorded>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    rec.calls.lock().unwrap().push((format!("PUT {id}"), body.clone()));
    (StatusCode::OK, Json(body))
}

async fn create(State(rec): State<Recorded>, Json(body): Json<Value>) -> StatusCode {
    rec.calls.lock().unwrap().push(("POST".to_string(), body));
    StatusCode::CREATED
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1/products")
}

async fn catalog_server() -> (String, Recorded) {
    let rec = Recorded::default();
    let app = Router::new()
        .route("/api/v1/products", get(list).post(create))
        .route("/api/v1/products/{id}", put(update))
        .with_state(rec.clone());
    (spawn(app).await, rec)
}

#[tokio::test]
async fn test_fetch_all() {
    let (endpoint, _) = catalog_server().await;
    let catalog = ClientConfig::new(endpoint).build_catalog().unwrap();

    let products = catalog.fetch_all().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Milk");
    assert_eq!(products[0].category_name(), Some("Grocery"));
    assert_eq!(products[1].price, Some(2.5));
    assert!(products[1].category.is_none());
}

#[tokio::test]
async fn test_update_sends_put_with_fields() {
    let (endpoint, rec) = catalog_server().await;
    let catalog = ClientConfig::new(endpoint).build_catalog().unwrap();

    let fields = ProductUpdate {
        title: "Whole Milk".into(),
        price: 4.0,
        description: "Fresh whole milk".into(),
    };
    catalog.update(1, &fields).await.unwrap();

    let calls = rec.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "PUT 1");
    assert_eq!(
        calls[0].1,
        json!({"title": "Whole Milk", "price": 4.0, "description": "Fresh whole milk"})
    );
}

#[tokio::test]
async fn test_create_sends_post_with_category_id() {
    let (endpoint, rec) = catalog_server().await;
    let catalog = ClientConfig::new(endpoint).build_catalog().unwrap();

    let fields = ProductCreate {
        title: "Lamp".into(),
        price: 25.0,
        description: "Warm desk lamp".into(),
        category_id: 3,
        images: vec!["https://img/lamp.png".into()],
    };
    catalog.create(&fields).await.unwrap();

    let calls = rec.calls.lock().unwrap();
    assert_eq!(calls[0].0, "POST");
    assert_eq!(calls[0].1["categoryId"], 3);
    assert_eq!(calls[0].1["images"], json!(["https://img/lamp.png"]));
}

#[tokio::test]
async fn test_error_status_mapping() {
    let app = Router::new()
        .route(
            "/api/v1/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") })
                .post(|| async { (StatusCode::BAD_REQUEST, "price must be positive") }),
        )
        .route(
            "/api/v1/products/{id}",
            put(|| async { (StatusCode::NOT_FOUND, "no such product") }),
        );
    let endpoint = spawn(app).await;
    let catalog = ClientConfig::new(endpoint).build_catalog().unwrap();

    let err = catalog.fetch_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));

    let update = ProductUpdate {
        title: "Milk".into(),
        price: 3.0,
        description: "Fresh milk".into(),
    };
    let err = catalog.update(42, &update).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref msg) if msg == "no such product"));

    let create = ProductCreate {
        title: "Lamp".into(),
        price: 25.0,
        description: "Warm desk lamp".into(),
        category_id: 1,
        images: vec![],
    };
    let err = catalog.create(&create).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_invalid_json_is_serialization_error() {
    let app = Router::new().route("/api/v1/products", get(|| async { "not json" }));
    let endpoint = spawn(app).await;
    let catalog = ClientConfig::new(endpoint).build_catalog().unwrap();

    let err = catalog.fetch_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = ClientConfig::new(format!("http://{addr}/products"))
        .with_timeout(2)
        .build_catalog()
        .unwrap();
    let err = catalog.fetch_all().await.unwrap_err();
    assert!(err.is_transport());
}
