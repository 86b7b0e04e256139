use food_catalog::catalog::{CatalogError, CatalogService, HttpCatalogService};
use food_catalog::model::{CategoryId, FavoriteRef, FoodId, Order, OrderId};
use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use std::time::Duration;

fn service(server: &MockServer) -> HttpCatalogService {
    HttpCatalogService::new(server.base_url(), Duration::from_secs(2)).unwrap()
}

fn pizza() -> serde_json::Value {
    json!({
        "id": 3,
        "name": "Pizza",
        "description": "Tomato, mozzarella and basil",
        "price": 30.0,
        "category": 2,
        "thumbnail_url": "https://storage.example.com/foods/pizza-thumb.png"
    })
}

#[tokio::test]
async fn test_list_categories() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/categories");
            then.status(200).json_body(json!([
                { "id": 1, "title": "Pasta", "image_url": "https://storage.example.com/pasta.png" },
                { "id": 2, "title": "Pizza", "image_url": "https://storage.example.com/pizza.png" }
            ]));
        })
        .await;

    let categories = service(&server).list_categories().await.unwrap();

    mock.assert_async().await;
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].id, CategoryId(2));
    assert_eq!(categories[1].title, "Pizza");
}

#[tokio::test]
async fn test_list_foods_filters_by_category() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/foods").query_param("category_like", "2");
            then.status(200).json_body(json!([pizza()]));
        })
        .await;

    let foods = service(&server).list_foods(Some(CategoryId(2))).await.unwrap();

    mock.assert_async().await;
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].category_id, CategoryId(2));
    assert_eq!(foods[0].price, Decimal::from(30));
}

#[tokio::test]
async fn test_search_foods_sends_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/foods").query_param("name", "Pizza");
            then.status(200).json_body(json!([pizza()]));
        })
        .await;

    let foods = service(&server).search_foods("Pizza").await.unwrap();

    mock.assert_async().await;
    assert_eq!(foods[0].name, "Pizza");
}

#[tokio::test]
async fn test_food_detail_with_extras() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/foods/3").query_param_exists("extras");
            then.status(200).json_body(json!({
                "id": 3,
                "name": "Pizza",
                "description": "Tomato, mozzarella and basil",
                "price": 30.0,
                "category": 2,
                "image_url": "https://storage.example.com/foods/pizza.png",
                "thumbnail_url": "https://storage.example.com/foods/pizza-thumb.png",
                "extras": [
                    { "id": 4, "name": "Olives", "value": 5.0 },
                    { "id": 5, "name": "Oregano", "value": 3.0 }
                ]
            }));
        })
        .await;

    let detail = service(&server).food_detail(FoodId(3)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(detail.extras.len(), 2);
    assert_eq!(detail.extras[0].unit_value, Decimal::from(5));
    assert!(detail.extras.iter().all(|extra| extra.quantity == 0));
}

#[tokio::test]
async fn test_missing_food_is_a_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/foods/99");
            then.status(404).json_body(json!({}));
        })
        .await;

    let err = service(&server).food_detail(FoodId(99)).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_favorites_round_trip_paths() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/favorites")
                .header("content-type", "application/json")
                .body_contains("\"image_url\":\"https://storage.example.com/foods/pizza.png\"");
            then.status(201).json_body(json!({}));
        })
        .await;
    let remove = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/favorites/3");
            then.status(200).json_body(json!({}));
        })
        .await;

    let favorite = FavoriteRef {
        id: FoodId(3),
        name: "Pizza".into(),
        description: "Tomato, mozzarella and basil".into(),
        price: Decimal::from(30),
        category: CategoryId(2),
        image_url: "https://storage.example.com/foods/pizza.png".into(),
        thumbnail_url: "https://storage.example.com/foods/pizza-thumb.png".into(),
    };
    let catalog = service(&server);
    catalog.add_favorite(&favorite).await.unwrap();
    catalog.remove_favorite(FoodId(3)).await.unwrap();

    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_rejected_order_reports_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/orders").body_contains("\"product_id\":3");
            then.status(500);
        })
        .await;

    let order = Order {
        id: OrderId::new_v4(),
        product_id: FoodId(3),
        name: "Pizza".into(),
        description: "Tomato, mozzarella and basil".into(),
        price: Decimal::from(70),
        category: CategoryId(2),
        quantity: 2,
        thumbnail_url: "https://storage.example.com/foods/pizza-thumb.png".into(),
        extras: Vec::new(),
    };
    let err = service(&server).create_order(&order).await.unwrap_err();

    mock.assert_async().await;
    match err {
        CatalogError::Status { endpoint, status } => {
            assert_eq!(endpoint, "POST /orders");
            assert_eq!(status, 500);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let catalog = HttpCatalogService::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
    let err = catalog.list_categories().await.unwrap_err();
    assert!(matches!(err, CatalogError::Transport(_)));
}
