use restaurant::config::{Config, IdStrategy};
use restaurant::dish_actor::DishError;
use restaurant::lifecycle::RestaurantSystem;
use restaurant::model::{DishDraft, DishId, OrderDraft, OrderId, OrderStatus};
use serde_json::{json, Value};

fn sequential_system() -> RestaurantSystem {
    RestaurantSystem::new(&Config {
        id_strategy: IdStrategy::Sequential,
        ..Config::default()
    })
}

fn dish_draft(body: Value) -> DishDraft {
    serde_json::from_value(body).unwrap()
}

fn order_draft(body: Value) -> OrderDraft {
    serde_json::from_value(body).unwrap()
}

fn taco() -> DishDraft {
    dish_draft(json!({
        "name": "Taco",
        "description": "Spicy",
        "price": 5,
        "image_url": "http://x"
    }))
}

fn order_with_status(status: &str) -> OrderDraft {
    order_draft(json!({
        "deliverTo": "123 Main",
        "mobileNumber": "555-1234",
        "status": status,
        "dishes": [{"dishId": "1", "quantity": 2}]
    }))
}

/// Full end-to-end test of the menu with the real Dish actor.
#[tokio::test]
async fn test_dish_lifecycle() {
    let system = sequential_system();
    let dishes = &system.dish_client;

    let created = dishes.create_dish(taco()).await.expect("Failed to create dish");
    assert_eq!(created.id, DishId::from("1"));
    assert_eq!(created.name, "Taco");
    assert_eq!(created.price, 5);

    // Read twice, identical
    let first = dishes.read_dish(created.id.clone()).await.unwrap();
    let second = dishes.read_dish(created.id.clone()).await.unwrap();
    assert_eq!(first, created);
    assert_eq!(first, second);

    // Update replaces every field, id in body may match the route
    let updated = dishes
        .update_dish(
            created.id.clone(),
            dish_draft(json!({
                "id": "1",
                "name": "Burrito",
                "description": "Large",
                "price": 9,
                "image_url": "http://y"
            })),
        )
        .await
        .expect("Failed to update dish");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Burrito");
    assert_eq!(dishes.list_dishes().await.unwrap(), vec![updated]);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_invalid_dish_leaves_menu_unchanged() {
    let system = sequential_system();
    let dishes = &system.dish_client;

    dishes.create_dish(taco()).await.unwrap();

    let err = dishes
        .create_dish(dish_draft(json!({"name": "Taco", "price": 5, "image_url": "http://x"})))
        .await
        .unwrap_err();
    assert_eq!(err, DishError::MissingField("description"));
    assert_eq!(err.to_string(), "Dish must include a description");
    assert_eq!(dishes.list_dishes().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_of_missing_dish_reports_not_found_before_validation() {
    let system = sequential_system();

    let err = system
        .dish_client
        .update_dish(DishId::from("nope"), DishDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err, DishError::NotFound("nope".to_string()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_update_keeps_stored_dish() {
    let system = sequential_system();
    let dishes = &system.dish_client;
    let created = dishes.create_dish(taco()).await.unwrap();

    let err = dishes
        .update_dish(
            created.id.clone(),
            dish_draft(json!({
                "id": "2",
                "name": "Burrito",
                "description": "Large",
                "price": 9,
                "image_url": "http://y"
            })),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dish id does not match route id. Dish: 2, Route: 1"
    );
    assert_eq!(dishes.read_dish(created.id).await.unwrap().name, "Taco");

    system.shutdown().await.unwrap();
}

/// Dishes and orders draw from one id source.
#[tokio::test]
async fn test_ids_are_unique_across_resources() {
    let system = sequential_system();

    let dish = system.dish_client.create_dish(taco()).await.unwrap();
    let order = system
        .order_client
        .create_order(order_with_status(""))
        .await
        .unwrap();
    assert_eq!(dish.id.0, "1");
    assert_eq!(order.id.0, "2");
    assert_eq!(order.status, OrderStatus::Pending);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_random_ids_are_32_hex_digits() {
    let system = RestaurantSystem::new(&Config::default());

    let first = system.dish_client.create_dish(taco()).await.unwrap();
    let second = system.dish_client.create_dish(taco()).await.unwrap();
    for id in [&first.id.0, &second.id.0] {
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
    assert_ne!(first.id, second.id);

    system.shutdown().await.unwrap();
}

/// Orders placed from many tasks at once all land with distinct ids.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = sequential_system();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let client = system.order_client.clone();
            tokio::spawn(async move { client.create_order(order_with_status("pending")).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().expect("Failed to create order").id);
    }
    ids.sort_by(|a, b| a.0.cmp(&b.0));
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(system.order_client.list_orders().await.unwrap().len(), 20);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_delete_then_read_is_not_found() {
    let system = sequential_system();
    let orders = &system.order_client;

    let order = orders.create_order(order_with_status("pending")).await.unwrap();
    orders.delete_order(order.id.clone()).await.unwrap();

    let err = orders.read_order(order.id.clone()).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Order does not exist: {}.", order.id));
    assert!(orders.list_orders().await.unwrap().is_empty());

    let err = orders.delete_order(OrderId::from("missing")).await.unwrap_err();
    assert!(!err.is_validation());

    system.shutdown().await.unwrap();
}
