use actor_framework::{ActorClient, SequentialIds};
use restaurant::clients::OrderClient;
use restaurant::model::{DishId, OrderDraft, OrderId, OrderStatus};
use restaurant::order_actor::{self, OrderError};
use serde_json::{json, Value};
use std::sync::Arc;

fn draft(body: Value) -> OrderDraft {
    serde_json::from_value(body).unwrap()
}

fn order_body(status: &str) -> Value {
    json!({
        "deliverTo": "123 Main",
        "mobileNumber": "555-1234",
        "status": status,
        "dishes": [{"dishId": "1", "quantity": 2}]
    })
}

/// Spawns a real Order actor with deterministic ids.
fn start() -> (OrderClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = order_actor::new(8, Arc::new(SequentialIds::new()));
    let handle = tokio::spawn(actor.run(()));
    (client, handle)
}

/// Walks one order through every status, then checks that delivered is final.
#[tokio::test]
async fn test_order_status_workflow() {
    let (client, handle) = start();

    let order = client
        .create_order(draft(json!({
            "deliverTo": "123 Main",
            "mobileNumber": "555-1234",
            "dishes": [{"dishId": "1", "quantity": 2}]
        })))
        .await
        .expect("Failed to create order");
    assert_eq!(order.id, OrderId::from("1"));
    assert_eq!(order.status, OrderStatus::Pending);

    for status in ["preparing", "pending", "out-for-delivery", "delivered"] {
        let updated = client
            .update_order(order.id.clone(), draft(order_body(status)))
            .await
            .unwrap_or_else(|e| panic!("Failed to move to {status}: {e}"));
        assert_eq!(updated.status.as_str(), status);
    }

    let err = client
        .update_order(order.id.clone(), draft(order_body("pending")))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Delivered);
    assert_eq!(err.to_string(), "A delivered order cannot be changed");

    let stored = client.get(order.id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Delivered);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_only_pending_orders_are_deleted() {
    let (client, handle) = start();

    let preparing = client.create_order(draft(order_body("preparing"))).await.unwrap();
    let pending = client.create_order(draft(order_body("pending"))).await.unwrap();

    let err = client.delete_order(preparing.id.clone()).await.unwrap_err();
    assert_eq!(err.to_string(), "An order cannot be deleted unless it is pending");
    assert!(err.is_validation());

    client.delete_order(pending.id.clone()).await.unwrap();

    let remaining: Vec<_> = client.list_orders().await.unwrap();
    assert_eq!(remaining, vec![preparing]);
    assert!(client.get(pending.id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_leaves_collection_unchanged() {
    let (client, handle) = start();

    let mut body = order_body("pending");
    body["dishes"] = json!([{"dishId": "1", "quantity": 2}, {"dishId": "2", "quantity": 1.5}]);
    let err = client.create_order(draft(body)).await.unwrap_err();
    assert_eq!(err, OrderError::InvalidQuantity(1));

    let err = client
        .create_order(draft(json!({"mobileNumber": "555-1234"})))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Order must include a deliverTo");

    assert!(client.list_orders().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_checks_route_id_and_keeps_dish_lines() {
    let (client, handle) = start();
    let order = client.create_order(draft(order_body("pending"))).await.unwrap();

    let mut body = order_body("preparing");
    body["id"] = json!("99");
    let err = client
        .update_order(order.id.clone(), draft(body))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::IdMismatch {
            body: "99".to_string(),
            route: "1".to_string()
        }
    );

    // An empty id in the body is the same as no id
    let mut body = order_body("preparing");
    body["id"] = json!("");
    body["dishes"] = json!([{"dishId": "3", "quantity": 1, "note": "no onions"}]);
    let updated = client.update_order(order.id.clone(), draft(body)).await.unwrap();
    assert_eq!(updated.dishes[0].dish_id, Some(DishId::from("3")));
    assert_eq!(updated.dishes[0].extra.get("note"), Some(&json!("no onions")));

    drop(client);
    handle.await.unwrap();
}

/// A missing order is reported before any field of the draft is looked at.
#[tokio::test]
async fn test_update_of_missing_order_is_not_found() {
    let (client, handle) = start();

    for body in [json!({}), json!({"status": "bogus", "dishes": []})] {
        let err = client
            .update_order(OrderId::from("404"), draft(body))
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::NotFound("404".to_string()));
        assert!(!err.is_validation());
    }

    drop(client);
    handle.await.unwrap();
}
