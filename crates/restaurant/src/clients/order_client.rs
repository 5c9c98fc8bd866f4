//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; every business rule runs inside the actor.
use crate::model::{Order, OrderDraft, OrderId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(draft).await.map_err(Self::map_error)?;
        info!(id = %order.id, status = %order.status, "Order placed");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn read_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Replaces every field of an existing order, including its status.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, draft: OrderDraft) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, draft).await.map_err(Self::map_error)
    }

    /// Removes a pending order. Any other status is refused with [`OrderError::NotPending`].
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishLine, OrderStatus};
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};
    use serde_json::json;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::from(id),
            deliver_to: "123 Main".to_string(),
            mobile_number: "555-1234".to_string(),
            status,
            dishes: vec![DishLine::new("1", 2)],
        }
    }

    #[tokio::test]
    async fn test_delete_veto_surfaces_as_order_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_delete(OrderId::from("1"))
            .return_err(FrameworkError::EntityError(Box::new(OrderError::NotPending)));
        mock.expect_delete(OrderId::from("2"))
            .return_err(FrameworkError::NotFound("2".to_string()));
        mock.expect_delete(OrderId::from("3")).return_ok(());

        let client = OrderClient::new(mock.client());
        assert_eq!(
            client.delete_order(OrderId::from("1")).await,
            Err(OrderError::NotPending)
        );
        assert_eq!(
            client.delete_order(OrderId::from("2")).await,
            Err(OrderError::NotFound("2".to_string()))
        );
        assert_eq!(client.delete_order(OrderId::from("3")).await, Ok(()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_read_order_maps_missing_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId::from("7")).return_ok(None);

        let client = OrderClient::new(mock.client());
        let err = client.read_order(OrderId::from("7")).await.unwrap_err();
        assert_eq!(err.to_string(), "Order does not exist: 7.");
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_orders_returns_actor_snapshot() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Delivered),
        ]);

        let client = OrderClient::new(mock.client());
        let orders = client.list_orders().await.unwrap();
        let ids: Vec<_> = orders.iter().map(|o| o.id.0.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn test_create_order_forwards_draft() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);
        let draft: OrderDraft = serde_json::from_value(json!({
            "deliverTo": "123 Main",
            "mobileNumber": "555-1234",
            "dishes": [{"dishId": "1", "quantity": 2}]
        }))
        .unwrap();

        let task = tokio::spawn(async move { client.create_order(draft).await });

        let (forwarded, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(forwarded.deliver_to, Some(json!("123 Main")));
        responder.send(Ok(order("1", OrderStatus::Pending))).unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_validation_error_is_recovered() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId::from("1"))
            .return_err(FrameworkError::EntityError(Box::new(OrderError::Delivered)));

        let client = OrderClient::new(mock.client());
        let err = client
            .update_order(OrderId::from("1"), OrderDraft::default())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::Delivered);
        assert!(err.is_validation());
    }
}
