//! ActorEntity trait implementation for the Order domain type.
//!
//! Besides the create and update pipelines, the Order entity vetoes deletion of any order that
//! is not `pending` through the `on_delete` hook.

use super::validation::{self, OrderSubmission};
use super::OrderError;
use crate::model::{Order, OrderDraft, OrderId, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = OrderDraft;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, OrderError> {
        let submission = OrderSubmission::create(draft);
        let fields = validation::CREATE.then(&submission, validation::fields)?;
        Ok(Order::new(id, fields))
    }

    async fn on_update(&mut self, draft: OrderDraft, _ctx: &()) -> Result<(), OrderError> {
        let submission = OrderSubmission::update(self.id.clone(), self.status, draft);
        let fields = validation::UPDATE.then(&submission, validation::fields)?;
        self.apply(fields);
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), OrderError> {
        if self.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(OrderError::NotPending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(body: serde_json::Value) -> OrderDraft {
        serde_json::from_value(body).unwrap()
    }

    fn order(status: &str) -> Order {
        Order::from_create_params(
            OrderId::from("1"),
            draft(json!({
                "deliverTo": "123 Main",
                "mobileNumber": "555-1234",
                "status": status,
                "dishes": [{"dishId": "1", "quantity": 2}]
            })),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_only_pending_orders_may_be_deleted() {
        assert_eq!(order("pending").on_delete(&()).await, Ok(()));
        for status in ["preparing", "out-for-delivery", "delivered"] {
            assert_eq!(
                order(status).on_delete(&()).await,
                Err(OrderError::NotPending),
                "status {status}"
            );
        }
    }

    #[tokio::test]
    async fn test_delivered_order_is_absorbing() {
        let mut delivered = order("delivered");
        let before = delivered.clone();
        let err = delivered
            .on_update(
                draft(json!({
                    "deliverTo": "Elsewhere",
                    "mobileNumber": "555-0000",
                    "status": "pending",
                    "dishes": [{"dishId": "2", "quantity": 1}]
                })),
                &(),
            )
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::Delivered);
        assert_eq!(delivered, before);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let mut pending = order("pending");
        pending
            .on_update(
                draft(json!({
                    "deliverTo": "Elsewhere",
                    "mobileNumber": "555-0000",
                    "status": "delivered",
                    "dishes": [{"dishId": "2", "quantity": 4}]
                })),
                &(),
            )
            .await
            .unwrap();
        assert_eq!(pending.id, OrderId::from("1"));
        assert_eq!(pending.deliver_to, "Elsewhere");
        assert_eq!(pending.mobile_number, "555-0000");
        assert_eq!(pending.status, OrderStatus::Delivered);
        assert_eq!(pending.dishes[0].quantity, 4);
    }
}
