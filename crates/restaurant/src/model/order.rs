/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - The raw payload ([`OrderDraft`]) accepted by create and update
/// - The validated fields ([`OrderFields`]) the pipelines produce
use crate::model::DishId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in its life.
///
/// Any status may move to any other, except that `Delivered` is absorbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One entry of an order's dish list.
///
/// Only `quantity` is validated. `dishId` is kept when it is a string, and any other fields
/// the client sent are carried along and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishLine {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<DishId>,
    pub quantity: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DishLine {
    pub fn new(dish_id: impl Into<DishId>, quantity: u64) -> Self {
        Self {
            dish_id: Some(dish_id.into()),
            quantity,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<DishLine>,
}

impl Order {
    /// Builds an order from an issued identifier and validated fields.
    pub fn new(id: OrderId, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status,
            dishes: fields.dishes,
        }
    }

    /// Overwrites every mutable field. The identifier never changes.
    pub fn apply(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = fields.status;
        self.dishes = fields.dishes;
    }
}

/// Order payload exactly as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDraft {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

/// The mutable fields of an order after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<DishLine>,
}
