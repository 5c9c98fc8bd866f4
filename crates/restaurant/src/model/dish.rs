/// Represents a dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for details on:
/// - The raw payload ([`DishDraft`]) accepted by create and update
/// - The validated fields ([`DishFields`]) the pipelines produce
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Builds a dish from an issued identifier and validated fields.
    pub fn new(id: DishId, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrites every mutable field. The identifier never changes.
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

/// Dish payload exactly as submitted, before validation.
///
/// Every field is optional and loosely typed so the pipeline, not the JSON decoder, decides
/// which error the caller sees.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DishDraft {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

/// The mutable fields of a dish after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}
