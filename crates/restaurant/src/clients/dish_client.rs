//! # Dish Client
//!
//! Provides a high-level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes domain-specific methods.
use crate::dish_actor::DishError;
use crate::model::{Dish, DishDraft, DishId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => DishError::NotFound(id),
            other => other
                .into_entity_error::<DishError>()
                .unwrap_or_else(|e| DishError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl DishClient {
    /// Every dish on the menu, in the order they were created.
    #[instrument(skip(self))]
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, DishError> {
        self.list().await
    }

    /// Validates the draft and stores a new dish under a freshly issued id.
    #[instrument(skip(self))]
    pub async fn create_dish(&self, draft: DishDraft) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn read_dish(&self, id: DishId) -> Result<Dish, DishError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| DishError::NotFound(id.to_string()))
    }

    /// Replaces every field of an existing dish.
    ///
    /// Fails with [`DishError::NotFound`] before any validation when the dish is unknown.
    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, draft: DishDraft) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.update(id, draft).await.map_err(Self::map_error)
    }
}
