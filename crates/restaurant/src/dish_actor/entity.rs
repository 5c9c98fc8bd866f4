//! ActorEntity trait implementation for the Dish domain type.
//!
//! Create and update both run their validation pipeline inside the actor, so a rejected
//! payload never touches the stored collection.

use super::validation::{self, DishSubmission};
use super::DishError;
use crate::model::{Dish, DishDraft, DishId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishDraft;
    type Update = DishDraft;
    type Context = ();
    type Error = DishError;

    fn id(&self) -> &DishId {
        &self.id
    }

    /// Runs the create pipeline and builds the dish under the issued id.
    fn from_create_params(id: DishId, draft: DishDraft) -> Result<Self, DishError> {
        let submission = DishSubmission::create(draft);
        let fields = validation::CREATE.then(&submission, validation::fields)?;
        Ok(Dish::new(id, fields))
    }

    /// Runs the update pipeline against this dish's id and overwrites every mutable field.
    async fn on_update(&mut self, draft: DishDraft, _ctx: &()) -> Result<(), DishError> {
        let submission = DishSubmission::update(self.id.clone(), draft);
        let fields = validation::UPDATE.then(&submission, validation::fields)?;
        self.apply(fields);
        Ok(())
    }
}
