//! Validation pipelines for dish payloads.
//!
//! Create checks `name → description → price → image_url`. Update runs the same steps and
//! then requires any identifier in the body to match the route. The existence check that
//! precedes them on update is done by the actor before the pipeline is reached.

use super::DishError;
use crate::model::{DishDraft, DishFields, DishId};
use crate::validation::{conflicting_id, positive_integer, required_text};
use actor_framework::pipeline::{Pipeline, Step};

/// A dish payload together with the route it was submitted to (`None` on create).
#[derive(Debug, Clone)]
pub struct DishSubmission {
    pub route_id: Option<DishId>,
    pub draft: DishDraft,
}

impl DishSubmission {
    pub fn create(draft: DishDraft) -> Self {
        Self {
            route_id: None,
            draft,
        }
    }

    pub fn update(route_id: DishId, draft: DishDraft) -> Self {
        Self {
            route_id: Some(route_id),
            draft,
        }
    }
}

fn name(s: &DishSubmission) -> Result<&str, DishError> {
    required_text(s.draft.name.as_ref()).ok_or(DishError::MissingField("name"))
}

fn description(s: &DishSubmission) -> Result<&str, DishError> {
    required_text(s.draft.description.as_ref()).ok_or(DishError::MissingField("description"))
}

fn price(s: &DishSubmission) -> Result<u64, DishError> {
    positive_integer(s.draft.price.as_ref()).ok_or(DishError::InvalidPrice)
}

fn image_url(s: &DishSubmission) -> Result<&str, DishError> {
    required_text(s.draft.image_url.as_ref()).ok_or(DishError::MissingField("image_url"))
}

fn has_name(s: &DishSubmission) -> Result<(), DishError> {
    name(s).map(drop)
}

fn has_description(s: &DishSubmission) -> Result<(), DishError> {
    description(s).map(drop)
}

fn has_price(s: &DishSubmission) -> Result<(), DishError> {
    price(s).map(drop)
}

fn has_image_url(s: &DishSubmission) -> Result<(), DishError> {
    image_url(s).map(drop)
}

fn id_matches_route(s: &DishSubmission) -> Result<(), DishError> {
    let Some(route) = &s.route_id else {
        return Ok(());
    };
    match conflicting_id(s.draft.id.as_ref(), &route.0) {
        Some(body) => Err(DishError::IdMismatch {
            body,
            route: route.0.clone(),
        }),
        None => Ok(()),
    }
}

const CREATE_STEPS: &[Step<DishSubmission, DishError>] =
    &[has_name, has_description, has_price, has_image_url];

const UPDATE_STEPS: &[Step<DishSubmission, DishError>] = &[
    has_name,
    has_description,
    has_price,
    has_image_url,
    id_matches_route,
];

pub const CREATE: Pipeline<DishSubmission, DishError> = Pipeline::new("dish.create", CREATE_STEPS);
pub const UPDATE: Pipeline<DishSubmission, DishError> = Pipeline::new("dish.update", UPDATE_STEPS);

/// Terminal handler: reads the fields the steps have already checked.
pub fn fields(s: &DishSubmission) -> Result<DishFields, DishError> {
    Ok(DishFields {
        name: name(s)?.to_string(),
        description: description(s)?.to_string(),
        price: price(s)?,
        image_url: image_url(s)?.to_string(),
    })
}
