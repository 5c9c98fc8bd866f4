//! Validation pipelines for order payloads.
//!
//! Create: `deliverTo → mobileNumber → dishes → quantities → status (optional)`.
//! Update: `deliverTo → mobileNumber → dishes → quantities → id match → status (required)
//! → not delivered`. The delivered check reads the stored status and only runs once the
//! submitted status is known to be well-formed.

use super::OrderError;
use crate::model::{DishId, DishLine, OrderDraft, OrderFields, OrderId, OrderStatus};
use crate::validation::{conflicting_id, positive_integer, required_text};
use actor_framework::pipeline::{Pipeline, Step};
use serde_json::Value;

/// An order payload together with what the actor knows about its target.
///
/// On create both `route_id` and `current_status` are `None`.
#[derive(Debug, Clone)]
pub struct OrderSubmission {
    pub route_id: Option<OrderId>,
    pub current_status: Option<OrderStatus>,
    pub draft: OrderDraft,
}

impl OrderSubmission {
    pub fn create(draft: OrderDraft) -> Self {
        Self {
            route_id: None,
            current_status: None,
            draft,
        }
    }

    pub fn update(route_id: OrderId, current_status: OrderStatus, draft: OrderDraft) -> Self {
        Self {
            route_id: Some(route_id),
            current_status: Some(current_status),
            draft,
        }
    }
}

fn deliver_to(s: &OrderSubmission) -> Result<&str, OrderError> {
    required_text(s.draft.deliver_to.as_ref()).ok_or(OrderError::MissingField("deliverTo"))
}

fn mobile_number(s: &OrderSubmission) -> Result<&str, OrderError> {
    required_text(s.draft.mobile_number.as_ref()).ok_or(OrderError::MissingField("mobileNumber"))
}

fn dish_values(s: &OrderSubmission) -> Result<&[Value], OrderError> {
    match &s.draft.dishes {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items.as_slice()),
        _ => Err(OrderError::MissingDishes),
    }
}

fn dish_line(index: usize, value: &Value) -> Result<DishLine, OrderError> {
    let Value::Object(object) = value else {
        return Err(OrderError::InvalidQuantity(index));
    };
    let quantity =
        positive_integer(object.get("quantity")).ok_or(OrderError::InvalidQuantity(index))?;

    let mut extra = object.clone();
    extra.remove("quantity");
    let dish_id = match extra.get("dishId") {
        Some(Value::String(id)) => {
            let id = DishId(id.clone());
            extra.remove("dishId");
            Some(id)
        }
        _ => None,
    };
    Ok(DishLine {
        dish_id,
        quantity,
        extra,
    })
}

fn dish_lines(s: &OrderSubmission) -> Result<Vec<DishLine>, OrderError> {
    dish_values(s)?
        .iter()
        .enumerate()
        .map(|(index, value)| dish_line(index, value))
        .collect()
}

/// `Ok(None)` when no status was given (absent or empty).
fn submitted_status(s: &OrderSubmission) -> Result<Option<OrderStatus>, OrderError> {
    match &s.draft.status {
        None => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => text
            .parse()
            .map(Some)
            .map_err(|_| OrderError::InvalidStatus),
        Some(_) => Err(OrderError::InvalidStatus),
    }
}

fn has_deliver_to(s: &OrderSubmission) -> Result<(), OrderError> {
    deliver_to(s).map(drop)
}

fn has_mobile_number(s: &OrderSubmission) -> Result<(), OrderError> {
    mobile_number(s).map(drop)
}

fn has_dishes(s: &OrderSubmission) -> Result<(), OrderError> {
    dish_values(s).map(drop)
}

fn dishes_have_valid_quantity(s: &OrderSubmission) -> Result<(), OrderError> {
    dish_lines(s).map(drop)
}

fn id_matches_route(s: &OrderSubmission) -> Result<(), OrderError> {
    let Some(route) = &s.route_id else {
        return Ok(());
    };
    match conflicting_id(s.draft.id.as_ref(), &route.0) {
        Some(body) => Err(OrderError::IdMismatch {
            body,
            route: route.0.clone(),
        }),
        None => Ok(()),
    }
}

fn status_is_known_if_given(s: &OrderSubmission) -> Result<(), OrderError> {
    submitted_status(s).map(drop)
}

fn has_valid_status(s: &OrderSubmission) -> Result<(), OrderError> {
    match submitted_status(s)? {
        Some(_) => Ok(()),
        None => Err(OrderError::InvalidStatus),
    }
}

fn not_delivered(s: &OrderSubmission) -> Result<(), OrderError> {
    if s.current_status == Some(OrderStatus::Delivered) {
        Err(OrderError::Delivered)
    } else {
        Ok(())
    }
}

const CREATE_STEPS: &[Step<OrderSubmission, OrderError>] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    dishes_have_valid_quantity,
    status_is_known_if_given,
];

const UPDATE_STEPS: &[Step<OrderSubmission, OrderError>] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    dishes_have_valid_quantity,
    id_matches_route,
    has_valid_status,
    not_delivered,
];

pub const CREATE: Pipeline<OrderSubmission, OrderError> =
    Pipeline::new("order.create", CREATE_STEPS);
pub const UPDATE: Pipeline<OrderSubmission, OrderError> =
    Pipeline::new("order.update", UPDATE_STEPS);

/// Terminal handler: reads the fields the steps have already checked.
/// A status left out defaults to `pending`.
pub fn fields(s: &OrderSubmission) -> Result<OrderFields, OrderError> {
    Ok(OrderFields {
        deliver_to: deliver_to(s)?.to_string(),
        mobile_number: mobile_number(s)?.to_string(),
        status: submitted_status(s)?.unwrap_or_default(),
        dishes: dish_lines(s)?,
    })
}
