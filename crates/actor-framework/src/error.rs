//! # Framework Errors
//!
//! Common error type returned by every [`ResourceClient`](crate::ResourceClient) call.
//! Entity errors travel boxed and are recovered with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` when the error is a framework failure or carries a different
    /// error type, so callers can fall back to their own mapping.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("typed failure")]
    struct Typed;

    #[test]
    fn test_into_entity_error_recovers_typed_error() {
        let err = FrameworkError::EntityError(Box::new(Typed));
        assert_eq!(err.into_entity_error::<Typed>().unwrap(), Typed);
    }

    #[test]
    fn test_into_entity_error_passes_other_errors_through() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.into_entity_error::<Typed>().unwrap_err();
        assert!(back.to_string().contains("disk"));

        let closed = FrameworkError::ActorClosed.into_entity_error::<Typed>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
