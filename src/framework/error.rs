//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Session errors travel boxed inside
//! [`FrameworkError::EntityError`] and are recovered by clients with
//! [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed session error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or the boxed error is
    /// of another type.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|typed| *typed)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("cart is empty")]
    struct CartEmpty;

    #[test]
    fn entity_error_round_trips_through_the_box() {
        let err = FrameworkError::EntityError(Box::new(CartEmpty));
        assert_eq!(err.into_entity_error::<CartEmpty>().unwrap(), CartEmpty);
    }

    #[test]
    fn plumbing_errors_are_returned_untouched() {
        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.into_entity_error::<CartEmpty>(),
            Err(FrameworkError::ActorClosed)
        ));
    }

    #[test]
    fn foreign_entity_errors_stay_boxed() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("socket")));
        match err.into_entity_error::<CartEmpty>() {
            Err(FrameworkError::EntityError(inner)) => assert_eq!(inner.to_string(), "socket"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
