use std::any::Any;
use std::error::Error;
use std::fmt;

use crate::types::alloc_type::{Box, String};

/// Boxed error type carried by [`Fault::Errored`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An unexpected fault raised by a computation instead of a modeled failure.
///
/// Faults never reach a `Bad` arm directly: the async engine hands them to the
/// converter configured on its [`FutureFactory`](crate::async_ext::FutureFactory), and
/// [`Or::catching`](crate::Or::catching) reports them as its bad type.
///
/// `Display` prints only the fault's message, the way an exception message reads.
#[derive(Debug)]
pub enum Fault {
    /// The computation panicked; holds the panic message.
    Panicked(String),
    /// The computation returned an error.
    Errored(BoxError),
}

impl Fault {
    /// Wraps an error returned by a computation.
    pub fn errored<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Errored(error.into())
    }

    /// Builds a fault from a panic payload, as returned by `catch_unwind` or a
    /// panicked task.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => String::from(*message),
                None => String::from("computation panicked"),
            },
        };
        Self::Panicked(message)
    }

    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked(message) => f.write_str(message),
            Self::Errored(error) => write!(f, "{}", error),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Panicked(_) => None,
            Self::Errored(error) => Some(error.as_ref()),
        }
    }
}
