use core::fmt;

/// Errors reported by the [`BlinkController`](crate::BlinkController).
///
/// `E` is the error type of the output line. Board lines are infallible,
/// so on hardware only the sequencing variants can occur and
/// [`BlinkController::run_forever`](crate::BlinkController::run_forever)
/// has no failure path at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkError<E> {
    /// The output line rejected a direction or level change
    Pin(E),
    /// A phase was requested before `initialize`
    NotInitialized,
    /// `initialize` was called a second time
    AlreadyInitialized,
}

impl<E: fmt::Debug> fmt::Display for BlinkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkError::Pin(error) => write!(f, "output line error: {error:?}"),
            BlinkError::NotInitialized => f.write_str("controller is not initialized"),
            BlinkError::AlreadyInitialized => f.write_str("controller is already initialized"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for BlinkError<E> {}
