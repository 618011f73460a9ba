//! Contract errors raised by the containers themselves.
//!
//! These are programmer errors, not business failures: asking a container for
//! the variant it does not hold, or handing it a missing payload. Business
//! failures travel inside the `Left`/`Failure` variants instead.

use std::error::Error as StdError;
use std::fmt;

/// Which variant an accessor asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `Either::Left`
    Left,
    /// `Either::Right`
    Right,
    /// `Outcome::Success` or `Try::Success`
    Success,
    /// `Outcome::Failure` or `Try::Failure`
    Failure,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Success => "success",
            Side::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// Error returned when a container is used against its contract.
///
/// # Examples
///
/// ```rust
/// use saferail::{ContainerError, Either};
/// use saferail::error::Side;
///
/// let e: Either<&str, i32> = Either::left("missing");
/// assert_eq!(
///     e.get_right(),
///     Err(ContainerError::NoValuePresent { expected: Side::Right })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// The requested variant is not the one held.
    NoValuePresent {
        /// The variant that was asked for.
        expected: Side,
    },
    /// A payload or container was required but none was supplied.
    NullPayload,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::NoValuePresent { expected } => {
                write!(f, "no {} value present", expected)
            }
            ContainerError::NullPayload => f.write_str("payload must not be null"),
        }
    }
}

impl StdError for ContainerError {}
