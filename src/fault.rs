//! Raised faults and the catch discipline
//!
//! A [`Fault`] is the payload carried by [`Try::Failure`](crate::Try) and by the
//! left side of [`safe_function_either`](crate::adapters::safe_function_either).
//! It is a cheap-to-clone, type-erased handle over any `std::error::Error`,
//! and it can also hold a panic that was captured while evaluating a callback.
//!
//! # Examples
//!
//! ```
//! use saferail::fault::{Fault, RuntimeFault};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
//! let fault = Fault::from(io);
//!
//! assert!(fault.is::<std::io::Error>());
//! assert_eq!(fault.to_string(), "config.toml");
//!
//! let wrapped = RuntimeFault::with_cause("loading settings", fault.clone());
//! assert_eq!(wrapped.cause(), Some(&fault));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

type DynError = dyn StdError + Send + Sync + 'static;

/// A captured fault: an error value or a panic that was raised during evaluation.
///
/// `Fault` does not implement `std::error::Error` itself. That keeps the blanket
/// `From<E: Error>` conversion coherent, so `?` and `Into<Fault>` work for every
/// error type. Use [`Fault::as_error`] when a `&dyn Error` is needed.
///
/// Equality is identity: two `Fault`s compare equal when they are clones of the
/// same captured fault.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<DynError>,
}

impl Fault {
    /// Capture an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Fault {
            inner: Arc::new(error),
        }
    }

    /// Create a fault carrying only a message.
    ///
    /// ```
    /// use saferail::Fault;
    ///
    /// assert_eq!(Fault::msg("boom").to_string(), "boom");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Fault::new(Message(message.into()))
    }

    /// Capture an already boxed error.
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Fault {
            inner: Arc::from(error),
        }
    }

    /// Capture a panic payload as returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Fault::new(Panicked::from_payload(payload))
    }

    /// Returns `true` if the underlying error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrow the underlying error as `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Borrow the underlying error.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// The underlying error's own source, if any.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }

    /// Returns `true` if both handles refer to the same captured fault.
    pub fn ptr_eq(&self, other: &Fault) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Unwrap exactly one layer of [`RuntimeFault`] wrapping.
    ///
    /// If this fault is a `RuntimeFault` with a cause, the cause is returned.
    /// Any other fault is returned unchanged.
    ///
    /// ```
    /// use saferail::fault::{Fault, RuntimeFault};
    ///
    /// let root = Fault::msg("disk full");
    /// let outer = Fault::from(RuntimeFault::with_cause("write failed", root.clone()));
    ///
    /// assert_eq!(outer.into_cause(), root);
    /// assert_eq!(root.clone().into_cause(), root);
    /// ```
    pub fn into_cause(self) -> Fault {
        let cause = self
            .downcast_ref::<RuntimeFault>()
            .and_then(|wrapper| wrapper.cause().cloned());
        cause.unwrap_or(self)
    }
}

impl<E> From<E> for Fault
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Fault::new(error)
    }
}

impl AsRef<DynError> for Fault {
    fn as_ref(&self) -> &DynError {
        &*self.inner
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fault").field(&&*self.inner).finish()
    }
}

struct Message(String);

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

/// A panic captured while evaluating a guarded callback.
///
/// The panic message is recovered when the payload is a `&str` or a `String`,
/// which covers `panic!` with a literal or a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Panicked { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Panicked {}

/// The unchecked fault carrier: a message plus an optional cause.
///
/// This is what [`Try::get_or_throw_unchecked`](crate::Try::get_or_throw_unchecked)
/// raises, and the usual target of a `get_or_throw` mapper.
///
/// ```
/// use saferail::fault::{Fault, RuntimeFault};
/// use std::error::Error;
///
/// let err = RuntimeFault::with_cause("Auth failed", Fault::msg("boom"));
/// assert_eq!(err.to_string(), "Auth failed");
/// assert_eq!(err.source().unwrap().to_string(), "boom");
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeFault {
    message: String,
    cause: Option<Fault>,
}

impl RuntimeFault {
    /// Create a fault with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        RuntimeFault {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a fault wrapping `cause`.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Fault>) -> Self {
        RuntimeFault {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The message given at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped fault, if any.
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }
}

impl fmt::Display for RuntimeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for RuntimeFault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_error() as &(dyn StdError + 'static))
    }
}

/// Evaluate `f` under the catch discipline.
///
/// An `Err` returned by `f` is passed through. A panic raised by `f` is caught
/// and turned into a [`Panicked`] fault instead of unwinding past this call.
///
/// The default panic hook still reports the panic on stderr.
///
/// ```
/// use saferail::fault::{capture, Panicked};
///
/// let caught = capture(|| -> Result<i32, saferail::Fault> { panic!("boom") });
/// let fault = caught.unwrap_err();
/// assert!(fault.is::<Panicked>());
/// assert_eq!(fault.to_string(), "boom");
/// ```
pub fn capture<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> Result<T, Fault>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let fault = Fault::from_panic(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!(fault = %fault, "captured panic as fault");
            Err(fault)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct IllegalState(&'static str);

    impl fmt::Display for IllegalState {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "illegal state: {}", self.0)
        }
    }

    impl StdError for IllegalState {}

    #[test]
    fn test_from_error_keeps_type() {
        let fault = Fault::from(IllegalState("closed"));
        assert!(fault.is::<IllegalState>());
        assert!(!fault.is::<RuntimeFault>());
        assert_eq!(fault.downcast_ref::<IllegalState>().unwrap().0, "closed");
        assert_eq!(fault.to_string(), "illegal state: closed");
    }

    #[test]
    fn test_msg() {
        let fault = Fault::msg("boom");
        assert_eq!(fault.to_string(), "boom");
        assert_eq!(format!("{:?}", fault), "Fault(\"boom\")");
    }

    #[test]
    fn test_from_boxed() {
        let boxed: Box<dyn StdError + Send + Sync> = "plain text".into();
        let fault = Fault::from_boxed(boxed);
        assert_eq!(fault.to_string(), "plain text");
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Fault::msg("same");
        let b = Fault::msg("same");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_panic_payloads() {
        let literal = Fault::from_panic(Box::new("literal"));
        assert_eq!(literal.to_string(), "literal");

        let formatted = Fault::from_panic(Box::new(format!("code {}", 7)));
        assert_eq!(formatted.to_string(), "code 7");

        let other = Fault::from_panic(Box::new(42_u8));
        assert_eq!(other.to_string(), "<non-string panic payload>");
        assert!(other.is::<Panicked>());
    }

    #[test]
    fn test_runtime_fault_source_chain() {
        let err = RuntimeFault::with_cause("Auth failed", IllegalState("boom"));
        assert_eq!(err.message(), "Auth failed");
        assert_eq!(err.to_string(), "Auth failed");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("illegal state: boom".to_string())
        );

        let bare = RuntimeFault::new("no cause");
        assert!(bare.source().is_none());
        assert!(bare.cause().is_none());
    }

    #[test]
    fn test_into_cause_unwraps_one_layer_only() {
        let root = Fault::msg("root");
        let middle = Fault::from(RuntimeFault::with_cause("middle", root.clone()));
        let outer = Fault::from(RuntimeFault::with_cause("outer", middle.clone()));

        assert_eq!(outer.into_cause(), middle);
        assert_eq!(middle.into_cause(), root);

        let bare = Fault::from(RuntimeFault::new("bare"));
        assert_eq!(bare.clone().into_cause(), bare);
    }

    #[test]
    fn test_capture_passes_results_through() {
        assert_eq!(capture(|| Ok::<_, Fault>(3)).ok(), Some(3));

        let fault = Fault::msg("err");
        let result: Result<i32, Fault> = capture(|| Err(fault.clone()));
        assert_eq!(result.unwrap_err(), fault);
    }

    #[test]
    fn test_capture_catches_panic() {
        let result: Result<i32, Fault> = capture(|| panic!("index {} out of range", 9));
        let fault = result.unwrap_err();
        assert!(fault.is::<Panicked>());
        assert_eq!(
            fault.downcast_ref::<Panicked>().map(Panicked::message),
            Some("index 9 out of range")
        );
    }
}
