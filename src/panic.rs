//! Caught panics as ordinary error values
//!
//! The unwinding adapters ([`mightify_unwind`](crate::adapters::mightify_unwind)
//! and [`mightify_async_unwind`](crate::adapters::mightify_async_unwind)) catch
//! a panic raised by foreign code and hand it to the caller's normalization
//! function as a [`Panic`]. The payload is kept intact, so it can be inspected,
//! turned into a message, or re-raised.
//!
//! # Examples
//!
//! ```
//! use might::Panic;
//!
//! let caught = std::panic::catch_unwind(|| panic!("disk full")).unwrap_err();
//! let panic = Panic::new(caught);
//!
//! assert_eq!(panic.message(), Some("disk full"));
//! assert_eq!(panic.to_string(), "panicked: disk full");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// The payload of a caught panic.
///
/// Panics raised with a string literal or a formatted message carry a `&str`
/// or `String` payload; [`Panic::message`] decodes both. Any other payload is
/// still available through [`Panic::payload`].
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    /// Wrap a payload returned by `std::panic::catch_unwind`.
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Panic { payload }
    }

    /// The panic message, if the payload is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use might::Panic;
    ///
    /// let formatted = Panic::new(Box::new(format!("code {}", 7)));
    /// assert_eq!(formatted.message(), Some("code 7"));
    ///
    /// let opaque = Panic::new(Box::new(7_u8));
    /// assert_eq!(opaque.message(), None);
    /// ```
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message.as_str())
        } else {
            None
        }
    }

    /// Borrow the raw payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        &*self.payload
    }

    /// Consume and return the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raise the panic on the current thread.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl From<Box<dyn Any + Send>> for Panic {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Panic::new(payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {}", message),
            None => write!(f, "panicked with a non-string payload"),
        }
    }
}

impl StdError for Panic {}

#[cfg(test)]
mod tests {
    use super::*;

    fn caught<F: FnOnce() + std::panic::UnwindSafe>(f: F) -> Panic {
        match std::panic::catch_unwind(f) {
            Ok(()) => panic!("expected a panic"),
            Err(payload) => Panic::new(payload),
        }
    }

    #[test]
    fn test_message_from_literal() {
        let panic = caught(|| panic!("literal"));
        assert_eq!(panic.message(), Some("literal"));
    }

    #[test]
    fn test_message_from_formatted() {
        let code = 3;
        let panic = caught(move || panic!("code {}", code));
        assert_eq!(panic.message(), Some("code 3"));
    }

    #[test]
    fn test_opaque_payload() {
        let panic = Panic::from(Box::new(42_i32) as Box<dyn Any + Send>);
        assert_eq!(panic.message(), None);
        assert_eq!(panic.payload().downcast_ref::<i32>(), Some(&42));
        assert_eq!(panic.to_string(), "panicked with a non-string payload");
    }

    #[test]
    fn test_display_and_debug() {
        let panic = Panic::new(Box::new("boom"));
        assert_eq!(panic.to_string(), "panicked: boom");
        assert_eq!(format!("{:?}", panic), "Panic { message: Some(\"boom\"), .. }");
    }

    #[test]
    fn test_into_payload_round_trip() {
        let payload = Panic::new(Box::new(String::from("owned"))).into_payload();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("owned"));
    }

    #[test]
    #[should_panic(expected = "again")]
    fn test_resume_reraises() {
        caught(|| panic!("again")).resume();
    }
}
