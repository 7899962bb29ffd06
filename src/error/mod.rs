//! Error values and the primitives that raise them.
//!
//! # Error Capability
//!
//! A panic payload is treated as an *error* when it is an [`ErrorRef`]:
//! a shared, type-erased [`std::error::Error`]. Every other payload is an
//! arbitrary value and can only be matched by its concrete type.
//!
//! The identity of an error value is the identity of its allocation. Two
//! errors created from the same message are still different values:
//!
//! ```
//! use std::sync::Arc;
//! use tackle::error::Exception;
//!
//! let a = Exception::shared("disk full");
//! let b = Exception::shared("disk full");
//!
//! assert!(!Arc::ptr_eq(&a, &b));
//! ```
//!
//! # Raising Errors
//!
//! Use [`throw`] to raise a specific error value, usually a sentinel kept
//! in a static:
//!
//! ```should_panic
//! use std::sync::LazyLock;
//! use tackle::error::ErrorRef;
//! use tackle::error::Exception;
//!
//! static ERR_DIVIDE_BY_ZERO: LazyLock<ErrorRef> =
//!   LazyLock::new(|| Exception::shared("divide by zero"));
//!
//! fn divide(lhs: i32, rhs: i32) -> i32 {
//!   if rhs == 0 {
//!     tackle::throw(ERR_DIVIDE_BY_ZERO.clone());
//!   }
//!
//!   lhs / rhs
//! }
//!
//! divide(1, 0);
//! ```
//!
//! Use [`raise!`] to raise a one-off [`Exception`] built from a format
//! string. Such an error can only be caught by a handler registered for
//! [`ArtefactType::error`].
//!
//! [`raise!`]: crate::raise!
//! [`ArtefactType::error`]: crate::ArtefactType::error

mod exception;

pub use self::exception::Exception;

use std::error::Error;
use std::panic;
use std::sync::Arc;

/// A shared, type-erased error value.
///
/// This is the only payload type recognized as an error artefact.
pub type ErrorRef = Arc<dyn Error + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// Raising
// -----------------------------------------------------------------------------

/// Raises `error` as the payload of a new panic.
///
/// The panic unwinds until a [`Scope`] with a matching attachment absorbs
/// it, or reaches the top of the thread.
///
/// [`Scope`]: crate::Scope
#[cold]
#[track_caller]
pub fn throw(error: ErrorRef) -> ! {
  panic::panic_any(error)
}

// -----------------------------------------------------------------------------
// raise!
// -----------------------------------------------------------------------------

/// Raises a fresh [`Exception`] built from a format string.
///
/// # Examples
///
/// ```
/// use tackle::ArtefactType;
/// use tackle::tackle;
///
/// let mut caught: Option<String> = None;
///
/// tackle([ArtefactType::error()])
///   .with(|artefact| caught = artefact.as_error().map(ToString::to_string))
///   .protect(|| tackle::raise!("bad input: {}", 42));
///
/// assert_eq!(caught.as_deref(), Some("bad input: 42"));
/// ```
#[macro_export]
macro_rules! raise {
  ($($arg:tt)+) => {
    $crate::error::throw($crate::error::Exception::shared(::std::format!($($arg)+)))
  };
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::any::Any;
  use std::panic;
  use std::panic::AssertUnwindSafe;
  use std::sync::Arc;

  use crate::error::ErrorRef;
  use crate::error::Exception;
  use crate::error::throw;

  #[test]
  fn test_throw_payload_is_error_ref() {
    let error: ErrorRef = Exception::shared("boom");
    let thrown: ErrorRef = error.clone();
    let payload: Box<dyn Any + Send> = panic::catch_unwind(AssertUnwindSafe(|| throw(thrown))).unwrap_err();

    let caught: &ErrorRef = payload.downcast_ref::<ErrorRef>().unwrap();

    assert!(Arc::ptr_eq(caught, &error));
  }

  #[test]
  fn test_raise_macro_formats_message() {
    let payload: Box<dyn Any + Send> = panic::catch_unwind(|| raise!("code {}", 7)).unwrap_err();
    let caught: &ErrorRef = payload.downcast_ref::<ErrorRef>().unwrap();

    assert_eq!(caught.to_string(), "code 7");
  }
}
