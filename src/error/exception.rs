use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::sync::Arc;

use crate::error::ErrorRef;

/// A plain message error.
///
/// Exceptions are usually created through [`Exception::shared`] and raised
/// with [`throw`] or the [`raise!`] macro.
///
/// # Display Format
///
/// Exceptions format as their message, without decoration.
///
/// [`throw`]: crate::error::throw
/// [`raise!`]: crate::raise!
pub struct Exception {
  error: String,
}

impl Exception {
  /// Creates a new exception with the given message.
  #[inline]
  pub fn new<T>(error: T) -> Self
  where
    T: Display,
  {
    Self {
      error: error.to_string(),
    }
  }

  /// Creates a new exception and returns it as a distinct [`ErrorRef`].
  ///
  /// Every call yields a new error value; it only ever matches itself.
  #[inline]
  pub fn shared<T>(error: T) -> ErrorRef
  where
    T: Display,
  {
    Arc::new(Self::new(error))
  }

  /// Returns the human-readable error message.
  #[inline]
  pub const fn error(&self) -> &str {
    self.error.as_str()
  }
}

impl Debug for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.error())
  }
}

impl Error for Exception {}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::error::Exception;

  #[test]
  fn test_display() {
    assert_eq!(format!("{}", Exception::new("custom error")), "custom error");
    assert_eq!(format!("{:?}", Exception::new("custom error")), "custom error");
  }

  #[test]
  fn test_shared_keeps_message() {
    assert_eq!(Exception::shared("shared").to_string(), "shared");
    assert_eq!(Exception::new(format!("code {}", 7)).error(), "code 7");
  }
}
