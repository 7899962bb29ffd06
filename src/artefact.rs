//! The values carried by an unwinding panic.
//!
//! A raw panic payload is a `Box<dyn Any + Send>`. [`Artefact`] splits it
//! into the two shapes a handler can match on:
//!
//! - [`Artefact::Error`]: the payload is an [`ErrorRef`], matched by value
//!   identity or by the generic [`ArtefactType::error`] descriptor.
//! - [`Artefact::Value`]: anything else, matched by its concrete type.

use std::any::Any;
use std::any::TypeId;
use std::any::type_name;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::hash::Hash;
use std::hash::Hasher;

use crate::error::ErrorRef;

// -----------------------------------------------------------------------------
// Artefact Type
// -----------------------------------------------------------------------------

/// A nominal type descriptor.
///
/// Two descriptors are equal only when they describe the exact same type;
/// the stored name is for diagnostics and takes no part in comparison.
#[derive(Clone, Copy)]
pub struct ArtefactType {
  id: TypeId,
  name: &'static str,
}

impl ArtefactType {
  /// Returns the descriptor of `T`.
  ///
  /// # Examples
  ///
  /// ```
  /// use tackle::ArtefactType;
  ///
  /// assert_eq!(ArtefactType::of::<String>(), ArtefactType::of::<String>());
  /// assert_ne!(ArtefactType::of::<String>(), ArtefactType::of::<&'static str>());
  /// ```
  #[inline]
  pub fn of<T>() -> Self
  where
    T: Any + ?Sized,
  {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  /// Returns the descriptor standing for "any error".
  ///
  /// A handler registered with this descriptor absorbs every
  /// [`Artefact::Error`], regardless of its value targets.
  #[inline]
  pub fn error() -> Self {
    Self::of::<ErrorRef>()
  }

  /// Returns `true` if this is the generic error descriptor.
  #[inline]
  pub fn is_error(&self) -> bool {
    self.id == TypeId::of::<ErrorRef>()
  }

  /// Returns the underlying [`TypeId`].
  #[inline]
  pub const fn id(&self) -> TypeId {
    self.id
  }

  /// Returns the name of the described type.
  #[inline]
  pub const fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for ArtefactType {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for ArtefactType {}

impl Hash for ArtefactType {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl Debug for ArtefactType {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_tuple("ArtefactType").field(&self.name).finish()
  }
}

impl Display for ArtefactType {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.name)
  }
}

// -----------------------------------------------------------------------------
// Artefact
// -----------------------------------------------------------------------------

/// The payload of an in-flight panic.
pub enum Artefact {
  /// An error value raised with [`throw`] or [`raise!`].
  ///
  /// [`throw`]: crate::throw
  /// [`raise!`]: crate::raise!
  Error(ErrorRef),
  /// Any other payload.
  Value(Box<dyn Any + Send>),
}

impl Artefact {
  /// Classifies a raw panic payload.
  pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
    match payload.downcast::<ErrorRef>() {
      Ok(error) => Self::Error(*error),
      Err(payload) => Self::Value(payload),
    }
  }

  /// Converts the artefact back into a raw panic payload.
  ///
  /// The payload holds the same value that was raised, so it can be handed
  /// to [`std::panic::resume_unwind`].
  pub fn into_payload(self) -> Box<dyn Any + Send> {
    match self {
      Self::Error(error) => Box::new(error),
      Self::Value(value) => value,
    }
  }

  /// Returns `true` if the artefact is an error value.
  #[inline]
  pub const fn is_error(&self) -> bool {
    matches!(self, Self::Error(_))
  }

  /// Returns the error value, if any.
  #[inline]
  pub const fn as_error(&self) -> Option<&ErrorRef> {
    match self {
      Self::Error(error) => Some(error),
      Self::Value(_) => None,
    }
  }

  /// Returns the [`TypeId`] of the raised value.
  ///
  /// Error artefacts report the id of [`ErrorRef`]. This is not the id of
  /// `Artefact` itself, which [`Any::type_id`] still returns.
  pub fn artefact_id(&self) -> TypeId {
    match self {
      Self::Error(_) => TypeId::of::<ErrorRef>(),
      // Deref past the box, `Box::type_id` is the id of the box itself.
      Self::Value(value) => (**value).type_id(),
    }
  }

  /// Returns `true` if the raised value is exactly of type `T`.
  #[inline]
  pub fn is<T>(&self) -> bool
  where
    T: Any,
  {
    self.artefact_id() == TypeId::of::<T>()
  }

  /// Returns a reference to the raised value if it is of type `T`.
  pub fn downcast_ref<T>(&self) -> Option<&T>
  where
    T: Any,
  {
    match self {
      Self::Error(error) => (error as &dyn Any).downcast_ref::<T>(),
      Self::Value(value) => value.downcast_ref::<T>(),
    }
  }

  /// Returns the panic message when the artefact carries text.
  ///
  /// This covers `&'static str` and `String` values (what `panic!` raises)
  /// but not error values; use [`as_error`] for those.
  ///
  /// [`as_error`]: Self::as_error
  pub fn message(&self) -> Option<&str> {
    if let Some(message) = self.downcast_ref::<&'static str>() {
      Some(*message)
    } else {
      self.downcast_ref::<String>().map(String::as_str)
    }
  }
}

impl From<Box<dyn Any + Send>> for Artefact {
  #[inline]
  fn from(other: Box<dyn Any + Send>) -> Self {
    Self::from_payload(other)
  }
}

impl Debug for Artefact {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
      Self::Value(_) => match self.message() {
        Some(message) => f.debug_tuple("Value").field(&message).finish(),
        None => f.write_str("Value(..)"),
      },
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
