//! Handler registration and matching.
//!
//! A [`Handler`] is a list of things a scope is willing to catch. It is
//! built with [`tackle`] (or the [`tackle!`] macro) and turned into an
//! [`Attachment`] by pairing it with a callback:
//!
//! ```
//! use std::sync::LazyLock;
//! use tackle::error::ErrorRef;
//! use tackle::error::Exception;
//! use tackle::tackle;
//!
//! static ERR_DIVIDE_BY_ZERO: LazyLock<ErrorRef> =
//!   LazyLock::new(|| Exception::shared("divide by zero"));
//!
//! let mut calls: usize = 0;
//!
//! let quotient: Option<i32> = tackle([&*ERR_DIVIDE_BY_ZERO])
//!   .with(|_| calls += 1)
//!   .protect(|| {
//!     tackle::throw(ERR_DIVIDE_BY_ZERO.clone());
//!   });
//!
//! assert_eq!(quotient, None);
//! assert_eq!(calls, 1);
//! ```
//!
//! # Matching
//!
//! An error artefact is absorbed when the handler registered
//! [`ArtefactType::error`] or when one of its value targets is the very
//! same error value. Any other artefact is absorbed when its concrete type
//! was registered. Everything else keeps unwinding.
//!
//! [`tackle!`]: crate::tackle!

use std::any::Any;
use std::any::TypeId;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::sync::Arc;

use crate::artefact::Artefact;
use crate::artefact::ArtefactType;
use crate::consts::TRACING_TARGET;
use crate::error::ErrorRef;
use crate::scope::Scope;
use crate::target::Target;

// -----------------------------------------------------------------------------
// tackle
// -----------------------------------------------------------------------------

/// Builds a [`Handler`] from the given targets.
///
/// This is the same as calling [`Handler::tackle`].
#[inline]
pub fn tackle<I>(targets: I) -> Handler
where
  I: IntoIterator,
  I::Item: Into<Target>,
{
  Handler::tackle(targets)
}

/// Builds a [`Handler`] from a heterogeneous list of targets.
///
/// Each expression is classified with [`Target::classify`]; expressions
/// that are neither an error value nor a type descriptor are discarded.
///
/// # Examples
///
/// ```
/// use tackle::ArtefactType;
/// use tackle::error::Exception;
///
/// let handler = tackle::tackle!(
///   Exception::shared("error: custom string"),
///   ArtefactType::of::<i32>(),
///   "error: string only",
/// );
///
/// assert_eq!(handler.value_targets().len(), 1);
/// assert_eq!(handler.type_targets(), &[ArtefactType::of::<i32>()]);
/// ```
///
/// [`Target::classify`]: crate::Target::classify
#[macro_export]
macro_rules! tackle {
  ($($target:expr),* $(,)?) => {
    $crate::Handler::tackle_any(&[$(&$target as &dyn ::std::any::Any),*])
  };
}

// -----------------------------------------------------------------------------
// Handler
// -----------------------------------------------------------------------------

/// A set of registered targets.
#[derive(Clone, Default)]
pub struct Handler {
  type_targets: Vec<ArtefactType>,
  value_targets: Vec<ErrorRef>,
}

impl Handler {
  /// Builds a handler from the given targets, in order.
  pub fn tackle<I>(targets: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Target>,
  {
    let mut this: Self = Self::default();

    for target in targets {
      this.register(target.into());
    }

    this
  }

  /// Builds a handler from dynamically typed targets, in order.
  ///
  /// Targets rejected by [`Target::classify`] are silently discarded.
  pub fn tackle_any(targets: &[&dyn Any]) -> Self {
    Self::tackle(targets.iter().filter_map(|target| Target::classify(*target)))
  }

  fn register(&mut self, target: Target) {
    match target {
      Target::Value(error) => self.value_targets.push(error),
      Target::Type(artefact_type) => self.type_targets.push(artefact_type),
    }
  }

  /// Returns the registered type descriptors.
  #[inline]
  pub fn type_targets(&self) -> &[ArtefactType] {
    &self.type_targets
  }

  /// Returns the registered error values.
  #[inline]
  pub fn value_targets(&self) -> &[ErrorRef] {
    &self.value_targets
  }

  /// Returns `true` if nothing was registered.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.type_targets.is_empty() && self.value_targets.is_empty()
  }

  /// Returns `true` if this handler would absorb `artefact`.
  pub fn matches(&self, artefact: &Artefact) -> bool {
    match artefact {
      Artefact::Error(error) => {
        // The generic error descriptor wins over specific values.
        self.type_targets.iter().any(ArtefactType::is_error)
          || self
            .value_targets
            .iter()
            .any(|target| Arc::ptr_eq(target, error))
      }
      Artefact::Value(_) => {
        let id: TypeId = artefact.artefact_id();
        self.type_targets.iter().any(|target| target.id() == id)
      }
    }
  }

  /// Pairs this handler with the callback to run when it absorbs a panic.
  ///
  /// The returned [`Attachment`] does nothing on its own; it must be
  /// deferred in a [`Scope`] or used through [`Attachment::protect`].
  #[inline]
  pub fn with<'a, F>(self, handle: F) -> Attachment<'a>
  where
    F: FnOnce(Artefact) + 'a,
  {
    Attachment {
      handler: self,
      handle: Box::new(handle),
    }
  }
}

impl PartialEq for Handler {
  fn eq(&self, other: &Self) -> bool {
    self.type_targets == other.type_targets
      && self.value_targets.len() == other.value_targets.len()
      && self
        .value_targets
        .iter()
        .zip(other.value_targets.iter())
        .all(|(lhs, rhs)| Arc::ptr_eq(lhs, rhs))
  }
}

impl Debug for Handler {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("Handler")
      .field("type_targets", &self.type_targets)
      .field("value_targets", &self.value_targets)
      .finish()
  }
}

// -----------------------------------------------------------------------------
// Disposition
// -----------------------------------------------------------------------------

/// The terminal state of a settled [`Attachment`].
#[derive(Debug)]
pub enum Disposition {
  /// The scope exited normally.
  Idle,
  /// The artefact matched and the callback ran.
  Absorbed,
  /// The artefact did not match and must keep unwinding.
  Propagated(Artefact),
}

impl Disposition {
  /// Returns `true` if the scope exited normally.
  #[inline]
  pub const fn is_idle(&self) -> bool {
    matches!(self, Self::Idle)
  }

  /// Returns `true` if the callback ran.
  #[inline]
  pub const fn is_absorbed(&self) -> bool {
    matches!(self, Self::Absorbed)
  }

  /// Returns `true` if the artefact must keep unwinding.
  #[inline]
  pub const fn is_propagated(&self) -> bool {
    matches!(self, Self::Propagated(_))
  }
}

// -----------------------------------------------------------------------------
// Attachment
// -----------------------------------------------------------------------------

/// A [`Handler`] paired with its callback.
pub struct Attachment<'a> {
  handler: Handler,
  handle: Box<dyn FnOnce(Artefact) + 'a>,
}

impl Attachment<'_> {
  /// Returns the handler of this attachment.
  #[inline]
  pub const fn handler(&self) -> &Handler {
    &self.handler
  }

  /// Settles the attachment against the in-flight artefact, if any.
  ///
  /// `None` means the scope exited normally and the callback is dropped
  /// without running.
  pub fn settle(self, artefact: Option<Artefact>) -> Disposition {
    let Some(artefact) = artefact else {
      tracing::trace!(target: TRACING_TARGET, result = "idle");
      return Disposition::Idle;
    };

    let kind: &'static str = if artefact.is_error() { "error" } else { "value" };

    if self.handler.matches(&artefact) {
      tracing::trace!(target: TRACING_TARGET, kind, result = "absorbed");
      (self.handle)(artefact);
      Disposition::Absorbed
    } else {
      tracing::trace!(target: TRACING_TARGET, kind, result = "propagated");
      Disposition::Propagated(artefact)
    }
  }

  /// Runs `body` in a scope guarded by this attachment alone.
  ///
  /// This is the same as `Scope::new().defer(self).run(body)`.
  #[inline]
  pub fn protect<F, R>(self, body: F) -> Option<R>
  where
    F: FnOnce() -> R,
  {
    Scope::new().defer(self).run(body)
  }
}

impl Debug for Attachment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("Attachment")
      .field("handler", &self.handler)
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
