//! Protected scopes.
//!
//! A [`Scope`] is the stack of [`Attachment`]s guarding one body of code.
//! The body runs under [`std::panic::catch_unwind`]; when it exits, each
//! attachment is settled in reverse registration order, the same order in
//! which deferred cleanups unwind:
//!
//! - on a normal exit every attachment is idle and the body's value is
//!   returned;
//! - on a panic, the first attachment whose handler matches absorbs the
//!   artefact and the remaining ones are idle;
//! - if no attachment matches, the original payload resumes unwinding
//!   toward an enclosing scope.
//!
//! A callback that panics replaces the in-flight artefact, and the
//! remaining attachments are offered the new one.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use tackle::ArtefactType;
//! use tackle::Scope;
//! use tackle::tackle;
//!
//! let log: RefCell<Vec<&str>> = RefCell::new(Vec::new());
//!
//! let output: Option<()> = Scope::new()
//!   .defer(tackle([ArtefactType::of::<&str>()]).with(|_| log.borrow_mut().push("first")))
//!   .defer(tackle([ArtefactType::of::<&str>()]).with(|_| log.borrow_mut().push("second")))
//!   .run(|| panic!("error message string"));
//!
//! assert_eq!(output, None);
//! assert_eq!(*log.borrow(), ["second"]);
//! ```
//!
//! # Unwind Safety
//!
//! The body is not required to be [`UnwindSafe`]: a matched panic is
//! absorbed by a callback that already expects the body to have been cut
//! short, and an unmatched one keeps unwinding.
//!
//! [`UnwindSafe`]: std::panic::UnwindSafe

use crate::artefact::Artefact;
use crate::consts::CAP_SCOPE_ATTACHMENTS;
use crate::consts::TRACING_TARGET;
use crate::handler::Attachment;
use crate::handler::Disposition;
use crate::utils::CatchUnwind;
use crate::utils::halt_unwinding;
use crate::utils::resume_unwinding;

/// A stack of attachments guarding one body of code.
#[derive(Debug)]
pub struct Scope<'a> {
  attachments: Vec<Attachment<'a>>,
}

impl<'a> Scope<'a> {
  /// Creates an empty scope.
  #[inline]
  pub fn new() -> Self {
    Self {
      attachments: Vec::with_capacity(CAP_SCOPE_ATTACHMENTS),
    }
  }

  /// Pushes `attachment` on top of the stack.
  ///
  /// The most recently deferred attachment is settled first.
  #[inline]
  #[must_use]
  pub fn defer(mut self, attachment: Attachment<'a>) -> Self {
    self.attachments.push(attachment);
    self
  }

  /// Returns the number of deferred attachments.
  #[inline]
  pub fn len(&self) -> usize {
    self.attachments.len()
  }

  /// Returns `true` if nothing was deferred.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.attachments.is_empty()
  }

  /// Runs `body` under this scope.
  ///
  /// Returns `Some` with the body's value on a normal exit and `None` when
  /// a panic was absorbed. An unmatched panic resumes unwinding.
  pub fn run<F, R>(self, body: F) -> Option<R>
  where
    F: FnOnce() -> R,
  {
    self.settle(halt_unwinding(body))
  }

  /// Drives `future` to completion under this scope.
  ///
  /// Every poll of `future` is guarded; a panic from any poll is settled
  /// exactly as [`run`] would settle a panic from its body.
  ///
  /// [`run`]: Self::run
  pub async fn run_future<F>(self, future: F) -> Option<F::Output>
  where
    F: Future,
  {
    let result: Result<F::Output, _> = CatchUnwind::new(future).await;

    self.settle(result)
  }

  fn settle<R>(self, result: std::thread::Result<R>) -> Option<R> {
    let (output, mut artefact): (Option<R>, Option<Artefact>) = match result {
      Ok(output) => (Some(output), None),
      Err(payload) => (None, Some(Artefact::from_payload(payload))),
    };

    for attachment in self.attachments.into_iter().rev() {
      let current: Option<Artefact> = artefact.take();

      match halt_unwinding(|| attachment.settle(current)) {
        Ok(Disposition::Idle | Disposition::Absorbed) => {}
        Ok(Disposition::Propagated(unmatched)) => {
          artefact = Some(unmatched);
        }
        Err(payload) => {
          tracing::debug!(target: TRACING_TARGET, result = "replaced", "handle callback panicked");
          artefact = Some(Artefact::from_payload(payload));
        }
      }
    }

    if let Some(artefact) = artefact {
      tracing::debug!(target: TRACING_TARGET, result = "propagated", "no handler matched");
      resume_unwinding(artefact.into_payload());
    }

    output
  }
}

impl Default for Scope<'_> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
