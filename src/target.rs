use std::any::Any;
use std::sync::LazyLock;

use crate::artefact::ArtefactType;
use crate::error::ErrorRef;

/// A registration input accepted by [`tackle`].
///
/// [`tackle`]: crate::tackle()
#[derive(Clone, Debug)]
pub enum Target {
  /// A specific error value, matched by identity.
  Value(ErrorRef),
  /// A type descriptor, matched by exact type.
  Type(ArtefactType),
}

impl Target {
  /// Classifies an arbitrary registration input.
  ///
  /// Accepts an [`ErrorRef`], a `LazyLock<ErrorRef>` (the usual shape of a
  /// sentinel static), or an [`ArtefactType`]. Anything else yields `None`
  /// and is meant to be discarded without a trace.
  ///
  /// # Examples
  ///
  /// ```
  /// use tackle::ArtefactType;
  /// use tackle::Target;
  /// use tackle::error::Exception;
  ///
  /// assert!(matches!(Target::classify(&Exception::shared("x")), Some(Target::Value(_))));
  /// assert!(matches!(Target::classify(&ArtefactType::of::<u8>()), Some(Target::Type(_))));
  /// assert!(Target::classify(&"not a target").is_none());
  /// ```
  pub fn classify(target: &dyn Any) -> Option<Self> {
    if let Some(error) = target.downcast_ref::<ErrorRef>() {
      return Some(Self::Value(error.clone()));
    }

    if let Some(error) = target.downcast_ref::<LazyLock<ErrorRef>>() {
      return Some(Self::Value(ErrorRef::clone(error)));
    }

    if let Some(artefact_type) = target.downcast_ref::<ArtefactType>() {
      return Some(Self::Type(*artefact_type));
    }

    None
  }
}

impl From<ErrorRef> for Target {
  #[inline]
  fn from(other: ErrorRef) -> Self {
    Self::Value(other)
  }
}

impl From<&ErrorRef> for Target {
  #[inline]
  fn from(other: &ErrorRef) -> Self {
    Self::Value(other.clone())
  }
}

impl From<ArtefactType> for Target {
  #[inline]
  fn from(other: ArtefactType) -> Self {
    Self::Type(other)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::sync::LazyLock;
  use std::sync::atomic::AtomicUsize;
  use std::sync::atomic::Ordering;
  use tracing::Event;
  use tracing::Subscriber;
  use tracing_subscriber::Layer;
  use tracing_subscriber::layer::Context;
  use tracing_subscriber::layer::SubscriberExt;

  use crate::artefact::ArtefactType;
  use crate::error::ErrorRef;
  use crate::error::Exception;
  use crate::handler::Disposition;
  use crate::handler::Handler;
  use crate::target::Target;

  struct CountEvents(Arc<AtomicUsize>);

  impl<S> Layer<S> for CountEvents
  where
    S: Subscriber,
  {
    fn on_event(&self, _event: &Event<'_>, _context: Context<'_, S>) {
      self.0.fetch_add(1, Ordering::Relaxed);
    }
  }

  static ERR_SENTINEL: LazyLock<ErrorRef> = LazyLock::new(|| Exception::shared("sentinel"));

  #[test]
  fn test_classify_error_value() {
    let error: ErrorRef = Exception::shared("value");

    match Target::classify(&error) {
      Some(Target::Value(target)) => assert!(Arc::ptr_eq(&target, &error)),
      other => panic!("unexpected classification: {other:?}"),
    }
  }

  #[test]
  fn test_classify_lazy_sentinel() {
    match Target::classify(&ERR_SENTINEL) {
      Some(Target::Value(target)) => assert!(Arc::ptr_eq(&target, &*ERR_SENTINEL)),
      other => panic!("unexpected classification: {other:?}"),
    }
  }

  #[test]
  fn test_classify_type() {
    match Target::classify(&ArtefactType::of::<String>()) {
      Some(Target::Type(target)) => assert_eq!(target, ArtefactType::of::<String>()),
      other => panic!("unexpected classification: {other:?}"),
    }
  }

  #[test]
  fn test_classify_discards_unknown() {
    assert!(Target::classify(&"error: string only").is_none());
    assert!(Target::classify(&7_i32).is_none());
    assert!(Target::classify(&Exception::new("not shared")).is_none());
  }

  #[test]
  fn test_discard_emits_no_events() {
    let discarded: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let settled: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

    let subscriber = tracing_subscriber::registry().with(CountEvents(discarded.clone()));

    tracing::subscriber::with_default(subscriber, || {
      let handler: Handler = crate::tackle!("not a target", 7_u32);
      assert!(handler.is_empty());
    });

    let subscriber = tracing_subscriber::registry().with(CountEvents(settled.clone()));

    // The same layer does observe the crate's other events.
    tracing::subscriber::with_default(subscriber, || {
      let disposition: Disposition = crate::tackle([ArtefactType::error()])
        .with(|_| {})
        .settle(None);
      assert!(disposition.is_idle());
    });

    assert_eq!(discarded.load(Ordering::Relaxed), 0);
    assert_eq!(settled.load(Ordering::Relaxed), 1);
  }
}
