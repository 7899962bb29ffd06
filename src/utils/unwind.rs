use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::thread::Result;

/// Executes `f` and captures any panic as an `Err` payload.
///
/// The payload is either absorbed by a handler or handed back to
/// [`resume_unwinding`], so `f` is treated as unwind safe.
#[inline(always)]
pub(crate) fn halt_unwinding<F, R>(f: F) -> Result<R>
where
  F: FnOnce() -> R,
{
  panic::catch_unwind(AssertUnwindSafe(f))
}

/// Resumes unwinding with `payload` without invoking the panic hook again.
#[cold]
pub(crate) fn resume_unwinding(payload: Box<dyn Any + Send>) -> ! {
  panic::resume_unwind(payload)
}
