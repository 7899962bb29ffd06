//! Unwinding helpers shared by [`Scope`].
//!
//! # Contents
//!
//! - [`CatchUnwind`]: Future wrapper for catching panics
//! - [`halt_unwinding`] / [`resume_unwinding`]: closure-level counterparts
//!
//! [`Scope`]: crate::Scope

mod futures;
mod unwind;

pub(crate) use self::futures::CatchUnwind;
pub(crate) use self::unwind::halt_unwinding;
pub(crate) use self::unwind::resume_unwinding;
