//! Tackle - scoped, match-or-propagate panic handlers.
//!
//! Tackle lets a function declare, up front, which panics it is willing
//! to catch: specific error values or artefacts of a specific type. The
//! function body then raises with a plain panic instead of threading
//! errors through every call site, and a single callback intercepts the
//! panics that match. Everything else keeps unwinding to the caller.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::LazyLock;
//! use tackle::Scope;
//! use tackle::error::ErrorRef;
//! use tackle::error::Exception;
//! use tackle::tackle;
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
//! let mut report: Vec<String> = Vec::new();
//!
//! let output: Option<i32> = Scope::new()
//!   .defer(tackle([&*ERR_DIVIDE_BY_ZERO]).with(|artefact| {
//!     report.push(format!("{artefact:?}"));
//!   }))
//!   .run(|| divide(1, 0));
//!
//! assert_eq!(output, None);
//! assert_eq!(report, ["Error(divide by zero)"]);
//! ```
//!
//! # Core Modules
//!
//! - [`handler`]: Registration ([`tackle`]) and matching
//! - [`scope`]: Protected scopes and settlement order
//! - [`artefact`]: Panic payloads and type descriptors
//! - [`error`]: Error values and raising primitives
//! - [`consts`]: Crate-wide constants
//!
//! # Limitations
//!
//! - Requires `panic = "unwind"`.
//! - Panics raised on another thread are never observed.
//! - An unmatched payload is resumed as-is; it carries no record of where
//!   it was first raised.
//! - An absorbed panic still runs the process panic hook. The default hook
//!   prints `thread '..' panicked at ..` before any handler sees the
//!   artefact; install a quieter hook with [`std::panic::set_hook`] if that
//!   output is unwanted.

mod target;
mod utils;

pub mod artefact;
pub mod consts;
pub mod error;
pub mod handler;
pub mod scope;

pub use self::artefact::Artefact;
pub use self::artefact::ArtefactType;
pub use self::error::throw;
pub use self::handler::Attachment;
pub use self::handler::Disposition;
pub use self::handler::Handler;
pub use self::handler::tackle;
pub use self::scope::Scope;
pub use self::target::Target;
