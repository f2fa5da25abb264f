//! In-memory [`Source`][rearview::Source] implementations for testing code
//! built on [`rearview`].
//!
//! - [`Subject`]: delivers exactly the events pushed into it, synchronously
//! - [`DeferredSubject`]: like [`Subject`], but holds events back until the
//!   test drives delivery
//! - [`empty`]: completes immediately
//! - [`never`]: never delivers anything
//!
//! None of these spawn threads or do any I/O.

mod deferred;
mod empty;
mod never;
mod subject;

pub use deferred::DeferredSubject;
pub use empty::{empty, Empty};
pub use never::{never, Never};
pub use subject::Subject;
