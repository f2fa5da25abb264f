//! Pull-based reads over push-based sources.
//!
//! This crate implements the "latest value" half of the
//! [Observer pattern][]: a [`Mirror<T>`] subscribes to a push-based
//! [`Source`] once, at construction time, and from then on keeps hold of the
//! most recent value the source delivered. The value can be read back at any
//! time, from any thread, without waiting for the next delivery.
//!
//! A mirror never surfaces its source's failure: if the source reports an
//! error, the error is swallowed and the value falls back to the initial
//! one. This makes `Mirror` a good fit for UI-style code that wants a value
//! that is *always there*, with failures handled elsewhere.
//!
//! The companion crate `rearview-testing` provides simple in-memory sources,
//! used in tests and in the examples below.
//!
//! Here is a quick walk-through:
//!
//! ```
//! use rearview::SourceExt as _;
//! use rearview_testing::Subject;
//!
//! let subject: Subject<String, &str> = Subject::new();
//! let mirror = subject.mirror("offline".to_owned());
//!
//! // You can read the current value at any time, without waiting.
//! assert_eq!(mirror.get(), "offline");
//!
//! subject.emit("connecting".to_owned());
//! subject.emit("online".to_owned());
//! // Only the latest delivery is kept.
//! assert_eq!(mirror.get(), "online");
//!
//! // You can also borrow the value instead of cloning it, by using
//! // `.read()`. However, note that while the returned read guard is
//! // alive, deliveries from the source are blocked.
//! {
//!     let value = mirror.read();
//!     assert_eq!(*value, "online");
//! }
//!
//! // If the source fails, the error is swallowed and the mirror falls
//! // back to its initial value.
//! subject.error("connection lost");
//! assert_eq!(mirror.get(), "offline");
//!
//! // Unsubscribing freezes the value. The registration with the source
//! // is also released automatically when the mirror is dropped.
//! let subject: Subject<u8, &str> = Subject::new();
//! let mirror = subject.mirror(0);
//! subject.emit(1);
//! mirror.unsubscribe();
//! subject.emit(2);
//! assert_eq!(mirror.get(), 1);
//! ```
//!
//! Cargo features:
//!
//! - `tracing`: Emit [tracing] events when values are stored, reset or
//!   ignored
//!
//! [Observer pattern]: https://en.wikipedia.org/wiki/Observer_pattern
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms, unreachable_pub)]

mod mirror;
mod read_guard;
mod source;
mod state;
mod subscription;

pub use mirror::Mirror;
pub use read_guard::MirrorReadGuard;
pub use source::{Observer, Source, SourceExt};
pub use subscription::Subscription;
