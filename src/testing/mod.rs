//! Testing helpers: record an event stream and replay it into any sink.
//!
//! Use [`EventRecorder`] to capture what the [`markup`](crate::markup) reader produces, and
//! [`replay`] to drive an [`Emitter`](crate::seed::Emitter) with a hand-built stream,
//! including unbalanced ones.

pub mod recorder;

pub use recorder::{replay, Event, EventRecorder};
