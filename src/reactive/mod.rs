//! Reactive primitives shared by the view-models.
//!
//! - [`Observable`]: single-threaded value cell with ordered change
//!   notification and RAII [`Subscription`]s.
//! - [`Batch`]: holds notifications for a group of writes so subscribers
//!   never observe a half-applied update.
//! - [`Debouncer`] / [`RemoveDuplicates`]: clock-explicit stream stages used
//!   by the echo pipeline.

mod debounce;
mod observable;

pub use debounce::{Debouncer, RemoveDuplicates};
pub use observable::{Batch, Observable, Subscription, Watch};
