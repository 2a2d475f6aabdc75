//! Stream nodes for the validation pipeline.
//!
//! Every node is a plain [`futures::Stream`] that owns its input edges, so a
//! pipeline is a tree of values: polling the root drives the whole graph and
//! dropping the root tears all of it down, timers included.
//!
//! - [`Debounce`]: emit the latest value after a quiet interval
//! - [`RemoveDuplicates`]: drop values equal to the previous emission
//! - [`CombineLatest`]: recompute from the latest value of every edge

mod combine;
mod debounce;
mod dedup;

use std::time::Duration;

use futures::Stream;

pub use combine::{combine_latest, combine_latest3, CombineLatest};
pub use debounce::Debounce;
pub use dedup::RemoveDuplicates;

/// Pipeline operators on top of [`futures::StreamExt`].
pub trait PipelineStreamExt: Stream + Sized {
    /// Emit the most recent item once no new item arrived for `delay`.
    fn debounce(self, delay: Duration) -> Debounce<Self>
    where
        Self: Unpin,
    {
        Debounce::new(self, delay)
    }

    /// Suppress items equal to the immediately preceding emission.
    fn remove_duplicates(self) -> RemoveDuplicates<Self>
    where
        Self: Unpin,
        Self::Item: Clone + PartialEq,
    {
        RemoveDuplicates::new(self)
    }
}

impl<S: Stream> PipelineStreamExt for S {}
