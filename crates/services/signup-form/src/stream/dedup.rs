//! Remove-duplicates node.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{ready, Stream};

/// Stream returned by
/// [`PipelineStreamExt::remove_duplicates`](super::PipelineStreamExt::remove_duplicates).
///
/// Suppresses items equal to the immediately preceding emission.
#[must_use = "streams do nothing unless polled"]
pub struct RemoveDuplicates<S: Stream> {
    stream: S,
    last: Option<S::Item>,
}

impl<S: Stream + Unpin> Unpin for RemoveDuplicates<S> {}

impl<S> RemoveDuplicates<S>
where
    S: Stream + Unpin,
    S::Item: Clone + PartialEq,
{
    pub(crate) fn new(stream: S) -> Self {
        Self { stream, last: None }
    }
}

impl<S> Stream for RemoveDuplicates<S>
where
    S: Stream + Unpin,
    S::Item: Clone + PartialEq,
{
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = &mut *self;
        loop {
            match ready!(Pin::new(&mut this.stream).poll_next(cx)) {
                Some(item) if this.last.as_ref() == Some(&item) => continue,
                Some(item) => {
                    this.last = Some(item.clone());
                    return Poll::Ready(Some(item));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::{stream, StreamExt};

    use crate::stream::PipelineStreamExt;

    #[tokio::test]
    async fn test_consecutive_duplicates_dropped() {
        let out: Vec<_> = stream::iter(["a", "a", "b", "b", "b", "a", ""])
            .remove_duplicates()
            .collect()
            .await;
        assert_eq!(out, vec!["a", "b", "a", ""]);
    }

    #[tokio::test]
    async fn test_first_value_always_passes() {
        let out: Vec<_> = stream::iter([false]).remove_duplicates().collect().await;
        assert_eq!(out, vec![false]);
    }
}
