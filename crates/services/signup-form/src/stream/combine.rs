//! Combine-latest node.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};

/// Holds the last value seen on each of two input edges and emits the pair
/// whenever either edge produces a value, once both have produced at least
/// one.
///
/// Ends when both inputs have ended, or as soon as one input ends without
/// ever producing a value.
#[must_use = "streams do nothing unless polled"]
pub struct CombineLatest<A: Stream, B: Stream> {
    a: A,
    b: B,
    latest_a: Option<A::Item>,
    latest_b: Option<B::Item>,
    a_done: bool,
    b_done: bool,
}

impl<A: Stream + Unpin, B: Stream + Unpin> Unpin for CombineLatest<A, B> {}

impl<A, B> CombineLatest<A, B>
where
    A: Stream + Unpin,
    B: Stream + Unpin,
    A::Item: Clone,
    B::Item: Clone,
{
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            latest_a: None,
            latest_b: None,
            a_done: false,
            b_done: false,
        }
    }

    fn starved(&self) -> bool {
        (self.a_done && self.latest_a.is_none()) || (self.b_done && self.latest_b.is_none())
    }
}

/// Poll one edge, recording its value. Returns true when a value arrived.
fn poll_edge<S: Stream + Unpin>(
    stream: &mut S,
    latest: &mut Option<S::Item>,
    done: &mut bool,
    cx: &mut Context<'_>,
) -> bool {
    if *done {
        return false;
    }
    match Pin::new(stream).poll_next(cx) {
        Poll::Ready(Some(item)) => {
            *latest = Some(item);
            true
        }
        Poll::Ready(None) => {
            *done = true;
            false
        }
        Poll::Pending => false,
    }
}

impl<A, B> Stream for CombineLatest<A, B>
where
    A: Stream + Unpin,
    B: Stream + Unpin,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        loop {
            let updated_a = poll_edge(&mut this.a, &mut this.latest_a, &mut this.a_done, cx);
            let updated_b = poll_edge(&mut this.b, &mut this.latest_b, &mut this.b_done, cx);

            if updated_a || updated_b {
                if let (Some(a), Some(b)) = (&this.latest_a, &this.latest_b) {
                    return Poll::Ready(Some((a.clone(), b.clone())));
                }
            }

            if this.starved() || (this.a_done && this.b_done) {
                return Poll::Ready(None);
            }

            if !(updated_a || updated_b) {
                return Poll::Pending;
            }
        }
    }
}

/// Combine-latest over two edges.
pub fn combine_latest<A, B>(a: A, b: B) -> CombineLatest<A, B>
where
    A: Stream + Unpin,
    B: Stream + Unpin,
    A::Item: Clone,
    B::Item: Clone,
{
    CombineLatest::new(a, b)
}

/// Combine-latest over three edges, built from two nested pair nodes.
pub fn combine_latest3<A, B, C>(
    a: A,
    b: B,
    c: C,
) -> impl Stream<Item = (A::Item, B::Item, C::Item)> + Unpin
where
    A: Stream + Unpin,
    B: Stream + Unpin,
    C: Stream + Unpin,
    A::Item: Clone,
    B::Item: Clone,
    C::Item: Clone,
{
    CombineLatest::new(CombineLatest::new(a, b), c).map(|((a, b), c)| (a, b, c))
}
