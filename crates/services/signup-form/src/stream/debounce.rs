//! Debounce node: re-emit the latest value once the source has been quiet.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::time::{sleep_until, Instant, Sleep};

/// Stream returned by [`PipelineStreamExt::debounce`](super::PipelineStreamExt::debounce).
///
/// Every upstream item restarts the quiet timer; only the last item of a
/// burst is emitted, and never in the same poll that received it. When the
/// source ends, a pending item is flushed immediately.
#[must_use = "streams do nothing unless polled"]
pub struct Debounce<S: Stream> {
    stream: S,
    delay: Duration,
    pending: Option<S::Item>,
    // Created on first use so the node can be built outside a runtime.
    timer: Option<Pin<Box<Sleep>>>,
    upstream_done: bool,
}

impl<S: Stream + Unpin> Unpin for Debounce<S> {}

impl<S: Stream + Unpin> Debounce<S> {
    pub(crate) fn new(stream: S, delay: Duration) -> Self {
        Self {
            stream,
            delay,
            pending: None,
            timer: None,
            upstream_done: false,
        }
    }

    fn restart_timer(&mut self) {
        let deadline = Instant::now() + self.delay;
        if let Some(timer) = self.timer.as_mut() {
            timer.as_mut().reset(deadline);
        } else {
            self.timer = Some(Box::pin(sleep_until(deadline)));
        }
    }
}

impl<S: Stream + Unpin> Stream for Debounce<S> {
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = &mut *self;

        while !this.upstream_done {
            match Pin::new(&mut this.stream).poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    this.pending = Some(item);
                    this.restart_timer();
                }
                Poll::Ready(None) => this.upstream_done = true,
                Poll::Pending => break,
            }
        }

        if this.pending.is_none() {
            return if this.upstream_done {
                Poll::Ready(None)
            } else {
                Poll::Pending
            };
        }

        if this.upstream_done {
            return Poll::Ready(this.pending.take());
        }

        match this.timer.as_mut() {
            Some(timer) => {
                if timer.as_mut().poll(cx).is_ready() {
                    Poll::Ready(this.pending.take())
                } else {
                    Poll::Pending
                }
            }
            None => Poll::Pending,
        }
    }
}
