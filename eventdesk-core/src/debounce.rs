//! Coalescing of rapid input.
//!
//! Values pushed into a [`Debouncer`] come out of [`Debouncer::next`] only
//! once input has been quiet for the configured window, and only the latest
//! value of each burst is delivered.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    output: mpsc::UnboundedReceiver<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Must be called from within a tokio runtime.
    pub fn new(window: Duration) -> Self {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output) = mpsc::unbounded_channel();
        let task = tokio::spawn(coalesce(window, input_rx, output_tx));

        Debouncer {
            input,
            output,
            task,
        }
    }

    /// Replace any pending value and restart the quiet window.
    pub fn push(&self, value: T) {
        if self.input.send(value).is_err() {
            tracing::warn!("debouncer task is gone, dropping input");
        }
    }

    /// Wait for the next settled value.
    pub async fn next(&mut self) -> Option<T> {
        self.output.recv().await
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn coalesce<T>(
    window: Duration,
    mut input: mpsc::UnboundedReceiver<T>,
    output: mpsc::UnboundedSender<T>,
) {
    while let Some(mut latest) = input.recv().await {
        loop {
            tokio::select! {
                next = input.recv() => match next {
                    Some(value) => latest = value,
                    None => {
                        let _ = output.send(latest);
                        return;
                    }
                },
                _ = tokio::time::sleep(window) => break,
            }
        }

        if output.send(latest).is_err() {
            return;
        }
    }
}
