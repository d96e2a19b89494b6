//! Async task queue with concurrency control.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct AsyncTaskQueue {
    semaphore: Arc<Semaphore>,
}

impl AsyncTaskQueue {
    pub fn new(concurrency: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    pub async fn add<T, F>(&self, task: F) -> T
    where
        F: Future<Output = T> + Send,
        T: Send,
    {
        // The semaphore is never closed, so a permit is always granted.
        let _permit = self.semaphore.acquire().await.ok();
        task.await
    }

    /// Spawn tasks as they arrive on `tasks`, yielding their handles in
    /// arrival order. Awaiting the handles one by one gives ordered output
    /// while later tasks keep running. At most `backlog` handles wait to be
    /// picked up, so a slow consumer stalls the producer.
    pub fn spawn_ordered<T, F>(
        &self,
        mut tasks: mpsc::Receiver<F>,
        backlog: usize,
    ) -> mpsc::Receiver<JoinHandle<T>>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (handle_tx, handle_rx) = mpsc::channel(backlog.max(1));
        let queue = self.clone();
        tokio::spawn(async move {
            while let Some(task) = tasks.recv().await {
                let worker = queue.clone();
                let handle = tokio::spawn(async move { worker.add(task).await });
                if handle_tx.send(handle).await.is_err() {
                    break;
                }
            }
        });
        handle_rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn keeps_arrival_order() {
        let queue = AsyncTaskQueue::new(4);
        let (tx, rx) = mpsc::channel(2);
        let mut handles = queue.spawn_ordered(rx, 2);

        tokio::spawn(async move {
            for i in 0..8u64 {
                let task = async move {
                    tokio::time::sleep(Duration::from_millis(8 - i)).await;
                    i
                };
                if tx.send(task).await.is_err() {
                    break;
                }
            }
        });

        let mut results = Vec::new();
        while let Some(handle) = handles.recv().await {
            results.push(handle.await.unwrap());
        }
        assert_eq!(results, (0..8u64).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn yields_results_before_input_ends() {
        let queue = AsyncTaskQueue::new(2);
        let (tx, rx) = mpsc::channel(1);
        let mut handles = queue.spawn_ordered(rx, 1);

        tx.send(async { "first" }).await.unwrap();
        let handle = handles.recv().await.unwrap();
        assert_eq!(handle.await.unwrap(), "first");
        drop(tx);
        assert!(handles.recv().await.is_none());
    }
}
