use std::path::PathBuf;
use std::thread;

use vidthumb_core::request::ThumbnailRequest;

use crate::error::{MediaError, Result};
use crate::thumbnail;

/// Handle to one in-flight extraction. Exactly one result or error is
/// delivered, after the slow work (fetch, decode, encode, write) finishes
/// on the worker thread.
pub struct ThumbnailJob<T> {
    rx: crossbeam_channel::Receiver<Result<T>>,
}

impl<T> ThumbnailJob<T> {
    /// Block until the worker delivers its single result.
    pub fn wait(self) -> Result<T> {
        self.rx.recv().unwrap_or(Err(MediaError::WorkerExited))
    }

    /// Non-blocking poll. Returns None while the worker is still running.
    pub fn try_result(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(crossbeam_channel::TryRecvError::Empty) => None,
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                Some(Err(MediaError::WorkerExited))
            }
        }
    }
}

/// Run the "data" operation on a worker thread.
pub fn request_data(request: ThumbnailRequest) -> ThumbnailJob<Vec<u8>> {
    spawn(move || thumbnail::thumbnail_data(&request))
}

/// Run the "file" operation on a worker thread.
pub fn request_file(request: ThumbnailRequest) -> ThumbnailJob<PathBuf> {
    spawn(move || thumbnail::thumbnail_file(&request))
}

fn spawn<T, F>(work: F) -> ThumbnailJob<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        // If the receiver is already gone the result is simply dropped.
        let _ = tx.send(work());
    });
    ThumbnailJob { rx }
}
