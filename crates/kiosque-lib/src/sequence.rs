use std::cell::Cell;

/// Identifies one issued search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Numbers requests as they are issued and accepts only the newest one's
/// response, whatever order responses arrive in.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestId {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        RequestId(id)
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.latest.get()
    }

    /// Hands back `output` if `id` is still the newest request.
    pub fn accept<T>(&self, id: RequestId, output: T) -> Option<T> {
        if self.is_latest(id) {
            Some(output)
        } else {
            debug!("discarding response of stale request {}", id.0);
            None
        }
    }
}
