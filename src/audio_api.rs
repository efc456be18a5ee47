use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleId(pub u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

// atomic counter so ids stay unique no matter which thread asks
pub fn next_sample_id() -> SampleId {
    SampleId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Clone, Debug)]
pub enum AudioCommand {
    // The engine can't touch the filesystem (that would stall the callback),
    // so clips are decoded on the UI thread and registered here before the
    // first trigger references them.
    RegisterSample { id: SampleId, buffer: Arc<Vec<f32>> },

    // Start a voice over a previously registered buffer.
    Trigger { id: SampleId, gain: f32 },
}
