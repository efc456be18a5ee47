use std::time::Instant;

use crate::shared::PadId;

use super::{Action, Sequence};

// Timing capture. The session creates a fresh Recorder (and empties the
// current sequence) when recording arms, so a stale last-press timestamp can
// never leak into a new take.
#[derive(Debug, Default)]
pub struct Recorder {
    last_press: Option<Instant>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a press to `sequence`. The first press after arming gets a zero
    /// delay; every later one gets the real gap since the previous press.
    pub fn record(&mut self, sequence: &mut Sequence, pad: PadId, now: Instant) {
        let delay = match self.last_press {
            Some(prev) => now.saturating_duration_since(prev),
            None => std::time::Duration::ZERO,
        };
        sequence.push(Action { pad, delay });
        self.last_press = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_action_has_zero_delay() {
        let mut rec = Recorder::new();
        let mut seq = Sequence::new();
        rec.record(&mut seq, PadId(2), Instant::now());
        assert_eq!(seq[0].delay, Duration::ZERO);
        assert_eq!(seq[0].pad, PadId(2));
    }

    #[test]
    fn delays_are_inter_press_gaps() {
        let mut rec = Recorder::new();
        let mut seq = Sequence::new();
        let t0 = Instant::now();
        rec.record(&mut seq, PadId(2), t0);
        rec.record(&mut seq, PadId(6), t0 + Duration::from_millis(500));
        rec.record(&mut seq, PadId(2), t0 + Duration::from_millis(750));

        assert_eq!(seq.len(), 3);
        assert_eq!(seq[1].delay, Duration::from_millis(500));
        assert_eq!(seq[2].delay, Duration::from_millis(250));
    }

    #[test]
    fn immediate_double_press_records_two_actions() {
        let mut rec = Recorder::new();
        let mut seq = Sequence::new();
        let t0 = Instant::now();
        rec.record(&mut seq, PadId(0), t0);
        rec.record(&mut seq, PadId(0), t0 + Duration::from_millis(1));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].delay, Duration::from_millis(1));
    }

    #[test]
    fn fresh_recorder_resets_timing() {
        let t0 = Instant::now();
        let mut rec = Recorder::new();
        let mut seq = Sequence::new();
        rec.record(&mut seq, PadId(0), t0);

        // new take: a fresh recorder must not attribute a delay to the old press
        let mut rec = Recorder::new();
        let mut seq = Sequence::new();
        rec.record(&mut seq, PadId(1), t0 + Duration::from_secs(5));
        assert_eq!(seq[0].delay, Duration::ZERO);
    }
}
