use std::time::Instant;

use crate::shared::PadId;

use super::Sequence;

// Timed replay. The player is tick-driven from the event loop rather than
// spawning timers, so tearing the session down mid-playback just drops the
// player and nothing fires afterwards.
//
// Each action's delay is measured from the moment the previous action became
// due, not from when its sound finished; replay reproduces inter-press
// intervals exactly as recorded, independent of clip length.
#[derive(Debug)]
pub struct Player {
    actions: Sequence,
    cursor: usize,
    due_at: Instant,
}

impl Player {
    /// Returns `None` for an empty sequence (nothing to play).
    pub fn start(actions: Sequence, now: Instant) -> Option<Self> {
        let first_delay = actions.first()?.delay;
        Some(Self {
            due_at: now + first_delay,
            actions,
            cursor: 0,
        })
    }

    /// Fire every action due by `now`, in order.
    pub fn tick(&mut self, now: Instant) -> Vec<PadId> {
        let mut fired = Vec::new();
        while self.cursor < self.actions.len() && self.due_at <= now {
            fired.push(self.actions[self.cursor].pad);
            self.cursor += 1;
            if let Some(next) = self.actions.get(self.cursor) {
                self.due_at += next.delay;
            }
        }
        fired
    }

    pub fn finished(&self) -> bool {
        self.cursor == self.actions.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Action;
    use std::time::Duration;

    fn seq(delays_ms: &[(u8, u64)]) -> Sequence {
        delays_ms
            .iter()
            .map(|&(pad, ms)| Action {
                pad: PadId(pad),
                delay: Duration::from_millis(ms),
            })
            .collect()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(Player::start(Sequence::new(), Instant::now()).is_none());
    }

    #[test]
    fn fires_in_order_at_recorded_offsets() {
        let t0 = Instant::now();
        let mut player = Player::start(seq(&[(2, 0), (6, 500), (2, 250)]), t0).unwrap();

        // first action is due immediately (zero delay)
        assert_eq!(player.tick(t0), vec![PadId(2)]);
        assert!(!player.finished());

        // nothing before its offset
        assert_eq!(player.tick(t0 + Duration::from_millis(499)), vec![]);
        assert_eq!(
            player.tick(t0 + Duration::from_millis(500)),
            vec![PadId(6)]
        );
        assert_eq!(
            player.tick(t0 + Duration::from_millis(750)),
            vec![PadId(2)]
        );
        assert!(player.finished());
    }

    #[test]
    fn late_tick_fires_everything_due_in_order() {
        let t0 = Instant::now();
        let mut player = Player::start(seq(&[(0, 0), (1, 100), (2, 100)]), t0).unwrap();
        assert_eq!(
            player.tick(t0 + Duration::from_secs(1)),
            vec![PadId(0), PadId(1), PadId(2)]
        );
        assert!(player.finished());
    }

    #[test]
    fn cursor_never_exceeds_length() {
        let t0 = Instant::now();
        let mut player = Player::start(seq(&[(0, 0)]), t0).unwrap();
        player.tick(t0);
        player.tick(t0 + Duration::from_secs(1));
        assert_eq!(player.cursor(), 1);
        assert!(player.finished());
    }

    #[test]
    fn delays_measured_from_previous_due_time() {
        // tick late for step 0; step 1 is still due relative to step 0's due
        // time, not relative to the late tick
        let t0 = Instant::now();
        let mut player = Player::start(seq(&[(0, 0), (1, 100)]), t0).unwrap();
        assert_eq!(
            player.tick(t0 + Duration::from_millis(90)),
            vec![PadId(0)]
        );
        assert_eq!(
            player.tick(t0 + Duration::from_millis(100)),
            vec![PadId(1)]
        );
    }
}
