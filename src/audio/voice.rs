use std::sync::Arc;

use super::frame::StereoFrame;

// One playing clip. Buffers are mono at the mix rate, so a voice just walks
// the buffer and copies the sample to both output channels.
#[derive(Clone, Debug)]
pub struct Voice {
    buffer: Arc<Vec<f32>>,
    pos: usize,
    gain: f32,
    pub active: bool,
}

impl Voice {
    pub fn new(buffer: Arc<Vec<f32>>, gain: f32) -> Self {
        Self {
            buffer,
            pos: 0,
            gain,
            active: true,
        }
    }

    pub fn render_into(&mut self, out: &mut [StereoFrame]) {
        if !self.active {
            return;
        }
        for frame in out.iter_mut() {
            let Some(&s) = self.buffer.get(self.pos) else {
                self.active = false;
                break;
            };
            frame.left += s * self.gain;
            frame.right += s * self.gain;
            self.pos += 1;
        }
    }
}
