/// Frame counter driving every time-dependent motion.
///
/// Advanced once per animation tick and never reset. The first rendered
/// frame is frame 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance by one frame and return the new count.
    pub fn tick(&mut self) -> u64 {
        self.frame = self.frame.saturating_add(1);
        self.frame
    }
}
