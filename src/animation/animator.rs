/// Notifications emitted while an [`ImageAnimator`] advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorEvent {
    /// Frame 0 was shown; carries the number of loops completed so far.
    FirstFrameLoaded(u32),
    /// The sequence wrapped around; carries the total loops completed.
    LoopCompleted(u32),
}

/// Plays a looping frame sequence at a fixed frame time.
///
/// Time is fed in by the caller through [`ImageAnimator::next_frame`]; the animator never
/// reads a clock itself.
#[derive(Clone, Debug)]
pub struct ImageAnimator<F> {
    base_name: String,
    frames: Vec<F>,
    current_frame_index: usize,
    completed_loops: u32,
    leftover_time: f64,
    started: bool,
    events: Vec<AnimatorEvent>,
    invalidated: bool,
}

impl<F> ImageAnimator<F> {
    /// Seconds each frame stays on screen.
    pub const FRAME_TIME: f64 = 0.1;

    /// Animator over `frames`, identified by `base_name` (e.g. `cat_walk`).
    pub fn new(base_name: impl Into<String>, frames: Vec<F>) -> Self {
        Self {
            base_name: base_name.into(),
            frames,
            current_frame_index: 0,
            completed_loops: 0,
            leftover_time: 0.0,
            started: false,
            events: Vec::new(),
            invalidated: false,
        }
    }

    /// Animator without frames: never yields a frame.
    pub fn none() -> Self {
        Self::new("", Vec::new())
    }

    /// Base name this animator was built for.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// All frames, in playback order.
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Duration of one full loop in seconds.
    pub fn loop_duration(&self) -> f64 {
        self.frames.len() as f64 * Self::FRAME_TIME
    }

    /// Index of the frame currently shown.
    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    /// Frame currently shown.
    pub fn current_frame(&self) -> Option<&F> {
        self.frames.get(self.current_frame_index)
    }

    /// Loops completed so far.
    pub fn completed_loops(&self) -> u32 {
        self.completed_loops
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns the new frame when the displayed frame changes, `None` otherwise. Time below a
    /// full frame is carried over to the next call; large `dt` values skip frames and may
    /// complete several loops at once. Negative or non-finite `dt` counts as no time.
    pub fn next_frame(&mut self, dt: f64) -> Option<&F> {
        if self.frames.is_empty() {
            return None;
        }

        if !self.started {
            self.started = true;
            self.emit(AnimatorEvent::FirstFrameLoaded(0));
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let elapsed = dt + self.leftover_time;
        if elapsed < Self::FRAME_TIME {
            self.leftover_time = elapsed;
            return None;
        }

        let frames_skipped = (elapsed / Self::FRAME_TIME).floor();
        self.leftover_time =
            (elapsed - frames_skipped * Self::FRAME_TIME).clamp(0.0, Self::FRAME_TIME);

        // Index arithmetic stays in f64: `frames_skipped` may exceed `usize::MAX`.
        let len = self.frames.len() as f64;
        let position = self.current_frame_index as f64 + frames_skipped;
        let loops = (position / len).floor();
        let next_index = (position % len) as usize;

        if loops >= 1.0 {
            self.completed_loops = self.completed_loops.saturating_add(loops as u32);
            self.emit(AnimatorEvent::LoopCompleted(self.completed_loops));
            self.emit(AnimatorEvent::FirstFrameLoaded(self.completed_loops));
        }
        if next_index == self.current_frame_index {
            return None;
        }
        self.current_frame_index = next_index;
        self.frames.get(next_index)
    }

    /// Drain events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<AnimatorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Stop collecting events and drop pending ones.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
        self.events.clear();
    }

    fn emit(&mut self, event: AnimatorEvent) {
        if !self.invalidated {
            self.events.push(event);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
