//! Frame scheduling: compose, diff, repaint, pace.

use cortex_render_core::Result;
use cortex_render_terminal::{
    DirtySpan, MemorySurface, QualityTier, Surface, TerminalBackend, TtySurface,
    WIDE_CONTINUATION,
};
use std::time::{Duration, Instant};

/// Default frame-rate cap.
pub const DEFAULT_MAX_FPS: u32 = 60;

/// Something that draws a full frame onto a surface.
pub trait Compose {
    /// Draws the frame.
    fn compose(&mut self, surface: &mut dyn Surface);
}

impl<F> Compose for F
where
    F: FnMut(&mut dyn Surface),
{
    fn compose(&mut self, surface: &mut dyn Surface) {
        self(surface);
    }
}

/// Caps the frame rate.
#[derive(Debug)]
pub struct FramePacer {
    max_fps: u32,
    frame_time: Duration,
    last_frame: Instant,
    frame_count: u64,
    sample_frames: u64,
    sample_start: Instant,
    current_fps: f32,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FPS)
    }
}

impl FramePacer {
    /// Creates a pacer allowing at most `max_fps` frames per second.
    pub fn new(max_fps: u32) -> Self {
        let max_fps = max_fps.max(1);
        let now = Instant::now();
        Self {
            max_fps,
            frame_time: Duration::from_secs_f64(1.0 / f64::from(max_fps)),
            last_frame: now,
            frame_count: 0,
            sample_frames: 0,
            sample_start: now,
            current_fps: 0.0,
        }
    }

    /// The frame-rate cap.
    pub fn max_fps(&self) -> u32 {
        self.max_fps
    }

    /// Measured frames per second, updated once a second.
    pub fn current_fps(&self) -> f32 {
        self.current_fps
    }

    /// Frames ticked since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// How long to wait after a frame that took `frame_duration`.
    pub fn frame_delay(&self, frame_duration: Duration) -> Duration {
        self.frame_time.saturating_sub(frame_duration)
    }

    /// Records a frame and returns the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
        self.sample_frames += 1;

        let elapsed = now.duration_since(self.sample_start);
        if elapsed >= Duration::from_secs(1) {
            self.current_fps = self.sample_frames as f32 / elapsed.as_secs_f32();
            self.sample_frames = 0;
            self.sample_start = now;
        }
        delta
    }

    /// Sleeps off the rest of the frame budget.
    pub fn wait(&self, frame_duration: Duration) {
        let delay = self.frame_delay(frame_duration);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Drives frames: each step clears, composes, diffs against the previous
/// frame and commits.
///
/// Terminal frames are wrapped in synchronized output only at
/// [`QualityTier::Ultra`].
#[derive(Debug, Default)]
pub struct RenderScheduler {
    pacer: FramePacer,
    tier: QualityTier,
    shadow: Option<MemorySurface>,
}

impl RenderScheduler {
    /// Creates a scheduler capped at `max_fps`.
    pub fn new(max_fps: u32) -> Self {
        Self {
            pacer: FramePacer::new(max_fps),
            tier: QualityTier::default(),
            shadow: None,
        }
    }

    /// Sets the tier terminal frames are written for.
    pub fn with_tier(mut self, tier: QualityTier) -> Self {
        self.tier = tier;
        self
    }

    /// The tier terminal frames are written for.
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Changes the tier, e.g. after the renderer's capabilities change.
    pub fn set_tier(&mut self, tier: QualityTier) {
        self.tier = tier;
    }

    /// The frame pacer.
    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Composes one frame into `surface` and returns what changed.
    pub fn step_memory(
        &mut self,
        surface: &mut MemorySurface,
        component: &mut dyn Compose,
    ) -> Vec<DirtySpan> {
        surface.clear();
        component.compose(surface);
        let spans = surface.dirty_spans();
        surface.commit();
        self.pacer.tick();
        tracing::trace!(spans = spans.len(), "Composed memory frame");
        spans
    }

    /// Composes one frame into a shadow grid and writes only the changed
    /// cells to `tty`.
    pub fn step_terminal<B: TerminalBackend>(
        &mut self,
        tty: &mut TtySurface<B>,
        component: &mut dyn Compose,
    ) -> Result<Vec<DirtySpan>> {
        let size = tty.size();
        let shadow = self
            .shadow
            .get_or_insert_with(|| MemorySurface::new(size.width, size.height));
        if shadow.size() != size {
            tracing::debug!(width = size.width, height = size.height, "Shadow grid resized");
            shadow.resize(size.width, size.height);
        }

        shadow.clear();
        component.compose(shadow);
        let spans = shadow.dirty_spans();

        let sync = self.tier == QualityTier::Ultra;
        if sync {
            tty.begin_sync();
        }
        for span in &spans {
            for x in span.x..span.x.saturating_add(span.width) {
                let Some(cell) = shadow.cell(x, span.y) else {
                    continue;
                };
                if cell.ch == WIDE_CONTINUATION {
                    continue;
                }
                tty.set_style(cell.style);
                tty.put_char(x, span.y, cell.ch);
            }
        }
        tty.reset_style();
        if sync {
            tty.end_sync();
        }
        tty.flush()?;

        shadow.commit();
        self.pacer.tick();
        tracing::trace!(spans = spans.len(), "Repainted terminal frame");
        Ok(spans)
    }

    /// Sleeps until the next frame is due, given when the current one started.
    pub fn wait_for_next_frame(&self, frame_started: Instant) {
        self.pacer.wait(frame_started.elapsed());
    }
}
