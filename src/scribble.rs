use rand_core::RngCore;
use tracing::{debug, debug_span, trace};

use crate::color::{PALETTE, SIGNATURE_INK};
use crate::config::ScribbleConfig;
use crate::draw::Draw;
use crate::error::Result;
use crate::path::{round1, Path};
use crate::stroke::{DashPattern, Stroke};

/// Width of a regular stroke never drops below this.
pub const MIN_STROKE_WIDTH: f64 = 0.8;

const MIN_OPACITY: f64 = 0.25;
const MAX_OPACITY: f64 = 0.85;

/// Generates a field of hand-drawn looking strokes from a random source.
///
/// The engine owns its generator outright and is consumed by
/// [`generate`](Self::generate), so one random stream feeds exactly one field.
pub struct ScribbleField<R: RngCore> {
    config: ScribbleConfig,
    rng: R,
    strokes: Vec<Stroke>,
}

impl<R: RngCore> ScribbleField<R> {
    pub fn new(config: ScribbleConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            strokes: Vec::with_capacity(config.count as usize + 1),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &ScribbleConfig {
        &self.config
    }

    /// Regular strokes first, in draw order, then the heavy signature strokes.
    pub fn generate(mut self) -> Vec<Stroke> {
        let span = debug_span!(
            "scribble_field",
            count = self.config.count,
            width = self.config.width,
            height = self.config.height
        );
        let _enter = span.enter();

        self.make_regular_strokes();
        self.make_signature_strokes();

        debug!(strokes = self.strokes.len(), "generated scribble field");
        self.strokes
    }

    fn make_regular_strokes(&mut self) {
        for index in 0..self.config.count {
            let stroke = self.make_stroke();
            trace!(index, commands = stroke.path.len(), "regular stroke");
            self.strokes.push(stroke);
        }
    }

    fn make_stroke(&mut self) -> Stroke {
        let (w, h) = (self.config.width, self.config.height);
        let rng = &mut self.rng;

        // start biased into the interior and the lower three quarters
        let x0 = (0.05 + rng.unit() * 0.9) * w;
        let y0 = (0.25 + rng.unit() * 0.7) * h;
        let segments = 2 + rng.below(6);

        let color = *rng.pick(&PALETTE[..]);
        let base_width = f64::from(1 + rng.below(8));
        let width_variance = base_width * (0.12 + rng.unit() * 0.5);
        let width = round1(base_width + rng.jitter(width_variance)).max(MIN_STROKE_WIDTH);
        let opacity = (0.35 + rng.unit() * 0.45).clamp(MIN_OPACITY, MAX_OPACITY);
        let wobble = 14.0 + rng.unit() * 28.0;
        let loopy = rng.chance(self.config.loop_chance);

        let mut path = Path::new();
        path.move_to(x0, y0);
        let mut at = (x0, y0);
        for _ in 0..segments {
            at = self.make_segment(&mut path, at, wobble, loopy);
        }

        if self.rng.chance(self.config.flick_chance) {
            self.make_flick(&mut path, at);
        }

        let rng = &mut self.rng;
        let dash = if rng.chance(self.config.dash_chance) {
            Some(DashPattern {
                on: 2 + rng.below(6),
                off: 3 + rng.below(8),
            })
        } else {
            None
        };
        let blur = if rng.chance(self.config.blur_chance) {
            0.25 + rng.unit() * 0.6
        } else {
            0.0
        };

        Stroke {
            path,
            color,
            width,
            opacity: round2(opacity),
            dash,
            blur,
        }
    }

    /// Appends one step of a regular stroke and returns where it ended.
    fn make_segment(
        &mut self,
        path: &mut Path,
        (x, y): (f64, f64),
        wobble: f64,
        loopy: bool,
    ) -> (f64, f64) {
        let (w, h) = (self.config.width, self.config.height);
        let loop_segment_chance = self.config.loop_segment_chance;
        let rng = &mut self.rng;

        let cx = x + rng.jitter(wobble);
        let cy = y + rng.jitter(wobble * 0.9);
        let nx = (x + rng.unit() * w * 0.12 - w * 0.06 + rng.jitter(30.0)).clamp(0.0, w);
        let ny = (y + rng.unit() * h * 0.12 - h * 0.06 + rng.jitter(30.0)).clamp(0.0, h);

        if loopy && rng.chance(loop_segment_chance) {
            let mx = midpoint(x, nx) + rng.jitter(12.0);
            let my = midpoint(y, ny) + rng.jitter(12.0);
            path.quad_to(cx, cy, mx, my);
            let overshoot_x = mx + rng.jitter(10.0);
            let overshoot_y = my + rng.jitter(10.0);
            path.quad_to(overshoot_x, overshoot_y, nx, ny);
        } else {
            path.quad_to(cx, cy, nx, ny);
        }

        (nx, ny)
    }

    /// A short disjoint tail near the stroke's end.
    fn make_flick(&mut self, path: &mut Path, (x, y): (f64, f64)) {
        let (w, h) = (self.config.width, self.config.height);
        let rng = &mut self.rng;

        let pieces = 1 + rng.below(2);
        let mut sx = x + rng.jitter(6.0);
        let mut sy = y + rng.jitter(6.0);
        path.move_to(sx, sy);

        for _ in 0..pieces {
            let nx = (sx + rng.jitter(40.0)).clamp(0.0, w);
            let ny = (sy + rng.jitter(40.0)).clamp(0.0, h);
            let cx = sx + rng.jitter(12.0);
            let cy = sy + rng.jitter(12.0);
            path.quad_to(cx, cy, nx, ny);
            sx = nx;
            sy = ny;
        }
    }

    fn make_signature_strokes(&mut self) {
        let heavy = self.rng.below(self.config.signature_spread).max(1);
        for index in 0..heavy {
            let stroke = self.make_signature();
            trace!(index, width = stroke.width, "signature stroke");
            self.strokes.push(stroke);
        }
    }

    /// Bold pen sweep from the lower left towards the lower right.
    fn make_signature(&mut self) -> Stroke {
        let (w, h) = (self.config.width, self.config.height);
        let rng = &mut self.rng;

        let sx = 0.12 * w + rng.unit() * w * 0.5;
        let sy = 0.55 * h + rng.unit() * h * 0.35;
        let ex = 0.82 * w - rng.unit() * w * 0.08;
        let ey = 0.75 * h + rng.unit() * h * 0.12;
        let control_offset = 60.0 + rng.unit() * 100.0;

        let mut path = Path::new();
        path.move_to(sx, sy)
            .quad_to(
                sx + control_offset,
                sy - control_offset / 2.0,
                midpoint(sx, ex),
                midpoint(sy, ey),
            )
            .smooth_quad_to(ex, ey);

        let width = f64::from(8 + rng.below(8));
        let opacity = 0.7 - rng.unit() * 0.15;
        let blur = 0.05 + rng.unit() * 0.25;

        Stroke {
            path,
            color: SIGNATURE_INK,
            width,
            opacity,
            dash: None,
            blur,
        }
    }
}

/// `(a + b) / 2`, halving first only when the sum would overflow.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
