//! A small playhead-driven tween timeline.
//!
//! Tracks are laid out on one time axis. The playhead moves forward or
//! backward as [`Timeline::advance`] is fed frame deltas, and every track is
//! sampled from the playhead alone, so flipping direction mid-flight simply
//! continues from wherever the playhead is.

/// Animated values of a single element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// vertical offset in px
    pub y: f64,
    pub opacity: f64,
}

impl Frame {
    pub const fn new(y: f64, opacity: f64) -> Self {
        Self { y, opacity }
    }

    fn lerp(self, to: Frame, t: f64) -> Frame {
        Frame {
            y: self.y + (to.y - self.y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    /// Inline style for the element (opacity + translateY).
    pub fn style(&self) -> String {
        format!(
            "opacity:{:.3};transform:translateY({:.2}px);",
            self.opacity, self.y
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power2Out,
}

impl Ease {
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power2Out => 1.0 - (1.0 - p) * (1.0 - p),
        }
    }
}

/// Where a new track starts on the time axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Position {
    /// absolute time in seconds
    At(f64),
    /// relative to the current end of the timeline (negative overlaps)
    FromEnd(f64),
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Tween {
    start: f64,
    duration: f64,
    from: Frame,
    to: Frame,
    ease: Ease,
}

impl Tween {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn sample(&self, time: f64) -> Frame {
        let p = if self.duration <= 0.0 {
            if time >= self.start { 1.0 } else { 0.0 }
        } else {
            (time - self.start) / self.duration
        };
        self.from.lerp(self.to, self.ease.apply(p))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    tracks: Vec<Tween>,
    ease: Ease,
    time: f64,
    direction: Direction,
    paused: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Ease::default())
    }
}

impl Timeline {
    /// Empty, paused timeline at time zero. `ease` is the default for tracks.
    pub fn new(ease: Ease) -> Self {
        Self {
            tracks: Vec::new(),
            ease,
            time: 0.0,
            direction: Direction::Forward,
            paused: true,
        }
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::At(t) => t.max(0.0),
            Position::FromEnd(offset) => (self.duration() + offset).max(0.0),
        }
    }

    /// Appends one track and returns its index.
    pub fn from_to(&mut self, from: Frame, to: Frame, duration: f64, position: Position) -> usize {
        let start = self.resolve(position);
        self.tracks.push(Tween {
            start,
            duration: duration.max(0.0),
            from,
            to,
            ease: self.ease,
        });
        self.tracks.len() - 1
    }

    /// Appends `count` tracks, each starting `each` seconds after the
    /// previous one. Returns the index range of the new tracks.
    pub fn stagger(
        &mut self,
        count: usize,
        from: Frame,
        to: Frame,
        duration: f64,
        each: f64,
        position: Position,
    ) -> std::ops::Range<usize> {
        let first = self.tracks.len();
        let start = self.resolve(position);
        for i in 0..count {
            self.from_to(from, to, duration, Position::At(start + each * i as f64));
        }
        first..self.tracks.len()
    }

    pub fn duration(&self) -> f64 {
        self.tracks.iter().map(Tween::end).fold(0.0, f64::max)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `true` while the playhead still has somewhere to go.
    pub fn is_active(&self) -> bool {
        !self.paused
    }

    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.paused = self.time >= self.duration();
    }

    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.paused = self.time <= 0.0;
    }

    /// Moves the playhead by `dt` seconds in the current direction.
    /// Returns whether the timeline is still running afterwards.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.paused {
            return false;
        }

        let dt = dt.max(0.0);
        let end = self.duration();
        match self.direction {
            Direction::Forward => {
                self.time = (self.time + dt).min(end);
                self.paused = self.time >= end;
            }
            Direction::Reverse => {
                self.time = (self.time - dt).max(0.0);
                self.paused = self.time <= 0.0;
            }
        }

        !self.paused
    }

    /// Current values of a track. Unknown tracks sample as fully visible.
    pub fn sample(&self, track: usize) -> Frame {
        self.tracks
            .get(track)
            .map(|t| t.sample(self.time))
            .unwrap_or(Frame::new(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIDDEN: Frame = Frame::new(-10.0, 0.0);
    const SHOWN: Frame = Frame::new(0.0, 1.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn power2_out_is_front_loaded() {
        assert_eq!(Ease::Power2Out.apply(0.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(1.0), 1.0);
        assert!(close(Ease::Power2Out.apply(0.5), 0.75));
        assert_eq!(Ease::Power2Out.apply(3.0), 1.0);
    }

    #[test]
    fn from_end_overlaps_previous_track() {
        let mut tl = Timeline::default();
        tl.from_to(HIDDEN, SHOWN, 0.15, Position::At(0.0));
        let items = tl.stagger(3, HIDDEN, SHOWN, 0.1, 0.03, Position::FromEnd(-0.05));

        assert_eq!(items, 1..4);
        assert!(close(tl.duration(), 0.10 + 0.06 + 0.10));
    }

    #[test]
    fn tracks_render_from_values_before_their_start() {
        let mut tl = Timeline::default();
        tl.from_to(HIDDEN, SHOWN, 0.1, Position::At(0.5));
        tl.play();
        tl.advance(0.2);

        assert_eq!(tl.sample(0), HIDDEN);
    }

    #[test]
    fn playing_forward_settles_at_the_end() {
        let mut tl = Timeline::default();
        tl.from_to(HIDDEN, SHOWN, 0.2, Position::At(0.0));
        tl.play();

        assert!(tl.advance(0.1));
        assert!(!tl.advance(0.5));
        assert!(!tl.is_active());
        assert_eq!(tl.sample(0), SHOWN);
    }

    #[test]
    fn reverse_continues_from_current_playhead() {
        let mut tl = Timeline::default();
        tl.from_to(HIDDEN, SHOWN, 0.2, Position::At(0.0));
        tl.play();
        tl.advance(0.12);

        tl.reverse();
        assert!(close(tl.time(), 0.12));
        tl.advance(0.02);
        assert!(close(tl.time(), 0.10));

        tl.advance(1.0);
        assert_eq!(tl.time(), 0.0);
        assert_eq!(tl.sample(0), HIDDEN);
        assert!(!tl.is_active());
    }

    #[test]
    fn reverse_at_start_stays_idle() {
        let mut tl = Timeline::default();
        tl.from_to(HIDDEN, SHOWN, 0.2, Position::At(0.0));
        tl.reverse();

        assert!(!tl.is_active());
        assert!(!tl.advance(0.1));
    }

    #[test]
    fn staggered_items_lead_in_order() {
        let mut tl = Timeline::default();
        tl.stagger(3, HIDDEN, SHOWN, 0.1, 0.03, Position::At(0.0));
        tl.play();
        tl.advance(0.05);

        let a = tl.sample(0).opacity;
        let b = tl.sample(1).opacity;
        let c = tl.sample(2).opacity;
        assert!(a > b && b > c, "{a} {b} {c}");
    }

    #[test]
    fn style_is_css() {
        assert_eq!(
            Frame::new(-20.0, 0.0).style(),
            "opacity:0.000;transform:translateY(-20.00px);"
        );
    }
}
