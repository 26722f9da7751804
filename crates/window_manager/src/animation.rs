//! Cosmetic spawn transition from a launch point to a window's resting position.

use crate::model::Coordinates;

/// Logarithmic ease-in: `log10(1 + 9p)`, mapping `[0, 1]` onto `[0, 1]`.
pub fn ease_in_log(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    if progress == 0.0 {
        0.0
    } else {
        (1.0 + 9.0 * progress).log10()
    }
}

pub fn interpolate(from: Coordinates, to: Coordinates, eased: f64) -> Coordinates {
    Coordinates {
        x: from.x + (to.x - from.x) * eased,
        y: from.y + (to.y - from.y) * eased,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Running { started_at_ms: f64 },
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub position: Coordinates,
    pub finished: bool,
}

/// Frame-sampled spawn animation.
///
/// The host calls [`SpawnAnimation::sample`] once per display refresh and keeps scheduling frames
/// while it returns `Some` with `finished == false`. After completion or [`SpawnAnimation::cancel`]
/// every sample is `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnAnimation {
    from: Coordinates,
    to: Coordinates,
    duration_ms: f64,
    phase: Phase,
}

impl SpawnAnimation {
    pub fn new(from: Coordinates, to: Coordinates, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            phase: Phase::Pending,
        }
    }

    /// Animation from `spawn_point` to `target`, or `None` when there is nothing to animate.
    pub fn between(
        spawn_point: Option<Coordinates>,
        target: Coordinates,
        duration_ms: f64,
    ) -> Option<Self> {
        spawn_point
            .filter(|spawn_point| *spawn_point != target)
            .map(|spawn_point| Self::new(spawn_point, target, duration_ms))
    }

    pub fn target(&self) -> Coordinates {
        self.to
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Pending | Phase::Running { .. })
    }

    /// Stops the animation; later samples return `None`.
    pub fn cancel(&mut self) {
        if self.is_active() {
            self.phase = Phase::Cancelled;
        }
    }

    /// Position for the frame at `now_ms`. The first sample starts the clock.
    pub fn sample(&mut self, now_ms: f64) -> Option<AnimationFrame> {
        let started_at_ms = match self.phase {
            Phase::Pending => {
                self.phase = Phase::Running {
                    started_at_ms: now_ms,
                };
                now_ms
            }
            Phase::Running { started_at_ms } => started_at_ms,
            Phase::Finished | Phase::Cancelled => return None,
        };

        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - started_at_ms) / self.duration_ms).min(1.0)
        };
        let finished = progress >= 1.0;
        if finished {
            self.phase = Phase::Finished;
        }

        Some(AnimationFrame {
            position: if finished {
                self.to
            } else {
                interpolate(self.from, self.to, ease_in_log(progress))
            },
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ease_in_log_hits_endpoints_and_front_loads_motion() {
        assert_eq!(ease_in_log(0.0), 0.0);
        assert_eq!(ease_in_log(1.0), 1.0);
        assert!(ease_in_log(0.5) > 0.5);
        assert_eq!(ease_in_log(-3.0), 0.0);
    }

    #[test]
    fn sample_runs_from_spawn_to_target_then_stops() {
        let mut animation = SpawnAnimation::new(
            Coordinates::new(0.0, 0.0),
            Coordinates::new(100.0, 200.0),
            300.0,
        );

        let first = animation.sample(1_000.0).expect("first frame");
        assert_eq!(first.position, Coordinates::new(0.0, 0.0));
        assert!(!first.finished);

        let middle = animation.sample(1_150.0).expect("middle frame");
        let eased = ease_in_log(0.5);
        assert_eq!(
            middle.position,
            Coordinates::new(100.0 * eased, 200.0 * eased)
        );

        let last = animation.sample(1_400.0).expect("last frame");
        assert_eq!(last.position, Coordinates::new(100.0, 200.0));
        assert!(last.finished);
        assert!(!animation.is_active());
        assert_eq!(animation.sample(1_500.0), None);
    }

    #[test]
    fn cancelled_animation_yields_no_frames() {
        let mut animation = SpawnAnimation::new(
            Coordinates::new(0.0, 0.0),
            Coordinates::new(100.0, 100.0),
            300.0,
        );
        animation.sample(0.0);

        animation.cancel();

        assert!(!animation.is_active());
        assert_eq!(animation.sample(10.0), None);
    }

    #[test]
    fn between_skips_missing_or_identical_spawn_points() {
        let target = Coordinates::new(50.0, 50.0);

        assert_eq!(SpawnAnimation::between(None, target, 300.0), None);
        assert_eq!(SpawnAnimation::between(Some(target), target, 300.0), None);
        assert!(SpawnAnimation::between(Some(Coordinates::default()), target, 300.0).is_some());
    }
}
