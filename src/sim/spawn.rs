//! Enemy spawn points and spawn-rate throttling

use glam::Vec2;
use rand::Rng;

use super::collision::Field;

/// Field edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Heading range in whole degrees `[start, end)` that points into the field
    pub fn heading_range_deg(self) -> (f32, f32) {
        match self {
            Edge::Top => (91.0, 269.0),
            Edge::Right => (181.0, 359.0),
            Edge::Bottom => (-271.0, 89.0),
            Edge::Left => (1.0, 179.0),
        }
    }
}

/// Where and which way a new enemy starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub edge: Edge,
    pub pos: Vec2,
    /// Whole degrees
    pub heading_deg: f32,
}

/// Pick a random edge (equal odds) and an inward heading off it.
///
/// The right edge starts its vertical range 5px higher than the others;
/// existing replays depend on that range.
pub fn calculate_spawn_point(field: &Field, margin: f32, rng: &mut impl Rng) -> SpawnPoint {
    let w = field.width;
    let h = field.height;
    let roll: f32 = rng.random();

    let (edge, pos) = if roll < 0.25 {
        (Edge::Top, Vec2::new(rng.random_range(margin..w - margin), margin))
    } else if roll < 0.5 {
        (
            Edge::Right,
            Vec2::new(w - margin, rng.random_range((margin - 5.0)..h - margin)),
        )
    } else if roll < 0.75 {
        (Edge::Bottom, Vec2::new(rng.random_range(margin..w - margin), h - margin))
    } else {
        (Edge::Left, Vec2::new(margin, rng.random_range(margin..h - margin)))
    };

    let (lo, hi) = edge.heading_range_deg();
    let heading_deg = rng.random_range(lo..hi).floor();

    SpawnPoint { edge, pos, heading_deg }
}

/// Timer + cap gate on enemy creation
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    /// Milliseconds since the last spawn or enemy removal
    pub timer: f32,
    pub frequency: f32,
    pub cap: usize,
}

impl SpawnScheduler {
    pub fn new(frequency: f32, cap: usize) -> Self {
        Self {
            timer: 0.0,
            frequency,
            cap,
        }
    }

    /// Decide whether to spawn this tick. When it says no, `dt` is banked;
    /// when it says yes, the timer restarts from zero.
    pub fn poll(&mut self, live_enemies: usize, dt: f32) -> bool {
        if self.timer < self.frequency || live_enemies >= self.cap {
            self.timer += dt;
            return false;
        }
        self.timer = 0.0;
        true
    }

    /// An enemy left the field; the next check is eligible right away
    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Make the very next poll spawn (game start)
    pub fn arm(&mut self) {
        self.timer = f32::INFINITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_points_stay_on_their_edge() {
        let field = Field::new(640.0, 480.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 4];

        for _ in 0..500 {
            let p = calculate_spawn_point(&field, 25.0, &mut rng);
            let (lo, hi) = p.edge.heading_range_deg();
            assert!(p.heading_deg >= lo && p.heading_deg < hi);
            assert_eq!(p.heading_deg, p.heading_deg.floor());

            match p.edge {
                Edge::Top => {
                    seen[0] = true;
                    assert_eq!(p.pos.y, 25.0);
                    assert!(p.pos.x >= 25.0 && p.pos.x < 615.0);
                }
                Edge::Right => {
                    seen[1] = true;
                    assert_eq!(p.pos.x, 615.0);
                    assert!(p.pos.y >= 20.0 && p.pos.y < 455.0);
                }
                Edge::Bottom => {
                    seen[2] = true;
                    assert_eq!(p.pos.y, 455.0);
                }
                Edge::Left => {
                    seen[3] = true;
                    assert_eq!(p.pos.x, 25.0);
                    assert!(p.pos.y >= 25.0 && p.pos.y < 455.0);
                }
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_spawns_at_threshold_below_cap() {
        let mut sched = SpawnScheduler::new(1000.0, 5);
        sched.timer = 1000.0;
        assert!(sched.poll(4, 16.0));
        assert_eq!(sched.timer, 0.0);
    }

    #[test]
    fn test_at_cap_accumulates() {
        let mut sched = SpawnScheduler::new(1000.0, 5);
        sched.timer = 1000.0;
        assert!(!sched.poll(5, 16.0));
        assert_eq!(sched.timer, 1016.0);
    }

    #[test]
    fn test_below_threshold_accumulates() {
        let mut sched = SpawnScheduler::new(1000.0, 5);
        assert!(!sched.poll(0, 400.0));
        assert!(!sched.poll(0, 400.0));
        assert!(!sched.poll(0, 400.0));
        assert_eq!(sched.timer, 1200.0);
        assert!(sched.poll(0, 400.0));
    }

    #[test]
    fn test_armed_spawns_immediately_and_survives_huge_dt() {
        let mut sched = SpawnScheduler::new(1000.0, 5);
        sched.arm();
        assert!(sched.poll(0, 0.0));

        assert!(!sched.poll(0, 1.0e9));
        assert!(sched.poll(0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut sched = SpawnScheduler::new(1000.0, 5);
        sched.timer = 900.0;
        sched.reset();
        assert_eq!(sched.timer, 0.0);
    }
}
