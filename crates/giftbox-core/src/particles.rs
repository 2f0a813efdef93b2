//! Floating hearts and confetti.
//!
//! Particles are plain values with randomized styling parameters. The
//! [`ParticleField`] owns every live particle; whoever spawns one is told its
//! lifetime and is expected to report expiry back.

use std::time::Duration;

use rand::Rng;

use crate::pool::{Particle, ParticleId, ParticlePool};

/// Confetti colours
pub const CONFETTI_PALETTE: [&str; 4] = ["#ff69b4", "#ff1493", "#ffffff", "#ff4081"];

/// Identifier shared by every piece of one confetti burst
pub type BurstId = u64;

/// A floating heart
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub id: ParticleId,
    /// Horizontal position, percent of viewport width
    pub left_vw: f32,
    /// Width and height in px
    pub size_px: f32,
    /// Pulse period in seconds; the float runs for twice as long
    pub duration_s: f32,
    pub rotation_deg: f32,
    /// Horizontal drift over the float, px
    pub drift_px: f32,
}

impl Heart {
    pub fn random<R: Rng + ?Sized>(id: ParticleId, rng: &mut R) -> Self {
        Self {
            id,
            left_vw: rng.random_range(0.0f32..100.0),
            size_px: rng.random_range(10.0f32..25.0),
            duration_s: rng.random_range(2.0f32..5.0),
            rotation_deg: rng.random_range(0.0f32..360.0),
            drift_px: rng.random_range(-100.0f32..100.0),
        }
    }

    /// Time until the heart removes itself: twice the pulse duration
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs_f32(self.duration_s * 2.0)
    }

    /// Inline style for the heart element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}vw; top: 100vh; width: {:.1}px; height: {:.1}px; \
             animation: heartBeat {:.2}s infinite, float {:.2}s linear; \
             transform: rotate({:.1}deg); --drift: {:.1}px;",
            self.left_vw,
            self.size_px,
            self.size_px,
            self.duration_s,
            self.duration_s * 2.0,
            self.rotation_deg,
            self.drift_px,
        )
    }
}

impl Particle for Heart {
    fn id(&self) -> ParticleId {
        self.id
    }
}

/// A single confetti square
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub id: ParticleId,
    pub burst: BurstId,
    pub color: &'static str,
    pub left_vw: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    /// Rotation once fallen, at least two full turns
    pub fall_rotation_deg: f32,
    /// Moved to the bottom of the viewport
    pub fallen: bool,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(id: ParticleId, burst: BurstId, rng: &mut R) -> Self {
        Self {
            id,
            burst,
            color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
            left_vw: rng.random_range(0.0f32..100.0),
            rotation_deg: rng.random_range(0.0f32..360.0),
            opacity: rng.random::<f32>(),
            fall_rotation_deg: rng.random_range(720.0f32..1080.0),
            fallen: false,
        }
    }

    pub fn style(&self) -> String {
        let (top, rotation) = if self.fallen {
            ("100vh", self.fall_rotation_deg)
        } else {
            ("-20px", self.rotation_deg)
        };
        format!(
            "position: fixed; width: 10px; height: 10px; background-color: {}; \
             left: {:.2}vw; top: {}; transform: rotate({:.1}deg); opacity: {:.2}; \
             transition: all 1s ease;",
            self.color, self.left_vw, top, rotation, self.opacity,
        )
    }
}

impl Particle for ConfettiPiece {
    fn id(&self) -> ParticleId {
        self.id
    }
}

/// Every live particle on screen
#[derive(Clone, Debug)]
pub struct ParticleField {
    hearts: ParticlePool<Heart>,
    confetti: ParticlePool<ConfettiPiece>,
    next_id: u64,
}

impl ParticleField {
    pub fn new(max_hearts: usize, max_confetti: usize) -> Self {
        Self {
            hearts: ParticlePool::with_capacity(max_hearts),
            confetti: ParticlePool::with_capacity(max_confetti),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one heart, returning its id and lifetime.
    pub fn spawn_heart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (ParticleId, Duration) {
        let id = self.allocate_id();
        let heart = Heart::random(id, rng);
        let lifetime = heart.lifetime();
        if let Some(evicted) = self.hearts.insert(heart) {
            tracing::debug!(id = evicted.id, "heart evicted, pool full");
        }
        (id, lifetime)
    }

    pub fn remove_heart(&mut self, id: ParticleId) -> bool {
        self.hearts.remove(id).is_some()
    }

    /// Spawn a confetti burst of `count` pieces sharing one burst id.
    pub fn spawn_confetti<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> BurstId {
        let burst = self.allocate_id();
        for _ in 0..count {
            let id = self.allocate_id();
            self.confetti.insert(ConfettiPiece::random(id, burst, rng));
        }
        burst
    }

    /// Start the fall of every piece in a burst.
    pub fn drop_confetti(&mut self, burst: BurstId) -> usize {
        let mut moved = 0;
        for piece in self.confetti.iter_mut().filter(|p| p.burst == burst) {
            piece.fallen = true;
            moved += 1;
        }
        moved
    }

    pub fn remove_confetti(&mut self, burst: BurstId) -> usize {
        self.confetti.remove_where(|p| p.burst == burst)
    }

    pub fn hearts(&self) -> impl Iterator<Item = &Heart> {
        self.hearts.iter()
    }

    pub fn confetti(&self) -> impl Iterator<Item = &ConfettiPiece> {
        self.confetti.iter()
    }

    pub fn heart_count(&self) -> usize {
        self.hearts.len()
    }

    pub fn confetti_count(&self) -> usize {
        self.confetti.len()
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(400, 200)
    }
}

/// Spawn offsets for a staggered heart burst. Stops early rather than
/// overflow `Duration`.
pub fn burst_schedule(count: usize, stagger: Duration) -> impl Iterator<Item = Duration> {
    (0..count).map_while(move |i| {
        u32::try_from(i)
            .ok()
            .and_then(|i| stagger.checked_mul(i))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn heart_parameters_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for id in 0..500 {
            let heart = Heart::random(id, &mut rng);
            assert!((0.0..100.0).contains(&heart.left_vw));
            assert!((10.0..25.0).contains(&heart.size_px));
            assert!((2.0..5.0).contains(&heart.duration_s));
            assert!((0.0..360.0).contains(&heart.rotation_deg));
            let lifetime = heart.lifetime();
            assert!(lifetime >= Duration::from_secs(4));
            assert!(lifetime < Duration::from_secs(10));
        }
    }

    #[test]
    fn heart_style_doubles_float_duration() {
        let heart = Heart {
            id: 1,
            left_vw: 50.0,
            size_px: 12.0,
            duration_s: 2.5,
            rotation_deg: 90.0,
            drift_px: 0.0,
        };
        let style = heart.style();
        assert!(style.contains("heartBeat 2.50s infinite"));
        assert!(style.contains("float 5.00s linear"));
        assert!(style.contains("width: 12.0px"));
    }

    #[test]
    fn confetti_uses_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        for id in 0..200 {
            let piece = ConfettiPiece::random(id, 0, &mut rng);
            assert!(CONFETTI_PALETTE.contains(&piece.color));
            assert!((0.0..1.0).contains(&piece.opacity));
            assert!(piece.fall_rotation_deg >= 720.0);
            assert!(!piece.fallen);
        }
    }

    #[test]
    fn confetti_falls_then_leaves() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::default();
        let burst = field.spawn_confetti(100, &mut rng);
        assert_eq!(field.confetti_count(), 100);
        assert!(field.confetti().all(|p| p.style().contains("top: -20px")));

        assert_eq!(field.drop_confetti(burst), 100);
        assert!(field.confetti().all(|p| p.style().contains("top: 100vh")));

        assert_eq!(field.remove_confetti(burst), 100);
        assert_eq!(field.confetti_count(), 0);
    }

    #[test]
    fn bursts_are_independent() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::default();
        let first = field.spawn_confetti(10, &mut rng);
        let second = field.spawn_confetti(10, &mut rng);
        field.remove_confetti(first);
        assert_eq!(field.confetti_count(), 10);
        assert!(field.confetti().all(|p| p.burst == second));
    }

    #[test]
    fn heart_pool_is_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::new(5, 0);
        let ids: Vec<_> = (0..8).map(|_| field.spawn_heart(&mut rng).0).collect();
        assert_eq!(field.heart_count(), 5);
        assert!(!field.remove_heart(ids[0]));
        assert!(field.remove_heart(ids[7]));
    }

    #[test]
    fn burst_schedule_staggers() {
        let offsets: Vec<_> = burst_schedule(30, Duration::from_millis(100)).collect();
        assert_eq!(offsets.len(), 30);
        assert_eq!(offsets[0], Duration::ZERO);
        assert_eq!(offsets[29], Duration::from_millis(2900));
    }

    #[test]
    fn burst_schedule_stops_before_overflow() {
        let offsets: Vec<_> = burst_schedule(30, Duration::MAX).collect();
        assert_eq!(offsets, vec![Duration::ZERO, Duration::MAX]);
    }
}
