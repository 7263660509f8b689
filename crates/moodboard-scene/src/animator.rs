//! Per-frame dispatch of the active mood's scene.

use std::collections::VecDeque;

use moodboard_core::{Bounds, Mood, RandomSource, Surface};

use crate::entities::{
    ANXIOUS_LINE_COUNT, AnxiousLine, Entity, PARTICLE_COUNT, Particle, STAR_COUNT, Star,
    WAVE_COUNT, Wave,
};

/// Grey level the canvas is cleared to every frame.
pub const BACKGROUND_GRAY: u8 = 240;

/// Upper bound on the excited scene's population.
pub const STAR_LIMIT: usize = 150;

/// Excited frames between star spawns.
pub const STAR_SPAWN_INTERVAL: u64 = 30;

/// Phase stagger between consecutive waves.
const WAVE_STAGGER: f32 = 100.0;

/// One entity collection per mood.
#[derive(Debug, Clone)]
pub struct SceneRegistry {
    pub particles: Vec<Particle>,
    pub waves: Vec<Wave>,
    pub lines: Vec<AnxiousLine>,
    /// Oldest star first; eviction pops from the front.
    pub stars: VecDeque<Star>,
}

impl SceneRegistry {
    /// Build every collection at its initial size.
    pub fn populate(bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(bounds, rng))
            .collect();
        let waves = (0..WAVE_COUNT)
            .map(|i| Wave::new(i as f32 * WAVE_STAGGER))
            .collect();
        let lines = (0..ANXIOUS_LINE_COUNT)
            .map(|_| AnxiousLine::spawn(bounds, rng))
            .collect();
        let stars = (0..STAR_COUNT).map(|_| Star::spawn(bounds, rng)).collect();
        Self {
            particles,
            waves,
            lines,
            stars,
        }
    }
}

/// Update then display each entity in order.
fn run_pass<'a, E: Entity + 'a>(
    entities: impl IntoIterator<Item = &'a mut E>,
    surface: &mut dyn Surface,
    rng: &mut dyn RandomSource,
) {
    let bounds = surface.bounds();
    for entity in entities {
        entity.update(bounds, rng);
        entity.display(surface, rng);
    }
}

/// Owns the current mood and all scenes, and draws one frame at a time.
#[derive(Debug, Clone)]
pub struct Animator {
    mood: Mood,
    scene: SceneRegistry,
    /// Frames rendered so far, any mood.
    frames: u64,
    /// Frames rendered while excited; drives star spawning.
    excited_frames: u64,
}

impl Animator {
    /// Create an animator with freshly populated scenes.
    pub fn new(mood: Mood, bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        Self::with_scene(mood, SceneRegistry::populate(bounds, rng))
    }

    pub fn with_scene(mood: Mood, scene: SceneRegistry) -> Self {
        Self {
            mood,
            scene,
            frames: 0,
            excited_frames: 0,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Switch the active scene. Takes effect on the next frame.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn scene(&self) -> &SceneRegistry {
        &self.scene
    }

    /// Total frames rendered.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clear the canvas and render the active mood's scene.
    pub fn frame(&mut self, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        surface.background(BACKGROUND_GRAY);
        match self.mood {
            Mood::Happy => run_pass(&mut self.scene.particles, surface, rng),
            Mood::Sad => run_pass(&mut self.scene.waves, surface, rng),
            Mood::Anxious => run_pass(&mut self.scene.lines, surface, rng),
            Mood::Excited => self.draw_excited(surface, rng),
        }
        self.frames += 1;
    }

    fn draw_excited(&mut self, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        self.excited_frames += 1;
        let stars = &mut self.scene.stars;
        if self.excited_frames % STAR_SPAWN_INTERVAL == 0 {
            stars.push_back(Star::spawn(surface.bounds(), rng));
        }
        if stars.len() > STAR_LIMIT {
            stars.pop_front();
        }
        run_pass(stars.iter_mut(), surface, rng);
    }
}

#[cfg(test)]
mod tests {
    use moodboard_core::{DrawCommand, Recorder, Rgba, SequenceRandom, Vector2};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    fn animator(mood: Mood) -> (Animator, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        (Animator::new(mood, BOUNDS, &mut rng), rng)
    }

    fn run(animator: &mut Animator, rng: &mut StdRng, frames: usize) -> Recorder {
        let mut surface = Recorder::new(BOUNDS);
        for _ in 0..frames {
            animator.frame(&mut surface, rng);
        }
        surface
    }

    #[test]
    fn test_initial_population() {
        let (animator, _) = animator(Mood::Happy);
        let scene = animator.scene();
        assert_eq!(scene.particles.len(), PARTICLE_COUNT);
        assert_eq!(scene.waves.len(), WAVE_COUNT);
        assert_eq!(scene.lines.len(), ANXIOUS_LINE_COUNT);
        assert_eq!(scene.stars.len(), STAR_COUNT);

        let offsets: Vec<f32> = scene.waves.iter().map(|w| w.phase_offset).collect();
        assert_eq!(offsets, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_frame_dispatches_only_active_mood() {
        let cases = [
            (Mood::Happy, PARTICLE_COUNT),
            (Mood::Sad, WAVE_COUNT),
            (Mood::Anxious, ANXIOUS_LINE_COUNT),
        ];
        for (mood, count) in cases {
            let (mut animator, mut rng) = animator(mood);
            let surface = run(&mut animator, &mut rng, 1);
            assert_eq!(surface.commands[0], DrawCommand::Background(BACKGROUND_GRAY));
            let body = &surface.commands[1..];
            assert_eq!(body.len(), count, "{mood}");
            let expected_kind = |cmd: &DrawCommand| match mood {
                Mood::Happy => matches!(cmd, DrawCommand::FillCircle { .. }),
                Mood::Sad => matches!(cmd, DrawCommand::Polyline { .. }),
                _ => matches!(cmd, DrawCommand::Line { .. }),
            };
            assert!(body.iter().all(expected_kind), "{mood}");
        }
    }

    #[test]
    fn test_excited_frame_draws_every_star() {
        let (mut animator, mut rng) = animator(Mood::Excited);
        let surface = run(&mut animator, &mut rng, 1);
        let bodies = surface
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(bodies, STAR_COUNT);
    }

    #[test]
    fn test_inactive_scenes_are_frozen() {
        let (mut animator, mut rng) = animator(Mood::Happy);
        let before = animator.scene().clone();
        run(&mut animator, &mut rng, 10);

        let scene = animator.scene();
        assert_eq!(scene.waves, before.waves);
        assert_eq!(scene.lines, before.lines);
        assert_eq!(scene.stars, before.stars);
        assert_ne!(scene.particles, before.particles);

        animator.set_mood(Mood::Sad);
        run(&mut animator, &mut rng, 3);
        let offsets: Vec<f32> = animator
            .scene()
            .waves
            .iter()
            .map(|w| w.phase_offset)
            .collect();
        assert_eq!(offsets, vec![3.0, 103.0, 203.0, 303.0, 403.0]);
        assert_eq!(animator.frames(), 13);
    }

    #[test]
    fn test_excited_population_growth() {
        let (mut animator, mut rng) = animator(Mood::Excited);
        for k in 1..=5 {
            run(&mut animator, &mut rng, STAR_SPAWN_INTERVAL as usize);
            assert_eq!(animator.scene().stars.len(), STAR_COUNT + k);
        }
    }

    #[test]
    fn test_growth_counts_only_excited_frames() {
        let (mut animator, mut rng) = animator(Mood::Excited);
        run(&mut animator, &mut rng, 20);
        animator.set_mood(Mood::Anxious);
        run(&mut animator, &mut rng, 50);
        assert_eq!(animator.scene().stars.len(), STAR_COUNT);

        animator.set_mood(Mood::Excited);
        run(&mut animator, &mut rng, 9);
        assert_eq!(animator.scene().stars.len(), STAR_COUNT);
        run(&mut animator, &mut rng, 1);
        assert_eq!(animator.scene().stars.len(), STAR_COUNT + 1);
    }

    #[test]
    fn test_population_capped_with_oldest_evicted() {
        let mut rng = SequenceRandom::constant(0.5);
        let mut scene = SceneRegistry::populate(BOUNDS, &mut rng);
        // Tag each star by size so creation order is observable.
        scene.stars = (0..STAR_LIMIT)
            .map(|i| {
                let white = Rgba::rgb(255, 255, 255);
                Star::new(Vector2::new(10.0, 10.0), i as f32, 3.0, 0.0, white)
            })
            .collect();
        let mut animator = Animator::with_scene(Mood::Excited, scene);

        let mut surface = Recorder::new(BOUNDS);
        for _ in 0..STAR_SPAWN_INTERVAL {
            animator.frame(&mut surface, &mut rng);
        }

        let stars = &animator.scene().stars;
        assert_eq!(stars.len(), STAR_LIMIT);
        assert_eq!(stars.front().map(|s| s.size), Some(1.0));
        // Newcomer from spawn(): size drawn from [3, 8) at 0.5.
        assert_eq!(stars.back().map(|s| s.size), Some(5.5));
    }

    #[test]
    fn test_population_never_exceeds_limit() {
        let (mut animator, mut rng) = animator(Mood::Excited);
        for _ in 0..(STAR_LIMIT - STAR_COUNT + 10) {
            run(&mut animator, &mut rng, STAR_SPAWN_INTERVAL as usize);
            assert!(animator.scene().stars.len() <= STAR_LIMIT);
        }
        assert_eq!(animator.scene().stars.len(), STAR_LIMIT);
    }

    #[test]
    fn test_resize_does_not_reposition() {
        let (mut animator, mut rng) = animator(Mood::Anxious);
        let origins: Vec<Vector2> = animator.scene().lines.iter().map(|l| l.origin).collect();
        let mut small = Recorder::new(Bounds::new(100.0, 50.0));
        animator.frame(&mut small, &mut rng);
        let after: Vec<Vector2> = animator.scene().lines.iter().map(|l| l.origin).collect();
        assert_eq!(origins, after);
    }
}
