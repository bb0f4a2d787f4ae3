use rand::Rng;

const SPEED_RANGE: (f64, f64) = (-1.0, 1.0);
const SIZE_RANGE: (f64, f64) = (1.0, 3.0);
const OPACITY_RANGE: (f64, f64) = (0.1, 0.5);

/// Drawable area, in CSS pixels, with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * bounds.width,
            y: rng.gen::<f64>() * bounds.height,
            speed_x: rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1),
            speed_y: rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1),
            size: rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1),
            opacity: rng.gen_range(OPACITY_RANGE.0..OPACITY_RANGE.1),
        }
    }

    /// Moves one frame, flipping velocity on the axis that touched a wall and
    /// clamping so an overshoot never leaves the bounds.
    pub fn step(&mut self, bounds: Bounds) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x <= 0.0 || self.x >= bounds.width {
            self.speed_x = -self.speed_x;
        }
        if self.y <= 0.0 || self.y >= bounds.height {
            self.speed_y = -self.speed_y;
        }

        self.x = self.x.clamp(0.0, bounds.width);
        self.y = self.y.clamp(0.0, bounds.height);
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; \
             background: rgba(255, 255, 255, {opacity:.2}); border-radius: 50%; \
             left: {x:.2}px; top: {y:.2}px; pointer-events: none;",
            size = self.size,
            opacity = self.opacity,
            x = self.x,
            y = self.y,
        )
    }
}

/// Fixed-size collection of particles bouncing inside a rectangle.
#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
}

impl ParticleField {
    pub fn create<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(bounds, rng)).collect();
        Self { particles, bounds }
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// Replaces every particle with a fresh one for the new bounds. Positions
    /// are not carried over.
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        let count = self.particles.len();
        self.particles.clear();
        self.bounds = bounds;
        self.particles
            .extend((0..count).map(|_| Particle::random(bounds, rng)));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn particle(x: f64, y: f64, speed_x: f64, speed_y: f64) -> Particle {
        Particle {
            x,
            y,
            speed_x,
            speed_y,
            size: 2.0,
            opacity: 0.3,
        }
    }

    #[test]
    fn create_yields_requested_count_inside_bounds() {
        let bounds = Bounds::new(640.0, 480.0);
        let mut rng = rng();

        for count in [0, 1, 7, 50, 200] {
            let field = ParticleField::create(count, bounds, &mut rng);

            assert_eq!(field.len(), count);
            for particle in field.particles() {
                assert!(bounds.contains(particle.x, particle.y));
                assert!((-1.0..1.0).contains(&particle.speed_x));
                assert!((-1.0..1.0).contains(&particle.speed_y));
                assert!((1.0..3.0).contains(&particle.size));
                assert!((0.1..0.5).contains(&particle.opacity));
            }
        }
    }

    #[test]
    fn create_handles_degenerate_bounds() {
        let field = ParticleField::create(5, Bounds::new(0.0, 0.0), &mut rng());

        assert_eq!(field.len(), 5);
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn particles_never_escape_across_many_frames() {
        let bounds = Bounds::new(120.0, 80.0);
        let mut field = ParticleField::create(64, bounds, &mut rng());

        for _ in 0..5_000 {
            field.step();
            for particle in field.particles() {
                assert!(bounds.contains(particle.x, particle.y));
            }
        }
    }

    #[test]
    fn crossing_right_wall_flips_only_horizontal_velocity() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut particle = particle(99.5, 50.0, 0.8, 0.4);

        particle.step(bounds);

        assert_eq!(particle.x, 100.0);
        assert_eq!(particle.speed_x, -0.8);
        assert_eq!(particle.speed_y, 0.4);
        assert!((particle.y - 50.4).abs() < 1e-9);
    }

    #[test]
    fn crossing_top_wall_flips_only_vertical_velocity() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut particle = particle(50.0, 0.3, -0.2, -0.9);

        particle.step(bounds);

        assert_eq!(particle.y, 0.0);
        assert_eq!(particle.speed_y, 0.9);
        assert_eq!(particle.speed_x, -0.2);
    }

    #[test]
    fn corner_contact_flips_both_axes() {
        let bounds = Bounds::new(10.0, 10.0);
        let mut particle = particle(9.9, 9.9, 0.5, 0.5);

        particle.step(bounds);

        assert_eq!((particle.x, particle.y), (10.0, 10.0));
        assert_eq!((particle.speed_x, particle.speed_y), (-0.5, -0.5));
    }

    #[test]
    fn interior_motion_keeps_velocity() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut particle = particle(40.0, 60.0, 0.5, -0.5);

        particle.step(bounds);

        assert_eq!((particle.x, particle.y), (40.5, 59.5));
        assert_eq!((particle.speed_x, particle.speed_y), (0.5, -0.5));
    }

    #[test]
    fn resize_recreates_same_count_within_new_bounds() {
        let mut rng = rng();
        let mut field = ParticleField::create(30, Bounds::new(1920.0, 1080.0), &mut rng);
        let shrunk = Bounds::new(320.0, 240.0);

        field.resize(shrunk, &mut rng);

        assert_eq!(field.len(), 30);
        assert_eq!(field.bounds(), shrunk);
        assert!(field
            .particles()
            .iter()
            .all(|particle| shrunk.contains(particle.x, particle.y)));
    }

    #[test]
    fn style_positions_element_at_particle() {
        let style = particle(12.5, 7.25, 0.0, 0.0).style();

        assert!(style.contains("left: 12.50px"));
        assert!(style.contains("top: 7.25px"));
        assert!(style.contains("rgba(255, 255, 255, 0.30)"));
    }
}
