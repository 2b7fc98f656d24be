//! Scrolling background stars

use glam::Vec2;
use rand::Rng;

use super::state::Star;
use crate::tuning::Tuning;

/// Scatter the starfield uniformly over the play area
pub fn create_stars<R: Rng>(tuning: &Tuning, rng: &mut R) -> Vec<Star> {
    (0..tuning.star_count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..tuning.play_area_width),
                rng.random_range(0.0..tuning.play_area_height),
            ),
            size: rng.random_range(tuning.star_min_size..tuning.star_max_size),
            speed: rng.random_range(tuning.star_min_speed..tuning.star_max_speed),
        })
        .collect()
}

/// Scroll every star down by its speed, recycling the ones that fall off the bottom
pub fn advance_stars<R: Rng>(stars: &mut [Star], play_area: Vec2, rng: &mut R) {
    for star in stars.iter_mut() {
        star.pos.y += star.speed;
        if star.pos.y > play_area.y {
            star.pos.y = 0.0;
            star.pos.x = rng.random_range(0.0..play_area.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_create_stars_within_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let stars = create_stars(&tuning, &mut rng);

        assert_eq!(stars.len(), 100);
        for star in &stars {
            assert!((0.0..540.0).contains(&star.pos.x));
            assert!((0.0..960.0).contains(&star.pos.y));
            assert!((1.0..3.0).contains(&star.size));
            assert!((0.5..1.5).contains(&star.speed));
        }
    }

    #[test]
    fn test_stars_fall_by_their_speed() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut stars = vec![Star {
            pos: Vec2::new(10.0, 100.0),
            size: 2.0,
            speed: 1.25,
        }];
        advance_stars(&mut stars, Vec2::new(540.0, 960.0), &mut rng);
        assert_eq!(stars[0].pos, Vec2::new(10.0, 101.25));
    }

    #[test]
    fn test_star_wraps_past_bottom() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut stars = vec![
            Star {
                pos: Vec2::new(10.0, 959.5),
                size: 2.0,
                speed: 1.0,
            },
            // Landing exactly on the edge does not wrap
            Star {
                pos: Vec2::new(20.0, 959.0),
                size: 2.0,
                speed: 1.0,
            },
        ];
        advance_stars(&mut stars, Vec2::new(540.0, 960.0), &mut rng);

        assert_eq!(stars[0].pos.y, 0.0);
        assert!((0.0..540.0).contains(&stars[0].pos.x));
        assert_eq!(stars[1].pos, Vec2::new(20.0, 960.0));
    }
}
