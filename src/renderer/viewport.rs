//! Letterboxed mapping between the play area and the surface
//!
//! The play area keeps its aspect ratio and is centered on the surface.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface size (pixels, or CSS pixels for input mapping)
    pub size: Vec2,
    /// Play area size (logical units)
    pub play_area: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32, play_area: Vec2) -> Self {
        Self {
            size: Vec2::new(width, height),
            play_area,
        }
    }

    /// Surface units per play-area unit
    pub fn scale(&self) -> f32 {
        (self.size.x / self.play_area.x).min(self.size.y / self.play_area.y)
    }

    /// Top-left of the play area on the surface
    pub fn offset(&self) -> Vec2 {
        (self.size - self.play_area * self.scale()) / 2.0
    }

    /// Play-area point to normalized device coordinates (y up)
    pub fn play_to_ndc(&self, p: Vec2) -> Vec2 {
        let screen = self.offset() + p * self.scale();
        Vec2::new(
            screen.x / self.size.x * 2.0 - 1.0,
            1.0 - screen.y / self.size.y * 2.0,
        )
    }

    /// Surface point (e.g. pointer position) to play-area coordinates
    pub fn screen_to_play(&self, p: Vec2) -> Vec2 {
        let scale = self.scale();
        if scale <= 0.0 {
            return Vec2::ZERO;
        }
        (p - self.offset()) / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAY: Vec2 = Vec2::new(540.0, 960.0);

    #[test]
    fn test_exact_fit() {
        let vp = Viewport::new(540.0, 960.0, PLAY);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.play_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.play_to_ndc(PLAY), Vec2::new(1.0, -1.0));
        assert_eq!(vp.play_to_ndc(PLAY / 2.0), Vec2::ZERO);
    }

    #[test]
    fn test_wide_surface_pillarboxes() {
        // Height-limited: scale 1, 230 px bars on each side
        let vp = Viewport::new(1000.0, 960.0, PLAY);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Vec2::new(230.0, 0.0));
        assert_eq!(vp.screen_to_play(Vec2::new(230.0, 0.0)), Vec2::ZERO);
        assert_eq!(vp.screen_to_play(Vec2::new(500.0, 480.0)), Vec2::new(270.0, 480.0));
    }

    #[test]
    fn test_round_trip_through_scaled_surface() {
        let vp = Viewport::new(270.0, 480.0, PLAY);
        assert_eq!(vp.scale(), 0.5);
        assert_eq!(vp.screen_to_play(Vec2::new(135.0, 240.0)), Vec2::new(270.0, 480.0));
    }
}
