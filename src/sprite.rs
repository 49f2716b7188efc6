//! Sprite-sheet frame selection.
//!
//! A sprite sheet packs animation frames into a grid. The [`SpriteAnimator`]
//! keeps a fractional frame counter; its integer part picks a grid cell via
//! [`SpriteSheet::cell`], and the cell plus the sheet's tile size become the
//! `size` / `offset` pair the sprite shader samples with.

use glam::Vec2;

/// Grid geometry of a sprite-sheet texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSheet {
    /// Size of one frame in normalized texture coordinates.
    pub tile_size: Vec2,
    /// Frames per row.
    pub columns: u32,
}

impl Default for SpriteSheet {
    /// The walk-cycle sheet: three frames per row.
    fn default() -> Self {
        Self {
            tile_size: Vec2::new(0.28, 0.19),
            columns: 3,
        }
    }
}

impl SpriteSheet {
    pub fn new(tile_size: Vec2, columns: u32) -> Self {
        Self { tile_size, columns }
    }

    /// Grid cell `(column, row)` for a fractional frame counter.
    ///
    /// `columns` must be non-zero; `SceneConfig::validate` rejects zero.
    pub fn cell(&self, frame: f32) -> (u32, u32) {
        let index = frame as u32;
        (index % self.columns, index / self.columns)
    }

    /// Cell as a shader offset, in tile units.
    pub fn offset(&self, frame: f32) -> Vec2 {
        let (column, row) = self.cell(frame);
        Vec2::new(column as f32, row as f32)
    }

    /// Normalized `(origin, size)` of a cell's texture sub-rectangle.
    pub fn uv_rect(&self, column: u32, row: u32) -> (Vec2, Vec2) {
        let origin = Vec2::new(column as f32, row as f32) * self.tile_size;
        (origin, self.tile_size)
    }
}

/// A wrapping animation counter.
///
/// Each [`advance`](Self::advance) either resets to zero, when the counter
/// has already passed `wrap_after`, or adds `step`. The wrap is checked
/// before incrementing, so the counter can briefly exceed `wrap_after`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteAnimator {
    frame: f32,
    step: f32,
    wrap_after: f32,
}

impl Default for SpriteAnimator {
    /// Integer frame changes every fifth step; wraps after frame 10.
    fn default() -> Self {
        Self::new(0.2, 10.0)
    }
}

impl SpriteAnimator {
    pub fn new(step: f32, wrap_after: f32) -> Self {
        Self {
            frame: 0.0,
            step,
            wrap_after,
        }
    }

    pub fn frame(&self) -> f32 {
        self.frame
    }

    /// Steps the counter once and returns the new value.
    pub fn advance(&mut self) -> f32 {
        if self.frame > self.wrap_after {
            log::trace!("sprite frame {} wrapped to 0", self.frame);
            self.frame = 0.0;
        } else {
            self.frame += self.step;
        }
        self.frame
    }

    pub fn reset(&mut self) {
        self.frame = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const WALK_CYCLE: [(u32, u32); 55] = [
        (0, 0), (0, 0), (0, 0), (0, 0), (1, 0),
        (1, 0), (1, 0), (1, 0), (1, 0), (2, 0),
        (2, 0), (2, 0), (2, 0), (2, 0), (0, 1),
        (0, 1), (0, 1), (0, 1), (0, 1), (1, 1),
        (1, 1), (1, 1), (1, 1), (1, 1), (1, 1),
        (2, 1), (2, 1), (2, 1), (2, 1), (2, 1),
        (0, 2), (0, 2), (0, 2), (0, 2), (0, 2),
        (1, 2), (1, 2), (1, 2), (1, 2), (1, 2),
        (2, 2), (2, 2), (2, 2), (2, 2), (2, 2),
        (0, 3), (0, 3), (0, 3), (0, 3), (0, 3),
        (1, 3), (0, 0), (0, 0), (0, 0), (0, 0),
    ];

    #[test]
    fn walk_cycle_matches_table() {
        let sheet = SpriteSheet::default();
        let mut animator = SpriteAnimator::default();

        for (step, expected) in WALK_CYCLE.iter().enumerate() {
            let frame = animator.advance();
            assert_eq!(sheet.cell(frame), *expected, "step {}", step + 1);
        }
    }

    #[test]
    fn wraps_only_after_exceeding_threshold() {
        let mut animator = SpriteAnimator::new(1.0, 3.0);

        let frames: Vec<f32> = (0..6).map(|_| animator.advance()).collect();
        assert_eq!(frames, vec![1.0, 2.0, 3.0, 4.0, 0.0, 1.0]);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut animator = SpriteAnimator::default();
        animator.advance();
        animator.advance();
        animator.reset();
        assert_eq!(animator.frame(), 0.0);
    }

    #[test]
    fn cell_uses_integer_part() {
        let sheet = SpriteSheet::new(Vec2::splat(0.25), 4);
        assert_eq!(sheet.cell(0.99), (0, 0));
        assert_eq!(sheet.cell(5.5), (1, 1));
        assert_eq!(sheet.offset(7.0), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn uv_rect_scales_cell_by_tile() {
        let sheet = SpriteSheet::new(Vec2::new(0.25, 0.5), 4);
        let (origin, size) = sheet.uv_rect(2, 1);
        assert_eq!(origin, Vec2::new(0.5, 0.5));
        assert_eq!(size, Vec2::new(0.25, 0.5));
    }
}
