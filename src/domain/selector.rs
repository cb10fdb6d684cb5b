// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selector.rs
//
// Square selector geometry: nudging, resizing and recentring.

use super::crop::CropRegion;
use crate::constant::MIN_CROP_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// The square the user positions before saving.
///
/// Nothing here knows about the image; the region may hang off any edge
/// until it is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    x: i32,
    y: i32,
    size: u32,
}

impl Selector {
    pub fn new(size: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            size: size.max(MIN_CROP_SIZE),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn region(&self) -> CropRegion {
        CropRegion::new(self.x, self.y, self.size)
    }

    /// Move by one pixel.
    pub fn nudge(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Right => self.x = self.x.saturating_add(1),
            Direction::Down => self.y = self.y.saturating_add(1),
        }
    }

    /// Centre the square on a clicked point.
    pub fn recenter(&mut self, px: f32, py: f32) {
        let half = half(self.size) as f32;
        self.x = (px - half).round() as i32;
        self.y = (py - half).round() as i32;
    }

    /// Change the side length while keeping the square centred on the same
    /// point. Odd sizes cannot be centred exactly, so the corner shifts by
    /// one pixel on the odd steps: up/left when growing, back when
    /// shrinking.
    pub fn resize(&mut self, size: u32) {
        let size = size.max(MIN_CROP_SIZE);
        let shift = i64::from(half(self.size)) - i64::from(half(size));
        self.x = clamp_i32(i64::from(self.x) + shift);
        self.y = clamp_i32(i64::from(self.y) + shift);
        self.size = size;
    }

    pub fn grow(&mut self) {
        self.resize(self.size.saturating_add(1));
    }

    pub fn shrink(&mut self) {
        self.resize(self.size.saturating_sub(1));
    }
}

/// Half the side length, rounding halves up.
fn half(size: u32) -> u32 {
    size / 2 + size % 2
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(sel: &Selector) -> (i32, i32) {
        let region = sel.region();
        (region.x, region.y)
    }

    #[test]
    fn nudge_moves_one_pixel() {
        let mut sel = Selector::new(10);
        sel.nudge(Direction::Right);
        sel.nudge(Direction::Right);
        sel.nudge(Direction::Down);
        assert_eq!(corner(&sel), (2, 1));

        sel.nudge(Direction::Left);
        sel.nudge(Direction::Up);
        sel.nudge(Direction::Up);
        assert_eq!(corner(&sel), (1, -1));
    }

    #[test]
    fn recenter_subtracts_rounded_half() {
        let mut sel = Selector::new(10);
        sel.recenter(100.0, 100.0);
        assert_eq!(corner(&sel), (95, 95));

        let mut odd = Selector::new(11);
        odd.recenter(100.0, 40.0);
        assert_eq!(corner(&odd), (94, 34));
    }

    #[test]
    fn recenter_near_origin_goes_negative() {
        let mut sel = Selector::new(20);
        sel.recenter(3.0, 4.0);
        assert_eq!(sel.region(), CropRegion::new(-7, -6, 20));
    }

    #[test]
    fn growing_to_odd_shifts_up_left_and_shrinking_shifts_back() {
        let mut sel = Selector::new(10);
        sel.recenter(100.0, 100.0);
        assert_eq!(corner(&sel), (95, 95));

        sel.grow();
        assert_eq!(sel.size(), 11);
        assert_eq!(corner(&sel), (94, 94));

        sel.shrink();
        assert_eq!(sel.size(), 10);
        assert_eq!(corner(&sel), (95, 95));
    }

    #[test]
    fn growing_to_even_keeps_corner() {
        let mut sel = Selector::new(11);
        sel.recenter(50.0, 50.0);
        let before = corner(&sel);
        sel.grow();
        assert_eq!(corner(&sel), before);
    }

    #[test]
    fn shrinking_even_to_odd_keeps_corner() {
        let mut sel = Selector::new(12);
        sel.recenter(100.0, 100.0);
        assert_eq!(corner(&sel), (94, 94));

        sel.shrink();
        assert_eq!(sel.size(), 11);
        assert_eq!(corner(&sel), (94, 94));

        sel.grow();
        assert_eq!(sel.region(), CropRegion::new(94, 94, 12));
    }

    #[test]
    fn resize_jump_stays_centred() {
        let mut sel = Selector::new(10);
        sel.recenter(100.0, 100.0);
        sel.resize(40);
        assert_eq!(sel.region(), CropRegion::new(80, 80, 40));
    }

    #[test]
    fn size_never_drops_below_minimum() {
        let mut sel = Selector::new(1);
        sel.shrink();
        assert_eq!(sel.size(), MIN_CROP_SIZE);

        sel.resize(0);
        assert_eq!(sel.size(), MIN_CROP_SIZE);
        assert_eq!(Selector::new(0).size(), MIN_CROP_SIZE);
    }
}
