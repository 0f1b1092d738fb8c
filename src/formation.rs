use log::debug;

use crate::constants::*;
use crate::entities::{Alien, AlienKind};

/// Lays out the full 5x11 grid, row 0 at the bottom, indexed row-major.
pub fn spawn_formation() -> Vec<Alien> {
    let mut aliens = Vec::with_capacity(NUM_ALIENS);
    for row in 0..FORMATION_ROWS {
        let kind = AlienKind::for_row(row);
        for col in 0..FORMATION_COLS {
            let x = FORMATION_ORIGIN_X + ALIEN_SPACING_X * col as i32 + kind.death_offset();
            let y = FORMATION_ORIGIN_Y + ALIEN_SPACING_Y * row as i32;
            aliens.push(Alien::new(x, y, kind));
        }
    }
    aliens
}

/// Shared sweep state of the alien swarm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formation {
    pub direction: i32,
    pub speed: i32,
    pub row_step: i32,
    pub left_bound: i32,
    pub sprite_width: i32,
    pub left_sentinel: usize,
    pub right_sentinel: usize,
}

impl Formation {
    pub fn new() -> Self {
        Formation {
            direction: 1,
            speed: FORMATION_SPEED,
            row_step: FORMATION_ROW_STEP,
            left_bound: FORMATION_LEFT_BOUND,
            sprite_width: FORMATION_SPRITE_WIDTH,
            left_sentinel: LEFT_SENTINEL,
            right_sentinel: RIGHT_SENTINEL,
        }
    }

    /// Moves the swarm one frame. Returns true when it bounced and descended.
    ///
    /// Aliens whose death sprite has expired stay put, except the sentinels,
    /// which keep tracking the envelope so the bounce points never shift.
    pub fn advance(&mut self, aliens: &mut [Alien], death_counters: &[u8], field_width: i32) -> bool {
        let step = self.direction * self.speed;
        for (ai, alien) in aliens.iter_mut().enumerate() {
            let visible = alien.is_alive() || death_counters[ai] > 0;
            if visible || self.is_sentinel(ai) {
                alien.x += step;
            }
        }

        let left = aliens[self.left_sentinel % aliens.len()].x;
        let right = aliens[self.right_sentinel % aliens.len()].x;
        let hit_left = self.direction < 0 && left <= self.left_bound;
        let hit_right = self.direction > 0 && right >= field_width - self.sprite_width;
        if !(hit_left || hit_right) {
            return false;
        }

        self.direction = -self.direction;
        for alien in aliens.iter_mut() {
            alien.y -= self.row_step;
        }
        debug!("Formation bounced, now heading {}", self.direction);
        true
    }

    fn is_sentinel(&self, ai: usize) -> bool {
        ai == self.left_sentinel || ai == self.right_sentinel
    }
}

/// True once any living alien has reached the player's line.
pub fn has_invaded(aliens: &[Alien], line_y: i32) -> bool {
    aliens.iter().any(|alien| alien.is_alive() && alien.y <= line_y)
}

/// Linear probe for a living alien starting at `start`, wrapping once.
/// `None` means the whole formation is dead.
pub fn find_living(aliens: &[Alien], start: usize) -> Option<usize> {
    if aliens.is_empty() {
        return None;
    }
    let start = start % aliens.len();
    let mut ai = start;
    loop {
        if aliens[ai].is_alive() {
            return Some(ai);
        }
        ai = (ai + 1) % aliens.len();
        if ai == start {
            return None;
        }
    }
}
