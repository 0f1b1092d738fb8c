use log::debug;
use rand::Rng;

use crate::constants::*;
use crate::entities::{Alien, Bullet, BulletOwner, Player};
use crate::formation::find_living;
use crate::sprites::ALIEN_BULLET_0;

/// Result of the once-per-frame alien firing check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienFire {
    Fired(usize),
    Holding,
    NoSurvivors,
}

/// Fixed-capacity projectile pool with per-owner accounting.
#[derive(Clone, Debug)]
pub struct BulletPool {
    bullets: Vec<Bullet>,
    player_count: usize,
    alien_count: usize,
}

impl BulletPool {
    pub fn new() -> Self {
        BulletPool {
            bullets: Vec::with_capacity(BULLET_CAPACITY),
            player_count: 0,
            alien_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn alien_count(&self) -> usize {
        self.alien_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn spawn_player(&mut self, player: &Player) -> bool {
        if self.player_count >= MAX_PLAYER_BULLETS {
            return false;
        }
        let (x, y) = player.muzzle();
        self.bullets.push(Bullet::new(x, y, PLAYER_BULLET_SPEED));
        self.player_count += 1;
        debug!("Player fired from ({}, {})", x, y);
        true
    }

    /// Picks a random living alien to shoot, but only while no alien bullet
    /// is in flight. A probe that finds nobody reports `NoSurvivors`.
    pub fn try_alien_fire(&mut self, aliens: &[Alien], rng: &mut impl Rng) -> AlienFire {
        if self.alien_count >= MAX_ALIEN_BULLETS || aliens.is_empty() {
            return AlienFire::Holding;
        }
        let start = rng.gen_range(0..aliens.len());
        let Some(ai) = find_living(aliens, start) else {
            return AlienFire::NoSurvivors;
        };
        let alien = &aliens[ai];
        let width = alien.kind().map_or(0, |kind| kind.sprite().width);
        let x = alien.x + width / 2;
        let y = alien.y - ALIEN_BULLET_0.height;
        self.spawn_alien_at(x, y);
        AlienFire::Fired(ai)
    }

    pub fn spawn_alien_at(&mut self, x: i32, y: i32) -> bool {
        if self.alien_count >= MAX_ALIEN_BULLETS {
            return false;
        }
        self.bullets.push(Bullet::new(x, y, ALIEN_BULLET_SPEED));
        self.alien_count += 1;
        true
    }

    /// Swap-with-last removal; the bullet now at `bi` has not been visited yet.
    pub fn remove(&mut self, bi: usize) -> Bullet {
        let bullet = self.bullets.swap_remove(bi);
        match bullet.owner() {
            BulletOwner::Player => self.player_count -= 1,
            BulletOwner::Alien => self.alien_count -= 1,
        }
        bullet
    }

    /// Advances every bullet, expiring those that leave the field, then hands
    /// each survivor to `on_flight`. Returning true consumes the bullet.
    pub fn update<F>(&mut self, field_height: i32, mut on_flight: F)
    where
        F: FnMut(&Bullet) -> bool,
    {
        let mut bi = 0;
        while bi < self.bullets.len() {
            let bullet = &mut self.bullets[bi];
            bullet.y += bullet.dir;
            if bullet.is_out_of_bounds(field_height) || on_flight(&self.bullets[bi]) {
                self.remove(bi);
                continue;
            }
            bi += 1;
        }
    }
}
