use crate::constants::*;
use crate::sprites::{
    ALIEN_A_0, ALIEN_B_0, ALIEN_BULLET_0, ALIEN_C_0, ALIEN_DEATH, PLAYER, PLAYER_BULLET, Sprite,
};
use crate::types::Rect;

// --- Aliens ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienKind {
    A,
    B,
    C,
}

impl AlienKind {
    /// Top row is worth the most: A=1, B=2, C=3 scores `10 * (4 - rank)`.
    pub fn rank(self) -> u32 {
        match self {
            AlienKind::A => 1,
            AlienKind::B => 2,
            AlienKind::C => 3,
        }
    }

    pub fn points(self) -> u32 {
        10 * (4 - self.rank())
    }

    /// Row 0 is the bottom of the formation.
    pub fn for_row(row: usize) -> Self {
        match (FORMATION_ROWS - row) / 2 {
            0 => AlienKind::A,
            1 => AlienKind::B,
            _ => AlienKind::C,
        }
    }

    /// Collision footprint; every animation frame of a kind shares it.
    pub fn sprite(self) -> &'static Sprite {
        match self {
            AlienKind::A => &ALIEN_A_0,
            AlienKind::B => &ALIEN_B_0,
            AlienKind::C => &ALIEN_C_0,
        }
    }

    /// Shift that centres this kind's sprite on the wider death sprite.
    pub fn death_offset(self) -> i32 {
        (ALIEN_DEATH.width - self.sprite().width) / 2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienState {
    Dead,
    Alive(AlienKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub state: AlienState,
}

impl Alien {
    pub fn new(x: i32, y: i32, kind: AlienKind) -> Self {
        Alien { x, y, state: AlienState::Alive(kind) }
    }

    pub fn kind(&self) -> Option<AlienKind> {
        match self.state {
            AlienState::Alive(kind) => Some(kind),
            AlienState::Dead => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.kind().is_some()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.kind().map(|kind| kind.sprite().rect(self.x, self.y))
    }
}

// --- Player ---
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub life: u32,
}

impl Player {
    pub fn new() -> Self {
        Player { x: PLAYER_START_X, y: PLAYER_START_Y, life: PLAYER_LIVES }
    }

    pub fn rect(&self) -> Rect {
        PLAYER.rect(self.x, self.y)
    }

    /// Where a fresh player bullet appears: centred, just above the ship.
    pub fn muzzle(&self) -> (i32, i32) {
        (self.x + PLAYER.width / 2, self.y + PLAYER.height)
    }
}

// --- Bullets ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Alien,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub dir: i32, // Positive travels up toward the aliens
}

impl Bullet {
    pub fn new(x: i32, y: i32, dir: i32) -> Self {
        Bullet { x, y, dir }
    }

    pub fn owner(&self) -> BulletOwner {
        if self.dir > 0 { BulletOwner::Player } else { BulletOwner::Alien }
    }

    pub fn sprite(&self) -> &'static Sprite {
        match self.owner() {
            BulletOwner::Player => &PLAYER_BULLET,
            BulletOwner::Alien => &ALIEN_BULLET_0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.sprite().rect(self.x, self.y)
    }

    pub fn is_out_of_bounds(&self, field_height: i32) -> bool {
        self.y < BULLET_FLOOR_Y || self.y >= field_height
    }
}
