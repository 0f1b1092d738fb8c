use crate::constants::ANIMATION_FRAME_DURATION;
use crate::types::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);
pub const ALIEN_COLOR: Rgb = Rgb::new(200, 40, 40);
pub const PLAYER_COLOR: Rgb = Rgb::new(60, 220, 60);
pub const BULLET_COLOR: Rgb = Rgb::new(240, 240, 240);
pub const TEXT_COLOR: Rgb = Rgb::new(220, 220, 220);

/// 1-bit stencil. `data` holds rows top to bottom, one byte per pixel.
#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    pub width: i32,
    pub height: i32,
    data: &'static [u8],
}

impl Sprite {
    pub const fn new(width: i32, height: i32, data: &'static [u8]) -> Self {
        assert!(data.len() == (width * height) as usize);
        Sprite { width, height, data }
    }

    /// `row` counts from the top of the bitmap.
    pub fn is_set(&self, column: i32, row: i32) -> bool {
        self.data[(row * self.width + column) as usize] != 0
    }

    pub fn rect(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }
}

/// Looping flip-book over a fixed set of frames.
#[derive(Clone, Debug)]
pub struct SpriteAnimation {
    frames: &'static [&'static Sprite],
    frame_duration: usize,
    time: usize,
}

impl SpriteAnimation {
    pub fn new(frames: &'static [&'static Sprite]) -> Self {
        SpriteAnimation { frames, frame_duration: ANIMATION_FRAME_DURATION, time: 0 }
    }

    pub fn advance(&mut self) {
        self.time = (self.time + 1) % (self.frames.len() * self.frame_duration);
    }

    pub fn current(&self) -> &'static Sprite {
        self.frames[self.time / self.frame_duration]
    }
}

pub static ALIEN_A_FRAMES: [&Sprite; 2] = [&ALIEN_A_0, &ALIEN_A_1];
pub static ALIEN_B_FRAMES: [&Sprite; 2] = [&ALIEN_B_0, &ALIEN_B_1];
pub static ALIEN_C_FRAMES: [&Sprite; 2] = [&ALIEN_C_0, &ALIEN_C_1];
pub static ALIEN_BULLET_FRAMES: [&Sprite; 2] = [&ALIEN_BULLET_0, &ALIEN_BULLET_1];

pub static ALIEN_A_0: Sprite = Sprite::new(8, 8, &[
    0, 0, 0, 1, 1, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 0, 1, 1, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 1, 0, 0, 1, 0, 0,
    0, 1, 0, 1, 1, 0, 1, 0,
    1, 0, 1, 0, 0, 1, 0, 1,
]);

pub static ALIEN_A_1: Sprite = Sprite::new(8, 8, &[
    0, 0, 0, 1, 1, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 0, 1, 1, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    0, 1, 0, 1, 1, 0, 1, 0,
    1, 0, 0, 0, 0, 0, 0, 1,
    0, 1, 0, 0, 0, 0, 1, 0,
]);

pub static ALIEN_B_0: Sprite = Sprite::new(11, 8, &[
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0,
    0, 1, 1, 0, 1, 1, 1, 0, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1,
    1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1,
    0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0,
]);

pub static ALIEN_B_1: Sprite = Sprite::new(11, 8, &[
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1,
    1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1,
    1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0,
    0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0,
]);

pub static ALIEN_C_0: Sprite = Sprite::new(12, 8, &[
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0,
    0, 0, 1, 1, 0, 1, 1, 0, 1, 1, 0, 0,
    1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1,
]);

pub static ALIEN_C_1: Sprite = Sprite::new(12, 8, &[
    0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0,
    0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0,
    0, 0, 1, 1, 0, 0, 0, 0, 1, 1, 0, 0,
]);

pub static ALIEN_DEATH: Sprite = Sprite::new(13, 7, &[
    0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0,
    0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1,
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0,
    0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0,
    0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0,
]);

pub static PLAYER: Sprite = Sprite::new(11, 7, &[
    0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0,
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
]);

pub static PLAYER_BULLET: Sprite = Sprite::new(1, 3, &[
    1,
    1,
    1,
]);

pub static ALIEN_BULLET_0: Sprite = Sprite::new(3, 7, &[
    0, 1, 0,
    1, 0, 0,
    0, 1, 0,
    0, 0, 1,
    0, 1, 0,
    1, 0, 0,
    0, 1, 0,
]);

pub static ALIEN_BULLET_1: Sprite = Sprite::new(3, 7, &[
    0, 1, 0,
    0, 0, 1,
    0, 1, 0,
    1, 0, 0,
    0, 1, 0,
    0, 0, 1,
    0, 1, 0,
]);
