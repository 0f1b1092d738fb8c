use std::time::Duration;

// --- Playfield ---
pub const GAME_WIDTH: i32 = 224;
pub const GAME_HEIGHT: i32 = 256;

// --- Formation ---
pub const FORMATION_ROWS: usize = 5;
pub const FORMATION_COLS: usize = 11;
pub const NUM_ALIENS: usize = FORMATION_ROWS * FORMATION_COLS;
pub const FORMATION_ORIGIN_X: i32 = 20;
pub const FORMATION_ORIGIN_Y: i32 = 128;
pub const ALIEN_SPACING_X: i32 = 16;
pub const ALIEN_SPACING_Y: i32 = 17;
pub const FORMATION_SPEED: i32 = 1; // Pixels per frame
pub const FORMATION_ROW_STEP: i32 = 8;
pub const FORMATION_LEFT_BOUND: i32 = 1;
pub const FORMATION_SPRITE_WIDTH: i32 = 12; // Widest alien sprite
pub const LEFT_SENTINEL: usize = 0;
pub const RIGHT_SENTINEL: usize = FORMATION_COLS - 1;
pub const DEATH_COUNTER_FRAMES: u8 = 10;

// --- Player ---
pub const PLAYER_START_X: i32 = 112 - 5;
pub const PLAYER_START_Y: i32 = 32;
pub const PLAYER_LIVES: u32 = 3;
pub const PLAYER_STEP: i32 = 2;
pub const INVASION_LINE_Y: i32 = PLAYER_START_Y + 7; // Top of the player sprite

// --- Bullets ---
pub const MAX_PLAYER_BULLETS: usize = 3;
pub const MAX_ALIEN_BULLETS: usize = 1;
pub const BULLET_CAPACITY: usize = MAX_PLAYER_BULLETS + MAX_ALIEN_BULLETS;
pub const PLAYER_BULLET_SPEED: i32 = 2;
pub const ALIEN_BULLET_SPEED: i32 = -2;
pub const BULLET_FLOOR_Y: i32 = 3;

// --- Presentation ---
pub const ANIMATION_FRAME_DURATION: usize = 10; // Frames per animation step
pub const CELL_WIDTH: i32 = 4; // Pixels per terminal column
pub const CELL_HEIGHT: i32 = 8; // Pixels per terminal row
pub const FRAME_DURATION: Duration = Duration::from_millis(16);
pub const TERMINAL_SCREEN_DURATION: Duration = Duration::from_secs(10);
pub const HOLD_WINDOW_FRAMES: u64 = 4; // Key counts as held this long without repeats
pub const LOG_FILE: &str = "space-invaders.log";
