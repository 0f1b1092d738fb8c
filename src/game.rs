use log::{debug, info};
use rand::Rng;

use crate::bullets::{AlienFire, BulletPool};
use crate::collision::{Impact, resolve_bullet};
use crate::constants::*;
use crate::entities::{Alien, AlienKind, AlienState, BulletOwner, Player};
use crate::formation::{Formation, has_invaded, spawn_formation};
use crate::input::InputState;
use crate::rendering::Renderer;
use crate::sprites::*;
use crate::types::clamp_step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Running,
    Won,
    Lost,
}

/// Authoritative state of one round.
pub struct Game {
    pub width: i32,
    pub height: i32,
    pub aliens: Vec<Alien>,
    pub death_counters: Vec<u8>,
    pub formation: Formation,
    pub player: Player,
    pub bullets: BulletPool,
    pub score: u32,
    pub state: RoundState,
    pub frame: u64,
    alien_animations: [SpriteAnimation; 3],
    alien_bullet_animation: SpriteAnimation,
}

impl Game {
    pub fn new(width: i32, height: i32) -> Self {
        Game {
            width,
            height,
            aliens: spawn_formation(),
            death_counters: vec![DEATH_COUNTER_FRAMES; NUM_ALIENS],
            formation: Formation::new(),
            player: Player::new(),
            bullets: BulletPool::new(),
            score: 0,
            state: RoundState::Running,
            frame: 0,
            alien_animations: [
                SpriteAnimation::new(&ALIEN_A_FRAMES),
                SpriteAnimation::new(&ALIEN_B_FRAMES),
                SpriteAnimation::new(&ALIEN_C_FRAMES),
            ],
            alien_bullet_animation: SpriteAnimation::new(&ALIEN_BULLET_FRAMES),
        }
    }

    /// Runs one simulation step and returns the resulting round state.
    ///
    /// Order: formation sweep, bullet flight and collisions, animation
    /// timers, player movement, death counters, player fire, alien fire.
    pub fn update(&mut self, input: &mut InputState, rng: &mut impl Rng) -> RoundState {
        if self.state != RoundState::Running {
            return self.state;
        }
        self.frame += 1;

        self.formation.advance(&mut self.aliens, &self.death_counters, self.width);
        if has_invaded(&self.aliens, INVASION_LINE_Y) {
            info!("Formation reached the player line on frame {}", self.frame);
            return self.finish(RoundState::Lost);
        }

        let mut killed = Vec::new();
        let aliens = &mut self.aliens;
        let player = &mut self.player;
        let score = &mut self.score;
        self.bullets.update(self.height, |bullet| {
            let impact = resolve_bullet(bullet, aliens, player, score);
            if let Impact::Alien { index, points } = impact {
                info!("Alien {} destroyed for {} points, score {}", index, points, score);
                killed.push(index);
            }
            impact.consumed()
        });
        if self.player.life == 0 {
            return self.finish(RoundState::Lost);
        }

        for animation in self.alien_animations.iter_mut() {
            animation.advance();
        }
        self.alien_bullet_animation.advance();

        let step = PLAYER_STEP * input.move_dir;
        if step != 0 {
            self.player.x = clamp_step(self.player.x, step, PLAYER.width, self.width);
        }

        // Fresh kills keep their full count so the explosion shows for exactly
        // DEATH_COUNTER_FRAMES rendered frames.
        for (ai, alien) in self.aliens.iter().enumerate() {
            if alien.state == AlienState::Dead && self.death_counters[ai] > 0 && !killed.contains(&ai) {
                self.death_counters[ai] -= 1;
            }
        }

        if input.take_fire() {
            self.bullets.spawn_player(&self.player);
        }

        if self.bullets.alien_count() == 0 {
            match self.bullets.try_alien_fire(&self.aliens, rng) {
                AlienFire::Fired(ai) => debug!("Alien {} opened fire", ai),
                AlienFire::Holding => {}
                AlienFire::NoSurvivors => {
                    info!("Formation cleared on frame {}", self.frame);
                    return self.finish(RoundState::Won);
                }
            }
        }

        debug_assert!(self.bullets.player_count() <= MAX_PLAYER_BULLETS);
        debug_assert!(self.bullets.alien_count() <= MAX_ALIEN_BULLETS);
        self.state
    }

    fn finish(&mut self, state: RoundState) -> RoundState {
        info!("Round ended {:?} with score {}", state, self.score);
        self.state = state;
        state
    }

    /// Sprite to draw for alien `ai`, or `None` once its explosion has expired.
    pub fn alien_sprite(&self, ai: usize) -> Option<&'static Sprite> {
        match self.aliens[ai].state {
            AlienState::Alive(kind) => Some(self.animation_for(kind).current()),
            AlienState::Dead if self.death_counters[ai] > 0 => Some(&ALIEN_DEATH),
            AlienState::Dead => None,
        }
    }

    fn animation_for(&self, kind: AlienKind) -> &SpriteAnimation {
        &self.alien_animations[kind.rank() as usize - 1]
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.clear(BACKGROUND_COLOR);
        self.render_hud(renderer);

        for (ai, alien) in self.aliens.iter().enumerate() {
            if let Some(sprite) = self.alien_sprite(ai) {
                renderer.draw_sprite(sprite, alien.x, alien.y, ALIEN_COLOR);
            }
        }

        for bullet in self.bullets.iter() {
            let sprite = match bullet.owner() {
                BulletOwner::Player => &PLAYER_BULLET,
                BulletOwner::Alien => self.alien_bullet_animation.current(),
            };
            renderer.draw_sprite(sprite, bullet.x, bullet.y, BULLET_COLOR);
        }

        renderer.draw_sprite(&PLAYER, self.player.x, self.player.y, PLAYER_COLOR);
    }

    fn render_hud(&self, renderer: &mut impl Renderer) {
        let top = self.height - 2 * CELL_HEIGHT;
        renderer.draw_text("SCORE", 4, top, TEXT_COLOR);
        renderer.draw_number(self.score, 4 + 7 * CELL_WIDTH, top, TEXT_COLOR);

        renderer.draw_text("CREDIT 00", 164, 0, TEXT_COLOR);
        renderer.draw_number(self.player.life, 4, 0, TEXT_COLOR);
        for life in 1..self.player.life as i32 {
            renderer.draw_sprite(&PLAYER, 4 + life * (PLAYER.width + 4), 0, PLAYER_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::GameGrid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn new_game() -> Game {
        Game::new(GAME_WIDTH, GAME_HEIGHT)
    }

    #[test]
    fn new_round_layout() {
        let game = new_game();
        assert_eq!(game.aliens.len(), NUM_ALIENS);
        assert!(game.aliens.iter().all(Alien::is_alive));
        assert_eq!(game.player.life, 3);
        assert!(game.bullets.is_empty());
        assert_eq!(game.state, RoundState::Running);
    }

    #[test]
    fn clearing_the_formation_wins_without_firing() {
        let mut game = new_game();
        for alien in game.aliens.iter_mut() {
            alien.state = AlienState::Dead;
        }
        let state = game.update(&mut InputState::default(), &mut seeded_rng());
        assert_eq!(state, RoundState::Won);
        assert_eq!(game.bullets.alien_count(), 0);
        assert!(game.bullets.is_empty());
    }

    #[test]
    fn last_life_lost_ends_round() {
        let mut game = new_game();
        game.player.life = 1;
        let (x, y) = (game.player.x + 4, game.player.y + 2 - ALIEN_BULLET_SPEED);
        assert!(game.bullets.spawn_alien_at(x, y));

        let state = game.update(&mut InputState::default(), &mut seeded_rng());
        assert_eq!(game.player.life, 0);
        assert_eq!(state, RoundState::Lost);
        assert_eq!(game.bullets.alien_count(), 0);
    }

    #[test]
    fn finished_round_stops_updating() {
        let mut game = new_game();
        game.state = RoundState::Lost;
        let before = game.aliens.clone();
        assert_eq!(game.update(&mut InputState::default(), &mut seeded_rng()), RoundState::Lost);
        assert_eq!(game.aliens, before);
    }

    #[test]
    fn invasion_loses_with_lives_left() {
        let mut game = new_game();
        for alien in game.aliens.iter_mut() {
            alien.y -= FORMATION_ORIGIN_Y - INVASION_LINE_Y;
        }
        assert_eq!(game.update(&mut InputState::default(), &mut seeded_rng()), RoundState::Lost);
        assert_eq!(game.player.life, PLAYER_LIVES);
    }

    #[test]
    fn kill_scores_and_explosion_lasts_ten_frames() {
        let mut game = new_game();
        let ai = 20;
        let alien = game.aliens[ai].clone();
        // Aim so the bullet meets the alien after both have moved this frame.
        let mut pool = BulletPool::new();
        let mut shooter = Player::new();
        shooter.x = alien.x + FORMATION_SPEED + 2 - PLAYER.width / 2;
        shooter.y = alien.y - PLAYER_BULLET_SPEED - PLAYER.height;
        pool.spawn_player(&shooter);
        game.bullets = pool;

        let mut rng = seeded_rng();
        let mut input = InputState::default();
        game.update(&mut input, &mut rng);
        assert_eq!(game.aliens[ai].state, AlienState::Dead);
        assert_eq!(game.score, 10);
        assert_eq!(game.bullets.player_count(), 0);

        let mut explosion_frames = 0;
        for _ in 0..15 {
            match game.alien_sprite(ai) {
                Some(sprite) if sprite == &ALIEN_DEATH => explosion_frames += 1,
                Some(_) => panic!("dead alien drawn alive"),
                None => {}
            }
            game.update(&mut input, &mut rng);
            assert_eq!(game.aliens[ai].state, AlienState::Dead);
        }
        assert_eq!(explosion_frames, DEATH_COUNTER_FRAMES);
        assert_eq!(game.death_counters[ai], 0);
    }

    #[test]
    fn player_moves_and_clamps() {
        let mut game = new_game();
        let mut rng = seeded_rng();
        let mut input = InputState { move_dir: 1, ..InputState::default() };
        game.update(&mut input, &mut rng);
        assert_eq!(game.player.x, PLAYER_START_X + PLAYER_STEP);

        game.player.x = 1;
        input.move_dir = -1;
        game.update(&mut input, &mut rng);
        assert_eq!(game.player.x, 0);

        game.player.x = GAME_WIDTH - PLAYER.width - 1;
        input.move_dir = 1;
        game.update(&mut input, &mut rng);
        assert_eq!(game.player.x, GAME_WIDTH - PLAYER.width);
    }

    #[test]
    fn fire_latch_spawns_one_bullet() {
        let mut game = new_game();
        let mut rng = seeded_rng();
        let mut input = InputState { fire_pressed: true, ..InputState::default() };
        game.update(&mut input, &mut rng);
        assert!(!input.fire_pressed);
        assert_eq!(game.bullets.player_count(), 1);
        game.update(&mut input, &mut rng);
        assert_eq!(game.bullets.player_count(), 1);
    }

    #[test]
    fn caps_hold_and_score_only_grows_by_kill_values() {
        let mut game = new_game();
        let mut rng = seeded_rng();
        let mut input = InputState::default();
        let mut last_score = 0;
        for frame in 0..3000 {
            input.fire_pressed = true;
            input.move_dir = if (frame / 90) % 2 == 0 { 1 } else { -1 };
            let state = game.update(&mut input, &mut rng);
            assert!(game.bullets.player_count() <= MAX_PLAYER_BULLETS);
            assert!(game.bullets.alien_count() <= MAX_ALIEN_BULLETS);
            assert!(game.bullets.len() <= BULLET_CAPACITY);
            let gained = game.score - last_score;
            assert!([0, 10, 20, 30, 40, 50, 60, 70, 80, 90].contains(&gained));
            last_score = game.score;
            if state != RoundState::Running {
                break;
            }
        }
        let dead = game.aliens.iter().filter(|a| !a.is_alive()).count() as u32;
        assert!(game.score >= dead * 10 && game.score <= dead * 30);
    }

    #[test]
    fn render_draws_every_visible_alien() {
        let game = new_game();
        let mut grid = GameGrid::new(GAME_WIDTH, GAME_HEIGHT);
        game.render(&mut grid);
        for alien in &game.aliens {
            let kind = alien.kind().unwrap();
            let sprite = kind.sprite();
            // Bottom-left pixel of the first frame of every kind is lit.
            assert_eq!(grid.pixel(alien.x, alien.y).is_some(), sprite.is_set(0, sprite.height - 1));
        }
        assert!(grid.labels().iter().any(|label| label.text == "SCORE"));
    }
}
