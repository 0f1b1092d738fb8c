use log::info;

use crate::entities::{Alien, AlienState, Bullet, BulletOwner, Player};

/// What a single bullet struck this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    Miss,
    Alien { index: usize, points: u32 },
    Player,
}

impl Impact {
    pub fn consumed(&self) -> bool {
        !matches!(self, Impact::Miss)
    }
}

/// Resolves one in-flight bullet against the formation and the player.
///
/// Player bullets kill at most one alien: the first living overlap in index
/// order. The dead alien is shifted so the explosion centres on its old sprite.
pub fn resolve_bullet(bullet: &Bullet, aliens: &mut [Alien], player: &mut Player, score: &mut u32) -> Impact {
    let bullet_rect = bullet.rect();
    match bullet.owner() {
        BulletOwner::Player => {
            for (index, alien) in aliens.iter_mut().enumerate() {
                let AlienState::Alive(kind) = alien.state else {
                    continue;
                };
                if !kind.sprite().rect(alien.x, alien.y).overlaps(&bullet_rect) {
                    continue;
                }
                let points = kind.points();
                *score += points;
                alien.state = AlienState::Dead;
                alien.x -= kind.death_offset();
                return Impact::Alien { index, points };
            }
            Impact::Miss
        }
        BulletOwner::Alien => {
            if player.life > 0 && player.rect().overlaps(&bullet_rect) {
                player.life -= 1;
                info!("Player hit, {} lives left", player.life);
                Impact::Player
            } else {
                Impact::Miss
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::entities::AlienKind;
    use crate::formation::spawn_formation;

    #[test]
    fn player_bullet_kills_type_c_for_ten() {
        let mut aliens = vec![Alien::new(50, 100, AlienKind::C)];
        let mut player = Player::new();
        let mut score = 0;
        let bullet = Bullet::new(50, 100, PLAYER_BULLET_SPEED);

        let impact = resolve_bullet(&bullet, &mut aliens, &mut player, &mut score);
        assert_eq!(impact, Impact::Alien { index: 0, points: 10 });
        assert_eq!(score, 10);
        assert_eq!(aliens[0].state, AlienState::Dead);
        assert_eq!(aliens[0].x, 50);
    }

    #[test]
    fn type_a_kill_scores_thirty_and_recentres() {
        let mut aliens = vec![Alien::new(50, 100, AlienKind::A)];
        let mut player = Player::new();
        let mut score = 5;
        let bullet = Bullet::new(53, 98, PLAYER_BULLET_SPEED);

        assert!(resolve_bullet(&bullet, &mut aliens, &mut player, &mut score).consumed());
        assert_eq!(score, 35);
        assert_eq!(aliens[0].x, 48);
    }

    #[test]
    fn one_bullet_kills_one_alien() {
        let mut aliens = vec![Alien::new(50, 100, AlienKind::B), Alien::new(52, 101, AlienKind::C)];
        let mut player = Player::new();
        let mut score = 0;
        let bullet = Bullet::new(55, 100, PLAYER_BULLET_SPEED);

        let impact = resolve_bullet(&bullet, &mut aliens, &mut player, &mut score);
        assert_eq!(impact, Impact::Alien { index: 0, points: 20 });
        assert!(aliens[1].is_alive());
        assert_eq!(score, 20);
    }

    #[test]
    fn dead_aliens_are_transparent() {
        let mut aliens = vec![Alien::new(50, 100, AlienKind::C)];
        aliens[0].state = AlienState::Dead;
        let mut player = Player::new();
        let mut score = 0;
        let bullet = Bullet::new(55, 100, PLAYER_BULLET_SPEED);

        assert_eq!(resolve_bullet(&bullet, &mut aliens, &mut player, &mut score), Impact::Miss);
        assert_eq!(score, 0);
    }

    #[test]
    fn touching_edge_is_a_miss() {
        let mut aliens = vec![Alien::new(50, 100, AlienKind::C)];
        let mut player = Player::new();
        let mut score = 0;
        // Bullet top edge ends exactly at the alien's bottom edge.
        let bullet = Bullet::new(55, 97, PLAYER_BULLET_SPEED);
        assert_eq!(resolve_bullet(&bullet, &mut aliens, &mut player, &mut score), Impact::Miss);
    }

    #[test]
    fn alien_bullet_costs_a_life() {
        let mut aliens = spawn_formation();
        let mut player = Player::new();
        let mut score = 0;
        let bullet = Bullet::new(player.x + 4, player.y + 1, ALIEN_BULLET_SPEED);

        assert_eq!(resolve_bullet(&bullet, &mut aliens, &mut player, &mut score), Impact::Player);
        assert_eq!(player.life, PLAYER_LIVES - 1);
        assert!(aliens.iter().all(Alien::is_alive));
    }

    #[test]
    fn alien_bullet_ignores_aliens() {
        let mut aliens = vec![Alien::new(50, 100, AlienKind::C)];
        let mut player = Player::new();
        let mut score = 0;
        let bullet = Bullet::new(55, 100, ALIEN_BULLET_SPEED);
        assert_eq!(resolve_bullet(&bullet, &mut aliens, &mut player, &mut score), Impact::Miss);
        assert!(aliens[0].is_alive());
    }
}
