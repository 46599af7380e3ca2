//! Game logic.
//!
//! `tick` and the input-driven helpers take an immutable `GameState` and
//! return a new one. Side effects are limited to the injected RNG and the
//! surface being drawn on, so a seeded RNG and a `DrawList` make every tick
//! reproducible in tests.

use rand::Rng;
use tracing::{debug, info};

use crate::entities::{
    check_collision, Enemy, GameState, GameStatus, Player, PowerUp, PowerUpKind, Projectile, Rect,
    Rules,
};
use crate::input::InputSnapshot;
use crate::surface::{Color, Surface};

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;
pub const POINTS_PER_LEVEL: u32 = 1000;

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Distance from the player's top edge to the bottom of the play area.
pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
pub const SHOOT_COOLDOWN: i32 = 10;

pub const PROJECTILE_WIDTH: f32 = 4.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
pub const PROJECTILE_SPEED: f32 = 5.0;
/// Horizontal gap between the three triple-shot projectiles.
pub const TRIPLE_SHOT_SPREAD: f32 = 12.0;

pub const ENEMY_SPAWN_CHANCE: f64 = 0.03;
pub const ENEMY_MIN_SIZE: f32 = 30.0;
pub const ENEMY_MAX_SIZE: f32 = 50.0;
pub const ENEMY_KILL_SCORE: u32 = 100;

pub const POWER_UP_SPAWN_CHANCE: f64 = 0.01;
pub const POWER_UP_SIZE: f32 = 20.0;
pub const POWER_UP_SPEED: f32 = 2.0;
/// 10 seconds at 60 ticks per second.
pub const POWER_UP_DURATION: u32 = 600;

pub const HUD_FONT: &str = "18px Arial";

/// Base descent speed of an enemy spawned at `level`.
pub fn enemy_spawn_speed(level: u32) -> f32 {
    1.0 + level as f32 * 0.2
}

/// Extra per-tick descent applied to every enemy at `level`.
fn enemy_level_drift(level: u32) -> f32 {
    level as f32 * 0.1
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Build the initial session state for a play area of `width` × `height`.
pub fn init_state(width: f32, height: f32, rules: Rules, best_score: u32) -> GameState {
    GameState {
        player: Player {
            x: width / 2.0,
            y: height - PLAYER_BOTTOM_OFFSET,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            shoot_cooldown: 0,
        },
        projectiles: Vec::new(),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        achievements: Vec::new(),
        active_power_up: None,
        score: 0,
        lives: STARTING_LIVES,
        level: 1,
        best_score,
        status: GameStatus::Playing,
        rules,
        frame: 0,
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ─────────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.x > 0.0 {
        next.player.x -= next.player.speed;
    }
    next
}

/// `bound` is the right edge of the drawing surface.
pub fn move_player_right(state: &GameState, bound: f32) -> GameState {
    let mut next = state.clone();
    if next.player.x + next.player.width < bound {
        next.player.x += next.player.speed;
    }
    next
}

/// Fire if the cooldown allows it. Does not decrement the cooldown; that
/// happens once per tick whether or not the player fired.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.player.shoot_cooldown > 0 {
        return state.clone();
    }
    let mut next = state.clone();
    let centre = next.player.x + next.player.width / 2.0 - PROJECTILE_WIDTH / 2.0;
    let offsets: &[f32] = match next.active_power_up {
        Some((PowerUpKind::Triple, _)) if next.rules.triple_shot_effect => {
            &[-TRIPLE_SHOT_SPREAD, 0.0, TRIPLE_SHOT_SPREAD]
        }
        _ => &[0.0],
    };
    next.projectiles.extend(offsets.iter().map(|dx| Projectile {
        x: centre + dx,
        y: next.player.y,
        width: PROJECTILE_WIDTH,
        height: PROJECTILE_HEIGHT,
    }));
    next.player.shoot_cooldown = SHOOT_COOLDOWN;
    next
}

/// Flip between playing and paused. A finished game stays finished.
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        GameStatus::GameOver => return state.clone(),
    };
    info!(?status, frame = state.frame, "pause toggled");
    GameState {
        status,
        ..state.clone()
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// New enemy above the visible area at a random, in-bounds x.
pub fn spawn_enemy(width: f32, level: u32, rng: &mut impl Rng) -> Enemy {
    let size = rng.gen_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
    Enemy {
        x: random_x(width, size, rng),
        y: -size,
        size,
        speed: enemy_spawn_speed(level),
    }
}

pub fn spawn_power_up(width: f32, rng: &mut impl Rng) -> PowerUp {
    PowerUp {
        x: random_x(width, POWER_UP_SIZE, rng),
        y: -POWER_UP_SIZE,
        size: POWER_UP_SIZE,
        speed: POWER_UP_SPEED,
        kind: PowerUpKind::Triple,
    }
}

// Uniform in [0, width - size]; a play area narrower than the entity pins it at 0.
fn random_x(width: f32, size: f32, rng: &mut impl Rng) -> f32 {
    let max = (width - size).max(0.0);
    rng.gen_range(0.0..=max)
}

// ── Difficulty ────────────────────────────────────────────────────────────────

/// Level after one evaluation: rises by at most one step per call.
pub fn next_level(score: u32, level: u32) -> u32 {
    if score >= level.saturating_mul(POINTS_PER_LEVEL) {
        level + 1
    } else {
        level
    }
}

// ── Per-frame tick ────────────────────────────────────────────────────────────

/// Advance the simulation by one tick and draw the result on `surface`.
///
/// A state that is paused or over is returned unchanged and nothing is drawn.
pub fn tick(
    state: &GameState,
    input: &InputSnapshot,
    rng: &mut impl Rng,
    surface: &mut impl Surface,
) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }

    // ── 1. Clear ──────────────────────────────────────────────────────────────
    surface.clear();

    // ── 2. Movement ───────────────────────────────────────────────────────────
    let mut next = state.clone();
    next.frame += 1;
    if input.move_left {
        next = move_player_left(&next);
    }
    if input.move_right {
        let (bound, _) = surface.size();
        next = move_player_right(&next, bound);
    }

    // ── 3. Shooting ───────────────────────────────────────────────────────────
    if input.fire {
        next = player_shoot(&next);
    }
    next.player.shoot_cooldown -= 1;

    // ── 4-5. Spawning ─────────────────────────────────────────────────────────
    if rng.gen_bool(ENEMY_SPAWN_CHANCE) {
        next.enemies.push(spawn_enemy(next.width, next.level, rng));
    }
    if rng.gen_bool(POWER_UP_SPAWN_CHANCE) {
        next.power_ups.push(spawn_power_up(next.width, rng));
    }

    // ── 6. Projectiles ────────────────────────────────────────────────────────
    let mut projectiles: Vec<Projectile> = next
        .projectiles
        .iter()
        .filter_map(|p| {
            let y = p.y - PROJECTILE_SPEED;
            if y < 0.0 {
                None
            } else {
                Some(Projectile { y, ..p.clone() })
            }
        })
        .collect();
    for p in &projectiles {
        surface.fill_rect(Rect::new(p.x, p.y, p.width, p.height), Color::White);
    }

    // ── 7. Enemies ────────────────────────────────────────────────────────────
    let drift = enemy_level_drift(next.level);
    let mut enemies: Vec<Enemy> = Vec::with_capacity(next.enemies.len());
    for enemy in &next.enemies {
        let enemy = Enemy {
            y: enemy.y + enemy.speed + drift,
            ..enemy.clone()
        };
        if enemy.y > next.height {
            continue;
        }
        surface.fill_rect(Rect::new(enemy.x, enemy.y, enemy.size, enemy.size), Color::Red);

        // Once lives reach 0 the remaining enemies neither hit nor score.
        if next.status != GameStatus::Playing {
            enemies.push(enemy);
            continue;
        }

        if check_collision(&next.player, &enemy) {
            next.lives = next.lives.saturating_sub(1);
            debug!(lives = next.lives, "player hit");
            if next.lives == 0 {
                next.status = GameStatus::GameOver;
                info!(score = next.score, level = next.level, frame = next.frame, "game over");
            }
            continue;
        }

        if next.rules.projectiles_destroy_enemies {
            if let Some(hit) = projectiles.iter().position(|p| check_collision(p, &enemy)) {
                projectiles.remove(hit);
                next.score += ENEMY_KILL_SCORE;
                debug!(score = next.score, "enemy destroyed");
                continue;
            }
        }
        enemies.push(enemy);
    }

    // ── 8. Power-ups ──────────────────────────────────────────────────────────
    let mut power_ups: Vec<PowerUp> = Vec::with_capacity(next.power_ups.len());
    for power_up in &next.power_ups {
        let power_up = PowerUp {
            y: power_up.y + power_up.speed,
            ..power_up.clone()
        };
        if power_up.y > next.height {
            continue;
        }
        surface.fill_rect(
            Rect::new(power_up.x, power_up.y, power_up.size, power_up.size),
            Color::Blue,
        );
        if check_collision(&next.player, &power_up) {
            next.achievements.push(power_up.kind.achievement().to_string());
            if next.rules.triple_shot_effect {
                next.active_power_up = Some((power_up.kind, POWER_UP_DURATION));
            }
            debug!(kind = power_up.kind.tag(), "power-up collected");
            continue;
        }
        power_ups.push(power_up);
    }

    next.projectiles = projectiles;
    next.enemies = enemies;
    next.power_ups = power_ups;

    // ── 9. Player & power-up timer ────────────────────────────────────────────
    let p = &next.player;
    surface.fill_rect(Rect::new(p.x, p.y, p.width, p.height), Color::Green);

    next.active_power_up = match next.active_power_up {
        Some((kind, remaining)) if remaining > 1 => Some((kind, remaining - 1)),
        Some((kind, _)) => {
            debug!(kind = kind.tag(), "power-up expired");
            None
        }
        None => None,
    };

    // ── 10. Difficulty ────────────────────────────────────────────────────────
    let level = next_level(next.score, next.level);
    if level != next.level {
        debug!(level, score = next.score, "level up");
        next.level = level;
    }

    // ── 11. HUD ───────────────────────────────────────────────────────────────
    render_ui(&next, surface);

    next
}

/// Score, lives and level, plus the achievement log once it has entries.
pub fn render_ui(state: &GameState, surface: &mut impl Surface) {
    surface.draw_text(&format!("Score: {}", state.score), 10.0, 20.0, HUD_FONT);
    surface.draw_text(&format!("Lives: {}", state.lives), 10.0, 40.0, HUD_FONT);
    surface.draw_text(
        &format!("Level: {}", state.level),
        state.width - 100.0,
        20.0,
        HUD_FONT,
    );
    if !state.achievements.is_empty() {
        surface.draw_text(
            &format!("Achievements: {}", state.achievements.join(", ")),
            10.0,
            state.height - 20.0,
            HUD_FONT,
        );
    }
}
