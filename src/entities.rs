//! All game entity types, pure data with no logic beyond geometry.
//!
//! Coordinates are logical play-area units (floats). The origin is the top-left
//! corner and y grows downwards, so "descending" means increasing y.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle used for drawing and collision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Anything with a bounding box.
pub trait Bounds {
    fn rect(&self) -> Rect;
}

/// Collision predicate shared by every entity pair.
pub fn check_collision(a: &impl Bounds, b: &impl Bounds) -> bool {
    a.rect().overlaps(&b.rect())
}

impl Bounds for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

// ── Enums ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Three parallel projectiles per shot while active.
    Triple,
}

impl PowerUpKind {
    /// Tag used in logs.
    pub fn tag(&self) -> &'static str {
        match self {
            PowerUpKind::Triple => "triple",
        }
    }

    /// Achievement label granted on pickup.
    pub fn achievement(&self) -> &'static str {
        match self {
            PowerUpKind::Triple => "Triple Shot!",
        }
    }
}

/// Gameplay switches chosen at session start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Projectiles destroy the enemies they overlap and award points.
    pub projectiles_destroy_enemies: bool,
    /// Collecting a triple power-up actually changes shooting.
    pub triple_shot_effect: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            projectiles_destroy_enemies: true,
            triple_shot_effect: true,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Ticks until the next shot is allowed. Keeps counting down past zero;
    /// only `<= 0` matters.
    pub shoot_cooldown: i32,
}

// ── Projectiles, enemies, power-ups ───────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Enemies are square; this is both width and height.
    pub size: f32,
    /// Base descent speed, fixed at spawn from the level at that time.
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub kind: PowerUpKind,
}

impl Bounds for Player {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounds for Projectile {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Bounds for Enemy {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

impl Bounds for PowerUp {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One session's entire state. Cloneable so `tick` can hand back a fresh
/// value without touching the caller's copy.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Spawn order is preserved.
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Append-only for the whole session.
    pub achievements: Vec<String>,
    /// Active power-up and the number of ticks remaining, if any.
    pub active_power_up: Option<(PowerUpKind, u32)>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    /// Best score loaded at session start; shown in menus, never changed by ticks.
    pub best_score: u32,
    pub status: GameStatus,
    pub rules: Rules,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
