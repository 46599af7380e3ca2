use arcade_shooter::compute::init_state;
use arcade_shooter::entities::*;

#[test]
fn overlapping_rects_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(check_collision(&a, &b));
}

#[test]
fn distant_rects_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, 20.0, 10.0, 10.0);
    assert!(!a.overlaps(&b));
    assert!(!check_collision(&b, &a));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn contained_rect_collides() {
    let outer = Rect::new(0.0, 0.0, 50.0, 50.0);
    let inner = Rect::new(20.0, 20.0, 4.0, 10.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn entity_bounds() {
    let enemy = Enemy { x: 1.0, y: 2.0, size: 35.0, speed: 1.2 };
    assert_eq!(enemy.rect(), Rect::new(1.0, 2.0, 35.0, 35.0));

    let power_up = PowerUp { x: 3.0, y: 4.0, size: 20.0, speed: 2.0, kind: PowerUpKind::Triple };
    assert_eq!(power_up.rect(), Rect::new(3.0, 4.0, 20.0, 20.0));

    let projectile = Projectile { x: 5.0, y: 6.0, width: 4.0, height: 10.0 };
    assert_eq!(projectile.rect(), Rect::new(5.0, 6.0, 4.0, 10.0));
}

#[test]
fn power_up_labels() {
    assert_eq!(PowerUpKind::Triple.tag(), "triple");
    assert_eq!(PowerUpKind::Triple.achievement(), "Triple Shot!");
}

#[test]
fn default_rules_enable_both_effects() {
    let rules = Rules::default();
    assert!(rules.projectiles_destroy_enemies);
    assert!(rules.triple_shot_effect);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(800.0, 600.0, Rules::default(), 0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5.0, y: 5.0, size: 30.0, speed: 1.2 });
    cloned.achievements.push("Triple Shot!".to_string());

    assert_eq!(original.player.x, 400.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert!(original.achievements.is_empty());
}
