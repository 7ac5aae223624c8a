//! Multi-tick scenarios driving bodies through `update()` against fixture levels.

use glam::{IVec2, Vec2};

use crate::api::types::{Direction, Facing};
use crate::body::BodyDesc;
use crate::config::{PhysicsConfig, GRAVITY, INVULN_LENGTH, PUNCHER_UP_VEL, PUNCHER_X_VEL};
use crate::level::TileGrid;
use crate::renderer::camera::PixelCamera;
use crate::renderer::instance::{DebugSurface, MAGENTA};
use crate::systems::debug::debug_draw_bodies;
use crate::systems::effects::BounceEffects;

/// 12x12 grid of 20px tiles with a floor at row 10 (y = 200).
fn floor_room() -> TileGrid {
    TileGrid::from_ascii(
        &[
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "############",
            "############",
        ],
        20,
        20,
    )
}

#[test]
fn gravity_body_settles_on_floor() {
    let level = floor_room();
    let mut effects = BounceEffects::new(1);
    // One pixel of air between the body's bottom row (198) and the floor (200).
    let mut body = BodyDesc::gravity(20, 20, 10.0)
        .with_position(IVec2::new(40, 179))
        .build();
    assert!(!body.grounded(&level));

    body.update(&level, &mut effects);
    assert_eq!(body.velocity().y, GRAVITY);

    // Second tick closes the gap, third tick's sweep hits the floor and stops.
    body.update(&level, &mut effects);
    body.update(&level, &mut effects);
    assert_eq!(body.gridbox().bottom(), 200);
    assert_eq!(body.velocity().y, 0.0);
    assert_eq!(body.acceleration().y, 0.0);
    assert!(body.grounded(&level));

    for _ in 0..20 {
        body.update(&level, &mut effects);
    }
    assert_eq!(body.pos(), IVec2::new(40, 180));
    assert!(body.grounded(&level));
}

#[test]
fn falling_body_never_tunnels_or_exceeds_terminal_velocity() {
    let level = floor_room();
    let mut effects = BounceEffects::new(1);
    let mut body = BodyDesc::gravity(20, 20, 10.0).build();
    for _ in 0..120 {
        body.update(&level, &mut effects);
        assert!(body.velocity().y <= 10.0);
        assert!(body.gridbox().bottom() <= 200);
    }
    assert_eq!(body.y(), 180);
    assert!(body.grounded(&level));
}

#[test]
fn fast_body_stops_at_wall_boundary() {
    let mut rows = vec!["     #"; 12];
    rows[11] = "";
    let level = TileGrid::from_ascii(&rows, 20, 20);
    let mut effects = BounceEffects::new(1);

    for check_steps in [4, 8] {
        let config = PhysicsConfig {
            check_steps,
            ..PhysicsConfig::default()
        };
        for speed in [30.0, 50.0, 80.0, 120.0] {
            let mut body = BodyDesc::new(20, 20)
                .with_position(IVec2::new(60, 100))
                .with_config(config)
                .build();
            body.set_x_vel(speed);
            body.update(&level, &mut effects);
            assert_eq!(
                body.gridbox().right(),
                100,
                "speed {} steps {}",
                speed,
                check_steps
            );
            assert_eq!(body.velocity().x, 0.0);
            assert_eq!(body.facing_x(), Facing::None);
        }
    }
}

#[test]
fn wall_snap_clears_launch_velocity() {
    let mut rows = vec!["     #"; 12];
    rows[11] = "";
    let level = TileGrid::from_ascii(&rows, 20, 20);
    let mut effects = BounceEffects::new(1);
    let mut body = BodyDesc::punchable(20, 20, 10.0)
        .with_position(IVec2::new(60, 100))
        .with_ignore_gravity(true)
        .build();
    body.activate_punch_zone(0, 0, Direction::Right, &mut effects);
    body.set_x_vel(30.0);
    assert_eq!(body.predict_next_x(), 60.0 + 30.0 + PUNCHER_X_VEL);

    body.update(&level, &mut effects);
    assert_eq!(body.x(), 80);
    assert_eq!(body.velocity().x, 0.0);
    assert_eq!(body.acceleration().x, 0.0);
    assert_eq!(body.facing_x(), Facing::None);
    assert_eq!(body.launch_x_vel(), 0.0);
}

#[test]
fn right_pad_launch_and_immunity() {
    let mut level = TileGrid::new(12, 12, 20, 20);
    level.set(5, 5, Some(crate::level::Tile::PunchZone { direction: Direction::Right }));
    let mut effects = BounceEffects::new(7);
    let mut body = BodyDesc::punchable(10, 10, 10.0)
        .with_position(IVec2::new(100, 100))
        .with_ignore_gravity(true)
        .build();
    body.set_x_vel(-3.0);

    body.update(&level, &mut effects);
    assert_eq!(body.x(), 97);
    assert_eq!(body.velocity().x, 0.0);
    assert_eq!(body.launch_x_vel(), PUNCHER_X_VEL);
    assert_eq!(body.invuln_frames(), INVULN_LENGTH);
    assert_eq!(effects.bounces.len(), 1);
    assert_eq!(effects.bounces[0].direction, Direction::Right);
    assert!(effects.bounce_at(5, 5).is_some());
    assert_eq!(effects.drain_sounds().len(), 1);

    // Still centered on the pad, but immune: only the counter moves.
    body.update(&level, &mut effects);
    assert_eq!(body.x(), 102);
    assert_eq!(body.velocity().x, 0.0);
    assert_eq!(body.launch_x_vel(), PUNCHER_X_VEL);
    assert_eq!(body.invuln_frames(), INVULN_LENGTH - 1);

    let mut frames = Vec::new();
    for _ in 0..5 {
        body.update(&level, &mut effects);
        frames.push(body.invuln_frames());
    }
    assert_eq!(frames, vec![3, 2, 1, 0, 0]);
    assert!(effects.drain_sounds().is_empty());
}

#[test]
fn launch_decays_only_while_grounded() {
    let level = TileGrid::from_ascii(
        &["", "", "", "", "", "  >", "############"],
        20,
        20,
    );
    let mut effects = BounceEffects::new(3);
    let mut body = BodyDesc::punchable(10, 10, 10.0)
        .with_position(IVec2::new(45, 110))
        .build();

    body.update(&level, &mut effects);
    assert_eq!(body.launch_x_vel(), PUNCHER_X_VEL);
    assert_eq!(body.x(), 45);

    let mut launches = Vec::new();
    let mut last_x = body.x();
    for _ in 0..11 {
        body.update(&level, &mut effects);
        launches.push(body.launch_x_vel());
        assert!(body.x() >= last_x);
        last_x = body.x();
        assert!(body.grounded(&level));
    }
    assert_eq!(
        launches,
        vec![4.5, 4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0, 0.5, 0.0, 0.0]
    );
    assert_eq!(body.x(), 65);
}

#[test]
fn airborne_launch_keeps_its_speed() {
    let level = TileGrid::new(4, 4, 20, 20);
    let mut body = BodyDesc::punchable(10, 10, 10.0)
        .with_ignore_gravity(true)
        .build();
    body.activate_punch_zone(0, 0, Direction::Left, &mut ());
    for _ in 0..6 {
        body.update(&level, &mut ());
    }
    assert_eq!(body.launch_x_vel(), -PUNCHER_X_VEL);
    assert_eq!(body.x(), -30);
}

#[test]
fn standing_on_up_pad_rim_launches() {
    let level = TileGrid::from_ascii(
        &["", "", "", "", "", "     ^", "############"],
        20,
        20,
    );
    let mut effects = BounceEffects::new(5);
    // Center column 4, right probe in column 5.
    let mut body = BodyDesc::punchable(10, 10, 10.0)
        .with_position(IVec2::new(94, 110))
        .build();

    body.update(&level, &mut effects);
    assert_eq!(body.velocity().y, -PUNCHER_UP_VEL);
    assert!(effects.bounce_at(5, 5).is_some());

    body.update(&level, &mut effects);
    assert!(!body.grounded(&level));
    assert_eq!(body.velocity().y, -PUNCHER_UP_VEL + GRAVITY);
    assert_eq!(body.y(), 98);
}

#[test]
fn json_config_drives_bodies() {
    let config = PhysicsConfig::from_json(r#"{ "gravity": 1.0, "puncher_x_vel": 8.0 }"#)
        .unwrap_or_default();
    let level = TileGrid::new(4, 4, 20, 20);
    let mut body = BodyDesc::punchable(10, 10, 100.0)
        .with_config(config)
        .build();
    body.update(&level, &mut ());
    body.update(&level, &mut ());
    assert_eq!(body.velocity(), Vec2::new(0.0, 2.0));

    body.activate_punch_zone(0, 0, Direction::Right, &mut ());
    assert_eq!(body.launch_x_vel(), 8.0);
    assert_eq!(body.invuln_frames(), INVULN_LENGTH);
}

#[test]
fn frame_debug_view() {
    let level = TileGrid::from_ascii(&["", "", "", "", "", "  v", "############"], 20, 20);
    let mut effects = BounceEffects::new(11);
    let mut bodies = vec![
        BodyDesc::punchable(10, 10, 10.0)
            .with_position(IVec2::new(45, 100))
            .with_extend(2, 2)
            .build(),
        BodyDesc::gravity(10, 10, 10.0)
            .with_position(IVec2::new(150, 110))
            .build(),
    ];
    for body in &mut bodies {
        body.update(&level, &mut effects);
    }
    effects.tick();

    let mut cam = PixelCamera::new(240, 140);
    cam.look_at(IVec2::new(120, 70));
    let mut surface = DebugSurface::new();
    debug_draw_bodies(&bodies, &mut surface, &cam);
    effects.draw_default(&mut surface, &cam, &level);

    assert_eq!(surface.len(), 5);
    assert_eq!(surface.rects[4].color, MAGENTA);
    assert_eq!(surface.as_floats().len(), 5 * 8);
}
