//! Fixed-step physics tick
//!
//! One call advances the player by one tick. Horizontal and vertical motion
//! are resolved separately, horizontal first; a blocked axis keeps its old
//! position and zeroes its velocity (no sliding into contact).

use glam::Vec2;

use super::collision::is_blocked;
use super::grid::TileGrid;
use super::input::InputState;
use super::player::PlayerBody;
use super::state::World;
use crate::settings::PhysicsParams;

/// What happened to the body during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Jump impulse applied this tick
    pub jumped: bool,
    /// Downward move blocked by the floor this tick
    pub landed: bool,
    /// Upward move blocked by a ceiling
    pub hit_ceiling: bool,
    /// Horizontal move blocked by a wall
    pub hit_wall: bool,
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &InputState) -> StepEvents {
    world.time_ticks += 1;
    let events = step_player(&world.grid, &mut world.player, input, &world.physics);

    if events.jumped {
        log::debug!("tick {}: jump", world.time_ticks);
    }
    if events.landed {
        log::trace!("tick {}: grounded at y={}", world.time_ticks, world.player.pos.y);
    }

    events
}

/// Move one body against the grid for one tick
pub fn step_player(
    grid: &TileGrid,
    player: &mut PlayerBody,
    input: &InputState,
    params: &PhysicsParams,
) -> StepEvents {
    let mut events = StepEvents::default();
    let ts = params.tile_size;

    // Horizontal. Right is evaluated after left, so holding both moves right.
    if input.move_left {
        player.vel.x = -params.movement_speed;
    }
    if input.move_right {
        player.vel.x = params.movement_speed;
    }

    player.vel.x *= if player.grounded {
        params.friction
    } else {
        params.air_resistance
    };

    let next = Vec2::new(player.pos.x + player.vel.x, player.pos.y);
    if !is_blocked(grid, &player.aabb_at(next), ts) {
        player.pos = next;
    } else {
        player.vel.x = 0.0;
        events.hit_wall = true;
    }

    // Vertical. Gravity applies even when grounded; the floor check below
    // cancels it again.
    player.vel.y += params.gravity;

    if input.jump && player.grounded {
        player.vel.y = params.jump_force;
        player.grounded = false;
        events.jumped = true;
    }

    let next = Vec2::new(player.pos.x, player.pos.y + player.vel.y);
    if !is_blocked(grid, &player.aabb_at(next), ts) {
        player.pos = next;
        player.grounded = false;
    } else {
        let falling = player.vel.y >= 0.0;
        player.vel.y = 0.0;
        player.grounded = falling;
        events.landed = falling;
        events.hit_ceiling = !falling;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::input::Action;
    use crate::sim::tile::Tile;

    /// 10x10 grid: air everywhere except a grass floor on row 5
    fn floor_grid() -> TileGrid {
        TileGrid::from_fn(10, 10, |_, y| if y == 5 { Tile::Grass } else { Tile::Air }).unwrap()
    }

    /// Body whose feet sit exactly `gap` units above the row-5 floor
    fn body_above_floor(gap: f32) -> PlayerBody {
        let size = PlayerBody::default_size(TILE_SIZE);
        let y = 5.0 * TILE_SIZE - size.y - gap;
        PlayerBody::new(Vec2::new(3.0 * TILE_SIZE + 4.0, y), size, TILE_SIZE)
    }

    fn params() -> PhysicsParams {
        PhysicsParams::default()
    }

    /// 12x8 walled room: stone floor on row 6, side walls at x = 0 and
    /// x = 11, and a low stone ceiling on row 2 over x = 5..=10
    fn arena() -> TileGrid {
        TileGrid::from_fn(12, 8, |x, y| {
            if y == 6 || x == 0 || x == 11 || (y == 2 && (5..=10).contains(&x)) {
                Tile::Stone
            } else {
                Tile::Air
            }
        })
        .unwrap()
    }

    /// Grounded body standing on the arena floor at `x`
    fn body_on_arena_floor(x: f32) -> PlayerBody {
        let size = PlayerBody::default_size(TILE_SIZE);
        let mut body = PlayerBody::new(Vec2::new(x, 6.0 * TILE_SIZE - size.y - 0.5), size, TILE_SIZE);
        body.grounded = true;
        body
    }

    #[test]
    fn gravity_accumulates_in_free_fall() {
        let grid = TileGrid::filled(10, 10, Tile::Air).unwrap();
        let mut body = PlayerBody::new(Vec2::new(100.0, 10.0), PlayerBody::default_size(TILE_SIZE), TILE_SIZE);

        step_player(&grid, &mut body, &InputState::default(), &params());
        assert!((body.vel.y - GRAVITY).abs() < 1e-6);
        assert!((body.pos.y - (10.0 + GRAVITY)).abs() < 1e-5);
        assert!(!body.grounded);

        step_player(&grid, &mut body, &InputState::default(), &params());
        assert!((body.vel.y - 2.0 * GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn landing_on_grass_grounds_and_stops() {
        let grid = floor_grid();
        // Resting exactly on the floor boundary: any downward move touches row 5
        let mut body = body_above_floor(0.5);
        let start_y = body.pos.y;

        let events = step_player(&grid, &mut body, &InputState::default(), &params());
        assert!(events.landed);
        assert!(body.grounded);
        assert_eq!(body.vel.y, 0.0);
        assert_eq!(body.pos.y, start_y);
    }

    #[test]
    fn jump_from_ground_sets_jump_force() {
        let grid = floor_grid();
        let mut body = body_above_floor(0.5);
        body.grounded = true;

        let events = step_player(&grid, &mut body, &InputState::with(&[Action::Jump]), &params());
        assert!(events.jumped);
        assert_eq!(body.vel.y, JUMP_FORCE);
        assert!(!body.grounded);
        assert!(body.pos.y < 5.0 * TILE_SIZE - body.size().y);
    }

    #[test]
    fn no_jump_while_airborne() {
        let grid = TileGrid::filled(10, 10, Tile::Air).unwrap();
        let mut body = PlayerBody::new(Vec2::new(100.0, 100.0), PlayerBody::default_size(TILE_SIZE), TILE_SIZE);
        body.vel.y = -3.0;

        let events = step_player(&grid, &mut body, &InputState::with(&[Action::Jump]), &params());
        assert!(!events.jumped);
        assert!((body.vel.y - (-3.0 + GRAVITY)).abs() < 1e-6);
        assert_ne!(body.vel.y, JUMP_FORCE);
    }

    #[test]
    fn ceiling_hit_does_not_ground() {
        // Solid row 0, body just beneath it moving up fast
        let grid = TileGrid::from_fn(10, 10, |_, y| if y == 0 { Tile::Stone } else { Tile::Air }).unwrap();
        let mut body = PlayerBody::new(
            Vec2::new(100.0, TILE_SIZE + 2.0),
            PlayerBody::default_size(TILE_SIZE),
            TILE_SIZE,
        );
        body.vel.y = -10.0;

        let events = step_player(&grid, &mut body, &InputState::default(), &params());
        assert!(events.hit_ceiling);
        assert!(!body.grounded);
        assert_eq!(body.vel.y, 0.0);
        assert_eq!(body.pos.y, TILE_SIZE + 2.0);
    }

    #[test]
    fn move_right_wins_when_both_held() {
        let grid = TileGrid::filled(10, 10, Tile::Air).unwrap();
        let mut body = PlayerBody::new(Vec2::new(100.0, 100.0), PlayerBody::default_size(TILE_SIZE), TILE_SIZE);

        let both = InputState::with(&[Action::MoveLeft, Action::MoveRight]);
        step_player(&grid, &mut body, &both, &params());
        assert!((body.vel.x - MOVEMENT_SPEED * AIR_RESISTANCE).abs() < 1e-5);
        assert!(body.pos.x > 100.0);
    }

    #[test]
    fn damping_is_stronger_on_the_ground() {
        let grid = floor_grid();
        let right = InputState::with(&[Action::MoveRight]);

        let mut grounded = body_above_floor(0.5);
        grounded.grounded = true;
        step_player(&grid, &mut grounded, &right, &params());
        assert!((grounded.vel.x - MOVEMENT_SPEED * FRICTION).abs() < 1e-5);

        let mut airborne = body_above_floor(20.0);
        step_player(&grid, &mut airborne, &right, &params());
        assert!((airborne.vel.x - MOVEMENT_SPEED * AIR_RESISTANCE).abs() < 1e-5);
    }

    #[test]
    fn wall_blocks_without_sliding() {
        // Stone column at x = 5
        let grid = TileGrid::from_fn(10, 10, |x, _| if x == 5 { Tile::Stone } else { Tile::Air }).unwrap();
        let size = PlayerBody::default_size(TILE_SIZE);
        // right edge 2 units short of the wall
        let start_x = 5.0 * TILE_SIZE - size.x - 2.0;
        let mut body = PlayerBody::new(Vec2::new(start_x, 100.0), size, TILE_SIZE);

        let events = step_player(&grid, &mut body, &InputState::with(&[Action::MoveRight]), &params());
        assert!(events.hit_wall);
        assert_eq!(body.vel.x, 0.0);
        assert_eq!(body.pos.x, start_x);
    }

    #[test]
    fn friction_brings_grounded_body_to_rest() {
        let grid = floor_grid();
        let mut body = body_above_floor(0.5);
        body.grounded = true;
        body.vel.x = MOVEMENT_SPEED;

        for _ in 0..40 {
            step_player(&grid, &mut body, &InputState::default(), &params());
            assert!(body.grounded);
        }
        // 5 * 0.7^40 is far below any visible motion
        assert!(body.vel.x.abs() < 1e-4);
    }

    #[test]
    fn tick_counts_and_uses_world_physics() {
        let mut world = World::new(&Settings::seeded(5)).unwrap();
        tick(&mut world, &InputState::default());
        tick(&mut world, &InputState::default());
        assert_eq!(world.time_ticks, 2);
    }

    #[test]
    fn falls_off_the_world_edge_without_panicking() {
        let grid = floor_grid();
        let mut body = body_above_floor(0.5);
        body.grounded = true;
        let left = InputState::with(&[Action::MoveLeft]);
        for _ in 0..500 {
            step_player(&grid, &mut body, &left, &params());
        }
        assert!(body.pos.x < 0.0);
        assert!(body.pos.y > 10.0 * TILE_SIZE);
    }

    #[test]
    fn jump_under_low_ceiling_bumps_head_and_stops() {
        let grid = arena();
        let mut body = body_on_arena_floor(6.0 * TILE_SIZE + 4.0);
        let jump = InputState::with(&[Action::Jump]);

        let bump = (1..=10).find_map(|n| {
            let events = step_player(&grid, &mut body, &jump, &params());
            events.hit_ceiling.then_some(n)
        });
        assert_eq!(bump, Some(6));
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.grounded);
        // stopped one move short of row 2 (bottom edge y = 80..120)
        assert!(body.pos.y >= 3.0 * TILE_SIZE - 1e-3);
        assert!(!is_blocked(&grid, &body.aabb(), TILE_SIZE));

        // falls back and lands on the floor again
        let landed = (0..60).any(|_| step_player(&grid, &mut body, &InputState::default(), &params()).landed);
        assert!(landed);
        assert!(body.grounded);
    }

    fn arb_input() -> impl Strategy<Value = InputState> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(move_left, move_right, jump)| {
            InputState {
                move_left,
                move_right,
                jump,
            }
        })
    }

    proptest! {
        #[test]
        fn body_never_ends_a_tick_inside_terrain(
            seed in 0u64..1000,
            inputs in proptest::collection::vec(arb_input(), 1..200),
        ) {
            let mut world = World::new(&Settings::seeded(seed)).unwrap();
            let ts = world.physics.tile_size;
            prop_assert!(!is_blocked(&world.grid, &world.player.aabb(), ts));

            for input in &inputs {
                tick(&mut world, input);
                prop_assert!(!is_blocked(&world.grid, &world.player.aabb(), ts));
            }
        }

        #[test]
        fn grounded_body_stays_out_of_walls_floor_and_ceiling(
            start_x in (TILE_SIZE + 1.0)..(10.0 * TILE_SIZE),
            inputs in proptest::collection::vec(arb_input(), 1..300),
        ) {
            let grid = arena();
            let params = params();
            let mut body = body_on_arena_floor(start_x);
            prop_assert!(!is_blocked(&grid, &body.aabb(), TILE_SIZE));

            for input in &inputs {
                let events = step_player(&grid, &mut body, input, &params);
                prop_assert!(!is_blocked(&grid, &body.aabb(), TILE_SIZE));
                if events.landed || events.hit_ceiling {
                    prop_assert_eq!(body.vel.y, 0.0);
                }
                if events.hit_wall {
                    prop_assert_eq!(body.vel.x, 0.0);
                }
                prop_assert_eq!(events.landed, body.grounded);
                // walls and floor keep the body inside the room
                prop_assert!(body.pos.x >= TILE_SIZE && body.aabb().right <= 11.0 * TILE_SIZE);
                prop_assert!(body.aabb().bottom <= 6.0 * TILE_SIZE);
            }
        }
    }
}
