//! End-to-end walks through a gate's life against an in-memory world.

use hinge::behavior::{
    Actor, BlockBehavior, Explosion, FenceGate, GateConfig, PlacementContext, DEFAULT_CLOSE_SOUND,
    DEFAULT_OPEN_SOUND,
};
use hinge::binding::{bind_models, BlockResource};
use hinge::core::{BlockPos, Direction, GateState, Terrain};
use hinge::variant::{variant_for, GateVariant};
use hinge::world::{EntityId, GameEvent, GridWorld, UpdateFlags};

const POS: BlockPos = BlockPos::new(3, 70, -8);
const PLAYER: EntityId = EntityId(100);

fn place(gate: &FenceGate, world: &GridWorld, facing: Direction) -> GateState {
    let ctx = PlacementContext {
        world,
        pos: POS,
        horizontal_direction: facing,
    };
    let default = gate.modify_default_state(GateState::default());
    gate.state_for_placement(default, &ctx)
}

fn wind_charge() -> Explosion {
    Explosion {
        can_trigger_blocks: true,
    }
}

#[test]
fn open_signal_and_explosion_walkthrough() {
    let gate = FenceGate::default();
    let mut world = GridWorld::new(2024);

    let placed = place(&gate, &world, Direction::North);
    assert_eq!(
        placed,
        GateState {
            facing: Direction::North,
            open: false,
            powered: false,
            in_wall: false,
        }
    );
    assert_eq!(variant_for(&placed), GateVariant::NorthSouthGate);
    world.insert_gate(POS, placed);

    let (opened, _) =
        gate.use_without_item(placed, &mut world, POS, &Actor::new(PLAYER, Direction::North));
    assert!(opened.open);
    assert!(!opened.powered);
    assert_eq!(world.sounds().len(), 1);
    assert_eq!(world.sounds()[0].sound, DEFAULT_OPEN_SOUND);
    assert_eq!(world.events()[0].event, GameEvent::BlockOpen);
    assert_eq!(world.events()[0].source, Some(PLAYER));
    world.clear_effects();

    world.set_signal(POS, true);
    let powered = gate.neighbor_changed(opened, &mut world, POS);
    assert!(powered.powered && powered.open);
    assert_eq!(world.commits().len(), 1);
    assert!(world.sounds().is_empty());
    assert!(world.events().is_empty());
    world.clear_effects();

    let blasted = gate.on_explosion_hit(powered, &mut world, POS, &wind_charge());
    assert_eq!(blasted, powered);
    assert!(world.commits().is_empty());

    world.set_signal(POS, false);
    let released = gate.neighbor_changed(powered, &mut world, POS);
    assert!(!released.powered && !released.open);
    assert_eq!(world.events()[0].event, GameEvent::BlockClose);
    assert_eq!(world.events()[0].source, None);
    world.clear_effects();

    let reopened = gate.on_explosion_hit(released, &mut world, POS, &wind_charge());
    assert!(reopened.open);
    let closed = gate.on_explosion_hit(reopened, &mut world, POS, &wind_charge());
    assert!(!closed.open);
    assert_eq!(world.sounds()[1].sound, DEFAULT_CLOSE_SOUND);
    assert_eq!(world.gate_state(POS), Some(closed));
}

#[test]
fn explosion_closes_unpowered_open_gate() {
    let gate = FenceGate::new(GateConfig {
        can_open_by_wind_charge: true,
        ..GateConfig::default()
    });
    let mut world = GridWorld::default();
    let state = GateState::new(Direction::West).with_open(true);

    let next = gate.on_explosion_hit(state, &mut world, POS, &wind_charge());

    assert!(!next.open);
    assert_eq!(world.sounds()[0].sound, DEFAULT_CLOSE_SOUND);
    assert_eq!(world.commits(), &[(POS, next, UpdateFlags::DEFAULT)]);
}

#[test]
fn approach_from_behind_snaps_facing_once() {
    let gate = FenceGate::default();
    let mut world = GridWorld::default();
    let state = place(&gate, &world, Direction::East);
    let walker = Actor::new(PLAYER, Direction::West);

    let (opened, _) = gate.use_without_item(state, &mut world, POS, &walker);
    assert_eq!(opened.facing, Direction::West);

    let (closed, _) = gate.use_without_item(opened, &mut world, POS, &walker);
    assert_eq!(closed.facing, Direction::West);
    assert!(!closed.open);
}

#[test]
fn wall_neighbors_follow_shape_updates() {
    let gate = FenceGate::default();
    let mut world = GridWorld::default();
    world.set_terrain(POS.north(), Terrain::Wall);

    let state = place(&gate, &world, Direction::East);
    assert!(state.in_wall);
    assert_eq!(variant_for(&state), GateVariant::EastWestInWallGate);

    world.set_terrain(POS.north(), Terrain::Empty);
    let state = gate.update_shape(state, &world, POS, Direction::North, Terrain::Empty);
    assert!(!state.in_wall);

    let state = gate.update_shape(state, &world, POS, Direction::East, Terrain::Wall);
    assert!(!state.in_wall);

    world.set_terrain(POS.south(), Terrain::Wall);
    let state = gate.update_shape(state, &world, POS, Direction::South, Terrain::Wall);
    assert!(state.in_wall);
}

#[test]
fn configured_models_bind_from_json() {
    let gate = FenceGate::new(
        GateConfig::from_json(r#"{ "open_sound": "mymod:gate.creak" }"#).unwrap(),
    );
    let resource = BlockResource::from_json(
        r#"{
            "models": {
                "facing=north,open=false": { "model": "mymod:block/gate" },
                "facing=north,open=true": { "model": "mymod:block/gate_open" },
                "facing=east,open=false,in_wall=true": { "model": "mymod:block/gate_wall", "y": 90 }
            }
        }"#,
    )
    .unwrap();

    let bindings = bind_models(&gate, "mymod:gate", &resource).unwrap();

    assert_eq!(bindings.len(), 3);
    let open = GateState::new(Direction::North).with_open(true);
    assert_eq!(
        bindings.get(&open).unwrap().variant,
        GateVariant::NorthSouthOpenGate
    );
    let walled = GateState::new(Direction::East).with_in_wall(true);
    let binding = bindings.get(&walled).unwrap();
    assert_eq!(binding.variant, GateVariant::EastWestInWallGate);
    assert_eq!(binding.model.y, 90);

    let mut world = GridWorld::default();
    gate.use_without_item(
        GateState::new(Direction::North),
        &mut world,
        POS,
        &Actor::new(PLAYER, Direction::North),
    );
    assert_eq!(world.sounds()[0].sound, "mymod:gate.creak");
}
