use dohyo_core::{
    BlockReason, CellCoord, Command, Direction, Event, Object, OreLetter, PuzzleLayout, Tile,
};
use dohyo_world::{self as world, query, World};

fn world_from(rows: &[&str]) -> World {
    let tiles = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(Tile::from_symbol)
        .collect();
    let layout = PuzzleLayout::new(rows.len() as u32, 1, tiles).expect("valid layout");
    World::from_layout(&layout)
}

fn letter(symbol: char) -> OreLetter {
    OreLetter::new(symbol).expect("lowercase letter")
}

fn ore(symbol: char) -> Object {
    Object::Ore {
        letter: letter(symbol),
    }
}

fn run(world: &mut World, commands: &[Command]) -> Vec<Event> {
    let mut events = Vec::new();
    for command in commands {
        world::apply(world, *command, &mut events);
    }
    events
}

#[test]
fn step_moves_player_onto_objects_and_holes() {
    let mut world = world_from(&["A@.", "...", "..."]);
    let before = query::board(&world).clone();

    let _ = run(
        &mut world,
        &[Command::step(Direction::Right), Command::step(Direction::Right)],
    );
    assert_eq!(query::player(&world), CellCoord::new(0, 2));

    let _ = run(&mut world, &[Command::step(Direction::Left)]);
    assert_eq!(
        query::player(&world),
        CellCoord::new(0, 1),
        "player may stand on a rock"
    );
    assert_eq!(query::board(&world), &before, "step never touches the board");
}

#[test]
fn step_never_leaves_the_board() {
    let mut world = world_from(&["A.", ".."]);
    let before = world.clone();

    for direction in [Direction::Up, Direction::Left] {
        let events = run(&mut world, &[Command::step(direction)]);
        assert_eq!(
            events,
            vec![Event::MoveBlocked {
                command: Command::step(direction),
                reason: BlockReason::OutOfBounds,
            }]
        );
    }
    assert_eq!(world, before);

    for direction in Direction::ALL {
        for _ in 0..4 {
            let _ = run(&mut world, &[Command::step(direction)]);
            assert!(query::player(&world).is_within(2));
        }
    }
}

#[test]
fn carry_with_empty_source_changes_nothing() {
    let mut world = world_from(&["A..", ".a.", "..."]);
    let before = world.clone();

    for direction in Direction::ALL {
        let events = run(&mut world, &[Command::carry(direction)]);
        assert!(matches!(
            events.as_slice(),
            [Event::MoveBlocked {
                reason: BlockReason::NoObject,
                ..
            }]
        ));
    }
    assert_eq!(world, before);
}

#[test]
fn carry_moves_object_and_player_together() {
    let mut world = world_from(&["A..", ".a.", "..."]);
    let _ = run(
        &mut world,
        &[Command::step(Direction::Down), Command::step(Direction::Right)],
    );

    let events = run(&mut world, &[Command::carry(Direction::Right)]);

    assert_eq!(query::player(&world), CellCoord::new(1, 2));
    assert_eq!(query::board(&world).object_at(CellCoord::new(1, 1)), None);
    assert_eq!(
        query::board(&world).object_at(CellCoord::new(1, 2)),
        Some(ore('a'))
    );
    assert_eq!(
        events,
        vec![
            Event::ObjectMoved {
                object: ore('a'),
                from: CellCoord::new(1, 1),
                to: CellCoord::new(1, 2),
            },
            Event::PlayerMoved {
                from: CellCoord::new(1, 1),
                to: CellCoord::new(1, 2),
            },
        ]
    );
}

#[test]
fn carry_aborts_at_edge_and_against_objects() {
    let mut world = world_from(&["a@", "A."]);
    let _ = run(&mut world, &[Command::step(Direction::Up)]);
    let before = world.clone();

    let edge = run(&mut world, &[Command::carry(Direction::Left)]);
    let blocked = run(&mut world, &[Command::carry(Direction::Right)]);

    assert_eq!(world, before, "aborted carries leave the object at its source");
    assert!(matches!(
        edge.as_slice(),
        [Event::MoveBlocked {
            reason: BlockReason::OutOfBounds,
            ..
        }]
    ));
    assert!(matches!(
        blocked.as_slice(),
        [Event::MoveBlocked {
            reason: BlockReason::Occupied,
            ..
        }]
    ));
}

#[test]
fn carry_into_matching_hole_scores_and_moves_player() {
    let mut world = world_from(&["Aa.", "...", "..."]);
    let _ = run(&mut world, &[Command::step(Direction::Right)]);

    let _ = run(&mut world, &[Command::carry(Direction::Left)]);

    assert_eq!(query::player(&world), CellCoord::new(0, 0));
    assert_eq!(query::fallen_counts(&world).get(letter('a')), 1);
    assert_eq!(query::board(&world).object_count(), 0);
    assert!(!query::board(&world).is_occupied(CellCoord::new(0, 0)));
}

#[test]
fn carry_into_other_hole_removes_without_scoring() {
    let mut world = world_from(&["Aa.", "..B", "..."]);
    let _ = run(
        &mut world,
        &[
            Command::step(Direction::Right),
            Command::carry(Direction::Right),
        ],
    );

    let events = run(&mut world, &[Command::carry(Direction::Down)]);

    assert_eq!(query::placed_ore(&world), 0);
    assert_eq!(query::board(&world).object_count(), 0);
    assert_eq!(query::player(&world), CellCoord::new(1, 2));
    assert!(events.contains(&Event::ObjectFell {
        object: ore('a'),
        hole: 'B'.try_into().expect("label"),
        cell: CellCoord::new(1, 2),
        scored: false,
    }));
}

#[test]
fn roll_travels_to_last_free_cell_before_edge() {
    let mut world = world_from(&["....", "a...", "....", "...A"]);
    let _ = run(
        &mut world,
        &[
            Command::step(Direction::Up),
            Command::step(Direction::Up),
            Command::step(Direction::Left),
            Command::step(Direction::Left),
            Command::step(Direction::Left),
        ],
    );
    assert_eq!(query::player(&world), CellCoord::new(1, 0));

    let events = run(&mut world, &[Command::roll(Direction::Right)]);

    assert_eq!(
        query::player(&world),
        CellCoord::new(1, 0),
        "rolling never moves the player"
    );
    assert_eq!(
        query::board(&world).object_at(CellCoord::new(1, 3)),
        Some(ore('a'))
    );
    assert_eq!(
        events,
        vec![Event::ObjectMoved {
            object: ore('a'),
            from: CellCoord::new(1, 0),
            to: CellCoord::new(1, 3),
        }]
    );
}

#[test]
fn roll_stops_in_front_of_obstacle() {
    let mut world = world_from(&["@..@", "....", "....", "A..."]);
    let _ = run(
        &mut world,
        &[
            Command::step(Direction::Up),
            Command::step(Direction::Up),
            Command::step(Direction::Up),
        ],
    );

    let _ = run(&mut world, &[Command::roll(Direction::Right)]);

    assert_eq!(
        query::board(&world).object_at(CellCoord::new(0, 2)),
        Some(Object::Rock)
    );
    assert_eq!(
        query::board(&world).object_at(CellCoord::new(0, 3)),
        Some(Object::Rock)
    );
    assert_eq!(query::board(&world).object_at(CellCoord::new(0, 0)), None);
}

#[test]
fn roll_moves_a_single_cell_when_the_next_one_is_occupied() {
    let mut world = world_from(&["a.@", "...", "A.."]);
    let _ = run(
        &mut world,
        &[Command::step(Direction::Up), Command::step(Direction::Up)],
    );

    let events = run(&mut world, &[Command::roll(Direction::Right)]);

    let board = query::board(&world);
    assert_eq!(board.object_at(CellCoord::new(0, 0)), None);
    assert_eq!(board.object_at(CellCoord::new(0, 1)), Some(ore('a')));
    assert_eq!(board.object_at(CellCoord::new(0, 2)), Some(Object::Rock));
    assert_eq!(query::player(&world), CellCoord::new(0, 0));
    assert_eq!(
        events,
        vec![Event::ObjectMoved {
            object: ore('a'),
            from: CellCoord::new(0, 0),
            to: CellCoord::new(0, 1),
        }]
    );
}

#[test]
fn roll_blocked_immediately_leaves_object_in_place() {
    let mut world = world_from(&["a@", "A."]);
    let _ = run(&mut world, &[Command::step(Direction::Up)]);
    let before = world.clone();

    let _ = run(
        &mut world,
        &[Command::roll(Direction::Right), Command::roll(Direction::Up)],
    );

    assert_eq!(world, before);
}

#[test]
fn roll_into_adjacent_hole_consumes_object_without_moving_player() {
    let mut world = world_from(&["Aa.", "...", "..."]);
    let _ = run(&mut world, &[Command::step(Direction::Right)]);

    let events = run(&mut world, &[Command::roll(Direction::Left)]);

    assert_eq!(query::player(&world), CellCoord::new(0, 1));
    assert_eq!(query::placed_ore(&world), 1);
    assert_eq!(query::board(&world).object_count(), 0);
    assert_eq!(
        events,
        vec![Event::ObjectFell {
            object: ore('a'),
            hole: 'A'.try_into().expect("label"),
            cell: CellCoord::new(0, 0),
            scored: true,
        }]
    );
}

#[test]
fn roll_drops_into_first_hole_on_its_path() {
    let mut world = world_from(&["b.B.A", ".....", ".....", ".....", "....."]);
    let _ = run(
        &mut world,
        &[
            Command::step(Direction::Left),
            Command::step(Direction::Left),
            Command::step(Direction::Left),
            Command::step(Direction::Left),
        ],
    );
    assert_eq!(query::player(&world), CellCoord::new(0, 0));

    let _ = run(&mut world, &[Command::roll(Direction::Right)]);

    assert_eq!(query::fallen_counts(&world).get(letter('b')), 1);
    assert_eq!(query::board(&world).object_count(), 0);
}

#[test]
fn rock_in_hole_is_swallowed_without_score() {
    let mut world = world_from(&["@A", ".."]);
    let _ = run(&mut world, &[Command::step(Direction::Left)]);

    let _ = run(&mut world, &[Command::roll(Direction::Right)]);

    assert_eq!(query::board(&world).object_count(), 0);
    assert_eq!(query::placed_ore(&world), 0);
    assert_eq!(query::total_ore(&world), 0);
}
