use dohyo_core::{Command, Direction, ScoreReport};
use dohyo_system_loader::parse_puzzle;
use dohyo_system_scoring::{report, FULL_SCORE};
use dohyo_world::{self as world, World};

fn play(puzzle: &str, commands: &[Command]) -> World {
    let layout = parse_puzzle(puzzle).expect("valid puzzle");
    let mut world = World::from_layout(&layout);
    let mut events = Vec::new();
    for command in commands {
        world::apply(&mut world, *command, &mut events);
    }
    world
}

#[test]
fn single_ore_carried_into_its_hole_scores_full_clear() {
    let commands = [Command::step(Direction::Right), Command::carry(Direction::Left)];
    let world = play("3 1\nAa.\n...\n...\n", &commands);

    let summary = report(&world, commands.len());

    assert_eq!(
        summary,
        ScoreReport {
            score: 13_287_712,
            dimension: 3,
            ore_kinds: 1,
            total_ore: 1,
            placed_ore: 1,
            command_count: 2,
        }
    );
    assert!(summary.score > FULL_SCORE, "short scripts earn a bonus");
}

#[test]
fn half_the_ore_placed_scores_half() {
    let commands = [Command::step(Direction::Right), Command::roll(Direction::Left)];
    let world = play("3 1\nAa.\n...\n..a\n", &commands);

    let summary = report(&world, commands.len());

    assert_eq!(summary.total_ore, 2);
    assert_eq!(summary.placed_ore, 1);
    assert_eq!(summary.score, 500_000);
}

#[test]
fn boards_without_ore_always_score_zero() {
    let commands = [
        Command::step(Direction::Right),
        Command::roll(Direction::Left),
        Command::step(Direction::Down),
    ];
    let world = play("3 0\nA@.\n.@.\n...\n", &commands);

    for command_count in [0, 1, commands.len(), 50_000] {
        assert_eq!(report(&world, command_count).score, 0);
    }
}

#[test]
fn command_count_is_taken_from_caller() {
    let world = play("2 1\nAa\n..\n", &[]);

    assert_eq!(report(&world, 9).command_count, 9);
    assert_eq!(report(&world, 9).score, 0);
}
