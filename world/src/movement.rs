//! Step, carry and roll transitions.
//!
//! Every primitive either completes or leaves the world untouched; blocked
//! attempts are reported as [`Event::MoveBlocked`] and are not failures.

use dohyo_core::{BlockReason, CellCoord, Command, Event, HoleLabel, Object};
use tracing::trace;

use crate::{fall::resolve_fall, World};

pub(crate) fn step(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    let from = world.player;
    let Some(to) = world.board.neighbor(from, command.direction) else {
        blocked(command, BlockReason::OutOfBounds, out_events);
        return;
    };

    world.player = to;
    out_events.push(Event::PlayerMoved { from, to });
}

pub(crate) fn carry(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    let source = world.player;
    if !world.board.is_occupied(source) {
        blocked(command, BlockReason::NoObject, out_events);
        return;
    }
    let Some(destination) = world.board.neighbor(source, command.direction) else {
        blocked(command, BlockReason::OutOfBounds, out_events);
        return;
    };
    if world.board.is_occupied(destination) {
        blocked(command, BlockReason::Occupied, out_events);
        return;
    }
    let Some(object) = world.board.clear_object(source) else {
        return;
    };

    match world.board.hole_label(destination) {
        Some(hole) => drop_into_hole(world, object, hole, destination, out_events),
        None => {
            world.board.place_object(destination, object);
            out_events.push(Event::ObjectMoved {
                object,
                from: source,
                to: destination,
            });
        }
    }

    world.player = destination;
    out_events.push(Event::PlayerMoved {
        from: source,
        to: destination,
    });
}

pub(crate) fn roll(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    let origin = world.player;
    let direction = command.direction;
    if !world.board.is_occupied(origin) {
        blocked(command, BlockReason::NoObject, out_events);
        return;
    }
    let Some(first) = world.board.neighbor(origin, direction) else {
        blocked(command, BlockReason::OutOfBounds, out_events);
        return;
    };
    if world.board.is_occupied(first) {
        blocked(command, BlockReason::Occupied, out_events);
        return;
    }
    let Some(object) = world.board.clear_object(origin) else {
        return;
    };

    if let Some(hole) = world.board.hole_label(first) {
        drop_into_hole(world, object, hole, first, out_events);
        return;
    }

    let mut current = first;
    loop {
        let next = world
            .board
            .neighbor(current, direction)
            .filter(|next| !world.board.is_occupied(*next));
        let Some(next) = next else {
            break;
        };
        if let Some(hole) = world.board.hole_label(next) {
            drop_into_hole(world, object, hole, next, out_events);
            return;
        }
        current = next;
    }

    world.board.place_object(current, object);
    out_events.push(Event::ObjectMoved {
        object,
        from: origin,
        to: current,
    });
}

fn drop_into_hole(
    world: &mut World,
    object: Object,
    hole: HoleLabel,
    cell: CellCoord,
    out_events: &mut Vec<Event>,
) {
    let scored = resolve_fall(&mut world.fallen, hole, object);
    trace!(?object, %hole, %cell, scored, "object fell into hole");
    out_events.push(Event::ObjectFell {
        object,
        hole,
        cell,
        scored,
    });
}

fn blocked(command: Command, reason: BlockReason, out_events: &mut Vec<Event>) {
    trace!(%command, ?reason, "move blocked");
    out_events.push(Event::MoveBlocked { command, reason });
}
