//! Gravity - accelerating fall and diagonal spread, shared by every family
//! that has a fall direction
//!
//! Fall speed is plain data on the cell. The rule computes the new speed and
//! hands it to the scheduler inside the `Switch` action's mover.

use super::{Behavior, RuleContext};
use crate::domain::materials::{can_traverse, props};
use crate::domain::Cell;
use crate::spatial::GridView;
use crate::systems::actions::Action;

/// Movable solids (sand): fall, spread, otherwise rest.
#[derive(Default)]
pub struct PowderBehavior;

impl Behavior for PowderBehavior {
    fn settled<V: GridView>(&self, _ctx: &mut RuleContext<'_, V>, _cell: Cell) -> Vec<Action> {
        Vec::new()
    }
}

/// Try to fall straight along the fall direction.
///
/// Scans from the current row toward `y + floor(speed) * dir` one step at a
/// time and stops before the first non-traversable cell. `None` when the very
/// first step is blocked.
pub(super) fn update_fall<V: GridView>(ctx: &RuleContext<'_, V>, cell: Cell) -> Option<Action> {
    let p = props(cell.material);
    let dir = p.fall.dy();
    if dir == 0 {
        return None;
    }

    let speed = if p.accelerates {
        cell.fall_speed * ctx.settings.gravity_acceleration
    } else {
        cell.fall_speed
    };
    let steps = (speed.floor() as i32).max(1);

    let (x, y) = ctx.pos();
    let mut last = y;
    for _ in 0..steps {
        let next = last + dir;
        if !can_traverse(cell.material, ctx.get(x, next).material) {
            // Collision: the speed resets the instant the cell is blocked.
            return Action::switch((x, y), (x, last), cell.with_fall_speed(1.0));
        }
        last = next;
    }

    Action::switch((x, y), (x, last), cell.with_fall_speed(speed))
}

/// Try to slide one cell diagonally along the fall direction.
///
/// A side qualifies when both the cell beside and the cell diagonally ahead
/// are traversable. Both sides: coin flip.
pub(super) fn update_spread<V: GridView>(ctx: &mut RuleContext<'_, V>, cell: Cell) -> Option<Action> {
    let dir = props(cell.material).fall.dy();
    if dir == 0 {
        return None;
    }

    let (x, y) = ctx.pos();
    let m = cell.material;
    let open = |dx: i32| {
        can_traverse(m, ctx.get(x + dx, y).material) && can_traverse(m, ctx.get(x + dx, y + dir).material)
    };
    let left = open(-1);
    let right = open(1);

    let dx = match (left, right) {
        (true, true) => {
            if ctx.coin() { -1 } else { 1 }
        }
        (true, false) => -1,
        (false, true) => 1,
        (false, false) => return None,
    };

    Action::switch((x, y), (x + dx, y + dir), cell.with_fall_speed(1.0))
}
