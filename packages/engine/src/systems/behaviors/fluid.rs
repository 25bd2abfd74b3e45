//! FluidBehavior - sideways flow for liquids and gases
//!
//! Scan & teleport: look up to `flow_speed` cells left and right through
//! empty or fluid cells and jump to the farthest empty cell accepted.
//! An empty cell is preferred when the cell "above" it (against the fall
//! direction) is not the same fluid family, so pools surface and drain fast;
//! otherwise it is only accepted with the small bubble chance.

use super::{Behavior, RuleContext};
use crate::domain::materials::{can_flow_through, family_of, props};
use crate::domain::Cell;
use crate::spatial::GridView;
use crate::systems::actions::Action;

#[derive(Default)]
pub struct FluidBehavior;

impl FluidBehavior {
    /// Farthest accepted x in `direction` (-1 or 1); `x` itself when none.
    fn farthest_flow_position<V: GridView>(&self, ctx: &mut RuleContext<'_, V>, cell: Cell, direction: i32) -> i32 {
        let (x, y) = ctx.pos();
        let m = cell.material;
        let family = family_of(m);
        let above_dy = -props(m).fall.dy();
        let range = ctx.settings.flow_speed(m) as i32;
        let bubble = ctx.settings.bubble_chance;

        let mut farthest = x;
        for step in 1..=range {
            let nx = x + direction * step;
            let next = ctx.get(nx, y);
            if !can_flow_through(m, next.material) {
                break;
            }
            if !next.is_empty() {
                // Fluid in the way: look through it, but never land on it.
                continue;
            }
            let above = ctx.get(nx, y + above_dy);
            if family_of(above.material) != family || ctx.roll(bubble) {
                farthest = nx;
            }
        }
        farthest
    }
}

impl Behavior for FluidBehavior {
    fn settled<V: GridView>(&self, ctx: &mut RuleContext<'_, V>, cell: Cell) -> Vec<Action> {
        let x = ctx.x;
        let farthest_left = self.farthest_flow_position(ctx, cell, -1);
        let farthest_right = self.farthest_flow_position(ctx, cell, 1);

        let delta_left = x - farthest_left;
        let delta_right = farthest_right - x;
        if delta_left == 0 && delta_right == 0 {
            return Vec::new();
        }

        let new_x = if delta_left == delta_right {
            if ctx.coin() { farthest_left } else { farthest_right }
        } else if delta_left > delta_right {
            farthest_left
        } else {
            farthest_right
        };

        Action::switch(ctx.pos(), (new_x, ctx.y), cell.with_fall_speed(1.0))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::domain::EngineSettings;
    use crate::systems::actions::Action;

    fn no_bubbles() -> EngineSettings {
        EngineSettings { bubble_chance: 0.0, ..EngineSettings::default() }
    }

    fn target(actions: &[Action]) -> Option<(i32, i32)> {
        match actions {
            [] => None,
            [Action::Switch { to, .. }] => Some(*to),
            other => panic!("expected at most one switch, got {:?}", other),
        }
    }

    #[test]
    fn flows_toward_the_farther_side() {
        let grid = grid_from(&[
            "#.w......#",
            "##########",
        ]);
        // left: one cell, right: up to five
        let actions = eval_with(&grid, 2, 0, &no_bubbles(), 1);
        assert_eq!(target(&actions), Some((7, 0)));
    }

    #[test]
    fn wall_on_both_sides_means_no_flow() {
        let grid = grid_from(&[
            "#w#",
            "###",
        ]);
        assert_eq!(target(&eval(&grid, 1, 0, 1)), None);
    }

    #[test]
    fn flows_through_water_to_reach_empty_cells() {
        let grid = grid_from(&[
            "#ww..#",
            "######",
        ]);
        let actions = eval_with(&grid, 1, 0, &no_bubbles(), 1);
        assert_eq!(target(&actions), Some((4, 0)));
    }

    #[test]
    fn cells_under_water_need_a_bubble_roll() {
        let grid = grid_from(&[
            "#www#",
            "#.w.#",
            "#####",
        ]);
        // Both empties have water on top; without bubbles nothing is accepted.
        assert_eq!(target(&eval_with(&grid, 2, 1, &no_bubbles(), 1)), None);

        let always = EngineSettings { bubble_chance: 1.0, ..EngineSettings::default() };
        let t = target(&eval_with(&grid, 2, 1, &always, 1));
        assert!(matches!(t, Some((1, 1)) | Some((3, 1))), "got {:?}", t);
    }

    #[test]
    fn tie_breaks_both_ways() {
        let grid = grid_from(&[
            "#..w..#",
            "#######",
        ]);
        let mut seen_left = false;
        let mut seen_right = false;
        for seed in 0..100 {
            match target(&eval_with(&grid, 3, 0, &no_bubbles(), seed)) {
                Some((1, 0)) => seen_left = true,
                Some((5, 0)) => seen_right = true,
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn flow_range_is_capped_by_flow_speed() {
        let grid = grid_from(&[
            "w..........#",
            "############",
        ]);
        let settings = EngineSettings { water_flow_speed: 3, ..no_bubbles() };
        assert_eq!(target(&eval_with(&grid, 0, 0, &settings, 1)), Some((3, 0)));
    }

    #[test]
    fn smoke_spreads_under_a_ceiling() {
        let grid = grid_from(&[
            "######",
            "#.m..#",
            "#....#",
        ]);
        let actions = eval_with(&grid, 2, 1, &no_bubbles(), 1);
        // Smoke can't rise (stone) and can't spread diagonally upward, so it flows.
        assert_eq!(target(&actions), Some((4, 1)));
    }
}
