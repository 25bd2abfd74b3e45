//! FireBehavior - keep burning, spread to flammable neighbours, go out
//!
//! Fire never moves. Every evaluated frame it:
//! 1. asks to stay awake,
//! 2. rolls each non-empty neighbour's flammability and spawns fire there on success,
//! 3. goes out unconditionally next to water, otherwise with its own extinguish chance.

use super::{Behavior, RuleContext};
use crate::domain::{Cell, Material};
use crate::spatial::{CellGrid, GridView};
use crate::systems::actions::Action;

#[derive(Default)]
pub struct FireBehavior;

impl FireBehavior {
    fn update_propagation<V: GridView>(&self, ctx: &mut RuleContext<'_, V>, actions: &mut Vec<Action>) {
        for (nx, ny) in CellGrid::neighbors(ctx.x, ctx.y) {
            let neighbor = ctx.get(nx, ny);
            if neighbor.is_empty() {
                continue;
            }
            if ctx.try_to_ignite(neighbor.material) {
                actions.push(Action::spawn((nx, ny), Cell::new(Material::Fire)));
            }
        }
    }

    fn update_extinguish<V: GridView>(&self, ctx: &mut RuleContext<'_, V>, actions: &mut Vec<Action>) {
        let near_water = CellGrid::neighbors(ctx.x, ctx.y)
            .any(|(nx, ny)| ctx.get(nx, ny).material == Material::Water);

        let chance = ctx.settings.fire_extinguish_chance;
        if near_water || ctx.roll(chance) {
            actions.push(Action::remove(ctx.pos()));
        }
    }
}

impl Behavior for FireBehavior {
    fn settled<V: GridView>(&self, ctx: &mut RuleContext<'_, V>, _cell: Cell) -> Vec<Action> {
        let mut actions = vec![Action::stay_awake(ctx.pos())];
        self.update_propagation(ctx, &mut actions);
        self.update_extinguish(ctx, &mut actions);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::domain::{Cell, EngineSettings, Material};
    use crate::systems::actions::Action;

    fn never_out() -> EngineSettings {
        EngineSettings { fire_extinguish_chance: 0.0, ..EngineSettings::default() }
    }

    #[test]
    fn lone_fire_keeps_itself_awake() {
        let grid = grid_from(&[
            "...",
            ".f.",
            "...",
        ]);
        let actions = eval_with(&grid, 1, 1, &never_out(), 1);
        assert_eq!(actions, vec![Action::stay_awake((1, 1))]);
    }

    #[test]
    fn water_puts_fire_out_regardless_of_roll() {
        let grid = grid_from(&[
            "...",
            ".f.",
            "..w",
        ]);
        for seed in 0..20 {
            let actions = eval_with(&grid, 1, 1, &never_out(), seed);
            assert!(actions.contains(&Action::remove((1, 1))), "seed {}", seed);
        }
    }

    #[test]
    fn certain_extinguish_removes_fire() {
        let grid = grid_from(&[".f."]);
        let settings = EngineSettings { fire_extinguish_chance: 1.0, ..EngineSettings::default() };
        let actions = eval_with(&grid, 1, 0, &settings, 9);
        assert_eq!(actions, vec![Action::stay_awake((1, 0)), Action::remove((1, 0))]);
    }

    #[test]
    fn certain_flammability_ignites_every_wood_neighbor() {
        let grid = grid_from(&[
            "t#t",
            "tf.",
            "sww",
        ]);
        let settings = EngineSettings { wood_flammability: 1.0, ..never_out() };
        let actions = eval_with(&grid, 1, 1, &settings, 4);
        let spawned: Vec<_> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Spawn { pos, cell } if cell.material == Material::Fire => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(spawned, vec![(0, 0), (2, 0), (0, 1)]);
        // water below also puts it out
        assert!(actions.contains(&Action::remove((1, 1))));
    }

    #[test]
    fn ignition_rate_tracks_flammability() {
        let grid = grid_from(&[
            "...",
            "ft.",
            "...",
        ]);
        let settings = never_out();
        let trials = 20_000u64;
        let mut ignited = 0u32;
        for seed in 0..trials {
            let actions = eval_with(&grid, 0, 1, &settings, seed);
            if actions.contains(&Action::spawn((1, 1), Cell::new(Material::Fire))) {
                ignited += 1;
            }
        }
        let rate = ignited as f64 / trials as f64;
        // expected 0.01; 3 sigma is ~0.0021
        assert!((rate - 0.01).abs() < 0.003, "ignition rate {}", rate);
    }
}
