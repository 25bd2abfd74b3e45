//! Behaviors - per-family material rules
//!
//! Every rule is a read-only decision over a [`GridView`]: it looks at the
//! neighbourhood and returns 0..N [`Action`]s. Nothing here writes the grid.
//!
//! Gravity-affected materials share one pipeline:
//! fall -> lateral spread -> family-specific settled behaviour.

mod gravity;
mod fluid;
mod fire;

pub use fluid::FluidBehavior;
pub use fire::FireBehavior;
pub use gravity::PowderBehavior;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::domain::materials::{family_of, props, Family, FallDirection};
use crate::domain::{Cell, EngineSettings, Material};
use crate::spatial::{GridView, Pos};
use crate::systems::actions::Action;

/// Everything a rule may look at while deciding.
pub struct RuleContext<'a, V: GridView> {
    pub view: &'a V,
    pub x: i32,
    pub y: i32,
    pub settings: &'a EngineSettings,
    pub rng: &'a mut SmallRng,
}

impl<'a, V: GridView> RuleContext<'a, V> {
    #[inline]
    pub fn pos(&self) -> Pos {
        (self.x, self.y)
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.view.get(self.x, self.y)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.view.get(x, y)
    }

    /// Uniform coin flip.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.rng.random::<bool>()
    }

    /// `roll < chance`; never draws for a zero chance.
    #[inline]
    pub fn roll(&mut self, chance: f64) -> bool {
        chance > 0.0 && self.rng.random::<f64>() < chance
    }

    /// The only cross-material capability fire needs: does `material` catch?
    #[inline]
    pub fn try_to_ignite(&mut self, material: Material) -> bool {
        let chance = self.settings.flammability(material);
        self.roll(chance)
    }
}

/// Behavior trait - one implementation per material family
pub trait Behavior {
    /// Settled behaviour: what the cell does when it could neither fall nor spread.
    fn settled<V: GridView>(&self, ctx: &mut RuleContext<'_, V>, cell: Cell) -> Vec<Action>;
}

/// Behavior registry - dispatch by family
#[derive(Default)]
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    fluid: FluidBehavior,
    fire: FireBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the cell at the context position. Called once per awake cell per frame.
    pub fn evaluate<V: GridView>(&self, ctx: &mut RuleContext<'_, V>) -> Vec<Action> {
        let cell = ctx.cell();
        let material = cell.material;

        match family_of(material) {
            Family::Empty | Family::Boundary => Vec::new(),
            Family::MovableSolid => self.evaluate_gravity(&self.powder, ctx, cell),
            Family::Liquid | Family::Gas => self.evaluate_gravity(&self.fluid, ctx, cell),
            Family::UnmovableSolid => match material {
                Material::Fire => self.fire.settled(ctx, cell),
                // Stone and Wood never propose anything on their own.
                _ => Vec::new(),
            },
        }
    }

    fn evaluate_gravity<B: Behavior, V: GridView>(
        &self,
        behavior: &B,
        ctx: &mut RuleContext<'_, V>,
        cell: Cell,
    ) -> Vec<Action> {
        debug_assert!(props(cell.material).fall != FallDirection::None);

        if let Some(action) = gravity::update_fall(ctx, cell) {
            return vec![action];
        }

        if let Some(action) = gravity::update_spread(ctx, cell) {
            return vec![action];
        }

        let mut actions = behavior.settled(ctx, cell);
        if actions.is_empty() && cell.fall_speed > 1.0 {
            // Nothing moved, but the collision still resets the stored speed.
            actions.push(Action::spawn(ctx.pos(), cell.with_fall_speed(1.0)));
        }
        actions
    }
}

/// Evaluate a single cell with a fresh context. Convenience for callers that
/// hold a view and an rng but no registry.
pub fn evaluate<V: GridView>(
    view: &V,
    x: i32,
    y: i32,
    settings: &EngineSettings,
    rng: &mut SmallRng,
) -> Vec<Action> {
    let mut ctx = RuleContext { view, x, y, settings, rng };
    BehaviorRegistry::new().evaluate(&mut ctx)
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::domain::{Cell, EngineSettings, Material};
    use crate::spatial::CellGrid;
    use crate::systems::actions::Action;

    /// Build a grid from rows of glyphs: `.` empty, `s` sand, `w` water,
    /// `m` smoke, `#` stone, `t` wood, `f` fire, `B` bedrock.
    pub fn grid_from(rows: &[&str]) -> CellGrid {
        let height = rows.len() as u32;
        let width = rows[0].len() as u32;
        let mut grid = CellGrid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let material = match ch {
                    '.' => Material::Empty,
                    's' => Material::Sand,
                    'w' => Material::Water,
                    'm' => Material::Smoke,
                    '#' => Material::Stone,
                    't' => Material::Wood,
                    'f' => Material::Fire,
                    'B' => Material::Bedrock,
                    other => panic!("unknown glyph {:?}", other),
                };
                grid.set(x as i32, y as i32, Cell::new(material));
            }
        }
        grid
    }

    pub fn eval(grid: &CellGrid, x: i32, y: i32, seed: u64) -> Vec<Action> {
        eval_with(grid, x, y, &EngineSettings::default(), seed)
    }

    pub fn eval_with(grid: &CellGrid, x: i32, y: i32, settings: &EngineSettings, seed: u64) -> Vec<Action> {
        let mut rng = SmallRng::seed_from_u64(seed);
        super::evaluate(grid, x, y, settings, &mut rng)
    }
}
