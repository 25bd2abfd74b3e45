//! End-to-end runs through the public API.

use sandfall_engine::{Action, Cell, EngineSettings, Grid, Material, World};

#[test]
fn hourglass_drains_and_sleeps() {
    // Stone funnel with a one-cell neck at x = 5
    let mut grid = Grid::with_seed(11, 20, 9);
    for x in 0..11 {
        if x != 5 {
            grid.spawn(x, 8, Material::Stone);
        }
    }
    grid.spawn_brush(5, 3, 5, Material::Sand);
    let sand = grid.count(Material::Sand);

    for _ in 0..2000 {
        grid.step();
        if grid.awake_count() == 0 {
            break;
        }
    }

    assert_eq!(grid.awake_count(), 0, "still moving after 2000 frames");
    assert_eq!(grid.count(Material::Sand), sand);
    // Something made it through the neck and piled on the floor
    assert_eq!(grid.get(5, 19).material, Material::Sand);
}

#[test]
fn sand_displaces_water() {
    let mut grid = Grid::with_seed(1, 6, 4);
    grid.spawn(0, 5, Material::Water);
    grid.spawn(0, 0, Material::Sand);

    for _ in 0..50 {
        grid.step();
    }
    assert_eq!(grid.get(0, 5).material, Material::Sand);
    assert_eq!(grid.get(0, 4).material, Material::Water);
}

#[test]
fn burning_wood_eventually_clears() {
    let settings = EngineSettings {
        seed: Some(11),
        wood_flammability: 0.5,
        fire_extinguish_chance: 0.2,
        ..EngineSettings::default()
    };
    let mut grid = Grid::with_settings(8, 8, settings);
    grid.spawn_brush(4, 4, 5, Material::Wood);
    grid.spawn(4, 4, Material::Fire);

    for _ in 0..2000 {
        grid.step();
        if grid.count(Material::Fire) == 0 {
            break;
        }
    }

    assert_eq!(grid.count(Material::Fire), 0);
    // Fire leaves nothing behind, so nothing was created either
    assert!(grid.count(Material::Wood) < 25);
    assert_eq!(grid.count(Material::Empty) + grid.count(Material::Wood), 64);
}

#[test]
fn external_actions_follow_first_writer_rule() {
    let mut grid = Grid::with_seed(3, 3, 1);
    grid.step();

    let outcome = grid.apply_actions(&[
        Action::spawn((1, 1), Cell::new(Material::Stone)),
        Action::spawn((1, 1), Cell::new(Material::Wood)),
    ]);
    assert_eq!(outcome.applied, 1);
    assert_eq!(outcome.conflicts, 1);
    assert_eq!(grid.get(1, 1).material, Material::Stone);
}

#[test]
fn world_facade_drives_the_grid() {
    let mut world = World::with_seed(6, 6, 5);
    assert!(world.spawn(2, 0, Material::Sand.id()));
    assert!(!world.spawn(2, 0, 200));
    assert_eq!(world.spawn_brush(3, 3, 3, Material::Stone.id()), 9);

    let quads = world.touched_cells();
    assert_eq!(quads.len(), 10 * 4);

    world.step();
    assert_eq!(world.frame(), 1);
    assert_eq!(world.material_at(2, 1), Material::Sand.id());
    assert_eq!(world.material_at(-1, 0), Material::Bedrock.id());

    world.clear();
    assert_eq!(world.grid().count(Material::Empty), 36);
}
