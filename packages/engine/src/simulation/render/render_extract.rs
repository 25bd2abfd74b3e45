use super::Grid;

/// Pack the touched map into the reusable transfer buffer so a JS renderer
/// can repaint damage without crossing the boundary once per cell.
pub(super) fn extract_touched(grid: &mut Grid) -> &[u32] {
    let buf = &mut grid.touched_transfer;
    buf.clear();
    buf.reserve(grid.touched.len() * 4);

    for (&(x, y), cell) in grid.touched.iter() {
        buf.push(x as u32);
        buf.push(y as u32);
        buf.push(cell.material.id() as u32);
        buf.push(cell.color);
    }

    &grid.touched_transfer
}
