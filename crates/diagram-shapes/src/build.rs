//! The shape builder (§4.E): walks closed and open boundary cell-sets into
//! polygons and polylines, with corner/round vertex typing and endpoint
//! snapping to nearby anchors.

use diagram_cellset::CellSet;
use diagram_grid::classify::{is_dashed, CellClass, CornerStyle};
use diagram_grid::{classify, follow_cell, Cell, Grid};

use crate::geometry::{CellGeometry, Point, VertexType};
use crate::shape::Shape;

fn vertex_type_for(grid: &Grid, cell: Cell) -> VertexType {
    match classify::classify(grid, cell) {
        CellClass::Corner(_, CornerStyle::Round) => VertexType::Round,
        _ => VertexType::Normal,
    }
}

fn is_emitted_vertex_cell(grid: &Grid, cell: Cell) -> bool {
    classify::is_point_cell(grid, cell)
}

/// Walks a closed cell-set into a polygon. Returns `None` if the set does not
/// trace a clean loop (a follow-step offered more than one continuation).
pub fn build_closed_shape(grid: &Grid, geo: &CellGeometry, set: &CellSet) -> Option<Shape> {
    let start = set
        .iter()
        .filter(|&c| classify::is_corner(grid, c))
        .min_by_key(|c| (c.y, c.x))
        .or_else(|| set.iter().min_by_key(|c| (c.y, c.x)))?;

    let mut points = Vec::new();
    if is_emitted_vertex_cell(grid, start) {
        points.push(Point::new(geo.mid_x(start), geo.mid_y(start)).with_type(vertex_type_for(grid, start)));
    }

    // With no `prev` yet, `start`'s own two arms both look like valid
    // continuations; seed the walk down one of them before the "more than
    // one candidate means a fork" rule applies.
    let seed: Vec<Cell> = follow_cell(grid, start, None)
        .into_iter()
        .filter(|c| set.contains(*c))
        .collect();
    let mut current = *seed.first()?;
    let mut prev = Some(start);

    let max_steps = set.len() * 2 + 1;
    for _ in 0..max_steps {
        if current == start {
            return if points.len() >= 3 {
                Some(Shape::new_closed(points))
            } else {
                None
            };
        }
        if is_emitted_vertex_cell(grid, current) {
            points.push(
                Point::new(geo.mid_x(current), geo.mid_y(current)).with_type(vertex_type_for(grid, current)),
            );
        }
        let candidates: Vec<Cell> = follow_cell(grid, current, prev)
            .into_iter()
            .filter(|c| set.contains(*c))
            .collect();
        match candidates.len() {
            0 => return None,
            1 => {
                prev = Some(current);
                current = candidates[0];
            }
            _ => return None,
        }
    }
    None
}

struct RawVertex {
    cell: Cell,
    vtype: VertexType,
}

/// Builds every open polyline in `set`, applying the dashed-infection rule
/// across all walks produced from the same set.
pub fn build_open_shapes(grid: &Grid, geo: &CellGeometry, set: &CellSet) -> Vec<Shape> {
    let mut visited = CellSet::new();
    let mut raw_paths: Vec<Vec<RawVertex>> = Vec::new();
    let mut any_dashed = false;

    let mut starts = set.line_end_cells(grid);
    starts.sort_by_key(|c| (c.y, c.x));
    for start in starts {
        if visited.contains(start) {
            continue;
        }
        grow_edges_from_cell(grid, set, start, None, &mut visited, &mut raw_paths, &mut any_dashed);
    }

    raw_paths
        .into_iter()
        .filter(|p| p.len() >= 2)
        .map(|path| {
            let points = connect_ends_to_anchors(grid, geo, &path);
            let mut shape = Shape::new_open(points);
            shape.dashed = any_dashed;
            shape
        })
        .collect()
}

fn grow_edges_from_cell(
    grid: &Grid,
    set: &CellSet,
    start: Cell,
    entry_prev: Option<Cell>,
    visited: &mut CellSet,
    out: &mut Vec<Vec<RawVertex>>,
    any_dashed: &mut bool,
) {
    let mut path = Vec::new();
    let mut prev = entry_prev;
    let mut current = start;
    loop {
        visited.insert(current);
        if is_dashed(grid.get(current)) {
            *any_dashed = true;
        }
        if is_emitted_vertex_cell(grid, current) {
            path.push(RawVertex {
                cell: current,
                vtype: vertex_type_for(grid, current),
            });
        }
        let candidates: Vec<Cell> = follow_cell(grid, current, prev)
            .into_iter()
            .filter(|c| set.contains(*c) && !visited.contains(*c))
            .collect();
        match candidates.len() {
            0 => break,
            1 => {
                prev = Some(current);
                current = candidates[0];
            }
            _ => {
                out.push(path);
                for branch in candidates {
                    grow_edges_from_cell(grid, set, branch, Some(current), visited, out, any_dashed);
                }
                return;
            }
        }
    }
    out.push(path);
}

/// Endpoint snapping: if the cell one step beyond an open shape's extreme
/// point (away from its neighbor) classifies as arrowhead, corner, or
/// intersection, move that endpoint to the anchor cell's center and lock it.
fn connect_ends_to_anchors(grid: &Grid, geo: &CellGeometry, path: &[RawVertex]) -> Vec<Point> {
    let mut points: Vec<Point> = path
        .iter()
        .map(|v| Point::new(geo.mid_x(v.cell), geo.mid_y(v.cell)).with_type(v.vtype))
        .collect();
    if path.len() < 2 {
        return points;
    }
    let snap = |end: Cell, adjacent: Cell, geo: &CellGeometry| -> Option<Point> {
        let dx = (end.x - adjacent.x).signum();
        let dy = (end.y - adjacent.y).signum();
        let beyond = Cell::new(end.x + dx, end.y + dy);
        let is_anchor = classify::is_arrowhead(grid, beyond)
            || classify::is_corner(grid, beyond)
            || classify::is_intersection(grid, beyond);
        if is_anchor {
            Some(Point::new(geo.mid_x(beyond), geo.mid_y(beyond)).locked())
        } else {
            None
        }
    };

    if let Some(p) = snap(path[0].cell, path[1].cell, geo) {
        points[0] = p;
    }
    let last = path.len() - 1;
    if let Some(p) = snap(path[last].cell, path[last - 1].cell, geo) {
        points[last] = p;
    }
    points
}

/// A 1-cell open "shape": a short segment centered in its cell, horizontal or
/// vertical depending on which neighbor side has entries. Suppressed if the
/// cell itself is a dashed-line character.
pub fn build_small_line(grid: &Grid, geo: &CellGeometry, cell: Cell) -> Option<Shape> {
    if is_dashed(grid.get(cell)) {
        return None;
    }
    let entries = classify::cardinal_entries(grid, cell);
    let (p0, p1) = if entries.e || entries.w {
        (
            Point::new(geo.min_x(cell), geo.mid_y(cell)),
            Point::new(geo.max_x(cell) - 1.0, geo.mid_y(cell)),
        )
    } else if entries.n || entries.s {
        (
            Point::new(geo.mid_x(cell), geo.min_y(cell)),
            Point::new(geo.mid_x(cell), geo.max_y(cell) - 1.0),
        )
    } else {
        return None;
    };
    let (beyond_start, beyond_end) = if entries.e || entries.w {
        (cell.west(), cell.east())
    } else {
        (cell.north(), cell.south())
    };
    let mut points = vec![p0, p1];
    let snap_dir = |beyond: Cell| -> Option<Point> {
        if classify::is_arrowhead(grid, beyond)
            || classify::is_corner(grid, beyond)
            || classify::is_intersection(grid, beyond)
        {
            Some(Point::new(geo.mid_x(beyond), geo.mid_y(beyond)).locked())
        } else {
            None
        }
    };
    if let Some(p) = snap_dir(beyond_start) {
        points[0] = p;
    }
    if let Some(p) = snap_dir(beyond_end) {
        points[1] = p;
    }
    let mut shape = Shape::new_open(points);
    shape.dashed = false;
    Some(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_grid::classify::is_boundary;

    fn geo() -> CellGeometry {
        CellGeometry::default()
    }

    #[test]
    fn closed_box_has_four_normal_corners() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let set: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let shape = build_closed_shape(&g, &geo(), &set).expect("clean box");
        assert_eq!(shape.points.len(), 4);
        assert!(shape.closed);
        assert!(shape
            .points
            .iter()
            .all(|p| matches!(p.vertex_type, VertexType::Normal)));
    }

    #[test]
    fn round_box_has_four_round_corners() {
        let g = Grid::from_text("/---\\\n|   |\n\\---/");
        let set: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let shape = build_closed_shape(&g, &geo(), &set).expect("clean box");
        assert_eq!(shape.points.len(), 4);
        assert!(shape
            .points
            .iter()
            .all(|p| matches!(p.vertex_type, VertexType::Round)));
    }

    #[test]
    fn open_line_has_two_endpoints() {
        let g = Grid::from_text("----");
        let set: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let shapes = build_open_shapes(&g, &geo(), &set);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].points.len(), 2);
    }

    #[test]
    fn arrow_connector_snaps_and_locks_its_end() {
        let g = Grid::from_text("--->");
        let set: CellSet = g
            .iter_cells()
            .filter(|&c| is_boundary(&g, c) || classify::is_arrowhead(&g, c))
            .collect();
        let shapes = build_open_shapes(&g, &geo(), &set);
        assert_eq!(shapes.len(), 1);
        let last = shapes[0].points.last().unwrap();
        assert!(last.locked);
    }
}
