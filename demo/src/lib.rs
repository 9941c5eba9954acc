//! Scene loading and text rendering for the `jps-demo` binary.

use std::path::{Path, PathBuf};

use jumpgrid_core::{GridError, OccupancyGrid, Point};
use jumpgrid_paths::{Plan, PlanError, PlannerConfig, Route};

/// A `(row, col)` pair as written in scene files.
pub type RowCol = (i32, i32);

/// Errors surfaced by the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("failed to read scene {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid map: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Everything needed to build a map and run one query.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    /// Inset of the blocked frame; no frame when absent.
    #[serde(default)]
    pub margin: Option<i32>,
    /// Straight wall segments, both ends inclusive.
    #[serde(default)]
    pub walls: Vec<(RowCol, RowCol)>,
    pub start: RowCol,
    pub goal: RowCol,
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Default for Scene {
    /// The demo map: 60x40, frame inset by 5, four wall segments leaving a
    /// winding corridor from `(10, 10)` to `(30, 50)`.
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            margin: Some(5),
            walls: vec![
                ((5, 25), (19, 25)),
                ((20, 15), (20, 25)),
                ((20, 35), (34, 35)),
                ((5, 45), (20, 45)),
            ],
            start: (10, 10),
            goal: (30, 50),
            planner: PlannerConfig::default(),
        }
    }
}

impl Scene {
    /// Parse a scene from JSON.
    pub fn from_json(s: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let s = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::from_json(&s)?;
        log::info!("loaded scene from {}", path.display());
        Ok(scene)
    }

    pub fn start(&self) -> Point {
        Point::rc(self.start.0, self.start.1)
    }

    pub fn goal(&self) -> Point {
        Point::rc(self.goal.0, self.goal.1)
    }

    /// Build the occupancy grid: frame first, then walls.
    pub fn build_grid(&self) -> Result<OccupancyGrid, GridError> {
        let mut grid = OccupancyGrid::new(self.width, self.height)?;
        if let Some(margin) = self.margin {
            grid.block_frame(margin)?;
        }
        for &((r0, c0), (r1, c1)) in &self.walls {
            grid.block_segment(Point::rc(r0, c0), Point::rc(r1, c1))?;
        }
        log::debug!(
            "built {}x{} grid with {} blocked cells",
            grid.width(),
            grid.height(),
            grid.count_blocked()
        );
        Ok(grid)
    }
}

/// Render the grid as text, one character per cell.
///
/// `#` blocked, `.` free, `+` a traced jump point, `*` a route cell,
/// `S`/`G` the endpoints.
pub fn render(grid: &OccupancyGrid, plan: &Plan) -> String {
    let mut chars: Vec<char> = grid
        .iter()
        .map(|(p, _)| if grid.is_blocked(p) { '#' } else { '.' })
        .collect();
    let mut mark = |p: Point, c: char| {
        if let Some(i) = grid.index(p) {
            chars[i] = c;
        }
    };
    for &p in &plan.trace {
        mark(p, '+');
    }
    if let Some(route) = &plan.route {
        for p in route.steps() {
            mark(p, '*');
        }
    }
    mark(plan.start, 'S');
    mark(plan.goal, 'G');

    let mut out = String::with_capacity(chars.len() + grid.height() as usize);
    for row in chars.chunks(grid.width() as usize) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// One line per route cell, as `row,col`.
pub fn format_steps(plan: &Plan) -> String {
    plan.route
        .iter()
        .flat_map(Route::steps)
        .map(|p| format!("{},{}\n", p.row(), p.col()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumpgrid_paths::Planner;

    #[test]
    fn default_scene_builds_demo_map() {
        let scene = Scene::default();
        let grid = scene.build_grid().unwrap();
        assert_eq!(grid.width(), 60);
        assert_eq!(grid.height(), 40);
        assert!(grid.is_blocked(Point::rc(5, 30)));
        assert!(grid.is_blocked(Point::rc(12, 25)));
        assert!(grid.is_blocked(Point::rc(20, 20)));
        assert!(grid.is_blocked(Point::rc(30, 35)));
        assert!(grid.is_blocked(Point::rc(20, 45)));
        assert!(grid.is_free(scene.start()));
        assert!(grid.is_free(scene.goal()));
    }

    #[test]
    fn scene_json_uses_row_col_pairs() {
        let scene = Scene::from_json(
            r#"{
                "width": 10, "height": 10, "margin": 0,
                "walls": [[[4, 4], [4, 4]]],
                "start": [1, 1], "goal": [8, 8]
            }"#,
        )
        .unwrap();
        assert_eq!(scene.start(), Point::new(1, 1));
        assert_eq!(scene.walls, vec![((4, 4), (4, 4))]);
        assert!(scene.planner.record_trace);
        let grid = scene.build_grid().unwrap();
        assert!(grid.is_blocked(Point::rc(4, 4)));
        assert!(grid.is_blocked(Point::rc(0, 9)));
    }

    #[test]
    fn bad_scenes_are_reported() {
        assert!(matches!(
            Scene::from_json("{\"width\": 3}"),
            Err(DemoError::Json(_))
        ));
        let scene = Scene {
            walls: vec![((0, 0), (2, 7))],
            ..Scene::default()
        };
        assert!(matches!(
            scene.build_grid(),
            Err(GridError::UnalignedSegment { .. })
        ));
        let missing = Scene::load(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(missing.to_string().contains("failed to read scene"));
    }

    #[test]
    fn bundled_scenes_parse() {
        let demo = Scene::from_json(include_str!("../scenes/demo.json")).unwrap();
        assert_eq!(demo, Scene::default());

        let detour = Scene::from_json(include_str!("../scenes/detour.json")).unwrap();
        let grid = detour.build_grid().unwrap();
        let plan = Planner::new(&grid).plan(detour.start(), detour.goal()).unwrap();
        assert!(plan.path().len() > 2);

        let enclosed = Scene::from_json(include_str!("../scenes/enclosed.json")).unwrap();
        let grid = enclosed.build_grid().unwrap();
        let plan = Planner::with_config(&grid, enclosed.planner)
            .plan(enclosed.start(), enclosed.goal())
            .unwrap();
        assert!(!plan.found());
        assert!(plan.trace.is_empty());
    }

    #[test]
    fn render_marks_route_and_endpoints() {
        let mut grid = OccupancyGrid::new(5, 3).unwrap();
        grid.set_blocked(Point::rc(0, 2)).unwrap();
        let plan = Planner::new(&grid)
            .plan(Point::rc(1, 0), Point::rc(1, 4))
            .unwrap();
        let text = render(&grid, &plan);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().nth(2), Some('#'));
        assert!(lines[1].starts_with('S'));
        assert!(lines[1].ends_with('G'));
        assert_eq!(text.matches('S').count(), 1);
    }

    #[test]
    fn steps_are_listed_row_col() {
        let grid = OccupancyGrid::new(4, 4).unwrap();
        let plan = Planner::new(&grid)
            .plan(Point::rc(0, 0), Point::rc(2, 2))
            .unwrap();
        assert_eq!(format_steps(&plan), "0,0\n1,1\n2,2\n");

        let mut walled = OccupancyGrid::new(3, 3).unwrap();
        walled.set_blocked(Point::rc(1, 1)).unwrap();
        walled.set_blocked(Point::rc(0, 1)).unwrap();
        walled.set_blocked(Point::rc(2, 1)).unwrap();
        let plan = Planner::new(&walled)
            .plan(Point::rc(0, 0), Point::rc(0, 2))
            .unwrap();
        assert!(!plan.found());
        assert_eq!(format_steps(&plan), "");
    }
}
