//! Animated point lattice that feeds the renderer in the demo.
//!
//! Nodes sit on a jittered grid spanning the surface and carry palette colors.
//! A pointer-driven root node pushes nearby nodes away while springs pull them
//! back home. Every grid cell becomes two triangles, so the mesh always covers
//! the whole surface.
//!
//! The simulation cools down like a force layout: each tick scales the forces
//! by `alpha`, which decays until the scene stops moving. Moving the pointer
//! reheats it.

use crate::colors::palette_color;
use crate::math::vec2::Vec2;
use crate::mesh::{Mesh, Triangle, Vertex};

pub const DEFAULT_COLUMNS: usize = 10;
pub const DEFAULT_ROWS: usize = 5;

const REPULSION: f32 = 4000.0;
const SPRING: f32 = 0.5;
const FRICTION: f32 = 0.9;
const ALPHA_REHEAT: f32 = 0.1;
const ALPHA_DECAY: f32 = 0.99;
const ALPHA_MIN: f32 = 0.005;

#[derive(Clone, Copy, Debug)]
struct Node {
    home: Vec2,
    position: Vec2,
    velocity: Vec2,
}

pub struct Scene {
    width: f32,
    height: f32,
    columns: usize,
    rows: usize,
    nodes: Vec<Node>,
    root: Option<Vec2>,
    alpha: f32,
}

impl Scene {
    /// Create a `columns` x `rows` lattice over a `width` x `height` surface.
    ///
    /// At least two columns and two rows are always used.
    pub fn new(width: u32, height: u32, columns: usize, rows: usize) -> Self {
        let columns = columns.max(2);
        let rows = rows.max(2);
        let (width, height) = (width as f32, height as f32);
        let (last_column, last_row) = ((columns - 1) as f32, (rows - 1) as f32);
        let cell = Vec2::new(width / last_column, height / last_row);

        let mut nodes = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                // Multiply before dividing so the last row and column land exactly on the edge
                let mut home = Vec2::new(
                    column as f32 * width / last_column,
                    row as f32 * height / last_row,
                );
                let interior = column > 0 && column < columns - 1 && row > 0 && row < rows - 1;
                if interior {
                    home = home + jitter(nodes.len(), cell);
                }
                nodes.push(Node {
                    home,
                    position: home,
                    velocity: Vec2::ZERO,
                });
            }
        }

        Self {
            width,
            height,
            columns,
            rows,
            nodes,
            root: None,
            alpha: ALPHA_REHEAT,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Move the root node to the pointer and wake the simulation.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.root = Some(Vec2::new(x, y));
        self.alpha = ALPHA_REHEAT;
    }

    /// Whether the next tick would still move nodes.
    pub fn is_active(&self) -> bool {
        self.alpha >= ALPHA_MIN
    }

    /// Advance the simulation one step. Returns false once the scene has cooled down.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        let alpha = self.alpha;
        for node in &mut self.nodes {
            let mut force = (node.home - node.position) * (SPRING * alpha);
            if let Some(root) = self.root {
                let away = node.position - root;
                let dist2 = away.dot(away).max(1.0);
                force = force + away * (REPULSION * alpha / dist2);
            }

            node.velocity = (node.velocity + force) * FRICTION;
            let next = node.position + node.velocity;
            node.position = Vec2::new(next.x.clamp(0.0, self.width), next.y.clamp(0.0, self.height));
        }

        self.alpha *= ALPHA_DECAY;
        true
    }

    /// Triangulate the lattice in its current state.
    pub fn mesh(&self) -> Mesh {
        let vertex = |column: usize, row: usize| {
            let index = row * self.columns + column;
            let p = self.nodes[index].position;
            Vertex::new(p.x, p.y, palette_color(index))
        };

        let mut mesh = Mesh::default();
        for row in 0..self.rows - 1 {
            for column in 0..self.columns - 1 {
                let top_left = vertex(column, row);
                let top_right = vertex(column + 1, row);
                let bottom_left = vertex(column, row + 1);
                let bottom_right = vertex(column + 1, row + 1);
                mesh.push(Triangle::new(top_left, top_right, bottom_left));
                mesh.push(Triangle::new(top_right, bottom_right, bottom_left));
            }
        }
        mesh
    }
}

/// Deterministic offset of up to a third of a cell, varied by node index.
fn jitter(index: usize, cell: Vec2) -> Vec2 {
    let hash = index.wrapping_mul(2_654_435_761) >> 7;
    let fx = (hash % 97) as f32 / 96.0 - 0.5;
    let fy = (hash / 97 % 89) as f32 / 88.0 - 0.5;
    Vec2::new(fx * cell.x, fy * cell.y) * (2.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_has_requested_node_count() {
        let scene = Scene::new(500, 500, DEFAULT_COLUMNS, DEFAULT_ROWS);
        assert_eq!(scene.node_count(), 50);
    }

    #[test]
    fn degenerate_lattice_size_is_raised() {
        let scene = Scene::new(100, 100, 0, 1);
        assert_eq!(scene.node_count(), 4);
        assert_eq!(scene.mesh().len(), 2);
    }

    #[test]
    fn mesh_has_two_triangles_per_cell() {
        let scene = Scene::new(500, 500, 10, 5);
        assert_eq!(scene.mesh().len(), 2 * 9 * 4);
    }

    #[test]
    fn corners_stay_on_surface_corners() {
        let scene = Scene::new(300, 200, 4, 3);
        let mesh = scene.mesh();
        let first = mesh.triangles()[0].vertices[0].position;
        let last = mesh.triangles()[mesh.len() - 1].vertices[1].position;
        assert_eq!(first, Vec2::new(0.0, 0.0));
        assert_eq!(last, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn nodes_rest_without_pointer() {
        let mut scene = Scene::new(200, 200, 4, 4);
        let before = scene.mesh();
        for _ in 0..10 {
            scene.tick();
        }
        assert_eq!(scene.mesh(), before);
    }

    #[test]
    fn pointer_pushes_nearby_nodes_away() {
        let mut scene = Scene::new(300, 300, 4, 4);
        let node = scene.nodes[5].position;
        scene.set_pointer(node.x - 10.0, node.y);
        scene.tick();
        assert!(scene.nodes[5].position.x > node.x);
    }

    #[test]
    fn positions_stay_within_surface() {
        let mut scene = Scene::new(100, 100, 3, 3);
        scene.set_pointer(50.0, 50.0);
        for _ in 0..50 {
            scene.tick();
        }
        for node in &scene.nodes {
            assert!((0.0..=100.0).contains(&node.position.x));
            assert!((0.0..=100.0).contains(&node.position.y));
        }
    }

    #[test]
    fn simulation_cools_down_and_reheats() {
        let mut scene = Scene::new(100, 100, 3, 3);
        let mut ticks = 0;
        while scene.tick() {
            ticks += 1;
            assert!(ticks < 10_000);
        }
        assert!(!scene.is_active());

        scene.set_pointer(10.0, 10.0);
        assert!(scene.is_active());
    }
}
