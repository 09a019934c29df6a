//! Triangle meshes in 2D screen space.
//!
//! A [`Mesh`] is an ordered list of [`Triangle`]s. Order matters: the renderer
//! paints triangles in sequence and later triangles overwrite earlier ones.

use std::path::Path;

use crate::colors::{palette_color, Color};
use crate::error::{Error, Result};
use crate::math::vec2::Vec2;

/// A screen-space point carrying a color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: Vec2::new(x, y),
            color,
        }
    }
}

/// Exactly three vertices in caller order.
///
/// The rasterizer reorders vertices on its own copy; the order stored here is
/// never changed by rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn colors(&self) -> [Color; 3] {
        self.vertices.map(|v| v.color)
    }
}

impl TryFrom<&[Vertex]> for Triangle {
    type Error = Error;

    fn try_from(vertices: &[Vertex]) -> Result<Self> {
        match vertices {
            &[a, b, c] => Ok(Self::new(a, b, c)),
            _ => Err(Error::MalformedTriangle {
                vertices: vertices.len(),
            }),
        }
    }
}

impl TryFrom<Vec<Vertex>> for Triangle {
    type Error = Error;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        Self::try_from(vertices.as_slice())
    }
}

/// An ordered collection of triangles rendered as one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Build a mesh from untyped vertex lists, such as the output of a
    /// triangulation library.
    ///
    /// Fails on the first list that does not hold exactly three vertices.
    pub fn from_polygons<I, P>(polygons: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[Vertex]>,
    {
        let triangles = polygons
            .into_iter()
            .map(|polygon| Triangle::try_from(polygon.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { triangles })
    }

    /// Load a mesh from an OBJ file.
    ///
    /// Only the `x` and `y` components of positions are used. Per-vertex colors
    /// (`v x y z r g b`, channels in 0.0-1.0) are honoured; vertices without a
    /// color take the palette entry for their index. Faces with more than three
    /// corners are triangulated.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path, &options)?;

        let mut triangles = Vec::new();
        for model in &models {
            let mesh = &model.mesh;
            let has_colors = mesh.vertex_color.len() == mesh.positions.len();

            let vertex_at = |index: u32| {
                let i = index as usize;
                let color = if has_colors {
                    Color::new(
                        mesh.vertex_color[3 * i] * 255.0,
                        mesh.vertex_color[3 * i + 1] * 255.0,
                        mesh.vertex_color[3 * i + 2] * 255.0,
                        255.0,
                    )
                } else {
                    palette_color(i)
                };
                Vertex::new(mesh.positions[3 * i], mesh.positions[3 * i + 1], color)
            };

            for face in mesh.indices.chunks(3) {
                let vertices: Vec<Vertex> = face.iter().map(|&i| vertex_at(i)).collect();
                triangles.push(Triangle::try_from(vertices)?);
            }
        }

        if triangles.is_empty() {
            log::warn!("{} contains no faces", path.display());
        }
        log::info!(
            "Loaded {} triangles from {} object(s) in {}",
            triangles.len(),
            models.len(),
            path.display()
        );

        Ok(Self { triangles })
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<T: IntoIterator<Item = Triangle>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
