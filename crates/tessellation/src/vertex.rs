use crate::geom::Color;
use crate::math::{point, Point};

use bytemuck::{Pod, Zeroable};

/// The vertex layout written by every builder.
///
/// The layout is `#[repr(C)]` and `Pod` so that buffers of vertices can be uploaded
/// to the GPU as bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Vertex2D {
    pub position: [f32; 2],
    pub tex: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex2D {
    #[inline]
    pub fn new(position: Point, color: Color) -> Self {
        Vertex2D {
            position: position.to_array(),
            tex: [0.0, 0.0],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn with_tex(position: Point, tex: Point, color: Color) -> Self {
        Vertex2D {
            position: position.to_array(),
            tex: tex.to_array(),
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        point(self.position[0], self.position[1])
    }

    #[inline]
    pub fn tex(&self) -> Point {
        point(self.tex[0], self.tex[1])
    }

    #[inline]
    pub fn color(&self) -> Color {
        Color::from(self.color)
    }
}

#[test]
fn vertex_layout() {
    assert_eq!(core::mem::size_of::<Vertex2D>(), 32);

    let v = Vertex2D::with_tex(point(1.0, 2.0), point(0.5, 1.0), Color::WHITE);
    let bytes: &[u8] = bytemuck::bytes_of(&v);
    assert_eq!(bytes.len(), 32);
    assert_eq!(v.position(), point(1.0, 2.0));
    assert_eq!(v.tex(), point(0.5, 1.0));
    assert_eq!(v.color(), Color::WHITE);
}
