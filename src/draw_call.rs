//! Draw call dispatch.

use crate::gl;

/// Primitive topology.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    /// List of triangle points.
    Triangles,

    /// Strip of connected triangles.
    TriangleStrip,
}

impl Primitive {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
        }
    }
}

/// An indexed draw call command.
///
/// Indices are read as `u32` from the element buffer of the bound mesh.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DrawCall {
    /// The primitive topology.
    pub primitive: Primitive,

    /// Number of indices to draw.
    pub count: usize,

    /// Number of instances; `1` issues a non-instanced draw.
    pub instances: usize,
}

impl DrawCall {
    /// Draw `count` indices as a list of triangles.
    pub fn triangles(count: usize) -> Self {
        DrawCall {
            primitive: Primitive::Triangles,
            count,
            instances: 1,
        }
    }

    /// Draw `count` indices as a triangle strip.
    pub fn triangle_strips(count: usize) -> Self {
        DrawCall {
            primitive: Primitive::TriangleStrip,
            count,
            instances: 1,
        }
    }

    /// Draw `count` indices as a triangle strip, `instances` times.
    pub fn triangle_strips_instanced(count: usize, instances: usize) -> Self {
        DrawCall {
            primitive: Primitive::TriangleStrip,
            count,
            instances,
        }
    }

    /// Returns `true` if the call would draw nothing.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.instances == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let call = DrawCall::triangles(6);
        assert_eq!(gl::TRIANGLES, call.primitive.as_gl_enum());
        assert_eq!(1, call.instances);

        let call = DrawCall::triangle_strips_instanced(4, 100);
        assert_eq!(Primitive::TriangleStrip, call.primitive);
        assert_eq!((4, 100), (call.count, call.instances));
        assert!(!call.is_empty());
        assert!(DrawCall::triangle_strips_instanced(4, 0).is_empty());
    }
}
