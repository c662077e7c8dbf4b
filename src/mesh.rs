//! Indexed vertex data ready to be drawn.

use crate::buffer::{Buffer, Format, IndexBuffer};
use crate::stream::BufferStream;
use crate::vertex_array::VertexArray;
use std::fmt;

/// One attribute of a vertex layout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Attribute {
    /// Component type and count.
    pub format: Format,

    /// Byte offset of the attribute within the vertex.
    pub offset: usize,
}

/// A plain-old-data vertex type with a known attribute layout.
///
/// Attribute `i` of the slice is fed to shader input location `i`.
/// Usually implemented with the [`impl_vertex!`] macro.
///
/// [`impl_vertex!`]: ../macro.impl_vertex.html
pub trait Vertex: bytemuck::Pod {
    /// Returns the attribute layout.
    fn attributes() -> &'static [Attribute];
}

/// Static vertex and index data bound to a vertex array.
pub struct Mesh<V> {
    pub(crate) vertex_array: VertexArray,
    pub(crate) vertices: Buffer<V>,
    pub(crate) indices: IndexBuffer,
}

impl<V> Mesh<V> {
    /// Returns the vertex buffer.
    pub fn vertices(&self) -> &Buffer<V> {
        &self.vertices
    }

    /// Returns the index buffer.
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<V> AsRef<VertexArray> for Mesh<V> {
    fn as_ref(&self) -> &VertexArray {
        &self.vertex_array
    }
}

impl<V> Clone for Mesh<V> {
    fn clone(&self) -> Self {
        Mesh {
            vertex_array: self.vertex_array.clone(),
            vertices: self.vertices.clone(),
            indices: self.indices.clone(),
        }
    }
}

impl<V> fmt::Debug for Mesh<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("vertex_array", &self.vertex_array)
            .field("vertices", &self.vertices)
            .field("indices", &self.indices)
            .finish()
    }
}

/// Vertex data rewritten every frame, with static indices.
///
/// Each slot of the underlying stream sits on its own vertex buffer binding
/// port. Updating the stream through [`Factory::update_mesh_stream`] points
/// every attribute at the port of the slot just written.
///
/// [`Factory::update_mesh_stream`]: ../struct.Factory.html#method.update_mesh_stream
pub struct MeshStream<V> {
    pub(crate) vertex_array: VertexArray,
    pub(crate) vertices: BufferStream<V>,
    pub(crate) indices: IndexBuffer,
}

impl<V> MeshStream<V> {
    /// Returns the vertex stream.
    pub fn vertices(&self) -> &BufferStream<V> {
        &self.vertices
    }

    /// Returns the index buffer.
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<V> AsRef<VertexArray> for MeshStream<V> {
    fn as_ref(&self) -> &VertexArray {
        &self.vertex_array
    }
}

impl<V> fmt::Debug for MeshStream<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MeshStream")
            .field("vertex_array", &self.vertex_array)
            .field("vertices", &self.vertices)
            .field("indices", &self.indices)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
    struct Sprite {
        position: [f32; 2],
        uv: [f32; 2],
        layer: u32,
        tint: [u8; 4],
    }

    impl_vertex!(Sprite {
        position: F32(2),
        uv: F32(2),
        layer: U32(1),
        tint: U8Norm(4),
    });

    #[test]
    fn attribute_layout_follows_fields() {
        let attributes = Sprite::attributes();
        assert_eq!(4, attributes.len());
        assert_eq!(Attribute { format: Format::F32(2), offset: 0 }, attributes[0]);
        assert_eq!(8, attributes[1].offset);
        assert_eq!(Format::U32(1), attributes[2].format);
        assert_eq!(16, attributes[2].offset);
        assert_eq!(20, attributes[3].offset);
        assert!(attributes[3].format.norm());
    }
}
