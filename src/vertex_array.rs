//! Vertex array objects.

use crate::queue::{self, Destroyed, Destructor};
use std::{cmp, fmt, hash, sync};

/// The OpenGL VAO ID type.
pub(crate) type Id = u32;

/// Corresponds to an OpenGL vertex array object.
///
/// Created and configured by the factory as part of a [`Mesh`] or
/// [`MeshStream`].
///
/// [`Mesh`]: ../mesh/struct.Mesh.html
/// [`MeshStream`]: ../mesh/struct.MeshStream.html
#[derive(Clone)]
pub struct VertexArray {
    /// The OpenGL VAO ID.
    id: Id,

    /// Returns the VAO back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl VertexArray {
    /// Constructor.
    pub(crate) fn new(id: Id, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::VertexArray(id), tx)),
        }
    }

    /// Returns the OpenGL VAO ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }
}

impl AsRef<VertexArray> for VertexArray {
    fn as_ref(&self) -> &VertexArray {
        self
    }
}

impl cmp::Eq for VertexArray {}

impl cmp::PartialEq<Self> for VertexArray {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for VertexArray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct VertexArray(u32);

        VertexArray(self.id).fmt(f)
    }
}

impl hash::Hash for VertexArray {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
