//! GLSL shader objects.

use crate::gl;
use crate::queue::{self, Destroyed, Destructor};
use std::{cmp, fmt, hash, sync};

/// The pipeline stage a shader object is compiled for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Corresponds to `GL_VERTEX_SHADER`.
    Vertex,

    /// Corresponds to `GL_FRAGMENT_SHADER`.
    Fragment,

    /// Corresponds to `GL_GEOMETRY_SHADER`.
    Geometry,

    /// Corresponds to `GL_TESS_CONTROL_SHADER`.
    TessControl,

    /// Corresponds to `GL_TESS_EVALUATION_SHADER`.
    TessEvaluation,

    /// Corresponds to `GL_COMPUTE_SHADER`.
    Compute,
}

impl Kind {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Vertex => gl::VERTEX_SHADER,
            Kind::Fragment => gl::FRAGMENT_SHADER,
            Kind::Geometry => gl::GEOMETRY_SHADER,
            Kind::TessControl => gl::TESS_CONTROL_SHADER,
            Kind::TessEvaluation => gl::TESS_EVALUATION_SHADER,
            Kind::Compute => gl::COMPUTE_SHADER,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Kind::Vertex => "vertex",
            Kind::Fragment => "fragment",
            Kind::Geometry => "geometry",
            Kind::TessControl => "tessellation control",
            Kind::TessEvaluation => "tessellation evaluation",
            Kind::Compute => "compute",
        };
        f.write_str(name)
    }
}

/// A compiled shader object.
///
/// Only needed until it has been linked into a [`Program`].
///
/// [`Program`]: ../program/struct.Program.html
#[derive(Clone)]
pub struct Shader {
    /// The OpenGL shader ID.
    id: u32,

    kind: Kind,

    /// Returns the shader back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl Shader {
    /// Constructor.
    pub(crate) fn new(id: u32, kind: Kind, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            kind,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Shader(id), tx)),
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    /// Returns the stage this shader was compiled for.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl cmp::Eq for Shader {}

impl cmp::PartialEq<Self> for Shader {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Shader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Shader(u32, Kind);

        Shader(self.id, self.kind).fmt(f)
    }
}

impl hash::Hash for Shader {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;

    #[test]
    fn kinds_map_to_stages() {
        assert_eq!(gl::VERTEX_SHADER, Kind::Vertex.as_gl_enum());
        assert_eq!(gl::COMPUTE_SHADER, Kind::Compute.as_gl_enum());
        assert_eq!("tessellation control", Kind::TessControl.to_string());
    }

    #[test]
    fn shader_released_on_drop() {
        let queue = Queue::new();
        let shader = Shader::new(2, Kind::Fragment, queue.tx());
        assert_eq!(Kind::Fragment, shader.kind());
        drop(shader);
        assert_eq!(Some(Destroyed::Shader(2)), queue.next());
    }
}
