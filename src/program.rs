//! GLSL programs and their uniform values.

use crate::gl;
use crate::queue::{self, Destroyed, Destructor};
use std::{cmp, fmt, hash, sync};

/// A compiled and linked shader program.
#[derive(Clone)]
pub struct Program {
    /// The OpenGL program ID.
    id: u32,

    /// Returns the program back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl Program {
    /// Constructor.
    pub(crate) fn new(id: u32, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Program(id), tx)),
        }
    }

    /// Returns the GLSL program ID.
    pub(crate) fn id(&self) -> u32 {
        self.id
    }
}

impl cmp::Eq for Program {}

impl cmp::PartialEq<Self> for Program {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Program(u32);

        Program(self.id).fmt(f)
    }
}

impl hash::Hash for Program {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

/// A value that can be written to a uniform location of a program.
///
/// Values are written with `glProgramUniform*`, so the program need not be
/// bound.
pub trait Uniform {
    /// Writes `self` to `location` of `program`.
    #[doc(hidden)]
    fn set(&self, backend: &gl::Backend, program: u32, location: i32);
}

impl Uniform for i32 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_1i(program, location, *self);
    }
}

impl Uniform for u32 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_1ui(program, location, *self);
    }
}

/// Booleans are uploaded as `0` or `1`.
impl Uniform for bool {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_1i(program, location, *self as i32);
    }
}

impl Uniform for f32 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_fv(program, location, &[*self]);
    }
}

impl Uniform for f64 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_1d(program, location, *self);
    }
}

impl Uniform for [f32; 2] {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_fv(program, location, &self[..]);
    }
}

impl Uniform for [f32; 3] {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_fv(program, location, &self[..]);
    }
}

impl Uniform for [f32; 4] {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_fv(program, location, &self[..]);
    }
}

/// Column-major 4x4 matrix.
impl Uniform for [[f32; 4]; 4] {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_matrix_4fv(program, location, bytemuck::cast_ref(self));
    }
}

impl Uniform for glam::Vec2 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        self.to_array().set(backend, program, location);
    }
}

impl Uniform for glam::Vec3 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        self.to_array().set(backend, program, location);
    }
}

impl Uniform for glam::Vec4 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        self.to_array().set(backend, program, location);
    }
}

impl Uniform for glam::Mat4 {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        backend.program_uniform_matrix_4fv(program, location, &self.to_cols_array());
    }
}

impl<'a, U: Uniform + ?Sized> Uniform for &'a U {
    fn set(&self, backend: &gl::Backend, program: u32, location: i32) {
        (**self).set(backend, program, location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;

    #[test]
    fn program_released_once() {
        let queue = Queue::new();
        let program = Program::new(5, queue.tx());
        let other = program.clone();
        assert_eq!(program, other);
        assert_eq!("Program(5)", format!("{:?}", other));
        drop(program);
        drop(other);
        let released: Vec<_> = queue.drain().collect();
        assert_eq!(vec![Destroyed::Program(5)], released);
    }
}
