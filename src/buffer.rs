//! GPU buffer management.

use crate::queue::{self, Destroyed, Destructor};
use std::{cmp, fmt, hash, marker, mem, sync};

#[doc(inline)]
pub use self::format::Format;

/// OpenGL buffer ID type.
pub(crate) type Id = u32;

/// An immutable, GPU-allocated array of `T`.
///
/// The contents are fixed at creation. Use a [`BufferStream`] for data that
/// changes every frame.
///
/// [`BufferStream`]: ../stream/struct.BufferStream.html
pub struct Buffer<T> {
    /// The OpenGL buffer ID.
    id: Id,

    /// The number of `T` elements held by the buffer.
    len: usize,

    /// Returns the buffer back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,

    _marker: marker::PhantomData<fn() -> T>,
}

/// A buffer of `u32` vertex indices.
pub type IndexBuffer = Buffer<u32>;

impl<T> Buffer<T> {
    /// Constructor.
    pub(crate) fn new(id: Id, len: usize, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            len,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Buffer(id), tx)),
            _marker: marker::PhantomData,
        }
    }

    /// Returns the OpenGL buffer ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the number of elements this buffer contains.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bytes this buffer contains.
    pub fn size_bytes(&self) -> usize {
        self.len * mem::size_of::<T>()
    }
}

impl<T> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            len: self.len,
            _destructor: self._destructor.clone(),
            _marker: marker::PhantomData,
        }
    }
}

impl<T> cmp::PartialEq<Self> for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> cmp::Eq for Buffer<T> {}

impl<T> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Buffer {
            id: Id,
            len: usize,
        }

        Buffer {
            id: self.id,
            len: self.len,
        }.fmt(f)
    }
}

impl<T> hash::Hash for Buffer<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Indexed binding points a buffer can be attached to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Target {
    /// Corresponds to `GL_UNIFORM_BUFFER`.
    Uniform,

    /// Corresponds to `GL_SHADER_STORAGE_BUFFER`.
    Storage,
}

impl Target {
    /// Returns the equivalent OpenGL target enumeration constant.
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Target::Uniform => crate::gl::UNIFORM_BUFFER,
            Target::Storage => crate::gl::SHADER_STORAGE_BUFFER,
        }
    }
}

/// Vertex attribute format descriptors.
pub mod format {
    use crate::gl;

    /// Describes the component type and count of one vertex attribute.
    ///
    /// The payload is the number of components, between 1 and 4.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Format {
        /// 32-bit floating point number.
        F32(u8),

        /// Signed 8-bit integer.
        I8(u8),

        /// Signed normalized 8-bit rational.
        I8Norm(u8),

        /// Signed 16-bit integer.
        I16(u8),

        /// Signed normalized 16-bit rational.
        I16Norm(u8),

        /// Signed 32-bit integer.
        I32(u8),

        /// Unsigned 8-bit integer.
        U8(u8),

        /// Unsigned normalized 8-bit rational.
        U8Norm(u8),

        /// Unsigned 16-bit integer.
        U16(u8),

        /// Unsigned normalized 16-bit rational.
        U16Norm(u8),

        /// Unsigned 32-bit integer.
        U32(u8),
    }

    impl Format {
        /// Returns the corresponding GL data type enumeration constant.
        pub(crate) fn gl_data_type(self) -> u32 {
            match self {
                Format::F32(_) => gl::FLOAT,
                Format::I8(_) | Format::I8Norm(_) => gl::BYTE,
                Format::I16(_) | Format::I16Norm(_) => gl::SHORT,
                Format::I32(_) => gl::INT,
                Format::U8(_) | Format::U8Norm(_) => gl::UNSIGNED_BYTE,
                Format::U16(_) | Format::U16Norm(_) => gl::UNSIGNED_SHORT,
                Format::U32(_) => gl::UNSIGNED_INT,
            }
        }

        /// Returns true if this is a normalized type.
        pub fn norm(self) -> bool {
            match self {
                Format::I8Norm(_)
                | Format::I16Norm(_)
                | Format::U8Norm(_)
                | Format::U16Norm(_) => true,
                _ => false,
            }
        }

        /// Returns true if shaders read this format as integers.
        pub fn integer(self) -> bool {
            match self {
                Format::I8(_)
                | Format::I16(_)
                | Format::I32(_)
                | Format::U8(_)
                | Format::U16(_)
                | Format::U32(_) => true,
                _ => false,
            }
        }

        /// Returns the number of components.
        ///
        /// Counts outside `1 ..= 4` are clamped into range.
        pub fn size(self) -> usize {
            let size = match self {
                Format::F32(size)
                | Format::I8(size)
                | Format::I8Norm(size)
                | Format::I16(size)
                | Format::I16Norm(size)
                | Format::I32(size)
                | Format::U8(size)
                | Format::U8Norm(size)
                | Format::U16(size)
                | Format::U16Norm(size)
                | Format::U32(size) => size,
            };
            size.max(1).min(4) as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;

    #[test]
    fn last_clone_releases_buffer() {
        let queue = Queue::new();
        let buffer: Buffer<[f32; 3]> = Buffer::new(4, 10, queue.tx());
        assert_eq!(10, buffer.len());
        assert_eq!(120, buffer.size_bytes());

        let clone = buffer.clone();
        assert_eq!(buffer, clone);
        drop(buffer);
        assert_eq!(None, queue.next());
        drop(clone);
        assert_eq!(Some(Destroyed::Buffer(4)), queue.next());
    }

    #[test]
    fn format_classification() {
        assert!(Format::U8Norm(4).norm());
        assert!(!Format::U8Norm(4).integer());
        assert!(Format::U16(2).integer());
        assert!(!Format::F32(3).integer());
        assert!(!Format::F32(3).norm());
        assert_eq!(crate::gl::UNSIGNED_SHORT, Format::U16Norm(2).gl_data_type());
    }

    #[test]
    fn format_size_is_clamped() {
        assert_eq!(3, Format::F32(3).size());
        assert_eq!(1, Format::I8(0).size());
        assert_eq!(4, Format::U32(9).size());
    }
}
