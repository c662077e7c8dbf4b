//! GPU-visible pixel container optimized as a render target.

use crate::queue::{self, Destroyed, Destructor};
use crate::texture::InternalFormat;
use std::{cmp, fmt, hash, sync};

pub(crate) type Id = u32;

/// Buffer optimized as a render target.
#[derive(Clone)]
pub struct Renderbuffer {
    id: Id,
    width: u32,
    height: u32,
    format: InternalFormat,
    _destructor: sync::Arc<Destructor>,
}

impl Renderbuffer {
    /// Constructor.
    pub(crate) fn new(
        id: Id,
        width: u32,
        height: u32,
        format: InternalFormat,
        tx: queue::Sender<Destroyed>,
    ) -> Self {
        Self {
            id,
            width,
            height,
            format,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Renderbuffer(id), tx)),
        }
    }

    /// Returns the OpenGL renderbuffer ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the storage format.
    pub fn format(&self) -> InternalFormat {
        self.format
    }
}

impl fmt::Debug for Renderbuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Renderbuffer {
            id: Id,
            width: u32,
            height: u32,
        }

        Renderbuffer {
            id: self.id,
            width: self.width,
            height: self.height,
        }.fmt(f)
    }
}

impl cmp::PartialEq<Self> for Renderbuffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Renderbuffer {}

impl hash::Hash for Renderbuffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
