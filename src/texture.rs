//! GPU-visible pixel containers.

use crate::gl;
use crate::queue::{self, Destroyed, Destructor};
use std::{cmp, fmt, hash, sync};

/// OpenGL texture ID type.
pub(crate) type Id = u32;

/// GPU-side storage format of texture and renderbuffer data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InternalFormat {
    /// Corresponds to `GL_R8`.
    R8,

    /// Corresponds to `GL_RG8`.
    Rg8,

    /// Corresponds to `GL_RGB8`.
    Rgb8,

    /// Corresponds to `GL_RGBA8`.
    Rgba8,

    /// Corresponds to `GL_SRGB8`.
    Srgb8,

    /// Corresponds to `GL_SRGB8_ALPHA8`.
    Srgba8,

    /// Corresponds to `GL_R16F`.
    R16F,

    /// Corresponds to `GL_RG16F`.
    Rg16F,

    /// Corresponds to `GL_RGB16F`.
    Rgb16F,

    /// Corresponds to `GL_RGBA16F`.
    Rgba16F,

    /// Corresponds to `GL_R32F`.
    R32F,

    /// Corresponds to `GL_RG32F`.
    Rg32F,

    /// Corresponds to `GL_RGB32F`.
    Rgb32F,

    /// Corresponds to `GL_RGBA32F`.
    Rgba32F,

    /// Corresponds to `GL_DEPTH_COMPONENT24`.
    Depth24,

    /// Corresponds to `GL_DEPTH24_STENCIL8`.
    Depth24Stencil8,
}

impl InternalFormat {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            InternalFormat::R8 => gl::R8,
            InternalFormat::Rg8 => gl::RG8,
            InternalFormat::Rgb8 => gl::RGB8,
            InternalFormat::Rgba8 => gl::RGBA8,
            InternalFormat::Srgb8 => gl::SRGB8,
            InternalFormat::Srgba8 => gl::SRGB8_ALPHA8,

            InternalFormat::R16F => gl::R16F,
            InternalFormat::Rg16F => gl::RG16F,
            InternalFormat::Rgb16F => gl::RGB16F,
            InternalFormat::Rgba16F => gl::RGBA16F,

            InternalFormat::R32F => gl::R32F,
            InternalFormat::Rg32F => gl::RG32F,
            InternalFormat::Rgb32F => gl::RGB32F,
            InternalFormat::Rgba32F => gl::RGBA32F,

            InternalFormat::Depth24 => gl::DEPTH_COMPONENT24,
            InternalFormat::Depth24Stencil8 => gl::DEPTH24_STENCIL8,
        }
    }
}

/// Anything that can be bound to a texture unit.
pub trait Texture {
    /// Returns the OpenGL texture ID.
    #[doc(hidden)]
    fn texture_id(&self) -> u32;
}

/// GPU-visible 2D texture.
#[derive(Clone)]
pub struct Texture2 {
    /// The OpenGL texture ID.
    id: Id,

    width: u32,
    height: u32,
    levels: u32,
    format: InternalFormat,

    /// Returns the texture back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,
}

impl Texture2 {
    pub(crate) fn new(
        id: Id,
        width: u32,
        height: u32,
        levels: u32,
        format: InternalFormat,
        tx: queue::Sender<Destroyed>,
    ) -> Self {
        Texture2 {
            id,
            width,
            height,
            levels,
            format,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Texture(id), tx)),
        }
    }

    /// Returns the OpenGL texture ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the internal pixel format.
    pub fn format(&self) -> InternalFormat {
        self.format
    }

    /// Returns the width of the texture in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of mipmap levels.
    pub fn levels(&self) -> u32 {
        self.levels
    }
}

impl Texture for Texture2 {
    fn texture_id(&self) -> u32 {
        self.id
    }
}

impl cmp::Eq for Texture2 {}

impl cmp::PartialEq<Self> for Texture2 {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Texture2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Texture2(u32, u32, u32);

        Texture2(self.id, self.width, self.height).fmt(f)
    }
}

impl hash::Hash for Texture2 {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// GPU-visible array of equally sized 2D layers.
#[derive(Clone)]
pub struct ArrayTexture2 {
    id: Id,
    width: u32,
    height: u32,
    layers: u32,
    format: InternalFormat,
    _destructor: sync::Arc<Destructor>,
}

impl ArrayTexture2 {
    pub(crate) fn new(
        id: Id,
        width: u32,
        height: u32,
        layers: u32,
        format: InternalFormat,
        tx: queue::Sender<Destroyed>,
    ) -> Self {
        ArrayTexture2 {
            id,
            width,
            height,
            layers,
            format,
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Texture(id), tx)),
        }
    }

    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the internal pixel format.
    pub fn format(&self) -> InternalFormat {
        self.format
    }

    /// Returns the width of each layer in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of each layer in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of layers.
    pub fn layers(&self) -> u32 {
        self.layers
    }
}

impl Texture for ArrayTexture2 {
    fn texture_id(&self) -> u32 {
        self.id
    }
}

impl cmp::Eq for ArrayTexture2 {}

impl cmp::PartialEq<Self> for ArrayTexture2 {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for ArrayTexture2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct ArrayTexture2(u32, u32, u32, u32);

        ArrayTexture2(self.id, self.width, self.height, self.layers).fmt(f)
    }
}

impl hash::Hash for ArrayTexture2 {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Number of mipmap levels in a full chain for the given size.
pub(crate) fn mip_levels(width: u32, height: u32) -> u32 {
    let largest = width.max(height).max(1);
    32 - largest.leading_zeros()
}

/// Layout of a sprite sheet cut into square cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SpriteGrid {
    pub cell: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteGrid {
    /// Returns `None` if the sheet holds no whole cell.
    pub fn new(width: u32, height: u32, cell: u32) -> Option<Self> {
        if cell == 0 {
            return None;
        }
        let (columns, rows) = (width / cell, height / cell);
        if columns == 0 || rows == 0 {
            None
        } else {
            Some(SpriteGrid { cell, columns, rows })
        }
    }

    pub fn layers(&self) -> u32 {
        self.columns * self.rows
    }

    /// Texel origin of cell `index` in a bottom-up (flipped) sheet.
    ///
    /// Cells are numbered left to right, top to bottom as the picture is
    /// seen, so the row is counted down from the top of the texture.
    pub fn origin(&self, index: u32) -> (u32, u32) {
        let column = index % self.columns;
        let row = self.rows - 1 - index / self.columns;
        (column * self.cell, row * self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;

    #[test]
    fn full_mip_chain() {
        assert_eq!(1, mip_levels(1, 1));
        assert_eq!(1, mip_levels(0, 0));
        assert_eq!(9, mip_levels(256, 256));
        assert_eq!(10, mip_levels(512, 300));
        assert_eq!(10, mip_levels(3, 1000));
    }

    #[test]
    fn sprite_grid_counts_whole_cells() {
        let grid = SpriteGrid::new(64, 48, 16).unwrap();
        assert_eq!((4, 3), (grid.columns, grid.rows));
        assert_eq!(12, grid.layers());
        assert_eq!(None, SpriteGrid::new(8, 64, 16));
        assert_eq!(None, SpriteGrid::new(64, 64, 0));
    }

    #[test]
    fn sprite_cells_read_top_down() {
        let grid = SpriteGrid::new(64, 48, 16).unwrap();
        assert_eq!((0, 32), grid.origin(0));
        assert_eq!((48, 32), grid.origin(3));
        assert_eq!((0, 16), grid.origin(4));
        assert_eq!((48, 0), grid.origin(11));
    }

    #[test]
    fn textures_release_on_drop() {
        let queue = Queue::new();
        let texture = Texture2::new(3, 16, 8, mip_levels(16, 8), InternalFormat::Rgba8, queue.tx());
        assert_eq!(5, texture.levels());
        assert_eq!(3, texture.texture_id());
        drop(texture);
        let array = ArrayTexture2::new(4, 16, 16, 6, InternalFormat::R8, queue.tx());
        drop(array);
        let released: Vec<_> = queue.drain().collect();
        assert_eq!(vec![Destroyed::Texture(3), Destroyed::Texture(4)], released);
    }
}
