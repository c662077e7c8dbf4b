//! Library error type.

use crate::shader;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying an [`Error`].
///
/// [`Error`]: enum.Error.html
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while creating windows or GPU objects.
#[derive(Debug, Error)]
pub enum Error {
    /// The window or its OpenGL context could not be created.
    #[error("window creation failed: {0}")]
    Window(#[from] glutin::CreationError),

    /// The OpenGL context could not be made current or presented.
    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::ContextError),

    /// A shader failed to compile.
    #[error("{kind} shader compilation failed:\n{log}")]
    ShaderCompile {
        /// The shader stage.
        kind: shader::Kind,

        /// The driver's info log.
        log: String,
    },

    /// A program failed to link.
    #[error("shader linkage failed:\n{log}")]
    ProgramLink {
        /// The driver's info log.
        log: String,
    },

    /// An image file could not be opened or decoded.
    #[error("unable to open {}: {source}", path.display())]
    Image {
        /// The file that failed to load.
        path: PathBuf,

        /// The decoder error.
        source: ::image::ImageError,
    },

    /// No pixel format was given and none could be deduced from the path.
    #[error("unable to deduce image format from {}", .0.display())]
    UnknownImageFormat(PathBuf),

    /// A texture layer does not match the size of the first layer.
    #[error("image {index} is {found:?}, expected {expected:?}")]
    ImageDimensions {
        /// Index of the offending image.
        index: usize,

        /// Width and height of the first image.
        expected: (u32, u32),

        /// Width and height of the offending image.
        found: (u32, u32),
    },

    /// Pixel data is shorter than its stated size and layout require.
    #[error("image data holds {found} bytes, expected {expected}")]
    ImageData {
        /// Bytes needed for the stated width, height and format.
        expected: usize,

        /// Bytes present.
        found: usize,
    },

    /// An array texture was requested from an empty list of images.
    #[error("no images given for array texture")]
    NoImages,

    /// A sprite sheet cannot be cut into cells of the requested size.
    #[error("a {width}x{height} sprite sheet has no {cell}x{cell} cells")]
    InvalidSpriteSheet {
        /// Sheet width in pixels.
        width: u32,

        /// Sheet height in pixels.
        height: u32,

        /// Requested cell edge length in pixels.
        cell: u32,
    },

    /// A window icon was rejected.
    #[error("invalid window icon: {0}")]
    Icon(String),

    /// The cursor could not be grabbed or released.
    #[error("cursor grab failed: {0}")]
    Cursor(String),
}
