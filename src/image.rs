//! CPU-visible pixel container.

use crate::error::{Error, Result};
use crate::gl;
use std::path::Path;

/// An application-side image pixel layout.
///
/// Every channel is an unsigned 8-bit integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ImageFormat {
    /// Pick the layout from the file extension when loading.
    Deduce,

    /// `[R; R; R; R; R, ...]`
    R,

    /// `[R, G; R, G; R, ...]`
    Rg,

    /// `[R, G, B; R, G, ...]`
    Rgb,

    /// `[R, G, B, A; R, ...]`
    Rgba,

    /// `[B, G, R; B, G, ...]`
    Bgr,

    /// `[B, G, R, A; B, ...]`
    Bgra,
}

impl ImageFormat {
    /// Returns the equivalent OpenGL pixel format enumeration constant.
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            ImageFormat::R => gl::RED,
            ImageFormat::Rg => gl::RG,
            ImageFormat::Rgb => gl::RGB,
            ImageFormat::Rgba | ImageFormat::Deduce => gl::RGBA,
            ImageFormat::Bgr => gl::BGR,
            ImageFormat::Bgra => gl::BGRA,
        }
    }

    /// Returns the number of channels per pixel.
    pub fn channels(self) -> usize {
        match self {
            ImageFormat::R => 1,
            ImageFormat::Rg => 2,
            ImageFormat::Rgb | ImageFormat::Bgr => 3,
            ImageFormat::Rgba | ImageFormat::Bgra | ImageFormat::Deduce => 4,
        }
    }

    /// Picks a layout from a file extension.
    ///
    /// PNG files load with alpha, JPEG files without, and bitmaps in their
    /// native BGR order.
    pub fn deduce<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Rgba),
            "jpg" | "jpeg" => Some(ImageFormat::Rgb),
            "bmp" => Some(ImageFormat::Bgr),
            _ => None,
        }
    }
}

/// A decoded 2D image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    /// Tightly packed pixel rows, bottom row first when flipped on load.
    pub data: Vec<u8>,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Channel layout of `data`.
    pub format: ImageFormat,
}

impl Image {
    /// Decodes an image file.
    ///
    /// With `ImageFormat::Deduce` the layout comes from the file extension.
    /// Pixels are converted to the requested layout. When `flip_vertically`
    /// is set the first row of `data` is the bottom row of the picture, which
    /// is what OpenGL texture uploads expect.
    pub fn load<P: AsRef<Path>>(
        path: P,
        format: ImageFormat,
        flip_vertically: bool,
    ) -> Result<Self> {
        let path = path.as_ref();
        let format = match format {
            ImageFormat::Deduce => match ImageFormat::deduce(path) {
                Some(format) => format,
                None => {
                    error!("Unable to deduce image format from {}", path.display());
                    return Err(Error::UnknownImageFormat(path.to_path_buf()));
                }
            },
            format => format,
        };

        let decoded = ::image::open(path).map_err(|source| {
            error!("Unable to open {}: {}", path.display(), source);
            Error::Image { path: path.to_path_buf(), source }
        })?;
        let decoded = if flip_vertically { decoded.flipv() } else { decoded };

        let (width, height, mut data) = match format {
            ImageFormat::R => {
                let pixels = decoded.to_luma8();
                (pixels.width(), pixels.height(), pixels.into_raw())
            }
            ImageFormat::Rg => {
                let pixels = decoded.to_luma_alpha8();
                (pixels.width(), pixels.height(), pixels.into_raw())
            }
            ImageFormat::Rgb | ImageFormat::Bgr => {
                let pixels = decoded.to_rgb8();
                (pixels.width(), pixels.height(), pixels.into_raw())
            }
            ImageFormat::Rgba | ImageFormat::Bgra | ImageFormat::Deduce => {
                let pixels = decoded.to_rgba8();
                (pixels.width(), pixels.height(), pixels.into_raw())
            }
        };
        swap_red_blue(&mut data, format);

        debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            width,
            height,
            format,
        );
        Ok(Image { data, width, height, format })
    }

    /// Wraps already decoded pixels.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32, format: ImageFormat) -> Self {
        Image { data, width, height, format }
    }

    /// Returns the width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of bytes `data` must hold.
    pub fn required_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.channels()
    }

    /// Checks that `data` covers the stated size and layout.
    pub(crate) fn check_len(&self) -> Result<()> {
        let expected = self.required_len();
        if self.data.len() < expected {
            error!(
                "Image data holds {} bytes, {}x{} {:?} needs {}",
                self.data.len(),
                self.width,
                self.height,
                self.format,
                expected,
            );
            Err(Error::ImageData { expected, found: self.data.len() })
        } else {
            Ok(())
        }
    }
}

/// Reorders RGB(A) pixels into BGR(A) in place; other layouts are untouched.
fn swap_red_blue(data: &mut [u8], format: ImageFormat) {
    let stride = match format {
        ImageFormat::Bgr => 3,
        ImageFormat::Bgra => 4,
        _ => return,
    };
    for pixel in data.chunks_exact_mut(stride) {
        pixel.swap(0, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduce_from_extension() {
        assert_eq!(Some(ImageFormat::Rgba), ImageFormat::deduce("sprites/player.png"));
        assert_eq!(Some(ImageFormat::Rgb), ImageFormat::deduce("photo.JPG"));
        assert_eq!(Some(ImageFormat::Rgb), ImageFormat::deduce("photo.jpeg"));
        assert_eq!(Some(ImageFormat::Bgr), ImageFormat::deduce("legacy.bmp"));
        assert_eq!(None, ImageFormat::deduce("scene.tga"));
        assert_eq!(None, ImageFormat::deduce("no_extension"));
    }

    #[test]
    fn channel_counts() {
        assert_eq!(1, ImageFormat::R.channels());
        assert_eq!(2, ImageFormat::Rg.channels());
        assert_eq!(3, ImageFormat::Bgr.channels());
        assert_eq!(4, ImageFormat::Bgra.channels());
    }

    #[test]
    fn swizzles_only_bgr_layouts() {
        let mut bgr = vec![1, 2, 3, 4, 5, 6];
        swap_red_blue(&mut bgr, ImageFormat::Bgr);
        assert_eq!(vec![3, 2, 1, 6, 5, 4], bgr);

        let mut bgra = vec![1, 2, 3, 255];
        swap_red_blue(&mut bgra, ImageFormat::Bgra);
        assert_eq!(vec![3, 2, 1, 255], bgra);

        let mut rgb = vec![1, 2, 3];
        swap_red_blue(&mut rgb, ImageFormat::Rgb);
        assert_eq!(vec![1, 2, 3], rgb);
    }

    #[test]
    fn short_raw_data_is_rejected() {
        let image = Image::from_raw(vec![0; 11], 2, 2, ImageFormat::Rgb);
        assert_eq!(12, image.required_len());
        match image.check_len() {
            Err(Error::ImageData { expected: 12, found: 11 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(Image::from_raw(vec![0; 4], 2, 2, ImageFormat::R).check_len().is_ok());
    }

    #[test]
    fn unknown_extension_is_an_error() {
        match Image::load("level.xyz", ImageFormat::Deduce, true) {
            Err(Error::UnknownImageFormat(path)) => assert_eq!(Path::new("level.xyz"), path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        match Image::load("does/not/exist.png", ImageFormat::Deduce, true) {
            Err(Error::Image { path, .. }) => assert_eq!(Path::new("does/not/exist.png"), path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn loads_and_flips_png() {
        let path = std::env::temp_dir().join("orion_loads_and_flips.png");
        let mut picture = ::image::RgbaImage::new(1, 2);
        picture.put_pixel(0, 0, ::image::Rgba([255, 0, 0, 255]));
        picture.put_pixel(0, 1, ::image::Rgba([0, 0, 255, 255]));
        picture.save(&path).unwrap();

        let flipped = Image::load(&path, ImageFormat::Deduce, true).unwrap();
        assert_eq!((1, 2), flipped.dimensions());
        assert_eq!(ImageFormat::Rgba, flipped.format);
        assert_eq!(&[0, 0, 255, 255, 255, 0, 0, 255][..], &flipped.data[..]);

        let bgr = Image::load(&path, ImageFormat::Bgr, false).unwrap();
        assert_eq!(&[0, 0, 255, 255, 0, 0][..], &bgr.data[..]);

        let _ = std::fs::remove_file(&path);
    }
}
