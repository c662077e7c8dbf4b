//! Render targets.

use crate::gl;
use crate::queue::{self, Destroyed, Destructor};
use crate::renderbuffer::Renderbuffer;
use crate::texture::Texture2;
use arrayvec::ArrayVec;
use std::{cmp, fmt, hash, sync};

/// The maximum number of color attachments permitted by the crate.
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

/// Color attachments plus depth and depth-stencil.
const MAX_ATTACHMENTS: usize = MAX_COLOR_ATTACHMENTS + 2;

pub(crate) type Id = u32;

/// Framebuffer attachment point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Attachment {
    /// Corresponds to `GL_COLOR_ATTACHMENTi`.
    Color(u32),

    /// Corresponds to `GL_DEPTH_ATTACHMENT`.
    Depth,

    /// Corresponds to `GL_DEPTH_STENCIL_ATTACHMENT`.
    DepthStencil,
}

impl Attachment {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Attachment::Color(n) => gl::COLOR_ATTACHMENT0 + n,
            Attachment::Depth => gl::DEPTH_ATTACHMENT,
            Attachment::DepthStencil => gl::DEPTH_STENCIL_ATTACHMENT,
        }
    }
}

/// A resource held alive by a framebuffer attachment.
#[derive(Clone, Debug, PartialEq)]
pub enum Attached {
    /// Render to renderbuffer.
    Renderbuffer(Renderbuffer),

    /// Render to 2D texture.
    Texture2(Texture2),
}

/// Specifies whether the color buffer should be cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClearColor {
    /// Clear to the given RGBA values.
    Yes {
        /// Red channel.
        r: f32,
        /// Green channel.
        g: f32,
        /// Blue channel.
        b: f32,
        /// Alpha channel.
        a: f32,
    },

    /// Leave the color buffer alone.
    #[default]
    No,
}

/// Specifies whether the depth buffer should be cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClearDepth {
    /// Clear to the given depth.
    Yes {
        /// Depth value, usually `1.0`.
        z: f32,
    },

    /// Leave the depth buffer alone.
    #[default]
    No,
}

/// Specifies whether the stencil buffer should be cleared.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ClearStencil {
    /// Clear to the given stencil value.
    Yes {
        /// Stencil value.
        s: i32,
    },

    /// Leave the stencil buffer alone.
    #[default]
    No,
}

/// A framebuffer clear operation.
///
/// The default clears nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClearOp {
    /// Color buffer clear.
    pub color: ClearColor,

    /// Depth buffer clear.
    pub depth: ClearDepth,

    /// Stencil buffer clear.
    pub stencil: ClearStencil,
}

impl ClearOp {
    /// Clears color to `[r, g, b, a]` and depth to `1.0`.
    pub fn color_depth(r: f32, g: f32, b: f32, a: f32) -> Self {
        ClearOp {
            color: ClearColor::Yes { r, g, b, a },
            depth: ClearDepth::Yes { z: 1.0 },
            stencil: ClearStencil::No,
        }
    }
}

/// A framebuffer object.
#[derive(Clone)]
pub struct Framebuffer {
    /// The OpenGL framebuffer ID.
    id: Id,

    /// Size of the most recent attachment, or of the window.
    width: u32,
    height: u32,

    /// Attached resources.
    attachments: ArrayVec<(Attachment, Attached), MAX_ATTACHMENTS>,

    /// Absent for the implicit framebuffer.
    _destructor: Option<sync::Arc<Destructor>>,
}

impl Framebuffer {
    /// Constructor.
    ///
    /// The caller is responsible for setting up the framebuffer.
    pub(crate) fn new(id: Id, tx: queue::Sender<Destroyed>) -> Self {
        Self {
            id,
            width: 0,
            height: 0,
            attachments: ArrayVec::new(),
            _destructor: Some(sync::Arc::new(Destructor::new(Destroyed::Framebuffer(id), tx))),
        }
    }

    /// Returns the window's default framebuffer with the given size.
    pub fn implicit(width: u32, height: u32) -> Self {
        Self {
            id: 0,
            width,
            height,
            attachments: ArrayVec::new(),
            _destructor: None,
        }
    }

    /// Returns the OpenGL framebuffer ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns `true` for the window's default framebuffer.
    pub fn is_implicit(&self) -> bool {
        self.id == 0
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the resource at the given attachment point.
    pub fn attachment(&self, attachment: Attachment) -> Option<&Attached> {
        self.attachments
            .iter()
            .find(|(point, _)| *point == attachment)
            .map(|(_, attached)| attached)
    }

    /// Records an attachment, replacing whatever used the same point.
    ///
    /// Returns `false` if the attachment point is out of range.
    pub(crate) fn attach(
        &mut self,
        attachment: Attachment,
        attached: Attached,
        size: (u32, u32),
    ) -> bool {
        if let Attachment::Color(n) = attachment {
            if n as usize >= MAX_COLOR_ATTACHMENTS {
                return false;
            }
        }
        self.attachments.retain(|(point, _)| *point != attachment);
        self.attachments.push((attachment, attached));
        self.width = size.0;
        self.height = size.1;
        true
    }

    /// Returns the color attachment points in ascending order.
    pub(crate) fn draw_buffers(&self) -> ArrayVec<u32, MAX_COLOR_ATTACHMENTS> {
        let mut buffers: ArrayVec<u32, MAX_COLOR_ATTACHMENTS> = self.attachments
            .iter()
            .filter(|(point, _)| matches!(point, Attachment::Color(_)))
            .map(|(point, _)| point.as_gl_enum())
            .collect();
        buffers.sort_unstable();
        buffers
    }

    pub(crate) fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Framebuffer<'a> {
            id: Id,
            size: (u32, u32),
            attachments: &'a [(Attachment, Attached)],
        }

        Framebuffer {
            id: self.id,
            size: (self.width, self.height),
            attachments: &self.attachments,
        }.fmt(f)
    }
}

impl cmp::PartialEq<Self> for Framebuffer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Framebuffer {}

impl hash::Hash for Framebuffer {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;
    use crate::texture::InternalFormat;

    #[test]
    fn implicit_framebuffer_is_not_released() {
        let queue = Queue::<Destroyed>::new();
        let framebuffer = Framebuffer::implicit(640, 480);
        assert!(framebuffer.is_implicit());
        assert_eq!((640, 480), (framebuffer.width(), framebuffer.height()));
        drop(framebuffer);
        assert_eq!(None, queue.next());
    }

    #[test]
    fn attachments_replace_and_keep_resources_alive() {
        let queue = Queue::new();
        let mut framebuffer = Framebuffer::new(1, queue.tx());
        let first = Renderbuffer::new(7, 32, 32, InternalFormat::Rgba8, queue.tx());
        let second = Renderbuffer::new(8, 64, 16, InternalFormat::Rgba8, queue.tx());

        assert!(framebuffer.attach(Attachment::Color(0), Attached::Renderbuffer(first), (32, 32)));
        assert!(framebuffer.attach(Attachment::Color(0), Attached::Renderbuffer(second), (64, 16)));
        assert_eq!((64, 16), (framebuffer.width(), framebuffer.height()));
        assert_eq!(Some(Destroyed::Renderbuffer(7)), queue.next());
        assert_eq!(None, queue.next());

        drop(framebuffer);
        let released: Vec<_> = queue.drain().collect();
        assert!(released.contains(&Destroyed::Framebuffer(1)));
        assert!(released.contains(&Destroyed::Renderbuffer(8)));
    }

    #[test]
    fn draw_buffers_list_colors_in_order() {
        let queue = Queue::new();
        let mut framebuffer = Framebuffer::new(1, queue.tx());
        let depth = Renderbuffer::new(2, 8, 8, InternalFormat::Depth24, queue.tx());
        let color = Renderbuffer::new(3, 8, 8, InternalFormat::Rgba8, queue.tx());
        let normal = Renderbuffer::new(4, 8, 8, InternalFormat::Rgba16F, queue.tx());

        framebuffer.attach(Attachment::Depth, Attached::Renderbuffer(depth), (8, 8));
        framebuffer.attach(Attachment::Color(2), Attached::Renderbuffer(normal), (8, 8));
        framebuffer.attach(Attachment::Color(0), Attached::Renderbuffer(color), (8, 8));
        assert_eq!(
            &[gl::COLOR_ATTACHMENT0, gl::COLOR_ATTACHMENT2][..],
            &framebuffer.draw_buffers()[..],
        );
        assert!(framebuffer.attachment(Attachment::DepthStencil).is_none());
    }

    #[test]
    fn out_of_range_color_attachment_is_rejected() {
        let queue = Queue::new();
        let mut framebuffer = Framebuffer::new(1, queue.tx());
        let color = Renderbuffer::new(3, 8, 8, InternalFormat::Rgba8, queue.tx());
        let point = Attachment::Color(MAX_COLOR_ATTACHMENTS as u32);
        assert!(!framebuffer.attach(point, Attached::Renderbuffer(color), (8, 8)));
        assert_eq!(0, framebuffer.width());
    }

    #[test]
    fn default_clear_does_nothing() {
        let op = ClearOp::default();
        assert_eq!(ClearColor::No, op.color);
        assert_eq!(ClearDepth::No, op.depth);
        assert_eq!(ClearStencil::No, op.stencil);
        assert_eq!(ClearDepth::Yes { z: 1.0 }, ClearOp::color_depth(0.0, 0.0, 0.0, 1.0).depth);
    }
}
