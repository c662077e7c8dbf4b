//! A window, its input and OpenGL 4.5 resource handles.
//!
//! Create a [`Frame`] to open a window with a current context, then use its
//! [`Factory`] to create buffers, textures, meshes and programs. Handles are
//! reference counted and may be cloned freely; the GPU objects behind them
//! are released by the factory once the last clone is dropped.
//!
//! [`Frame`]: struct.Frame.html
//! [`Factory`]: struct.Factory.html

#[macro_use] extern crate log;

#[macro_use]
mod macros;

mod debug;
mod factory;
mod frame;
mod queue;
mod util;

#[doc(hidden)]
pub mod gl;

pub mod buffer;
pub mod clock;
pub mod draw_call;
pub mod error;
pub mod event;
pub mod framebuffer;
pub mod image;
pub mod input;
pub mod mesh;
pub mod program;
pub mod rect;
pub mod renderbuffer;
pub mod sampler;
pub mod shader;
pub mod stream;
pub mod texture;
pub mod vertex_array;

#[doc(inline)]
pub use buffer::{Buffer, Format, IndexBuffer};

#[doc(inline)]
pub use draw_call::{DrawCall, Primitive};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use event::{Event, Handler};

#[doc(inline)]
pub use factory::Factory;

#[doc(inline)]
pub use frame::{Config, Frame, Profile};

#[doc(inline)]
pub use framebuffer::{Attachment, ClearColor, ClearDepth, ClearOp, ClearStencil, Framebuffer};

#[doc(inline)]
pub use image::{Image, ImageFormat};

#[doc(inline)]
pub use input::{Action, Button, Key, Modifiers, MouseButton};

#[doc(inline)]
pub use mesh::{Mesh, MeshStream, Vertex};

#[doc(inline)]
pub use program::{Program, Uniform};

#[doc(inline)]
pub use rect::Rect;

#[doc(inline)]
pub use renderbuffer::Renderbuffer;

#[doc(inline)]
pub use sampler::Filter;

#[doc(inline)]
pub use shader::{Kind as ShaderKind, Shader};

#[doc(inline)]
pub use stream::{BufferStream, Fence};

#[doc(inline)]
pub use texture::{ArrayTexture2, InternalFormat, Texture, Texture2};

#[doc(inline)]
pub use vertex_array::VertexArray;
