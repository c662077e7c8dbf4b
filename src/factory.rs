//! Factory.

use crate::buffer::{self, Buffer, IndexBuffer};
use crate::debug;
use crate::draw_call::DrawCall;
use crate::error::{Error, Result};
use crate::framebuffer::{
    Attached,
    Attachment,
    ClearColor,
    ClearDepth,
    ClearOp,
    ClearStencil,
    Framebuffer,
};
use crate::gl;
use crate::image::Image;
use crate::mesh::{Mesh, MeshStream, Vertex};
use crate::program::{Program, Uniform};
use crate::queue::{Destroyed, Queue};
use crate::renderbuffer::Renderbuffer;
use crate::sampler::Filter;
use crate::shader::{self, Shader};
use crate::stream::{self, BufferStream, Fence, SLOTS};
use crate::texture::{self, ArrayTexture2, InternalFormat, SpriteGrid, Texture, Texture2};
use crate::util;
use crate::vertex_array::VertexArray;
use std::{mem, ptr, slice};

/// How long one `glClientWaitSync` call may block before it is retried.
const FENCE_WAIT_NS: u64 = 100_000_000;

/// OpenGL memory manager.
///
/// Creates every GPU object and issues every command. Handles may be
/// dropped anywhere; the objects themselves are deleted the next time
/// [`collect_garbage`] runs on the context thread.
///
/// [`collect_garbage`]: #method.collect_garbage
#[derive(Clone)]
pub struct Factory {
    /// Function pointers to the OpenGL backend.
    backend: gl::Backend,

    /// Objects whose last handle was dropped arrive here to be deleted.
    queue: Queue<Destroyed>,
}

impl Factory {
    /// Constructor.
    ///
    /// The context the addresses belong to must be current.
    pub fn new<F>(query_proc_address: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        Self {
            backend: gl::Backend::load(query_proc_address),
            queue: Queue::new(),
        }
    }

    /// Deletes every object whose last handle has been dropped.
    pub fn collect_garbage(&self) {
        for item in self.queue.drain() {
            trace!("Deleting {:?}", item);
            match item {
                Destroyed::Shader(id) => self.backend.delete_shader(id),
                Destroyed::Program(id) => self.backend.delete_program(id),
                Destroyed::Buffer(id) => self.backend.delete_buffer(id),
                Destroyed::Texture(id) => self.backend.delete_texture(id),
                Destroyed::VertexArray(id) => self.backend.delete_vertex_array(id),
                Destroyed::Renderbuffer(id) => self.backend.delete_renderbuffer(id),
                Destroyed::Framebuffer(id) => self.backend.delete_framebuffer(id),
                Destroyed::Fence(sync) => self.backend.delete_sync(sync as gl::types::GLsync),
            }
        }
    }

    /// Routes driver debug messages to the `log` facade.
    ///
    /// Requires a debug context. Notifications are filtered out at the
    /// driver.
    pub fn enable_debug_output(&self) {
        self.backend.enable(gl::DEBUG_OUTPUT);
        self.backend.enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        self.backend.debug_message_callback(Some(debug::callback));
        self.backend.debug_message_control(
            gl::DONT_CARE,
            gl::DONT_CARE,
            gl::DEBUG_SEVERITY_NOTIFICATION,
            false,
        );
    }

    /// Returns `"OpenGL "` followed by the context's version string.
    pub fn version(&self) -> String {
        format!("OpenGL {}", self.backend.get_string(gl::VERSION))
    }

    /// Returns the name of the renderer.
    pub fn renderer(&self) -> String {
        self.backend.get_string(gl::RENDERER)
    }

    // Shaders and programs

    /// Compiles GLSL source code into a shader object.
    pub fn shader(&self, kind: shader::Kind, source: &str) -> Result<Shader> {
        let id = self.backend.create_shader(kind.as_gl_enum());
        let shader = Shader::new(id, kind, self.queue.tx());
        self.backend.shader_source(id, source);
        if self.backend.compile_shader(id) {
            Ok(shader)
        } else {
            let log = util::info_log(self.backend.get_shader_info_log(id));
            error!("Failed to compile {} shader:\n{}", kind, log);
            Err(Error::ShaderCompile { kind, log })
        }
    }

    /// Links shader objects into a program.
    ///
    /// The shaders are detached again afterwards and may be dropped.
    pub fn program(&self, shaders: &[&Shader]) -> Result<Program> {
        let id = self.backend.create_program();
        let program = Program::new(id, self.queue.tx());
        for shader in shaders {
            self.backend.attach_shader(id, shader.id());
        }
        let linked = self.backend.link_program(id);
        for shader in shaders {
            self.backend.detach_shader(id, shader.id());
        }
        if linked {
            Ok(program)
        } else {
            let log = util::info_log(self.backend.get_program_info_log(id));
            error!("Failed to link program:\n{}", log);
            Err(Error::ProgramLink { log })
        }
    }

    /// Makes `program` the current program.
    pub fn use_program(&self, program: &Program) {
        self.backend.use_program(program.id());
    }

    /// Retrieves the location of a named uniform.
    pub fn uniform_location(&self, program: &Program, name: &str) -> Option<i32> {
        let name = util::cstring(name)?;
        match self.backend.get_uniform_location(program.id(), &name) {
            -1 => None,
            x => Some(x),
        }
    }

    /// Retrieves the index of a named uniform block.
    pub fn uniform_block_index(&self, program: &Program, name: &str) -> Option<u32> {
        let name = util::cstring(name)?;
        match self.backend.get_uniform_block_index(program.id(), &name) {
            gl::INVALID_INDEX => None,
            x => Some(x),
        }
    }

    /// Sets the binding index for a uniform block.
    pub fn set_uniform_block_binding(&self, program: &Program, index: u32, binding: u32) {
        self.backend.uniform_block_binding(program.id(), index, binding);
    }

    /// Writes a uniform value. The program need not be current.
    pub fn set_uniform<U: Uniform>(&self, program: &Program, location: i32, value: U) {
        value.set(&self.backend, program.id(), location);
    }

    // Buffers

    /// Creates an immutable GPU buffer holding `data`.
    pub fn buffer<T: bytemuck::Pod>(&self, data: &[T]) -> Buffer<T> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let id = self.backend.create_buffer();
        let ptr = if bytes.is_empty() { ptr::null() } else { bytes.as_ptr() as *const _ };
        // Zero-sized storage is an error.
        self.backend.named_buffer_storage(id, bytes.len().max(1), ptr, 0);
        Buffer::new(id, data.len(), self.queue.tx())
    }

    /// Creates an immutable GPU buffer holding one value.
    pub fn buffer_value<T: bytemuck::Pod>(&self, value: &T) -> Buffer<T> {
        self.buffer(slice::from_ref(value))
    }

    /// Binds a buffer to an indexed uniform block binding.
    pub fn bind_uniform_buffer<T>(&self, index: u32, buffer: &Buffer<T>) {
        self.bind_buffer(buffer::Target::Uniform, index, buffer);
    }

    /// Binds a buffer to an indexed shader storage binding.
    pub fn bind_storage_buffer<T>(&self, index: u32, buffer: &Buffer<T>) {
        self.bind_buffer(buffer::Target::Storage, index, buffer);
    }

    fn bind_buffer<T>(&self, target: buffer::Target, index: u32, buffer: &Buffer<T>) {
        self.backend.bind_buffer_base(target.as_gl_enum(), index, buffer.id());
    }

    // Streams

    /// Creates a triple-buffered stream of `len` elements per slot.
    pub fn buffer_stream<T: bytemuck::Pod>(&self, len: usize) -> BufferStream<T> {
        let alignment = self.backend
            .get_integer(gl::UNIFORM_BUFFER_OFFSET_ALIGNMENT)
            .max(self.backend.get_integer(gl::SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT))
            .max(1) as usize;
        let stride = stream::slot_stride(
            len * mem::size_of::<T>(),
            alignment.max(mem::align_of::<T>()),
        );
        let size = SLOTS * stride;
        let flags = gl::MAP_WRITE_BIT | gl::MAP_PERSISTENT_BIT | gl::MAP_COHERENT_BIT;

        let id = self.backend.create_buffer();
        let zeroes = vec![0u8; size];
        self.backend.named_buffer_storage(id, size, zeroes.as_ptr() as *const _, flags);
        let ptr = self.backend.map_named_buffer_range(id, 0, size, flags);
        if ptr.is_null() {
            error!("Unable to map stream buffer {} ({} bytes)", id, size);
        }
        debug!("Created stream buffer {} with {} slots of {} bytes", id, SLOTS, stride);
        BufferStream::new(id, ptr, len, stride, self.queue.tx())
    }

    /// Moves the stream to its next slot and lets `write` fill it.
    ///
    /// Blocks until the GPU has finished reading the slot, which was last
    /// written `SLOTS` updates ago.
    pub fn update_stream<T, F>(&self, stream: &mut BufferStream<T>, write: F)
        where T: bytemuck::Pod, F: FnOnce(&mut [T])
    {
        if !stream.is_mapped() {
            error!("Stream buffer {} is not mapped", stream.id());
            return;
        }

        // Every command reading the slot being left has been issued.
        let leaving = stream.advance();
        stream.fences[leaving] = Some(self.fence());

        let slot = stream.current_slot();
        if let Some(fence) = stream.fences[slot].take() {
            self.wait_fence(fence);
        }

        write(unsafe { stream.slot_mut() });
        self.backend.memory_barrier(gl::CLIENT_MAPPED_BUFFER_BARRIER_BIT);
    }

    /// Moves the stream to its next slot and fills it with `value`.
    pub fn update_stream_value<T: bytemuck::Pod>(&self, stream: &mut BufferStream<T>, value: T) {
        self.update_stream(stream, |slot| slot.fill(value));
    }

    /// Binds the current slot of a stream to an indexed uniform block binding.
    pub fn bind_uniform_stream<T>(&self, index: u32, stream: &BufferStream<T>) {
        self.bind_stream(buffer::Target::Uniform, index, stream);
    }

    /// Binds the current slot of a stream to an indexed shader storage binding.
    pub fn bind_storage_stream<T>(&self, index: u32, stream: &BufferStream<T>) {
        self.bind_stream(buffer::Target::Storage, index, stream);
    }

    fn bind_stream<T>(&self, target: buffer::Target, index: u32, stream: &BufferStream<T>) {
        self.backend.bind_buffer_range(
            target.as_gl_enum(),
            index,
            stream.id(),
            stream.offset(),
            stream.range_bytes(),
        );
    }

    // Fences

    /// Inserts a fence after every command issued so far.
    pub fn fence(&self) -> Fence {
        let sync = self.backend.fence_sync();
        Fence::new(sync as usize, self.queue.tx())
    }

    /// Returns `true` once the GPU has passed the fence. Never blocks.
    pub fn is_fence_ready(&self, fence: &Fence) -> bool {
        let sync = fence.sync() as gl::types::GLsync;
        match self.backend.client_wait_sync(sync, 0, 0) {
            gl::ALREADY_SIGNALED | gl::CONDITION_SATISFIED => true,
            _ => false,
        }
    }

    /// Moves the fence to after every command issued so far.
    pub fn resubmit_fence(&self, fence: &mut Fence) {
        let sync = self.backend.fence_sync();
        let old = fence.replace(sync as usize);
        if old != 0 {
            self.backend.delete_sync(old as gl::types::GLsync);
        }
    }

    /// Blocks until the GPU has passed the fence, then deletes it.
    fn wait_fence(&self, fence: Fence) {
        let sync = fence.into_sync() as gl::types::GLsync;
        loop {
            match self.backend.client_wait_sync(sync, gl::SYNC_FLUSH_COMMANDS_BIT, FENCE_WAIT_NS) {
                gl::ALREADY_SIGNALED | gl::CONDITION_SATISFIED => break,
                gl::WAIT_FAILED => {
                    error!("Fence wait failed");
                    break;
                }
                _ => trace!("Still waiting on fence {:?}", sync),
            }
        }
        self.backend.delete_sync(sync);
    }

    // Textures

    /// Creates a 2D texture with a full mipmap chain of uninitialized
    /// memory.
    pub fn texture2(&self, width: u32, height: u32, format: InternalFormat) -> Texture2 {
        self.texture2_with_levels(width, height, texture::mip_levels(width, height), format)
    }

    fn texture2_with_levels(
        &self,
        width: u32,
        height: u32,
        levels: u32,
        format: InternalFormat,
    ) -> Texture2 {
        let id = self.backend.create_texture(gl::TEXTURE_2D);
        self.backend.texture_storage_2d(id, levels, format.as_gl_enum(), width, height);
        self.apply_filter(id, Filter::default());
        Texture2::new(id, width, height, levels, format, self.queue.tx())
    }

    /// Creates a 2D texture from an image and generates its mipmaps.
    pub fn texture2_from_image(&self, image: &Image, format: InternalFormat) -> Result<Texture2> {
        image.check_len()?;
        let texture = self.texture2(image.width, image.height, format);
        self.backend.pixel_store_i(gl::UNPACK_ALIGNMENT, 1);
        self.backend.texture_sub_image_2d(
            texture.id(),
            image.width,
            image.height,
            image.format.as_gl_enum(),
            gl::UNSIGNED_BYTE,
            image.data.as_ptr() as *const _,
        );
        self.backend.generate_texture_mipmap(texture.id());
        Ok(texture)
    }

    /// Creates a 2D array texture of uninitialized memory.
    pub fn array_texture2(
        &self,
        width: u32,
        height: u32,
        layers: u32,
        format: InternalFormat,
    ) -> ArrayTexture2 {
        let id = self.backend.create_texture(gl::TEXTURE_2D_ARRAY);
        self.backend.texture_storage_3d(id, 1, format.as_gl_enum(), width, height, layers);
        self.apply_filter(id, Filter::default());
        ArrayTexture2::new(id, width, height, layers, format, self.queue.tx())
    }

    /// Creates a 2D array texture with one layer per image.
    ///
    /// Every image must be the size of the first.
    pub fn array_texture2_from_images(
        &self,
        images: &[Image],
        format: InternalFormat,
    ) -> Result<ArrayTexture2> {
        let first = images.first().ok_or(Error::NoImages)?;
        let expected = first.dimensions();
        for (index, image) in images.iter().enumerate() {
            if image.dimensions() != expected {
                error!("Image {} is {:?}, expected {:?}", index, image.dimensions(), expected);
                return Err(Error::ImageDimensions {
                    index,
                    expected,
                    found: image.dimensions(),
                });
            }
            image.check_len()?;
        }

        let (width, height) = expected;
        let texture = self.array_texture2(width, height, images.len() as u32, format);
        self.backend.pixel_store_i(gl::UNPACK_ALIGNMENT, 1);
        for (layer, image) in images.iter().enumerate() {
            self.backend.texture_sub_image_3d(
                texture.id(),
                layer as u32,
                width,
                height,
                image.format.as_gl_enum(),
                gl::UNSIGNED_BYTE,
                image.data.as_ptr() as *const _,
            );
        }
        Ok(texture)
    }

    /// Cuts a sprite sheet into square cells, one layer per cell.
    ///
    /// Cells are numbered left to right, top to bottom as the picture is
    /// seen. The sheet is expected bottom row first, as loaded by
    /// [`Image::load`] with flipping enabled.
    ///
    /// [`Image::load`]: image/struct.Image.html#method.load
    pub fn array_texture2_from_sprite_sheet(
        &self,
        sheet: &Image,
        cell: u32,
        format: InternalFormat,
    ) -> Result<ArrayTexture2> {
        let grid = SpriteGrid::new(sheet.width, sheet.height, cell).ok_or_else(|| {
            error!("{}x{} sprite sheet has no {}px cells", sheet.width, sheet.height, cell);
            Error::InvalidSpriteSheet {
                width: sheet.width,
                height: sheet.height,
                cell,
            }
        })?;
        sheet.check_len()?;

        let staging = self.texture2_with_levels(sheet.width, sheet.height, 1, format);
        self.backend.pixel_store_i(gl::UNPACK_ALIGNMENT, 1);
        self.backend.texture_sub_image_2d(
            staging.id(),
            sheet.width,
            sheet.height,
            sheet.format.as_gl_enum(),
            gl::UNSIGNED_BYTE,
            sheet.data.as_ptr() as *const _,
        );

        let texture = self.array_texture2(cell, cell, grid.layers(), format);
        for layer in 0 .. grid.layers() {
            self.backend.copy_image_sub_data(
                staging.id(),
                grid.origin(layer),
                texture.id(),
                layer,
                (cell, cell),
            );
        }
        Ok(texture)
    }

    /// Sets the minification and magnification filter of a texture.
    pub fn set_filter<T: Texture>(&self, texture: &T, filter: Filter) {
        self.apply_filter(texture.texture_id(), filter);
    }

    fn apply_filter(&self, id: u32, filter: Filter) {
        self.backend.texture_parameteri(id, gl::TEXTURE_MIN_FILTER, filter.as_gl_enum());
        self.backend.texture_parameteri(id, gl::TEXTURE_MAG_FILTER, filter.as_gl_enum());
    }

    /// Binds a texture to a texture unit.
    pub fn bind_texture<T: Texture>(&self, unit: u32, texture: &T) {
        self.backend.bind_texture_unit(unit, texture.texture_id());
    }

    // Meshes

    fn vertex_array(&self) -> VertexArray {
        let id = self.backend.create_vertex_array();
        VertexArray::new(id, self.queue.tx())
    }

    /// Enables every attribute of `V` and sources it from `port`.
    fn setup_attributes<V: Vertex>(&self, vertex_array: &VertexArray, port: u32) {
        let vao = vertex_array.id();
        for (index, attribute) in V::attributes().iter().enumerate() {
            let index = index as u32;
            let format = attribute.format;
            self.backend.enable_vertex_array_attrib(vao, index);
            if format.integer() {
                self.backend.vertex_array_attrib_iformat(
                    vao,
                    index,
                    format.size() as _,
                    format.gl_data_type(),
                    attribute.offset as _,
                );
            } else {
                self.backend.vertex_array_attrib_format(
                    vao,
                    index,
                    format.size() as _,
                    format.gl_data_type(),
                    format.norm(),
                    attribute.offset as _,
                );
            }
            self.backend.vertex_array_attrib_binding(vao, index, port);
        }
    }

    /// Uploads vertices and binds them with `indices` into a mesh.
    pub fn mesh<V: Vertex>(&self, vertices: &[V], indices: &IndexBuffer) -> Mesh<V> {
        let buffer = self.buffer(vertices);
        let vertex_array = self.vertex_array();
        self.backend.vertex_array_vertex_buffer(
            vertex_array.id(),
            0,
            buffer.id(),
            0,
            mem::size_of::<V>(),
        );
        self.setup_attributes::<V>(&vertex_array, 0);
        self.backend.vertex_array_element_buffer(vertex_array.id(), indices.id());
        Mesh {
            vertex_array,
            vertices: buffer,
            indices: indices.clone(),
        }
    }

    /// Creates a mesh whose `len` vertices are rewritten every frame.
    pub fn mesh_stream<V: Vertex>(&self, len: usize, indices: &IndexBuffer) -> MeshStream<V> {
        let vertices = self.buffer_stream::<V>(len);
        let vertex_array = self.vertex_array();
        for slot in 0 .. SLOTS {
            self.backend.vertex_array_vertex_buffer(
                vertex_array.id(),
                slot as u32,
                vertices.id(),
                stream::slot_offset(slot, vertices.stride()),
                mem::size_of::<V>(),
            );
        }
        self.setup_attributes::<V>(&vertex_array, vertices.current_slot() as u32);
        self.backend.vertex_array_element_buffer(vertex_array.id(), indices.id());
        MeshStream {
            vertex_array,
            vertices,
            indices: indices.clone(),
        }
    }

    /// Writes the next slot of a mesh stream and draws from it afterwards.
    pub fn update_mesh_stream<V, F>(&self, mesh: &mut MeshStream<V>, write: F)
        where V: Vertex, F: FnOnce(&mut [V])
    {
        self.update_stream(&mut mesh.vertices, write);
        let port = mesh.vertices.current_slot() as u32;
        for index in 0 .. V::attributes().len() {
            self.backend.vertex_array_attrib_binding(mesh.vertex_array.id(), index as u32, port);
        }
    }

    /// Binds the vertex array of a mesh for drawing.
    pub fn bind_mesh<M: AsRef<VertexArray>>(&self, mesh: &M) {
        self.backend.bind_vertex_array(mesh.as_ref().id());
    }

    /// Unbinds any vertex array.
    pub fn unbind_mesh(&self) {
        self.backend.bind_vertex_array(0);
    }

    // Render targets

    /// Creates a renderbuffer of uninitialized memory.
    pub fn renderbuffer(&self, width: u32, height: u32, format: InternalFormat) -> Renderbuffer {
        let id = self.backend.create_renderbuffer();
        self.backend.named_renderbuffer_storage(id, format.as_gl_enum(), width, height);
        Renderbuffer::new(id, width, height, format, self.queue.tx())
    }

    /// Creates a framebuffer with no attachments.
    pub fn framebuffer(&self) -> Framebuffer {
        let id = self.backend.create_framebuffer();
        Framebuffer::new(id, self.queue.tx())
    }

    /// Attaches a renderbuffer, replacing whatever used the attachment point.
    pub fn attach_renderbuffer(
        &self,
        framebuffer: &mut Framebuffer,
        attachment: Attachment,
        renderbuffer: &Renderbuffer,
    ) {
        let size = (renderbuffer.width(), renderbuffer.height());
        let attached = Attached::Renderbuffer(renderbuffer.clone());
        if self.record_attachment(framebuffer, attachment, attached, size) {
            self.backend.named_framebuffer_renderbuffer(
                framebuffer.id(),
                attachment.as_gl_enum(),
                renderbuffer.id(),
            );
            self.backend.named_framebuffer_draw_buffers(framebuffer.id(), &framebuffer.draw_buffers());
        }
    }

    /// Attaches level 0 of a texture, replacing whatever used the
    /// attachment point.
    pub fn attach_texture2(
        &self,
        framebuffer: &mut Framebuffer,
        attachment: Attachment,
        texture: &Texture2,
    ) {
        let size = (texture.width(), texture.height());
        let attached = Attached::Texture2(texture.clone());
        if self.record_attachment(framebuffer, attachment, attached, size) {
            self.backend.named_framebuffer_texture(
                framebuffer.id(),
                attachment.as_gl_enum(),
                texture.id(),
            );
            self.backend.named_framebuffer_draw_buffers(framebuffer.id(), &framebuffer.draw_buffers());
        }
    }

    fn record_attachment(
        &self,
        framebuffer: &mut Framebuffer,
        attachment: Attachment,
        attached: Attached,
        size: (u32, u32),
    ) -> bool {
        if framebuffer.is_implicit() {
            warn!("The default framebuffer cannot take attachments");
            return false;
        }
        if !framebuffer.attach(attachment, attached, size) {
            warn!("Unsupported attachment point {:?}", attachment);
            return false;
        }
        true
    }

    /// Binds a framebuffer for drawing.
    pub fn bind_framebuffer(&self, framebuffer: &Framebuffer) {
        self.backend.bind_framebuffer(framebuffer.id());
    }

    /// Clears the buffers of a framebuffer selected by `op`.
    pub fn clear(&self, framebuffer: &Framebuffer, op: ClearOp) {
        let id = framebuffer.id();
        if let ClearColor::Yes { r, g, b, a } = op.color {
            let count = if framebuffer.is_implicit() {
                1
            } else {
                framebuffer.draw_buffers().len()
            };
            for draw_buffer in 0 .. count {
                self.backend.clear_named_framebuffer_fv(id, gl::COLOR, draw_buffer as i32, &[r, g, b, a]);
            }
        }
        if let ClearDepth::Yes { z } = op.depth {
            self.backend.clear_named_framebuffer_fv(id, gl::DEPTH, 0, &[z]);
        }
        if let ClearStencil::Yes { s } = op.stencil {
            self.backend.clear_named_framebuffer_iv(id, gl::STENCIL, &[s]);
        }
    }

    /// Copies the whole of `src` onto the whole of `dst`.
    ///
    /// Color, depth and stencil are copied with nearest filtering.
    pub fn blit(&self, src: &Framebuffer, dst: &Framebuffer) {
        self.backend.blit_named_framebuffer(
            src.id(),
            dst.id(),
            (src.width(), src.height()),
            (dst.width(), dst.height()),
            gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT | gl::STENCIL_BUFFER_BIT,
            gl::NEAREST,
        );
    }

    // Drawing

    /// Enables or disables alpha blending.
    pub fn set_alpha(&self, enabled: bool) {
        if enabled {
            self.backend.enable(gl::BLEND);
            self.backend.blend_func(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        } else {
            self.backend.disable(gl::BLEND);
        }
    }

    /// Draws from the bound mesh with the current program.
    pub fn draw(&self, draw_call: &DrawCall) {
        if draw_call.is_empty() {
            return;
        }
        let mode = draw_call.primitive.as_gl_enum();
        if draw_call.instances == 1 {
            self.backend.draw_elements(mode, draw_call.count);
        } else {
            self.backend.draw_elements_instanced(mode, draw_call.count, draw_call.instances);
        }
    }
}
