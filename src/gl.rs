//! Generated OpenGL 4.5 bindings plus a traced, error-checked backend.

#![allow(clippy::all)]
#![allow(missing_docs)]

use std::{ffi, os, ptr, rc};

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl.rs"));

/// Function pointers to the OpenGL implementation of the current context.
#[derive(Clone)]
pub struct Backend {
    gl: rc::Rc<Gl>,
}

impl Backend {
    /// Constructor.
    pub fn load<F>(mut func: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        let gl = rc::Rc::new(Gl::load_with(|sym| func(sym) as *const _));
        Backend { gl }
    }

    // Error checking

    /// Corresponds to `glGetError` plus an error check.
    pub fn check_error(&self) {
        let error = unsafe { self.gl.GetError() };
        if error != NO_ERROR {
            error!(target: "gl", "0x{:x}", error);
        }
    }

    // Queries

    /// Corresponds to `glGetString`.
    pub fn get_string(&self, name: u32) -> String {
        trace!(target: "gl", "glGetString{:?}", (name,));
        let ptr = unsafe { self.gl.GetString(name) };
        self.check_error();
        if ptr.is_null() {
            return String::new();
        }
        let cstr = unsafe { ffi::CStr::from_ptr(ptr as *const os::raw::c_char) };
        cstr.to_string_lossy().into_owned()
    }

    /// Corresponds to `glGetIntegerv` for a single value.
    pub fn get_integer(&self, name: u32) -> i32 {
        let mut value = 0;
        unsafe {
            trace!(target: "gl", "glGetIntegerv{:?} ", (name,));
            self.gl.GetIntegerv(name, &mut value as *mut _);
            trace!(target: "gl", "=> {}", value);
        }
        self.check_error();
        value
    }

    // Pipeline state operations

    /// Corresponds to `glEnable`.
    pub fn enable(&self, state: u32) {
        trace!(target: "gl", "glEnable{:?}", (state,));
        unsafe {
            self.gl.Enable(state);
        }
        self.check_error();
    }

    /// Corresponds to `glDisable`.
    pub fn disable(&self, state: u32) {
        trace!(target: "gl", "glDisable{:?}", (state,));
        unsafe {
            self.gl.Disable(state);
        }
        self.check_error();
    }

    /// Corresponds to `glBlendFunc`.
    pub fn blend_func(&self, src: u32, dst: u32) {
        trace!(target: "gl", "glBlendFunc{:?}", (src, dst));
        unsafe {
            self.gl.BlendFunc(src, dst);
        }
        self.check_error();
    }

    /// Corresponds to `glDebugMessageCallback`.
    pub fn debug_message_callback(&self, callback: types::GLDEBUGPROC) {
        trace!(target: "gl", "glDebugMessageCallback");
        unsafe {
            self.gl.DebugMessageCallback(callback, ptr::null());
        }
        self.check_error();
    }

    /// Corresponds to `glDebugMessageControl` without an ID list.
    pub fn debug_message_control(
        &self,
        source: u32,
        ty: u32,
        severity: u32,
        enabled: bool,
    ) {
        trace!(target: "gl", "glDebugMessageControl{:?}", (source, ty, severity, enabled));
        unsafe {
            self.gl.DebugMessageControl(
                source,
                ty,
                severity,
                0,
                ptr::null(),
                if enabled { TRUE } else { FALSE },
            );
        }
        self.check_error();
    }

    // Buffer operations

    /// Corresponds to `glCreateBuffers(1)`.
    pub fn create_buffer(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glCreateBuffers(1) ");
            self.gl.CreateBuffers(1, &mut id as *mut _);
        }
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteBuffers(1)`.
    pub fn delete_buffer(&self, id: u32) {
        trace!(target: "gl", "glDeleteBuffers{:?}", (1, id));
        unsafe {
            self.gl.DeleteBuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedBufferStorage`.
    pub fn named_buffer_storage(&self, id: u32, len: usize, ptr: *const os::raw::c_void, flags: u32) {
        unsafe {
            trace!(target: "gl", "glNamedBufferStorage{:?}", (id, len, ptr, flags));
            self.gl.NamedBufferStorage(id, len as _, ptr, flags);
        }
        self.check_error();
    }

    /// Corresponds to `glMapNamedBufferRange`.
    pub fn map_named_buffer_range(&self, id: u32, offset: usize, len: usize, access: u32) -> *mut u8 {
        let ptr;
        unsafe {
            trace!(target: "gl", "glMapNamedBufferRange{:?} ", (id, offset, len, access));
            ptr = self.gl.MapNamedBufferRange(id, offset as _, len as _, access) as *mut u8;
            trace!(target: "gl", "=> {:?}", ptr);
        }
        self.check_error();
        ptr
    }

    /// Corresponds to `glBindBufferBase`.
    pub fn bind_buffer_base(&self, target: u32, binding: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindBufferBase{:?}", (target, binding, id));
            self.gl.BindBufferBase(target, binding, id);
        }
        self.check_error();
    }

    /// Corresponds to `glBindBufferRange`.
    pub fn bind_buffer_range(&self, target: u32, binding: u32, id: u32, offset: usize, len: usize) {
        unsafe {
            trace!(target: "gl", "glBindBufferRange{:?}", (target, binding, id, offset, len));
            self.gl.BindBufferRange(target, binding, id, offset as _, len as _);
        }
        self.check_error();
    }

    /// Corresponds to `glMemoryBarrier`.
    pub fn memory_barrier(&self, barriers: u32) {
        trace!(target: "gl", "glMemoryBarrier{:?}", (barriers,));
        unsafe {
            self.gl.MemoryBarrier(barriers);
        }
        self.check_error();
    }

    // Synchronization operations

    /// Corresponds to `glFenceSync(GL_SYNC_GPU_COMMANDS_COMPLETE, 0)`.
    pub fn fence_sync(&self) -> types::GLsync {
        let sync;
        unsafe {
            trace!(target: "gl", "glFenceSync{:?} ", (SYNC_GPU_COMMANDS_COMPLETE, 0));
            sync = self.gl.FenceSync(SYNC_GPU_COMMANDS_COMPLETE, 0);
            trace!(target: "gl", "=> {:?}", sync);
        }
        self.check_error();
        sync
    }

    /// Corresponds to `glClientWaitSync`.
    pub fn client_wait_sync(&self, sync: types::GLsync, flags: u32, timeout: u64) -> u32 {
        let status;
        unsafe {
            trace!(target: "gl", "glClientWaitSync{:?} ", (sync, flags, timeout));
            status = self.gl.ClientWaitSync(sync, flags, timeout);
            trace!(target: "gl", "=> 0x{:x}", status);
        }
        self.check_error();
        status
    }

    /// Corresponds to `glDeleteSync`.
    pub fn delete_sync(&self, sync: types::GLsync) {
        trace!(target: "gl", "glDeleteSync{:?}", (sync,));
        unsafe {
            self.gl.DeleteSync(sync);
        }
        self.check_error();
    }

    // Vertex array operations

    /// Corresponds to `glCreateVertexArrays(1)`.
    pub fn create_vertex_array(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glCreateVertexArrays(1) ");
            self.gl.CreateVertexArrays(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteVertexArrays(1)`.
    pub fn delete_vertex_array(&self, id: u32) {
        trace!(target: "gl", "glDeleteVertexArrays{:?}", (1, id));
        unsafe {
            self.gl.DeleteVertexArrays(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindVertexArray`.
    pub fn bind_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindVertexArray{:?}", (id,));
            self.gl.BindVertexArray(id);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexArrayElementBuffer`.
    pub fn vertex_array_element_buffer(&self, vao: u32, buffer: u32) {
        unsafe {
            trace!(target: "gl", "glVertexArrayElementBuffer{:?}", (vao, buffer));
            self.gl.VertexArrayElementBuffer(vao, buffer);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexArrayVertexBuffer`.
    pub fn vertex_array_vertex_buffer(&self, vao: u32, port: u32, buffer: u32, offset: usize, stride: usize) {
        unsafe {
            trace!(target: "gl", "glVertexArrayVertexBuffer{:?}", (vao, port, buffer, offset, stride));
            self.gl.VertexArrayVertexBuffer(vao, port, buffer, offset as _, stride as _);
        }
        self.check_error();
    }

    /// Corresponds to `glEnableVertexArrayAttrib`.
    pub fn enable_vertex_array_attrib(&self, vao: u32, attrib: u32) {
        unsafe {
            trace!(target: "gl", "glEnableVertexArrayAttrib{:?}", (vao, attrib));
            self.gl.EnableVertexArrayAttrib(vao, attrib);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexArrayAttribFormat`.
    pub fn vertex_array_attrib_format(&self, vao: u32, attrib: u32, size: i32, ty: u32, norm: bool, offset: u32) {
        unsafe {
            trace!(target: "gl", "glVertexArrayAttribFormat{:?}", (vao, attrib, size, ty, norm, offset));
            self.gl.VertexArrayAttribFormat(vao, attrib, size, ty, if norm { TRUE } else { FALSE }, offset);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexArrayAttribIFormat`.
    pub fn vertex_array_attrib_iformat(&self, vao: u32, attrib: u32, size: i32, ty: u32, offset: u32) {
        unsafe {
            trace!(target: "gl", "glVertexArrayAttribIFormat{:?}", (vao, attrib, size, ty, offset));
            self.gl.VertexArrayAttribIFormat(vao, attrib, size, ty, offset);
        }
        self.check_error();
    }

    /// Corresponds to `glVertexArrayAttribBinding`.
    pub fn vertex_array_attrib_binding(&self, vao: u32, attrib: u32, port: u32) {
        unsafe {
            trace!(target: "gl", "glVertexArrayAttribBinding{:?}", (vao, attrib, port));
            self.gl.VertexArrayAttribBinding(vao, attrib, port);
        }
        self.check_error();
    }

    // Framebuffer operations.

    /// Corresponds to `glCreateFramebuffers(1)`.
    pub fn create_framebuffer(&self) -> u32 {
        trace!(target: "gl", "glCreateFramebuffers(1)");
        let mut id = 0;
        unsafe {
            self.gl.CreateFramebuffers(1, &mut id as *mut _);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteFramebuffers(1)`.
    pub fn delete_framebuffer(&self, id: u32) {
        trace!(target: "gl", "glDeleteFramebuffers{:?}", (1, id));
        unsafe {
            self.gl.DeleteFramebuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glCreateRenderbuffers(1)`.
    pub fn create_renderbuffer(&self) -> u32 {
        trace!(target: "gl", "glCreateRenderbuffers(1)");
        let mut id = 0;
        unsafe {
            self.gl.CreateRenderbuffers(1, &mut id as *mut _);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteRenderbuffers(1)`.
    pub fn delete_renderbuffer(&self, id: u32) {
        trace!(target: "gl", "glDeleteRenderbuffers{:?}", (1, id));
        unsafe {
            self.gl.DeleteRenderbuffers(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedRenderbufferStorage`.
    pub fn named_renderbuffer_storage(&self, id: u32, format: u32, width: u32, height: u32) {
        trace!(
            target: "gl",
            "glNamedRenderbufferStorage{:?} ",
            (id, format, width, height),
        );
        unsafe {
            self.gl.NamedRenderbufferStorage(id, format, width as _, height as _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindFramebuffer`.
    pub fn bind_framebuffer(&self, id: u32) {
        trace!(target: "gl", "glBindFramebuffer{:?} ", (FRAMEBUFFER, id));
        unsafe {
            self.gl.BindFramebuffer(FRAMEBUFFER, id);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedFramebufferTexture`.
    pub fn named_framebuffer_texture(&self, id: u32, attachment: u32, texture: u32) {
        trace!(
            target: "gl",
            "glNamedFramebufferTexture{:?}",
            (id, attachment, texture, 0),
        );
        unsafe {
            self.gl.NamedFramebufferTexture(id, attachment, texture, 0);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedFramebufferRenderbuffer`.
    pub fn named_framebuffer_renderbuffer(&self, id: u32, attachment: u32, renderbuffer: u32) {
        trace!(
            target: "gl",
            "glNamedFramebufferRenderbuffer{:?}",
            (id, attachment, RENDERBUFFER, renderbuffer),
        );
        unsafe {
            self.gl.NamedFramebufferRenderbuffer(id, attachment, RENDERBUFFER, renderbuffer);
        }
        self.check_error();
    }

    /// Corresponds to `glNamedFramebufferDrawBuffers`.
    pub fn named_framebuffer_draw_buffers(&self, id: u32, buffers: &[u32]) {
        trace!(target: "gl", "glNamedFramebufferDrawBuffers{:?}", (id, buffers.len(), buffers));
        unsafe {
            self.gl.NamedFramebufferDrawBuffers(id, buffers.len() as _, buffers.as_ptr());
        }
        self.check_error();
    }

    /// Corresponds to `glClearNamedFramebufferfv`.
    pub fn clear_named_framebuffer_fv(&self, id: u32, buffer: u32, draw_buffer: i32, value: &[f32]) {
        trace!(target: "gl", "glClearNamedFramebufferfv{:?}", (id, buffer, draw_buffer, value));
        unsafe {
            self.gl.ClearNamedFramebufferfv(id, buffer, draw_buffer, value.as_ptr());
        }
        self.check_error();
    }

    /// Corresponds to `glClearNamedFramebufferiv`.
    pub fn clear_named_framebuffer_iv(&self, id: u32, buffer: u32, value: &[i32]) {
        trace!(target: "gl", "glClearNamedFramebufferiv{:?}", (id, buffer, 0, value));
        unsafe {
            self.gl.ClearNamedFramebufferiv(id, buffer, 0, value.as_ptr());
        }
        self.check_error();
    }

    /// Corresponds to `glBlitNamedFramebuffer` over whole extents.
    pub fn blit_named_framebuffer(
        &self,
        src: u32,
        dst: u32,
        src_extent: (u32, u32),
        dst_extent: (u32, u32),
        mask: u32,
        filter: u32,
    ) {
        trace!(
            target: "gl",
            "glBlitNamedFramebuffer{:?}",
            (src, dst, src_extent, dst_extent, mask, filter),
        );
        unsafe {
            self.gl.BlitNamedFramebuffer(
                src,
                dst,
                0,
                0,
                src_extent.0 as _,
                src_extent.1 as _,
                0,
                0,
                dst_extent.0 as _,
                dst_extent.1 as _,
                mask,
                filter,
            );
        }
        self.check_error();
    }

    // Program operations

    /// Corresponds to `glCreateShader`.
    pub fn create_shader(&self, ty: u32) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateShader{:?} ", (ty,));
            self.gl.CreateShader(ty)
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteShader`.
    pub fn delete_shader(&self, id: u32) {
        trace!(target: "gl", "glDeleteShader{:?}", (id,));
        unsafe {
            self.gl.DeleteShader(id);
        }
        self.check_error();
    }

    /// Corresponds to `glShaderSource` with an explicit source length.
    pub fn shader_source(&self, id: u32, source: &str) {
        unsafe {
            trace!(target: "gl", "glShaderSource{:?}", (id, source.len()));
            let ptr = source.as_ptr() as *const types::GLchar;
            let len = source.len() as types::GLint;
            self.gl.ShaderSource(id, 1, &ptr as *const _, &len as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glCompileShader` followed by a `GL_COMPILE_STATUS`
    /// query.
    pub fn compile_shader(&self, id: u32) -> bool {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glCompileShader{:?}", (id,));
            self.gl.CompileShader(id);
            self.check_error();
            self.gl.GetShaderiv(id, COMPILE_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
        }
        self.check_error();
        status != 0
    }

    /// Corresponds to `glGetShaderInfoLog`.
    pub fn get_shader_info_log(&self, id: u32) -> Vec<u8> {
        let mut len = 0i32;
        unsafe {
            self.gl.GetShaderiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
        }
        let mut log = vec![0u8; len.max(0) as usize];
        let mut written = 0i32;
        unsafe {
            trace!(target: "gl", "glGetShaderInfoLog{:?}", (id, len));
            self.gl.GetShaderInfoLog(
                id,
                len,
                &mut written as *mut _,
                log.as_mut_ptr() as *mut types::GLchar,
            );
        }
        self.check_error();
        log.truncate(written.max(0) as usize);
        log
    }

    /// Corresponds to `glCreateProgram`.
    pub fn create_program(&self) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateProgram() ");
            self.gl.CreateProgram()
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteProgram`.
    pub fn delete_program(&self, id: u32) {
        trace!(target: "gl", "glDeleteProgram{:?}", (id,));
        unsafe {
            self.gl.DeleteProgram(id);
        }
        self.check_error();
    }

    /// Corresponds to `glAttachShader`.
    pub fn attach_shader(&self, program: u32, shader: u32) {
        unsafe {
            trace!(target: "gl", "glAttachShader{:?}", (program, shader));
            self.gl.AttachShader(program, shader);
        }
        self.check_error();
    }

    /// Corresponds to `glDetachShader`.
    pub fn detach_shader(&self, program: u32, shader: u32) {
        unsafe {
            trace!(target: "gl", "glDetachShader{:?}", (program, shader));
            self.gl.DetachShader(program, shader);
        }
        self.check_error();
    }

    /// Corresponds to `glLinkProgram` followed by a `GL_LINK_STATUS` query.
    pub fn link_program(&self, id: u32) -> bool {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glLinkProgram{:?}", (id,));
            self.gl.LinkProgram(id);
            self.check_error();
            trace!(target: "gl", "glGetProgramiv{:?} ", (id, LINK_STATUS));
            self.gl.GetProgramiv(id, LINK_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
        }
        self.check_error();
        status != 0
    }

    /// Corresponds to `glGetProgramInfoLog`.
    pub fn get_program_info_log(&self, id: u32) -> Vec<u8> {
        let mut len = 0i32;
        unsafe {
            self.gl.GetProgramiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
        }
        let mut log = vec![0u8; len.max(0) as usize];
        let mut written = 0i32;
        unsafe {
            trace!(target: "gl", "glGetProgramInfoLog{:?}", (id, len));
            self.gl.GetProgramInfoLog(
                id,
                len,
                &mut written as *mut _,
                log.as_mut_ptr() as *mut types::GLchar,
            );
        }
        self.check_error();
        log.truncate(written.max(0) as usize);
        log
    }

    /// Corresponds to `glUseProgram`.
    pub fn use_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glUseProgram{:?}", (id,));
            self.gl.UseProgram(id);
        }
        self.check_error();
    }

    /// Corresponds to `glGetUniformBlockIndex`.
    pub fn get_uniform_block_index(
        &self,
        id: u32,
        name: &ffi::CStr,
    ) -> u32 {
        let index;
        unsafe {
            trace!(target: "gl", "glGetUniformBlockIndex{:?} ", (id, name));
            index = self.gl.GetUniformBlockIndex(id, name.as_ptr() as _);
            trace!(target: "gl", "=> {}", index);
        }
        self.check_error();
        index
    }

    /// Corresponds to `glUniformBlockBinding`.
    pub fn uniform_block_binding(
        &self,
        program: u32,
        index: u32,
        binding: u32,
    ) {
        trace!(target: "gl", "glUniformBlockBinding{:?} ", (program, index, binding));
        unsafe {
            self.gl.UniformBlockBinding(program, index, binding);
        }
        self.check_error();
    }

    /// Corresponds to `glGetUniformLocation`.
    pub fn get_uniform_location(
        &self,
        id: u32,
        name: &ffi::CStr,
    ) -> i32 {
        let index;
        unsafe {
            trace!(target: "gl", "glGetUniformLocation{:?} ", (id, name));
            index = self.gl.GetUniformLocation(id, name.as_ptr() as _);
            trace!(target: "gl", "=> {}", index);
        }
        self.check_error();
        index
    }

    /// Corresponds to `glProgramUniform1i`.
    pub fn program_uniform_1i(&self, program: u32, location: i32, x: i32) {
        trace!(target: "gl", "glProgramUniform1i{:?}", (program, location, x));
        unsafe {
            self.gl.ProgramUniform1i(program, location, x);
        }
        self.check_error();
    }

    /// Corresponds to `glProgramUniform1ui`.
    pub fn program_uniform_1ui(&self, program: u32, location: i32, x: u32) {
        trace!(target: "gl", "glProgramUniform1ui{:?}", (program, location, x));
        unsafe {
            self.gl.ProgramUniform1ui(program, location, x);
        }
        self.check_error();
    }

    /// Corresponds to `glProgramUniform1d`.
    pub fn program_uniform_1d(&self, program: u32, location: i32, x: f64) {
        trace!(target: "gl", "glProgramUniform1d{:?}", (program, location, x));
        unsafe {
            self.gl.ProgramUniform1d(program, location, x);
        }
        self.check_error();
    }

    /// Corresponds to `glProgramUniform{1,2,3,4}fv` with a count of one.
    pub fn program_uniform_fv(&self, program: u32, location: i32, value: &[f32]) {
        trace!(target: "gl", "glProgramUniform{}fv{:?}", value.len(), (program, location, value));
        unsafe {
            match value.len() {
                1 => self.gl.ProgramUniform1fv(program, location, 1, value.as_ptr()),
                2 => self.gl.ProgramUniform2fv(program, location, 1, value.as_ptr()),
                3 => self.gl.ProgramUniform3fv(program, location, 1, value.as_ptr()),
                4 => self.gl.ProgramUniform4fv(program, location, 1, value.as_ptr()),
                n => error!(target: "gl", "no uniform vector of {} components", n),
            }
        }
        self.check_error();
    }

    /// Corresponds to `glProgramUniformMatrix4fv` with a count of one.
    pub fn program_uniform_matrix_4fv(&self, program: u32, location: i32, value: &[f32; 16]) {
        trace!(target: "gl", "glProgramUniformMatrix4fv{:?}", (program, location, value));
        unsafe {
            self.gl.ProgramUniformMatrix4fv(program, location, 1, FALSE, value.as_ptr());
        }
        self.check_error();
    }

    // Texture operations

    /// Corresponds to `glCreateTextures(target, 1)`.
    pub fn create_texture(&self, target: u32) -> u32 {
        let mut id = 0;
        unsafe {
            trace!(target: "gl", "glCreateTextures{:?} ", (target, 1));
            self.gl.CreateTextures(target, 1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    /// Corresponds to `glDeleteTextures(1)`.
    pub fn delete_texture(&self, id: u32) {
        trace!(target: "gl", "glDeleteTextures{:?}", (1, id));
        unsafe {
            self.gl.DeleteTextures(1, &id as *const _);
        }
        self.check_error();
    }

    /// Corresponds to `glBindTextureUnit`.
    pub fn bind_texture_unit(&self, unit: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindTextureUnit{:?}", (unit, id));
            self.gl.BindTextureUnit(unit, id);
        }
        self.check_error();
    }

    /// Corresponds to `glTextureParameteri`.
    pub fn texture_parameteri(&self, id: u32, param: u32, value: u32) {
        unsafe {
            trace!(target: "gl", "glTextureParameteri{:?}", (id, param, value));
            self.gl.TextureParameteri(id, param, value as i32);
        }
        self.check_error();
    }

    /// Corresponds to `glTextureStorage2D`.
    pub fn texture_storage_2d(&self, id: u32, levels: u32, format: u32, width: u32, height: u32) {
        unsafe {
            trace!(target: "gl", "glTextureStorage2D{:?}", (id, levels, format, width, height));
            self.gl.TextureStorage2D(id, levels as _, format, width as _, height as _);
        }
        self.check_error();
    }

    /// Corresponds to `glTextureStorage3D`.
    pub fn texture_storage_3d(&self, id: u32, levels: u32, format: u32, width: u32, height: u32, depth: u32) {
        unsafe {
            trace!(target: "gl", "glTextureStorage3D{:?}", (id, levels, format, width, height, depth));
            self.gl.TextureStorage3D(id, levels as _, format, width as _, height as _, depth as _);
        }
        self.check_error();
    }

    /// Corresponds to `glTextureSubImage2D` for mip level 0.
    pub fn texture_sub_image_2d(
        &self,
        id: u32,
        width: u32,
        height: u32,
        format: u32,
        ty: u32,
        data: *const os::raw::c_void,
    ) {
        unsafe {
            trace!(target: "gl",
                "glTextureSubImage2D{:?}",
                (id, 0, 0, 0, width, height, format, ty, data),
            );
            self.gl.TextureSubImage2D(
                id,
                0,
                0,
                0,
                width as _,
                height as _,
                format,
                ty,
                data,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glTextureSubImage3D` for a single layer of mip level 0.
    pub fn texture_sub_image_3d(
        &self,
        id: u32,
        layer: u32,
        width: u32,
        height: u32,
        format: u32,
        ty: u32,
        data: *const os::raw::c_void,
    ) {
        unsafe {
            trace!(target: "gl",
                "glTextureSubImage3D{:?}",
                (id, 0, 0, 0, layer, width, height, 1, format, ty, data),
            );
            self.gl.TextureSubImage3D(
                id,
                0,
                0,
                0,
                layer as _,
                width as _,
                height as _,
                1,
                format,
                ty,
                data,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glCopyImageSubData` from a 2D texture region into one
    /// layer of a 2D array texture.
    pub fn copy_image_sub_data(
        &self,
        src: u32,
        src_origin: (u32, u32),
        dst: u32,
        dst_layer: u32,
        size: (u32, u32),
    ) {
        trace!(
            target: "gl",
            "glCopyImageSubData{:?}",
            (src, src_origin, dst, dst_layer, size),
        );
        unsafe {
            self.gl.CopyImageSubData(
                src, TEXTURE_2D, 0,
                src_origin.0 as _, src_origin.1 as _, 0,
                dst, TEXTURE_2D_ARRAY, 0,
                0, 0, dst_layer as _,
                size.0 as _, size.1 as _, 1,
            );
        }
        self.check_error();
    }

    /// Corresponds to `glPixelStorei`.
    pub fn pixel_store_i(&self, param: u32, value: i32) {
        trace!(target: "gl", "glPixelStorei{:?}", (param, value));
        unsafe {
            self.gl.PixelStorei(param, value);
        }
        self.check_error();
    }

    /// Corresponds to `glGenerateTextureMipmap`.
    pub fn generate_texture_mipmap(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glGenerateTextureMipmap{:?}", (id,));
            self.gl.GenerateTextureMipmap(id);
        }
        self.check_error();
    }

    // Draw call operations

    /// Corresponds to `glDrawElements` with `u32` indices.
    pub fn draw_elements(&self, mode: u32, count: usize) {
        unsafe {
            trace!(target: "gl", "glDrawElements{:?}", (mode, count, UNSIGNED_INT, 0));
            self.gl.DrawElements(mode, count as _, UNSIGNED_INT, ptr::null());
        }
        self.check_error();
    }

    /// Corresponds to `glDrawElementsInstanced` with `u32` indices.
    pub fn draw_elements_instanced(&self, mode: u32, count: usize, instances: usize) {
        unsafe {
            trace!(target: "gl", "glDrawElementsInstanced{:?}", (mode, count, UNSIGNED_INT, 0, instances));
            self.gl.DrawElementsInstanced(mode, count as _, UNSIGNED_INT, ptr::null(), instances as _);
        }
        self.check_error();
    }
}
