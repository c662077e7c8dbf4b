//! The window, its OpenGL context and the main loop.

use crate::clock::{Clock, FrameCap, Timestep};
use crate::error::{Error, Result};
use crate::event::{self, Event, Handler};
use crate::factory::Factory;
use crate::framebuffer::Framebuffer;
use crate::input::{Button, Input};
use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::GlContext;
use std::{mem, thread, time};

/// OpenGL context profile.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Profile {
    /// Core profile; deprecated functionality is unavailable.
    Core,

    /// Compatibility profile.
    Compatibility,
}

impl From<Profile> for glutin::GlProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Core => glutin::GlProfile::Core,
            Profile::Compatibility => glutin::GlProfile::Compatibility,
        }
    }
}

/// Window and context creation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Window title.
    pub title: String,

    /// Initial width in window coordinates.
    ///
    /// Default: `800`.
    pub width: u32,

    /// Initial height in window coordinates.
    ///
    /// Default: `600`.
    pub height: u32,

    /// Whether the user may resize the window.
    ///
    /// Default: `true`.
    pub resizable: bool,

    /// Requested OpenGL version.
    ///
    /// Default: `(4, 5)`. The crate relies on direct state access and
    /// persistent mapping, so anything older will not work.
    pub gl_version: (u8, u8),

    /// Requested context profile.
    ///
    /// Default: `Core`.
    pub profile: Profile,

    /// Request a debug context and report driver messages through `log`.
    ///
    /// Default: on in debug builds, off in release builds.
    pub debug: bool,

    /// Synchronize buffer swaps with the display refresh.
    ///
    /// Default: `false`.
    pub vsync: bool,

    /// Number of multisample anti-aliasing samples, or zero.
    ///
    /// Default: `0`.
    pub samples: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "orion".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            gl_version: (4, 5),
            profile: Profile::Core,
            debug: cfg!(debug_assertions),
            vsync: false,
            samples: 0,
        }
    }
}

impl Config {
    /// Default configuration with the given title and size.
    pub fn new<T: Into<String>>(title: T, width: u32, height: u32) -> Self {
        Config {
            title: title.into(),
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets the window title.
    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets whether the window may be resized.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Sets the requested OpenGL version.
    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gl_version = (major, minor);
        self
    }

    /// Sets the requested context profile.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets whether to create a debug context.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets whether to wait for vertical sync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Sets the multisample count.
    pub fn with_multisampling(mut self, samples: u16) -> Self {
        self.samples = samples;
        self
    }
}

/// A window with a current OpenGL context.
///
/// Owns the [`Factory`] for that context. Dropping the frame releases every
/// GPU object whose handles are already gone, then destroys the window.
///
/// [`Factory`]: ../struct.Factory.html
pub struct Frame {
    factory: Factory,
    framebuffer: Framebuffer,
    input: Input,
    clock: Clock,
    open: bool,
    hidpi_factor: f64,

    /// Events translated by `update` and not yet dispatched.
    pending: Vec<Event>,

    window: glutin::GlWindow,

    /// Dropped last, after the window.
    events_loop: glutin::EventsLoop,
}

impl Frame {
    /// Creates the window and context and makes the context current.
    pub fn new(config: &Config) -> Result<Self> {
        let events_loop = glutin::EventsLoop::new();
        let window_builder = glutin::WindowBuilder::new()
            .with_title(config.title.clone())
            .with_dimensions(LogicalSize::new(f64::from(config.width), f64::from(config.height)))
            .with_resizable(config.resizable);
        let context_builder = glutin::ContextBuilder::new()
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, config.gl_version))
            .with_gl_profile(config.profile.into())
            .with_gl_debug_flag(config.debug)
            .with_vsync(config.vsync)
            .with_multisampling(config.samples);
        let window = glutin::GlWindow::new(window_builder, context_builder, &events_loop)
            .map_err(|err| {
                error!("Window creation failed: {}", err);
                Error::from(err)
            })?;
        unsafe {
            window.make_current()?;
        }

        let factory = Factory::new(|symbol| window.get_proc_address(symbol) as *const ());
        if config.debug {
            factory.enable_debug_output();
        }
        info!("{}", factory.version());
        info!("Renderer: {}", factory.renderer());

        let hidpi_factor = window.get_hidpi_factor();
        let (width, height) = window
            .get_inner_size()
            .map(|size| size.to_physical(hidpi_factor))
            .map(|size| (size.width.round() as u32, size.height.round() as u32))
            .unwrap_or((config.width, config.height));

        Ok(Frame {
            factory,
            framebuffer: Framebuffer::implicit(width, height),
            input: Input::new(),
            clock: Clock::new(),
            open: true,
            hidpi_factor,
            pending: Vec::new(),
            window,
            events_loop,
        })
    }

    /// Runs the main loop until the frame is closed.
    ///
    /// Each iteration calls `on_input`, then `on_tick` once per whole tick
    /// of `1 / tick_hz` seconds, then `on_render` with the leftover time.
    /// Then the buffers are swapped, the thread sleeps if `fps_cap` frames
    /// per second would otherwise be exceeded (zero means no cap), and
    /// pending events are polled and dispatched.
    pub fn run<H: Handler + ?Sized>(&mut self, handler: &mut H, tick_hz: u32, fps_cap: u32) {
        let mut timestep = Timestep::new(tick_hz);
        let cap = FrameCap::new(fps_cap);
        let mut previous = self.time();

        while self.is_open() {
            let frame_start = time::Instant::now();
            let now = self.time();
            timestep.advance(now - previous);
            previous = now;

            handler.on_input(self);
            while timestep.consume() {
                handler.on_tick(self, timestep.tick() as f32);
            }
            handler.on_render(self, timestep.remainder() as f32);

            self.swap_buffers();
            if let Some(rest) = cap.remaining(frame_start.elapsed()) {
                thread::sleep(rest);
            }
            self.update();
            self.dispatch(handler);

            // Handlers may have set the clock back.
            previous = previous.min(self.time());
        }
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) {
        if !self.open {
            return;
        }
        if let Err(err) = self.window.swap_buffers() {
            error!("Buffer swap failed: {}", err);
        }
    }

    /// Polls window events, tracks input and releases dropped GPU objects.
    ///
    /// Translated events are queued for [`dispatch`]. The queue only holds
    /// the latest poll: events from an earlier poll that were never
    /// dispatched are dropped. A close request closes the frame here, so a
    /// loop that never dispatches still ends.
    ///
    /// [`dispatch`]: #method.dispatch
    pub fn update(&mut self) {
        let mut raw = Vec::new();
        self.events_loop.poll_events(|event| {
            if let glutin::Event::WindowEvent { event, .. } = event {
                raw.push(event);
            }
        });

        let mut events = Vec::with_capacity(raw.len());
        for event in raw {
            if let glutin::WindowEvent::HiDpiFactorChanged(factor) = event {
                self.hidpi_factor = factor;
            }
            event::translate(event, self.hidpi_factor, &mut self.input, &mut events);
        }
        for event in &events {
            if let Event::WindowResize { width, height } = *event {
                self.window.resize(PhysicalSize::new(f64::from(width), f64::from(height)));
                self.framebuffer.set_size(width, height);
            }
        }
        if event::requeue(&mut self.pending, events) {
            self.close();
        }

        self.factory.collect_garbage();
    }

    /// Delivers every queued event to `handler`.
    pub fn dispatch<H: Handler + ?Sized>(&mut self, handler: &mut H) {
        for event in mem::take(&mut self.pending) {
            if event::dispatch(handler, self, event) {
                self.close();
            }
        }
    }

    /// Ends the main loop after the current iteration.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns `false` once the frame has been closed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hides and confines the cursor, or releases it.
    pub fn set_cursor_locked(&mut self, locked: bool) -> Result<()> {
        self.window.grab_cursor(locked).map_err(|err| {
            warn!("Unable to {} cursor: {}", if locked { "grab" } else { "release" }, err);
            Error::Cursor(err)
        })?;
        self.window.hide_cursor(locked);
        Ok(())
    }

    /// Makes `time` read `seconds` from now on.
    pub fn set_time(&mut self, seconds: f64) {
        self.clock.set(seconds);
    }

    /// Returns seconds since the frame was created or the time was set.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Sets the window icon from tightly packed RGBA8 pixels.
    pub fn set_icon(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<()> {
        let icon = glutin::Icon::from_rgba(rgba.to_vec(), width, height)
            .map_err(|err| Error::Icon(err.to_string()))?;
        self.window.set_window_icon(Some(icon));
        Ok(())
    }

    /// Returns the window width in window coordinates.
    pub fn width(&self) -> u32 {
        self.logical_size().0
    }

    /// Returns the window height in window coordinates.
    pub fn height(&self) -> u32 {
        self.logical_size().1
    }

    fn logical_size(&self) -> (u32, u32) {
        self.window
            .get_inner_size()
            .map(|size| (size.width.round() as u32, size.height.round() as u32))
            .unwrap_or((0, 0))
    }

    /// Returns the ratio of pixels to window coordinates.
    pub fn content_scale(&self) -> f64 {
        self.hidpi_factor
    }

    /// Returns the last known cursor position in window coordinates.
    pub fn cursor(&self) -> glam::DVec2 {
        self.input.cursor()
    }

    /// Returns `true` while the key or mouse button is held.
    pub fn pressed<B: Into<Button>>(&self, button: B) -> bool {
        self.input.is_pressed(button)
    }

    /// Returns `true` while the key or mouse button is up.
    pub fn released<B: Into<Button>>(&self, button: B) -> bool {
        !self.input.is_pressed(button)
    }

    /// Returns the tracked input state.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Returns the factory of this frame's context.
    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// Returns the window's default framebuffer, sized in pixels.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        self.factory.collect_garbage();
    }
}
