//! Window and input events, and the callbacks they are delivered to.

use crate::frame::Frame;
use crate::input::{Action, Input, Key, Modifiers, MouseButton};
use glam::{DVec2, IVec2, Vec2};
use glutin::{MouseScrollDelta, WindowEvent};
use std::mem;
use std::path::PathBuf;

/// A window or input event.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A key changed state.
    Key {
        /// The key.
        key: Key,
        /// Pressed, released or repeated.
        action: Action,
        /// Modifiers at the time.
        modifiers: Modifiers,
    },

    /// A character was typed.
    Char {
        /// The character.
        codepoint: char,
        /// Modifiers at the time.
        modifiers: Modifiers,
    },

    /// A mouse button changed state.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// Pressed or released.
        action: Action,
        /// Modifiers at the time.
        modifiers: Modifiers,
    },

    /// The cursor moved, in window coordinates.
    Cursor(DVec2),

    /// The cursor entered (`true`) or left the window.
    CursorEnter(bool),

    /// The wheel or touchpad scrolled.
    Scroll(DVec2),

    /// Files were dropped onto the window.
    Drop(Vec<PathBuf>),

    /// The window moved on screen.
    WindowMove(IVec2),

    /// The drawable area changed size, in pixels.
    WindowResize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },

    /// The user asked to close the window.
    WindowClose,

    /// The window contents need redrawing.
    WindowRefresh,

    /// The window gained (`true`) or lost focus.
    WindowFocus(bool),

    /// The ratio of pixels to window coordinates changed.
    WindowContentScale(Vec2),
}

/// Translates one window system event, updating the input state.
///
/// Consecutive file drops are merged into the last `Drop` in `events`.
pub(crate) fn translate(
    event: WindowEvent,
    hidpi_factor: f64,
    input: &mut Input,
    events: &mut Vec<Event>,
) {
    let event = match event {
        WindowEvent::KeyboardInput { input: keyboard, .. } => {
            input.set_modifiers(keyboard.modifiers.into());
            let key = keyboard.virtual_keycode.map(Key::from).unwrap_or(Key::Unknown);
            let action = input.key(key, keyboard.state);
            Event::Key { key, action, modifiers: input.modifiers() }
        }
        WindowEvent::ReceivedCharacter(codepoint) => {
            Event::Char { codepoint, modifiers: input.modifiers() }
        }
        WindowEvent::MouseInput { state, button, modifiers, .. } => {
            input.set_modifiers(modifiers.into());
            let button = MouseButton::from(button);
            let action = input.mouse_button(button, state);
            Event::MouseButton { button, action, modifiers: input.modifiers() }
        }
        WindowEvent::CursorMoved { position, .. } => {
            let position = DVec2::new(position.x, position.y);
            input.set_cursor(position);
            Event::Cursor(position)
        }
        WindowEvent::CursorEntered { .. } => Event::CursorEnter(true),
        WindowEvent::CursorLeft { .. } => Event::CursorEnter(false),
        WindowEvent::MouseWheel { delta, .. } => {
            let offset = match delta {
                MouseScrollDelta::LineDelta(x, y) => DVec2::new(f64::from(x), f64::from(y)),
                MouseScrollDelta::PixelDelta(position) => DVec2::new(position.x, position.y),
            };
            Event::Scroll(offset)
        }
        WindowEvent::DroppedFile(path) => {
            if let Some(Event::Drop(paths)) = events.last_mut() {
                paths.push(path);
                return;
            }
            Event::Drop(vec![path])
        }
        WindowEvent::Moved(position) => {
            let position = position.to_physical(hidpi_factor);
            Event::WindowMove(IVec2::new(position.x.round() as i32, position.y.round() as i32))
        }
        WindowEvent::Resized(size) => {
            let size = size.to_physical(hidpi_factor);
            Event::WindowResize {
                width: size.width.round() as u32,
                height: size.height.round() as u32,
            }
        }
        WindowEvent::CloseRequested => Event::WindowClose,
        WindowEvent::Refresh => Event::WindowRefresh,
        WindowEvent::Focused(focused) => {
            if !focused {
                input.release_all();
            }
            Event::WindowFocus(focused)
        }
        WindowEvent::HiDpiFactorChanged(factor) => {
            Event::WindowContentScale(Vec2::splat(factor as f32))
        }
        _ => return,
    };
    events.push(event);
}

/// Callbacks for window and input events, and for the main loop.
///
/// Every method does nothing by default. `F` is what the callbacks act on,
/// normally the [`Frame`] that delivered the event.
///
/// [`Frame`]: ../struct.Frame.html
#[allow(unused_variables)]
pub trait Handler<F: ?Sized = Frame> {
    /// A key was pressed, released or repeated.
    fn on_key(&mut self, frame: &mut F, key: Key, action: Action, modifiers: Modifiers) {}

    /// A character was typed.
    fn on_char(&mut self, frame: &mut F, codepoint: char) {}

    /// A character was typed, with the modifiers held.
    fn on_char_mods(&mut self, frame: &mut F, codepoint: char, modifiers: Modifiers) {}

    /// A mouse button was pressed or released.
    fn on_mouse_button(
        &mut self,
        frame: &mut F,
        button: MouseButton,
        action: Action,
        modifiers: Modifiers,
    ) {}

    /// The cursor moved.
    fn on_cursor(&mut self, frame: &mut F, position: DVec2) {}

    /// The cursor entered or left the window.
    fn on_cursor_enter(&mut self, frame: &mut F, entered: bool) {}

    /// The wheel or touchpad scrolled.
    fn on_scroll(&mut self, frame: &mut F, offset: DVec2) {}

    /// Files were dropped onto the window.
    fn on_drop(&mut self, frame: &mut F, paths: &[PathBuf]) {}

    /// The window moved.
    fn on_window_move(&mut self, frame: &mut F, position: IVec2) {}

    /// The drawable area was resized.
    fn on_window_resize(&mut self, frame: &mut F, width: u32, height: u32) {}

    /// The user asked to close the window. The frame closes afterwards.
    fn on_window_close(&mut self, frame: &mut F) {}

    /// The window contents need redrawing.
    fn on_window_refresh(&mut self, frame: &mut F) {}

    /// The window gained or lost focus.
    fn on_window_focus(&mut self, frame: &mut F, focused: bool) {}

    /// The content scale changed.
    fn on_window_content_scale(&mut self, frame: &mut F, scale: Vec2) {}

    /// Called once per frame, before any tick.
    fn on_input(&mut self, frame: &mut F) {}

    /// Called once per fixed tick of `dt` seconds.
    fn on_tick(&mut self, frame: &mut F, dt: f32) {}

    /// Called once per frame; `dt` is the time since the last whole tick.
    fn on_render(&mut self, frame: &mut F, dt: f32) {}
}

/// Delivers one event to the matching handler method.
///
/// Returns `true` if the event asks for the frame to close.
pub(crate) fn dispatch<F, H>(handler: &mut H, frame: &mut F, event: Event) -> bool
    where F: ?Sized, H: Handler<F> + ?Sized
{
    match event {
        Event::Key { key, action, modifiers } => handler.on_key(frame, key, action, modifiers),
        Event::Char { codepoint, modifiers } => {
            handler.on_char(frame, codepoint);
            handler.on_char_mods(frame, codepoint, modifiers);
        }
        Event::MouseButton { button, action, modifiers } => {
            handler.on_mouse_button(frame, button, action, modifiers)
        }
        Event::Cursor(position) => handler.on_cursor(frame, position),
        Event::CursorEnter(entered) => handler.on_cursor_enter(frame, entered),
        Event::Scroll(offset) => handler.on_scroll(frame, offset),
        Event::Drop(paths) => handler.on_drop(frame, &paths),
        Event::WindowMove(position) => handler.on_window_move(frame, position),
        Event::WindowResize { width, height } => handler.on_window_resize(frame, width, height),
        Event::WindowClose => {
            handler.on_window_close(frame);
            return true;
        }
        Event::WindowRefresh => handler.on_window_refresh(frame),
        Event::WindowFocus(focused) => handler.on_window_focus(frame, focused),
        Event::WindowContentScale(scale) => handler.on_window_content_scale(frame, scale),
    }
    false
}

/// Replaces the undispatched events with those of the latest poll.
///
/// Events left over from an earlier poll are dropped with a warning.
/// Returns `true` if the new events contain a close request.
pub(crate) fn requeue(pending: &mut Vec<Event>, events: Vec<Event>) -> bool {
    let stale = mem::replace(pending, events);
    if !stale.is_empty() {
        warn!("Dropping {} undispatched events", stale.len());
    }
    pending.iter().any(|event| *event == Event::WindowClose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glutin::dpi::{LogicalPosition, LogicalSize};

    fn translate_all(events: Vec<WindowEvent>, input: &mut Input) -> Vec<Event> {
        let mut translated = Vec::new();
        for event in events {
            translate(event, 2.0, input, &mut translated);
        }
        translated
    }

    #[test]
    fn consecutive_drops_are_merged() {
        let mut input = Input::new();
        let events = translate_all(
            vec![
                WindowEvent::DroppedFile(PathBuf::from("a.png")),
                WindowEvent::DroppedFile(PathBuf::from("b.png")),
                WindowEvent::Focused(true),
                WindowEvent::DroppedFile(PathBuf::from("c.png")),
            ],
            &mut input,
        );
        assert_eq!(
            vec![
                Event::Drop(vec![PathBuf::from("a.png"), PathBuf::from("b.png")]),
                Event::WindowFocus(true),
                Event::Drop(vec![PathBuf::from("c.png")]),
            ],
            events,
        );
    }

    #[test]
    fn window_geometry_is_in_pixels() {
        let mut input = Input::new();
        let events = translate_all(
            vec![
                WindowEvent::Resized(LogicalSize::new(400.0, 300.0)),
                WindowEvent::Moved(LogicalPosition::new(10.0, 20.0)),
                WindowEvent::HiDpiFactorChanged(2.0),
            ],
            &mut input,
        );
        assert_eq!(
            vec![
                Event::WindowResize { width: 800, height: 600 },
                Event::WindowMove(IVec2::new(20, 40)),
                Event::WindowContentScale(Vec2::new(2.0, 2.0)),
            ],
            events,
        );
    }

    #[test]
    fn characters_carry_modifiers() {
        let mut input = Input::new();
        input.set_modifiers(Modifiers::SHIFT);
        let events = translate_all(
            vec![WindowEvent::ReceivedCharacter('A'), WindowEvent::CloseRequested],
            &mut input,
        );
        assert_eq!(
            vec![
                Event::Char { codepoint: 'A', modifiers: Modifiers::SHIFT },
                Event::WindowClose,
            ],
            events,
        );
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut input = Input::new();
        input.key(Key::Space, glutin::ElementState::Pressed);
        translate_all(vec![WindowEvent::Focused(false)], &mut input);
        assert!(input.is_key_released(Key::Space));
    }

    #[test]
    fn unhandled_events_are_skipped() {
        let mut input = Input::new();
        let events = translate_all(
            vec![WindowEvent::HoveredFileCancelled, WindowEvent::Destroyed],
            &mut input,
        );
        assert!(events.is_empty());
    }

    /// Records which callbacks ran, in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Handler<u32> for Recorder {
        fn on_char(&mut self, frame: &mut u32, codepoint: char) {
            *frame += 1;
            self.calls.push(format!("char {}", codepoint));
        }

        fn on_char_mods(&mut self, frame: &mut u32, codepoint: char, modifiers: Modifiers) {
            *frame += 1;
            self.calls.push(format!("char_mods {} {}", codepoint, modifiers == Modifiers::CONTROL));
        }

        fn on_window_close(&mut self, _frame: &mut u32) {
            self.calls.push("close".to_string());
        }

        fn on_drop(&mut self, _frame: &mut u32, paths: &[PathBuf]) {
            self.calls.push(format!("drop {}", paths.len()));
        }
    }

    #[test]
    fn characters_reach_both_callbacks() {
        let mut recorder = Recorder::default();
        let mut frame = 0u32;
        let event = Event::Char { codepoint: 'x', modifiers: Modifiers::CONTROL };
        assert!(!dispatch(&mut recorder, &mut frame, event));
        assert_eq!(2, frame);
        assert_eq!(vec!["char x".to_string(), "char_mods x true".to_string()], recorder.calls);
    }

    #[test]
    fn close_request_asks_to_close() {
        let mut recorder = Recorder::default();
        let mut frame = 0u32;
        assert!(!dispatch(&mut recorder, &mut frame, Event::Drop(vec![PathBuf::from("a")])));
        assert!(!dispatch(&mut recorder, &mut frame, Event::WindowFocus(true)));
        assert!(dispatch(&mut recorder, &mut frame, Event::WindowClose));
        assert_eq!(vec!["drop 1".to_string(), "close".to_string()], recorder.calls);
    }

    #[test]
    fn requeue_keeps_only_the_latest_poll() {
        let mut pending = Vec::new();
        assert!(!requeue(&mut pending, vec![Event::WindowRefresh, Event::CursorEnter(true)]));
        assert_eq!(2, pending.len());

        assert!(requeue(&mut pending, vec![Event::WindowFocus(false), Event::WindowClose]));
        assert_eq!(vec![Event::WindowFocus(false), Event::WindowClose], pending);

        assert!(!requeue(&mut pending, Vec::new()));
        assert!(pending.is_empty());
    }
}
