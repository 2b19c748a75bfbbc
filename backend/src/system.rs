use log::warn;
use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::app::EventSource;
use crate::error::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButtonId {
    // x, y
    Left(i32, i32),
    Right(i32, i32),
    Middle(i32, i32),
    Other(i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    KeyDown(Keycode),
    KeyUp(Keycode),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
    MouseButtonUp(MouseButtonId),
    MouseButtonDown(MouseButtonId),
    // dx, dy (usually -1 or 1 based on direction)
    MouseWheel(i32, i32),
}

pub struct System {
    pub w: u32,
    pub h: u32,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub canvas: Canvas<Window>,
    pub event_pump: sdl2::EventPump,
}

impl System {
    /// Brings up the video subsystem and creates the window with a
    /// hardware-accelerated renderer bound to it. The window is resizable
    /// from creation and never reconfigured afterwards. Everything is
    /// released implicitly at drop.
    pub fn new(title: &str, w: u32, h: u32) -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Init)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Init)?;

        let window = video_subsystem
            .window(title, w, h)
            .position_centered()
            .resizable()
            .build()?;

        // the canvas takes ownership of the window
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()?;

        let event_pump = sdl_context.event_pump().map_err(BackendError::Init)?;

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            canvas,
            event_pump,
        })
    }
}

/// Drawing seam over the SDL canvas, so frame bodies can be exercised
/// against a recording target in tests.
pub trait RenderTarget {
    fn set_draw_color(&mut self, color: Color);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    fn present(&mut self);
}

impl RenderTarget for System {
    fn set_draw_color(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        // drawing errors don't abort the frame
        if let Err(e) = self.canvas.fill_rect(rect) {
            warn!("fill_rect failed: {e}");
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

impl EventSource for System {
    fn drain_events(&mut self) -> Vec<IoEvents> {
        self.event_pump.poll_iter().filter_map(translate_event).collect()
    }
}

pub fn translate_event(event: Event) -> Option<IoEvents> {
    match event {
        Event::Quit { .. } => Some(IoEvents::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => Some(IoEvents::KeyDown(keycode)),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(IoEvents::KeyUp(keycode)),
        Event::MouseMotion {
            x, y, xrel, yrel, ..
        } => Some(IoEvents::MouseMotion(x, y, xrel, yrel)),
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => Some(IoEvents::MouseButtonDown(button_id(mouse_btn, x, y))),
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => Some(IoEvents::MouseButtonUp(button_id(mouse_btn, x, y))),
        Event::MouseWheel { x, y, .. } => Some(IoEvents::MouseWheel(x, y)),
        _ => None,
    }
}

fn button_id(button: MouseButton, x: i32, y: i32) -> MouseButtonId {
    match button {
        MouseButton::Left => MouseButtonId::Left(x, y),
        MouseButton::Right => MouseButtonId::Right(x, y),
        MouseButton::Middle => MouseButtonId::Middle(x, y),
        _ => MouseButtonId::Other(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_event_translates_to_quit() {
        assert_eq!(
            translate_event(Event::Quit { timestamp: 0 }),
            Some(IoEvents::Quit)
        );
    }

    #[test]
    fn unknown_events_are_dropped() {
        assert_eq!(
            translate_event(Event::Unknown {
                timestamp: 0,
                type_: 0x7fff_0000,
            }),
            None
        );
    }
}
