use std::process;

use backend::app::{self, App, AppResult};
use backend::error::BackendError;
use backend::system::{IoEvents, RenderTarget, System};
use log::info;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

// SDL3's SDL_SetAppMetadata has no sdl2-crate counterpart, so the
// metadata is only logged at startup.
const APP_NAME: &str = "Example Renderer Clear";
const APP_VERSION: &str = "1.0";
const APP_ID: &str = "com.example.renderer-clear";

const WINDOW_TITLE: &str = "examples/renderer/clear";
const WINDOW_W: u32 = 640;
const WINDOW_H: u32 = 480;

const CLEAR_COLOR: Color = Color::RGBA(0, 0, 0, 255);
const FILL_COLOR: Color = Color::RGBA(64, 64, 255, 255);

struct RendererClear;

impl App for RendererClear {
    type Ctx = System;

    fn init(&mut self) -> Result<System, BackendError> {
        info!("{APP_NAME} {APP_VERSION} ({APP_ID})");
        System::new(WINDOW_TITLE, WINDOW_W, WINDOW_H)
    }

    fn event(&mut self, _system: &mut System, event: &IoEvents) -> AppResult {
        on_event(event)
    }

    fn iterate(&mut self, system: &mut System) -> AppResult {
        draw_frame(system);
        AppResult::Continue
    }

    fn quit(&mut self, result: AppResult) {
        info!("shutting down: {result:?}");
    }
}

fn on_event(event: &IoEvents) -> AppResult {
    match event {
        IoEvents::Quit => AppResult::Success,
        _ => AppResult::Continue,
    }
}

// The same frame every iteration: clear to black, one blue square, present.
fn draw_frame(target: &mut impl RenderTarget) {
    target.set_draw_color(CLEAR_COLOR);
    target.clear();

    target.set_draw_color(FILL_COLOR);
    target.fill_rect(Rect::new(50, 50, 100, 100));

    target.present();
}

fn main() {
    env_logger::init();
    let result = app::run(&mut RendererClear);
    process::exit(result.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Keycode;

    #[derive(Debug, PartialEq)]
    enum DrawOp {
        SetColor(Color),
        Clear,
        FillRect(Rect),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<DrawOp>,
    }

    impl RenderTarget for Recorder {
        fn set_draw_color(&mut self, color: Color) {
            self.ops.push(DrawOp::SetColor(color));
        }

        fn clear(&mut self) {
            self.ops.push(DrawOp::Clear);
        }

        fn fill_rect(&mut self, rect: Rect) {
            self.ops.push(DrawOp::FillRect(rect));
        }

        fn present(&mut self) {
            self.ops.push(DrawOp::Present);
        }
    }

    #[test]
    fn frame_sequence_is_deterministic() {
        let expected = [
            DrawOp::SetColor(Color::RGBA(0, 0, 0, 255)),
            DrawOp::Clear,
            DrawOp::SetColor(Color::RGBA(64, 64, 255, 255)),
            DrawOp::FillRect(Rect::new(50, 50, 100, 100)),
            DrawOp::Present,
        ];

        let mut recorder = Recorder::default();
        draw_frame(&mut recorder);
        assert_eq!(recorder.ops, expected);

        // no per-frame state: the second frame is identical
        recorder.ops.clear();
        draw_frame(&mut recorder);
        assert_eq!(recorder.ops, expected);
    }

    #[test]
    fn only_quit_ends_the_run() {
        assert_eq!(on_event(&IoEvents::Quit), AppResult::Success);
        assert_eq!(
            on_event(&IoEvents::KeyDown(Keycode::Escape)),
            AppResult::Continue
        );
        assert_eq!(on_event(&IoEvents::MouseWheel(0, 1)), AppResult::Continue);
    }
}
