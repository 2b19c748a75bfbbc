use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

/// Setup failures. All of them are fatal: the caller is expected to abort
/// the run, there is no retry path.
#[derive(Debug, Error)]
pub enum BackendError {
    // sdl2 reports subsystem and event pump failures as plain strings
    #[error("couldn't initialize SDL: {0}")]
    Init(String),
    #[error("couldn't create window: {0}")]
    Window(#[from] WindowBuildError),
    #[error("couldn't create renderer: {0}")]
    Renderer(#[from] IntegerOrSdlError),
}
