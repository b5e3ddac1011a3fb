//! Live window for `rdm watch`, backed by macroquad.

use crate::error::CliError;
use log::{error, info};
use macroquad::prelude::*;
use rdm_core::{Config, DotField, Frame, RdmError};
use rdm_task::pixel::frame_to_rgba;
use rdm_task::Task;
use std::cell::RefCell;
use std::rc::Rc;

/// Uploads each presented frame into a texture and draws it at the origin.
struct Screen {
    texture: Option<Texture2D>,
    background: Color,
}

impl Screen {
    fn new(config: &Config) -> Self {
        let bg = config.background_color;
        Self {
            texture: None,
            background: Color::from_rgba(bg.r, bg.g, bg.b, 255),
        }
    }
}

impl rdm_core::Display for Screen {
    fn present(&mut self, frame: &Frame) -> Result<(), RdmError> {
        let width = u16::try_from(frame.width())
            .map_err(|_| RdmError::RenderBackend("frame too wide for a texture".into()))?;
        let height = u16::try_from(frame.height())
            .map_err(|_| RdmError::RenderBackend("frame too tall for a texture".into()))?;
        let image = Image {
            bytes: frame_to_rgba(frame),
            width,
            height,
        };
        let texture = self.texture.get_or_insert_with(|| {
            let texture = Texture2D::from_image(&image);
            texture.set_filter(FilterMode::Nearest);
            texture
        });
        texture.update(&image);
        clear_background(self.background);
        draw_texture(texture, 0.0, 0.0, WHITE);
        Ok(())
    }

    fn name(&self) -> &str {
        "window"
    }
}

#[derive(Default)]
struct Session {
    frames: u64,
    recycles: u64,
    failure: Option<RdmError>,
}

/// What a finished `watch` session did.
pub struct WatchSummary {
    pub frames: u64,
    pub recycles: u64,
}

/// Opens a window titled `config.window_title` and animates the field
/// until Escape is pressed, the window closes, or `max_frames` have run.
pub fn watch(
    config: Config,
    seed: u64,
    fps: u32,
    max_frames: Option<usize>,
) -> Result<WatchSummary, CliError> {
    let size = i32::try_from(config.display_size())
        .map_err(|_| CliError::Display("display size exceeds window limits".into()))?;
    let conf = Conf {
        window_title: config.window_title.clone(),
        window_width: size,
        window_height: size,
        window_resizable: false,
        ..Default::default()
    };

    let screen = Screen::new(&config);
    let field = DotField::from_seed(config, seed)?;
    let mut task = Task::new(field)
        .with_display(Box::new(screen))
        .with_fps(fps)?;

    let session = Rc::new(RefCell::new(Session::default()));
    let shared = Rc::clone(&session);

    macroquad::Window::from_config(conf, async move {
        let mut frames = 0usize;
        while max_frames.map_or(true, |max| frames < max) {
            if is_key_pressed(KeyCode::Escape) {
                info!("escape pressed");
                break;
            }
            task.run_frame();
            let presented = task.render_frame();
            let mut state = shared.borrow_mut();
            state.frames = task.field().tick();
            state.recycles = task.field().recycle_count();
            if let Err(e) = presented {
                error!("{e}");
                state.failure = Some(e);
                break;
            }
            drop(state);
            frames += 1;
            next_frame().await;
        }
        if let Err(e) = task.quit() {
            shared.borrow_mut().failure.get_or_insert(e);
        }
    });

    let state = session.replace(Session::default());
    if let Some(e) = state.failure {
        return Err(e.into());
    }
    Ok(WatchSummary {
        frames: state.frames,
        recycles: state.recycles,
    })
}
