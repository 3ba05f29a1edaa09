//! loads every icon and sound up front, opens the window,
//! then feeds clicks to the round controller and draws what it returns

mod libclient;
mod libgame;

use crate::libclient::{
    drawing::{draw_frame, retry},
    layout::hit_test,
    settings::{ASSET_DIR, TARGET_FPS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
    sounds::SoundBank,
    textures::{IconImages, TextureStore},
};
use crate::libgame::{
    random::{ChoiceSource, RngSource},
    round::{Event, RoundController, Snapshot, SoundPlayer},
};
use anyhow::Result;
use raylib::prelude::*;
use std::path::Path;

fn handle_input(draw_handle: &RaylibDrawHandle, snapshot: &Snapshot) -> Option<Event> {
    if retry(draw_handle, snapshot) {
        Some(Event::PlayAgainRequested)
    } else if draw_handle.is_mouse_button_pressed(MouseButton::MOUSE_LEFT_BUTTON) {
        hit_test(draw_handle.get_mouse_position(), snapshot)
    } else {
        None
    }
}

fn main_loop<S: ChoiceSource, P: SoundPlayer>(
    handle: &mut RaylibHandle,
    thread: &RaylibThread,
    ts: &TextureStore,
    controller: &mut RoundController<S, P>,
) {
    let mut snapshot = controller.snapshot();

    while !handle.window_should_close() {
        let mut draw_handle = handle.begin_drawing(thread);

        if let Some(event) = handle_input(&draw_handle, &snapshot) {
            snapshot = controller.handle(event);
        }

        let mouse = draw_handle.get_mouse_position();
        draw_frame(&mut draw_handle, ts, &snapshot, mouse);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    set_trace_log(TraceLogType::LOG_FATAL);

    let assets = Path::new(ASSET_DIR);
    let sounds = SoundBank::load(assets)?;
    let icons = IconImages::load(assets)?;

    let (mut handle, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(WINDOW_TITLE)
        .build();
    handle.set_target_fps(TARGET_FPS);
    let ts = TextureStore::upload(&mut handle, &thread, icons)?;
    log::info!("window open");

    let mut controller = RoundController::new(RngSource::from_clock(), sounds);
    main_loop(&mut handle, &thread, &ts, &mut controller);

    log::info!("window closed");
    Ok(())
}
