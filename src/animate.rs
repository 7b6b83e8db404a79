//! `loader`: play the loading animation in the terminal.

use std::{cell::Cell, rc::Rc};

use anyhow::{Context, Result};

use crate::context::AppContext;
use crate::loader::{FrameLoop, Phase, ProgressAnimator, SystemClock};
use crate::log;
use crate::logger::ProgressLine;

pub fn play_loader(ctx: &AppContext) -> Result<()> {
    let config = &ctx.config.loader;
    let resolver = ctx.resolver();
    let text = resolver.resolve_string("loader.text");
    let label = resolver.resolve_string("loader.progressLabel");

    let completed = Rc::new(Cell::new(false));
    let done = Rc::clone(&completed);

    let animator = ProgressAnimator::from_config(SystemClock::new(), config)
        .on_complete(move || done.set(true));
    let mut frames = FrameLoop::new(animator, config.frame_interval());

    let token = frames.cancel_token();
    ctrlc::set_handler(move || token.cancel()).context("Failed to set Ctrl+C handler")?;

    log!("loader"; "{text}");
    let mut line = ProgressLine::new("loader");
    let phase = frames.run(|frame| line.draw(frame.progress));
    line.finish();

    match phase {
        Phase::Done if completed.get() => log!("loader"; "{label}: done"),
        Phase::Cancelled => log!("loader"; "cancelled at {}%", frames.animator().progress()),
        other => log!("loader"; "stopped in {other:?}"),
    }
    Ok(())
}
