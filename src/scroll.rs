//! `reveal`: scroll through a page and report when sections reveal.

use std::rc::Rc;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::config::NavigationConfig;
use crate::context::AppContext;
use crate::log;
use crate::pages::{NavState, PageView, Route, Section};
use crate::reveal::{ElementId, RevealController, ScrollViewport};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealEvent {
    pub section: &'static str,
    /// Scroll offset at which the section revealed.
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub page_height: f64,
    pub reveals: Vec<RevealEvent>,
    /// Sections still hidden at the bottom of the page.
    pub hidden: Vec<&'static str>,
    /// First offset at which the header switched to its scrolled style.
    pub scrolled_at: Option<f64>,
    /// Watches released on teardown.
    pub released: usize,
}

/// Scroll `sections` top to bottom in `step` increments.
pub fn simulate(
    sections: &[Section],
    viewport_height: f64,
    step: f64,
    threshold: f64,
    nav: &NavigationConfig,
) -> Simulation {
    let viewport = Rc::new(ScrollViewport::new(viewport_height));
    let layout: Vec<(ElementId, f64)> = sections
        .iter()
        .zip(0u32..)
        .map(|(section, i)| (ElementId(i), section.height))
        .collect();
    let page_height = viewport.stack(&layout);

    let controller = RevealController::new(viewport.clone()).with_threshold(threshold);
    let subs: Vec<_> = layout
        .iter()
        .map(|&(id, _)| controller.attach_default(id))
        .collect();

    let mut nav = NavState::new(nav);
    let mut scrolled_at = None;
    let mut reported = vec![false; subs.len()];
    let mut reveals = Vec::new();

    let max_scroll = (page_height - viewport_height).max(0.0);
    let mut y = 0.0;
    loop {
        viewport.scroll_to(y);
        if nav.on_scroll(y) && nav.scrolled && scrolled_at.is_none() {
            scrolled_at = Some(y);
        }

        for (i, sub) in subs.iter().enumerate() {
            if sub.is_revealed() && !reported[i] {
                reported[i] = true;
                reveals.push(RevealEvent {
                    section: sections[i].name,
                    scroll_y: y,
                });
            }
        }

        if y >= max_scroll {
            break;
        }
        y = (y + step).min(max_scroll);
    }

    let hidden = subs
        .iter()
        .zip(sections)
        .filter(|(sub, _)| !sub.is_revealed())
        .map(|(_, section)| section.name)
        .collect();

    drop(subs);

    Simulation {
        page_height,
        reveals,
        hidden,
        scrolled_at,
        released: viewport.released_count(),
    }
}

pub fn simulate_route(ctx: &AppContext, route: &str, viewport: f64, step: f64) -> Result<()> {
    if !(viewport > 0.0) {
        bail!("viewport height must be positive, got {viewport}");
    }
    if !(step > 0.0) {
        bail!("scroll step must be positive, got {step}");
    }

    let route = Route::parse(route);
    let view = PageView::build(route.clone(), &ctx.resolver(), &ctx.config);
    let sections = view.page.sections();
    let threshold = ctx.config.reveal.threshold;

    log!("reveal"; "{route}: {} sections, viewport {viewport}px, threshold {threshold}", sections.len());

    let sim = simulate(&sections, viewport, step, threshold, &ctx.config.navigation);
    for event in &sim.reveals {
        log!("reveal"; "{:>7.0}px  {}", event.scroll_y, event.section);
    }
    if let Some(y) = sim.scrolled_at {
        log!("reveal"; "header scrolled at {y:.0}px");
    }
    if !sim.hidden.is_empty() {
        log!("reveal"; "never revealed: {}", sim.hidden.join(", "));
    }
    log!("reveal"; "page height {:.0}px, released {} watches", sim.page_height, sim.released);

    Ok(())
}
