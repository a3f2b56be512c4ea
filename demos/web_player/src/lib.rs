// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web video player with custom controls over a native `<video>` element.
//!
//! Builds the player page (video, center play overlay, control bar, info
//! panel), mounts a [`WebPlayer`] onto it, and keeps it alive until
//! [`unmount`] is called.
//!
//! Build with: `wasm-pack build --target web demos/web_player`
//! Then serve `demos/web_player/` and open `index.html`.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use std::cell::RefCell;

use playhead_backend_web::{
    ControlWidgets, ControlsUi, ENTER_FULLSCREEN_GLYPH, MountError, PAUSE_GLYPH, PLAY_GLYPH,
    PageConfig, SPEAKER_GLYPH, WebPlayer, console, parse_log_level,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSourceElement,
    HtmlVideoElement,
};

const HOST_ID: &str = "playhead";
const SKIP_BACK_GLYPH: &str = "\u{23EA}";
const SKIP_FORWARD_GLYPH: &str = "\u{23E9}";

const ICON_BUTTON_CSS: &str = "padding: 8px; border: 0; border-radius: 999px; background: transparent; color: #ffffff; font-size: 20px; line-height: 1; cursor: pointer;";

thread_local! {
    static PLAYER: RefCell<Option<WebPlayer>> = const { RefCell::new(None) };
}

/// Entry point for the player page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = playhead_backend_web::document()?;
    let host = host_element(&document)?;

    let mut config = PageConfig::default();
    let log_level = host
        .get_attribute("data-log-level")
        .and_then(|raw| parse_log_level(&raw))
        .unwrap_or(config.log_level);
    console::init(log_level);
    config.apply_attributes(&host);

    let ui = build_page(&document, &host, &config)?;
    let player = WebPlayer::mount(ui, config.player, config.labels.clone())?;
    tracing::debug!(?player, "page ready");

    PLAYER.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(player) {
            previous.unmount();
        }
    });
    Ok(())
}

/// Tears down the mounted player, removing its listeners.
#[wasm_bindgen]
pub fn unmount() {
    let player = PLAYER.with(|slot| slot.borrow_mut().take());
    if let Some(player) = player {
        player.unmount();
    }
}

/// Returns the `#playhead` element, creating it under `<body>` if missing.
fn host_element(doc: &Document) -> Result<HtmlElement, JsValue> {
    if let Some(existing) = doc.get_element_by_id(HOST_ID) {
        return Ok(existing.unchecked_into());
    }
    let body = doc.body().ok_or(MountError::MissingBody)?;
    let host = element(doc, "main")?;
    host.set_id(HOST_ID);
    body.append_child(&host)?;
    Ok(host)
}

fn build_page(doc: &Document, host: &HtmlElement, config: &PageConfig) -> Result<ControlsUi, JsValue> {
    style(
        host,
        "min-height: 100vh; box-sizing: border-box; padding: 16px; display: flex; align-items: center; justify-content: center; background: linear-gradient(to bottom right, #111827, #1f2937, #000000); font-family: ui-sans-serif, system-ui, sans-serif;",
    )?;

    let column = element(doc, "div")?;
    style(&column, "width: 100%; max-width: 896px; margin: 0 auto;")?;
    host.append_child(&column)?;

    let container = element(doc, "div")?;
    style(
        &container,
        "position: relative; background: #000000; border-radius: 12px; overflow: hidden; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.6);",
    )?;
    column.append_child(&container)?;

    let video = create_video(doc, config)?;
    container.append_child(&video)?;

    let center_overlay = element(doc, "div")?;
    style(
        &center_overlay,
        "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.2);",
    )?;
    let center_button = button(
        doc,
        PLAY_GLYPH,
        &config.labels.play,
        "width: 80px; height: 80px; border-radius: 50%; border: 2px solid rgba(255,255,255,0.3); background: rgba(255,255,255,0.2); backdrop-filter: blur(4px); color: #ffffff; font-size: 28px; cursor: pointer;",
    )?;
    center_overlay.append_child(&center_button)?;
    container.append_child(&center_overlay)?;

    let controls_bar = element(doc, "div")?;
    style(
        &controls_bar,
        "position: absolute; left: 0; right: 0; bottom: 0; box-sizing: border-box; padding: 24px; background: linear-gradient(to top, rgba(0,0,0,0.9), rgba(0,0,0,0.6), transparent); transition: opacity 300ms;",
    )?;
    container.append_child(&controls_bar)?;

    // Seek bar and time labels.
    let progress = element(doc, "div")?;
    style(&progress, "margin-bottom: 16px;")?;
    let progress_track = element(doc, "div")?;
    style(
        &progress_track,
        "width: 100%; height: 8px; border-radius: 999px; background: rgba(75,85,99,0.5); cursor: pointer; touch-action: none;",
    )?;
    let progress_fill = element(doc, "div")?;
    style(
        &progress_fill,
        "width: 0%; height: 100%; border-radius: 999px; background: linear-gradient(to right, #3b82f6, #a855f7); pointer-events: none;",
    )?;
    progress_track.append_child(&progress_fill)?;
    let times = element(doc, "div")?;
    style(
        &times,
        "display: flex; justify-content: space-between; margin-top: 4px; font-size: 12px; color: #d1d5db;",
    )?;
    let current_label = element(doc, "span")?;
    let duration_label = element(doc, "span")?;
    times.append_child(&current_label)?;
    times.append_child(&duration_label)?;
    progress.append_child(&progress_track)?;
    progress.append_child(&times)?;
    controls_bar.append_child(&progress)?;

    // Transport, volume and fullscreen.
    let row = element(doc, "div")?;
    style(&row, "display: flex; align-items: center; justify-content: space-between;")?;
    let transport = element(doc, "div")?;
    style(&transport, "display: flex; align-items: center; gap: 16px;")?;

    let skip_back = button(doc, SKIP_BACK_GLYPH, &config.labels.skip_back, ICON_BUTTON_CSS)?;
    let play_button = button(
        doc,
        PAUSE_GLYPH,
        &config.labels.pause,
        "padding: 12px; border: 0; border-radius: 999px; background: rgba(255,255,255,0.2); backdrop-filter: blur(4px); color: #ffffff; font-size: 20px; line-height: 1; cursor: pointer;",
    )?;
    let skip_forward = button(
        doc,
        SKIP_FORWARD_GLYPH,
        &config.labels.skip_forward,
        ICON_BUTTON_CSS,
    )?;

    let volume_group = element(doc, "div")?;
    style(&volume_group, "display: flex; align-items: center; gap: 8px;")?;
    let mute_button = button(doc, SPEAKER_GLYPH, &config.labels.mute, ICON_BUTTON_CSS)?;
    let volume = create_volume_slider(doc, config.volume_step)?;
    volume_group.append_child(&mute_button)?;
    volume_group.append_child(&volume)?;

    let fullscreen_button = button(
        doc,
        ENTER_FULLSCREEN_GLYPH,
        &config.labels.fullscreen,
        ICON_BUTTON_CSS,
    )?;

    transport.append_child(&skip_back)?;
    transport.append_child(&play_button)?;
    transport.append_child(&skip_forward)?;
    transport.append_child(&volume_group)?;
    transport.append_child(&fullscreen_button)?;

    let title_block = element(doc, "div")?;
    style(&title_block, "text-align: right;")?;
    let title = element(doc, "h2")?;
    style(
        &title,
        "margin: 0 0 4px; color: #ffffff; font-size: 20px; font-weight: 700;",
    )?;
    title.set_text_content(Some(&config.title));
    title_block.append_child(&title)?;

    row.append_child(&transport)?;
    row.append_child(&title_block)?;
    controls_bar.append_child(&row)?;

    column.append_child(&info_panel(doc, config)?)?;

    Ok(ControlsUi {
        container,
        video,
        center_button,
        progress_track,
        skip_back,
        skip_forward,
        widgets: ControlWidgets {
            center_overlay,
            controls_bar,
            progress_fill,
            current_label,
            duration_label,
            play_button,
            mute_button,
            volume,
            fullscreen_button,
        },
    })
}

fn create_video(doc: &Document, config: &PageConfig) -> Result<HtmlVideoElement, JsValue> {
    let video: HtmlVideoElement = doc.create_element("video")?.unchecked_into();
    video.set_controls(false);
    video.set_autoplay(false);
    video.set_preload("metadata");
    video.set_attribute("playsinline", "")?;
    style(
        &video,
        "width: 100%; aspect-ratio: 16 / 9; object-fit: cover; display: block; background: #000000;",
    )?;
    for source in &config.sources {
        let el: HtmlSourceElement = doc.create_element("source")?.unchecked_into();
        el.set_src(&source.url);
        el.set_type(&source.mime);
        video.append_child(&el)?;
    }
    video.append_child(&doc.create_text_node(&config.fallback_text))?;
    Ok(video)
}

fn create_volume_slider(doc: &Document, step: f64) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = doc.create_element("input")?.unchecked_into();
    input.set_type("range");
    input.set_min("0");
    input.set_max("1");
    input.set_step(&format!("{step}"));
    input.set_value("1");
    input.set_class_name("playhead-slider");
    style(
        &input,
        "width: 80px; height: 4px; border-radius: 8px; background: #4b5563; cursor: pointer;",
    )?;
    Ok(input)
}

fn info_panel(doc: &Document, config: &PageConfig) -> Result<HtmlElement, JsValue> {
    let panel = element(doc, "div")?;
    style(
        &panel,
        "margin-top: 24px; padding: 24px; border-radius: 12px; background: rgba(31,41,55,0.5); backdrop-filter: blur(4px);",
    )?;
    let heading = element(doc, "h3")?;
    style(
        &heading,
        "margin: 0 0 8px; color: #ffffff; font-size: 18px; font-weight: 600;",
    )?;
    heading.set_text_content(Some(&config.panel_heading));
    let body = element(doc, "p")?;
    style(&body, "margin: 0; color: #d1d5db; font-size: 14px;")?;
    body.set_text_content(Some(&config.description));
    panel.append_child(&heading)?;
    panel.append_child(&body)?;
    Ok(panel)
}

fn button(
    doc: &Document,
    glyph: &str,
    title: &str,
    css: &str,
) -> Result<HtmlButtonElement, JsValue> {
    let button: HtmlButtonElement = doc.create_element("button")?.unchecked_into();
    button.set_type("button");
    button.set_text_content(Some(glyph));
    button.set_title(title);
    style(&button, css)?;
    Ok(button)
}

fn element(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

fn style(el: &web_sys::Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}
