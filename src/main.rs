//! Scripted demo session for the rotary knob engine
//!
//! Usage: `rotary-knob-demo [config.toml] [output.png]`
//!
//! Drives one knob through a rotating drag, a double-tap reset and an animated
//! jump to the maximum, logging every value change, then renders the final
//! knob to a PNG file.

use std::time::Duration;

use anyhow::Context;
use rotary_knob::input::DoubleTapDetector;
use rotary_knob::ui::{KnobRenderer, KnobScene};
use rotary_knob::{KnobConfig, KnobLayout, Point, Rect, RotaryKnob, TouchEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("reading knob configuration from {path}"))?;
            KnobConfig::from_toml_str(&source)?
        }
        None => KnobConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "knob.png".to_string());

    let mut knob = RotaryKnob::new(config)?;
    knob.set_layout(KnobLayout::from_bounds(Rect::new(0.0, 0.0, 160.0, 160.0)));
    knob.on_value_changed(|event| {
        info!(value = event.value, angle = event.angle, "value changed");
    });

    let mut detector = DoubleTapDetector::new();
    let mut now_ms = 0;
    let mut deliver = |knob: &mut RotaryKnob, event: TouchEvent, at_ms: u64| {
        knob.handle(event);
        if let Some(double_tap) = detector.observe(at_ms, event) {
            knob.handle(double_tap);
        }
    };

    // Quarter turn clockwise from the top of the dial
    let center = knob.layout().knob_center();
    deliver(&mut knob, TouchEvent::Down(dial_point(center, 0.0)), now_ms);
    for step in 1..=18 {
        now_ms += 16;
        let point = dial_point(center, step as f32 * 5.0);
        deliver(&mut knob, TouchEvent::Moved(point), now_ms);
    }
    now_ms += 16;
    deliver(&mut knob, TouchEvent::Up, now_ms);
    info!(value = knob.value(), angle = knob.angle(), "drag finished");

    // Double tap resets to the default value
    let tap_point = dial_point(center, 90.0);
    for _ in 0..2 {
        now_ms += 120;
        deliver(&mut knob, TouchEvent::Down(tap_point), now_ms);
        now_ms += 60;
        deliver(&mut knob, TouchEvent::Up, now_ms);
    }
    run_animation(&mut knob);

    knob.go_to_maximum();
    run_animation(&mut knob);

    let scene = KnobScene::new(knob.layout(), knob.angle(), knob.control_state());
    let pixmap = KnobRenderer::new().render(&scene)?;
    pixmap
        .save_png(&output)
        .with_context(|| format!("writing {output}"))?;
    info!(%output, value = knob.value(), "knob rendered");

    Ok(())
}

fn run_animation(knob: &mut RotaryKnob) {
    while knob.is_animating() {
        knob.advance(FRAME);
    }
}

/// Point 60 units from `center`, `degrees` clockwise from straight up
fn dial_point(center: Point, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + 60.0 * radians.sin(),
        center.y - 60.0 * radians.cos(),
    )
}
