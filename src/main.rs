//! tinct demo
//!
//! Drives the selector headlessly: replays a short scripted interaction,
//! logs the synchronized state after each step, and writes the rendered
//! dialog to a PNG so the painting can be inspected without a host
//! toolkit. Pass an output path as the first argument to override the
//! default `tinct-preview.png`.

use tinct::prelude::*;

#[derive(Debug, Clone)]
enum Message {
    Picked(Colour),
    Cancelled,
}

fn log_state(selector: &ColourSelector<Message>) {
    let model = selector.model();
    log::info!(
        "state: #{} hsb({}, {}, {})",
        model.colour().hex(),
        model.hue(),
        model.saturation(),
        model.brightness(),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut selector = ColourSelector::new(SelectorConfig::default())
        .on_ok(Message::Picked)
        .on_cancel(|| Message::Cancelled);

    selector.show(Some(Colour::new(46, 139, 87)));
    log_state(&selector);

    // Drag down the hue ramp.
    let ramp = selector.hue_ramp_bounds();
    selector.handle_event(&Event::MousePress {
        button: MouseButton::Left,
        position: Point::new(ramp.x + 10.0, ramp.y + 40.0),
        modifiers: Modifiers::default(),
    });
    selector.handle_event(&Event::MouseMove {
        position: Point::new(ramp.x + 10.0, ramp.y + 90.0),
    });
    selector.handle_event(&Event::MouseRelease {
        button: MouseButton::Left,
        position: Point::new(ramp.x + 10.0, ramp.y + 90.0),
        modifiers: Modifiers::default(),
    });
    log_state(&selector);

    // Pick a saturated, bright spot in the colour field.
    let field = selector.colour_field_bounds();
    selector.handle_event(&Event::MousePress {
        button: MouseButton::Left,
        position: Point::new(field.x + 220.0, field.y + 30.0),
        modifiers: Modifiers::default(),
    });
    selector.handle_event(&Event::MouseRelease {
        button: MouseButton::Left,
        position: Point::new(field.x + 220.0, field.y + 30.0),
        modifiers: Modifiers::default(),
    });
    log_state(&selector);

    // Type an over-range saturation; the field is corrected on the next pass.
    selector.handle_event(&Event::MousePress {
        button: MouseButton::Left,
        position: selector.field_bounds(1).center(),
        modifiers: Modifiers::default(),
    });
    selector.handle_event(&Event::KeyPress {
        key: Key::Backspace,
        modifiers: Modifiers::default(),
    });
    selector.handle_event(&Event::KeyPress {
        key: Key::Backspace,
        modifiers: Modifiers::default(),
    });
    selector.handle_event(&Event::TextInput {
        text: "150".to_string(),
    });
    selector.handle_event(&Event::MouseMove {
        position: Point::new(0.0, 0.0),
    });
    log_state(&selector);

    let canvas = selector.render();
    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tinct-preview.png".to_string());
    canvas.save_png(&out)?;
    log::info!("wrote {out}");

    // Confirm and report the final pick.
    let message = selector.handle_event(&Event::KeyPress {
        key: Key::Enter,
        modifiers: Modifiers::default(),
    });
    match message {
        Some(Message::Picked(colour)) => println!("picked #{}", colour.hex()),
        Some(Message::Cancelled) => println!("cancelled"),
        None => println!("no selection"),
    }

    Ok(())
}
