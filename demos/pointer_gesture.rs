use serde_json::json;
use wd_pointer::*;

fn main() -> anyhow::Result<()> {
    // Record a click-and-drag gesture on a mouse pointer
    let mut mouse = PointerDevice::new("mouse", "default mouse")?;

    let source = ElementHandle::new("E1");
    mouse.move_to_element(&source);
    mouse.press(0);
    mouse.pause(0.25);
    mouse.move_to(640.0, 360.0);
    mouse.pointer_up(0);

    println!("Mouse gesture:");
    println!("{}", serde_json::to_string_pretty(&mouse.encode())?);

    // A pen device with device-specific extras
    let mut pen = PointerDevice::with_kind(PointerKind::Pen);

    let mut extra = ExtraFields::new();
    extra.insert("pressure".to_string(), json!(0.7));
    extra.insert("tilt_x".to_string(), json!(-15));
    pen.move_to(120.0, 80.0);
    pen.pointer_down(extra);
    pen.pointer_up(0);

    println!("Pen gesture:");
    println!("{}", serde_json::to_string_pretty(&pen.encode())?);

    Ok(())
}
