use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
use kaleidoscope::KaleidoscopeApp;

const SCREEN: Vec2 = Vec2::new(400.0, 600.0);

fn frame(ctx: &egui::Context, app: &mut KaleidoscopeApp, time: f64, events: Vec<Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
        time: Some(time),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| kaleidoscope::panels::central_panel(app, ctx));
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

/// Press at `from`, drag through `to` and release there
fn drag(app: &mut KaleidoscopeApp, from: Pos2, to: Pos2) {
    let ctx = egui::Context::default();
    let mid = from + (to - from) / 2.0;

    frame(&ctx, app, 0.0, Vec::new());
    frame(&ctx, app, 0.1, vec![Event::PointerMoved(from), button(from, true)]);
    frame(&ctx, app, 0.2, vec![Event::PointerMoved(mid)]);
    frame(&ctx, app, 0.3, vec![Event::PointerMoved(to)]);
    frame(&ctx, app, 0.4, vec![button(to, false)]);
    frame(&ctx, app, 0.5, Vec::new());
}

#[test]
fn test_drag_on_canvas_draws() {
    let mut app = KaleidoscopeApp::default();
    drag(&mut app, Pos2::new(100.0, 100.0), Pos2::new(140.0, 160.0));

    assert!(!app.state().segments().is_empty());
    assert!(!app.stroke_input_mut().is_drawing());
}

#[test]
fn test_drag_from_swatch_does_not_draw() {
    let mut app = KaleidoscopeApp::default();
    // Swatch sits 16px inside the bottom-right of the 8px-inset canvas
    let swatch_center = Pos2::new(SCREEN.x - 8.0 - 16.0 - 28.0, SCREEN.y - 8.0 - 16.0 - 28.0);
    drag(&mut app, swatch_center, swatch_center - Vec2::new(80.0, 120.0));

    assert!(app.state().segments().is_empty());
    assert!(!app.stroke_input_mut().is_drawing());
}
