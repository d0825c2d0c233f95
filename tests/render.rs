use cairo::ImageSurface;
use sketchnote::Config;
use sketchnote::draw::{Color, RED};
use sketchnote::export::raster::render_surface;
use sketchnote::input::{PointerEvent, SketchSession, StrokeWidth};

const WHITE_PX: [u8; 4] = [255, 255, 255, 255];
const RED_PX: [u8; 4] = [255, 0, 0, 255];

/// Reads an ARGB32 pixel as [r, g, b, a].
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    [
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
        (word >> 24) as u8,
    ]
}

fn draw(session: &mut SketchSession, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    session.handle_pointer(PointerEvent::press(first.0, first.1));
    for (x, y) in rest {
        session.handle_pointer(PointerEvent::moved(*x, *y));
    }
    session.handle_pointer(PointerEvent::Release);
}

#[test]
fn red_diagonal_over_white() {
    let mut session = SketchSession::new(100, 100);
    session.set_color(RED);
    session.set_width(StrokeWidth::Thick);
    draw(&mut session, &[(10.0, 10.0), (50.0, 50.0), (90.0, 90.0)]);

    let mut surface = render_surface(session.sketch(), session.background()).unwrap();
    assert_eq!(pixel(&mut surface, 50, 50), RED_PX);
    assert_eq!(pixel(&mut surface, 30, 30), RED_PX);
    assert_eq!(pixel(&mut surface, 90, 10), WHITE_PX);
    assert_eq!(pixel(&mut surface, 10, 90), WHITE_PX);
}

#[test]
fn eraser_paints_background_over_ink() {
    let mut session = SketchSession::new(60, 60);
    session.set_color(RED);
    session.set_width(StrokeWidth::Thick);
    draw(&mut session, &[(5.0, 30.0), (55.0, 30.0)]);

    session.toggle_erase();
    draw(&mut session, &[(30.0, 5.0), (30.0, 55.0)]);

    let mut surface = render_surface(session.sketch(), session.background()).unwrap();
    assert_eq!(pixel(&mut surface, 30, 30), WHITE_PX);
    assert_eq!(pixel(&mut surface, 10, 30), RED_PX);
}

#[test]
fn undo_restores_previous_render() {
    let mut session = SketchSession::new(40, 40);
    session.set_color(Color::from_rgba8(0, 0, 255, 255));
    session.set_width(StrokeWidth::Thick);
    draw(&mut session, &[(20.0, 2.0), (20.0, 38.0)]);

    let mut before = render_surface(session.sketch(), session.background()).unwrap();
    assert_eq!(pixel(&mut before, 20, 20), [0, 0, 255, 255]);

    session.undo();
    let mut after = render_surface(session.sketch(), session.background()).unwrap();
    assert_eq!(pixel(&mut after, 20, 20), WHITE_PX);
}

#[test]
fn thin_red_diagonal_from_origin() {
    let mut session = SketchSession::new(20, 20);
    session.set_color(Color::parse("#FF0000").unwrap());
    session.set_width(StrokeWidth::Thin);
    draw(&mut session, &[(0.0, 0.0), (10.0, 10.0)]);

    let mut surface = render_surface(session.sketch(), session.background()).unwrap();
    assert_eq!(pixel(&mut surface, 5, 5), RED_PX);
    assert_eq!(pixel(&mut surface, 8, 2), WHITE_PX);
    assert_eq!(pixel(&mut surface, 15, 15), WHITE_PX);
}

#[test]
fn eraser_covers_ink_on_translucent_config_background() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "[canvas]\nwidth = 60\nheight = 60\nbackground = \"#FFFFFF00\"\n",
    )
    .unwrap();
    let config = Config::load_from(&path).unwrap();

    let mut session = config.new_session();
    session.set_color(RED);
    session.set_width(StrokeWidth::Thick);
    draw(&mut session, &[(5.0, 30.0), (55.0, 30.0)]);
    session.toggle_erase();
    draw(&mut session, &[(30.0, 5.0), (30.0, 55.0)]);

    let mut surface = render_surface(session.sketch(), session.background()).unwrap();
    assert_eq!(pixel(&mut surface, 2, 2), WHITE_PX);
    assert_eq!(pixel(&mut surface, 30, 30), WHITE_PX);
    assert_eq!(pixel(&mut surface, 10, 30), RED_PX);
}

#[test]
fn background_alpha_is_ignored_when_painting() {
    let session = SketchSession::new(8, 8);
    let mut surface = render_surface(session.sketch(), Color::new(1.0, 1.0, 1.0, 0.0)).unwrap();
    assert_eq!(pixel(&mut surface, 4, 4), WHITE_PX);
}
