use term_cube::core::{Renderer, FACES};
use term_cube::types::{Vec3, DEPTH_BIAS};

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "{a} != {b}");
}

#[test]
fn default_frame_draws_something() {
    let mut r = Renderer::default();
    r.render_frame();

    let canvas = r.canvas();
    assert_eq!(canvas.len(), 160 * 44);
    assert!(canvas.symbols().iter().any(|&c| c != ' '));
    assert!(canvas.depth().iter().any(|&d| d > 0.0));
}

#[test]
fn front_face_covers_screen_center_at_rest() {
    let mut r = Renderer::default();
    r.render_frame();

    // width/2 + offset = 80 - 40, height/2 = 22.
    let idx = 22 * 160 + 40;
    assert_eq!(r.canvas().symbols()[idx], '@');
    assert_close(r.canvas().depth()[idx], 1.0 / (DEPTH_BIAS - 20.0));
}

#[test]
fn written_cells_hold_face_symbols_and_untouched_cells_hold_background() {
    let mut r = Renderer::new(12.0, 80, 30, 0.7);
    r.set_background('.');
    r.render_frame();

    let canvas = r.canvas();
    for (&sym, &depth) in canvas.symbols().iter().zip(canvas.depth()) {
        if depth == 0.0 {
            assert_eq!(sym, '.');
        } else {
            assert!(depth > 0.0);
            assert!(FACES.iter().any(|f| f.symbol == sym), "unexpected {sym:?}");
        }
    }
}

#[test]
fn single_sample_projects_to_expected_cell() {
    let f = 20.0;
    let mut r = Renderer::new(1.0, 10, 10, 1.0);
    assert!(r.set_depth_scale(f));

    // Front face (z = -h) at u = v = -1, all angles zero, no offset yet.
    let p = FACES[0].point(-1.0, -1.0, 1.0);
    assert_eq!(p, Vec3::new(-1.0, -1.0, -1.0));

    let projected = r.project_point(p);
    let inv_depth = 1.0 / 99.0f32;
    assert_eq!(projected.inv_depth, inv_depth);
    assert_eq!(projected.x, 5.0 + 0.0 + f * inv_depth * -1.0 * 2.0);
    assert_eq!(projected.y, 5.0 + f * inv_depth * -1.0);

    // 4.59.. and 4.79.. truncate to (4, 4).
    assert_eq!(projected.cell(10, 10), Some(4 + 4 * 10));
}

#[test]
fn horizontal_offset_applies_after_clear() {
    let mut r = Renderer::new(1.0, 10, 10, 1.0);
    r.render_frame();
    assert_eq!(r.horizontal_offset(), -2.0);

    let projected = r.project_point(Vec3::new(-1.0, -1.0, -1.0));
    let inv_depth = 1.0 / 99.0f32;
    assert_eq!(projected.x, 5.0 + -2.0 + 20.0 * inv_depth * -1.0 * 2.0);
}

#[test]
fn closer_sample_wins_regardless_of_order() {
    let near = Vec3::new(0.0, 0.0, -5.0);
    let far = Vec3::new(0.0, 0.0, 5.0);

    let mut a = Renderer::new(5.0, 20, 20, 1.0);
    a.composite(near, 'n');
    a.composite(far, 'f');

    let mut b = Renderer::new(5.0, 20, 20, 1.0);
    b.composite(far, 'f');
    b.composite(near, 'n');

    let idx = a.project_point(near).cell(20, 20).unwrap();
    assert_eq!(idx, b.project_point(far).cell(20, 20).unwrap());
    assert_eq!(a.canvas().symbols()[idx], 'n');
    assert_eq!(b.canvas().symbols()[idx], 'n');
}

#[test]
fn resize_yields_exact_buffer_sizes() {
    let mut r = Renderer::new(5.0, 40, 20, 1.0);
    assert!(r.set_window_width(30));
    assert!(r.set_window_height(7));
    assert_eq!((r.window_width(), r.window_height()), (30, 7));
    assert_eq!(r.canvas().len(), 210);
    assert_eq!(r.canvas().depth().len(), 210);

    r.set_background('-');
    r.render_frame();
    let untouched = r
        .canvas()
        .symbols()
        .iter()
        .zip(r.canvas().depth())
        .filter(|(_, d)| **d == 0.0)
        .all(|(s, _)| *s == '-');
    assert!(untouched);
}

#[test]
fn zero_sized_window_renders_nothing() {
    let mut r = Renderer::new(5.0, 40, 20, 1.0);
    assert!(r.set_window_height(0));
    assert!(r.canvas().is_empty());
    r.render_frame();
    assert_eq!(r.canvas().rows().count(), 0);
}

#[test]
fn negative_values_are_rejected_and_leave_state_alone() {
    let mut r = Renderer::new(5.0, 40, 20, 1.5);

    assert!(!r.set_sample_step(-0.5));
    assert_eq!(r.sample_step(), 1.5);

    assert!(!r.set_window_width(-1));
    assert!(!r.set_window_height(-20));
    assert_eq!((r.window_width(), r.window_height()), (40, 20));
    assert_eq!(r.canvas().len(), 800);

    assert!(r.set_sample_step(0.25));
    assert_eq!(r.sample_step(), 0.25);
}

#[test]
fn infallible_setters_always_apply() {
    let mut r = Renderer::default();
    assert!(r.set_background('#'));
    assert!(r.set_depth_scale(-1000.0));
    assert_eq!(r.background(), '#');
    assert_eq!(r.depth_scale(), -1000.0);
}

#[test]
fn extreme_zoom_drops_off_screen_samples() {
    for scale in [1e30, f32::INFINITY, -1e30] {
        let mut r = Renderer::default();
        assert!(r.set_depth_scale(scale));
        r.render_frame();

        let canvas = r.canvas();
        assert_eq!(canvas.len(), 160 * 44);
        for (&sym, &depth) in canvas.symbols().iter().zip(canvas.depth()) {
            if depth == 0.0 {
                assert_eq!(sym, ' ');
            } else {
                assert!(FACES.iter().any(|f| f.symbol == sym), "unexpected {sym:?}");
            }
        }
    }
}

#[test]
fn huge_projection_has_no_cell() {
    let mut r = Renderer::new(5.0, 40, 20, 1.0);
    r.set_depth_scale(1e30);
    let projected = r.project_point(Vec3::new(5.0, 5.0, -5.0));
    assert_eq!(projected.cell(40, 20), None);
}
