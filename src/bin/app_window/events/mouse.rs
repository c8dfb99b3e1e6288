//! 鼠标坐标换算

use neovia_gui::Point;

/// 窗口物理坐标换算到画布坐标（窗口可以是画布的任意缩放）
pub fn to_canvas_point(
    x: f64,
    y: f64,
    window_width: u32,
    window_height: u32,
    canvas_width: u32,
    canvas_height: u32,
) -> Option<Point> {
    if window_width == 0 || window_height == 0 {
        return None;
    }
    let cx = x * canvas_width as f64 / window_width as f64;
    let cy = y * canvas_height as f64 / window_height as f64;
    if cx < 0.0 || cy < 0.0 || cx >= canvas_width as f64 || cy >= canvas_height as f64 {
        return None;
    }
    Some(Point::new(cx as f32, cy as f32))
}
