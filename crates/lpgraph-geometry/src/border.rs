use crate::point::Point;

/// Clip the line `y = m·x + b` to `[start_x, end_x]`.
///
/// Returns the segment's two end points, or `None` if either end evaluates
/// to NaN (for example a NaN slope, or an infinite slope at `x = 0`).
pub fn border_points(start_x: f64, end_x: f64, m: f64, b: f64) -> Option<[Point; 2]> {
    let start_y = m * start_x + b;
    let end_y = m * end_x + b;

    if start_y.is_nan() || end_y.is_nan() {
        return None;
    }
    Some([Point::new(start_x, start_y), Point::new(end_x, end_y)])
}
