//! Point-in-rectangle and rectangle-overlap predicates over real-valued
//! 2D points. Rectangles are axis-aligned, given as top-left corner plus
//! (width, height).

use macroquad::math::Vec2;

/// True iff `point` lies within or on the boundary of the rectangle.
/// Inclusive on all four edges.
pub fn point_in_rect(top_left: Vec2, size: Vec2, point: Vec2) -> bool {
    let lower_right = top_left + size;
    point.x >= top_left.x
        && point.y >= top_left.y
        && point.x <= lower_right.x
        && point.y <= lower_right.y
}

/// True iff the two rectangles have a positive-area intersection. Touching
/// edges do NOT count, unlike `point_in_rect` which is inclusive.
pub fn rect_overlap(a_top_left: Vec2, a_size: Vec2, b_top_left: Vec2, b_size: Vec2) -> bool {
    let a_lower_right = a_top_left + a_size;
    let b_lower_right = b_top_left + b_size;

    a_top_left.x < b_lower_right.x
        && a_lower_right.x > b_top_left.x
        && a_top_left.y < b_lower_right.y
        && a_lower_right.y > b_top_left.y
}
