//! Collision detection between the player circle, obstacle segments and the
//! playfield boundaries.
//!
//! Obstacles are tested with an exact circle-vs-rectangle check. A cheaper
//! bounding-box test gives nearly the same feel but lets the player clip
//! obstacle corners, so it is not offered.

use super::types::{Obstacle, Player, Rect};

/// True if the circle overlaps the rectangle. Touching counts as overlap.
/// Empty rectangles (zero width or height) never collide.
pub fn circle_rect_overlap(cx: f64, cy: f64, radius: f64, rect: &Rect) -> bool {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return false;
    }
    // Nearest point on the rectangle to the circle centre
    let closest_x = cx.clamp(rect.x, rect.right());
    let closest_y = cy.clamp(rect.y, rect.bottom());
    let dx = cx - closest_x;
    let dy = cy - closest_y;
    dx * dx + dy * dy <= radius * radius
}

/// True if the player touches either segment of the obstacle.
pub fn hits_obstacle(player: &Player, obstacle: &Obstacle, field_height: f64) -> bool {
    let top = obstacle.top_rect();
    let bottom = obstacle.bottom_rect(field_height);
    circle_rect_overlap(player.x, player.y, player.radius, &top)
        || circle_rect_overlap(player.x, player.y, player.radius, &bottom)
}

/// True if the player has crossed the ceiling or the floor. Resting exactly
/// on a boundary is still safe.
pub fn hits_boundary(player: &Player, field_height: f64) -> bool {
    player.y - player.radius < 0.0 || player.y + player.radius > field_height
}
