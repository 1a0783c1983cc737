//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::consts::*;
use crate::ui::Rect;

/// Centre-line squares: count, edge length, first y, vertical pitch
const DASH_COUNT: usize = 30;
const DASH_SIZE: f32 = 7.0;
const DASH_START_Y: f32 = 15.0;
const DASH_PITCH: f32 = 17.0;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (r.pos.x, r.pos.y);
    let (x1, y1) = (r.pos.x + r.size.x, r.pos.y + r.size.y);

    // Two triangles
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Static field decoration: top and bottom walls plus the dashed centre line.
///
/// The last few dashes fall below the screen and are left to clipping.
pub fn field_rects() -> Vec<Rect> {
    let mut rects = Vec::with_capacity(DASH_COUNT + 2);
    rects.push(Rect::new(0.0, 0.0, SCREEN_WIDTH, WALL_MARGIN));
    rects.push(Rect::new(
        0.0,
        SCREEN_HEIGHT - WALL_MARGIN,
        SCREEN_WIDTH,
        WALL_MARGIN,
    ));

    let x = SCREEN_WIDTH / 2.0 - 5.0;
    rects.extend((0..DASH_COUNT).map(|i| {
        let y = DASH_START_Y + i as f32 * DASH_PITCH;
        Rect::new(x, y, DASH_SIZE, DASH_SIZE)
    }));
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 5.0, 8.0), [1.0; 4]);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [15.0, 28.0]));
        assert!(verts.iter().all(|v| (10.0..=15.0).contains(&v.position[0])));
    }

    #[test]
    fn test_field_layout() {
        let rects = field_rects();
        assert_eq!(rects.len(), 32);
        assert_eq!(rects[1].pos.y, 470.0);
        assert_eq!(rects[2], Rect::new(315.0, 15.0, 7.0, 7.0));
        let last = rects[31];
        // The dashed line runs past the playfield; the host clips it
        assert_eq!(last.pos.y, 508.0);
        assert!(last.pos.y > SCREEN_HEIGHT);
    }
}
