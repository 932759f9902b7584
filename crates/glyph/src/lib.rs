use image::{ImageBuffer, Rgba};

/// RGBA canvas the glyph is drawn onto.
pub type Canvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Opaque black, the fill of the ⯁ glyph.
pub const FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Diamond corners in pixel coordinates, clockwise from the top:
/// top, right, bottom, left. `margin` is the fraction of `size` left
/// blank on each side, truncated to whole pixels.
pub fn vertices(size: u32, margin: f32) -> [[i64; 2]; 4] {
    let m = (size as f32 * margin) as i64;
    let c = (size / 2) as i64;
    let s = size as i64;
    [[c, m], [s - m, c], [c, s - m], [m, c]]
}

/// Rasterize a filled diamond centered on a transparent `size` x `size`
/// canvas. Every pixel covered by the polygon becomes opaque black; the
/// rest of the canvas stays fully transparent.
pub fn diamond(size: u32, margin: f32) -> Canvas {
    let mut img = Canvas::new(size, size);
    let quad = vertices(size, margin);
    let m = (size as f32 * margin) as i64;
    let s = size as i64;
    // The diamond cannot reach outside [m, size - m] on either axis.
    let lo = m.max(0);
    let hi = (s - m).min(s - 1);
    for y in lo..=hi {
        for x in lo..=hi {
            if covered(&quad, x, y) {
                img.put_pixel(x as u32, y as u32, FILL);
            }
        }
    }
    img
}

// Half-plane test against each clockwise edge; pixels on an edge count
// as covered.
fn covered(quad: &[[i64; 2]; 4], x: i64, y: i64) -> bool {
    for i in 0..4 {
        let [ax, ay] = quad[i];
        let [bx, by] = quad[(i + 1) % 4];
        if (bx - ax) * (y - ay) - (by - ay) * (x - ax) < 0 {
            return false;
        }
    }
    true
}
