use image::{Rgba, RgbaImage};

// Background policy from the original assets: near-white or near-transparent
// pixels are trimmed away. Fixed constants, not configurable.
const WHITE_THRESHOLD: u8 = 240;
const ALPHA_THRESHOLD: u8 = 10;

/// Pixel rectangle with exclusive right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Bounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    fn is_full_extent(&self, image: &RgbaImage) -> bool {
        self.left == 0
            && self.top == 0
            && self.right == image.width()
            && self.bottom == image.height()
    }
}

/// Finds the content rectangle of a logo, or `None` when every pixel is
/// background.
///
/// The alpha-coverage pass is cheap but cannot tell "no content" apart from
/// "content touches every edge", so an empty or full-extent result falls
/// through to the per-edge scan.
pub fn detect(image: &RgbaImage) -> Option<Bounds> {
    match alpha_bounds(image) {
        Some(bounds) if !bounds.is_full_extent(image) => {
            log::debug!("alpha bounds: {:?}", bounds);
            Some(bounds)
        }
        _ => {
            let bounds = scan_bounds(image);
            log::debug!("scan bounds: {:?}", bounds);
            bounds
        }
    }
}

/// Fast strategy: bounding box of pixels with any alpha coverage.
fn alpha_bounds(image: &RgbaImage) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        match bounds.as_mut() {
            Some(b) => {
                b.left = b.left.min(x);
                b.top = b.top.min(y);
                b.right = b.right.max(x + 1);
                b.bottom = b.bottom.max(y + 1);
            }
            None => {
                bounds = Some(Bounds {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                });
            }
        }
    }
    bounds
}

/// Fallback strategy: scan from each edge for the first row/column containing
/// a foreground pixel.
fn scan_bounds(image: &RgbaImage) -> Option<Bounds> {
    let (width, height) = image.dimensions();

    let row_has_foreground = |y: u32| (0..width).any(|x| is_foreground(image.get_pixel(x, y)));
    let col_has_foreground = |x: u32| (0..height).any(|y| is_foreground(image.get_pixel(x, y)));

    let top = (0..height).find(|&y| row_has_foreground(y))?;
    let bottom = (0..height).rfind(|&y| row_has_foreground(y))? + 1;
    let left = (0..width).find(|&x| col_has_foreground(x))?;
    let right = (0..width).rfind(|&x| col_has_foreground(x))? + 1;

    Some(Bounds {
        left,
        top,
        right,
        bottom,
    })
}

fn is_foreground(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    let near_white = r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD;
    !near_white && a > ALPHA_THRESHOLD
}
