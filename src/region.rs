//! Rectangle primitives over RGBA canvases
//!
//! All skin transforms are built from a handful of rectangle operations:
//! straight copy, mirrored copy, in-place horizontal flip, and the
//! snapshot-based swap-and-flip of two regions. Plus two transparency probes
//! used by the model detector and the repair gate.
//!
//! Regions are never clamped. Every rectangle used by the crate is a fixed
//! constant from [`crate::layout`], so a region that falls outside the canvas
//! is a programming error and panics inside the image buffer.

use image::{Rgba, RgbaImage};

/// Alpha threshold used by every probe: a pixel is opaque iff `alpha > 0`.
pub const ALPHA_THRESHOLD: u8 = 0;

/// A rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Create a region from its top-left corner and size.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether two regions have identical width and height.
    pub const fn same_size(&self, other: &Region) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Number of pixels covered by the region.
    pub const fn area(&self) -> usize {
        (self.width * self.height) as usize
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{}x{})", self.x, self.y, self.width, self.height)
    }
}

fn assert_same_size(a: Region, b: Region) {
    assert!(a.same_size(&b), "region size mismatch: {} vs {}", a, b);
}

/// Read every pixel of a region into a row-major buffer.
fn snapshot(canvas: &RgbaImage, region: Region) -> Vec<Rgba<u8>> {
    let mut buf = Vec::with_capacity(region.area());
    for yy in 0..region.height {
        for xx in 0..region.width {
            buf.push(*canvas.get_pixel(region.x + xx, region.y + yy));
        }
    }
    buf
}

/// Write a row-major buffer into `region`, flipping each row horizontally.
fn write_mirrored(canvas: &mut RgbaImage, region: Region, buf: &[Rgba<u8>]) {
    let w = region.width as usize;
    for yy in 0..region.height {
        let row = yy as usize * w;
        for xx in 0..region.width {
            let src_x = w - 1 - xx as usize;
            canvas.put_pixel(region.x + xx, region.y + yy, buf[row + src_x]);
        }
    }
}

/// Copy `from` on `src` onto `to` on `dst`, pixel for pixel.
///
/// # Panics
/// If the regions differ in size or either falls outside its canvas.
pub fn copy_region(src: &RgbaImage, from: Region, dst: &mut RgbaImage, to: Region) {
    assert_same_size(from, to);
    for yy in 0..from.height {
        for xx in 0..from.width {
            let pixel = *src.get_pixel(from.x + xx, from.y + yy);
            dst.put_pixel(to.x + xx, to.y + yy, pixel);
        }
    }
}

/// Copy `from` onto `to` with a horizontal flip: destination column `x`
/// receives source column `width - 1 - x` of the same row.
///
/// # Panics
/// If the regions differ in size or either falls outside its canvas.
pub fn mirror_copy_region(src: &RgbaImage, from: Region, dst: &mut RgbaImage, to: Region) {
    assert_same_size(from, to);
    for yy in 0..from.height {
        for xx in 0..from.width {
            let pixel = *src.get_pixel(from.x + (from.width - 1 - xx), from.y + yy);
            dst.put_pixel(to.x + xx, to.y + yy, pixel);
        }
    }
}

/// Flip a region horizontally in place.
///
/// Each column pair is read before either side is written. With an odd
/// width the center column stays where it is.
pub fn mirror_in_place(canvas: &mut RgbaImage, region: Region) {
    for yy in 0..region.height {
        let y = region.y + yy;
        for xx in 0..region.width / 2 {
            let left_x = region.x + xx;
            let right_x = region.x + region.width - 1 - xx;
            let left = *canvas.get_pixel(left_x, y);
            let right = *canvas.get_pixel(right_x, y);
            canvas.put_pixel(left_x, y, right);
            canvas.put_pixel(right_x, y, left);
        }
    }
}

/// Trade the contents of two equally sized regions, flipping both.
///
/// Both regions are snapshotted before anything is written, so adjacent or
/// overlapping regions come out the same as disjoint ones: `b` becomes the
/// mirror of the old `a`, then `a` becomes the mirror of the old `b`.
///
/// # Panics
/// If the regions differ in size or either falls outside the canvas.
pub fn swap_mirror_regions(canvas: &mut RgbaImage, a: Region, b: Region) {
    assert_same_size(a, b);
    let buf_a = snapshot(canvas, a);
    let buf_b = snapshot(canvas, b);
    write_mirrored(canvas, b, &buf_a);
    write_mirrored(canvas, a, &buf_b);
}

fn column_is_transparent(canvas: &RgbaImage, x: u32, region: Region, threshold: u8) -> bool {
    (region.y..region.y + region.height).all(|y| canvas.get_pixel(x, y)[3] <= threshold)
}

/// True iff every pixel in `region` has `alpha <= threshold`.
pub fn is_fully_transparent(canvas: &RgbaImage, region: Region, threshold: u8) -> bool {
    (region.x..region.x + region.width).all(|x| column_is_transparent(canvas, x, region, threshold))
}

/// Length of the run of fully transparent columns anchored at the right edge
/// of `region`. Counting stops at the first column holding an opaque pixel.
pub fn count_transparent_from_right(canvas: &RgbaImage, region: Region, threshold: u8) -> u32 {
    (0..region.width)
        .map(|off| region.x + region.width - 1 - off)
        .take_while(|&x| column_is_transparent(canvas, x, region, threshold))
        .count() as u32
}
