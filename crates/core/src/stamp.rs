//! Square marker stamping with a shared occupancy mask.
//!
//! The mask's red channel records which box centers have already been
//! stamped. Pixels whose mask red channel is non-zero are never overwritten,
//! so repeated calls sharing one mask never paint over a previous center.

use crate::buffer::PixelAccess;
use crate::color::Color;
use tracing::{debug, trace};

/// Value written into the mask at a stamped center.
pub const CENTER_MARK: Color = Color::rgb(1, 1, 1);

/// Paints a `size × size` box of `color` centered at `(cx, cy)` into `target`.
///
/// The box spans `cx - size/2 ..= cx + size/2` (and likewise in y), clipped to
/// the bounds shared by `mask` and `target`. Only pixels whose mask red channel
/// is 0 are written. When the center itself is written, the mask is marked
/// there with [`CENTER_MARK`]. Returns the number of target pixels written.
pub fn draw_box<M, T>(
    mask: &mut M,
    target: &mut T,
    cx: isize,
    cy: isize,
    size: usize,
    color: Color,
) -> usize
where
    M: PixelAccess + ?Sized,
    T: PixelAccess + ?Sized,
{
    let width = mask.width().min(target.width());
    let height = mask.height().min(target.height());
    let Some((x0, x1)) = clip_span(cx, size, width) else {
        return 0;
    };
    let Some((y0, y1)) = clip_span(cy, size, height) else {
        return 0;
    };

    let mut written = 0;
    for x in x0..=x1 {
        for y in y0..=y1 {
            let free = mask.pixel(x, y).is_some_and(|m| m.r == 0);
            if !free {
                continue;
            }
            if target.set_pixel(x, y, color) {
                written += 1;
            }
            if x as isize == cx && y as isize == cy {
                mask.set_pixel(x, y, CENTER_MARK);
            }
        }
    }
    trace!(cx, cy, size, written, "draw_box");
    written
}

/// Inclusive `[center - size/2, center + size/2]` clipped to `[0, len)`.
fn clip_span(center: isize, size: usize, len: usize) -> Option<(usize, usize)> {
    let half = isize::try_from(size / 2).unwrap_or(isize::MAX);
    let last = isize::try_from(len).ok()?.checked_sub(1)?;
    let lo = center.saturating_sub(half).max(0);
    let hi = center.saturating_add(half).min(last);
    (lo <= hi).then(|| (lo as usize, hi as usize))
}

/// Calls [`draw_box`] for every center in order and returns the total pixels written.
pub fn stamp_markers<M, T, I>(
    mask: &mut M,
    target: &mut T,
    centers: I,
    size: usize,
    color: Color,
) -> usize
where
    M: PixelAccess + ?Sized,
    T: PixelAccess + ?Sized,
    I: IntoIterator<Item = (isize, isize)>,
{
    let mut count = 0;
    let mut total = 0;
    for (cx, cy) in centers {
        total += draw_box(mask, target, cx, cy, size, color);
        count += 1;
    }
    debug!(markers = count, pixels = total, size, "stamped markers");
    total
}
