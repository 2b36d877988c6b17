//! Helpers for timeline maps: timestamps, date ranges, browsers and
//! colormap gradients.
//!
//! - [`parse_timestamp`], [`timestamp_in_range`], [`date_in_range`]
//!   and [`DateRange`] deal with the dates attached to map features.
//! - [`is_text_based`] tells whether a [`Browser`] renders in a
//!   terminal (in which case an interactive map is pointless).
//! - [`colormap_gradient`] samples a named [`Colormap`] into a
//!   [`Gradient`], a list of positions in \[0, 1\] with `#rrggbb`
//!   colors.
//!
//! Colormaps are looked up by `[<lib>.]<name>` where `<lib>` is
//! `branca` (the default, [ColorBrewer](https://colorbrewer2.org/)
//! schemes), `mpl` (Matplotlib) or `cmc` (Crameri's scientific colour
//! maps).  The last two are behind the `mpl` and `cmc` features.
//!
//! ```
//! let g = chronomap::colormap_gradient("branca.RdBu_09", 5)?;
//! assert_eq!(g.len(), 5);
//! assert_eq!(g.positions().collect::<Vec<_>>(), [0., 0.25, 0.5, 0.75, 1.]);
//! # Ok::<(), chronomap::Error>(())
//! ```

use std::marker::PhantomData;
use rgb::{RGBA, RGB8};

pub mod browser;
pub mod colormap;
mod error;
mod palettes;
pub mod time;

pub use browser::{is_text_based, Browser, BrowserKind};
pub use colormap::{colormap_gradient, colormap_gradient_default,
                   Colormap, Gradient, Library, DEFAULT_STEPS};
pub use error::{Error, Result};
pub use palettes::PaletteType;
pub use time::{date_in_range, parse_date, parse_timestamp,
               timestamp_in_range, DateRange};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl<Color, R: ColorRange<Color>> ColorRange<Color> for &R {
    #[inline]
    fn rgb(&self, t: f64) -> Color { R::rgb(self, t) }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }

    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return the color as a lowercase `#rrggbb` string.  The alpha
    /// component is dropped and the channels are rounded to the
    /// nearest integer.
    fn to_hex(&self) -> String {
        let RGBA { r, g, b, .. } = self.to_rgba();
        let channel = |x: f64| x.round().clamp(0., 255.) as u8;
        format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
    }
}

/// Convert `0xRRGGBB` to an opaque color.
pub(crate) fn rgba_of_u24(rgb: u32) -> RGBA<f64> {
    RGBA { r: ((rgb >> 16) & 0xff) as f64,
           g: ((rgb >> 8) & 0xff) as f64,
           b: (rgb & 0xff) as f64,
           a: 255. }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

/// Straight line in RGB space between two colors.
#[derive(Clone, Copy)]
struct Segment {
    c0: RGBA<f64>, // first color
    dc: RGBA<f64>, // last - first color
}

impl Segment {
    fn new(c0: RGBA<f64>, c1: RGBA<f64>) -> Self {
        Segment { c0,
                  dc: RGBA { r: c1.r - c0.r, g: c1.g - c0.g,
                             b: c1.b - c0.b, a: c1.a - c0.a } }
    }

    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgba_unsafe(&self, t: f64) -> RGBA<f64> {
        RGBA { r: self.c0.r + t * self.dc.r,
               g: self.c0.g + t * self.dc.g,
               b: self.c0.b + t * self.dc.b,
               a: self.c0.a + t * self.dc.a }
    }
}


/// A piecewise linear gradient through evenly spaced anchor colors.
#[derive(Clone)]
pub(crate) struct PaletteGradient<Color> {
    segments: Vec<Segment>, // Invariant: non-empty
    color: PhantomData<Color>,
}

impl<Color> PaletteGradient<Color> {
    /// Panics if `anchors` has less than 2 colors (palettes never do).
    pub(crate) fn new(anchors: &[RGBA<f64>]) -> Self {
        assert!(anchors.len() >= 2, "a gradient needs at least 2 colors");
        PaletteGradient {
            segments: anchors.windows(2)
                .map(|c| Segment::new(c[0], c[1]))
                .collect(),
            color: PhantomData }
    }
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let n = self.segments.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        let rgba = if i < n { self.segments[i].rgba_unsafe(tn.fract()) }
                   else { self.segments[n-1].rgba_unsafe(1.) };
        Color::from_rgba(rgba)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn black_red_white() -> PaletteGradient<RGB8> {
        PaletteGradient::new(&[rgba_of_u24(0x000000), rgba_of_u24(0xff0000),
                               rgba_of_u24(0xffffff)])
    }

    #[test]
    fn range_positions() {
        let g = black_red_white();
        for (i, (x, c)) in (&g).range(0., 1., 11).enumerate() {
            assert_abs_diff_eq!(x, 0.1 * i as f64, epsilon = 1e-15);
            assert_eq!(g.rgb(x), c);
        }
    }

    #[test]
    fn range_lengths() {
        let g = black_red_white();
        assert_eq!((&g).range(0., 1., 0).count(), 0);
        let one: Vec<_> = (&g).range(0., 1., 1).map(|(x, _)| x).collect();
        assert_eq!(one, [0.]);
        let r = g.range(0., 1., 20);
        assert_eq!(r.len(), 20);
        let xs: Vec<_> = r.rev().map(|(x, _)| x).collect();
        assert_eq!(xs[0], 1.);
        assert_eq!(xs[19], 0.);
    }

    #[test]
    fn hex() {
        assert_eq!(RGB8 { r: 0x67, g: 0x00, b: 0x1f }.to_hex(), "#67001f");
        let c = RGBA { r: 103.4, g: -2., b: 30.6, a: 0. };
        assert_eq!(c.to_hex(), "#67001f");
        assert_eq!(RGB8::from_rgba(c), RGB8 { r: 0x67, g: 0x00, b: 0x1f });
    }

    #[test]
    fn palette_gradient_goes_through_anchors() {
        let g = black_red_white();
        assert_eq!(g.rgb(0.).to_hex(), "#000000");
        assert_eq!(g.rgb(0.5).to_hex(), "#ff0000");
        assert_eq!(g.rgb(1.).to_hex(), "#ffffff");
        assert_eq!(g.rgb(0.25).to_hex(), "#800000");
        // Out of range positions are clamped.
        assert_eq!(g.rgb(-3.).to_hex(), "#000000");
        assert_eq!(g.rgb(7.).to_hex(), "#ffffff");
    }
}
