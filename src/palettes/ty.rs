use rgb::RGBA;
use crate::rgba_of_u24;

/// Number of entries of the lookup tables of Matplotlib-style
/// colormaps.
pub(crate) const LUT_SIZE: usize = 256;

/// A named list of colors.  These are anchor colors for linear
/// colormaps and the whole table for lookup colormaps.
pub(crate) struct PaletteData {
    pub(crate) name: String,
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
}

/// Anchor colors as `0xRRGGBB` literals.
pub(crate) type Scheme = (&'static str, PaletteType, &'static [u32]);

/// One table of `0xRRGGBB` colors per number of classes, by
/// increasing size.
pub(crate) type ClassScheme =
    (&'static str, PaletteType, &'static [&'static [u32]]);

/// Description of a [`LUT_SIZE`] colors lookup table.
pub(crate) enum LutData {
    /// Evenly spaced anchors, joined linearly.
    Anchors(&'static [u32]),
    /// Known entries `(index, color)` of the table, by increasing
    /// index, the first and last ones included.  The entries in
    /// between are joined linearly.
    Entries(&'static [(u8, u32)]),
    /// Matplotlib segment data: `(x, value)` points for the red, green
    /// and blue channels, `x` and `value` in \[0, 1\].
    Segments([&'static [(f64, f64)]; 3]),
}

pub(crate) type LutScheme = (&'static str, PaletteType, LutData);

impl PaletteData {
    fn new(name: String, typ: PaletteType, colors: &[u32]) -> Self {
        debug_assert!(colors.len() >= 2, "{name}: less than 2 colors");
        PaletteData { name, typ,
                      rgb: colors.iter().map(|&c| rgba_of_u24(c)).collect() }
    }

    pub(crate) fn from_scheme(&(name, typ, colors): &Scheme) -> Self {
        Self::new(name.to_string(), typ, colors)
    }

    /// `name` with the largest table, then `name_NN` for each table of
    /// `NN` classes.
    pub(crate) fn with_classes(&(name, typ, tables): &ClassScheme)
                               -> impl Iterator<Item = Self> {
        let largest = tables.last()
            .map(move |t| Self::new(name.to_string(), typ, t));
        largest.into_iter().chain(tables.iter().map(move |t| {
            Self::new(format!("{name}_{:02}", t.len()), typ, t) }))
    }

    pub(crate) fn from_lut((name, typ, data): &LutScheme) -> Self {
        PaletteData { name: name.to_string(), typ: *typ, rgb: data.lut() }
    }
}

impl LutData {
    /// `(x, value)` points of the red, green and blue channels, values
    /// in \[0, 255\].
    fn channels(&self) -> [Vec<(f64, f64)>; 3] {
        let split = |points: Vec<(f64, RGBA<f64>)>| [
            points.iter().map(|&(x, c)| (x, c.r)).collect(),
            points.iter().map(|&(x, c)| (x, c.g)).collect(),
            points.iter().map(|&(x, c)| (x, c.b)).collect()];
        match self {
            LutData::Anchors(colors) => {
                let last = (colors.len() - 1) as f64;
                split(colors.iter().enumerate()
                      .map(|(i, &c)| (i as f64 / last, rgba_of_u24(c)))
                      .collect())
            }
            LutData::Entries(entries) => {
                let last = (LUT_SIZE - 1) as f64;
                split(entries.iter()
                      .map(|&(i, c)| (i as f64 / last, rgba_of_u24(c)))
                      .collect())
            }
            LutData::Segments(channels) => channels.map(|points| {
                points.iter().map(|&(x, y)| (x, 255. * y)).collect() }),
        }
    }

    /// The table, the channels being sampled at `i / (LUT_SIZE - 1)`.
    pub(crate) fn lut(&self) -> Vec<RGBA<f64>> {
        let [r, g, b] = self.channels();
        let last = (LUT_SIZE - 1) as f64;
        (0 .. LUT_SIZE).map(|i| {
            let x = i as f64 / last;
            RGBA { r: interpolate(&r, x), g: interpolate(&g, x),
                   b: interpolate(&b, x), a: 255. }
        }).collect()
    }
}

/// Value at `x` of the piecewise linear function through `points`
/// (sorted by `x`).  Constant beyond the first and last points.
fn interpolate(points: &[(f64, f64)], x: f64) -> f64 {
    let k = points.partition_point(|&(xk, _)| xk < x);
    if k == 0 { return points[0].1 }
    if k == points.len() { return points[k - 1].1 }
    let (x0, y0) = points[k - 1];
    let (x1, y1) = points[k];
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class or break in the middle of the legend
    /// is emphasized with light colors and low and high extremes are
    /// emphasized with dark colors that have contrasting hues.
    Div,
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between legend classes, and hues are used to
    /// create the primary visual differences between classes.
    /// Qualitative schemes are best suited to representing nominal or
    /// categorical data.
    Qual,
    /// Cyclic color scheme, whose two ends have the same color.
    /// Suited to periodic data such as angles or times of day.
    Cyc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_kept() {
        let lut = LutData::Entries(&[(0, 0x000000), (100, 0x6400c8),
                                     (255, 0xffffff)]).lut();
        assert_eq!(lut.len(), LUT_SIZE);
        assert_eq!(lut[0], rgba_of_u24(0x000000));
        assert_eq!(lut[100], rgba_of_u24(0x6400c8));
        assert_eq!(lut[50].r, 50.);
        assert_eq!(lut[255], rgba_of_u24(0xffffff));
    }

    #[test]
    fn segments_are_scaled() {
        let lut = LutData::Segments([&[(0., 0.), (1., 1.)],
                                     &[(0., 1.), (0.5, 0.), (1., 0.)],
                                     &[(0., 0.5), (1., 0.5)]]).lut();
        assert_eq!(lut[0], RGBA { r: 0., g: 255., b: 127.5, a: 255. });
        assert_eq!(lut[255], RGBA { r: 255., g: 0., b: 127.5, a: 255. });
        assert!(lut[200].g == 0.);
    }

    #[test]
    fn class_tables_are_named() {
        let scheme: ClassScheme = ("Ab", PaletteType::Seq,
                                   &[&[1, 2, 3], &[1, 2, 3, 4]]);
        let names: Vec<_> = PaletteData::with_classes(&scheme)
            .map(|p| (p.name, p.rgb.len())).collect();
        assert_eq!(names, [("Ab".to_string(), 4), ("Ab_03".to_string(), 3),
                           ("Ab_04".to_string(), 4)]);
    }
}
