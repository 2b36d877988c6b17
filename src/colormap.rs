//! Named colormaps and their sampling into [`Gradient`]s.
//!
//! A colormap is named `[<lib>.]<name>`:
//!
//! - `branca.<name>` or just `<name>`: ColorBrewer schemes as
//!   linear colormaps, `<Scheme>_<NN>` being the `NN`-class table
//!   (e.g. `RdBu_09`, `YlGn_03`) and `<Scheme>` the largest one, and
//!   `viridis`;
//! - `mpl.<name>`: Matplotlib colormaps (`viridis`, `magma`, `hsv`,
//!   `RdBu`,…), sampled like Matplotlib does from 256 colors lookup
//!   tables (qualitative schemes from their own colors);
//! - `cmc.<name>`: Crameri's scientific colour maps (`batlow`, `vik`,…).
//!
//! The library tag is case insensitive, names are not.  In the `mpl`
//! and `cmc` libraries a `_r` suffix reverses the colormap.

use std::{fmt, slice, vec};
use rgb::{RGB8, RGBA};
use crate::error::{Error, Result};
use crate::palettes::{self, PaletteData, PaletteType};
use crate::{ColorRange, PaletteGradient, RGBColor};

/// Number of stops of [`colormap_gradient_default`].
pub const DEFAULT_STEPS: usize = 20;

const REVERSED_SUFFIX: &str = "_r";

/// Libraries providing colormaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Library {
    /// ColorBrewer linear colormaps, tag `branca`.
    Branca,
    /// Matplotlib colormaps, tag `mpl`.
    Matplotlib,
    /// Crameri's scientific colour maps, tag `cmc`.
    Crameri,
}

impl Library {
    pub const ALL: [Library; 3] =
        [Library::Branca, Library::Matplotlib, Library::Crameri];

    /// Library designated by `tag` (case insensitive).
    pub fn from_tag(tag: &str) -> Result<Self> {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "branca" => Ok(Library::Branca),
            "mpl" => Ok(Library::Matplotlib),
            "cmc" => Ok(Library::Crameri),
            _ => Err(Error::UnknownLibrary(tag)),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Library::Branca => "branca",
            Library::Matplotlib => "mpl",
            Library::Crameri => "cmc",
        }
    }

    /// Whether the colormaps of this library are compiled in.
    pub fn is_enabled(self) -> bool {
        match self {
            Library::Branca => true,
            Library::Matplotlib => cfg!(feature = "mpl"),
            Library::Crameri => cfg!(feature = "cmc"),
        }
    }

    /// The colormap names the library accepts, reversed variants
    /// excepted.  Empty if the library is not enabled.
    pub fn names(self) -> Vec<String> {
        match self {
            Library::Branca => palette_names(&palettes::BREWER),
            Library::Matplotlib => matplotlib_names(),
            Library::Crameri => crameri_names(),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A colormap resolved from its name.
///
/// ```
/// use chronomap::{Colormap, ColorRange, Library, PaletteType, RGBColor};
/// use rgb::RGB8;
/// let cmap = Colormap::resolve("RdBu_09")?;
/// assert_eq!(cmap.library(), Library::Branca);
/// assert_eq!(cmap.palette_type(), PaletteType::Div);
/// let c: RGB8 = cmap.rgb(0.);
/// assert_eq!(c.to_hex(), "#b2182b");
/// # Ok::<(), chronomap::Error>(())
/// ```
#[derive(Clone)]
pub struct Colormap {
    library: Library,
    name: String,
    palette: &'static PaletteData,
    // Linear interpolation of the palette; `None` for lookup tables.
    gradient: Option<PaletteGradient<RGBA<f64>>>,
    reversed: bool,
}

impl Colormap {
    /// Resolve `[<lib>.]<name>`.
    pub fn resolve(spec: &str) -> Result<Self> {
        match spec.split_once('.') {
            None => Self::from_library(Library::Branca, spec),
            Some((tag, name)) => Self::from_library(Library::from_tag(tag)?,
                                                    name),
        }
    }

    /// Resolve `name` in `library`.
    pub fn from_library(library: Library, name: &str) -> Result<Self> {
        let (base, reversed) = match (library, name.strip_suffix(REVERSED_SUFFIX)) {
            (Library::Matplotlib | Library::Crameri, Some(base)) => (base, true),
            _ => (name, false),
        };
        let palette = match library {
            Library::Branca => Ok(palettes::find(&palettes::BREWER, base)),
            Library::Matplotlib => matplotlib(base),
            Library::Crameri => crameri(base),
        }?;
        let palette = palette.ok_or_else(|| {
            Error::UnknownColormap { library, name: name.to_string() } })?;
        // Branca colormaps are linear, the others are lookup tables.
        let gradient = (library == Library::Branca)
            .then(|| PaletteGradient::new(&palette.rgb));
        log::debug!("Resolved colormap {}.{name}", library.tag());
        Ok(Colormap { library, name: name.to_string(), palette, gradient,
                      reversed })
    }

    pub fn library(&self) -> Library { self.library }

    /// The name within the library, `_r` suffix included.
    pub fn name(&self) -> &str { &self.name }

    pub fn palette_type(&self) -> PaletteType { self.palette.typ }

    pub fn is_reversed(&self) -> bool { self.reversed }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.library, self.name)
    }
}

impl fmt::Debug for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colormap({self})")
    }
}

impl<Color: RGBColor> ColorRange<Color> for Colormap {
    fn rgb(&self, t: f64) -> Color {
        let rgba = match &self.gradient {
            Some(g) => g.rgb(if self.reversed { 1. - t } else { t }),
            None => {
                // Entry `floor(t n)` of the `n` colors, `t = 1` included
                // in the last one.
                let colors = &self.palette.rgb;
                let n = colors.len();
                let i = ((t.clamp(0., 1.) * n as f64) as usize).min(n - 1);
                colors[if self.reversed { n - 1 - i } else { i }]
            }
        };
        Color::from_rgba(rgba)
    }
}

fn palette_names(palettes: &[PaletteData]) -> Vec<String> {
    palettes.iter().map(|p| p.name.clone()).collect()
}

#[cfg(feature = "mpl")]
fn matplotlib(name: &str) -> Result<Option<&'static PaletteData>> {
    Ok(palettes::find(&palettes::MATPLOTLIB, name))
}

#[cfg(not(feature = "mpl"))]
fn matplotlib(_: &str) -> Result<Option<&'static PaletteData>> {
    Err(Error::LibraryDisabled(Library::Matplotlib))
}

#[cfg(feature = "mpl")]
fn matplotlib_names() -> Vec<String> {
    palette_names(&palettes::MATPLOTLIB)
}

#[cfg(not(feature = "mpl"))]
fn matplotlib_names() -> Vec<String> { vec![] }

#[cfg(feature = "cmc")]
fn crameri(name: &str) -> Result<Option<&'static PaletteData>> {
    Ok(palettes::find(&palettes::CRAMERI, name))
}

#[cfg(not(feature = "cmc"))]
fn crameri(_: &str) -> Result<Option<&'static PaletteData>> {
    Err(Error::LibraryDisabled(Library::Crameri))
}

#[cfg(feature = "cmc")]
fn crameri_names() -> Vec<String> { palette_names(&palettes::CRAMERI) }

#[cfg(not(feature = "cmc"))]
fn crameri_names() -> Vec<String> { vec![] }


/// A colormap sampled at evenly spaced positions of \[0, 1\], both
/// ends included, with `#rrggbb` colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<(f64, String)>, // increasing positions
}

impl Gradient {
    /// Sample `colormap` at `n_steps` points.
    pub fn sample<R: ColorRange<RGB8>>(colormap: R, n_steps: usize) -> Self {
        Gradient {
            stops: colormap.range(0., 1., n_steps)
                .map(|(x, c)| (x, c.to_hex()))
                .collect() }
    }

    pub fn len(&self) -> usize { self.stops.len() }

    pub fn is_empty(&self) -> bool { self.stops.is_empty() }

    /// The `(position, color)` stops, by increasing position.
    pub fn iter(&self) -> slice::Iter<'_, (f64, String)> { self.stops.iter() }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().map(|(x, _)| *x)
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> + '_ {
        self.stops.iter().map(|(_, c)| c.as_str())
    }
}

impl IntoIterator for Gradient {
    type Item = (f64, String);
    type IntoIter = vec::IntoIter<(f64, String)>;

    fn into_iter(self) -> Self::IntoIter { self.stops.into_iter() }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a (f64, String);
    type IntoIter = slice::Iter<'a, (f64, String)>;

    fn into_iter(self) -> Self::IntoIter { self.stops.iter() }
}

/// Sample the colormap `name` (see the [module documentation](self))
/// at `n_steps` evenly spaced positions of \[0, 1\].
///
/// ```
/// let g = chronomap::colormap_gradient("Greys_03", 3)?;
/// let stops: Vec<_> = g.into_iter().collect();
/// assert_eq!(stops, [(0., "#f0f0f0".to_string()),
///                    (0.5, "#bdbdbd".to_string()),
///                    (1., "#636363".to_string())]);
/// # Ok::<(), chronomap::Error>(())
/// ```
pub fn colormap_gradient(name: &str, n_steps: usize) -> Result<Gradient> {
    let colormap = Colormap::resolve(name)?;
    Ok(Gradient::sample(&colormap, n_steps))
}

/// [`colormap_gradient`] with [`DEFAULT_STEPS`] steps.
pub fn colormap_gradient_default(name: &str) -> Result<Gradient> {
    colormap_gradient(name, DEFAULT_STEPS)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn is_hex(c: &str) -> bool {
        c.len() == 7 && c.starts_with('#')
            && c[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    fn colors(name: &str, n_steps: usize) -> Vec<String> {
        colormap_gradient(name, n_steps).unwrap()
            .colors().map(String::from).collect()
    }

    #[test]
    fn branca_gradient() {
        let g = colormap_gradient("branca.RdBu_09", 5).unwrap();
        assert_eq!(g.len(), 5);
        for (x, i) in g.positions().zip(0..) {
            assert_abs_diff_eq!(x, 0.25 * i as f64, epsilon = 1e-15);
        }
        assert!(g.colors().all(is_hex));
        assert_eq!(g.colors().next(), Some("#b2182b"));
        assert_eq!(g.colors().last(), Some("#2166ac"));
    }

    #[test]
    fn brewer_class_tables() {
        assert_eq!(colors("branca.RdBu_09", 9),
                   ["#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7",
                    "#d1e5f0", "#92c5de", "#4393c3", "#2166ac"]);
        assert_eq!(colors("YlGn_03", 3), ["#f7fcb9", "#addd8e", "#31a354"]);
        assert_eq!(colors("RdYlBu_06", 6),
                   ["#d73027", "#fc8d59", "#fee090", "#e0f3f8", "#91bfdb",
                    "#4575b4"]);
        assert_eq!(colors("Oranges_04", 4),
                   ["#feedde", "#fdbe85", "#fd8d3c", "#d94701"]);
        // The bare name is the largest table.
        assert_eq!(colors("RdBu", 11), colors("RdBu_11", 11));
        assert_eq!(colors("Blues", 9), colors("Blues_09", 9));
    }

    #[test]
    fn default_library() {
        let a = colormap_gradient("YlGn_03", 7).unwrap();
        let b = colormap_gradient("BRANCA.YlGn_03", 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(colormap_gradient_default("Blues").unwrap().len(),
                   DEFAULT_STEPS);
        assert_eq!(colors("viridis", 2), ["#440154", "#fde725"]);
        assert_eq!(colors("branca.viridis", 2), colors("viridis", 2));
    }

    #[test]
    fn qualitative_classes_are_prefixes() {
        assert_eq!(colors("Set1_03", 3), ["#e41a1c", "#377eb8", "#4daf4a"]);
    }

    #[test]
    fn palette_types() {
        let typ = |name| Colormap::resolve(name).unwrap().palette_type();
        assert_eq!(typ("RdBu_09"), PaletteType::Div);
        assert_eq!(typ("YlGn"), PaletteType::Seq);
        assert_eq!(typ("Paired_12"), PaletteType::Qual);
    }

    #[test]
    fn step_counts() {
        assert!(colormap_gradient("RdBu_11", 0).unwrap().is_empty());
        let one = colormap_gradient("RdBu_11", 1).unwrap();
        assert_eq!(one.positions().collect::<Vec<_>>(), [0.]);
        assert_eq!(colormap_gradient("RdBu_11", 256).unwrap().len(), 256);
    }

    #[test]
    fn unknown_library() {
        match colormap_gradient("bogus.foo", 5) {
            Err(Error::UnknownLibrary(lib)) => assert_eq!(lib, "bogus"),
            r => panic!("{r:?}"),
        }
        let msg = colormap_gradient("Bogus.foo", 5).unwrap_err().to_string();
        assert_eq!(msg, "Unknown colormap library 'bogus'");
    }

    #[test]
    fn unknown_names() {
        for name in ["RdBu_02", "RdBu_12", "RdBu_9", "rdbu_09", "nope",
                     "Set2_09", "viridis_03", "branca.RdBu_r"] {
            assert!(matches!(Colormap::resolve(name),
                             Err(Error::UnknownColormap {
                                 library: Library::Branca, .. })),
                    "{name}");
        }
    }

    #[cfg(feature = "mpl")]
    #[test]
    fn matplotlib_colormaps() {
        assert_eq!(colors("mpl.viridis", 5),
                   ["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"]);
        assert_eq!(colors("mpl.plasma", 3), ["#0d0887", "#cc4778", "#f0f921"]);
        assert_eq!(colors("mpl.magma", 3), ["#000004", "#b73779", "#fcfdbf"]);
        assert_eq!(colors("MPL.viridis_r", 2), ["#fde725", "#440154"]);
        assert_eq!(colors("mpl.gray", 3), ["#000000", "#808080", "#ffffff"]);
        assert_eq!(colors("mpl.RdBu", 2), ["#67001f", "#053061"]);
        assert!(matches!(colormap_gradient("mpl.Viridis", 4),
                         Err(Error::UnknownColormap {
                             library: Library::Matplotlib, .. })));
    }

    #[cfg(feature = "mpl")]
    #[test]
    fn matplotlib_hsv_segments() {
        assert_eq!(colors("mpl.hsv", 5),
                   ["#ff0000", "#84ff00", "#00fff6", "#7200ff", "#ff0018"]);
    }

    #[cfg(feature = "mpl")]
    #[test]
    fn matplotlib_lookup_is_stepwise() {
        let cmap = Colormap::resolve("mpl.viridis").unwrap();
        let at = |t: f64| ColorRange::<RGB8>::rgb(&cmap, t).to_hex();
        // Entry 128 covers [128/256, 129/256).
        assert_eq!(at(0.5), "#21918c");
        assert_eq!(at(0.5 + 0.9 / 256.), "#21918c");
        assert_ne!(at(0.5 - 0.1 / 256.), "#21918c");
        assert_eq!(at(-1.), "#440154");
        assert_eq!(at(2.), "#fde725");
        // Reversal reads the table backwards: `t = 0.5` is entry 127.
        let r = Colormap::resolve("mpl.viridis_r").unwrap();
        assert_eq!(ColorRange::<RGB8>::rgb(&r, 0.5).to_hex(),
                   at(0.5 - 0.1 / 256.));
    }

    #[cfg(feature = "mpl")]
    #[test]
    fn matplotlib_qualitative_maps_are_listed() {
        assert_eq!(colors("mpl.Set2", 8),
                   ["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3",
                    "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3"]);
    }

    #[cfg(feature = "cmc")]
    #[test]
    fn crameri_colormaps() {
        let g = colormap_gradient("cmc.batlow", 10).unwrap();
        assert_eq!(g.colors().next(), Some("#011959"));
        assert_eq!(g.colors().last(), Some("#faccfa"));
        let r = Colormap::resolve("CMC.batlow_r").unwrap();
        assert!(r.is_reversed());
        assert_eq!(r.to_string(), "cmc.batlow_r");
        assert_eq!(colors("cmc.batlow_r", 2), ["#faccfa", "#011959"]);
    }

    #[cfg(not(feature = "cmc"))]
    #[test]
    fn crameri_disabled() {
        assert!(matches!(colormap_gradient("cmc.batlow", 3),
                         Err(Error::LibraryDisabled(Library::Crameri))));
    }

    #[cfg(not(feature = "mpl"))]
    #[test]
    fn matplotlib_disabled() {
        assert!(matches!(colormap_gradient("mpl.viridis", 3),
                         Err(Error::LibraryDisabled(Library::Matplotlib))));
        assert!(Library::Matplotlib.names().is_empty());
    }

    #[test]
    fn every_listed_name_resolves() {
        for lib in Library::ALL {
            for name in lib.names() {
                let cmap = Colormap::from_library(lib, &name).unwrap();
                let g = Gradient::sample(&cmap, 5);
                assert!(g.colors().all(is_hex), "{cmap}");
            }
        }
    }
}
