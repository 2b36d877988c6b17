//! Colors of the schemes each colormap library provides.
//!
//! Each table is turned into [`PaletteData`] the first time its
//! library is used.

use lazy_static::lazy_static;

// Lookup tables only serve the `mpl` and `cmc` libraries.
#[cfg_attr(not(any(feature = "mpl", feature = "cmc")), allow(dead_code))]
pub(crate) mod ty;
mod brewer;
#[cfg(feature = "mpl")]
mod matplotlib;
#[cfg(feature = "cmc")]
mod crameri;

pub(crate) use ty::PaletteData;
pub use ty::PaletteType;

fn loaded(library: &str, palettes: Vec<PaletteData>) -> Vec<PaletteData> {
    log::debug!("Loaded {} {library} palettes", palettes.len());
    palettes
}

lazy_static! {
    /// Schemes by Cynthia Brewer, under `<name>` (largest number of
    /// classes) and `<name>_<NN>`, followed by the other linear
    /// colormaps.
    pub(crate) static ref BREWER: Vec<PaletteData> = loaded(
        "ColorBrewer",
        brewer::SCHEMES.iter().flat_map(PaletteData::with_classes)
            .chain(brewer::LINEAR.iter().map(PaletteData::from_scheme))
            .collect());
}

/// Matplotlib's version of a Brewer scheme: the qualitative ones list
/// their colors, the others are lookup tables joining the largest
/// number of classes.
#[cfg(feature = "mpl")]
fn matplotlib_brewer(&(name, typ, tables): &ty::ClassScheme)
                     -> Option<PaletteData> {
    let largest = *tables.last()?;
    Some(match typ {
        PaletteType::Qual => PaletteData::from_scheme(&(name, typ, largest)),
        _ => PaletteData::from_lut(&(name, typ,
                                     ty::LutData::Anchors(largest))),
    })
}

#[cfg(feature = "mpl")]
lazy_static! {
    /// Matplotlib's own colormaps then the Brewer schemes it registers.
    pub(crate) static ref MATPLOTLIB: Vec<PaletteData> = loaded(
        "Matplotlib",
        matplotlib::SCHEMES.iter().map(PaletteData::from_lut)
            .chain(brewer::SCHEMES.iter().filter_map(matplotlib_brewer))
            .collect());
}

#[cfg(feature = "cmc")]
lazy_static! {
    /// Scientific colour maps by Fabio Crameri.
    pub(crate) static ref CRAMERI: Vec<PaletteData> = loaded(
        "Crameri",
        crameri::SCHEMES.iter().map(PaletteData::from_lut).collect());
}

/// Look `name` up (case sensitive) in `palettes`.
pub(crate) fn find(palettes: &'static [PaletteData], name: &str)
                   -> Option<&'static PaletteData> {
    palettes.iter().find(|p| p.name == name)
}
