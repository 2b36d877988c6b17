// Matplotlib colormaps as 256 colors lookup tables.
//
// viridis, plasma, inferno, magma and cividis give entries of
// Matplotlib's tables; hsv, gray, binary, bwr and seismic are its
// segment data.  turbo, coolwarm and twilight are sampled at evenly
// spaced points.

use super::ty::{LutData::*, LutScheme, PaletteType::*};

pub(crate) const SCHEMES: &[LutScheme] = &[
    ("viridis", Seq, Entries(&[
        (0, 0x440154), (28, 0x482878), (56, 0x3e4989), (64, 0x3b528b),
        (85, 0x31688e), (113, 0x26828e), (128, 0x21918c), (142, 0x1f9e89),
        (170, 0x35b779), (192, 0x5ec962), (199, 0x6ece58), (227, 0xb5de2b),
        (255, 0xfde725)])),
    ("plasma", Seq, Entries(&[
        (0, 0x0d0887), (28, 0x46039f), (56, 0x7201a8), (64, 0x7e03a8),
        (85, 0x9c179e), (113, 0xbd3786), (128, 0xcc4778), (142, 0xd8576b),
        (170, 0xed7953), (192, 0xf89540), (199, 0xfb9f3a), (227, 0xfdca26),
        (255, 0xf0f921)])),
    ("inferno", Seq, Entries(&[
        (0, 0x000004), (28, 0x1b0c41), (56, 0x4a0c6b), (64, 0x56106e),
        (85, 0x781c6d), (113, 0xa52c60), (128, 0xbb3754), (142, 0xcf4446),
        (170, 0xed6925), (192, 0xf98e09), (199, 0xfb9b06), (227, 0xf7d13d),
        (255, 0xfcffa4)])),
    ("magma", Seq, Entries(&[
        (0, 0x000004), (28, 0x180f3d), (56, 0x440f76), (64, 0x51127c),
        (85, 0x721f81), (113, 0x9e2f7f), (128, 0xb73779), (142, 0xcd4071),
        (170, 0xf1605d), (192, 0xfc8961), (199, 0xfd9668), (227, 0xfeca8d),
        (255, 0xfcfdbf)])),
    ("cividis", Seq, Entries(&[
        (0, 0x00224e), (28, 0x123570), (56, 0x3b496c), (64, 0x414d6b),
        (85, 0x575d6d), (113, 0x707173), (128, 0x7c7b78), (142, 0x8a8779),
        (170, 0xa69d75), (192, 0xbcaf6f), (199, 0xc4b56c), (227, 0xe4cf5b),
        (255, 0xfee838)])),
    ("turbo", Seq, Anchors(&[0x30123b, 0x4662d7, 0x36aaf9, 0x1ae4b6,
                             0x72fe5e, 0xc8ef34, 0xfaba39, 0xf66b19,
                             0xcb2a04, 0x7a0403])),
    ("hsv", Cyc, Segments([
        &[(0., 1.), (0.158730, 1.), (0.174603, 0.96875),
          (0.333333, 0.03125), (0.349206, 0.), (0.666667, 0.),
          (0.682540, 0.03125), (0.841270, 0.96875), (0.857143, 1.),
          (1., 1.)],
        &[(0., 0.), (0.158730, 0.9375), (0.174603, 1.), (0.507937, 1.),
          (0.666667, 0.0625), (0.682540, 0.), (1., 0.)],
        &[(0., 0.), (0.333333, 0.), (0.349206, 0.0625), (0.507937, 1.),
          (0.841270, 1.), (0.857143, 0.9375), (1., 0.09375)]])),
    ("gray", Seq, Segments([&[(0., 0.), (1., 1.)],
                            &[(0., 0.), (1., 1.)],
                            &[(0., 0.), (1., 1.)]])),
    ("binary", Seq, Segments([&[(0., 1.), (1., 0.)],
                              &[(0., 1.), (1., 0.)],
                              &[(0., 1.), (1., 0.)]])),
    ("bwr", Div, Segments([&[(0., 0.), (0.5, 1.), (1., 1.)],
                           &[(0., 0.), (0.5, 1.), (1., 0.)],
                           &[(0., 1.), (0.5, 1.), (1., 0.)]])),
    ("seismic", Div, Segments([
        &[(0., 0.), (0.25, 0.), (0.5, 1.), (0.75, 1.), (1., 0.5)],
        &[(0., 0.), (0.25, 0.), (0.5, 1.), (0.75, 0.), (1., 0.)],
        &[(0., 0.3), (0.25, 1.), (0.5, 1.), (0.75, 0.), (1., 0.)]])),
    ("coolwarm", Div, Anchors(&[0x3b4cc0, 0x6788ee, 0x9abbff, 0xc9d7f0,
                                0xedd1c2, 0xf7a889, 0xe26952, 0xb40426])),
    ("twilight", Cyc, Anchors(&[0xe2d9e2, 0x9ebbc9, 0x6785be, 0x5e43a5,
                                0x421b4c, 0x5a1d3c, 0x9c4047, 0xc78065,
                                0xd8c0ad, 0xe2d9e2])),
];
