// Scientific colour maps by Fabio Crameri
// (https://www.fabiocrameri.ch/colourmaps/), sampled at 10 evenly
// spaced points and expanded to 256 colors lookup tables.

use super::ty::{LutData::*, LutScheme, PaletteType::*};

pub(crate) const SCHEMES: &[LutScheme] = &[
    // Sequential
    ("batlow", Seq, Anchors(&[0x011959, 0x0e3f5c, 0x1c5a62, 0x3c6d56,
                              0x687b3e, 0x9d892b, 0xd29343, 0xf8a17b,
                              0xfdb7bc, 0xfaccfa])),
    ("oslo", Seq, Anchors(&[0x010101, 0x0d1b2b, 0x132f4f, 0x1b4a7b,
                            0x2e67a8, 0x5685c8, 0x7f9ccd, 0xa4b2cf,
                            0xd0d5e0, 0xffffff])),
    ("lajolla", Seq, Anchors(&[0xffffcc, 0xfbec9a, 0xf4cc68, 0xeba94d,
                               0xe2864a, 0xd3624a, 0xa54e41, 0x703f31,
                               0x3f2c1d, 0x1a1a01])),
    ("hawaii", Seq, Anchors(&[0x8c0273, 0x922a59, 0x964742, 0x996330,
                              0x9d8621, 0x95b72a, 0x73d56d, 0x5de0ab,
                              0x87e9dd, 0xb3f2fd])),
    ("imola", Seq, Anchors(&[0x1a33b3, 0x2446a9, 0x2e599f, 0x3a6b93,
                             0x4b7c88, 0x5f9281, 0x77ad78, 0x97cc6e,
                             0xc6ec66, 0xffff66])),
    ("devon", Seq, Anchors(&[0x2c1a4c, 0x293b6b, 0x275a92, 0x3d75c4,
                             0x7189e4, 0x9c9eec, 0xb3b4f1, 0xcbcbf6,
                             0xe5e5fa, 0xffffff])),
    // Diverging
    ("vik", Div, Anchors(&[0x001261, 0x033e7d, 0x1e6f9d, 0x71a8c4,
                           0xc9dde7, 0xeacdb7, 0xd29773, 0xb5653a,
                           0x8b2707, 0x590008])),
    ("roma", Div, Anchors(&[0x7e1700, 0x9a5b12, 0xb18f2b, 0xc7c263,
                            0xcaeba0, 0x8ce0c9, 0x50b2d0, 0x3c80c0,
                            0x2a56ab, 0x023198])),
    ("berlin", Div, Anchors(&[0x9eb0ff, 0x5aa3da, 0x2d7597, 0x194155,
                              0x11181d, 0x270c01, 0x501802, 0x8a3f2a,
                              0xc48073, 0xffadad])),
    ("broc", Div, Anchors(&[0x2c1a4c, 0x2a4172, 0x456b98, 0x819cbc,
                            0xc3d1df, 0xe5e5c9, 0xc8c88e, 0x93935b,
                            0x5a5a30, 0x262600])),
    // Cyclic
    ("romaO", Cyc, Anchors(&[0x733957, 0x8a5738, 0xa6863d, 0xc2b76d,
                             0xc5dbb0, 0xa3d6d4, 0x76b2d3, 0x6487c2,
                             0x6d5792, 0x733957])),
];
