//! The builtin byteform palette: fixed at compile time.
//!
//! Each scale runs from the lightest shade (index 0) to the darkest
//! (index 9). `dark` starts at a light text gray rather than near-white;
//! dark-mode text reads its low indices and surfaces its high ones.

use std::sync::LazyLock;

use byteform_color::STEP_COUNT;

use crate::palette::{PaletteEntry, PaletteTable};

type Scale = [&'static str; STEP_COUNT];

pub const DARK: Scale = [
    "#c1c2c5", "#a6a7ab", "#909296", "#5c5f66", "#373a40",
    "#2c2e33", "#25262b", "#1a1b1e", "#141517", "#101113",
];

pub const GRAY: Scale = [
    "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da",
    "#adb5bd", "#868e96", "#495057", "#343a40", "#212529",
];

pub const RED: Scale = [
    "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787",
    "#ff6b6b", "#fa5252", "#f03e3e", "#e03131", "#c92a2a",
];

pub const PINK: Scale = [
    "#fff0f6", "#ffdeeb", "#fcc2d7", "#faa2c1", "#f783ac",
    "#f06595", "#e64980", "#d6336c", "#c2255c", "#a61e4d",
];

pub const GRAPE: Scale = [
    "#f8f0fc", "#f3d9fa", "#eebefa", "#e599f7", "#da77f2",
    "#cc5de8", "#be4bdb", "#ae3ec9", "#9c36b5", "#862e9c",
];

pub const VIOLET: Scale = [
    "#f3f0ff", "#e5dbff", "#d0bfff", "#b197fc", "#9775fa",
    "#845ef7", "#7950f2", "#7048e8", "#6741d9", "#5f3dc4",
];

pub const INDIGO: Scale = [
    "#edf2ff", "#dbe4ff", "#bac8ff", "#91a7ff", "#748ffc",
    "#5c7cfa", "#4c6ef5", "#4263eb", "#3b5bdb", "#364fc7",
];

pub const BLUE: Scale = [
    "#e7f4ff", "#cbe6ff", "#99ceff", "#62b3ff", "#2b9aff",
    "#1a86e8", "#106ec1", "#0c5a9e", "#08477d", "#05345c",
];

pub const CYAN: Scale = [
    "#e3fafc", "#c5f6fa", "#99e9f2", "#66d9e8", "#3bc9db",
    "#22b8cf", "#15aabf", "#1098ad", "#0c8599", "#0b7285",
];

pub const TEAL: Scale = [
    "#e6fcf5", "#c3fae8", "#96f2d7", "#63e6be", "#38d9a9",
    "#20c997", "#12b886", "#0ca678", "#099268", "#087f5b",
];

pub const GREEN: Scale = [
    "#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c",
    "#51cf66", "#40c057", "#37b24d", "#2f9e44", "#2b8a3e",
];

pub const LIME: Scale = [
    "#f4fce3", "#e9fac8", "#d8f5a2", "#c0eb75", "#a9e34b",
    "#94d82d", "#82c91e", "#74b816", "#66a80f", "#5c940d",
];

pub const YELLOW: Scale = [
    "#fff9db", "#fff3bf", "#ffec99", "#ffe066", "#ffd43b",
    "#fcc419", "#fab005", "#f59f00", "#f08c00", "#e67700",
];

pub const ORANGE: Scale = [
    "#fff4e6", "#ffe8cc", "#ffd8a8", "#ffc078", "#ffa94d",
    "#ff922b", "#fd7e14", "#f76707", "#e8590c", "#d9480f",
];

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// Scales in declaration order.
const SCALES: [(&str, &Scale); 14] = [
    ("dark", &DARK),
    ("gray", &GRAY),
    ("red", &RED),
    ("pink", &PINK),
    ("grape", &GRAPE),
    ("violet", &VIOLET),
    ("indigo", &INDIGO),
    ("blue", &BLUE),
    ("cyan", &CYAN),
    ("teal", &TEAL),
    ("green", &GREEN),
    ("lime", &LIME),
    ("yellow", &YELLOW),
    ("orange", &ORANGE),
];

static BUILTIN: LazyLock<PaletteTable> = LazyLock::new(|| {
    let mut table = PaletteTable::new();
    for (name, scale) in SCALES {
        table.insert(name, PaletteEntry::scale(*scale));
    }
    table.insert("white", PaletteEntry::single(WHITE));
    table.insert("black", PaletteEntry::single(BLACK));
    table
});

/// The builtin palette table.
#[must_use]
pub fn builtin_palette() -> &'static PaletteTable {
    &BUILTIN
}

/// List all builtin palette names.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    SCALES
        .iter()
        .map(|(name, _)| *name)
        .chain(["white", "black"])
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
