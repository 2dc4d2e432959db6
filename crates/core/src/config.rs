//! Configuration constants for the generated font header.

/// A font to fetch and convert at each of the requested point sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    /// Typeface family name, e.g. `Roboto`.
    pub typeface: &'static str,
    /// Weight name, e.g. `Regular` or `Bold`.
    pub weight: &'static str,
    /// Point sizes to convert, in declaration order.
    pub sizes: &'static [u32],
    /// Source URL of the TTF file.
    pub url: &'static str,
}

impl FontSpec {
    /// File name of the cached TTF, unique per (typeface, weight) pair.
    pub fn cache_file_name(&self) -> String {
        format!("{}-{}.ttf", self.typeface, self.weight)
    }
}

/// Fonts baked into the generated header, in declaration order.
///
/// Downstream code indexes glyph tables by declaration order in the
/// generated file, so the order here is load-bearing.
pub const FONTS: &[FontSpec] = &[
    FontSpec {
        typeface: "Roboto",
        weight: "Regular",
        sizes: &[16],
        url: "https://github.com/googlefonts/roboto/raw/main/src/hinted/Roboto-Regular.ttf",
    },
    FontSpec {
        typeface: "Roboto",
        weight: "Bold",
        sizes: &[16, 24],
        url: "https://github.com/googlefonts/roboto/raw/main/src/hinted/Roboto-Bold.ttf",
    },
    FontSpec {
        typeface: "RobotoMono",
        weight: "Regular",
        sizes: &[20],
        url: "https://github.com/googlefonts/RobotoMono/raw/main/fonts/ttf/RobotoMono-Regular.ttf",
    },
];

/// Default directory for cached TTF downloads.
pub const RESOURCES_DIR: &str = "resources";

/// Default path of the generated header.
pub const OUTPUT_FILE: &str = "src/Fonts.h";

/// Default conversion tool, resolved on PATH.
pub const FONTCONVERT_TOOL: &str = "fontconvert";
