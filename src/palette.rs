//! ANSI color palette tables
//!
//! Fixed mappings from terminal color indices to display class labels, one
//! table for the standard range (SGR 30-37) and one for the bright range
//! (SGR 90-97). Both tables are immutable for the process lifetime.

/// Class labels for the standard foreground colors, indexed by `code - 30`.
pub const STANDARD: [&str; 8] = [
    "text-gray-500",   // black
    "text-red-400",    // red
    "text-green-400",  // green
    "text-yellow-400", // yellow
    "text-blue-400",   // blue
    "text-purple-400", // magenta
    "text-cyan-400",   // cyan
    "text-gray-300",   // white
];

/// Class labels for the bright foreground colors, indexed by `code - 90`.
pub const BRIGHT: [&str; 8] = [
    "text-gray-400",   // bright black
    "text-red-300",    // bright red
    "text-green-300",  // bright green
    "text-yellow-300", // bright yellow
    "text-blue-300",   // bright blue
    "text-pink-300",   // bright magenta
    "text-cyan-300",   // bright cyan
    "text-white",      // bright white
];

/// Class label for bold text (SGR 1).
pub const FONT_BOLD: &str = "font-bold";

/// Look up the class label for a color index.
///
/// Indices outside 0-7 are unreachable from the supported SGR ranges but
/// fall back to the standard black label rather than panic.
pub fn class_for(index: u8, bright: bool) -> &'static str {
    let table = if bright { &BRIGHT } else { &STANDARD };
    table.get(index as usize).copied().unwrap_or(STANDARD[0])
}
