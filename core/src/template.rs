//! Coordinate templates: `"i,j"` pairs joined by `;`, e.g. `"1,0;1,1;1,2"`.
//!
//! Used for wall layouts on the way in and for hints and selections on the
//! way out.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write;

use crate::*;

/// Parses a coordinate template.
///
/// Whitespace is ignored anywhere, and so are empty segments, which makes a
/// trailing `;` acceptable. Every other segment has to be exactly two
/// unsigned integers that fit a [`Coord`].
pub fn parse_coords(template: &str) -> Result<Vec<Coord2>> {
    let compact: String = template.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .split(';')
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: &str) -> Result<Coord2> {
    let malformed = || GameError::MalformedCoords(entry.to_string());

    let mut parts = entry.split(',');
    let (Some(i), Some(j), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let i = i.parse::<Coord>().map_err(|_| malformed())?;
    let j = j.parse::<Coord>().map_err(|_| malformed())?;
    Ok((i, j))
}

/// Formats coordinates as a template, the inverse of [`parse_coords`].
pub fn format_coords(coords: &[Coord2]) -> String {
    let mut out = String::new();
    for (n, (i, j)) in coords.iter().enumerate() {
        if n > 0 {
            out.push(';');
        }
        // writing into a String cannot fail
        let _ = write!(out, "{i},{j}");
    }
    out
}
