//! Latitude and longitude parsing.
//!
//! GEDCOM writes coordinates as a hemisphere letter followed by decimal
//! degrees (`N50.5`, `W0.1278`). Many files contain plain signed numbers
//! instead, which are accepted as well.

use tracing::trace;

use crate::numeric::{format_numeric, is_numeric, parse_numeric};

pub const LATITUDE_NORTH: char = 'N';
pub const LATITUDE_SOUTH: char = 'S';
pub const LONGITUDE_EAST: char = 'E';
pub const LONGITUDE_WEST: char = 'W';

/// Coordinate axis, carrying its hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// (positive, negative) hemisphere letters.
    pub fn hemispheres(&self) -> (char, char) {
        match self {
            Axis::Latitude => (LATITUDE_NORTH, LATITUDE_SOUTH),
            Axis::Longitude => (LONGITUDE_EAST, LONGITUDE_WEST),
        }
    }

    pub fn read(&self, text: &str) -> Option<f64> {
        let (positive, negative) = self.hemispheres();
        read_degrees(text, positive, negative)
    }

    pub fn format(&self, degrees: f64) -> String {
        let (positive, negative) = self.hemispheres();
        format_degrees(degrees, positive, negative)
    }
}

/// Read a latitude (`N`/`S`) as signed decimal degrees.
pub fn read_latitude(text: &str) -> Option<f64> {
    read_degrees(text, LATITUDE_NORTH, LATITUDE_SOUTH)
}

/// Read a longitude (`E`/`W`) as signed decimal degrees.
pub fn read_longitude(text: &str) -> Option<f64> {
    read_degrees(text, LONGITUDE_EAST, LONGITUDE_WEST)
}

/// Read signed decimal degrees from `<hemisphere><degrees>` or a plain number.
///
/// Returns `None` when the text is neither. The range is not checked.
pub fn read_degrees(text: &str, positive: char, negative: char) -> Option<f64> {
    let text = text.trim();
    let mut chars = text.chars();
    let hemisphere = chars.next()?;
    let degrees = chars.as_str();

    // A valid GEDCOM coordinate.
    if let Some(value) = parse_numeric(degrees) {
        let hemisphere = hemisphere.to_ascii_uppercase();
        if hemisphere == positive {
            return Some(value);
        }
        if hemisphere == negative {
            return Some(-value);
        }
    }

    // Just a number?
    if is_numeric(text) {
        return parse_numeric(text);
    }

    trace!(positive = %positive, negative = %negative, "unreadable coordinate");
    None
}

/// Write signed decimal degrees in GEDCOM form, e.g. `N50.5` or `W0.1`.
pub fn format_degrees(degrees: f64, positive: char, negative: char) -> String {
    if degrees.is_sign_negative() && degrees != 0.0 {
        format!("{negative}{}", format_numeric(-degrees))
    } else {
        format!("{positive}{}", format_numeric(degrees.abs()))
    }
}

pub fn format_latitude(degrees: f64) -> String {
    format_degrees(degrees, LATITUDE_NORTH, LATITUDE_SOUTH)
}

pub fn format_longitude(degrees: f64) -> String {
    format_degrees(degrees, LONGITUDE_EAST, LONGITUDE_WEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_prefixed() {
        assert_eq!(read_latitude("N50.5"), Some(50.5));
        assert_eq!(read_latitude("S50.5"), Some(-50.5));
        assert_eq!(read_latitude("n50.5"), Some(50.5));
        assert_eq!(read_longitude("E010.1"), Some(10.1));
        assert_eq!(read_longitude("W0.1278"), Some(-0.1278));
        assert_eq!(read_longitude("  w 2  "), Some(-2.0));
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(read_latitude("50.5"), Some(50.5));
        assert_eq!(read_latitude("-50.5"), Some(-50.5));
        assert_eq!(read_latitude("7"), Some(7.0));
        assert_eq!(read_longitude("+181"), Some(181.0));
    }

    #[test]
    fn test_unreadable() {
        assert_eq!(read_latitude("X50.5"), None);
        assert_eq!(read_latitude(""), None);
        assert_eq!(read_latitude("   "), None);
        assert_eq!(read_latitude("N"), None);
        assert_eq!(read_latitude("E50.5"), None);
        assert_eq!(read_longitude("N50.5"), None);
        assert_eq!(read_latitude("N50.5S"), None);
    }

    #[test]
    fn test_sign_inside_hemisphere() {
        assert_eq!(read_latitude("S-50"), Some(50.0));
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_latitude(50.5), "N50.5");
        assert_eq!(format_latitude(-50.5), "S50.5");
        assert_eq!(format_longitude(-0.1), "W0.1");
        assert_eq!(format_longitude(0.0), "E0");
        assert_eq!(Axis::Latitude.format(12.0), "N12");
    }

    #[test]
    fn test_axis_read() {
        assert_eq!(Axis::Latitude.read("S1"), Some(-1.0));
        assert_eq!(Axis::Longitude.read("E1"), Some(1.0));
    }
}
