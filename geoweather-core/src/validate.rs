use std::ops::RangeInclusive;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Visual state of a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    #[default]
    Normal,
    Invalid,
}

/// Marks for the latitude and longitude inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputMarks {
    pub latitude: FieldMark,
    pub longitude: FieldMark,
}

/// Lenient float parsing for raw input text.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"55.75°"` reads as 55.75 and `"12,5"` as 12. Text without a numeric
/// prefix becomes NaN, which never passes a range check.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let int_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        if int_digits > 0 || frac_end > end + 1 {
            end = frac_end;
        }
    }
    if end == int_start {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

/// Returns `true` when the pair has an error.
///
/// Latitude is checked first. When it is out of range only the latitude field
/// is marked and longitude is not looked at, so an invalid longitude stays
/// unflagged until latitude is fixed. A valid field has its mark cleared as
/// soon as it is checked.
pub fn check_input_validity(marks: &mut InputMarks, latitude: f64, longitude: f64) -> bool {
    if !LATITUDE_RANGE.contains(&latitude) {
        marks.latitude = FieldMark::Invalid;
        return true;
    }
    marks.latitude = FieldMark::Normal;

    if !LONGITUDE_RANGE.contains(&longitude) {
        marks.longitude = FieldMark::Invalid;
        return true;
    }
    marks.longitude = FieldMark::Normal;

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pair_clears_both_marks() {
        let mut marks = InputMarks {
            latitude: FieldMark::Invalid,
            longitude: FieldMark::Invalid,
        };

        for (lat, lon) in [(0.0, 0.0), (-90.0, -180.0), (90.0, 180.0), (55.75, 37.61)] {
            assert!(!check_input_validity(&mut marks, lat, lon));
            assert_eq!(marks, InputMarks::default());
        }
    }

    #[test]
    fn invalid_latitude_short_circuits() {
        let mut marks = InputMarks::default();

        assert!(check_input_validity(&mut marks, 95.0, 500.0));
        assert_eq!(marks.latitude, FieldMark::Invalid);
        assert_eq!(marks.longitude, FieldMark::Normal);
    }

    #[test]
    fn invalid_latitude_keeps_previous_longitude_mark() {
        let mut marks = InputMarks {
            latitude: FieldMark::Normal,
            longitude: FieldMark::Invalid,
        };

        assert!(check_input_validity(&mut marks, -91.0, 0.0));
        assert_eq!(marks.latitude, FieldMark::Invalid);
        assert_eq!(marks.longitude, FieldMark::Invalid);
    }

    #[test]
    fn invalid_longitude_clears_latitude() {
        let mut marks = InputMarks {
            latitude: FieldMark::Invalid,
            longitude: FieldMark::Normal,
        };

        assert!(check_input_validity(&mut marks, 10.0, 180.5));
        assert_eq!(marks.latitude, FieldMark::Normal);
        assert_eq!(marks.longitude, FieldMark::Invalid);
    }

    #[test]
    fn unparseable_input_is_invalid() {
        let mut marks = InputMarks::default();

        assert!(parse_float("abc").is_nan());
        assert_eq!(parse_float(" 12.5 "), 12.5);
        assert!(check_input_validity(&mut marks, parse_float(""), 0.0));
        assert_eq!(marks.latitude, FieldMark::Invalid);
    }

    #[test]
    fn parse_float_uses_numeric_prefix() {
        assert_eq!(parse_float("55.75°"), 55.75);
        assert_eq!(parse_float("12,5"), 12.0);
        assert_eq!(parse_float("  -37.5 east"), -37.5);
        assert_eq!(parse_float("+.5"), 0.5);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("1e1x"), 10.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("°55").is_nan());
    }

    #[test]
    fn prefixed_input_passes_validation() {
        let mut marks = InputMarks::default();

        assert!(!check_input_validity(&mut marks, parse_float("55.75°"), parse_float("12,5")));
        assert_eq!(marks, InputMarks::default());
    }
}
