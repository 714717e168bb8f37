// Copyright 2025 the Dsviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use dsviz_geometry::RelativePoint;
use dsviz_geometry::kernel::{distance_ratio, find_point_on_line};

/// Returns the square root of the number, rounded up.
#[inline]
pub(crate) const fn isqrt_ceil(num: usize) -> usize {
    let s = num.isqrt();

    // `s * s <= num`, so this cannot overflow.
    if s * s < num { s + 1 } else { s }
}

/// Drop the leading and trailing runs of `None`; interior gaps stay.
pub fn trim_nulls<T>(values: &[Option<T>]) -> &[Option<T>] {
    let start = values.iter().position(Option::is_some).unwrap_or(values.len());
    let end = values
        .iter()
        .rposition(Option::is_some)
        .map_or(start, |last| last + 1);
    &values[start..end]
}

/// The edge between two node centers, pulled in by `radius` at both ends.
pub(crate) fn shortened(
    from: RelativePoint,
    to: RelativePoint,
    radius: f64,
) -> (RelativePoint, RelativePoint) {
    let ratio = distance_ratio(radius, from, to);
    (
        find_point_on_line(from, to, ratio),
        find_point_on_line(to, from, ratio),
    )
}

/// Text shown for a possibly-missing value.
pub(crate) fn value_label(value: Option<i64>, missing: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => missing.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsviz_geometry::Plane;

    #[test]
    fn isqrt_ceil() {
        assert_eq!(super::isqrt_ceil(0), 0);
        assert_eq!(super::isqrt_ceil(3), 2);
        assert_eq!(super::isqrt_ceil(4), 2);
        assert_eq!(super::isqrt_ceil(5), 3);
    }

    #[test]
    fn trims_only_the_outer_runs() {
        let values = [None, None, Some(3), None, Some(5), None];
        assert_eq!(trim_nulls(&values), &[Some(3), None, Some(5)]);
        let empty: [Option<i64>; 3] = [None, None, None];
        assert!(trim_nulls(&empty).is_empty());
        assert!(trim_nulls::<i64>(&[]).is_empty());
    }

    #[test]
    fn shortened_edges_stop_at_the_circle() {
        let plane = Plane::new(200.0, 200.0);
        let a = RelativePoint::new(0.0, 0.0, plane);
        let b = RelativePoint::new(30.0, 40.0, plane);
        let (p, q) = shortened(a, b, 25.0);
        assert_eq!((p.x, p.y), (15.0, 20.0));
        assert_eq!((q.x, q.y), (15.0, 20.0));
    }
}
