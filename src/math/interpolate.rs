//! Linear interpolation of a dependent value over integer steps.
//!
//! Every fill routine describes a triangle edge as "the x (or intensity) at each
//! row", which is exactly a sequence sampled once per unit step of the
//! independent variable:
//!
//! ```text
//! i:   i0      i0+1          i0+2            ...   i0+n
//! d:   d0      d0+slope      d0+2*slope      ...   d0+n*slope
//!
//! n = round(i1 - i0),  slope = (d1 - d0) / (i1 - i0)
//! ```
//!
//! Because `n` is rounded, the last element is not necessarily `d1`.

use crate::error::RasterError;

/// Longest range that is sampled; no pixel coordinate is further apart.
const MAX_EXTENT: f32 = i32::MAX as f32;

/// Samples `d` linearly from `(i0, d0)` towards `(i1, d1)` once per unit of `i`.
///
/// Returns `round(i1 - i0) + 1` values, element `k` being `d0 + k * slope`.
/// A reversed range shorter than `-0.5` yields an empty sequence.
///
/// # Errors
/// [`RasterError::DegenerateInterpolation`] when `i1 == i0`; callers are
/// expected to special-case zero-extent edges before calling.
/// [`RasterError::UnboundedInterpolation`] when either end is not finite or
/// the range is longer than any `i32` pixel distance.
pub fn interpolate(i0: f32, d0: f32, i1: f32, d1: f32) -> Result<Vec<f32>, RasterError> {
    if i1 == i0 {
        return Err(RasterError::DegenerateInterpolation { at: i0 });
    }
    let extent = i1 - i0;
    if !extent.is_finite() || extent.abs() > MAX_EXTENT {
        return Err(RasterError::UnboundedInterpolation { from: i0, to: i1 });
    }

    let count = (extent.round() as i64).saturating_add(1).max(0) as usize;
    let slope = (d1 - d0) / (i1 - i0);

    Ok((0..count).map(|k| d0 + k as f32 * slope).collect())
}

/// Like [`interpolate`], but a zero-extent range yields `[d0]`.
///
/// Fill routines use this for triangle edges that may be horizontal (flat top
/// or flat bottom) and for spans that collapse to a single column.
pub(crate) fn interpolate_edge(i0: f32, d0: f32, i1: f32, d1: f32) -> Result<Vec<f32>, RasterError> {
    if i1 == i0 {
        Ok(vec![d0])
    } else {
        interpolate(i0, d0, i1, d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_is_rounded_extent_plus_one() {
        assert_eq!(interpolate(0.0, 0.0, 4.0, 8.0).unwrap().len(), 5);
        assert_eq!(interpolate(0.0, 0.0, 2.4, 1.0).unwrap().len(), 3);
        assert_eq!(interpolate(0.0, 0.0, 2.6, 1.0).unwrap().len(), 4);
        assert_eq!(interpolate(-250.0, 0.3, 250.0, 1.0).unwrap().len(), 501);
    }

    #[test]
    fn values_step_by_slope_from_d0() {
        let values = interpolate(10.0, 1.0, 14.0, 3.0).unwrap();
        assert_eq!(values, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn last_value_follows_slope_not_d1() {
        let (i0, d0, i1, d1) = (0.0, 0.0, 2.6, 13.0);
        let values = interpolate(i0, d0, i1, d1).unwrap();
        let slope = (d1 - d0) / (i1 - i0);

        assert_relative_eq!(values[0], d0);
        assert_relative_eq!(
            *values.last().unwrap(),
            d0 + (values.len() - 1) as f32 * slope,
            epsilon = 1e-4
        );
        assert!(*values.last().unwrap() > d1);
    }

    #[test]
    fn many_ranges_start_at_d0_and_end_on_slope() {
        for (i0, d0, i1, d1) in [
            (0.0, 5.0, 1.0, -5.0),
            (-3.5, 0.0, 7.25, 100.0),
            (100.0, 0.1, 300.0, 0.9),
            (7.0, 2.0, 3.0, 6.0),
        ] {
            let values = interpolate(i0, d0, i1, d1).unwrap();
            let expected_len = ((i1 - i0).round() as i64 + 1).max(0) as usize;
            assert_eq!(values.len(), expected_len);
            if let (Some(first), Some(last)) = (values.first(), values.last()) {
                let slope = (d1 - d0) / (i1 - i0);
                assert_relative_eq!(*first, d0);
                assert_relative_eq!(*last, d0 + (values.len() - 1) as f32 * slope, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(interpolate(7.0, 2.0, 3.0, 6.0).unwrap().is_empty());
        assert_eq!(interpolate(1.0, 2.0, 0.8, 6.0).unwrap(), vec![2.0]);
    }

    #[test]
    fn equal_endpoints_are_rejected() {
        assert_eq!(
            interpolate(3.0, 1.0, 3.0, 9.0),
            Err(RasterError::DegenerateInterpolation { at: 3.0 })
        );
    }

    #[test]
    fn non_finite_ranges_are_rejected() {
        assert_eq!(
            interpolate(0.0, 0.0, f32::INFINITY, 1.0),
            Err(RasterError::UnboundedInterpolation { from: 0.0, to: f32::INFINITY })
        );
        assert!(matches!(
            interpolate(f32::NEG_INFINITY, 0.0, 2.0, 1.0),
            Err(RasterError::UnboundedInterpolation { .. })
        ));
        assert!(matches!(
            interpolate(f32::NAN, 0.0, 2.0, 1.0),
            Err(RasterError::UnboundedInterpolation { .. })
        ));
        // Both ends finite, difference overflows.
        assert!(matches!(
            interpolate(-f32::MAX, 0.0, f32::MAX, 1.0),
            Err(RasterError::UnboundedInterpolation { .. })
        ));
    }

    #[test]
    fn ranges_beyond_any_pixel_distance_are_rejected() {
        assert!(matches!(
            interpolate(0.0, 0.0, 1e19, 1.0),
            Err(RasterError::UnboundedInterpolation { .. })
        ));
        assert!(matches!(
            interpolate(0.0, 0.0, -1e10, 1.0),
            Err(RasterError::UnboundedInterpolation { .. })
        ));
    }

    #[test]
    fn edge_helper_collapses_flat_ranges() {
        assert_eq!(interpolate_edge(3.0, 1.0, 3.0, 9.0).unwrap(), vec![1.0]);
        assert_eq!(interpolate_edge(0.0, 0.0, 2.0, 4.0).unwrap(), vec![0.0, 2.0, 4.0]);
    }
}
