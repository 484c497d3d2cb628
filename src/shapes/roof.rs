/// Slope of a wall that rises `height` over a horizontal run of `inset`, in
/// degrees from horizontal.
///
/// An inset of zero gives a vertical wall and a negative inset an overhang
/// past 90°.
#[must_use]
pub fn roof_angle(inset: f64, height: f64) -> f64 {
    height.atan2(inset).to_degrees()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn known_slopes() {
        assert_relative_eq!(roof_angle(20.0, 75.0), 75.068_582_821_862_45, epsilon = 1e-9);
        assert_relative_eq!(roof_angle(10.0, 75.0), 82.405_356_631_408_57, epsilon = 1e-9);
        assert_relative_eq!(roof_angle(0.0, 75.0), 90.0, epsilon = 1e-12);
        assert_relative_eq!(roof_angle(-5.0, 75.0), 93.814_074_834_290_37, epsilon = 1e-9);
    }

    #[test]
    fn slope_flattens_as_inset_grows() {
        assert!(roof_angle(40.0, 75.0) < roof_angle(20.0, 75.0));
    }
}
