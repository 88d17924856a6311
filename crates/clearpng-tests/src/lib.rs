//! Integration tests for ClearPNG crates.
//!
//! This crate contains property tests that check the algebra shared by
//! `clearpng-core` and `clearpng-color`: saturation, blend identities,
//! multiply/screen duality and distance metric laws.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use clearpng_color::{distance, nearest, Algorithm, Cielab, Euclidean, Lab, WeightedEuclidean};
    use clearpng_core::{
        blend, rgb_multiply, rgb_screen, same_channel, BlendMode, Blue, Green, Red, RgbPixel,
    };
    use proptest::prelude::*;

    fn pixel() -> impl Strategy<Value = RgbPixel> {
        any::<[u8; 3]>().prop_map(RgbPixel::from_array)
    }

    fn px(r: u8, g: u8, b: u8) -> RgbPixel {
        RgbPixel::from_array([r, g, b])
    }

    /// The reference pair from the blend documentation.
    #[test]
    fn test_worked_examples() {
        assert_eq!(rgb_multiply(px(10, 102, 204), px(255, 242, 179)), px(10, 96, 143));
        assert_eq!(px(10, 102, 204) * px(255, 242, 179), px(10, 96, 143));
        assert_eq!(rgb_screen(px(10, 102, 204), px(191, 150, 61)), px(194, 192, 217));
    }

    #[test]
    fn test_channel_saturation() {
        assert_eq!(Red::new(100) + Red::new(220), Red::new(255));
        assert_eq!(Red::new(100) - Red::new(220), Red::new(0));
        assert!(!same_channel(Red::new(100), Green::new(100)));
    }

    #[test]
    fn test_weighted_branches_differ() {
        // Nearly the same pair; the mean red straddles the branch point (127 vs 128).
        let low = distance::<WeightedEuclidean>(px(0, 0, 0), px(254, 0, 10));
        let high = distance::<WeightedEuclidean>(px(2, 0, 0), px(254, 0, 10));
        assert_abs_diff_eq!(low, (2.0f32 * 254.0 * 254.0 + 3.0 * 100.0).sqrt(), epsilon = 1e-3);
        assert_abs_diff_eq!(high, (3.0f32 * 252.0 * 252.0 + 2.0 * 100.0).sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn test_config_driven_selection() {
        let palette: Vec<RgbPixel> = ["#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        for name in ["euclidean", "weighted-euclidean", "delta-e"] {
            let algorithm: Algorithm = name.parse().unwrap();
            let metric = algorithm.resolve();
            let index = clearpng_color::nearest_by(metric, px(250, 20, 10), &palette);
            assert_eq!(index, Some(2), "{algorithm}");
        }
        assert_eq!(nearest::<Cielab>(px(10, 200, 30), &palette), Some(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Algorithm::WeightedEuclidean).unwrap(), r#""weighted-euclidean""#);
        let alias: Algorithm = serde_json::from_str(r#""delta-e""#).unwrap();
        assert_eq!(alias, Algorithm::Cielab);
        assert_eq!(serde_json::to_string(&BlendMode::Screen).unwrap(), r#""screen""#);
        assert_eq!(serde_json::to_string(&Red::new(7)).unwrap(), "7");
    }

    proptest! {
        #[test]
        fn prop_channel_ops_saturate(a in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!((Green::new(a) + Green::new(b)).get(), a.saturating_add(b));
            prop_assert_eq!((Green::new(a) - Green::new(b)).get(), a.saturating_sub(b));

            let mut blue = Blue::new(a);
            blue += Blue::new(b);
            prop_assert_eq!(blue.get(), a.saturating_add(b));
            blue -= Blue::new(b);
            prop_assert!(blue.get() <= a);
        }

        #[test]
        fn prop_cross_kind_never_equal(v in any::<u8>()) {
            prop_assert!(!same_channel(Red::new(v), Green::new(v)));
            prop_assert!(!same_channel(Red::new(v), Blue::new(v)));
            prop_assert!(!same_channel(Green::new(v), Blue::new(v)));
        }

        #[test]
        fn prop_pixel_equality_is_equivalence(a in pixel(), b in pixel(), c in pixel()) {
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
            if a == b && b == c {
                prop_assert_eq!(a, c);
            }
            prop_assert_eq!(a == b, a.to_array() == b.to_array());
        }

        #[test]
        fn prop_pixel_add_is_per_channel(a in pixel(), b in pixel()) {
            let [ar, ag, ab] = a.to_array();
            let [br, bg, bb] = b.to_array();
            let expected = px(ar.saturating_add(br), ag.saturating_add(bg), ab.saturating_add(bb));
            prop_assert_eq!(a + b, expected);

            let mut c = a;
            c += b;
            prop_assert_eq!(c, expected);
        }

        #[test]
        fn prop_multiply_identities(p in pixel()) {
            prop_assert_eq!(p * RgbPixel::WHITE, p);
            prop_assert_eq!(p * RgbPixel::BLACK, RgbPixel::BLACK);

            let mut q = p;
            q *= RgbPixel::WHITE;
            prop_assert_eq!(q, p);
        }

        #[test]
        fn prop_screen_identities(p in pixel()) {
            prop_assert_eq!(rgb_screen(p, RgbPixel::BLACK), p);
            prop_assert_eq!(rgb_screen(p, RgbPixel::WHITE), RgbPixel::WHITE);
        }

        #[test]
        fn prop_multiply_screen_duality(a in pixel(), b in pixel()) {
            prop_assert_eq!(rgb_screen(a, b), rgb_multiply(a.invert(), b.invert()).invert());
            prop_assert_eq!(rgb_multiply(a, b), rgb_screen(a.invert(), b.invert()).invert());
        }

        #[test]
        fn prop_blends_commute_and_bound(a in pixel(), b in pixel()) {
            prop_assert_eq!(rgb_multiply(a, b), rgb_multiply(b, a));
            prop_assert_eq!(rgb_screen(a, b), rgb_screen(b, a));

            let m = rgb_multiply(a, b).to_array();
            let s = rgb_screen(a, b).to_array();
            for i in 0..3 {
                let lo = a.to_array()[i].min(b.to_array()[i]);
                let hi = a.to_array()[i].max(b.to_array()[i]);
                prop_assert!(m[i] <= lo);
                prop_assert!(s[i] >= hi);
            }
        }

        #[test]
        fn prop_blend_modes_agree(a in pixel(), b in pixel()) {
            prop_assert_eq!(blend(a, b, BlendMode::Add), a + b);
            prop_assert_eq!(blend(a, b, BlendMode::Multiply), a * b);
            prop_assert_eq!(blend(a, b, BlendMode::Screen), rgb_screen(a, b));
        }

        #[test]
        fn prop_distance_identity(p in pixel()) {
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(algorithm.distance(p, p), 0.0);
            }
        }

        #[test]
        fn prop_distance_symmetric(a in pixel(), b in pixel()) {
            prop_assert_eq!(distance::<Euclidean>(a, b), distance::<Euclidean>(b, a));
            prop_assert_eq!(distance::<WeightedEuclidean>(a, b), distance::<WeightedEuclidean>(b, a));
            prop_assert_eq!(distance::<Cielab>(a, b), distance::<Cielab>(b, a));
        }

        #[test]
        fn prop_distance_positive_when_different(a in pixel(), b in pixel()) {
            prop_assume!(a != b);
            for algorithm in Algorithm::ALL {
                prop_assert!(algorithm.distance(a, b) > 0.0, "{} {} {}", algorithm, a, b);
            }
        }

        #[test]
        fn prop_euclidean_triangle(a in pixel(), b in pixel(), c in pixel()) {
            let ab = distance::<Euclidean>(a, b);
            let bc = distance::<Euclidean>(b, c);
            let ac = distance::<Euclidean>(a, c);
            prop_assert!(ac <= ab + bc + 1e-3);
        }

        #[test]
        fn prop_cielab_matches_lab_delta(a in pixel(), b in pixel()) {
            let expected = Lab::from_pixel(a).delta_e(Lab::from_pixel(b)) as f32;
            prop_assert_eq!(distance::<Cielab>(a, b), expected);
        }

        #[test]
        fn prop_hex_text_form(p in pixel()) {
            let text = p.to_string();
            prop_assert_eq!(text.len(), 7);
            prop_assert_eq!(text.parse::<RgbPixel>(), Ok(p));
        }
    }
}
