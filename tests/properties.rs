use approx::assert_abs_diff_eq;
use fuzzy_power_control::{rule_table, ControllerConfig, Level, MembershipFunction, Strategy, TemperatureController};
use proptest::prelude::*;
use proptest::strategy::Strategy as PropStrategy;

fn controller(strategy: Strategy) -> TemperatureController {
    ControllerConfig::default().with_strategy(strategy).build().unwrap()
}

fn sorted_breakpoints() -> impl PropStrategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0f64..50.0, 3..=4).prop_map(|mut points| {
        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points
    })
}

proptest! {
    #[test]
    fn membership_is_bounded(points in sorted_breakpoints(), x in -100.0f64..100.0) {
        let mf = match *points {
            [a, b, c] => MembershipFunction::triangular(a, b, c),
            [a, b, c, d] => MembershipFunction::trapezoidal(a, b, c, d),
            _ => unreachable!(),
        }
        .unwrap();
        let m = mf.evaluate(x);

        prop_assert!((0. ..=1.).contains(&m));

        if !mf.support().contains(&x) {
            prop_assert_eq!(m, 0.);
        }

        // Peak or plateau
        prop_assert_eq!(mf.evaluate(points[1]), 1.);
    }

    #[test]
    fn firing_is_min_of_antecedents(err in -6.0f64..6.0, err_rate in -15.0f64..15.0) {
        let controller = controller(Strategy::default());
        let firing = controller.fire(err, err_rate);

        for (rule, (i, consequence, strength)) in rule_table().iter().zip(firing.iter()) {
            let (a, b) = rule.premise;
            let expected = f64::min(
                controller.first().membership_of(a, err),
                controller.second().membership_of(b, err_rate),
            );

            prop_assert_eq!(consequence, rule.consequence);
            prop_assert_eq!(firing.strength(i), Some(strength));
            prop_assert_eq!(strength, expected);
            prop_assert!((0. ..=1.).contains(&strength));
        }
    }

    #[test]
    fn output_is_antisymmetric(err in -4.0f64..4.0, err_rate in -10.0f64..10.0) {
        for strategy in [Strategy::default(), Strategy::Sugeno] {
            let controller = controller(strategy);
            let forward = controller.infer(err, err_rate).unwrap().power_level();
            let mirrored = controller.infer(-err, -err_rate).unwrap().power_level();

            assert_abs_diff_eq!(forward, -mirrored, epsilon = 1e-6);
            prop_assert!((-100. ..=100.).contains(&forward));
        }
    }

    #[test]
    fn input_domain_is_covered(x in -4.0f64..=4.0) {
        let controller = controller(Strategy::default());
        let total: f64 = [Level::N, Level::Z, Level::P]
            .into_iter()
            .map(|level| controller.first().membership_of(level, x))
            .sum();

        prop_assert!(total > 0.);
    }
}
