/*
 * Property-Based Rule Tests
 *
 * Checks the force rules over generated populations: forces stay finite
 * for any input, cohesion respects its saturation bound, and separation
 * is monotone in distance and clamped at its cap.
 */

use flocksim::{Alignment, Boid, Cohesion, Separation, Vector2};
use proptest::prelude::*;

prop_compose! {
    fn arb_vector()(x in -100.0f64..100.0, y in -100.0f64..100.0) -> Vector2 {
        Vector2::new(x, y)
    }
}

prop_compose! {
    fn arb_boid()(position in arb_vector(), velocity in arb_vector()) -> Boid {
        Boid::new(position, velocity)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn forces_stay_finite_for_any_population(
        boids in prop::collection::vec(arb_boid(), 1..24),
        radius in 0.1f64..200.0,
        k in 0.0f64..5.0,
        max_force in 0.1f64..20.0,
    ) {
        let cohesion = Cohesion::new(radius, k);
        let separation = Separation::new(radius, k, max_force);
        let alignment = Alignment::new(radius, k);

        for i in 0..boids.len() {
            for force in [
                cohesion.compute_force(&boids, i),
                separation.compute_force(&boids, i),
                alignment.compute_force(&boids, i),
            ] {
                prop_assert!(force.x.is_finite());
                prop_assert!(force.y.is_finite());
            }
        }
    }

    #[test]
    fn cohesion_magnitude_never_exceeds_k(
        boids in prop::collection::vec(arb_boid(), 2..16),
        radius in 1.0f64..200.0,
        k in 0.0f64..5.0,
    ) {
        let cohesion = Cohesion::new(radius, k);
        for i in 0..boids.len() {
            let magnitude = cohesion.compute_force(&boids, i).magnitude();
            prop_assert!(magnitude <= k + 1e-9, "magnitude {magnitude} exceeds k {k}");
        }
    }

    #[test]
    fn separation_is_monotone_in_pair_distance(
        near in 0.01f64..10.0,
        spread in 0.0f64..10.0,
        k in 0.1f64..5.0,
    ) {
        let far = near + spread;
        let rule = Separation::new(25.0, k, f64::MAX);

        let at = |d: f64| vec![
            Boid::from_components(0.0, 0.0, 0.0, 0.0),
            Boid::from_components(d, 0.0, 0.0, 0.0),
        ];

        let near_force = rule.compute_force(&at(near), 0).magnitude();
        let far_force = rule.compute_force(&at(far), 0).magnitude();
        prop_assert!(near_force >= far_force - 1e-9);
    }

    #[test]
    fn separation_never_exceeds_its_cap(
        distance in 0.001f64..25.0,
        k in 0.1f64..5.0,
        max_force in 0.1f64..10.0,
    ) {
        let rule = Separation::new(25.0, k, max_force);
        let boids = vec![
            Boid::from_components(0.0, 0.0, 0.0, 0.0),
            Boid::from_components(distance, 0.0, 0.0, 0.0),
        ];

        let magnitude = rule.compute_force(&boids, 0).magnitude();
        prop_assert!(magnitude <= max_force + 1e-9);
        // Once the scaled magnitude would exceed the cap, the clamp is exact
        if k / distance > max_force {
            prop_assert!((magnitude - max_force).abs() < 1e-9);
        }
    }

    #[test]
    fn vector_equality_tolerates_sub_epsilon_noise(v in arb_vector()) {
        let nudged = v + Vector2::new(1e-4, 1e-4);
        prop_assert!(v == nudged);
        let shifted = v + Vector2::new(0.1, 0.0);
        prop_assert!(v != shifted);
    }
}
