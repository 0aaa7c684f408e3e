use airfoil_lift_calculator::uncertain::{Sampler, UncertainError, UncertainScalar};

fn sampler() -> Sampler {
    Sampler::seeded(42, 1000)
}

#[test]
fn fixed_arithmetic_degenerates_to_plain_math() {
    let mut s = sampler();
    let a = UncertainScalar::fixed(12.5);
    let b = UncertainScalar::fixed(-3.0);

    let sum = a.add(&b, &mut s).unwrap();
    let difference = a.sub(&b, &mut s).unwrap();
    let product = a.mul(&b, &mut s).unwrap();
    let quotient = a.div(&b, &mut s).unwrap();
    let power = a.pow(&UncertainScalar::fixed(2.0), &mut s).unwrap();

    assert_eq!(sum.expected_value(), 12.5 + -3.0);
    assert_eq!(difference.expected_value(), 12.5 - -3.0);
    assert_eq!(product.expected_value(), 12.5 * -3.0);
    assert_eq!(quotient.expected_value(), 12.5 / -3.0);
    assert_eq!(power.expected_value(), 12.5_f64.powf(2.0));
    assert!(sum.is_fixed() && product.is_fixed() && power.is_fixed());

    let root = UncertainScalar::fixed(16.0).sqrt(&mut s).unwrap();
    let magnitude = b.abs(&mut s).unwrap();
    let exponential = UncertainScalar::fixed(1.0).exp(&mut s).unwrap();
    assert_eq!(root.expected_value(), 4.0);
    assert_eq!(magnitude.expected_value(), 3.0);
    assert_eq!(exponential.expected_value(), 1.0_f64.exp());
}

#[test]
fn expected_value_per_variant() {
    assert_eq!(UncertainScalar::fixed(2.5).expected_value(), 2.5);
    assert_eq!(
        UncertainScalar::uniform(1.0, 3.0).unwrap().expected_value(),
        2.0
    );
    assert_eq!(
        UncertainScalar::gaussian(-4.0, 2.0).unwrap().expected_value(),
        -4.0
    );
    assert_eq!(
        UncertainScalar::empirical(vec![1.0, 2.0, 6.0])
            .unwrap()
            .expected_value(),
        3.0
    );
}

#[test]
fn fixed_factor_scales_uniform_bounds() {
    let mut s = sampler();
    let span = UncertainScalar::uniform(2.0, 10.0).unwrap();

    let doubled = span.mul(&UncertainScalar::fixed(2.0), &mut s).unwrap();
    assert_eq!(
        doubled,
        UncertainScalar::Uniform {
            low: 4.0,
            high: 20.0
        }
    );

    // A negative factor flips the interval; bounds stay ordered.
    let negated = span.mul(&UncertainScalar::fixed(-1.0), &mut s).unwrap();
    assert_eq!(
        negated,
        UncertainScalar::Uniform {
            low: -10.0,
            high: -2.0
        }
    );

    let shifted = UncertainScalar::fixed(100.0).sub(&span, &mut s).unwrap();
    assert_eq!(
        shifted,
        UncertainScalar::Uniform {
            low: 90.0,
            high: 98.0
        }
    );
}

#[test]
fn fixed_offset_shifts_gaussian_parameters() {
    let mut s = sampler();
    let noise = UncertainScalar::gaussian(5.0, 2.0).unwrap();

    let shifted = noise.add(&UncertainScalar::fixed(10.0), &mut s).unwrap();
    assert_eq!(
        shifted,
        UncertainScalar::Gaussian {
            mean: 15.0,
            std_dev: 2.0
        }
    );

    let scaled = noise.mul(&UncertainScalar::fixed(-3.0), &mut s).unwrap();
    assert_eq!(
        scaled,
        UncertainScalar::Gaussian {
            mean: -15.0,
            std_dev: 6.0
        }
    );
}

#[test]
fn independent_gaussians_sum_in_closed_form() {
    let mut s = sampler();
    let a = UncertainScalar::gaussian(10.0, 3.0).unwrap();
    let b = UncertainScalar::gaussian(5.0, 4.0).unwrap();

    let sum = a.add(&b, &mut s).unwrap();
    assert_eq!(
        sum,
        UncertainScalar::Gaussian {
            mean: 15.0,
            std_dev: 5.0
        }
    );

    let difference = a.sub(&b, &mut s).unwrap();
    assert_eq!(
        difference,
        UncertainScalar::Gaussian {
            mean: 5.0,
            std_dev: 5.0
        }
    );
}

#[test]
fn empirical_elementwise_preserves_count_and_order() {
    let mut s = sampler();
    let discrete = UncertainScalar::empirical(vec![4.0, 1.0, 9.0]).unwrap();

    let scaled = discrete.mul(&UncertainScalar::fixed(2.0), &mut s).unwrap();
    assert_eq!(scaled.samples().unwrap(), &[8.0, 2.0, 18.0]);

    let root = discrete.sqrt(&mut s).unwrap();
    assert_eq!(root.samples().unwrap(), &[2.0, 1.0, 3.0]);

    let inverted = UncertainScalar::fixed(36.0).div(&discrete, &mut s).unwrap();
    assert_eq!(inverted.samples().unwrap(), &[9.0, 36.0, 4.0]);
}

#[test]
fn sampling_combination_is_seeded_and_reproducible() {
    let span = UncertainScalar::uniform(0.0, 1.0).unwrap();
    let noise = UncertainScalar::gaussian(0.0, 1.0).unwrap();

    let mut first = Sampler::seeded(7, 500);
    let mut second = Sampler::seeded(7, 500);
    let a = span.mul(&noise, &mut first).unwrap();
    let b = span.mul(&noise, &mut second).unwrap();

    let a_samples = a.samples().expect("sampled combination is empirical");
    assert_eq!(a_samples.len(), 500);
    assert_eq!(a_samples, b.samples().unwrap());
}

#[test]
fn division_by_fixed_zero_is_an_error() {
    let mut s = sampler();
    let err = UncertainScalar::fixed(1.0)
        .div(&UncertainScalar::fixed(0.0), &mut s)
        .unwrap_err();
    assert!(matches!(err, UncertainError::DivisionByZero));

    let discrete = UncertainScalar::empirical(vec![2.0, 0.0]).unwrap();
    let err = UncertainScalar::fixed(1.0)
        .div(&discrete, &mut s)
        .unwrap_err();
    assert!(matches!(err, UncertainError::DivisionByZero));
}

#[test]
fn sqrt_of_negative_is_an_error() {
    let mut s = sampler();
    let err = UncertainScalar::fixed(-4.0).sqrt(&mut s).unwrap_err();
    assert!(matches!(err, UncertainError::NegativeSqrt { .. }));
}

#[test]
fn constructors_validate_distribution_invariants() {
    assert!(matches!(
        UncertainScalar::uniform(2.0, 1.0).unwrap_err(),
        UncertainError::InvertedUniformBounds { .. }
    ));
    assert!(matches!(
        UncertainScalar::gaussian(0.0, -1.0).unwrap_err(),
        UncertainError::NegativeStdDev { .. }
    ));
    assert!(matches!(
        UncertainScalar::empirical(Vec::new()).unwrap_err(),
        UncertainError::EmptySamples
    ));
}

#[test]
fn fixed_operations_do_not_consume_the_sampler() {
    // A fixed-only computation must give the same answer under any seed.
    let run = |seed: u64| {
        let mut s = Sampler::seeded(seed, 1000);
        UncertainScalar::fixed(3.0)
            .mul(&UncertainScalar::fixed(7.0), &mut s)
            .unwrap()
            .expected_value()
    };
    assert_eq!(run(1), run(999));
}
