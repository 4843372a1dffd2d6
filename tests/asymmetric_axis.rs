//! End-to-end conditioning of an asymmetric drive axis

use std::hash::{Hash, Hasher};

use axis_conditioning::prelude::*;
use axis_conditioning::utils::FloatOrd;
use serde::{Deserialize, Serialize};
use serde_test::{assert_tokens, Token};

fn drive_axis() -> NonUniformConditioner {
    NonUniformConditioner::new(
        // Braking wants bite: narrow deadband, linear, full range.
        UniformConditioner::new(0.05, 1.0, 0.0, 1.0),
        // Throttle wants finesse: wider deadband, cubic response.
        UniformConditioner::new(0.1, 3.0, 0.0, 1.0),
    )
}

#[test]
fn asymmetric_sides_stay_independent() {
    let axis = drive_axis();

    // Inside either deadband the axis is quiet.
    assert_eq!(axis.condition(0.08), 0.0);
    assert_eq!(axis.condition(-0.04), 0.0);

    // The braking side is live where the throttle side still isn't.
    assert!(axis.condition(-0.08) < 0.0);

    // The cubic throttle stays below the linear brake's magnitude
    // over the shared live zone.
    for value in 11..100 {
        let value = value as f64 * 0.01;

        assert!(axis.condition(value) < -axis.condition(-value));
    }
}

#[test]
fn retuning_one_side_leaves_the_other_alone() {
    let mut axis = drive_axis();
    let before = axis.condition(-0.5);

    axis.positive.set_exponent(5.0);
    axis.positive.set_range(0.0, 0.25);

    assert_eq!(axis.condition(-0.5), before);
    assert!(axis.condition(0.5) <= 0.25);
}

#[test]
fn pipeline_conditions_stages_in_order() {
    // Invert the axis, then shape it: equivalent to shaping the mirrored input.
    let conditioner = AxisConditioner::from_iter([
        AxisConditioner::Inverted,
        AxisConditioner::NonUniform(drive_axis()),
    ]);

    let axis = drive_axis();
    for value in -100..=100 {
        let value = value as f64 * 0.01;

        assert_eq!(conditioner.condition(value), axis.condition(-value));
    }
}

#[test]
fn curve_serializes_token_exact() {
    let curve = UniformConditioner::new(0.1, 2.0, 0.0, 1.0);

    assert_tokens(
        &curve,
        &[
            Token::Struct {
                name: "UniformConditioner",
                len: 6,
            },
            Token::Str("deadband"),
            Token::F64(0.1),
            Token::Str("exponent"),
            Token::F64(2.0),
            Token::Str("output_min"),
            Token::F64(0.0),
            Token::Str("output_max"),
            Token::F64(1.0),
            Token::Str("livezone_recip"),
            Token::F64(1.0 / 0.9),
            Token::Str("output_range"),
            Token::F64(1.0),
            Token::StructEnd,
        ],
    );
}

#[test]
fn conditioner_variants_serialize_token_exact() {
    assert_tokens(
        &AxisConditioner::None,
        &[Token::UnitVariant {
            name: "AxisConditioner",
            variant: "None",
        }],
    );

    assert_tokens(
        &AxisConditioner::Sensitivity(2.0),
        &[
            Token::NewtypeVariant {
                name: "AxisConditioner",
                variant: "Sensitivity",
            },
            Token::F64(2.0),
        ],
    );
}

/// Passes values through only once they clear a notch threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Notched(f64);

#[serde_typetag]
impl CustomAxisConditioner for Notched {
    fn condition(&self, input_value: f64) -> f64 {
        if input_value.abs() >= self.0 {
            input_value
        } else {
            0.0
        }
    }
}

impl Eq for Notched {}

impl Hash for Notched {
    fn hash<H: Hasher>(&self, state: &mut H) {
        FloatOrd(self.0).hash(state);
    }
}

#[test]
fn custom_conditioner_round_trips() {
    register_axis_conditioner::<Notched>();

    let custom: Box<dyn CustomAxisConditioner> = Box::new(Notched(0.25));
    assert_tokens(
        &custom,
        &[
            Token::Map { len: Some(1) },
            Token::BorrowedStr("Notched"),
            Token::NewtypeStruct { name: "Notched" },
            Token::F64(0.25),
            Token::MapEnd,
        ],
    );

    let conditioner = AxisConditioner::from(Notched(0.25));
    assert_eq!(conditioner.condition(0.1), 0.0);
    assert_eq!(conditioner.condition(0.5), 0.5);
}
