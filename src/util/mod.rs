pub mod angle;
pub mod arithmetic;
pub mod assert;
pub mod buffer;
pub mod matrix;
pub mod point;
pub mod quaternion;
pub mod rotation;
pub mod text;
pub mod trig;
pub mod vector;

/// Routes `tracing` output to the test harness so it shows up next to failing tests.
#[cfg(test)]
pub(crate) fn setup_test_log() {
    // Fails harmlessly if another test got there first.
    let _ = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true),
        )
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub mod gg_float {
    use num_traits::Zero;

    /// Replaces `-0.0` with `+0.0` so normalised values compare and print the same way.
    pub fn force_positive_zero(x: f32) -> f32 {
        if x.is_zero() { 0.0 } else { x }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn zero_helpers() {
            assert!(force_positive_zero(-0.0).is_sign_positive());
            assert_eq!(force_positive_zero(-2.0), -2.0);
            assert!(force_positive_zero(f32::NAN).is_nan());
        }
    }
}
