#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        angle::Angle,
        arithmetic,
        assert::*,
        buffer::BinaryFormat,
        matrix::{Matrix3x3, Matrix4x4, Transform2, Transform3},
        point::{Point2, Point3},
        quaternion::{AxisAngle, EulerAngles, Quaternion},
        rotation::Rotation,
        text::{TextFormat, TextReader},
        trig,
        vector::{Vector2, Vector3},
    },
};
