//! Affine geometry toolkit: scalar angle types, free vectors, affine points, quaternions and
//! 3×3/4×4 transform matrices, with binary and text serialization hooks.
//!
//! Everything is a small `Copy` value type. Most users want the prelude:
//!
//! ```
//! use gg_affine::core::prelude::*;
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.len(), 5.0);
//! ```

pub mod core;
pub mod util;
