//! Affine transform matrices for 2D ([`Matrix3x3`]) and 3D ([`Matrix4x4`]).
//!
//! Matrices are stored row-major and act on row vectors: `v' = v * M`. The translation lives in
//! the last row. Because of this convention `A * B` applies `A` first, and the incremental
//! builders ([`translate`](Matrix3x3::translate), [`scale_by`](Matrix3x3::scale_by),
//! [`rotate`](Matrix3x3::rotate)) append a step, so a chain of calls applies in call order.
use crate::core::prelude::*;
use crate::util::text;

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Mul, MulAssign},
};

/// A 2D affine transform in homogeneous coordinates:
/// ```text
/// | e0 e1 e2 |   linear part in e0 e1 / e3 e4
/// | e3 e4 e5 |
/// | e6 e7 e8 |   translation in e6 e7
/// ```
///
/// # Examples
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let m = Matrix3x3::identity()
///     .scaled(Vector2::new(2.0, 2.0))
///     .rotated(Rotation::from_degrees(90.0))
///     .translated(Vector2::new(10.0, 0.0));
/// // Scaled, then rotated, then translated.
/// assert!((Point2::new(1.0, 0.0) * m).almost_eq(Point2::new(10.0, 2.0)));
/// // Vectors ignore the translation.
/// assert!((Vector2::new(1.0, 0.0) * m).almost_eq(Vector2::new(0.0, 2.0)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
#[must_use]
pub struct Matrix3x3 {
    pub elements: [f32; 9],
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Matrix3x3::IDENTITY
    }
}

impl Matrix3x3 {
    pub const IDENTITY: Matrix3x3 = Matrix3x3::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    pub const fn new(elements: [f32; 9]) -> Matrix3x3 {
        Matrix3x3 { elements }
    }
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Matrix3x3 {
        let [[e0, e1, e2], [e3, e4, e5], [e6, e7, e8]] = rows;
        Matrix3x3::new([e0, e1, e2, e3, e4, e5, e6, e7, e8])
    }
    pub const fn identity() -> Matrix3x3 {
        Matrix3x3::IDENTITY
    }
    pub const fn zero() -> Matrix3x3 {
        Matrix3x3::new([0.0; 9])
    }

    pub fn create_translation(translation: Vector2) -> Matrix3x3 {
        Matrix3x3::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [translation.x, translation.y, 1.0],
        ])
    }
    pub fn create_scale(scale: Vector2) -> Matrix3x3 {
        Matrix3x3::from_rows([[scale.x, 0.0, 0.0], [0.0, scale.y, 0.0], [0.0, 0.0, 1.0]])
    }
    /// Rotates counter-clockwise: `(1, 0)` turned by 90° becomes `(0, 1)`.
    pub fn create_rotation(rotation: impl Into<Rotation>) -> Matrix3x3 {
        let rotation = rotation.into();
        let (sin, cos) = (trig::sine(rotation), trig::cosine(rotation));
        Matrix3x3::from_rows([[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }
    /// Translates by `-offset`, scales, rotates, then translates by `translation`.
    ///
    /// Unlike [`Matrix4x4::create_transform`], the offset is not added back afterwards.
    pub fn create_transform(
        translation: Vector2,
        scale: Vector2,
        rotation: impl Into<Rotation>,
        offset: Vector2,
    ) -> Matrix3x3 {
        Matrix3x3::create_translation(-offset)
            .scaled(scale)
            .rotated(rotation)
            .translated(translation)
    }

    /// # Panics
    /// If `row` or `column` is not less than 3.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> f32 {
        check_lt!(row, 3_usize);
        check_lt!(column, 3_usize);
        self.elements[row * 3 + column]
    }
    /// # Panics
    /// If `row` or `column` is not less than 3.
    pub fn set(&mut self, row: usize, column: usize, value: f32) {
        check_lt!(row, 3_usize);
        check_lt!(column, 3_usize);
        self.elements[row * 3 + column] = value;
    }

    fn rows(&self) -> [[f32; 3]; 3] {
        let [e0, e1, e2, e3, e4, e5, e6, e7, e8] = self.elements;
        [[e0, e1, e2], [e3, e4, e5], [e6, e7, e8]]
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    #[must_use]
    pub fn translation(&self) -> Vector2 {
        Vector2::new(self.elements[6], self.elements[7])
    }
    /// The lengths of the two basis rows. Only meaningful for a matrix without shear.
    #[must_use]
    pub fn scale(&self) -> Vector2 {
        Vector2::new(
            Vector2::new(self.elements[0], self.elements[1]).len(),
            Vector2::new(self.elements[3], self.elements[4]).len(),
        )
    }
    /// The counter-clockwise rotation of the first basis row.
    #[must_use]
    pub fn rotation(&self) -> Angle {
        Angle::from(trig::arc_tangent(self.elements[0], self.elements[1]))
    }
    /// Decomposes into translation, scale and rotation. The matrix must be a similarity
    /// transform (no shear) for the result to recompose to the same matrix.
    #[must_use]
    pub fn transform(&self) -> Transform2 {
        Transform2 {
            translation: self.translation(),
            scale: self.scale(),
            rotation: self.rotation(),
        }
    }

    /// Embeds this transform in the xy-plane of a 3D transform.
    pub fn to_4x4(&self) -> Matrix4x4 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows();
        Matrix4x4::from_rows([
            [a, b, 0.0, c],
            [d, e, 0.0, f],
            [0.0, 0.0, 1.0, 0.0],
            [g, h, 0.0, i],
        ])
    }

    /// Inverting a singular matrix yields non-finite elements; nothing else is signalled.
    pub fn invert(&mut self) {
        *self = self.inverted();
    }
    pub fn inverted(&self) -> Matrix3x3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows();
        let determinant = self.determinant();
        if determinant.abs() < EPSILON {
            debug!("Matrix3x3: inverting near-singular matrix, determinant {determinant}: {self}");
        }
        let inv = 1.0 / determinant;
        Matrix3x3::from_rows([
            [(e * i - f * h) * inv, (c * h - b * i) * inv, (b * f - c * e) * inv],
            [(f * g - d * i) * inv, (a * i - c * g) * inv, (c * d - a * f) * inv],
            [(d * h - e * g) * inv, (b * g - a * h) * inv, (a * e - b * d) * inv],
        ])
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    pub fn transposed(&self) -> Matrix3x3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows();
        Matrix3x3::from_rows([[a, d, g], [b, e, h], [c, f, i]])
    }

    /// Appends a translation.
    pub fn translate(&mut self, translation: Vector2) {
        *self *= Matrix3x3::create_translation(translation);
    }
    pub fn translated(&self, translation: Vector2) -> Matrix3x3 {
        *self * Matrix3x3::create_translation(translation)
    }
    /// Appends a scale. This multiplies the first two columns.
    pub fn scale_by(&mut self, scale: Vector2) {
        for row in 0..3 {
            self.elements[row * 3] *= scale.x;
            self.elements[row * 3 + 1] *= scale.y;
        }
    }
    pub fn scaled(&self, scale: Vector2) -> Matrix3x3 {
        let mut rv = *self;
        rv.scale_by(scale);
        rv
    }
    /// Appends a counter-clockwise rotation.
    pub fn rotate(&mut self, rotation: impl Into<Rotation>) {
        *self *= Matrix3x3::create_rotation(rotation);
    }
    pub fn rotated(&self, rotation: impl Into<Rotation>) -> Matrix3x3 {
        *self * Matrix3x3::create_rotation(rotation)
    }

    pub fn almost_eq(&self, rhs: Matrix3x3) -> bool {
        self.elements
            .iter()
            .zip(rhs.elements.iter())
            .all(|(l, r)| (l - r).abs() < EPSILON)
    }
}

impl One for Matrix3x3 {
    fn one() -> Self {
        Matrix3x3::IDENTITY
    }
}

impl Zero for Matrix3x3 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl Add<Matrix3x3> for Matrix3x3 {
    type Output = Matrix3x3;

    fn add(self, rhs: Matrix3x3) -> Self::Output {
        let mut rv = self;
        for (l, r) in rv.elements.iter_mut().zip(rhs.elements) {
            *l += r;
        }
        rv
    }
}

impl Mul<Matrix3x3> for Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: Matrix3x3) -> Self::Output {
        let (l, r) = (self.rows(), rhs.rows());
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = l[i][0] * r[0][j] + l[i][1] * r[1][j] + l[i][2] * r[2][j];
            }
        }
        Matrix3x3::from_rows(rows)
    }
}
impl MulAssign<Matrix3x3> for Matrix3x3 {
    fn mul_assign(&mut self, rhs: Matrix3x3) {
        *self = *self * rhs;
    }
}

impl Mul<Matrix3x3> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: Matrix3x3) -> Self::Output {
        let e = rhs.elements;
        Vector2::new(
            self.x * e[0] + self.y * e[3],
            self.x * e[1] + self.y * e[4],
        )
    }
}
impl MulAssign<Matrix3x3> for Vector2 {
    fn mul_assign(&mut self, rhs: Matrix3x3) {
        *self = *self * rhs;
    }
}

impl Mul<Matrix3x3> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: Matrix3x3) -> Self::Output {
        let e = rhs.elements;
        Point2::new(
            self.x * e[0] + self.y * e[3] + e[6],
            self.x * e[1] + self.y * e[4] + e[7],
        )
    }
}
impl MulAssign<Matrix3x3> for Point2 {
    fn mul_assign(&mut self, rhs: Matrix3x3) {
        *self = *self * rhs;
    }
}

impl TextFormat for Matrix3x3 {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_f32_array(out, &self.elements, format);
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        let elements = reader.read_f32_array::<9>().context(
            "the string could not be read as a Matrix3x3 (expected nine floating point numbers \
             separated by whitespace and/or a comma)",
        )?;
        Ok(Matrix3x3::new(elements))
    }
}

impl fmt::Display for Matrix3x3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Matrix3x3 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Matrix3x3::from_text(s, "")
    }
}

impl BinaryFormat for Matrix3x3 {}

/// A 3D affine (or projective) transform, laid out like [`Matrix3x3`] with the translation in
/// elements 12, 13 and 14.
///
/// ```
/// use gg_affine::core::prelude::*;
///
/// let m = Matrix4x4::create_transform(
///     Vector3::new(1.0, 2.0, 3.0),
///     Vector3::new(2.0, 2.0, 2.0),
///     Quaternion::create_roll(Rotation::from_degrees(90.0)),
///     Vector3::zero(),
/// );
/// assert!((Point3::new(1.0, 0.0, 0.0) * m).almost_eq(Point3::new(1.0, 4.0, 3.0)));
///
/// let transform = m.transform();
/// assert!(transform.scale.almost_eq(Vector3::new(2.0, 2.0, 2.0)));
/// assert!(transform.translation.almost_eq(Vector3::new(1.0, 2.0, 3.0)));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
#[must_use]
pub struct Matrix4x4 {
    pub elements: [f32; 16],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Matrix4x4 = Matrix4x4::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const fn new(elements: [f32; 16]) -> Matrix4x4 {
        Matrix4x4 { elements }
    }
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Matrix4x4 {
        let [
            [e0, e1, e2, e3],
            [e4, e5, e6, e7],
            [e8, e9, e10, e11],
            [e12, e13, e14, e15],
        ] = rows;
        Matrix4x4::new([
            e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11, e12, e13, e14, e15,
        ])
    }
    pub const fn identity() -> Matrix4x4 {
        Matrix4x4::IDENTITY
    }
    pub const fn zero() -> Matrix4x4 {
        Matrix4x4::new([0.0; 16])
    }

    pub fn create_translation(translation: Vector3) -> Matrix4x4 {
        Matrix4x4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [translation.x, translation.y, translation.z, 1.0],
        ])
    }
    pub fn create_scale(scale: Vector3) -> Matrix4x4 {
        Matrix4x4::from_rows([
            [scale.x, 0.0, 0.0, 0.0],
            [0.0, scale.y, 0.0, 0.0],
            [0.0, 0.0, scale.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
    /// The matrix form of `rotation`: `v * create_rotation(q)` equals `v.rotated(q)`.
    pub fn create_rotation(rotation: Quaternion) -> Matrix4x4 {
        let r = rotation.column_matrix();
        Matrix4x4::from_rows([
            [r[0][0], r[1][0], r[2][0], 0.0],
            [r[0][1], r[1][1], r[2][1], 0.0],
            [r[0][2], r[1][2], r[2][2], 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
    /// Translates by `-offset`, scales, rotates, then translates by `translation + offset`, so
    /// `offset` acts as the pivot of the scale and rotation.
    pub fn create_transform(
        translation: Vector3,
        scale: Vector3,
        rotation: Quaternion,
        offset: Vector3,
    ) -> Matrix4x4 {
        Matrix4x4::create_translation(-offset)
            .scaled(scale)
            .rotated(rotation)
            .translated(translation + offset)
    }

    /// A left-handed perspective projection. `field_of_view` is horizontal, `aspect_ratio` is
    /// width over height, and depth maps `near..far` onto `0..1` after the divide by w.
    pub fn create_perspective_projection(
        field_of_view: Angle,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Matrix4x4 {
        let x_scale = 1.0 / (field_of_view.in_radians() / 2.0).tan();
        let y_scale = x_scale * aspect_ratio;
        let depth_scale = far / (far - near);
        Matrix4x4::from_rows([
            [x_scale, 0.0, 0.0, 0.0],
            [0.0, y_scale, 0.0, 0.0],
            [0.0, 0.0, depth_scale, 1.0],
            [0.0, 0.0, -near * depth_scale, 0.0],
        ])
    }
    /// A left-handed orthographic projection mapping `[0, width] x [0, height] x [0, depth]`
    /// onto `[-1, 1] x [-1, 1] x [0, 1]`.
    pub fn create_orthographic_projection(width: f32, height: f32, depth: f32) -> Matrix4x4 {
        Matrix4x4::from_rows([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, 2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 1.0 / depth, 0.0],
            [-1.0, -1.0, 0.0, 1.0],
        ])
    }

    /// # Panics
    /// If `row` or `column` is not less than 4.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> f32 {
        check_lt!(row, 4_usize);
        check_lt!(column, 4_usize);
        self.elements[row * 4 + column]
    }
    /// # Panics
    /// If `row` or `column` is not less than 4.
    pub fn set(&mut self, row: usize, column: usize, value: f32) {
        check_lt!(row, 4_usize);
        check_lt!(column, 4_usize);
        self.elements[row * 4 + column] = value;
    }

    fn rows(&self) -> [[f32; 4]; 4] {
        let e = self.elements;
        [
            [e[0], e[1], e[2], e[3]],
            [e[4], e[5], e[6], e[7]],
            [e[8], e[9], e[10], e[11]],
            [e[12], e[13], e[14], e[15]],
        ]
    }

    fn basis_row(&self, row: usize) -> Vector3 {
        let e = self.elements;
        Vector3::new(e[row * 4], e[row * 4 + 1], e[row * 4 + 2])
    }

    /// 2x2 minors of the top two rows (`s`) and the bottom two rows (`c`), shared by the
    /// determinant and the inverse.
    fn minors(&self) -> ([f32; 6], [f32; 6]) {
        let [a0, a1, a2, a3] = self.rows();
        let s = [
            a0[0] * a1[1] - a1[0] * a0[1],
            a0[0] * a1[2] - a1[0] * a0[2],
            a0[0] * a1[3] - a1[0] * a0[3],
            a0[1] * a1[2] - a1[1] * a0[2],
            a0[1] * a1[3] - a1[1] * a0[3],
            a0[2] * a1[3] - a1[2] * a0[3],
        ];
        let c = [
            a2[0] * a3[1] - a3[0] * a2[1],
            a2[0] * a3[2] - a3[0] * a2[2],
            a2[0] * a3[3] - a3[0] * a2[3],
            a2[1] * a3[2] - a3[1] * a2[2],
            a2[1] * a3[3] - a3[1] * a2[3],
            a2[2] * a3[3] - a3[2] * a2[3],
        ];
        (s, c)
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.basis_row(3)
    }
    /// The lengths of the three basis rows. Only meaningful for a matrix without shear.
    #[must_use]
    pub fn scale(&self) -> Vector3 {
        Vector3::new(
            self.basis_row(0).len(),
            self.basis_row(1).len(),
            self.basis_row(2).len(),
        )
    }
    /// The rotation left after dividing out [`scale`](Matrix4x4::scale).
    #[must_use]
    pub fn rotation(&self) -> Quaternion {
        let rows = [
            self.basis_row(0).normed(),
            self.basis_row(1).normed(),
            self.basis_row(2).normed(),
        ];
        // Row-vector basis rows are the columns of the column-vector rotation matrix.
        let r = |i: usize, j: usize| -> f32 {
            let row = rows[j];
            [row.x, row.y, row.z][i]
        };
        let trace = r(0, 0) + r(1, 1) + r(2, 2);
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion::new(
                (r(2, 1) - r(1, 2)) / s,
                (r(0, 2) - r(2, 0)) / s,
                (r(1, 0) - r(0, 1)) / s,
                s / 4.0,
            )
        } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
            let s = (1.0 + r(0, 0) - r(1, 1) - r(2, 2)).sqrt() * 2.0;
            Quaternion::new(
                s / 4.0,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(2, 1) - r(1, 2)) / s,
            )
        } else if r(1, 1) > r(2, 2) {
            let s = (1.0 + r(1, 1) - r(0, 0) - r(2, 2)).sqrt() * 2.0;
            Quaternion::new(
                (r(0, 1) + r(1, 0)) / s,
                s / 4.0,
                (r(1, 2) + r(2, 1)) / s,
                (r(0, 2) - r(2, 0)) / s,
            )
        } else {
            let s = (1.0 + r(2, 2) - r(0, 0) - r(1, 1)).sqrt() * 2.0;
            Quaternion::new(
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                s / 4.0,
                (r(1, 0) - r(0, 1)) / s,
            )
        };
        q.normed()
    }
    /// Decomposes into translation, scale and rotation. The matrix must be a similarity
    /// transform (no shear, no projection) for the result to recompose to the same matrix.
    #[must_use]
    pub fn transform(&self) -> Transform3 {
        Transform3 {
            translation: self.translation(),
            scale: self.scale(),
            rotation: self.rotation(),
        }
    }

    /// Keeps the xy-plane part of this transform.
    pub fn to_3x3(&self) -> Matrix3x3 {
        let e = self.elements;
        Matrix3x3::from_rows([[e[0], e[1], e[3]], [e[4], e[5], e[7]], [e[12], e[13], e[15]]])
    }

    /// Inverting a singular matrix yields non-finite elements; nothing else is signalled.
    pub fn invert(&mut self) {
        *self = self.inverted();
    }
    pub fn inverted(&self) -> Matrix4x4 {
        let [a0, a1, a2, a3] = self.rows();
        let (s, c) = self.minors();
        let determinant =
            s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        if determinant.abs() < EPSILON {
            debug!("Matrix4x4: inverting near-singular matrix, determinant {determinant}: {self}");
        }
        let inv = 1.0 / determinant;
        Matrix4x4::from_rows([
            [
                (a1[1] * c[5] - a1[2] * c[4] + a1[3] * c[3]) * inv,
                (-a0[1] * c[5] + a0[2] * c[4] - a0[3] * c[3]) * inv,
                (a3[1] * s[5] - a3[2] * s[4] + a3[3] * s[3]) * inv,
                (-a2[1] * s[5] + a2[2] * s[4] - a2[3] * s[3]) * inv,
            ],
            [
                (-a1[0] * c[5] + a1[2] * c[2] - a1[3] * c[1]) * inv,
                (a0[0] * c[5] - a0[2] * c[2] + a0[3] * c[1]) * inv,
                (-a3[0] * s[5] + a3[2] * s[2] - a3[3] * s[1]) * inv,
                (a2[0] * s[5] - a2[2] * s[2] + a2[3] * s[1]) * inv,
            ],
            [
                (a1[0] * c[4] - a1[1] * c[2] + a1[3] * c[0]) * inv,
                (-a0[0] * c[4] + a0[1] * c[2] - a0[3] * c[0]) * inv,
                (a3[0] * s[4] - a3[1] * s[2] + a3[3] * s[0]) * inv,
                (-a2[0] * s[4] + a2[1] * s[2] - a2[3] * s[0]) * inv,
            ],
            [
                (-a1[0] * c[3] + a1[1] * c[1] - a1[2] * c[0]) * inv,
                (a0[0] * c[3] - a0[1] * c[1] + a0[2] * c[0]) * inv,
                (-a3[0] * s[3] + a3[1] * s[1] - a3[2] * s[0]) * inv,
                (a2[0] * s[3] - a2[1] * s[1] + a2[2] * s[0]) * inv,
            ],
        ])
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
    pub fn transposed(&self) -> Matrix4x4 {
        let r = self.rows();
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = r[j][i];
            }
        }
        Matrix4x4::from_rows(rows)
    }

    /// Appends a translation.
    pub fn translate(&mut self, translation: Vector3) {
        *self *= Matrix4x4::create_translation(translation);
    }
    pub fn translated(&self, translation: Vector3) -> Matrix4x4 {
        *self * Matrix4x4::create_translation(translation)
    }
    /// Appends a scale.
    pub fn scale_by(&mut self, scale: Vector3) {
        *self *= Matrix4x4::create_scale(scale);
    }
    pub fn scaled(&self, scale: Vector3) -> Matrix4x4 {
        *self * Matrix4x4::create_scale(scale)
    }
    /// Appends a rotation.
    pub fn rotate(&mut self, rotation: Quaternion) {
        *self *= Matrix4x4::create_rotation(rotation);
    }
    pub fn rotated(&self, rotation: Quaternion) -> Matrix4x4 {
        *self * Matrix4x4::create_rotation(rotation)
    }

    pub fn almost_eq(&self, rhs: Matrix4x4) -> bool {
        self.elements
            .iter()
            .zip(rhs.elements.iter())
            .all(|(l, r)| (l - r).abs() < EPSILON)
    }
}

impl One for Matrix4x4 {
    fn one() -> Self {
        Matrix4x4::IDENTITY
    }
}

impl Zero for Matrix4x4 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl Add<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;

    fn add(self, rhs: Matrix4x4) -> Self::Output {
        let mut rv = self;
        for (l, r) in rv.elements.iter_mut().zip(rhs.elements) {
            *l += r;
        }
        rv
    }
}

impl Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Self::Output {
        let (l, r) = (self.rows(), rhs.rows());
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = (0..4).map(|k| l[i][k] * r[k][j]).sum();
            }
        }
        Matrix4x4::from_rows(rows)
    }
}
impl MulAssign<Matrix4x4> for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Matrix4x4) {
        *self = *self * rhs;
    }
}

impl Mul<Matrix4x4> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Matrix4x4) -> Self::Output {
        self.x * rhs.basis_row(0) + self.y * rhs.basis_row(1) + self.z * rhs.basis_row(2)
    }
}
impl MulAssign<Matrix4x4> for Vector3 {
    fn mul_assign(&mut self, rhs: Matrix4x4) {
        *self = *self * rhs;
    }
}

/// Applies the full homogeneous transform, dividing by the resulting w unless it is 0 or 1.
impl Mul<Matrix4x4> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: Matrix4x4) -> Self::Output {
        let e = rhs.elements;
        let v = Point3::origin() + (self.as_offset() * rhs + rhs.translation());
        let w = self.x * e[3] + self.y * e[7] + self.z * e[11] + e[15];
        if w == 0.0 || w == 1.0 {
            v
        } else {
            Point3::new(v.x / w, v.y / w, v.z / w)
        }
    }
}
impl MulAssign<Matrix4x4> for Point3 {
    fn mul_assign(&mut self, rhs: Matrix4x4) {
        *self = *self * rhs;
    }
}

impl TextFormat for Matrix4x4 {
    fn write_text(&self, out: &mut String, format: &str) {
        text::write_f32_array(out, &self.elements, format);
    }

    fn read_text(reader: &mut TextReader<'_>, _format: &str) -> Result<Self> {
        let elements = reader.read_f32_array::<16>().context(
            "the string could not be read as a Matrix4x4 (expected sixteen floating point \
             numbers separated by whitespace and/or a comma)",
        )?;
        Ok(Matrix4x4::new(elements))
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

impl FromStr for Matrix4x4 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Matrix4x4::from_text(s, "")
    }
}

impl BinaryFormat for Matrix4x4 {}

/// Translation, scale and rotation of a 2D similarity transform.
#[derive(Debug, Copy, Clone, PartialEq, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
pub struct Transform2 {
    pub translation: Vector2,
    pub scale: Vector2,
    pub rotation: Angle,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            translation: Vector2::zero(),
            scale: Vector2::one(),
            rotation: Angle::ZERO,
        }
    }
}

impl Transform2 {
    #[must_use]
    pub fn with_translation(translation: Vector2) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }
    #[must_use]
    pub fn with_scale(scale: Vector2) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }
    #[must_use]
    pub fn with_rotation(rotation: Angle) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }

    pub fn to_matrix(&self) -> Matrix3x3 {
        Matrix3x3::create_transform(self.translation, self.scale, self.rotation, Vector2::zero())
    }

    pub fn almost_eq(&self, rhs: Transform2) -> bool {
        self.translation.almost_eq(rhs.translation)
            && self.scale.almost_eq(rhs.scale)
            && self.rotation.almost_eq(rhs.rotation)
    }
}

impl BinaryFormat for Transform2 {}

/// Translation, scale and rotation of a 3D similarity transform.
#[derive(Debug, Copy, Clone, PartialEq, bincode::Encode, bincode::Decode, Serialize, Deserialize)]
pub struct Transform3 {
    pub translation: Vector3,
    pub scale: Vector3,
    pub rotation: Quaternion,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self {
            translation: Vector3::zero(),
            scale: Vector3::one(),
            rotation: Quaternion::IDENTITY,
        }
    }
}

impl Transform3 {
    #[must_use]
    pub fn with_translation(translation: Vector3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }
    #[must_use]
    pub fn with_scale(scale: Vector3) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }
    #[must_use]
    pub fn with_rotation(rotation: Quaternion) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }

    pub fn to_matrix(&self) -> Matrix4x4 {
        Matrix4x4::create_transform(self.translation, self.scale, self.rotation, Vector3::zero())
    }

    /// Rotations are compared up to sign, since `q` and `-q` are the same rotation.
    pub fn almost_eq(&self, rhs: Transform3) -> bool {
        self.translation.almost_eq(rhs.translation)
            && self.scale.almost_eq(rhs.scale)
            && self.rotation.is_same_rotation(rhs.rotation)
    }
}

impl BinaryFormat for Transform3 {}
