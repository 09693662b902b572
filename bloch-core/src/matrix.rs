//! Fixed-size 2×2 complex matrices
//!
//! Everything a single qubit needs fits in a 2×2 matrix, so this type keeps
//! its entries inline as `[[Complex64; 2]; 2]` and implements the handful of
//! operations the state math uses: product, conjugate transpose and trace,
//! plus the unitarity/hermiticity checks used by tests.
//!
//! # Example
//!
//! ```rust
//! use bloch_core::Matrix2;
//! use bloch_core::Complex64;
//!
//! let x = Matrix2::new([
//!     [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
//!     [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
//! ]);
//! assert!(x.is_unitary(1e-12));
//! assert!((x * x).approx_eq(&Matrix2::identity(), 1e-12));
//! ```

use num_complex::Complex64;
use std::fmt;
use std::ops::{Index, Mul};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 2×2 complex matrix stored in row-major order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2 {
    data: [[Complex64; 2]; 2],
}

impl Matrix2 {
    /// Create a matrix from its rows
    #[inline]
    pub const fn new(data: [[Complex64; 2]; 2]) -> Self {
        Self { data }
    }

    /// The identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::new([[ONE, ZERO], [ZERO, ONE]])
    }

    /// The zero matrix
    #[inline]
    pub const fn zero() -> Self {
        Self::new([[ZERO, ZERO], [ZERO, ZERO]])
    }

    /// Entry at `row`, `col`
    ///
    /// # Panics
    /// Panics if either index is greater than 1.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row][col]
    }

    /// The underlying rows
    #[inline]
    pub const fn rows(&self) -> &[[Complex64; 2]; 2] {
        &self.data
    }

    /// Matrix product `self · other`
    pub fn multiply(&self, other: &Matrix2) -> Matrix2 {
        let mut result = [[ZERO; 2]; 2];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = self.data[i][0] * other.data[0][j] + self.data[i][1] * other.data[1][j];
            }
        }
        Matrix2::new(result)
    }

    /// Conjugate transpose (M†)
    pub fn adjoint(&self) -> Matrix2 {
        let m = &self.data;
        Matrix2::new([
            [m[0][0].conj(), m[1][0].conj()],
            [m[0][1].conj(), m[1][1].conj()],
        ])
    }

    /// Sum of the diagonal entries
    #[inline]
    pub fn trace(&self) -> Complex64 {
        self.data[0][0] + self.data[1][1]
    }

    /// Determinant
    #[inline]
    pub fn determinant(&self) -> Complex64 {
        self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]
    }

    /// Multiply every entry by a complex scalar
    pub fn scale(&self, factor: Complex64) -> Matrix2 {
        let m = &self.data;
        Matrix2::new([
            [m[0][0] * factor, m[0][1] * factor],
            [m[1][0] * factor, m[1][1] * factor],
        ])
    }

    /// Similarity transform `self · inner · self†`
    ///
    /// This is how a unitary acts on a density matrix.
    pub fn conjugate(&self, inner: &Matrix2) -> Matrix2 {
        self.multiply(inner).multiply(&self.adjoint())
    }

    /// Entry-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Matrix2, tolerance: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Check U†U ≈ I
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.adjoint().multiply(self).approx_eq(&Matrix2::identity(), tolerance)
    }

    /// Check M ≈ M†
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.approx_eq(&self.adjoint(), tolerance)
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[Complex64; 2]; 2]> for Matrix2 {
    #[inline]
    fn from(data: [[Complex64; 2]; 2]) -> Self {
        Self::new(data)
    }
}

impl From<Matrix2> for [[Complex64; 2]; 2] {
    #[inline]
    fn from(matrix: Matrix2) -> Self {
        matrix.data
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = Complex64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex64 {
        &self.data[row][col]
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    #[inline]
    fn mul(self, rhs: Matrix2) -> Matrix2 {
        self.multiply(&rhs)
    }
}

impl<'a> Mul<&'a Matrix2> for &'a Matrix2 {
    type Output = Matrix2;

    #[inline]
    fn mul(self, rhs: &'a Matrix2) -> Matrix2 {
        self.multiply(rhs)
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.data;
        write!(
            f,
            "[[{:.4}, {:.4}], [{:.4}, {:.4}]]",
            m[0][0], m[0][1], m[1][0], m[1][1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const I: Complex64 = Complex64::new(0.0, 1.0);

    fn pauli_y() -> Matrix2 {
        Matrix2::new([[ZERO, -I], [I, ZERO]])
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = Matrix2::new([
            [Complex64::new(1.0, 2.0), Complex64::new(3.0, -1.0)],
            [Complex64::new(0.5, 0.0), Complex64::new(-2.0, 4.0)],
        ]);
        assert_eq!(m * Matrix2::identity(), m);
        assert_eq!(Matrix2::identity() * m, m);
    }

    #[test]
    fn test_multiply() {
        // Y² = I
        let y = pauli_y();
        assert!((y * y).approx_eq(&Matrix2::identity(), 1e-12));

        let a = Matrix2::new([[ONE, I], [ZERO, ONE]]);
        let b = Matrix2::new([[ONE, ZERO], [I, ONE]]);
        let ab = &a * &b;
        // [[1 + i·i, i], [i, 1]]
        assert_relative_eq!(ab[(0, 0)].re, 0.0, epsilon = 1e-12);
        assert_eq!(ab[(0, 1)], I);
        assert_eq!(ab[(1, 0)], I);
        assert_eq!(ab[(1, 1)], ONE);
    }

    #[test]
    fn test_adjoint_and_trace() {
        let m = Matrix2::new([
            [Complex64::new(1.0, 1.0), Complex64::new(2.0, -3.0)],
            [Complex64::new(0.0, 5.0), Complex64::new(4.0, 0.0)],
        ]);
        let dagger = m.adjoint();
        assert_eq!(dagger.get(0, 1), Complex64::new(0.0, -5.0));
        assert_eq!(dagger.get(1, 0), Complex64::new(2.0, 3.0));
        assert_eq!(dagger.get(0, 0), Complex64::new(1.0, -1.0));
        assert_eq!(dagger.adjoint(), m);
        assert_eq!(m.trace(), Complex64::new(5.0, 1.0));
    }

    #[test]
    fn test_unitary_and_hermitian_checks() {
        let y = pauli_y();
        assert!(y.is_unitary(1e-12));
        assert!(y.is_hermitian(1e-12));

        let not_unitary = Matrix2::new([[ONE, ONE], [ZERO, ONE]]);
        assert!(!not_unitary.is_unitary(1e-6));
        assert!(!not_unitary.is_hermitian(1e-6));
        assert_relative_eq!(not_unitary.determinant().re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_conjugate_preserves_trace() {
        let rho = Matrix2::new([
            [Complex64::new(0.75, 0.0), Complex64::new(0.35, -0.25)],
            [Complex64::new(0.35, 0.25), Complex64::new(0.25, 0.0)],
        ]);
        let u = Matrix2::new([[ONE, ZERO], [ZERO, I]]);
        let rotated = u.conjugate(&rho);
        assert_relative_eq!(rotated.trace().re, 1.0, epsilon = 1e-12);
        assert!(rotated.is_hermitian(1e-12));
        assert!(u.scale(-I).is_unitary(1e-12));
    }
}
