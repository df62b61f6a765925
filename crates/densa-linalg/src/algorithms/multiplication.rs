//! Matrix multiplication strategies.
//!
//! - [`StandardMultiplication`]: schoolbook triple loop, any compatible shapes
//! - [`DivideAndConquer`]: eight recursive quadrant products
//! - [`Strassen`]: seven recursive quadrant products
//!
//! The quadrant strategies only accept square operands whose size is a power
//! of two; anything else is rejected up front.

use densa_scalar::Scalar;
use log::trace;

use crate::buffer::Buffer;
use crate::error::{MatrixError, Result};
use crate::traits::MultiplicationPolicy;

/// At or below this size Strassen falls back to the schoolbook product.
pub const STRASSEN_THRESHOLD: usize = 2;

/// Schoolbook O(r·c·p) multiplication.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMultiplication;

/// Recursive quadrant multiplication with eight sub-products.
#[derive(Clone, Copy, Debug, Default)]
pub struct DivideAndConquer;

/// Strassen's seven-product quadrant multiplication.
#[derive(Clone, Copy, Debug, Default)]
pub struct Strassen;

impl<T: Scalar> MultiplicationPolicy<T> for StandardMultiplication {
    fn multiply(a: &Buffer<T>, b: &Buffer<T>) -> Result<Buffer<T>> {
        check_inner(a, b)?;
        Ok(schoolbook_mul(a, b))
    }
}

impl<T: Scalar> MultiplicationPolicy<T> for DivideAndConquer {
    fn multiply(a: &Buffer<T>, b: &Buffer<T>) -> Result<Buffer<T>> {
        let n = check_quadrant_operands(a, b)?;
        trace!("divide-and-conquer multiply, n = {n}");
        Ok(divide_and_conquer_mul(a, b))
    }
}

impl<T: Scalar> MultiplicationPolicy<T> for Strassen {
    fn multiply(a: &Buffer<T>, b: &Buffer<T>) -> Result<Buffer<T>> {
        let n = check_quadrant_operands(a, b)?;
        trace!("strassen multiply, n = {n}");
        Ok(strassen_mul(a, b))
    }
}

fn check_inner<T>(a: &Buffer<T>, b: &Buffer<T>) -> Result<()> {
    if a.num_cols() == b.num_rows() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        })
    }
}

/// Validates the quadrant-recursion precondition and returns the size.
fn check_quadrant_operands<T>(a: &Buffer<T>, b: &Buffer<T>) -> Result<usize> {
    check_inner(a, b)?;
    let n = a.square_size()?;
    if b.shape() != (n, n) {
        return Err(MatrixError::NotSquare {
            rows: b.num_rows(),
            cols: b.num_cols(),
        });
    }
    if !n.is_power_of_two() {
        return Err(MatrixError::PowerOfTwoRequired { size: n });
    }
    Ok(n)
}

/// Schoolbook product; the caller guarantees compatible shapes.
pub fn schoolbook_mul<T: Scalar>(a: &Buffer<T>, b: &Buffer<T>) -> Buffer<T> {
    let mut result = Buffer::zeros(a.num_rows(), b.num_cols());
    for i in 0..a.num_rows() {
        for j in 0..b.num_cols() {
            let mut sum = T::zero();
            for k in 0..a.num_cols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    result
}

/// The four quadrants of a square buffer of even size.
struct Quadrants<T> {
    q11: Buffer<T>,
    q12: Buffer<T>,
    q21: Buffer<T>,
    q22: Buffer<T>,
}

impl<T: Copy> Quadrants<T> {
    fn split(m: &Buffer<T>) -> Self {
        let half = m.num_rows() / 2;
        Self {
            q11: m.block(0, 0, half),
            q12: m.block(0, half, half),
            q21: m.block(half, 0, half),
            q22: m.block(half, half, half),
        }
    }
}

fn join<T: Scalar>(c11: &Buffer<T>, c12: &Buffer<T>, c21: &Buffer<T>, c22: &Buffer<T>) -> Buffer<T> {
    let half = c11.num_rows();
    let mut result = Buffer::zeros(2 * half, 2 * half);
    result.set_block(0, 0, c11);
    result.set_block(0, half, c12);
    result.set_block(half, 0, c21);
    result.set_block(half, half, c22);
    result
}

fn divide_and_conquer_mul<T: Scalar>(a: &Buffer<T>, b: &Buffer<T>) -> Buffer<T> {
    if a.num_rows() == 1 {
        return Buffer::column(&[a[(0, 0)] * b[(0, 0)]]);
    }

    let a = Quadrants::split(a);
    let b = Quadrants::split(b);

    let c11 = &divide_and_conquer_mul(&a.q11, &b.q11) + &divide_and_conquer_mul(&a.q12, &b.q21);
    let c12 = &divide_and_conquer_mul(&a.q11, &b.q12) + &divide_and_conquer_mul(&a.q12, &b.q22);
    let c21 = &divide_and_conquer_mul(&a.q21, &b.q11) + &divide_and_conquer_mul(&a.q22, &b.q21);
    let c22 = &divide_and_conquer_mul(&a.q21, &b.q12) + &divide_and_conquer_mul(&a.q22, &b.q22);

    join(&c11, &c12, &c21, &c22)
}

fn strassen_mul<T: Scalar>(a: &Buffer<T>, b: &Buffer<T>) -> Buffer<T> {
    if a.num_rows() <= STRASSEN_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let a = Quadrants::split(a);
    let b = Quadrants::split(b);

    let p1 = strassen_mul(&(&a.q11 + &a.q22), &(&b.q11 + &b.q22));
    let p2 = strassen_mul(&(&a.q21 + &a.q22), &b.q11);
    let p3 = strassen_mul(&a.q11, &(&b.q12 - &b.q22));
    let p4 = strassen_mul(&a.q22, &(&b.q21 - &b.q11));
    let p5 = strassen_mul(&(&a.q11 + &a.q12), &b.q22);
    let p6 = strassen_mul(&(&a.q21 - &a.q11), &(&b.q11 + &b.q12));
    let p7 = strassen_mul(&(&a.q12 - &a.q22), &(&b.q21 + &b.q22));

    // c11 = p1 + p4 - p5 + p7
    let c11 = &(&(&p1 + &p4) - &p5) + &p7;
    let c12 = &p3 + &p5;
    let c21 = &p2 + &p4;
    // c22 = p1 + p3 - p2 + p6
    let c22 = &(&(&p1 + &p3) - &p2) + &p6;

    join(&c11, &c12, &c21, &c22)
}
