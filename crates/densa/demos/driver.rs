//! Walk-through of the densa matrix operations.
//!
//! Prints each intermediate result in the matrix `Display` format. Library
//! diagnostics are available through `RUST_LOG`, e.g. `RUST_LOG=debug`.
//!
//! Run with: cargo run -p densa --example driver

use densa::prelude::*;

fn section(title: &str) {
    println!("\n═══════════════════════════════════════════════════");
    println!("{title}");
    println!("═══════════════════════════════════════════════════");
}

fn show<T: std::fmt::Display, const M: usize, const N: usize, P>(label: &str, m: &Matrix<T, M, N, P>) {
    println!("{label}:\n{m}\n");
}

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    section("Construction and elementwise operations");

    let zero: Matrix<f64, 2, 2> = Matrix::default();
    show("Default matrix", &zero);

    let mat2: Matrix<f64, 2, 2> = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    show("Matrix from values", &mat2);

    let scalar = 2.3;
    let mat3 = mat2 * scalar;
    show(&format!("Multiplied by {scalar}"), &mat3);
    show("Transposed", &mat2.transpose());
    show("Negated", &mat3.negate());

    println!("Determinant of mat2: {}", mat2.determinant()?);
    println!("Determinant of mat3: {}\n", mat3.determinant()?);

    show("Inverse of mat3", &mat3.inverse()?);
    show("mat2 + mat3", &(mat2 + mat3));
    show("mat2 * mat3", &(mat2 * mat3));
    show("mat2 ∘ mat3", &mat2.hadamard(&mat3));

    section("Decompositions");

    let (l, u) = mat3.lu_decomposition()?;
    show("L of mat3", &l);
    show("U of mat3", &u);
    show("L * U", &(l * u));

    let (q, r) = mat3.qr_decomposition()?;
    show("Q of mat3", &q);
    show("Qᵗ * Q", &(q.transpose() * q));
    show("R of mat3", &r);
    show("Q * R", &(q * r));

    let mat4: Matrix<f64, 4, 4> = Matrix::new([
        [4.0, 1.0, 1.0, 1.0],
        [1.0, 4.0, 1.0, 1.0],
        [1.0, 1.0, 4.0, 1.0],
        [1.0, 1.0, 1.0, 4.0],
    ]);
    show("mat4", &mat4);

    let cholesky = mat4.cholesky_decomposition()?;
    show("Cholesky factor of mat4", &cholesky);
    show("L * Lᵗ", &(cholesky * cholesky.transpose()));

    println!("Dominant eigenvalue of mat4: {}\n", mat4.dominant_eigenvalue()?);
    show("Orthonormalized mat4", &mat4.orthogonalize()?);

    section("Linear systems");

    let a: Matrix<f64, 4, 4> = Matrix::from_rows(vec![
        vec![4.0, 1.0, 1.0, 1.0],
        vec![1.0, 4.0, 1.0, 1.0],
        vec![1.0, 1.0, 4.0, 1.0],
        vec![1.0, 1.0, 1.0, 4.0],
    ])?;
    let b = Matrix::from_column(vec![6.0, 7.0, 8.0, 9.0])?;

    show("Gaussian elimination", &a.solve(&b)?);
    show("Gauss-Seidel", &a.solve_iteratively(&b, 1e-7, 1000)?);
    show("QR decomposition", &a.solve_with_decompose(&b)?);

    let report = a.solve_iteratively_with(&b, &IterativeConfig::default())?;
    println!(
        "Gauss-Seidel converged: {} after {} sweeps (last change {:e})",
        report.converged, report.iterations, report.change
    );

    Ok(())
}
