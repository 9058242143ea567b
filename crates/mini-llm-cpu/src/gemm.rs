/// General Matrix Multiply (GEMM) kernels
///
/// Naive row-major matrix multiplication for f32.
use mini_llm_core::error::{Error, Result};
use mini_llm_core::Matrix;

fn check_len(name: &str, len: usize, expected: usize) -> Result<()> {
    if len != expected {
        return Err(Error::DimensionMismatch(format!(
            "Matrix {} size mismatch: expected {}, got {}",
            name, expected, len
        )));
    }
    Ok(())
}

/// Naive matrix multiplication: C = A * B
///
/// A: [M, K]
/// B: [K, N]
/// C: [M, N]
pub fn matmul_f32(a: &[f32], b: &[f32], c: &mut [f32], m: usize, k: usize, n: usize) -> Result<()> {
    check_len("A", a.len(), m * k)?;
    check_len("B", b.len(), k * n)?;
    check_len("C", c.len(), m * n)?;

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += a[i * k + l] * b[l * n + j];
            }
            c[i * n + j] = sum;
        }
    }

    Ok(())
}

/// Matrix multiplication with transposed B: C = A * B^T
///
/// A: [M, K]
/// B: [N, K] (will be accessed as transposed)
/// C: [M, N]
pub fn matmul_transposed(
    a: &[f32],
    b_t: &[f32],
    c: &mut [f32],
    m: usize,
    k: usize,
    n: usize,
) -> Result<()> {
    check_len("A", a.len(), m * k)?;
    check_len("B^T", b_t.len(), n * k)?;
    check_len("C", c.len(), m * n)?;

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                // B is stored as [N, K], so B^T[j, l] = B[j * k + l]
                sum += a[i * k + l] * b_t[j * k + l];
            }
            c[i * n + j] = sum;
        }
    }

    Ok(())
}

/// `A * B` on [`Matrix`] values
///
/// Fails with `DimensionMismatch` unless A's column count equals B's row count.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch(format!(
            "cannot multiply {}x{} by {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        )));
    }

    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = Matrix::zeros(m, n);
    matmul_f32(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, k, n)?;
    Ok(c)
}
