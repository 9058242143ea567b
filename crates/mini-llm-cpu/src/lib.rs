//! CPU kernels for mini-llm
//!
//! Plain scalar implementations of the numeric steps of the mock pipeline.

pub mod gemm;
pub mod kernels;

pub use gemm::{matmul, matmul_f32, matmul_transposed};
pub use kernels::{argmax, scale_logits, softmax, softmax_into};
