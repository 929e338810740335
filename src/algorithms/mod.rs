//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the k-Simplicial construction:
//! - The Q-function, a signed sum of covariance powers
//! - The S-function, Q normalized by the degree-k elementary symmetric value
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Q-function.
pub mod qmatrix;

/// S-function.
pub mod smatrix;
