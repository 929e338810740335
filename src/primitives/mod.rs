//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types shared by every other layer:
//! - Dense square matrix storage
//! - The crate error type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Dense square matrix storage.
pub mod matrix;
