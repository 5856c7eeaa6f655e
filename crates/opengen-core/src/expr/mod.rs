//! Symbolic operands for constraint sets.
//!
//! Constraint sets never compute numbers directly. They build expression
//! trees over an operand vector, which the generator later renders as Rust
//! source or evaluates numerically. When every leaf is a constant the
//! constructors fold eagerly, so numeric inputs produce numeric results.
//!
//! # Example
//!
//! ```
//! use opengen_core::expr::{Bindings, Vector};
//!
//! let u = Vector::symbols("u", 2);
//! let norm = u.norm2_squared();
//! assert_eq!(norm.to_string(), "((u[0] * u[0]) + (u[1] * u[1]))");
//!
//! let bindings = Bindings::new().bind("u", vec![3.0, 4.0]);
//! assert_eq!(norm.eval(&bindings).unwrap(), 25.0);
//!
//! let numeric = Vector::from_values(&[3.0, 4.0]).norm2_squared();
//! assert_eq!(numeric.as_constant(), Some(25.0));
//! ```

mod bindings;
mod scalar;
mod vector;


pub use bindings::Bindings;
pub use scalar::Expr;
pub use vector::Vector;
