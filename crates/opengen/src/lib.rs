//! opengen - constraint sets for generated optimizers
//!
//! Declare the sets that restrict each block of the decision vector, let
//! [`Formulation`] decide how each one is encoded, and describe the solver and
//! its ROS wrapper with the configuration types.
//!
//! # Example
//!
//! ```rust
//! use opengen::prelude::*;
//!
//! let constraints = CartesianProduct::new()
//!     .with_constraint(2, Ball2::new_at_origin_with_radius(1.0)?)?
//!     .with_constraint(4, Zero::new())?;
//!
//! let u = Vector::symbols("u", 4);
//! let formulation = Formulation::select(&constraints, &u)?;
//! assert!(formulation.is_penalty());
//! # Ok::<(), opengen::OpengenError>(())
//! ```

pub use opengen_config::{
    CbfgsParameters, ConfigError, Identifier, RosConfiguration, SolverConfiguration,
};
pub use opengen_core::{
    constraints, expr, Ball2, BallInf, Bindings, CartesianProduct, Constraint, Expr, FiniteSet,
    Formulation, NoConstraints, OpengenError, Rectangle, Result, Vector, Zero,
};

/// Commonly used types.
pub mod prelude {
    pub use opengen_config::{RosConfiguration, SolverConfiguration};
    pub use opengen_core::constraints::{
        Ball2, BallInf, CartesianProduct, Constraint, FiniteSet, NoConstraints, Rectangle, Zero,
    };
    pub use opengen_core::expr::{Bindings, Expr, Vector};
    pub use opengen_core::Formulation;
}
