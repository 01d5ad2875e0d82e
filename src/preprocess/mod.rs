//! Fit-on-train, transform-anywhere preprocessing stages
//!
//! Every stage follows the same lifecycle: `fit` learns parameters from the
//! training table only, `transform` applies them to either split without
//! further learning, and the fitted state is immutable.

pub mod encode;
pub mod impute;
pub mod scale;

pub use self::encode::{IndexEncoder, OneHotEncoder, UnknownPolicy};
pub use self::impute::Imputer;
pub use self::scale::StandardScaler;
