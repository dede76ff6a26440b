pub mod constants;
pub mod effect;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod gyro;
pub mod mapping;
pub mod registry;
pub mod settings;
pub mod shared;

pub use effect::*;
pub use error::TiltError;
pub use frame::*;
pub use geometry::*;
pub use gyro::*;
pub use mapping::*;
pub use registry::*;
pub use settings::*;
pub use shared::*;
