pub mod field;
pub mod vehicle;

pub use field::ParamField;
pub use vehicle::VehicleParams;
