pub mod model;
pub mod registry;

pub use model::{fields, FurniturePatch, FurnitureRecord, FurnitureStatus};
pub use registry::FurnitureRegistry;
