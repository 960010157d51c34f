// Scene description and scene authoring

pub mod description;
pub mod builder;

pub use description::*;
pub use builder::*;
