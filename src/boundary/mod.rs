// Boundary point sampling for rectangular and circular obstacles

pub mod descriptor;
pub mod rectangle;
pub mod circle;
pub mod extractor;

pub use descriptor::*;
pub use rectangle::*;
pub use circle::*;
pub use extractor::*;
