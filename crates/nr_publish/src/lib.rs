pub mod hashnode;
pub mod images;

pub use hashnode::{HashnodeConfig, HashnodePublisher};
pub use images::PollinationsImages;
