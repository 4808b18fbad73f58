mod gray;
mod posterize;
mod tone;

pub use gray::grayscale;
pub use posterize::{posterize, posterize_channel};
pub use tone::{negative, sunset, SUNSET_FACTOR};
