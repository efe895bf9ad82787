pub mod args;
pub mod op;
pub mod ops;
pub mod state;

#[cfg(test)]
mod test_support;

pub use ops::{Genre, Image, Init, Item, Studio, UserConfig, Users, Version};
