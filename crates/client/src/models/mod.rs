mod category;
mod configuration;
mod image;
mod item;
mod user;

pub use category::{CategoryInfo, Genre, Studio};
pub use configuration::UserConfiguration;
pub use image::{ImageOptions, ImageType};
pub use item::{ApiBaseItem, ApiBaseItemWrapper, UserItemData};
pub use user::User;
