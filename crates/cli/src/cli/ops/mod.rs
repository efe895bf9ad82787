pub mod genre;
pub mod image;
pub mod init;
pub mod item;
pub mod studio;
pub mod user_config;
pub mod users;
pub mod version;

pub use genre::Genre;
pub use image::Image;
pub use init::Init;
pub use item::Item;
pub use studio::Studio;
pub use user_config::UserConfig;
pub use users::Users;
pub use version::Version;
