// Building blocks shared by the screens

pub mod folder_card;
pub mod footer;
pub mod header;

pub use folder_card::FolderCard;
pub use footer::Footer;
pub use header::Header;
