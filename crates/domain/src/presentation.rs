pub mod color;
pub mod layout;

pub use color::{NameColor, RESET};
pub use layout::ListingLine;
