mod match_item;
mod standing;
mod status;
mod team;

pub use match_item::*;
pub use standing::*;
pub use status::*;
pub use team::*;
