pub mod hemisphere;
pub mod pole_direction;
pub mod ra_button;

pub use hemisphere::*;
pub use pole_direction::*;
pub use ra_button::*;
