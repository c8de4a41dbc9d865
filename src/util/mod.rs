pub use enums::*;

mod enums;
