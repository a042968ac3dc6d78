pub mod button;
pub mod input;

pub use button::Button;
pub use input::Input;
