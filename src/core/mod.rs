pub mod alphabet;
pub mod value;
