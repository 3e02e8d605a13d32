pub mod animations;
pub mod decode;
pub mod name;
pub mod provider;
