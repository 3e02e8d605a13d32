pub mod typography;
