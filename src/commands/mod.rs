pub mod about;
pub mod ca;
pub mod clear;
pub mod fs;
pub mod help;
pub mod neofetch;
pub mod project;
pub mod ssg;
