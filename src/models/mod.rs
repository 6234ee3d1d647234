pub mod employee;
pub mod photo;
