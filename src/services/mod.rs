pub mod employee;
pub mod photo;

pub use employee::EmployeeService;
pub use photo::PhotoService;
