//! Wire and domain types for the employee directory endpoint.

pub mod employees;

pub use employees::{EmployeeCollectionResponse, EmployeeRecord};
