pub mod payroll;
