pub mod add_expense;
pub mod analytics;
pub mod dashboard;
pub mod expenses;
pub mod login;
pub mod signup;
