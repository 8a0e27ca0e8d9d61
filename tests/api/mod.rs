mod admin_tests;
mod contact_tests;
mod health_tests;
