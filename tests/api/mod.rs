//! REST API endpoint tests.

mod health_tests;
mod invitation_tests;
