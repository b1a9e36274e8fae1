pub mod calculator;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod request;
pub mod service;
pub mod validator;
pub mod window;
