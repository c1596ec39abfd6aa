pub mod login_viewmodel;

pub use login_viewmodel::{AuthMessage, LoginError, LoginForm, LoginViewModel};
