mod login_form;
mod toasts;

pub use login_form::{
    LoginFormState, LoginResultReceiver, LoginResultSender, login_form,
};
pub use toasts::{TOAST_LIFETIME_SECS, ToastChannel, Toasts, show_toasts, toast_stack};
