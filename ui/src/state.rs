use std::sync::Arc;

use chatdesk_business::{
    AuthService, BusinessConfig, HttpAuthService, LoginFormController, Navigator, Route,
};
use chrono::Utc;
use tokio::runtime::Handle;

use crate::router::{RouteChannel, Router};
use crate::widgets::{LoginFormState, Toasts};

/// The main application state.
pub struct State {
    /// Authentication backend shared with the login form.
    pub auth: Arc<dyn AuthService>,
    /// Login form fields and controller.
    pub login_form: LoginFormState,
    /// Toasts on screen.
    pub toasts: Toasts,
    /// Current page.
    pub router: Router,
    navigator: RouteChannel,
    /// Runtime the login call is spawned on.
    pub runtime: Handle,
}

impl State {
    pub fn new(auth: Arc<dyn AuthService>, runtime: Handle) -> Self {
        let (notifier, toasts) = Toasts::channel();
        let (navigator, router) = Router::channel();
        let controller = LoginFormController::new(
            Arc::clone(&auth),
            Arc::new(notifier),
            Arc::new(navigator.clone()),
        );

        Self {
            auth,
            login_form: LoginFormState::new(controller),
            toasts,
            router,
            navigator,
            runtime,
        }
    }

    /// State talking to the backend described by `config`.
    pub fn with_config(config: BusinessConfig, runtime: Handle) -> Self {
        Self::new(Arc::new(HttpAuthService::new(config)), runtime)
    }

    /// Applies everything that arrived since the last frame.
    pub fn sync(&mut self) {
        self.router.sync();
        self.toasts.sync(Utc::now());
    }

    /// The page to render. The chat page requires an authenticated user.
    pub fn page(&self) -> Route {
        match self.router.current() {
            Route::Chat if !self.auth.status().is_authenticated() => Route::Login,
            route => route,
        }
    }

    /// Logs out and returns to an empty login form.
    pub fn sign_out(&mut self) {
        self.auth.logout();
        self.login_form.clear();
        self.navigator.go_to(Route::Login.path());
    }
}
