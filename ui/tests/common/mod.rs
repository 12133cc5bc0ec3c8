use std::sync::Arc;

use chatdesk_business::{AuthService, BusinessConfig, HttpAuthService};
use chatdesk_ui::ChatdeskApp;
use chatdesk_ui::state::State;
use egui_kittest::Harness;
use kittest::Queryable;
use tokio::runtime::Handle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Number of frames to run for channel results to propagate through the app.
pub const UI_PROPAGATION_FRAMES: usize = 3;

pub struct TestCtx<'a> {
    _mock_server: Option<MockServer>,
    harness: Harness<'a, ChatdeskApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, ChatdeskApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, ChatdeskApp> {
        &self.harness
    }

    /// App backed by an arbitrary auth service.
    #[allow(unused)]
    pub fn with_auth(auth: Arc<dyn AuthService>) -> Self {
        Self {
            _mock_server: None,
            harness: app_harness(State::new(auth, Handle::current())),
        }
    }

    /// App backed by `HttpAuthService` talking to a mock server whose login
    /// endpoint answers with `status_code` and `body`.
    #[allow(unused)]
    pub async fn with_backend(status_code: u16, body: serde_json::Value) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(body))
            .mount(&mock_server)
            .await;

        let config = BusinessConfig::new(mock_server.uri());
        let state = State::new(Arc::new(HttpAuthService::new(config)), Handle::current());

        Self {
            _mock_server: Some(mock_server),
            harness: app_harness(state),
        }
    }

    /// Fills both fields directly, as if the user had typed them.
    #[allow(unused)]
    pub fn fill_form(&mut self, username: &str, password: &str) {
        let form = &mut self.harness.state_mut().state_mut().login_form;
        form.username = username.to_owned();
        form.password = password.to_owned();
    }

    /// Focuses the input labelled `label` and types `text` into it.
    #[allow(unused)]
    pub fn type_into(&mut self, label: &str, text: &str) {
        self.harness.get_by_label(label).focus();
        self.harness.step();
        self.harness.get_by_label(label).type_text(text);
        self.harness.step();
    }

    /// Lets spawned login tasks finish, then runs a few frames.
    pub async fn settle(&mut self) {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }
}

fn app_harness<'a>(state: State) -> Harness<'a, ChatdeskApp> {
    Harness::new_state(
        |ctx, app: &mut ChatdeskApp| {
            app.show(ctx);
        },
        ChatdeskApp::new(state),
    )
}
