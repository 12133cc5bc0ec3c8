//! Client-side routing.
//!
//! [`RouteChannel`] is the [`Navigator`] handed to business code. The
//! [`Router`] applies queued redirects at the start of each frame.

use chatdesk_business::{Navigator, Route};
use flume::{Receiver, Sender};
use log::{info, warn};

#[derive(Debug, Clone)]
pub struct RouteChannel {
    sender: Sender<Route>,
}

impl Navigator for RouteChannel {
    fn go_to(&self, path: &str) {
        if self.sender.send(Route::from_path(path)).is_err() {
            warn!("RouteChannel: router is gone, ignoring redirect to {path}");
        }
    }
}

#[derive(Debug)]
pub struct Router {
    current: Route,
    receiver: Receiver<Route>,
}

impl Router {
    /// A connected navigator/router pair, starting on the login page.
    pub fn channel() -> (RouteChannel, Self) {
        let (sender, receiver) = flume::unbounded();
        (
            RouteChannel { sender },
            Self {
                current: Route::default(),
                receiver,
            },
        )
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Applies pending redirects; the last one wins.
    pub fn sync(&mut self) {
        if let Some(route) = self.receiver.try_iter().last()
            && route != self.current
        {
            info!("Router: {} -> {}", self.current.path(), route.path());
            self.current = route;
        }
    }
}
