//! Everything a controller borrows from the running application.

use std::sync::Arc;

use grocer_data::StorefrontApi;

use crate::badge::CartBadge;
use crate::config::ViewConfig;
use crate::notify::{Notifier, TracingNotifier};
use crate::session::Session;

/// Services and shared state handed to each controller on mount.
#[derive(Clone)]
pub struct ViewContext<A> {
    pub api: A,
    pub session: Session,
    pub notifier: Arc<dyn Notifier>,
    pub badge: CartBadge,
    pub config: ViewConfig,
}

impl<A: StorefrontApi> ViewContext<A> {
    /// Anonymous context that logs notices and uses default settings.
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: Session::anonymous(),
            notifier: Arc::new(TracingNotifier),
            badge: CartBadge::default(),
            config: ViewConfig::default(),
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_badge(mut self, badge: CartBadge) -> Self {
        self.badge = badge;
        self
    }

    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }
}
