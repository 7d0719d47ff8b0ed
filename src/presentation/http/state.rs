// src/presentation/http/state.rs
use crate::application::{RequestContext, services::ApplicationServices};
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub request_timeout: Duration,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, request_timeout: Duration) -> Self {
        Self {
            services,
            request_timeout,
        }
    }

    /// A fresh context whose deadline starts now.
    pub fn context(&self) -> RequestContext {
        RequestContext::with_timeout(self.request_timeout)
    }
}
