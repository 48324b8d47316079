use crate::actions::Action;
use crate::middleware::{Middleware, MiddlewareContext, Next};

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, _ctx: &MiddlewareContext, next: Next<'_>, action: Action) {
        log::debug!("Action: {:?}", action);
        next.run(action);
    }
}
