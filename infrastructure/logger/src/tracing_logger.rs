use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "products-api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "products-api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "products-api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "products-api", "{}", message);
    }
}
