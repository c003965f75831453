pub mod configuration;
pub mod dispatcher;
pub mod domain;
pub mod email_client;
pub mod rate_limiter;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;

pub use configuration::get_configuration;
pub use email_client::EmailClient;
pub use startup::Application;
pub use telemetry::{get_subscriber, init_subscriber};
