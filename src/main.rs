use contact_backend::startup::Application;
use contact_backend::{get_configuration, get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("contact-backend".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration)?;
    tracing::info!("Server is running on port {}", application.port());
    application.run_until_stopped().await?;
    Ok(())
}
