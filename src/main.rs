use teamboard::app::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("teamboard=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dioxus::launch(App);
}
