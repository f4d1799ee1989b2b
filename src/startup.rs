use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email::{AlertEmailRenderer, AlertLinks};
use crate::routes::{
    health_check, method_not_allowed, preference_options, render_email, subscribe,
    unreadable_subscription,
};
use crate::subscription_client::SubscriptionClient;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let subscription_client = config.subscription_service.client()?;
        let renderer = AlertEmailRenderer::new().context("Failed to prepare the alert email.")?;
        let links = config.alerts.links();

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, renderer, subscription_client, links)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    renderer: AlertEmailRenderer,
    subscription_client: SubscriptionClient,
    links: AlertLinks,
) -> Result<Server, std::io::Error> {
    let renderer = web::Data::new(renderer);
    let subscription_client = web::Data::new(subscription_client);
    let links = web::Data::new(links);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/preferences/options", web::get().to(preference_options))
            .service(
                web::resource("/subscriptions")
                    .app_data(web::JsonConfig::default().error_handler(unreadable_subscription))
                    .route(web::post().to(subscribe)),
            )
            .service(
                web::resource("/render-email")
                    .route(web::post().to(render_email))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .app_data(renderer.clone())
            .app_data(subscription_client.clone())
            .app_data(links.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
