pub mod health;
pub mod widget;

use actix_cors::Cors;
use actix_web::web;

/// Register the homepage and widget routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(widget::get_page))
        .route("/health", web::get().to(health::health))
        // Embeddable from any origin
        .service(
            web::scope("/widget")
                .wrap(Cors::permissive())
                .route("", web::get().to(widget::get_widget))
                .route("/plan", web::get().to(widget::get_widget_plan)),
        );
}
