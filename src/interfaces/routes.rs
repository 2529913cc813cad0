use actix_web::web;

use crate::handlers::{
    home::home,
    resume::{get_resume, save_resume},
    system::health_check,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .service(get_resume)
            .service(save_resume),
    );
}
