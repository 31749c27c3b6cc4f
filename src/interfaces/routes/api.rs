use actix_web::web;

use crate::handlers::{contact, projects, skills};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/contact")
                    .route(web::post().to(contact::submit_contact))
            )
            .service(
                web::resource("/projects")
                    .route(web::get().to(projects::list_projects))
                    .route(web::post().to(projects::create_project))
            )
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::delete().to(projects::delete_project))
            )
            .service(
                web::resource("/skills")
                    .route(web::get().to(skills::list_skills))
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/skills/{skill_id}")
                    .route(web::delete().to(skills::delete_skill))
            )
    );
}
