use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod contact_messages;
mod documents;
mod projects;

/// Route table: every (method, path) the service answers.
///
/// | path                      | methods                   |
/// |---------------------------|---------------------------|
/// | `/projects`               | GET (`?category=`), POST  |
/// | `/projects/{id}`          | GET, PUT, PATCH, DELETE   |
/// | `/documents`              | GET (`?category=`), POST  |
/// | `/documents/{id}`         | GET, PUT, PATCH, DELETE   |
/// | `/contact-messages`       | GET, POST (notifies)      |
/// | `/contact-messages/{id}`  | GET, PUT, PATCH, DELETE   |
///
/// Paths are matched after `NormalizePath::trim`, so trailing slashes are accepted.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(projects::config_routes)
        .configure(documents::config_routes)
        .configure(contact_messages::config_routes);
}
