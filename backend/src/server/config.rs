//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::web;

use nearby_eats::inbound::http::state::HttpState;

/// Everything [`super::create_server`] needs besides health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: web::Data<HttpState>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state: web::Data::new(http_state),
        }
    }
}
