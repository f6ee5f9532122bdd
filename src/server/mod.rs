//! HTTP side of the availability check: room pages, the JSON endpoint and booking.

pub mod csrf;
pub mod handlers;
pub mod rooms;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

pub use rooms::{Room, RoomCalendar, RoomRestriction};

/// Cookie-backed session middleware holding the CSRF token.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Register routes. Expects `web::Data<RoomCalendar>` and session middleware on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/rooms/{id}", web::get().to(handlers::room_page))
        .route(
            crate::availability::query::BOOK_ROOM_PATH,
            web::get().to(handlers::book_room),
        )
        .route(
            crate::availability::query::BOOK_ROOM_PATH,
            web::post().to(handlers::reserve_room),
        )
        .route(
            crate::availability::client::AVAILABILITY_PATH,
            web::post().to(handlers::search_availability_json),
        );
}
