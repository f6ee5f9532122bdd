use actix_session::Session;
use actix_web::{web, HttpResponse};
use askama::Template;
use chrono::NaiveDate;
use serde::Deserialize;

use super::csrf;
use super::rooms::RoomCalendar;
use crate::availability::AvailabilityResult;
use crate::errors::AppError;
use crate::templates_structs::{BookRoomTemplate, RoomPageTemplate};

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Room id and stay dates from raw form/query values.
fn parse_stay(room_id: &str, start: &str, end: &str) -> Result<(i64, NaiveDate, NaiveDate), &'static str> {
    let (Ok(start), Ok(end)) = (
        NaiveDate::parse_from_str(start, DATE_LAYOUT),
        NaiveDate::parse_from_str(end, DATE_LAYOUT),
    ) else {
        return Err("Invalid dates");
    };
    if end < start {
        return Err("Departure must not be before arrival");
    }
    let Ok(room_id) = room_id.trim().parse::<i64>() else {
        return Err("Invalid room id");
    };
    Ok((room_id, start, end))
}

/// GET /rooms/{id} - room page carrying the session's CSRF token.
pub async fn room_page(
    calendar: web::Data<RoomCalendar>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let room = calendar.room(path.into_inner()).ok_or(AppError::NotFound)?;
    let tmpl = RoomPageTemplate {
        room_id: room.id,
        room_name: room.name.clone(),
        csrf_token: csrf::session_token(&session),
    };
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body))
}

#[derive(Deserialize)]
pub struct AvailabilityForm {
    #[serde(default)]
    pub start_modal: String,
    #[serde(default)]
    pub end_modal: String,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub room_id: String,
}

/// POST /search-availability-json - answers whether a room is free for a date range.
///
/// Bad input and unknown rooms answer `ok=false` with a message; a bad CSRF token is a 403.
pub async fn search_availability_json(
    calendar: web::Data<RoomCalendar>,
    session: Session,
    form: web::Form<AvailabilityForm>,
) -> Result<HttpResponse, AppError> {
    if !csrf::is_valid(&session, &form.csrf_token) {
        log::warn!("Rejected availability search with invalid CSRF token");
        return Ok(HttpResponse::Forbidden().json(AvailabilityResult::rejected(
            "Invalid or missing CSRF token",
        )));
    }

    let (room_id, start, end) = match parse_stay(&form.room_id, &form.start_modal, &form.end_modal) {
        Ok(stay) => stay,
        Err(message) => return Ok(HttpResponse::Ok().json(AvailabilityResult::rejected(message))),
    };

    let ok = match calendar.is_available(room_id, start, end) {
        Ok(available) => available,
        Err(AppError::NotFound) => {
            return Ok(HttpResponse::Ok().json(AvailabilityResult::rejected("Unknown room")));
        }
        Err(e) => return Err(e),
    };
    log::info!("Room {room_id} {start}..{end} available: {ok}");

    Ok(HttpResponse::Ok().json(AvailabilityResult {
        ok,
        message: String::new(),
        room_id: room_id.to_string(),
        start_date: form.start_modal.clone(),
        end_date: form.end_modal.clone(),
    }))
}

#[derive(Deserialize)]
pub struct BookRoomQuery {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub e: String,
}

/// GET /book-room?id=&s=&e= - confirmation page for the stay picked in the availability dialog.
pub async fn book_room(
    calendar: web::Data<RoomCalendar>,
    session: Session,
    query: web::Query<BookRoomQuery>,
) -> Result<HttpResponse, AppError> {
    let (room_id, start, end) =
        parse_stay(&query.id, &query.s, &query.e).map_err(|m| AppError::BadRequest(m.to_string()))?;
    let room = calendar.room(room_id).ok_or(AppError::NotFound)?;

    let tmpl = BookRoomTemplate {
        room_id: room.id,
        room_name: room.name.clone(),
        start_date: start.format(DATE_LAYOUT).to_string(),
        end_date: end.format(DATE_LAYOUT).to_string(),
        csrf_token: csrf::session_token(&session),
        reserved: false,
        message: String::new(),
    };
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body))
}

#[derive(Deserialize)]
pub struct ReservationForm {
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// POST /book-room - reserves the stay, blocking the room for those dates.
///
/// A stay that was taken in the meantime answers 409 with the page explaining why.
pub async fn reserve_room(
    calendar: web::Data<RoomCalendar>,
    session: Session,
    form: web::Form<ReservationForm>,
) -> Result<HttpResponse, AppError> {
    if !csrf::is_valid(&session, &form.csrf_token) {
        log::warn!("Rejected reservation with invalid CSRF token");
        return Ok(HttpResponse::Forbidden().body("Invalid or missing CSRF token"));
    }

    let (room_id, start, end) = parse_stay(&form.room_id, &form.start_date, &form.end_date)
        .map_err(|m| AppError::BadRequest(m.to_string()))?;
    let room = calendar.room(room_id).ok_or(AppError::NotFound)?;

    let reserved = calendar.reserve(room_id, start, end)?;
    if !reserved {
        log::info!("Room {room_id} {start}..{end} already taken");
    }

    let tmpl = BookRoomTemplate {
        room_id: room.id,
        room_name: room.name.clone(),
        start_date: start.format(DATE_LAYOUT).to_string(),
        end_date: end.format(DATE_LAYOUT).to_string(),
        csrf_token: csrf::session_token(&session),
        reserved,
        message: if reserved {
            String::new()
        } else {
            "These dates are no longer available".to_string()
        },
    };
    let body = tmpl.render()?;
    let mut response = if reserved {
        HttpResponse::Ok()
    } else {
        HttpResponse::Conflict()
    };
    Ok(response.content_type("text/html; charset=utf-8").body(body))
}
