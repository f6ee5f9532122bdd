use askama::Template;

#[derive(Template)]
#[template(path = "room.html")]
pub struct RoomPageTemplate {
    pub room_id: i64,
    pub room_name: String,
    pub csrf_token: String,
}

/// Booking confirmation for a stay; `reserved` once the POST went through.
#[derive(Template)]
#[template(path = "book_room.html")]
pub struct BookRoomTemplate {
    pub room_id: i64,
    pub room_name: String,
    pub start_date: String,
    pub end_date: String,
    pub csrf_token: String,
    pub reserved: bool,
    pub message: String,
}
