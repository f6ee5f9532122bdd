use std::sync::RwLock;

use chrono::NaiveDate;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i64,
    pub name: String,
}

/// A date range during which a room cannot be booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRestriction {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RoomRestriction {
    /// Half-open overlap: a stay may start on the day a restriction ends.
    fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start < self.end_date && end > self.start_date
    }
}

/// In-memory rooms and their restrictions.
pub struct RoomCalendar {
    rooms: Vec<Room>,
    restrictions: RwLock<Vec<RoomRestriction>>,
}

impl RoomCalendar {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            restrictions: RwLock::new(Vec::new()),
        }
    }

    /// The two rooms the site rents out.
    pub fn seeded() -> Self {
        Self::new(vec![
            Room { id: 1, name: "General's Quarters".to_string() },
            Room { id: 2, name: "Major's Suite".to_string() },
        ])
    }

    pub fn room(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn block(&self, room_id: i64, start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
        if self.room(room_id).is_none() {
            return Err(AppError::NotFound);
        }
        let mut restrictions = self.restrictions.write().unwrap_or_else(|e| e.into_inner());
        restrictions.push(RoomRestriction { room_id, start_date: start, end_date: end });
        log::info!("Blocked room {room_id} from {start} to {end}");
        Ok(())
    }

    /// Block the stay unless it overlaps an existing restriction. Returns whether it was reserved.
    pub fn reserve(&self, room_id: i64, start: NaiveDate, end: NaiveDate) -> Result<bool, AppError> {
        if self.room(room_id).is_none() {
            return Err(AppError::NotFound);
        }
        let mut restrictions = self.restrictions.write().unwrap_or_else(|e| e.into_inner());
        if restrictions
            .iter()
            .any(|r| r.room_id == room_id && r.overlaps(start, end))
        {
            return Ok(false);
        }
        restrictions.push(RoomRestriction { room_id, start_date: start, end_date: end });
        log::info!("Reserved room {room_id} from {start} to {end}");
        Ok(true)
    }

    pub fn is_available(&self, room_id: i64, start: NaiveDate, end: NaiveDate) -> Result<bool, AppError> {
        if self.room(room_id).is_none() {
            return Err(AppError::NotFound);
        }
        let restrictions = self.restrictions.read().unwrap_or_else(|e| e.into_inner());
        Ok(!restrictions
            .iter()
            .any(|r| r.room_id == room_id && r.overlaps(start, end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
    }

    #[test]
    fn free_room_is_available() {
        let cal = RoomCalendar::seeded();
        assert!(cal.is_available(1, d("2024-06-01"), d("2024-06-05")).expect("check"));
    }

    #[test]
    fn overlapping_restriction_blocks() {
        let cal = RoomCalendar::seeded();
        cal.block(1, d("2024-06-03"), d("2024-06-10")).expect("block");
        assert!(!cal.is_available(1, d("2024-06-01"), d("2024-06-05")).expect("check"));
        // Other rooms are unaffected.
        assert!(cal.is_available(2, d("2024-06-01"), d("2024-06-05")).expect("check"));
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let cal = RoomCalendar::seeded();
        cal.block(1, d("2024-06-05"), d("2024-06-08")).expect("block");
        assert!(cal.is_available(1, d("2024-06-01"), d("2024-06-05")).expect("check"));
        assert!(cal.is_available(1, d("2024-06-08"), d("2024-06-09")).expect("check"));
    }

    #[test]
    fn reserve_takes_the_stay_once() {
        let cal = RoomCalendar::seeded();
        assert!(cal.reserve(2, d("2024-06-01"), d("2024-06-05")).expect("reserve"));
        assert!(!cal.reserve(2, d("2024-06-03"), d("2024-06-04")).expect("reserve"));
        assert!(!cal.is_available(2, d("2024-06-01"), d("2024-06-05")).expect("check"));
    }

    #[test]
    fn unknown_room_is_not_found() {
        let cal = RoomCalendar::seeded();
        assert!(matches!(
            cal.is_available(99, d("2024-06-01"), d("2024-06-05")),
            Err(AppError::NotFound)
        ));
        assert!(cal.block(99, d("2024-06-01"), d("2024-06-05")).is_err());
    }
}
