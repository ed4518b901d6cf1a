pub mod air_quality;
pub mod hour_cursor;
pub mod weather;
