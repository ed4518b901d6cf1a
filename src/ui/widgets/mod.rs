pub mod air_quality;
pub mod canvas;
pub mod current;
pub mod daily;
pub mod header;
pub mod hourly;
pub mod search;
pub mod shared;
pub mod status;
