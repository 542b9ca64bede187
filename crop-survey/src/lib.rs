pub mod crop;
pub mod date_range;
pub mod generator;
pub mod record;
pub mod status;
