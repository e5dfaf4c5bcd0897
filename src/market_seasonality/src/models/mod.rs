pub mod daily_record;
pub mod intraday;
pub mod month;
pub mod summary;
pub mod view;
