pub mod any_date;
