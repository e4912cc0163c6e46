pub mod analysis;
pub mod date_range;
pub mod location;
pub mod observation;
pub mod query;
pub mod series;
pub mod threshold;
pub mod traits;
pub mod variable;
