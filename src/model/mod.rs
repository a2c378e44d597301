mod depo_log;
mod unit;
mod upload;
mod validation;
mod zone;

pub use depo_log::{DepoLog, DepoLogInput, UPLOADED_MARKER};
pub use unit::Unit;
pub use upload::{UploadField, UploadState};
pub use validation::{MAX_ARRIVAL_LEN, ValidationError, is_arrival_char, parse_arrival_time};
pub use zone::ArrivalZone;
