//! Patient inputs: static attributes and current observations.

pub mod field;
pub mod mental_status;
pub mod observation;
pub mod static_info;

pub use field::ObservationField;
pub use mental_status::MentalStatus;
pub use observation::PatientObservation;
pub use static_info::{PatientStatic, Sex};
