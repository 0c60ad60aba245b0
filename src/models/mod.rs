//! Core data records exchanged between the decoder, the analyzer and the
//! API surface.

pub mod location;
pub mod observation;
pub mod sigmet;

pub use location::Coordinate;
pub use observation::DecodedObservation;
pub use sigmet::SigmetRecord;
