// Alert subsystem - threshold preferences, crossing detection, and
// notification payloads for the treatment-age pill.

pub mod engine;
pub mod model;
