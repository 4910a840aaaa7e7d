/// Remote data acquisition.
///
/// Each upstream API gets its own file under ingest/ rather than bloating a
/// single module; today that is only the AirKorea measurement service.

pub mod airkorea;

#[cfg(test)]
pub(crate) mod fixtures;
