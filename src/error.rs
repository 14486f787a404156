use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    #[cfg(feature = "pico1")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[cfg(feature = "pico1")]
    #[display("real-time clock error: {_0:?}")]
    Rtc(#[error(not(source))] embassy_rp::rtc::RtcError),
}

#[cfg(feature = "pico1")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}

#[cfg(feature = "pico1")]
impl From<embassy_rp::rtc::RtcError> for Error {
    fn from(err: embassy_rp::rtc::RtcError) -> Self {
        Self::Rtc(err)
    }
}
