/// OV2640 driver errors
///
/// `E` is the SCCB bus error type of the underlying `embedded_hal::i2c::I2c`.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    #[error("SCCB bus error: {0:?}")]
    Bus(E),
    #[error("handle is not initialized")]
    NotInitialized,
    #[error("chip id is invalid: PID=0x{pid:02X} VER=0x{ver:02X}")]
    InvalidChipId { pid: u8, ver: u8 },
    #[error("power down pin write failed")]
    PowerDownPin,
    #[error("reset pin write failed")]
    ResetPin,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
