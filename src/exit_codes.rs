/// Process exit codes.
///
/// A rejected remote update still exits with `SUCCESS`; only local
/// failures before the request is sent are reported through the exit code.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const CONFIGURATION_FAILURE: i32 = 1;
}
