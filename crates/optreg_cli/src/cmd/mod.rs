/// Closest-name suggestion command.
pub mod closest;
/// Changed-from-default listing command.
pub mod diff;
/// Full store listing command.
pub mod dump;
/// Selected option lookup command.
pub mod get;
/// Schema name listing command.
pub mod names;

#[cfg(test)]
mod test_support;
mod util;
