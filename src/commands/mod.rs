//! CLI commands for jotjot

pub mod attach;
pub mod capture;
pub mod delete;
pub mod dismiss;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod merge;
pub mod pin;
pub mod similar;
pub mod suggest;

#[cfg(test)]
pub(crate) mod test_support;
