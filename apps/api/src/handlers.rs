pub mod dashboard;
pub mod dev;
pub mod filtered_index;
pub mod health;
pub mod session_context;

#[cfg(test)]
pub(crate) mod test_support;
