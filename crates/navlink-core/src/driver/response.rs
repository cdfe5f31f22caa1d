#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    /// Number of rows impacted by the operation
    pub count: u64,
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self { count }
    }
}
