/// System-level events
#[derive(Debug, Clone, PartialEq)]
pub enum SystemAction {
    /// The system is running low on memory; drop what can be recreated
    LowMemory,
}
