/// Session persistence requests
///
/// These never change state themselves; `SessionMiddleware` turns them into
/// file I/O and, for `Load`, a follow-up `TabListAction::Restore`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Load,
    Save,
}
