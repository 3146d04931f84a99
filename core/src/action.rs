#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Open(usize),
    Prev,
    Next,
    Close,
}
