use crate::action::NavAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    len: usize,
    current: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GallerySnapshot {
    pub current: Option<usize>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl GallerySnapshot {
    pub fn open(&self) -> bool {
        self.current.is_some()
    }
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    // Returns true when the state changed; rejected transitions leave the
    // state untouched so the caller can skip re-rendering.
    pub fn apply(&mut self, action: NavAction) -> bool {
        let target = match action {
            NavAction::Open(index) => {
                if index >= self.len {
                    return false;
                }
                Some(index)
            }
            NavAction::Next => match self.current {
                Some(index) if index + 1 < self.len => Some(index + 1),
                _ => return false,
            },
            NavAction::Prev => match self.current {
                Some(index) if index > 0 => Some(index - 1),
                _ => return false,
            },
            NavAction::Close => None,
        };
        if target == self.current {
            return false;
        }
        self.current = target;
        true
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            current: self.current,
            prev: self.current.and_then(|index| index.checked_sub(1)),
            next: self.current.and_then(|index| {
                let next = index + 1;
                (next < self.len).then_some(next)
            }),
        }
    }
}
