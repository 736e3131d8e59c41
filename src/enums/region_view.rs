/// Content of a list region on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionView<T> {
    Idle,
    Loading(String),
    Empty(String),
    Items(Vec<T>),
    Failed(String),
}

impl<T> RegionView<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> Default for RegionView<T> {
    fn default() -> Self {
        Self::Idle
    }
}
