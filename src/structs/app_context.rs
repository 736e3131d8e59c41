use crate::structs::config::display_config::DisplayConfig;
use crate::structs::session::Session;

/// What renderers and mutations need besides the page itself: the backend,
/// who is looking, and how to format things.
pub struct AppContext<'a, A: ?Sized> {
    pub api: &'a A,
    pub session: &'a Session,
    pub display: &'a DisplayConfig,
}

impl<'a, A: ?Sized> AppContext<'a, A> {
    pub fn new(api: &'a A, session: &'a Session, display: &'a DisplayConfig) -> Self {
        Self { api, session, display }
    }
}
