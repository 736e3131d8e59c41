use crate::structs::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Authenticated(Session),
    Redirected { to: String },
}
