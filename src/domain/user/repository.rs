use super::User;

/// Read-only source of users backing the HTTP handlers.
///
/// Implementations hold no mutable state; every call is answered from
/// data fixed at construction time.
pub trait UserDirectory: Send + Sync {
    /// All users, in directory order.
    fn list(&self) -> Vec<User>;

    /// The user addressable by `id`, if any.
    fn find(&self, id: i64) -> Option<User>;

    /// Id to hand out for a newly created user.
    ///
    /// `requested` is the id the client put in the body, if any. The
    /// returned id never equals it.
    fn assign_id(&self, requested: Option<i64>) -> i64;
}
