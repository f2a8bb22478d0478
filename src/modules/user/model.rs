use uuid::Uuid;

/// Domain user, owned by the service layer.
///
/// Callers never see this type directly; exposure goes through
/// [`UserResponse`](super::contracts::UserResponse) so the wire shape can
/// evolve independently. Every user handed out carries an assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
}
