/// A user record as stored in `usuarios`
///
/// This layer never manipulates users; records are passed through as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub level_id: i32,
    pub status: i32,
}
