use crate::domain::model::BirthInfo;

/// Anything that can hand the engine a birth moment (CLI flags today, an HTTP
/// request body or stored record in the host application).
pub trait BirthProvider: Send + Sync {
    fn birth_info(&self) -> BirthInfo;
}
