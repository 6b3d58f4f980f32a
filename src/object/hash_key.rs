/// Canonical identity for hashable values. Defined only on the three
/// value variants that can be used as hash keys — `Integer`, `Boolean`,
/// `String` — so it doubles as the "is this hashable" predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(String),
}
