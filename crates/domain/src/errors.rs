use thiserror::Error;

/// Errors the filter evaluator can surface to a caller.
///
/// Transient failures from remote collaborators — reputation lookups, the
/// Safe Search resolver — are never represented here. Those are absorbed at
/// the service boundary and logged; a `check_host` call that hits a
/// misbehaving upstream still returns a `FilterResult`, never this type.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid rule line: {0}")]
    InvalidRule(String),

    #[error("failed to compile filter set: {0}")]
    CompileFailed(String),

    #[error("invalid hosts file entry: {0}")]
    InvalidHostsEntry(String),

    #[error("invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("internal lock was poisoned")]
    LockPoisoned,
}
