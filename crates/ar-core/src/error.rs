use crate::registry::{DecorationId, DecorationOwner};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("slideshow needs at least one slide")]
    EmptySlideshow,
    #[error("invalid configuration value for `{name}`: {value}")]
    InvalidConfig { name: &'static str, value: f64 },
    #[error("decoration {id:?} is owned by {owner:?} and cannot be removed by {requested_by:?}")]
    ForeignDecoration {
        id: DecorationId,
        owner: DecorationOwner,
        requested_by: DecorationOwner,
    },
    #[error("decoration {0:?} is not registered")]
    UnknownDecoration(DecorationId),
}
