use crate::components::ObjectType;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EcsError {
    InvalidType(ObjectType),
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::InvalidType(object_type) => {
                write!(f, "Cannot create object of type {:?}", object_type)
            }
        }
    }
}

impl Error for EcsError {}

pub type Result<T> = std::result::Result<T, EcsError>;
