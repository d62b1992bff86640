use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

// New
impl Repository {
    pub fn new(owner: impl ToString, name: impl ToString) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    pub fn profile_of(username: &str) -> Self {
        Self::new(username, username)
    }
}

// Parser
impl FromStr for Repository {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self> {
        let Some((owner, name)) = identifier.trim().split_once('/') else {
            return Err(Error::InvalidRepository(identifier.to_string()));
        };
        let valid = |part: &str| !part.is_empty() && !part.contains(char::is_whitespace);
        if !valid(owner) || !valid(name) || name.contains('/') {
            return Err(Error::InvalidRepository(identifier.to_string()));
        }
        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
