use num_derive::{FromPrimitive, ToPrimitive};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub role       : Role,
    /// Vehicles bookmarked by this user.
    pub favorites  : Vec<Id>,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    User  = 0,
    Owner = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn roles_are_ordered_by_privilege() {
        assert!(Role::Admin > Role::Owner);
        assert!(Role::Owner > Role::User);
    }

    #[test]
    fn role_from_primitive() {
        assert_eq!(Role::from_i64(1), Some(Role::Owner));
        assert_eq!(Role::from_i64(7), None);
    }
}
