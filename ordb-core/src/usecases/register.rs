use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
}

pub fn register_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let password = u.password.parse::<Password>()?;
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::Email);
    }
    if u.name.trim().is_empty() {
        return Err(Error::Name);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        name: u.name,
        email: u.email,
        password,
        role: Role::default(),
        favorites: vec![],
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", user.email);
    repo.create_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ordb_entities::builders::*;

    fn new_user(name: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: EmailAddress::new_unchecked(email.into()),
            password: password.into(),
        }
    }

    #[test]
    fn register_two_users() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("Foo", "foo@bar.de", "secret1")).is_ok());
        assert!(register_user(&db, new_user("Baz", "baz@bar.de", "secret2")).is_ok());
        assert!(db
            .get_user_by_email(&EmailAddress::new_unchecked("foo@bar.de".into()))
            .is_ok());
        assert!(db
            .try_get_user_by_email(&EmailAddress::new_unchecked("missing@bar.de".into()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn register_with_invalid_password() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("Foo", "foo@baz.io", "hello")).is_err());
        assert!(register_user(&db, new_user("Foo", "foo@baz.io", "valid pass")).is_ok());
    }

    #[test]
    fn register_with_invalid_email() {
        let db = MockDb::default();
        assert!(register_user(&db, new_user("Foo", "", "secret")).is_err());
        assert!(register_user(&db, new_user("Foo", "fooo@", "secret")).is_err());
        assert!(register_user(&db, new_user("Foo", "fooo@bar.io", "secret")).is_ok());
    }

    #[test]
    fn register_with_existing_email() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().email("baz@foo.bar").finish());
        match register_user(&db, new_user("Baz", "baz@foo.bar", "secret")).err() {
            Some(Error::UserExists) => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn new_users_start_with_the_default_role() {
        let db = MockDb::default();
        let user = register_user(&db, new_user("Foo", "foo@bar.io", "secret")).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(user.favorites.is_empty());
    }

    #[test]
    fn passwords_are_stored_hashed() {
        let db = MockDb::default();
        register_user(&db, new_user("Foo", "foo@bar.io", "secret")).unwrap();
        assert!(db.users.borrow()[0].password.as_ref() != "secret");
        assert!(db.users.borrow()[0].password.verify("secret"));
    }
}
