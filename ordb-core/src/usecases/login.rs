use super::prelude::*;

#[derive(Debug)]
pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

/// Check the credentials and return the authenticated user.
///
/// Token issuance is up to the caller.
pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| match user {
            Some(u) if u.password.verify(login.password) => Ok(u),
            _ => Err(Error::Credentials),
        })
}
