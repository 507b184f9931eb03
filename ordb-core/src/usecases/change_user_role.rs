use super::prelude::*;

pub fn change_user_role<R>(repo: &R, account_id: &Id, user_id: &str, role: Role) -> Result<()>
where
    R: UserRepo,
{
    log::info!("Changing role to {:?} for {}", role, user_id);
    let account = repo.get_user(account_id.as_ref())?;
    let mut user = repo.get_user(user_id)?;
    if account.role > user.role && role < account.role {
        user.role = role;
        repo.update_user(&user)?;
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
