use super::*;

pub fn register_user<D: Db>(db: &D, new_user: usecases::NewUser) -> Result<User> {
    let user = usecases::register_user(db, new_user)?;
    info!("Registered user {} ({})", user.id, user.email);
    Ok(user)
}
