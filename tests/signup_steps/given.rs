//! Given steps for signup BDD scenarios.

use super::world::{SignupWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::account::services::SignupRequest;

#[given("an empty user store")]
fn empty_user_store(world: &mut SignupWorld) {
    world.last_result = None;
}

#[given(r#"the username "{username}" is registered"#)]
fn username_is_registered(world: &mut SignupWorld, username: String) -> Result<(), eyre::Report> {
    run_async(
        world
            .service
            .register(SignupRequest::new(username, "GoodPass1", "GoodPass1")),
    )
    .wrap_err("register existing user for scenario setup")?;
    Ok(())
}
