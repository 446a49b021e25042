//! When steps for signup BDD scenarios.

use super::world::{SignupWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::account::services::SignupRequest;

#[when(
    r#"someone signs up as "{username}" with password "{password}" confirmed as "{confirmation}""#
)]
fn someone_signs_up(
    world: &mut SignupWorld,
    username: String,
    password: String,
    confirmation: String,
) {
    let result = run_async(
        world
            .service
            .register(SignupRequest::new(username, password, confirmation)),
    );
    world.last_result = Some(result);
}
