//! Check the admin credentials.

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use roomboard_core::auth;

pub fn run(username: Option<&str>) -> Result<()> {
    let username = match username {
        Some(u) => u.to_string(),
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = rpassword::prompt_password("Password: ")?;

    match auth::verify_credentials(&username, &password) {
        Ok(()) => {
            println!("{} {}", "Logged in as".green(), username.bold());
            Ok(())
        }
        Err(e) => anyhow::bail!(e.to_string()),
    }
}
