//! Session lifecycle commands: login, signup, logout, whoami.

use anyhow::{Context, Result, anyhow};
use turnstile_core::api::ApiClient;
use turnstile_core::forms::{LoginForm, SignupForm, first_messages};
use turnstile_core::models::Role;
use turnstile_core::session::SessionStore;
use validator::Validate;

pub async fn login(
    api: &ApiClient,
    sessions: &SessionStore,
    email: String,
    password: String,
) -> Result<()> {
    let form = LoginForm { email, password };
    form.validate().map_err(format_field_errors)?;

    let user = api
        .login(&form)
        .await
        .map_err(|err| anyhow!("Login failed: {}", err.message()))?;

    sessions.save(&user).context("persist session")?;
    println!("Signed in as {} ({})", user.name, user.role);
    Ok(())
}

pub async fn signup(
    api: &ApiClient,
    sessions: &SessionStore,
    name: String,
    email: String,
    password: String,
    role: Role,
) -> Result<()> {
    let form = SignupForm {
        name,
        email,
        password,
        role,
    };
    form.validate().map_err(format_field_errors)?;

    let user = api
        .signup(&form)
        .await
        .map_err(|err| anyhow!("Signup failed: {}", err.message()))?;

    sessions.save(&user).context("persist session")?;
    println!("Account created. Signed in as {} ({})", user.name, user.role);
    Ok(())
}

pub fn logout(sessions: &SessionStore) -> Result<()> {
    if sessions.clear().context("clear session")? {
        println!("Signed out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

pub fn whoami(sessions: &SessionStore) -> Result<()> {
    match sessions.load() {
        Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
        None => println!("Not signed in."),
    }
    Ok(())
}

fn format_field_errors(errors: validator::ValidationErrors) -> anyhow::Error {
    let details: Vec<String> = first_messages(&errors)
        .into_iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect();
    anyhow!("Invalid input ({})", details.join(", "))
}
