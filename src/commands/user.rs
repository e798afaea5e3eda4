//! User command implementation
//!
//! Creates an admin account in the project's account store. Fields left off
//! the command line are prompted for; in a non-interactive session missing
//! fields are an error instead.

use std::path::PathBuf;

use console::Style;
use inquire::{Password, Text};

use crate::accounts::UserStore;
use crate::cli::UserArgs;
use crate::error::{Result, ViltkitError};
use crate::installer;

/// Run user command
pub fn run(project: Option<PathBuf>, args: UserArgs) -> Result<()> {
    let project_root = super::project_path(project)?;
    installer::check_project_root(&project_root)?;

    let name = text_field(args.name, "What is the user's name?")?;
    let email = text_field(args.email, "What is the user's email?")?;
    let password = password_field(args.password, "What is the user's password?")?;

    let store = UserStore::new(&project_root);
    let record = store.create_user(&name, &email, &password)?;

    println!();
    println!(
        "{} User [{}] created successfully!",
        Style::new().green().apply_to("✓"),
        Style::new().bold().apply_to(&record.name)
    );
    println!("  - Email: {}", record.email);
    println!("  - Login at: /admin/login");
    println!();

    Ok(())
}

// A declined or unavailable prompt leaves the field empty, which the store
// rejects as a missing field.

fn text_field(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if console::user_attended() => Text::new(prompt)
            .prompt()
            .map_err(|_| ViltkitError::MissingUserFields),
        None => Err(ViltkitError::MissingUserFields),
    }
}

fn password_field(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if console::user_attended() => Password::new(prompt)
            .without_confirmation()
            .prompt()
            .map_err(|_| ViltkitError::MissingUserFields),
        None => Err(ViltkitError::MissingUserFields),
    }
}
