use std::sync::Arc;

use anyhow::{Result, bail};
use colored::Colorize;
use loom_application::register::EMAIL_TAKEN_MESSAGE;
use loom_application::{LoginController, RegistrationController, SubmitOutcome};

use crate::context::AppContext;
use crate::prompt::{TerminalNavigator, read_line, read_password, route_hint};

pub async fn login(
    api_url: Option<&str>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = AppContext::load(api_url).await?;
    let navigator = Arc::new(TerminalNavigator::default());
    let mut controller =
        LoginController::new(ctx.auth_api(), ctx.session.clone(), navigator.clone());

    controller.set_email(match email {
        Some(email) => email,
        None => read_line("Email: ")?,
    });
    controller.set_password(match password {
        Some(password) => password,
        None => read_password("Password: ", false)?,
    });

    match controller.submit().await {
        SubmitOutcome::Authenticated => {
            print_welcome(&ctx, "Logged in as").await;
            if let Some(route) = navigator.last_route() {
                println!("Next: {}", route_hint(&route).cyan());
            }
            Ok(())
        }
        SubmitOutcome::Rejected(message) => {
            if controller.credentials_rejected() {
                controller.go_to_register();
                if let Some(route) = navigator.last_route() {
                    eprintln!("No account yet? Run {}", route_hint(&route).cyan());
                }
            }
            bail!(message)
        }
        SubmitOutcome::Ignored => bail!("Login is already in progress"),
    }
}

pub struct RegisterArgs {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub show_password: bool,
}

pub async fn register(api_url: Option<&str>, args: RegisterArgs) -> Result<()> {
    let ctx = AppContext::load(api_url).await?;
    let navigator = Arc::new(TerminalNavigator::default());
    let mut controller =
        RegistrationController::new(ctx.auth_api(), ctx.session.clone(), navigator.clone());

    if args.show_password {
        controller.toggle_password_visibility();
    }
    let visible = controller.show_password();

    controller.set_email(match args.email {
        Some(email) => email,
        None => read_line("Email: ")?,
    });
    let confirm_password = match (args.confirm_password, &args.password) {
        (Some(confirm), _) => Some(confirm),
        (None, Some(password)) => Some(password.clone()),
        (None, None) => None,
    };
    controller.set_password(match args.password {
        Some(password) => password,
        None => read_password("Password: ", visible)?,
    });
    controller.set_confirm_password(match confirm_password {
        Some(confirm) => confirm,
        None => read_password("Confirm password: ", visible)?,
    });

    match controller.submit().await {
        SubmitOutcome::Authenticated => {
            print_welcome(&ctx, "Registered and logged in as").await;
            Ok(())
        }
        SubmitOutcome::Rejected(message) => {
            if message == EMAIL_TAKEN_MESSAGE {
                controller.go_to_login();
                if let Some(route) = navigator.last_route() {
                    eprintln!("Run {}", route_hint(&route).cyan());
                }
            }
            bail!(message)
        }
        SubmitOutcome::Ignored => bail!("Registration is already in progress"),
    }
}

pub async fn logout(api_url: Option<&str>) -> Result<()> {
    let ctx = AppContext::load(api_url).await?;
    let was_authenticated = ctx.session.is_authenticated().await;

    ctx.session.logout().await?;

    if was_authenticated {
        println!("{} Logged out", "✓".green());
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub async fn whoami(api_url: Option<&str>) -> Result<()> {
    let ctx = AppContext::load(api_url).await?;
    match ctx.session.user().await {
        Some(user) => println!("{}", user.display_name()),
        None => println!("Not logged in."),
    }
    Ok(())
}

async fn print_welcome(ctx: &AppContext, lead: &str) {
    let name = ctx
        .session
        .user()
        .await
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();
    println!("{} {} {}", "✓".green(), lead, name.bold());
}
