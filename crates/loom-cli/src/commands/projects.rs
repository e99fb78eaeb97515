use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use loom_application::{DashboardPhase, ProjectDashboard};
use loom_core::navigation::Route;
use loom_core::project::Project;
use loom_core::user::UserRef;
use loom_interaction::ProjectApi;

use crate::context::AppContext;
use crate::prompt::{PromptConfirm, TerminalNavigator};

async fn open_dashboard(
    api_url: Option<&str>,
) -> Result<(ProjectDashboard<ProjectApi>, Arc<TerminalNavigator>)> {
    let ctx = AppContext::load(api_url).await?;
    if !ctx.session.is_authenticated().await {
        bail!("Not logged in. Run `loom login` first.");
    }
    let navigator = Arc::new(TerminalNavigator::default());
    Ok((
        ProjectDashboard::new(ctx.project_api(), navigator.clone()),
        navigator,
    ))
}

/// Loads the grid; a failed load reports the dashboard's own message.
async fn mount(dashboard: &mut ProjectDashboard<ProjectApi>) -> Result<()> {
    if let Err(err) = dashboard.mount().await {
        let message = match dashboard.phase() {
            DashboardPhase::Error(message) => message,
            _ => dashboard.list().messages().load_failed.clone(),
        };
        return Err(anyhow!(err).context(message));
    }
    Ok(())
}

pub async fn list(api_url: Option<&str>) -> Result<()> {
    let (mut dashboard, _) = open_dashboard(api_url).await?;
    mount(&mut dashboard).await?;

    let DashboardPhase::Ready(cards) = dashboard.phase() else {
        bail!("Project list is not available");
    };

    if cards.is_empty() {
        println!("No projects yet. Create one with `loom projects create <name>`.");
        return Ok(());
    }

    for card in cards {
        println!(
            "{}  {}  {}",
            card.id.dimmed(),
            card.name.bold(),
            collaborators_label(card.collaborator_count)
        );
    }
    Ok(())
}

pub async fn create(api_url: Option<&str>, name: &str) -> Result<()> {
    let (mut dashboard, _) = open_dashboard(api_url).await?;
    let create_failed = dashboard.list().messages().create_failed.clone();

    let dialog = dashboard.dialog_mut();
    dialog.open();
    dialog.set_name(name);

    let project = match dashboard.submit_dialog().await {
        Ok(project) => project,
        Err(err) if err.is_validation() => bail!(err),
        Err(err) => return Err(anyhow!(err).context(create_failed)),
    };

    println!(
        "{} Created project {} ({})",
        "✓".green(),
        project.name.bold(),
        project.id
    );
    Ok(())
}

pub async fn delete(api_url: Option<&str>, id: &str, yes: bool) -> Result<()> {
    let (mut dashboard, _) = open_dashboard(api_url).await?;

    let outcome = dashboard.delete_project(id, &PromptConfirm::new(yes)).await;
    match outcome.into_result() {
        Ok(()) => println!("{} Deleted project {}", "✓".green(), id),
        Err(err) if err.is_declined() => println!("Cancelled."),
        Err(err) => {
            return Err(anyhow!(err)).with_context(|| format!("Failed to delete project {}", id));
        }
    }
    Ok(())
}

pub async fn open(api_url: Option<&str>, id: &str) -> Result<()> {
    let (mut dashboard, navigator) = open_dashboard(api_url).await?;
    mount(&mut dashboard).await?;

    if !dashboard.open_project(id) {
        bail!("No project with id {}", id);
    }
    match navigator.last_route() {
        Some(Route::Project(project)) => print_project(&project),
        _ => bail!("No project with id {}", id),
    }
    Ok(())
}

fn print_project(project: &Project) {
    println!("{}", project.name.bold());
    println!("  id: {}", project.id);
    println!("  {}", collaborators_label(project.collaborator_count()));
    for user in &project.users {
        let label = match user {
            UserRef::Id(id) => id.as_str(),
            UserRef::User(identity) => identity.display_name(),
        };
        println!("    - {}", label);
    }
}

fn collaborators_label(count: usize) -> String {
    match count {
        1 => "1 collaborator".to_string(),
        n => format!("{} collaborators", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborators_label() {
        assert_eq!(collaborators_label(0), "0 collaborators");
        assert_eq!(collaborators_label(1), "1 collaborator");
        assert_eq!(collaborators_label(4), "4 collaborators");
    }
}
