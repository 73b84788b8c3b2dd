mod cli;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tasklist_client::{Controller, Outcome, Store, View};
use tasklist_core::Priority;
use tasklist_service::HttpService;
use tracing::info;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tasklist=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("api: {}", cli.api_url);

    let service = HttpService::new(&cli.api_url);
    service
        .health_check()
        .await
        .with_context(|| format!("task-list API at {} is not reachable", cli.api_url))?;

    let controller = Controller::new(service, Store::new());
    run(&controller, cli.command).await
}

fn parse_priority(raw: &str) -> Result<Priority> {
    Priority::from_str(raw).with_context(|| format!("unknown priority {raw:?}"))
}

fn check(outcome: Outcome, what: &str) -> Result<()> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Rejected => bail!("{what}: rejected (empty title, bad date, or unknown id)"),
        Outcome::Failed => bail!("{what}: request failed, see log"),
    }
}

async fn open_list(controller: &Controller<HttpService>, list_id: &str) {
    controller.navigate(View::Dashboard, None, None).await;
    controller
        .navigate(View::TaskList, Some(list_id.to_string()), None)
        .await;
}

async fn run(controller: &Controller<HttpService>, command: Command) -> Result<()> {
    match command {
        Command::Lists { search } => {
            controller.navigate(View::Dashboard, None, None).await;
            controller.set_search(&search);
            render::dashboard(&controller.snapshot());
        }
        Command::Show {
            list_id,
            search,
            priority,
        } => {
            let priority = priority.as_deref().map(parse_priority).transpose()?;
            open_list(controller, &list_id).await;
            controller.set_search(&search);
            controller.set_priority_filter(priority);
            render::task_list(&controller.snapshot(), &list_id);
        }
        Command::NewList { title, description } => {
            controller.navigate(View::CreateList, None, None).await;
            let mut form = controller.list_form();
            form.title = title;
            form.description = description;
            check(controller.submit_list_form(&form).await, "create list")?;
            render::dashboard(&controller.snapshot());
        }
        Command::EditList {
            list_id,
            title,
            description,
        } => {
            controller.navigate(View::Dashboard, None, None).await;
            controller
                .navigate(View::EditList, Some(list_id), None)
                .await;
            let mut form = controller.list_form();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            check(controller.submit_list_form(&form).await, "edit list")?;
            render::dashboard(&controller.snapshot());
        }
        Command::DeleteList { list_id } => {
            controller.navigate(View::Dashboard, None, None).await;
            check(controller.delete_list(&list_id).await, "delete list")?;
            render::dashboard(&controller.snapshot());
        }
        Command::NewTask {
            list_id,
            title,
            description,
            due,
            priority,
        } => {
            open_list(controller, &list_id).await;
            controller
                .navigate(View::CreateTask, Some(list_id.clone()), None)
                .await;
            let mut form = controller.task_form();
            form.title = title;
            form.description = description;
            form.due_date = due;
            if let Some(priority) = priority {
                form.priority = parse_priority(&priority)?;
            }
            check(controller.submit_task_form(&form).await, "create task")?;
            render::task_list(&controller.snapshot(), &list_id);
        }
        Command::EditTask {
            list_id,
            task_id,
            title,
            description,
            due,
            priority,
        } => {
            open_list(controller, &list_id).await;
            controller
                .navigate(View::EditTask, Some(list_id.clone()), Some(task_id))
                .await;
            let mut form = controller.task_form();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(due) = due {
                form.due_date = due;
            }
            if let Some(priority) = priority {
                form.priority = parse_priority(&priority)?;
            }
            check(controller.submit_task_form(&form).await, "edit task")?;
            render::task_list(&controller.snapshot(), &list_id);
        }
        Command::Toggle { list_id, task_id } => {
            open_list(controller, &list_id).await;
            check(controller.toggle_task_status(&task_id).await, "toggle task")?;
            render::task_list(&controller.snapshot(), &list_id);
        }
        Command::DeleteTask { list_id, task_id } => {
            open_list(controller, &list_id).await;
            check(controller.delete_task(&task_id).await, "delete task")?;
            render::task_list(&controller.snapshot(), &list_id);
        }
    }
    Ok(())
}
