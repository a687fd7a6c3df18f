//! Todo-list command handlers.
//!
//! Every command starts from a fresh store: bootstrap the session, load the
//! lists, then apply the change and print what the store holds afterwards.

use anyhow::{Context, Result};
use todo_core::config::Config;
use todo_core::features::todolists;
use todo_types::TodolistDomain;

use super::session::Session;

async fn load(config: &Config) -> Result<Session> {
    let session = Session::bootstrap(config).await?;
    todolists::fetch_todolists(&session.api, &session.store).await;
    session.check()?;
    Ok(session)
}

pub async fn list(config: &Config, json: bool) -> Result<()> {
    let session = load(config).await?;
    let lists = session.store.state().todolists;
    if json {
        let out = serde_json::to_string_pretty(&lists).context("serialize todo-lists")?;
        println!("{out}");
    } else {
        print_lists(&lists);
    }
    Ok(())
}

pub async fn add(config: &Config, title: &str) -> Result<()> {
    let session = load(config).await?;
    todolists::add_todolist(&session.api, &session.store, title)
        .await
        .with_context(|| format!("add todo-list '{title}'"))?;
    session.check()?;
    print_lists(&session.store.state().todolists);
    Ok(())
}

pub async fn remove(config: &Config, id: &str) -> Result<()> {
    let session = load(config).await?;
    todolists::remove_todolist(&session.api, &session.store, id)
        .await
        .with_context(|| format!("remove todo-list '{id}'"))?;
    session.check()?;
    print_lists(&session.store.state().todolists);
    Ok(())
}

pub async fn rename(config: &Config, id: &str, title: &str) -> Result<()> {
    let session = load(config).await?;
    todolists::change_todolist_title(&session.api, &session.store, id, title)
        .await
        .with_context(|| format!("rename todo-list '{id}'"))?;
    session.check()?;
    print_lists(&session.store.state().todolists);
    Ok(())
}

fn print_lists(lists: &[TodolistDomain]) {
    if lists.is_empty() {
        println!("No todo-lists found.");
        return;
    }
    for list in lists {
        println!("{}  {}", list.id, list.title);
    }
}
