//! Post commands.

use super::{require_auth, Context};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use dritter_api::{CreatePostRequest, Post, UpdatePostRequest};

fn print_post(post: &Post, format: &OutputFormat) {
    output::print_json_or(post, format, || {
        output::print_row("ID", &post.id.to_string());
        output::print_row("Title", &post.title);
        if let Some(author) = &post.author {
            output::print_row("Author", &author.username);
        }
        output::print_row("Created", &post.created_at.to_rfc3339());
        println!();
        println!("{}", post.content);
    });
}

/// List posts.
pub async fn posts_list(ctx: &Context, format: &OutputFormat) -> Result<()> {
    if !require_auth(ctx, "/posts", format) {
        return Ok(());
    }

    match ctx.services.posts.list().await {
        Ok(page) => match format {
            OutputFormat::Text => {
                if page.posts.is_empty() {
                    println!("No posts found");
                    return Ok(());
                }
                output::print_heading(&format!(
                    "Posts (page {} of {}, {} total)",
                    page.page, page.total_pages, page.total_count
                ));
                for post in &page.posts {
                    let author = post
                        .author
                        .as_ref()
                        .map(|a| a.username.as_str())
                        .unwrap_or("unknown");
                    println!("  {:<6} {:<30} by {}", post.id, post.title, author);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string_pretty(&page.posts) {
                    println!("{}", json);
                }
            }
        },
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Show a single post.
pub async fn posts_show(ctx: &Context, id: i64, format: &OutputFormat) -> Result<()> {
    if !require_auth(ctx, "/posts", format) {
        return Ok(());
    }

    match ctx.services.posts.get(id).await {
        Ok(single) => print_post(&single.post, format),
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Create a post.
pub async fn posts_create(
    ctx: &Context,
    title: String,
    content: String,
    format: &OutputFormat,
) -> Result<()> {
    if !require_auth(ctx, "/posts", format) {
        return Ok(());
    }

    match ctx
        .services
        .posts
        .create(&CreatePostRequest { title, content })
        .await
    {
        Ok(post) => {
            output::print_success(&format!("Created post {}", post.id), format);
        }
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Update a post.
pub async fn posts_update(
    ctx: &Context,
    id: i64,
    title: Option<String>,
    content: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    if !require_auth(ctx, "/posts", format) {
        return Ok(());
    }
    if title.is_none() && content.is_none() {
        output::print_error("Nothing to update: pass --title and/or --content", format);
        return Ok(());
    }

    match ctx
        .services
        .posts
        .update(id, &UpdatePostRequest { title, content })
        .await
    {
        Ok(post) => {
            output::print_success(&format!("Updated post {}", post.id), format);
        }
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}

/// Delete a post.
pub async fn posts_delete(ctx: &Context, id: i64, format: &OutputFormat) -> Result<()> {
    if !require_auth(ctx, "/posts", format) {
        return Ok(());
    }

    match ctx.services.posts.delete(id).await {
        Ok(()) => output::print_success(&format!("Deleted post {}", id), format),
        Err(e) => output::print_error(&e.to_string(), format),
    }

    Ok(())
}
