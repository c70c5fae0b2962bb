//! Command execution and output formatting.

use tracing::info;
use youtubes_core::{
    ApiClient, CreatePlaylistItemOptions, CreatePlaylistOptions, Pagination, Playlist,
    PlaylistItem,
};

use crate::cli::{Command, ItemsCommand, PageArgs, PlaylistsCommand};
use crate::error::Result;

/// Output of a command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Lines for stdout.
    pub lines: Vec<String>,
    /// Token of the page after the one printed, if any.
    pub next_page_token: Option<String>,
}

impl Report {
    fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            next_page_token: None,
        }
    }
}

/// Run a command against the API.
pub async fn execute(client: &ApiClient, command: Command) -> Result<Report> {
    match command {
        Command::Playlists(command) => execute_playlists(client, command).await,
        Command::Items(command) => execute_items(client, command).await,
    }
}

async fn execute_playlists(client: &ApiClient, command: PlaylistsCommand) -> Result<Report> {
    let playlists = client.playlists();
    match command {
        PlaylistsCommand::Mine { page } => {
            let first = playlists.get_mine(page.page_token.clone()).await?;
            collect(first, &page, format_playlist).await
        }
        PlaylistsCommand::Channel { channel_id, page } => {
            let first = playlists
                .get_by_channel_id(channel_id, page.page_token.clone())
                .await?;
            collect(first, &page, format_playlist).await
        }
        PlaylistsCommand::Show { ids } => {
            let found = playlists.get_by_ids(ids, None).await?;
            collect(found, &PageArgs { all: true, page_token: None }, format_playlist).await
        }
        PlaylistsCommand::Create {
            title,
            description,
            privacy,
        } => {
            let created = playlists
                .create(CreatePlaylistOptions {
                    description,
                    privacy,
                    ..CreatePlaylistOptions::new(title)
                })
                .await?;
            info!("Created playlist {}", created.id);
            Ok(Report::line(format_playlist(&created)))
        }
        PlaylistsCommand::Delete { id } => {
            playlists.delete_by_id(&id).await?;
            info!("Deleted playlist {id}");
            Ok(Report::line(format!("Deleted playlist {id}")))
        }
    }
}

async fn execute_items(client: &ApiClient, command: ItemsCommand) -> Result<Report> {
    let items = client.playlist_items();
    match command {
        ItemsCommand::List { playlist_id, page } => {
            let first = items
                .get_by_playlist_id(playlist_id, page.page_token.clone())
                .await?;
            collect(first, &page, format_item).await
        }
        ItemsCommand::Add {
            playlist_id,
            video_id,
            position,
        } => {
            let created = items
                .create(CreatePlaylistItemOptions {
                    playlist_id,
                    video_id,
                    position,
                })
                .await?;
            Ok(Report::line(format_item(&created)))
        }
        ItemsCommand::Remove { item_id } => {
            items.delete_by_id(&item_id).await?;
            info!("Removed playlist item {item_id}");
            Ok(Report::line(format!("Removed playlist item {item_id}")))
        }
    }
}

async fn collect<T: Clone>(
    page: Pagination<Vec<T>>,
    args: &PageArgs,
    format: fn(&T) -> String,
) -> Result<Report> {
    if args.all {
        let items = page.all_items().await?;
        return Ok(Report {
            lines: items.iter().map(format).collect(),
            next_page_token: None,
        });
    }

    let next_page_token = page.next_token().map(String::from);
    Ok(Report {
        lines: page.data().iter().map(format).collect(),
        next_page_token,
    })
}

/// One line per playlist: ID, privacy, video count and title.
pub fn format_playlist(playlist: &Playlist) -> String {
    format!(
        "{}\t{}\t{} videos\t{}",
        playlist.id, playlist.privacy, playlist.count, playlist.title
    )
}

/// One line per item: position, item ID, video ID and title.
pub fn format_item(item: &PlaylistItem) -> String {
    match item {
        PlaylistItem::Available(item) => format!(
            "{}\t{}\t{}\t{}",
            item.position, item.id, item.video_id, item.title
        ),
        PlaylistItem::Unavailable => "(unavailable)".to_string(),
    }
}
